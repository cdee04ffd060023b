//! Core types and identifiers for the smart office tracker
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the tracker.
//!
//! # Overview
//!
//! - **Identifiers**: Room numbers and UUID-based booking identifiers
//! - **Enums**: Occupancy status and environment system kinds
//! - **Configuration**: Office configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use smart_office_facility::types::*;
//!
//! let room = RoomNumber::new(1);
//! assert_eq!(room.to_string(), "1");
//!
//! let status = OccupancyStatus::from_occupants(3);
//! assert_eq!(status.to_string(), "Occupied");
//!
//! let config = OfficeConfig {
//!     room_count: Some(2),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
