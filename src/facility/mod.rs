//! Facility and room management
//!
//! This module manages the office's meeting rooms, their bookings, and the
//! environment systems that react to occupancy.
//!
//! # Overview
//!
//! - **OfficeFacility**: Registry owning every configured room
//! - **Room**: Occupant count, capacity, booking, and observers of one room
//! - **Booking**: A single reservation with start time and duration
//! - **EnvironmentSystem**: AC and lighting observers notified on occupancy updates
//!
//! # Usage Example
//!
//! ```rust
//! use smart_office_facility::facility::*;
//! use smart_office_facility::types::RoomNumber;
//!
//! let mut office = OfficeFacility::new();
//! office.configure(2).unwrap();
//!
//! let message = office.add_occupants(RoomNumber::new(1), 3).unwrap();
//! assert_eq!(message, "Room 1 is now occupied by 3 persons. AC and lights turned on.");
//!
//! let status = office.room_status(RoomNumber::new(1)).unwrap();
//! assert_eq!(status, "Room 1 status: Occupied");
//! ```

pub mod booking;
pub mod environment;
pub mod registry;
pub mod room;

// Re-export all public types for convenience
pub use booking::{Booking, TIME_FORMAT};
pub use environment::{default_observers, EnvironmentSystem, OccupancyObserver};
pub use registry::OfficeFacility;
pub use room::Room;
