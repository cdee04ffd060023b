//! Smart Office Facility
//!
//! Booking and occupancy tracking for the meeting rooms of a small office,
//! driven by a line-oriented text protocol.
//!
//! # Overview
//!
//! The office is configured with a number of meeting rooms. People are added to
//! and removed from rooms, rooms are booked and cancelled, and each occupancy
//! update switches the room's air conditioning and lighting. A booked room that
//! stays empty for longer than the grace period is released the next time its
//! status is queried.
//!
//! ## Quick Start
//!
//! ```rust
//! use smart_office_facility::*;
//!
//! let mut system = SmartOfficeSystem::new(OfficeFacility::new());
//!
//! assert_eq!(
//!     system.process_input("config room count 2"),
//!     "Office configured with 2 meeting rooms: Room 1, Room 2"
//! );
//! assert_eq!(
//!     system.process_input("add occupant 1 3"),
//!     "Room 1 is now occupied by 3 persons. AC and lights turned on."
//! );
//! assert_eq!(system.process_input("room status 1"), "Room 1 status: Occupied");
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enums, and configuration
//! - [`facility`]: Rooms, bookings, environment systems, and the office registry
//! - [`commands`]: Command parsing, dispatch, and the interactive session
//! - [`system`]: Errors, logging, and the office clock
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Commands   │    │  Facility   │    │   Types     │
//! │             │    │             │    │             │
//! │ Parser      │───►│ Registry    │───►│ RoomNumber  │
//! │ Interpreter │    │ Room        │    │ Status      │
//! │ Session     │    │ Observers   │    │ Config      │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        │                  │
//!        ▼                  ▼
//! ┌──────────────────────────────────┐
//! │             System               │
//! │  OfficeError · Logging · Clock   │
//! └──────────────────────────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod commands;
pub mod facility;
pub mod system;
pub mod types;

// Core types and identifiers
pub use types::{
    BookingId, CliArgs, ConfigError, ConfigValidationError, EnvironmentSystemKind,
    OccupancyStatus, OfficeConfig, RoomNumber,
};

// Facility types and functionality
pub use facility::{Booking, EnvironmentSystem, OccupancyObserver, OfficeFacility, Room};

// Command interface
pub use commands::{run_session, Command, CommandReply, SessionStats, SmartOfficeSystem};

// Runtime support
pub use system::{ErrorKind, LoggingConfig, OfficeError, OfficeResult, TimeManager};
