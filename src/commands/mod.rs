//! Text command interface
//!
//! This module turns lines of text into office operations.
//!
//! - **Command**: Parsed form of one input line
//! - **SmartOfficeSystem**: Dispatches commands to the office it owns
//! - **run_session**: Reads commands until `exit` and writes each result
//!
//! # Usage Example
//!
//! ```rust
//! use smart_office_facility::commands::SmartOfficeSystem;
//! use smart_office_facility::facility::OfficeFacility;
//!
//! let mut system = SmartOfficeSystem::new(OfficeFacility::new());
//! system.process_input("config room count 1");
//! system.process_input("block room 1 09:00 30");
//!
//! assert_eq!(
//!     system.process_input("block room 1 10:00 30"),
//!     "Room 1 is already booked during this time. Cannot book."
//! );
//! ```

pub mod interpreter;
pub mod parser;
pub mod session;

// Re-export all public types for convenience
pub use interpreter::{CommandReply, SmartOfficeSystem};
pub use parser::Command;
pub use session::{run_session, SessionStats, FAREWELL_BANNER, INSTRUCTIONS, WELCOME_BANNER};
