//! Runtime support for the tracker
//!
//! This module contains error handling, logging setup, and the office clock.
//!
//! - **OfficeError**: Error type for every office command, classified by [`ErrorKind`]
//! - **LoggingConfig**: Tracing subscriber setup for console and file logs
//! - **TimeManager**: Wall clock with an adjustable offset

pub mod error;
pub mod logging;
pub mod time_manager;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use time_manager::*;
