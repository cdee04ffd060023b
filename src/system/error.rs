//! Error types and handling
//!
//! This module contains the error type returned by facility operations and the
//! command interpreter. Every variant renders as the message shown to the user.

use crate::types::RoomNumber;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while processing office commands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OfficeError {
    /// Room number is not in the registry
    #[error("Room {0} does not exist.")]
    RoomNotFound(RoomNumber),

    /// Room count is above the supported maximum
    #[error("Invalid room count {count}. Please enter a number no greater than {max}.")]
    InvalidRoomCount {
        /// Count as requested
        count: i64,
        /// Largest supported count
        max: u32,
    },

    /// Capacity must be a positive number
    #[error("Invalid capacity. Please enter a valid positive number.")]
    InvalidCapacity(i64),

    /// A numeric argument could not be parsed
    #[error("Invalid {field} '{value}'. Please enter a valid number.")]
    InvalidNumber {
        /// Name of the argument
        field: &'static str,
        /// The raw token that failed to parse
        value: String,
    },

    /// A start time was not in HH:mm format
    #[error("Invalid start time '{0}'. Please use HH:mm format.")]
    InvalidTime(String),

    /// Booking duration must be a positive number of minutes
    #[error("Invalid duration. Please enter a valid positive number of minutes.")]
    InvalidDuration(u32),

    /// A recognised command is missing one of its arguments
    #[error("Invalid command. Missing {argument} for '{command}'.")]
    MissingArgument {
        /// Command keyword as typed
        command: String,
        /// Name of the missing argument
        argument: &'static str,
    },

    /// The input does not match any command
    #[error("Invalid command. Please try again.")]
    InvalidCommand(String),

    /// The room already holds a booking
    #[error("Room {0} is already booked during this time. Cannot book.")]
    AlreadyBooked(RoomNumber),

    /// The room holds no booking to cancel
    #[error("Room {0} is not booked. Cannot cancel booking.")]
    NotBooked(RoomNumber),
}

/// Broad classification of office errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Referenced room is absent
    NotFound,
    /// Input was malformed or out of range
    InvalidArgument,
    /// Operation conflicts with the room's current state
    InvalidState,
}

impl OfficeError {
    /// Create an invalid number error
    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber { field, value: value.into() }
    }

    /// Create a missing argument error
    pub fn missing_argument(command: impl Into<String>, argument: &'static str) -> Self {
        Self::MissingArgument { command: command.into(), argument }
    }

    /// Get the error classification
    pub fn kind(&self) -> ErrorKind {
        match self {
            OfficeError::RoomNotFound(_) => ErrorKind::NotFound,
            OfficeError::InvalidRoomCount { .. }
            | OfficeError::InvalidCapacity(_)
            | OfficeError::InvalidNumber { .. }
            | OfficeError::InvalidTime(_)
            | OfficeError::InvalidDuration(_)
            | OfficeError::MissingArgument { .. }
            | OfficeError::InvalidCommand(_) => ErrorKind::InvalidArgument,
            OfficeError::AlreadyBooked(_) | OfficeError::NotBooked(_) => ErrorKind::InvalidState,
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Command errors never end a session.
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self.kind() {
            ErrorKind::NotFound => "Not Found",
            ErrorKind::InvalidArgument => "Invalid Argument",
            ErrorKind::InvalidState => "Invalid State",
        }
    }

    /// Log the error at a level matching its category
    pub fn log(&self) {
        match self.kind() {
            ErrorKind::InvalidState => warn!(category = self.category(), "{}", self),
            ErrorKind::NotFound | ErrorKind::InvalidArgument => {
                debug!(category = self.category(), "{}", self)
            }
        }
    }
}

/// Result type for office operations
pub type OfficeResult<T> = Result<T, OfficeError>;
