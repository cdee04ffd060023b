//! Command dispatch against an owned office registry

use crate::commands::parser::Command;
use crate::facility::OfficeFacility;
use crate::system::OfficeResult;
use tracing::{debug, instrument};

/// Outcome of one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    /// Confirmation or error message shown to the user
    pub message: String,
    /// Whether the command failed
    pub failed: bool,
}

/// Interprets text commands against the office it owns
#[derive(Debug, Default)]
pub struct SmartOfficeSystem {
    office: OfficeFacility,
}

impl SmartOfficeSystem {
    /// Create an interpreter for the given office
    pub fn new(office: OfficeFacility) -> Self {
        Self { office }
    }

    /// The office being managed
    pub fn office(&self) -> &OfficeFacility {
        &self.office
    }

    /// Take back ownership of the office
    pub fn into_office(self) -> OfficeFacility {
        self.office
    }

    /// Run a parsed command
    #[instrument(skip(self, command), fields(op = command.name()))]
    pub fn execute(&mut self, command: Command) -> OfficeResult<String> {
        match command {
            Command::ConfigureRooms { count } => self.office.configure(count),
            Command::SetCapacity { room, capacity } => self.office.set_capacity(room, capacity),
            Command::AddOccupants { room, count } => self.office.add_occupants(room, count),
            Command::RemoveOccupants { room, count } => self.office.remove_occupants(room, count),
            Command::BookRoom { room, start_time, duration_minutes } => {
                self.office.book_room(room, start_time, duration_minutes)
            }
            Command::CancelBooking { room } => self.office.cancel_booking(room),
            Command::RoomStatus { room } => self.office.room_status(room),
        }
    }

    /// Parse and run one line of input
    pub fn handle(&mut self, input: &str) -> OfficeResult<String> {
        let command: Command = input.parse()?;
        debug!(%command, "Parsed command");
        self.execute(command)
    }

    /// Parse and run one line of input, logging and rendering any failure
    pub fn respond(&mut self, input: &str) -> CommandReply {
        match self.handle(input) {
            Ok(message) => CommandReply { message, failed: false },
            Err(error) => {
                error.log();
                CommandReply { message: error.to_string(), failed: true }
            }
        }
    }

    /// Parse and run one line of input, rendering failures as messages
    pub fn process_input(&mut self, input: &str) -> String {
        self.respond(input).message
    }
}
