//! Text command parsing
//!
//! Commands are whitespace-delimited. Keywords match case-insensitively and
//! any tokens after a complete command are ignored.

use crate::facility::TIME_FORMAT;
use crate::system::{OfficeError, OfficeResult};
use crate::types::RoomNumber;
use chrono::NaiveTime;
use std::fmt;
use std::str::FromStr;

/// A parsed office command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `config room count <N>`
    ConfigureRooms {
        /// Requested number of rooms
        count: i64,
    },
    /// `config room max capacity <room> <capacity>`
    SetCapacity {
        /// Target room
        room: RoomNumber,
        /// Requested capacity
        capacity: i64,
    },
    /// `add occupant <room> <count>`
    AddOccupants {
        /// Target room
        room: RoomNumber,
        /// People entering
        count: i64,
    },
    /// `remove occupant <room> <count>`
    RemoveOccupants {
        /// Target room
        room: RoomNumber,
        /// People leaving
        count: u32,
    },
    /// `block room <room> <HH:mm> <minutes>`
    BookRoom {
        /// Target room
        room: RoomNumber,
        /// Booking start time
        start_time: NaiveTime,
        /// Booking length in minutes
        duration_minutes: u32,
    },
    /// `cancel room <room>`
    CancelBooking {
        /// Target room
        room: RoomNumber,
    },
    /// `room status <room>`
    RoomStatus {
        /// Target room
        room: RoomNumber,
    },
}

impl Command {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::ConfigureRooms { .. } => "configure_rooms",
            Command::SetCapacity { .. } => "set_capacity",
            Command::AddOccupants { .. } => "add_occupants",
            Command::RemoveOccupants { .. } => "remove_occupants",
            Command::BookRoom { .. } => "book_room",
            Command::CancelBooking { .. } => "cancel_booking",
            Command::RoomStatus { .. } => "room_status",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ConfigureRooms { count } => write!(f, "config room count {}", count),
            Command::SetCapacity { room, capacity } => {
                write!(f, "config room max capacity {} {}", room, capacity)
            }
            Command::AddOccupants { room, count } => write!(f, "add occupant {} {}", room, count),
            Command::RemoveOccupants { room, count } => {
                write!(f, "remove occupant {} {}", room, count)
            }
            Command::BookRoom { room, start_time, duration_minutes } => write!(
                f,
                "block room {} {} {}",
                room,
                start_time.format(TIME_FORMAT),
                duration_minutes
            ),
            Command::CancelBooking { room } => write!(f, "cancel room {}", room),
            Command::RoomStatus { room } => write!(f, "room status {}", room),
        }
    }
}

impl FromStr for Command {
    type Err = OfficeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = Tokens::new(s);
        let invalid = || OfficeError::InvalidCommand(s.trim().to_string());

        let head = tokens.get(0).ok_or_else(invalid)?.to_lowercase();
        match head.as_str() {
            "config" if tokens.keywords(1, &["room", "count"]) => {
                let count = tokens.required(3, "config room count", "room count")?;
                Ok(Command::ConfigureRooms { count: parse_number(count, "room count")? })
            }
            "config" if tokens.keywords(1, &["room", "max", "capacity"]) => {
                let command = "config room max capacity";
                let room = parse_room(tokens.required(4, command, "room number")?)?;
                let capacity = tokens.required(5, command, "capacity")?;
                Ok(Command::SetCapacity { room, capacity: parse_number(capacity, "capacity")? })
            }
            "add" if tokens.keywords(1, &["occupant"]) => {
                let room = parse_room(tokens.required(2, "add occupant", "room number")?)?;
                let count = tokens.required(3, "add occupant", "occupant count")?;
                Ok(Command::AddOccupants { room, count: parse_number(count, "occupant count")? })
            }
            "remove" if tokens.keywords(1, &["occupant"]) => {
                let room = parse_room(tokens.required(2, "remove occupant", "room number")?)?;
                let count = tokens.required(3, "remove occupant", "occupant count")?;
                Ok(Command::RemoveOccupants { room, count: parse_number(count, "occupant count")? })
            }
            "block" if tokens.keywords(1, &["room"]) => {
                let room = parse_room(tokens.required(2, "block room", "room number")?)?;
                let start = tokens.required(3, "block room", "start time")?;
                let duration = tokens.required(4, "block room", "duration")?;
                Ok(Command::BookRoom {
                    room,
                    start_time: parse_time(start)?,
                    duration_minutes: parse_number(duration, "duration")?,
                })
            }
            "cancel" if tokens.keywords(1, &["room"]) => {
                let room = parse_room(tokens.required(2, "cancel room", "room number")?)?;
                Ok(Command::CancelBooking { room })
            }
            "room" if tokens.keywords(1, &["status"]) => {
                let room = parse_room(tokens.required(2, "room status", "room number")?)?;
                Ok(Command::RoomStatus { room })
            }
            _ => Err(invalid()),
        }
    }
}

/// Whitespace-split view of one input line
struct Tokens<'a> {
    parts: Vec<&'a str>,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str) -> Self {
        Self { parts: line.split_whitespace().collect() }
    }

    fn get(&self, index: usize) -> Option<&'a str> {
        self.parts.get(index).copied()
    }

    /// Check that the tokens starting at `start` spell out `expected`
    fn keywords(&self, start: usize, expected: &[&str]) -> bool {
        expected.iter().enumerate().all(|(offset, keyword)| {
            self.get(start + offset).is_some_and(|token| token.eq_ignore_ascii_case(keyword))
        })
    }

    fn required(
        &self,
        index: usize,
        command: &str,
        argument: &'static str,
    ) -> OfficeResult<&'a str> {
        self.get(index).ok_or_else(|| OfficeError::missing_argument(command, argument))
    }
}

fn parse_room(token: &str) -> OfficeResult<RoomNumber> {
    token.parse().map_err(|_| OfficeError::invalid_number("room number", token))
}

fn parse_number<T: FromStr>(token: &str, field: &'static str) -> OfficeResult<T> {
    token.parse().map_err(|_| OfficeError::invalid_number(field, token))
}

fn parse_time(token: &str) -> OfficeResult<NaiveTime> {
    NaiveTime::parse_from_str(token, TIME_FORMAT)
        .map_err(|_| OfficeError::InvalidTime(token.to_string()))
}
