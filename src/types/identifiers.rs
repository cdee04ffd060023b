//! Identifier types for the smart office tracker
//!
//! Rooms are identified by the sequential number assigned when the office is
//! configured. Bookings carry a UUID so individual reservations can be traced
//! through the logs.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Sequential number of a meeting room, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(pub u32);

impl RoomNumber {
    /// Create a room number
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Get the raw number
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoomNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl FromStr for RoomNumber {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

/// Unique identifier for a room booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookingId(pub Uuid);

impl BookingId {
    /// Create a new random booking ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BOOK_{}", self.0.simple())
    }
}

impl Serialize for BookingId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("BOOK_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for BookingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let raw = s.strip_prefix("BOOK_").unwrap_or(&s);
        let uuid = Uuid::parse_str(raw).map_err(serde::de::Error::custom)?;
        Ok(BookingId(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_number_display_is_bare_number() {
        assert_eq!(RoomNumber::new(7).to_string(), "7");
        assert_eq!(RoomNumber::from(12).get(), 12);
    }

    #[test]
    fn test_room_number_parsing() {
        assert_eq!("3".parse::<RoomNumber>().unwrap(), RoomNumber(3));
        assert!("-1".parse::<RoomNumber>().is_err());
        assert!("three".parse::<RoomNumber>().is_err());
    }

    #[test]
    fn test_room_number_serializes_as_plain_number() {
        let json = serde_json::to_string(&RoomNumber(4)).unwrap();
        assert_eq!(json, "4");
        let parsed: RoomNumber = serde_json::from_str("9").unwrap();
        assert_eq!(parsed, RoomNumber(9));
    }

    #[test]
    fn test_booking_id_uniqueness_and_format() {
        let first = BookingId::new();
        let second = BookingId::new();
        assert_ne!(first, second);
        assert!(first.to_string().starts_with("BOOK_"));
    }

    #[test]
    fn test_booking_id_serde_accepts_raw_uuid() {
        let id = BookingId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: BookingId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);

        let raw = format!("\"{}\"", id.0);
        let from_raw: BookingId = serde_json::from_str(&raw).unwrap();
        assert_eq!(id, from_raw);
    }
}
