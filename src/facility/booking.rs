//! Room bookings

use crate::types::BookingId;
use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Format used to read and display booking start times
pub const TIME_FORMAT: &str = "%H:%M";

/// A reservation held by a single room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking
    pub id: BookingId,
    /// Time of day the booking starts
    pub start_time: NaiveTime,
    /// Length of the booking in minutes
    pub duration_minutes: u32,
    /// Office time at which the booking was made
    pub booked_at: NaiveDateTime,
}

impl Booking {
    /// Create a new booking
    pub fn new(start_time: NaiveTime, duration_minutes: u32, booked_at: NaiveDateTime) -> Self {
        Self { id: BookingId::new(), start_time, duration_minutes, booked_at }
    }

    /// Time of day the booking ends, wrapping past midnight
    pub fn end_time(&self) -> NaiveTime {
        let (end, _) = self
            .start_time
            .overflowing_add_signed(Duration::minutes(i64::from(self.duration_minutes)));
        end
    }

    /// Start time formatted as HH:mm
    pub fn start_label(&self) -> String {
        self.start_time.format(TIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booked_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    #[test]
    fn test_booking_creation() {
        let start = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        let booking = Booking::new(start, 45, booked_at());

        assert_eq!(booking.start_time, start);
        assert_eq!(booking.duration_minutes, 45);
        assert_eq!(booking.booked_at, booked_at());
        assert_eq!(booking.start_label(), "09:30");
    }

    #[test]
    fn test_end_time_same_day() {
        let booking = Booking::new(NaiveTime::from_hms_opt(14, 15, 0).unwrap(), 90, booked_at());
        assert_eq!(booking.end_time(), NaiveTime::from_hms_opt(15, 45, 0).unwrap());
    }

    #[test]
    fn test_end_time_wraps_past_midnight() {
        let booking = Booking::new(NaiveTime::from_hms_opt(23, 30, 0).unwrap(), 60, booked_at());
        assert_eq!(booking.end_time(), NaiveTime::from_hms_opt(0, 30, 0).unwrap());
    }

    #[test]
    fn test_each_booking_gets_its_own_id() {
        let start = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        let first = Booking::new(start, 30, booked_at());
        let second = Booking::new(start, 30, booked_at());
        assert_ne!(first.id, second.id);
    }
}
