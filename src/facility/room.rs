//! Meeting room state and occupancy tracking
//!
//! This module contains the Room struct, which tracks occupants, holds at most
//! one booking, and notifies its environment observers when occupancy changes.

use crate::facility::booking::{Booking, TIME_FORMAT};
use crate::facility::environment::OccupancyObserver;
use crate::system::{OfficeError, OfficeResult, TimeManager};
use crate::types::{OccupancyStatus, RoomNumber};
use chrono::{Duration, NaiveDateTime, NaiveTime};
use std::sync::Arc;
use tracing::{debug, warn};

/// Represents a meeting room in the office
#[derive(Debug, Clone)]
pub struct Room {
    /// Room number assigned at configuration time
    number: RoomNumber,
    /// Maximum capacity (0 until set)
    capacity: u32,
    /// Current number of people in the room
    occupants: u32,
    /// Current booking, if any
    booking: Option<Booking>,
    /// When occupants were last added
    last_occupied: Option<NaiveDateTime>,
    /// Environment systems notified on occupancy updates
    observers: Vec<Arc<dyn OccupancyObserver>>,
}

impl Room {
    /// Create an empty, unbooked room with the given observers
    pub fn new(number: RoomNumber, observers: Vec<Arc<dyn OccupancyObserver>>) -> Self {
        Self { number, capacity: 0, occupants: 0, booking: None, last_occupied: None, observers }
    }

    /// Room number
    pub fn number(&self) -> RoomNumber {
        self.number
    }

    /// Maximum capacity (0 until set)
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Check if a capacity has been set
    pub fn is_configured(&self) -> bool {
        self.capacity > 0
    }

    /// Set the maximum capacity
    pub fn set_capacity(&mut self, capacity: u32) {
        self.capacity = capacity;
    }

    /// Current number of occupants
    pub fn occupants(&self) -> u32 {
        self.occupants
    }

    /// Check if anyone is in the room
    pub fn is_occupied(&self) -> bool {
        self.occupants > 0
    }

    /// Current occupancy status
    pub fn status(&self) -> OccupancyStatus {
        OccupancyStatus::from_occupants(self.occupants)
    }

    /// Current booking, if any
    pub fn booking(&self) -> Option<&Booking> {
        self.booking.as_ref()
    }

    /// Check if the room holds a booking
    pub fn is_booked(&self) -> bool {
        self.booking.is_some()
    }

    /// When occupants were last added
    pub fn last_occupied(&self) -> Option<NaiveDateTime> {
        self.last_occupied
    }

    /// Number of attached observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Add occupants to the room
    ///
    /// A single call must bring in at least `min_to_occupy` people; smaller
    /// groups are turned away without touching the room's state, even when the
    /// room is already occupied.
    /// Negative counts are always below the threshold.
    pub fn add_occupants(&mut self, count: i64, min_to_occupy: u32, now: NaiveDateTime) -> String {
        if count < i64::from(min_to_occupy) {
            debug!(room = self.number.get(), count, min_to_occupy, "Occupancy below threshold");
            return format!("Room {} occupancy insufficient to mark as occupied.", self.number);
        }

        let count = u32::try_from(count).unwrap_or(u32::MAX);
        self.occupants = self.occupants.saturating_add(count);
        self.last_occupied = Some(now);

        if self.is_configured() && self.occupants > self.capacity {
            warn!(
                room = self.number.get(),
                occupants = self.occupants,
                capacity = self.capacity,
                "Room is over its maximum capacity"
            );
        }

        self.notify_observers(true);
        format!(
            "Room {} is now occupied by {} persons. AC and lights turned on.",
            self.number, self.occupants
        )
    }

    /// Remove occupants from the room, never going below zero
    pub fn remove_occupants(&mut self, count: u32) -> String {
        self.occupants = self.occupants.saturating_sub(count);

        if self.occupants == 0 {
            self.notify_observers(false);
            return format!("Room {} is now unoccupied. AC and lights turned off.", self.number);
        }

        format!("Room {} now has {} occupants.", self.number, self.occupants)
    }

    /// Book the room
    pub fn book(
        &mut self,
        start_time: NaiveTime,
        duration_minutes: u32,
        now: NaiveDateTime,
    ) -> OfficeResult<String> {
        if self.booking.is_some() {
            return Err(OfficeError::AlreadyBooked(self.number));
        }

        let booking = Booking::new(start_time, duration_minutes, now);
        let message = format!(
            "Room {} booked from {} for {} minutes.",
            self.number,
            booking.start_label(),
            booking.duration_minutes
        );
        debug!(
            room = self.number.get(),
            booking = %booking.id,
            ends = %booking.end_time().format(TIME_FORMAT),
            "Booking created"
        );
        self.booking = Some(booking);
        Ok(message)
    }

    /// Cancel the room's booking
    pub fn cancel_booking(&mut self) -> OfficeResult<String> {
        match self.booking.take() {
            Some(booking) => {
                debug!(room = self.number.get(), booking = %booking.id, "Booking cancelled");
                Ok(format!("Booking for Room {} cancelled successfully.", self.number))
            }
            None => Err(OfficeError::NotBooked(self.number)),
        }
    }

    /// Release the booking of a room left empty for longer than `grace`
    ///
    /// The idle period is measured from the last time occupants were added, or
    /// from when the booking was made if nobody ever arrived. Returns the
    /// release message when the booking was cleared.
    pub fn check_automatic_release(
        &mut self,
        clock: &TimeManager,
        grace: Duration,
    ) -> Option<String> {
        if self.is_occupied() {
            return None;
        }

        let booking = self.booking.as_ref()?;
        let idle_since = self.last_occupied.unwrap_or(booking.booked_at);

        if clock.has_elapsed(idle_since, grace) {
            if let Some(released) = self.booking.take() {
                debug!(room = self.number.get(), booking = %released.id, "Booking released");
            }
            return Some(format!(
                "Room {} is now unoccupied. Booking released. AC and lights off.",
                self.number
            ));
        }

        None
    }

    fn notify_observers(&self, occupied: bool) {
        for observer in &self.observers {
            observer.update(self.number, occupied);
        }
    }
}
