//! Office room registry
//!
//! This module contains the OfficeFacility struct, the single owner of every
//! configured room. It resolves room numbers, applies the office-wide
//! occupancy and release rules, and stamps each change with the office clock.

use crate::facility::environment::{default_observers, OccupancyObserver};
use crate::facility::room::Room;
use crate::office_event;
use crate::system::{OfficeError, OfficeResult, TimeManager};
use crate::types::{defaults, OfficeConfig, RoomNumber};
use chrono::{Duration, NaiveTime};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument};

/// Registry of all meeting rooms in the office
#[derive(Debug, Clone)]
pub struct OfficeFacility {
    /// Rooms keyed by number, in ascending order
    rooms: BTreeMap<RoomNumber, Room>,
    /// Observers attached to every room created by `configure`
    observers: Vec<Arc<dyn OccupancyObserver>>,
    /// Clock used for occupancy and booking timestamps
    time_manager: TimeManager,
    /// Minimum people a single add must bring in to occupy a room
    min_occupants_to_occupy: u32,
    /// How long an empty booked room is held before release
    release_grace: Duration,
}

impl Default for OfficeFacility {
    fn default() -> Self {
        Self::new()
    }
}

impl OfficeFacility {
    /// Create an office with no rooms and the default rules
    pub fn new() -> Self {
        Self {
            rooms: BTreeMap::new(),
            observers: default_observers(),
            time_manager: TimeManager::new(),
            min_occupants_to_occupy: defaults::MIN_OCCUPANTS_TO_OCCUPY,
            release_grace: Duration::minutes(i64::from(defaults::RELEASE_GRACE_MINUTES)),
        }
    }

    /// Create an office using the rules in `config`
    ///
    /// Rooms are configured immediately when `config.room_count` is set.
    pub fn from_config(config: &OfficeConfig) -> OfficeResult<Self> {
        let mut office = Self::new()
            .with_min_occupants(config.min_occupants_to_occupy)
            .with_release_grace(config.release_grace());

        if let Some(count) = config.room_count {
            let summary = office.configure(i64::from(count))?;
            info!("{}", summary);
        }

        Ok(office)
    }

    /// Replace the observers attached to newly configured rooms
    pub fn with_observers(mut self, observers: Vec<Arc<dyn OccupancyObserver>>) -> Self {
        self.observers = observers;
        self
    }

    /// Use a specific clock
    pub fn with_time_manager(mut self, time_manager: TimeManager) -> Self {
        self.time_manager = time_manager;
        self
    }

    /// Set the per-call occupancy threshold
    pub fn with_min_occupants(mut self, min_occupants: u32) -> Self {
        self.min_occupants_to_occupy = min_occupants;
        self
    }

    /// Set the automatic release grace period
    pub fn with_release_grace(mut self, grace: Duration) -> Self {
        self.release_grace = grace;
        self
    }

    /// Replace all rooms with `room_count` fresh rooms numbered from 1
    ///
    /// Non-positive counts leave the office with no rooms, and the confirmation
    /// reports the number of rooms created (0), not the count requested. Counts
    /// above [`defaults::MAX_ROOMS`] are rejected and leave the rooms unchanged.
    #[instrument(skip(self))]
    pub fn configure(&mut self, room_count: i64) -> OfficeResult<String> {
        let count = match u32::try_from(room_count.max(0)) {
            Ok(value) if value <= defaults::MAX_ROOMS => value,
            _ => {
                return Err(OfficeError::InvalidRoomCount {
                    count: room_count,
                    max: defaults::MAX_ROOMS,
                })
            }
        };

        self.rooms = (1..=count)
            .map(RoomNumber::new)
            .map(|number| (number, Room::new(number, self.observers.clone())))
            .collect();

        let listing = self
            .rooms
            .keys()
            .map(|number| format!("Room {}", number))
            .collect::<Vec<_>>()
            .join(", ");

        office_event!(info, "Office configured", rooms = count);
        Ok(format!("Office configured with {} meeting rooms: {}", count, listing))
    }

    /// Set the maximum capacity of a room
    #[instrument(skip(self))]
    pub fn set_capacity(&mut self, number: RoomNumber, capacity: i64) -> OfficeResult<String> {
        let room = self.room_mut(number)?;

        let capacity = match u32::try_from(capacity) {
            Ok(value) if value > 0 => value,
            _ => return Err(OfficeError::InvalidCapacity(capacity)),
        };

        room.set_capacity(capacity);
        Ok(format!("Room {} maximum capacity set to {}.", number, capacity))
    }

    /// Add occupants to a room
    #[instrument(skip(self))]
    pub fn add_occupants(&mut self, number: RoomNumber, count: i64) -> OfficeResult<String> {
        let now = self.time_manager.now();
        let min_to_occupy = self.min_occupants_to_occupy;
        let room = self.room_mut(number)?;
        Ok(room.add_occupants(count, min_to_occupy, now))
    }

    /// Remove occupants from a room
    #[instrument(skip(self))]
    pub fn remove_occupants(&mut self, number: RoomNumber, count: u32) -> OfficeResult<String> {
        let room = self.room_mut(number)?;
        Ok(room.remove_occupants(count))
    }

    /// Release the booking of a room left empty past the grace period
    ///
    /// Returns `Ok(None)` when nothing was released.
    #[instrument(skip(self))]
    pub fn check_automatic_release(&mut self, number: RoomNumber) -> OfficeResult<Option<String>> {
        let room = self.rooms.get_mut(&number).ok_or(OfficeError::RoomNotFound(number))?;
        let released = room.check_automatic_release(&self.time_manager, self.release_grace);

        if released.is_some() {
            office_event!(info, "Booking automatically released", room = number.get());
        }
        Ok(released)
    }

    /// Book a room
    #[instrument(skip(self))]
    pub fn book_room(
        &mut self,
        number: RoomNumber,
        start_time: NaiveTime,
        duration_minutes: u32,
    ) -> OfficeResult<String> {
        let now = self.time_manager.now();
        let room = self.room_mut(number)?;

        if duration_minutes == 0 {
            return Err(OfficeError::InvalidDuration(duration_minutes));
        }

        room.book(start_time, duration_minutes, now)
    }

    /// Cancel a room's booking
    #[instrument(skip(self))]
    pub fn cancel_booking(&mut self, number: RoomNumber) -> OfficeResult<String> {
        self.room_mut(number)?.cancel_booking()
    }

    /// Report a room's occupancy, releasing a stale booking first
    #[instrument(skip(self))]
    pub fn room_status(&mut self, number: RoomNumber) -> OfficeResult<String> {
        if let Some(released) = self.check_automatic_release(number)? {
            return Ok(released);
        }

        let room = self.room(number).ok_or(OfficeError::RoomNotFound(number))?;
        Ok(format!("Room {} status: {}", number, room.status()))
    }

    /// Get a room by number
    pub fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.get(&number)
    }

    fn room_mut(&mut self, number: RoomNumber) -> OfficeResult<&mut Room> {
        self.rooms.get_mut(&number).ok_or(OfficeError::RoomNotFound(number))
    }

    /// All rooms in ascending number order
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// All room numbers in ascending order
    pub fn room_numbers(&self) -> Vec<RoomNumber> {
        self.rooms.keys().copied().collect()
    }

    /// Number of configured rooms
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Per-call occupancy threshold
    pub fn min_occupants_to_occupy(&self) -> u32 {
        self.min_occupants_to_occupy
    }

    /// Automatic release grace period
    pub fn release_grace(&self) -> Duration {
        self.release_grace
    }

    /// Office clock
    pub fn time_manager(&self) -> &TimeManager {
        &self.time_manager
    }

    /// Mutable office clock, for moving time forward
    pub fn time_manager_mut(&mut self) -> &mut TimeManager {
        &mut self.time_manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office_with_rooms(count: i64) -> OfficeFacility {
        let mut office = OfficeFacility::new();
        office.configure(count).unwrap();
        office
    }

    #[test]
    fn test_configure_lists_rooms() {
        let mut office = OfficeFacility::new();
        assert_eq!(
            office.configure(3).unwrap(),
            "Office configured with 3 meeting rooms: Room 1, Room 2, Room 3"
        );
        assert_eq!(office.room_numbers(), vec![RoomNumber(1), RoomNumber(2), RoomNumber(3)]);
        assert!(office.rooms().all(|room| room.capacity() == 0 && room.occupants() == 0));
        assert!(office.rooms().all(|room| room.observer_count() == 2));
    }

    #[test]
    fn test_configure_non_positive_counts() {
        let mut office = office_with_rooms(2);
        assert_eq!(office.configure(0).unwrap(), "Office configured with 0 meeting rooms: ");
        assert_eq!(office.room_count(), 0);

        assert_eq!(office.configure(-4).unwrap(), "Office configured with 0 meeting rooms: ");
        assert_eq!(office.room_count(), 0);
    }

    #[test]
    fn test_configure_room_limit() {
        let mut office = office_with_rooms(2);
        let max = i64::from(defaults::MAX_ROOMS);

        assert_eq!(
            office.configure(max + 1),
            Err(OfficeError::InvalidRoomCount { count: max + 1, max: defaults::MAX_ROOMS })
        );
        assert_eq!(
            office.configure(4_000_000_000),
            Err(OfficeError::InvalidRoomCount { count: 4_000_000_000, max: defaults::MAX_ROOMS })
        );
        // Rejected counts keep the existing rooms
        assert_eq!(office.room_count(), 2);

        assert!(office.configure(max).is_ok());
        assert_eq!(office.room_count(), defaults::MAX_ROOMS as usize);
    }

    #[test]
    fn test_reconfigure_discards_previous_rooms() {
        let mut office = office_with_rooms(3);
        office.add_occupants(RoomNumber(2), 4).unwrap();
        office.configure(2).unwrap();

        assert_eq!(office.room_count(), 2);
        assert_eq!(office.room(RoomNumber(2)).unwrap().occupants(), 0);
        assert!(office.room(RoomNumber(3)).is_none());
    }

    #[test]
    fn test_set_capacity() {
        let mut office = office_with_rooms(1);
        assert_eq!(
            office.set_capacity(RoomNumber(1), 8).unwrap(),
            "Room 1 maximum capacity set to 8."
        );
        assert_eq!(office.room(RoomNumber(1)).unwrap().capacity(), 8);
    }

    #[test]
    fn test_set_capacity_checks_room_before_value() {
        let mut office = office_with_rooms(1);
        assert_eq!(
            office.set_capacity(RoomNumber(5), 0),
            Err(OfficeError::RoomNotFound(RoomNumber(5)))
        );
        assert_eq!(office.set_capacity(RoomNumber(1), 0), Err(OfficeError::InvalidCapacity(0)));
        assert_eq!(office.set_capacity(RoomNumber(1), -2), Err(OfficeError::InvalidCapacity(-2)));
        assert_eq!(office.room(RoomNumber(1)).unwrap().capacity(), 0);
    }

    #[test]
    fn test_operations_on_missing_room() {
        let mut office = office_with_rooms(1);
        let missing = RoomNumber(9);
        let not_found = Err(OfficeError::RoomNotFound(missing));

        assert_eq!(office.add_occupants(missing, 3), not_found);
        assert_eq!(office.remove_occupants(missing, 3), not_found);
        assert_eq!(office.cancel_booking(missing), not_found);
        assert_eq!(office.room_status(missing), not_found);
        assert_eq!(
            office.book_room(missing, NaiveTime::from_hms_opt(9, 0, 0).unwrap(), 30),
            not_found
        );
        assert_eq!(office.check_automatic_release(missing), Err(OfficeError::RoomNotFound(missing)));
    }

    #[test]
    fn test_zero_minute_booking_is_rejected() {
        let mut office = office_with_rooms(1);
        let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert_eq!(office.book_room(RoomNumber(1), start, 0), Err(OfficeError::InvalidDuration(0)));
        assert!(!office.room(RoomNumber(1)).unwrap().is_booked());
    }

    #[test]
    fn test_status_reports_occupancy() {
        let mut office = office_with_rooms(1);
        assert_eq!(office.room_status(RoomNumber(1)).unwrap(), "Room 1 status: Unoccupied");
        office.add_occupants(RoomNumber(1), 3).unwrap();
        assert_eq!(office.room_status(RoomNumber(1)).unwrap(), "Room 1 status: Occupied");
    }

    #[test]
    fn test_status_releases_stale_booking() {
        let mut office = office_with_rooms(1);
        let room = RoomNumber(1);
        office.add_occupants(room, 2).unwrap();
        office.book_room(room, NaiveTime::from_hms_opt(9, 0, 0).unwrap(), 30).unwrap();
        office.remove_occupants(room, 2).unwrap();

        office.time_manager_mut().advance_by(Duration::minutes(6));
        assert_eq!(
            office.room_status(room).unwrap(),
            "Room 1 is now unoccupied. Booking released. AC and lights off."
        );
        assert!(!office.room(room).unwrap().is_booked());
        assert_eq!(office.room_status(room).unwrap(), "Room 1 status: Unoccupied");
    }

    #[test]
    fn test_from_config_applies_rules() {
        let config = OfficeConfig {
            room_count: Some(2),
            min_occupants_to_occupy: 3,
            release_grace_minutes: 15,
            ..OfficeConfig::default()
        };
        let office = OfficeFacility::from_config(&config).unwrap();

        assert_eq!(office.room_count(), 2);
        assert_eq!(office.min_occupants_to_occupy(), 3);
        assert_eq!(office.release_grace(), Duration::minutes(15));
    }

    #[test]
    fn test_from_config_rejects_oversized_room_count() {
        let config = OfficeConfig {
            room_count: Some(defaults::MAX_ROOMS + 1),
            ..OfficeConfig::default()
        };
        assert!(matches!(
            OfficeFacility::from_config(&config),
            Err(OfficeError::InvalidRoomCount { .. })
        ));
    }
}
