//! Environment systems that react to room occupancy
//!
//! Every room carries the same fixed pair of observers: air conditioning and
//! lighting. They are notified synchronously, in attachment order, whenever a
//! room's occupancy is updated.

use crate::types::{EnvironmentSystemKind, RoomNumber};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Listener notified when a room's occupancy changes
pub trait OccupancyObserver: fmt::Debug + Send + Sync {
    /// React to the room becoming occupied (`true`) or unoccupied (`false`)
    fn update(&self, room: RoomNumber, occupied: bool);
}

/// Simulated building system switched on and off by occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentSystem {
    kind: EnvironmentSystemKind,
}

impl EnvironmentSystem {
    /// Create an environment system of the given kind
    pub fn new(kind: EnvironmentSystemKind) -> Self {
        Self { kind }
    }

    /// Air conditioning system
    pub fn air_conditioning() -> Self {
        Self::new(EnvironmentSystemKind::AirConditioning)
    }

    /// Lighting system
    pub fn lighting() -> Self {
        Self::new(EnvironmentSystemKind::Lighting)
    }

    /// Kind of system
    pub fn kind(&self) -> EnvironmentSystemKind {
        self.kind
    }

    /// Action line reported for an occupancy update, e.g. "AC turned on."
    pub fn action(&self, occupied: bool) -> String {
        format!("{} turned {}.", self.kind, if occupied { "on" } else { "off" })
    }
}

impl OccupancyObserver for EnvironmentSystem {
    fn update(&self, room: RoomNumber, occupied: bool) {
        info!(room = room.get(), system = %self.kind, occupied, "{}", self.action(occupied));
    }
}

/// The AC and lighting pair attached to every new room
pub fn default_observers() -> Vec<Arc<dyn OccupancyObserver>> {
    vec![
        Arc::new(EnvironmentSystem::air_conditioning()),
        Arc::new(EnvironmentSystem::lighting()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_lines() {
        let ac = EnvironmentSystem::air_conditioning();
        let lights = EnvironmentSystem::lighting();

        assert_eq!(ac.action(true), "AC turned on.");
        assert_eq!(ac.action(false), "AC turned off.");
        assert_eq!(lights.action(true), "Lights turned on.");
        assert_eq!(lights.action(false), "Lights turned off.");
    }

    #[test]
    fn test_default_observers_are_ac_then_lighting() {
        let observers = default_observers();
        assert_eq!(observers.len(), 2);

        let described: Vec<String> = observers.iter().map(|o| format!("{:?}", o)).collect();
        assert!(described[0].contains("AirConditioning"));
        assert!(described[1].contains("Lighting"));
    }

    #[test]
    fn test_update_does_not_panic_without_subscriber() {
        let ac = EnvironmentSystem::air_conditioning();
        ac.update(RoomNumber(1), true);
        ac.update(RoomNumber(1), false);
    }
}
