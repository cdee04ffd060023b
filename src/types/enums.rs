//! Enumeration types for the smart office tracker
//!
//! This module contains the occupancy status reported by room status queries
//! and the kinds of environment systems that react to occupancy changes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy status of a meeting room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccupancyStatus {
    /// At least one person is in the room
    Occupied,
    /// Nobody is in the room
    Unoccupied,
}

impl OccupancyStatus {
    /// Derive the status from an occupant count
    pub fn from_occupants(occupants: u32) -> Self {
        if occupants > 0 {
            OccupancyStatus::Occupied
        } else {
            OccupancyStatus::Unoccupied
        }
    }
}

impl fmt::Display for OccupancyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccupancyStatus::Occupied => write!(f, "Occupied"),
            OccupancyStatus::Unoccupied => write!(f, "Unoccupied"),
        }
    }
}

/// Environment systems attached to every room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvironmentSystemKind {
    /// Air conditioning
    AirConditioning,
    /// Room lighting
    Lighting,
}

impl fmt::Display for EnvironmentSystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentSystemKind::AirConditioning => write!(f, "AC"),
            EnvironmentSystemKind::Lighting => write!(f, "Lights"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_occupants() {
        assert_eq!(OccupancyStatus::from_occupants(0), OccupancyStatus::Unoccupied);
        assert_eq!(OccupancyStatus::from_occupants(1), OccupancyStatus::Occupied);
        assert_eq!(OccupancyStatus::from_occupants(5), OccupancyStatus::Occupied);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(OccupancyStatus::Occupied.to_string(), "Occupied");
        assert_eq!(OccupancyStatus::Unoccupied.to_string(), "Unoccupied");
    }

    #[test]
    fn test_environment_system_display() {
        assert_eq!(EnvironmentSystemKind::AirConditioning.to_string(), "AC");
        assert_eq!(EnvironmentSystemKind::Lighting.to_string(), "Lights");
    }
}
