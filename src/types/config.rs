//! Configuration structures for the smart office tracker
//!
//! This module contains the command line arguments, the optional JSON
//! configuration file, and the validated office configuration that controls
//! occupancy thresholds and automatic booking release.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default occupancy and release rules
pub mod defaults {
    /// Minimum people a single add must bring in to mark a room occupied
    pub const MIN_OCCUPANTS_TO_OCCUPY: u32 = 2;

    /// Minutes a booked room may stay empty before its booking is released
    pub const RELEASE_GRACE_MINUTES: u32 = 5;

    /// Largest number of rooms an office can be configured with
    pub const MAX_ROOMS: u32 = 1000;

    /// Upper bound for the release grace period (one day)
    pub const MAX_RELEASE_GRACE_MINUTES: u32 = 24 * 60;

    /// Prompt written before each command in an interactive session
    pub const PROMPT: &str = "> ";
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "smart-office",
    version = "0.1.0",
    about = "Smart Office Facility - Tracks meeting room bookings and occupancy",
    long_about = "Interactive tracker for meeting room bookings and occupancy. Commands are read from standard input, one per line, until 'exit'.

COMMANDS:
    config room count <N>
    config room max capacity <room> <capacity>
    add occupant <room> <count>
    remove occupant <room> <count>
    block room <room> <HH:mm> <minutes>
    cancel room <room>
    room status <room>
    exit

EXAMPLES:
    # Start an interactive session
    smart-office

    # Start with three rooms already configured
    smart-office --rooms 3

    # Use a configuration file
    smart-office --config office.json

    # Generate configuration template
    smart-office --print-config > office.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of rooms to configure at startup
    #[arg(
        long,
        help = "Number of rooms to configure at startup",
        long_help = "Configure this many rooms before the first command is read, as if 'config room count <N>' had been entered. Range: 0-1000"
    )]
    pub rooms: Option<u32>,

    /// Minimum people a single add must bring in to occupy a room
    #[arg(
        long,
        help = "Minimum occupants per add to mark a room occupied",
        long_help = "A single 'add occupant' call must bring in at least this many people to mark the room occupied. Must be greater than 0. Default: 2"
    )]
    pub min_occupants: Option<u32>,

    /// Grace period before an empty booked room is released
    #[arg(
        long,
        help = "Minutes an empty booked room is held before release",
        long_help = "A booked room that stays unoccupied for longer than this many minutes is released on its next status query. Range: 0-1440. Default: 5"
    )]
    pub release_grace_minutes: Option<u32>,

    /// Prompt written before each command
    #[arg(long, help = "Prompt written before each command")]
    pub prompt: Option<String>,

    /// Directory for rolling log files
    #[arg(long, help = "Write daily rolling JSON logs to this directory")]
    pub log_dir: Option<String>,

    /// Emit console logs as JSON
    #[arg(long, help = "Emit console logs as JSON")]
    pub json_logs: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of rooms to configure at startup
    pub room_count: Option<u32>,

    /// Minimum people a single add must bring in to occupy a room
    pub min_occupants_to_occupy: Option<u32>,

    /// Grace period before an empty booked room is released
    pub release_grace_minutes: Option<u32>,

    /// Prompt written before each command
    pub prompt: Option<String>,
}

/// Configuration for the smart office tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeConfig {
    /// Number of rooms to configure at startup (none until configured)
    pub room_count: Option<u32>,

    /// Minimum people a single add must bring in to occupy a room
    pub min_occupants_to_occupy: u32,

    /// Grace period before an empty booked room is released
    pub release_grace_minutes: u32,

    /// Prompt written before each command
    pub prompt: String,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for office configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Occupancy threshold is invalid
    #[error("Minimum occupants to occupy must be greater than 0, got {0}")]
    InvalidOccupancyThreshold(u32),

    /// Startup room count is out of range
    #[error("Room count must be at most {max}, got {value}")]
    InvalidRoomCount {
        /// The configured room count
        value: u32,
        /// The largest accepted room count
        max: u32,
    },

    /// Release grace period is out of range
    #[error("Release grace period must be at most {max} minutes, got {value}")]
    InvalidReleaseGrace {
        /// The configured grace period
        value: u32,
        /// The largest accepted grace period
        max: u32,
    },
}

impl Default for OfficeConfig {
    fn default() -> Self {
        Self {
            room_count: None,
            min_occupants_to_occupy: defaults::MIN_OCCUPANTS_TO_OCCUPY,
            release_grace_minutes: defaults::RELEASE_GRACE_MINUTES,
            prompt: defaults::PROMPT.to_string(),
        }
    }
}

impl OfficeConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            room_count: config_file.room_count.or(defaults.room_count),
            min_occupants_to_occupy: config_file
                .min_occupants_to_occupy
                .unwrap_or(defaults.min_occupants_to_occupy),
            release_grace_minutes: config_file
                .release_grace_minutes
                .unwrap_or(defaults.release_grace_minutes),
            prompt: config_file.prompt.unwrap_or(defaults.prompt),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.rooms {
            config.room_count = Some(value);
        }
        if let Some(value) = args.min_occupants {
            config.min_occupants_to_occupy = value;
        }
        if let Some(value) = args.release_grace_minutes {
            config.release_grace_minutes = value;
        }
        if let Some(value) = args.prompt {
            config.prompt = value;
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.min_occupants_to_occupy == 0 {
            return Err(ConfigValidationError::InvalidOccupancyThreshold(
                self.min_occupants_to_occupy,
            ));
        }

        if let Some(count) = self.room_count {
            if count > defaults::MAX_ROOMS {
                return Err(ConfigValidationError::InvalidRoomCount {
                    value: count,
                    max: defaults::MAX_ROOMS,
                });
            }
        }

        if self.release_grace_minutes > defaults::MAX_RELEASE_GRACE_MINUTES {
            return Err(ConfigValidationError::InvalidReleaseGrace {
                value: self.release_grace_minutes,
                max: defaults::MAX_RELEASE_GRACE_MINUTES,
            });
        }

        Ok(())
    }

    /// Grace period as a chrono duration
    pub fn release_grace(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.release_grace_minutes))
    }
}
