// Smart Office Facility - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/smart-office
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/smart-office --rooms 3 --release-grace-minutes 10 --verbose
// ```

use anyhow::{anyhow, Context};
use clap::Parser;
use smart_office_facility::commands::{run_session, SmartOfficeSystem};
use smart_office_facility::facility::OfficeFacility;
use smart_office_facility::system::{LoggingConfig, LoggingGuard};
use smart_office_facility::types::config::CliArgs;
use smart_office_facility::types::OfficeConfig;
use std::io;
use std::process;
use tracing::{error, info, Level};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        match OfficeConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let _logging_guard = match init_logging(&args) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        error!("Smart office session failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Initialize logging based on CLI flags
fn init_logging(args: &CliArgs) -> anyhow::Result<LoggingGuard> {
    // Default: warnings only, so the session transcript stays readable
    let mut logging = if args.debug {
        LoggingConfig::debug()
    } else if args.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::new().with_level(Level::WARN)
    };

    if args.json_logs {
        logging = logging.with_json_format();
    }
    if let Some(dir) = &args.log_dir {
        logging = logging.with_file_logging(dir.clone());
    }

    logging.init().map_err(|e| anyhow!(e))
}

/// Load configuration, build the office, and run the session on stdin/stdout
fn run(args: CliArgs) -> anyhow::Result<()> {
    info!("Starting Smart Office Facility");

    let config = OfficeConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    info!(
        rooms = ?config.room_count,
        min_occupants = config.min_occupants_to_occupy,
        release_grace_minutes = config.release_grace_minutes,
        "Configuration loaded and validated successfully"
    );

    let office = OfficeFacility::from_config(&config).context("Failed to configure rooms")?;
    let mut system = SmartOfficeSystem::new(office);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stats = run_session(&mut system, stdin.lock(), stdout.lock(), &config.prompt)
        .context("Failed to read or write session input")?;

    info!(
        commands = stats.commands,
        successes = stats.successes(),
        failures = stats.failures,
        "Smart Office Facility completed successfully"
    );
    Ok(())
}
