//! `orbita`: samples one Keplerian orbit and prints a record per frame.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p orbita-sim -- --axis 5.2 --eccentricity 0.05 --steps 500`.

use std::io::{BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use orbita_config::{CliArgs, Config, default_config_dir};
use orbita_sim::{RecordWriter, Simulation};
use tracing::{error, info, warn};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().or_else(default_config_dir);

    // Load or create config, then apply CLI overrides
    let mut config = match &config_dir {
        Some(dir) => Config::load_or_create(dir).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}, using defaults");
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.as_ref().map(|dir| dir.join("logs"));
    orbita_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));
    if config_dir.is_none() {
        warn!("No config directory available, running with defaults");
    }

    let mut simulation = match Simulation::from_config(&config) {
        Ok(simulation) => simulation,
        Err(e) => {
            error!("Invalid simulation parameters: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    let mut writer = RecordWriter::new(BufWriter::new(stdout.lock()), config.output.format);
    match simulation.run(&mut writer) {
        Ok(summary) => {
            info!("Emitted {} samples", summary.frames);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Keep whatever was emitted before the failure.
            let _ = writer.into_inner().flush();
            error!("Simulation stopped: {e}");
            ExitCode::FAILURE
        }
    }
}
