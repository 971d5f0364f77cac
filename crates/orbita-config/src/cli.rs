//! Command-line argument parsing for the Orbita simulator.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;
use crate::config::{LengthUnit, OutputFormat};

/// Orbita command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orbita", about = "Keplerian orbit simulator")]
pub struct CliArgs {
    /// Mass of the star in solar masses.
    #[arg(long)]
    pub mass: Option<f64>,

    /// Semimajor axis in AU.
    #[arg(long)]
    pub axis: Option<f64>,

    /// Orbital eccentricity in [0, 1).
    #[arg(long)]
    pub eccentricity: Option<f64>,

    /// Number of time steps per orbital period.
    #[arg(long)]
    pub steps: Option<u64>,

    /// Delay between frames in milliseconds.
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Pace frames in real time.
    #[arg(long)]
    pub realtime: bool,

    /// Output record format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Length unit for positions.
    #[arg(long, value_enum)]
    pub unit: Option<LengthUnit>,

    /// Kepler solver tolerance.
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Kepler solver iteration cap.
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(mass) = args.mass {
            self.orbit.star_mass_solar = mass;
        }
        if let Some(axis) = args.axis {
            self.orbit.semimajor_axis_au = axis;
        }
        if let Some(e) = args.eccentricity {
            self.orbit.eccentricity = e;
        }
        if let Some(steps) = args.steps {
            self.orbit.time_steps = steps;
        }
        if let Some(ms) = args.interval_ms {
            self.animation.frame_interval_ms = ms;
        }
        if args.realtime {
            self.animation.realtime = true;
        }
        if let Some(format) = args.format {
            self.output.format = format;
        }
        if let Some(unit) = args.unit {
            self.output.unit = unit;
        }
        if let Some(tol) = args.tolerance {
            self.solver.tolerance = tol;
        }
        if let Some(max) = args.max_iterations {
            self.solver.max_iterations = max;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
