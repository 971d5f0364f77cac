//! Configuration for the Orbita simulator.
//!
//! Settings persist to disk as `config.ron` and can be overridden from the
//! command line. Values here are in user-facing units (solar masses, AU);
//! conversion to SI happens before they reach the Kepler core.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    AnimationConfig, Config, DebugConfig, LengthUnit, OrbitConfig, OutputConfig, OutputFormat,
    SolverConfig, default_config_dir,
};
pub use error::ConfigError;
