//! Keplerian orbit core: Kepler equation solving and planar orbit sampling.
//!
//! The crate is pure and synchronous. [`KeplerSolver`] turns a mean anomaly
//! into an eccentric anomaly, and [`OrbitSampler`] maps the steps of one
//! discretized period onto focus-centered positions. Accumulating positions
//! into a trail or scaling them onto a plot is left to the caller.
//!
//! ```
//! use orbita_kepler::{OrbitSampler, OrbitalElements};
//!
//! let elements = OrbitalElements::new(1.0, 1.0, 0.5).unwrap();
//! let sampler = OrbitSampler::new(elements, 100).unwrap();
//! let periapsis = sampler.sample(0).unwrap();
//! assert_eq!(periapsis.x, 0.5);
//! ```

mod elements;
mod error;
mod sampler;
mod solver;
pub mod units;

pub use elements::OrbitalElements;
pub use error::{ConvergenceError, InvalidElementsError, OrbitError};
pub use sampler::{OrbitSampler, Position, position_from_eccentric_anomaly, sample};
pub use solver::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, KeplerSolver, Solution, kepler_residual,
    solve_kepler,
};
