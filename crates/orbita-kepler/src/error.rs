//! Error types for orbit construction and Kepler solving.

/// Orbital elements outside the range of a bound Keplerian orbit.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidElementsError {
    /// Central mass must be finite and strictly positive.
    #[error("central mass must be positive, got {0}")]
    CentralMass(f64),

    /// Semimajor axis must be finite and strictly positive.
    #[error("semimajor axis must be positive, got {0}")]
    SemimajorAxis(f64),

    /// Eccentricity must lie in `[0, 1)`.
    #[error("eccentricity must be in [0, 1), got {0}")]
    Eccentricity(f64),
}

/// Newton iteration ran out of iterations before meeting its tolerance.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error(
    "Kepler solve did not converge after {iterations} iterations \
     (M = {mean_anomaly}, e = {eccentricity}, residual = {residual:e})"
)]
pub struct ConvergenceError {
    /// Mean anomaly that was being solved for, in radians.
    pub mean_anomaly: f64,
    /// Eccentricity of the orbit.
    pub eccentricity: f64,
    /// Number of iterations performed.
    pub iterations: u32,
    /// Residual `E - e sin E - M` of the last iterate.
    pub residual: f64,
}

/// Any failure produced by the Kepler core.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum OrbitError {
    #[error(transparent)]
    InvalidElements(#[from] InvalidElementsError),

    #[error(transparent)]
    Convergence(#[from] ConvergenceError),

    /// A period cannot be split into zero steps.
    #[error("total step count must be greater than zero")]
    ZeroSteps,

    /// Solver tolerance must be finite and strictly positive.
    #[error("solver tolerance must be positive, got {0}")]
    InvalidTolerance(f64),
}
