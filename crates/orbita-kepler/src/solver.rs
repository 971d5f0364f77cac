//! Newton-Raphson solver for Kepler's equation `M = E - e sin E`.
//!
//! Iteration starts from `E = M` and stops once the residual
//! `|E - e sin E - M|` drops below the tolerance. The root always lies in
//! `[M - e, M + e]`; the bracket is narrowed on every step and any Newton
//! step that would leave it is replaced by bisection, so the iteration cannot
//! wander off for eccentricities close to 1.

use crate::elements::check_eccentricity;
use crate::error::{ConvergenceError, OrbitError};

/// Default absolute tolerance on the Kepler residual.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default cap on Newton iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Result of a successful solve together with the work it took.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    /// Eccentric anomaly in radians.
    pub eccentric_anomaly: f64,
    /// Newton/bisection steps taken (0 when the initial guess already fits).
    pub iterations: u32,
    /// Residual `E - e sin E - M` at the returned anomaly.
    pub residual: f64,
}

/// Bounded Kepler equation solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolver {
    tolerance: f64,
    max_iterations: u32,
}

impl KeplerSolver {
    /// Create a solver with a custom tolerance and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::InvalidTolerance`] unless `tolerance` is finite
    /// and strictly positive.
    pub fn new(tolerance: f64, max_iterations: u32) -> Result<Self, OrbitError> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(OrbitError::InvalidTolerance(tolerance));
        }
        Ok(Self {
            tolerance,
            max_iterations,
        })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Solve for the eccentric anomaly (radians) of `mean_anomaly`.
    ///
    /// # Errors
    ///
    /// [`OrbitError::InvalidElements`] for an eccentricity outside `[0, 1)`,
    /// [`OrbitError::Convergence`] when the iteration cap is reached.
    pub fn solve(&self, mean_anomaly: f64, eccentricity: f64) -> Result<f64, OrbitError> {
        self.solve_with_stats(mean_anomaly, eccentricity)
            .map(|solution| solution.eccentric_anomaly)
    }

    /// Like [`solve`](Self::solve) but also reports iterations and residual.
    pub fn solve_with_stats(
        &self,
        mean_anomaly: f64,
        eccentricity: f64,
    ) -> Result<Solution, OrbitError> {
        check_eccentricity(eccentricity)?;

        let mut e_anom = mean_anomaly;
        let mut lo = mean_anomaly - eccentricity;
        let mut hi = mean_anomaly + eccentricity;
        let mut residual = kepler_residual(e_anom, eccentricity, mean_anomaly);

        for iteration in 0..self.max_iterations {
            if residual.abs() < self.tolerance {
                return Ok(Solution {
                    eccentric_anomaly: e_anom,
                    iterations: iteration,
                    residual,
                });
            }

            // f is strictly increasing, so its sign tells which side the root is on.
            if residual > 0.0 {
                hi = e_anom;
            } else {
                lo = e_anom;
            }

            let derivative = 1.0 - eccentricity * e_anom.cos();
            let newton = e_anom - residual / derivative;
            e_anom = if newton > lo && newton < hi {
                newton
            } else {
                0.5 * (lo + hi)
            };
            residual = kepler_residual(e_anom, eccentricity, mean_anomaly);
        }

        if residual.abs() < self.tolerance {
            return Ok(Solution {
                eccentric_anomaly: e_anom,
                iterations: self.max_iterations,
                residual,
            });
        }

        Err(ConvergenceError {
            mean_anomaly,
            eccentricity,
            iterations: self.max_iterations,
            residual,
        }
        .into())
    }
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Solve Kepler's equation with the default tolerance and iteration cap.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> Result<f64, OrbitError> {
    KeplerSolver::default().solve(mean_anomaly, eccentricity)
}

/// `E - e sin E - M`.
#[inline]
pub fn kepler_residual(eccentric_anomaly: f64, eccentricity: f64, mean_anomaly: f64) -> f64 {
    eccentric_anomaly - eccentricity * eccentric_anomaly.sin() - mean_anomaly
}
