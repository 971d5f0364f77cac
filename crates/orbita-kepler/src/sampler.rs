//! Discrete sampling of one orbital period.
//!
//! Each sample is independent: step `k` of `N` maps to mean anomaly
//! `2 pi k / N`, which is solved for the eccentric anomaly and projected onto
//! the orbital plane with the central mass at the origin and periapsis on +x.

use std::f64::consts::TAU;
use std::num::NonZeroU64;

use crate::elements::OrbitalElements;
use crate::error::OrbitError;
use crate::solver::KeplerSolver;

/// Planar position relative to the focus, in the units of the semimajor axis.
pub type Position = glam::DVec2;

/// Samples positions on an orbit split into a fixed number of steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitSampler {
    elements: OrbitalElements,
    total_steps: NonZeroU64,
    solver: KeplerSolver,
}

impl OrbitSampler {
    /// # Errors
    ///
    /// Returns [`OrbitError::ZeroSteps`] if `total_steps` is 0.
    pub fn new(elements: OrbitalElements, total_steps: u64) -> Result<Self, OrbitError> {
        let total_steps = NonZeroU64::new(total_steps).ok_or(OrbitError::ZeroSteps)?;
        Ok(Self {
            elements,
            total_steps,
            solver: KeplerSolver::default(),
        })
    }

    /// Replace the default solver (tolerance / iteration cap).
    pub fn with_solver(mut self, solver: KeplerSolver) -> Self {
        self.solver = solver;
        self
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps.get()
    }

    pub fn solver(&self) -> &KeplerSolver {
        &self.solver
    }

    /// Mean anomaly of `step`, `2 pi step / N`. Not wrapped into `[0, 2 pi)`.
    pub fn mean_anomaly(&self, step: u64) -> f64 {
        mean_anomaly(step, self.total_steps)
    }

    /// Elapsed time in seconds at `step`, assuming SI elements.
    pub fn time_of_step(&self, step: u64) -> f64 {
        self.elements.period() * step as f64 / self.total_steps.get() as f64
    }

    /// Position of the body at `step`.
    ///
    /// # Errors
    ///
    /// Propagates [`OrbitError::Convergence`] from the solver.
    pub fn sample(&self, step: u64) -> Result<Position, OrbitError> {
        let e_anom = self
            .solver
            .solve(self.mean_anomaly(step), self.elements.eccentricity())?;
        Ok(position_from_eccentric_anomaly(&self.elements, e_anom))
    }

    /// Samples for steps `0..N`, one full period.
    pub fn samples(&self) -> impl Iterator<Item = (u64, Result<Position, OrbitError>)> + '_ {
        (0..self.total_steps.get()).map(move |step| (step, self.sample(step)))
    }
}

/// Position at `step` of `total_steps` using the default solver.
///
/// # Errors
///
/// Propagates [`OrbitError::Convergence`] from the solver.
pub fn sample(
    step: u64,
    total_steps: NonZeroU64,
    elements: &OrbitalElements,
) -> Result<Position, OrbitError> {
    let e_anom =
        KeplerSolver::default().solve(mean_anomaly(step, total_steps), elements.eccentricity())?;
    Ok(position_from_eccentric_anomaly(elements, e_anom))
}

fn mean_anomaly(step: u64, total_steps: NonZeroU64) -> f64 {
    TAU * step as f64 / total_steps.get() as f64
}

/// Map an eccentric anomaly to focus-centered coordinates:
/// `x = a (cos E - e)`, `y = a sqrt(1 - e^2) sin E`.
pub fn position_from_eccentric_anomaly(
    elements: &OrbitalElements,
    eccentric_anomaly: f64,
) -> Position {
    let (sin_e, cos_e) = eccentric_anomaly.sin_cos();
    let a = elements.semimajor_axis();
    let e = elements.eccentricity();
    Position::new(a * (cos_e - e), elements.semiminor_axis() * sin_e)
}
