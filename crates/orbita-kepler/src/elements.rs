//! Validated orbital elements of a bound, planar Keplerian orbit.

use std::f64::consts::TAU;

use crate::error::InvalidElementsError;
use crate::units::GRAVITATIONAL_CONSTANT;

/// Shape and scale of an elliptical orbit around a central mass.
///
/// Fields are private so a constructed value always satisfies
/// `central_mass > 0`, `semimajor_axis > 0` and `0 <= eccentricity < 1`.
/// Build a new value when any parameter changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    central_mass: f64,
    semimajor_axis: f64,
    eccentricity: f64,
}

impl OrbitalElements {
    /// Validate and construct orbital elements.
    ///
    /// `central_mass` is in kilograms and `semimajor_axis` in meters when
    /// [`period`](Self::period) is needed; positions are produced in whatever
    /// length unit `semimajor_axis` uses.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidElementsError`] for a non-positive or non-finite mass
    /// or axis, or an eccentricity outside `[0, 1)`.
    pub fn new(
        central_mass: f64,
        semimajor_axis: f64,
        eccentricity: f64,
    ) -> Result<Self, InvalidElementsError> {
        if !(central_mass.is_finite() && central_mass > 0.0) {
            return Err(InvalidElementsError::CentralMass(central_mass));
        }
        if !(semimajor_axis.is_finite() && semimajor_axis > 0.0) {
            return Err(InvalidElementsError::SemimajorAxis(semimajor_axis));
        }
        check_eccentricity(eccentricity)?;

        Ok(Self {
            central_mass,
            semimajor_axis,
            eccentricity,
        })
    }

    pub fn central_mass(&self) -> f64 {
        self.central_mass
    }

    pub fn semimajor_axis(&self) -> f64 {
        self.semimajor_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// `a * sqrt(1 - e^2)`.
    pub fn semiminor_axis(&self) -> f64 {
        self.semimajor_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    /// Closest distance to the focus, `a(1 - e)`.
    pub fn periapsis_distance(&self) -> f64 {
        self.semimajor_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the focus, `a(1 + e)`.
    pub fn apoapsis_distance(&self) -> f64 {
        self.semimajor_axis * (1.0 + self.eccentricity)
    }

    /// Orbital period in seconds from Kepler's third law.
    ///
    /// Assumes SI units: mass in kilograms, semimajor axis in meters.
    pub fn period(&self) -> f64 {
        let mu = GRAVITATIONAL_CONSTANT * self.central_mass;
        TAU * (self.semimajor_axis.powi(3) / mu).sqrt()
    }

    /// Mean angular motion in radians per second.
    pub fn mean_motion(&self) -> f64 {
        TAU / self.period()
    }
}

/// Reject eccentricities that do not describe a bound ellipse.
pub(crate) fn check_eccentricity(eccentricity: f64) -> Result<(), InvalidElementsError> {
    if (0.0..1.0).contains(&eccentricity) {
        Ok(())
    } else {
        Err(InvalidElementsError::Eccentricity(eccentricity))
    }
}
