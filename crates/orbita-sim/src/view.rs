//! Square plot window sized to fit the whole orbit.

use orbita_kepler::{OrbitalElements, Position};

/// Default padding beyond the apoapsis, 20%.
pub const DEFAULT_PLOT_PADDING: f64 = 0.2;

/// Symmetric plot limits centered on the star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    half_extent: f64,
}

impl PlotBounds {
    /// Limits of `±a(1 + e)(1 + padding)`, so the apoapsis stays in view.
    pub fn for_orbit(elements: &OrbitalElements, padding: f64) -> Self {
        Self {
            half_extent: elements.apoapsis_distance() * (1.0 + padding.max(0.0)),
        }
    }

    pub fn half_extent(&self) -> f64 {
        self.half_extent
    }

    /// `(min, max)` along x; the y range is identical.
    pub fn x_range(&self) -> (f64, f64) {
        (-self.half_extent, self.half_extent)
    }

    pub fn y_range(&self) -> (f64, f64) {
        self.x_range()
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x.abs() <= self.half_extent && position.y.abs() <= self.half_extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_pad_apoapsis() {
        let el = OrbitalElements::new(1.0, 2.0, 0.5).unwrap();
        let bounds = PlotBounds::for_orbit(&el, DEFAULT_PLOT_PADDING);
        assert!((bounds.half_extent() - 2.0 * 1.5 * 1.2).abs() < 1e-12);
        assert_eq!(bounds.y_range(), bounds.x_range());
    }

    #[test]
    fn test_contains_apoapsis() {
        let el = OrbitalElements::new(1.0, 1.0, 0.3).unwrap();
        let bounds = PlotBounds::for_orbit(&el, 0.0);
        assert!(bounds.contains(Position::new(-1.29, 0.0)));
        assert!(!bounds.contains(Position::new(-1.4, 0.0)));
    }

    #[test]
    fn test_negative_padding_is_ignored() {
        let el = OrbitalElements::new(1.0, 1.0, 0.0).unwrap();
        assert_eq!(PlotBounds::for_orbit(&el, -1.0).half_extent(), 1.0);
    }
}
