//! Drives the Kepler core over one orbital period, frame by frame.

use std::io::Write;
use std::time::Duration;

use orbita_config::{Config, LengthUnit};
use orbita_kepler::{KeplerSolver, OrbitError, OrbitSampler, OrbitalElements, units};
use tracing::{debug, error, info};

use crate::error::SimError;
use crate::output::{RecordWriter, SampleRecord, to_unit};
use crate::ticker::FrameTicker;
use crate::trail::OrbitTrail;
use crate::view::PlotBounds;

/// Totals reported after a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    /// Length of the traced path, meters.
    pub path_length_m: f64,
}

/// One simulation run: SI orbit, cadence, and the accumulated trail.
pub struct Simulation {
    sampler: OrbitSampler,
    bounds: PlotBounds,
    interval: Duration,
    realtime: bool,
    unit: LengthUnit,
    trail: OrbitTrail,
}

impl Simulation {
    /// Convert the user-facing config to SI and validate it.
    ///
    /// # Errors
    ///
    /// [`SimError::Orbit`] for invalid elements, a zero step count or a bad
    /// solver tolerance.
    pub fn from_config(config: &Config) -> Result<Self, SimError> {
        let orbit = &config.orbit;
        let elements = OrbitalElements::new(
            units::solar_masses_to_kg(orbit.star_mass_solar),
            units::au_to_meters(orbit.semimajor_axis_au),
            orbit.eccentricity,
        )
        .map_err(OrbitError::from)?;

        let solver = KeplerSolver::new(config.solver.tolerance, config.solver.max_iterations)?;
        let sampler = OrbitSampler::new(elements, orbit.time_steps)?.with_solver(solver);
        let trail_limit = usize::try_from(orbit.time_steps).unwrap_or(usize::MAX);

        Ok(Self {
            sampler,
            bounds: PlotBounds::for_orbit(&elements, config.animation.plot_padding),
            interval: Duration::from_millis(config.animation.frame_interval_ms),
            realtime: config.animation.realtime,
            unit: config.output.unit,
            trail: OrbitTrail::with_limit(trail_limit),
        })
    }

    pub fn sampler(&self) -> &OrbitSampler {
        &self.sampler
    }

    /// Plot limits in meters.
    pub fn bounds(&self) -> PlotBounds {
        self.bounds
    }

    pub fn trail(&self) -> &OrbitTrail {
        &self.trail
    }

    /// Sample every step of one period, appending to the trail and writing
    /// one record per frame.
    ///
    /// # Errors
    ///
    /// Stops at the first failed solve or write.
    pub fn run<W: Write>(
        &mut self,
        writer: &mut RecordWriter<W>,
    ) -> Result<RunSummary, SimError> {
        let elements = self.sampler.elements();
        let (min, max) = self.bounds.x_range();
        let (min, max) = (to_unit(min, self.unit), to_unit(max, self.unit));
        info!(
            "Orbit a={:.4e} m, e={}, period={:.4e} s, {} steps",
            elements.semimajor_axis(),
            elements.eccentricity(),
            elements.period(),
            self.sampler.total_steps()
        );
        info!("Plot limits [{min:.4}, {max:.4}] {:?}", self.unit);

        self.trail.clear();
        let ticker = FrameTicker::new(self.sampler.total_steps(), self.interval, self.realtime);
        let mut frames = 0;
        for step in ticker {
            let position = self.sampler.sample(step).inspect_err(|err| {
                error!("Sampling step {step} failed: {err}");
            })?;
            debug!("step {step}: ({:.6e}, {:.6e})", position.x, position.y);

            self.trail.push(position);
            let record =
                SampleRecord::new(step, self.sampler.time_of_step(step), position, self.unit);
            writer.write(&record)?;
            frames += 1;
        }
        writer.flush()?;

        let summary = RunSummary {
            frames,
            path_length_m: self.trail.path_length(),
        };
        info!(
            "Finished {} frames, path length {:.4e} m",
            summary.frames, summary.path_length_m
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use orbita_config::OutputFormat;
    use orbita_kepler::InvalidElementsError;

    fn config(e: f64, steps: u64) -> Config {
        let mut config = Config::default();
        config.orbit.eccentricity = e;
        config.orbit.time_steps = steps;
        config
    }

    #[test]
    fn test_invalid_eccentricity_fails_before_sampling() {
        let err = Simulation::from_config(&config(1.0, 10)).err().unwrap();
        assert!(matches!(
            err,
            SimError::Orbit(OrbitError::InvalidElements(InvalidElementsError::Eccentricity(_)))
        ));
    }

    #[test]
    fn test_zero_steps_fail() {
        assert!(matches!(
            Simulation::from_config(&config(0.1, 0)),
            Err(SimError::Orbit(OrbitError::ZeroSteps))
        ));
    }

    #[test]
    fn test_run_writes_one_record_per_step() {
        let mut sim = Simulation::from_config(&config(0.5, 8)).unwrap();
        let mut writer = RecordWriter::new(Vec::new(), OutputFormat::Csv);
        let summary = sim.run(&mut writer).unwrap();
        assert_eq!(summary.frames, 8);
        assert_eq!(sim.trail().len(), 8);

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        // Periapsis at 0.5 AU on +x.
        assert_eq!(lines[1], "0,0,0.5,0");
    }

    #[test]
    fn test_trail_stays_within_bounds() {
        let mut sim = Simulation::from_config(&config(0.9, 1000)).unwrap();
        let mut writer = RecordWriter::new(std::io::sink(), OutputFormat::Json);
        sim.run(&mut writer).unwrap();
        let bounds = sim.bounds();
        assert!(sim.trail().positions().iter().all(|p| bounds.contains(*p)));
    }

    #[test]
    fn test_rerun_restarts_trail() {
        let mut sim = Simulation::from_config(&config(0.0, 16)).unwrap();
        let mut writer = RecordWriter::new(std::io::sink(), OutputFormat::Csv);
        sim.run(&mut writer).unwrap();
        let summary = sim.run(&mut writer).unwrap();
        assert_eq!(sim.trail().len(), 16);
        // 16-gon inscribed in a 1 AU circle, open at the last edge.
        let chord = 2.0 * units::AU_METERS * (std::f64::consts::PI / 16.0).sin();
        assert_relative_eq!(summary.path_length_m, 15.0 * chord, max_relative = 1e-9);
    }

    #[test]
    fn test_convergence_failure_is_reported() {
        let mut cfg = config(0.5, 8);
        cfg.solver.max_iterations = 0;
        let mut sim = Simulation::from_config(&cfg).unwrap();
        let mut writer = RecordWriter::new(Vec::new(), OutputFormat::Csv);
        assert!(matches!(
            sim.run(&mut writer),
            Err(SimError::Orbit(OrbitError::Convergence(_)))
        ));
        // Step 0 needs no iterations and was written before the failure.
        assert_eq!(sim.trail().len(), 1);
    }
}
