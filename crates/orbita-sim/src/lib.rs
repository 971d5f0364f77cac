//! Headless driver for the Kepler core.
//!
//! Plays one orbital period frame by frame: a [`FrameTicker`] hands out
//! steps, the [`Simulation`] samples each one, keeps the [`OrbitTrail`] and
//! streams records through a [`RecordWriter`].

pub mod error;
pub mod output;
pub mod simulation;
pub mod ticker;
pub mod trail;
pub mod view;

pub use error::SimError;
pub use output::{RecordWriter, SampleRecord};
pub use simulation::{RunSummary, Simulation};
pub use ticker::FrameTicker;
pub use trail::OrbitTrail;
pub use view::PlotBounds;
