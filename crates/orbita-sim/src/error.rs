//! Errors surfaced by the simulation driver.

use orbita_kepler::OrbitError;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// Invalid parameters or a failed Kepler solve.
    #[error(transparent)]
    Orbit(#[from] OrbitError),

    /// Failed to write sample records.
    #[error("failed to write samples: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode sample: {0}")]
    Json(#[from] serde_json::Error),
}
