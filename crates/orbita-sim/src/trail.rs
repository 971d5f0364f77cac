//! Ordered history of sampled positions, drawn as the orbit trail.

use orbita_kepler::Position;

/// Positions in the order they were produced.
///
/// With a capacity limit the oldest positions are dropped first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrbitTrail {
    positions: Vec<Position>,
    limit: Option<usize>,
}

impl OrbitTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// A trail that keeps at most `limit` positions.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            positions: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn push(&mut self, position: Position) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            if self.positions.len() == limit {
                self.positions.remove(0);
            }
        }
        self.positions.push(position);
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn last(&self) -> Option<Position> {
        self.positions.last().copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Forget the history, e.g. when the orbit parameters change.
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Total length of the polyline through the stored positions.
    pub fn path_length(&self) -> f64 {
        self.positions
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }
}
