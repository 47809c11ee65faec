use serde::{Deserialize, Serialize};

use crate::core::interpolation::step;

/// Outcome of ticking a single reveal state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealStep {
    /// Still ramping (or at rest).
    Pending,
    /// Drift exceeded one unit; the state snapped and committed `committed_scale`.
    Committed { committed_scale: f64 },
}

/// Per-node reveal progress.
///
/// `scale` ramps from `committed_scale` toward `committed_scale + direction`
/// and snaps once it has drifted more than one unit, so after every tick
/// `|scale - committed_scale| <= 1` and `committed_scale` stays in `{-1, 0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealState {
    scale: f64,
    direction: f64,
    committed_scale: f64,
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scale: 0.0,
            direction: 0.0,
            committed_scale: 0.0,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn direction(&self) -> f64 {
        self.direction
    }

    #[must_use]
    pub fn committed_scale(&self) -> f64 {
        self.committed_scale
    }

    #[must_use]
    pub fn is_updating(&self) -> bool {
        self.direction != 0.0
    }

    /// Starts a transition away from the committed scale.
    ///
    /// A state at rest on 0 starts growing, a state at rest on 1 starts
    /// shrinking. Returns `true` when the transition was activated and
    /// `false` when the state was already moving.
    pub fn start_updating(&mut self) -> bool {
        if self.is_updating() {
            return false;
        }
        self.direction = (1.0 - 2.0 * self.committed_scale).clamp(-1.0, 1.0);
        true
    }

    pub fn tick(&mut self) -> RevealStep {
        self.scale += step(self.scale, self.direction, 1.0, 1.0);
        if (self.scale - self.committed_scale).abs() > 1.0 {
            self.scale = self.committed_scale + self.direction;
            self.direction = 0.0;
            self.committed_scale = self.scale;
            return RevealStep::Committed {
                committed_scale: self.committed_scale,
            };
        }
        RevealStep::Pending
    }
}
