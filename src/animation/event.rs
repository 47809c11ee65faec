use serde::{Deserialize, Serialize};

/// Direction in which the reveal wave travels along the chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveDirection {
    #[default]
    Forward,
    Backward,
}

impl WaveDirection {
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Synchronous result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealEvent {
    /// No node settled this tick.
    Idle,
    /// The node at this index was started and is now active.
    Advanced(usize),
    /// The active node settled without activating a neighbor.
    Completed,
    /// The wave hit the end of the chain and turned around.
    ReversedDirection,
}
