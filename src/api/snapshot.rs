use serde::{Deserialize, Serialize};

use crate::animation::WaveDirection;
use crate::error::{RevealError, RevealResult};

pub const REVEAL_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// State of one node at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub index: usize,
    pub value: f64,
    pub scale: f64,
    pub direction: f64,
    pub committed_scale: f64,
}

/// Serializable deterministic animation state used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealSnapshot {
    pub tick_count: u64,
    pub running: bool,
    pub current: usize,
    pub direction: WaveDirection,
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: RevealSnapshot,
}

impl RevealSnapshot {
    /// Number of nodes whose last committed state is fully revealed.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.committed_scale == 1.0)
            .count()
    }

    pub fn to_json_pretty(&self) -> RevealResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            RevealError::InvalidData(format!("failed to serialize snapshot json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> RevealResult<String> {
        let payload = RevealSnapshotJsonContractV1 {
            schema_version: REVEAL_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            RevealError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> RevealResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<RevealSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: RevealSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            RevealError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != REVEAL_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(RevealError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
