mod config;
mod engine;
mod snapshot;
mod timer;

pub use config::{DEFAULT_STROKE_FACTOR, DEFAULT_TICK_INTERVAL_MS, LineGraphConfig};
pub use engine::LineGraphAnimation;
pub use snapshot::{
    NodeSnapshot, REVEAL_SNAPSHOT_JSON_SCHEMA_V1, RevealSnapshot, RevealSnapshotJsonContractV1,
};
pub use timer::TickTimer;
