//! Reveal state machine: per-node states, the node chain and the
//! controller that walks the wave back and forth.

mod controller;
mod event;
mod node_chain;
mod reveal_state;

pub use controller::GraphController;
pub use event::{RevealEvent, WaveDirection};
pub use node_chain::{NodeChain, NodeStyle};
pub use reveal_state::{RevealState, RevealStep};
