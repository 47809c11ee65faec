//! line-graph-reveal: a line graph whose nodes animate into view one after
//! another, then hide again in a wave travelling back.
//!
//! The reveal state machine is headless and deterministic; drawing goes
//! through the `render::Renderer` contract, with an optional Cairo backend
//! and a GTK4 host window behind cargo features.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{LineGraphAnimation, LineGraphConfig};
pub use error::{RevealError, RevealResult};
