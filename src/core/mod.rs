pub mod geometry;
pub mod interpolation;
pub mod series;
pub mod types;

pub use geometry::{DEFAULT_SIZE_FACTOR, GraphGeometry, NodeGeometry};
pub use series::{DataSeries, SAMPLE_SERIES};
pub use types::Viewport;
