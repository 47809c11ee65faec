use serde::Serialize;

use crate::core::series::DataSeries;
use crate::core::types::Viewport;
use crate::error::{RevealError, RevealResult};

/// Radius divisor applied to the horizontal gap.
pub const DEFAULT_SIZE_FACTOR: f64 = 4.0;

/// Resolved pixel geometry of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeGeometry {
    pub index: usize,
    pub x: f64,
    pub baseline_y: f64,
    pub bar_height: f64,
    pub radius: f64,
}

impl NodeGeometry {
    /// Pixel position of the fully grown bar top (circle center).
    #[must_use]
    pub fn top(self) -> (f64, f64) {
        (self.x, self.baseline_y - self.bar_height)
    }
}

/// Fixed layout derived once from the series and the startup viewport.
///
/// Nodes are spread uniformly across the middle half of the viewport and
/// rise from a shared baseline at two thirds of its height.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphGeometry {
    viewport: Viewport,
    gap: f64,
    base_x: f64,
    baseline_y: f64,
    radius: f64,
    bar_heights: Vec<f64>,
}

impl GraphGeometry {
    pub fn new(series: &DataSeries, viewport: Viewport) -> RevealResult<Self> {
        Self::with_size_factor(series, viewport, DEFAULT_SIZE_FACTOR)
    }

    pub fn with_size_factor(
        series: &DataSeries,
        viewport: Viewport,
        size_factor: f64,
    ) -> RevealResult<Self> {
        let viewport = viewport.validate()?;
        if !size_factor.is_finite() || size_factor <= 0.0 {
            return Err(RevealError::InvalidData(
                "size factor must be finite and > 0".to_owned(),
            ));
        }

        let width = viewport.width_px();
        let height = viewport.height_px();
        let half_width = width / 2.0;
        let gap = half_width / (series.len() as f64 + 1.0);
        let base_x = half_width - half_width / 2.0;
        let baseline_y = 2.0 * height / 3.0;
        let bar_span = height / 2.0;
        let max_value = series.max_value();

        let bar_heights = series
            .values()
            .iter()
            .map(|value| value * bar_span / max_value)
            .collect();

        Ok(Self {
            viewport,
            gap,
            base_x,
            baseline_y,
            radius: gap / size_factor,
            bar_heights,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bar_heights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bar_heights.is_empty()
    }

    #[must_use]
    pub fn gap(&self) -> f64 {
        self.gap
    }

    #[must_use]
    pub fn base_x(&self) -> f64 {
        self.base_x
    }

    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        self.baseline_y
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Horizontal position of node `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is beyond the series.
    #[must_use]
    pub fn x(&self, index: usize) -> f64 {
        self.assert_in_range(index);
        self.gap * index as f64 + self.base_x
    }

    /// Bar height of node `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is beyond the series.
    #[must_use]
    pub fn bar_height(&self, index: usize) -> f64 {
        self.assert_in_range(index);
        self.bar_heights[index]
    }

    /// # Panics
    ///
    /// Panics when `index` is beyond the series.
    #[must_use]
    pub fn top(&self, index: usize) -> (f64, f64) {
        (self.x(index), self.baseline_y - self.bar_height(index))
    }

    pub fn node(&self, index: usize) -> RevealResult<NodeGeometry> {
        if index >= self.len() {
            return Err(RevealError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(NodeGeometry {
            index,
            x: self.x(index),
            baseline_y: self.baseline_y,
            bar_height: self.bar_heights[index],
            radius: self.radius,
        })
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeGeometry> + '_ {
        (0..self.len()).map(|index| NodeGeometry {
            index,
            x: self.gap * index as f64 + self.base_x,
            baseline_y: self.baseline_y,
            bar_height: self.bar_heights[index],
            radius: self.radius,
        })
    }

    fn assert_in_range(&self, index: usize) {
        assert!(
            index < self.len(),
            "node index {index} out of range for series of length {}",
            self.len()
        );
    }
}
