use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{RevealError, RevealResult};

/// Sample series shown when the host does not provide one.
pub const SAMPLE_SERIES: [f64; 8] = [10.0, 20.0, 30.0, 5.0, 15.0, 60.0, 35.0, 25.0];

/// Ordered, immutable series of non-negative values.
///
/// The largest value normalizes every bar height, so construction rejects
/// empty series and series whose maximum is not strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct DataSeries {
    values: Vec<f64>,
    max_value: f64,
}

impl DataSeries {
    pub fn new(values: Vec<f64>) -> RevealResult<Self> {
        if values.is_empty() {
            return Err(RevealError::InvalidData(
                "data series must not be empty".to_owned(),
            ));
        }
        if let Some(index) = values
            .iter()
            .position(|value| !value.is_finite() || *value < 0.0)
        {
            return Err(RevealError::InvalidData(format!(
                "data value at index {index} must be finite and >= 0"
            )));
        }

        let max_value = values
            .iter()
            .copied()
            .map(OrderedFloat)
            .max()
            .map_or(0.0, OrderedFloat::into_inner);
        if max_value <= 0.0 {
            return Err(RevealError::InvalidData(
                "data series maximum must be > 0".to_owned(),
            ));
        }

        Ok(Self { values, max_value })
    }

    #[must_use]
    pub fn sample() -> Self {
        Self {
            values: SAMPLE_SERIES.to_vec(),
            max_value: 60.0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }
}

impl TryFrom<Vec<f64>> for DataSeries {
    type Error = RevealError;

    fn try_from(values: Vec<f64>) -> RevealResult<Self> {
        Self::new(values)
    }
}

impl From<DataSeries> for Vec<f64> {
    fn from(series: DataSeries) -> Self {
        series.values
    }
}

impl Default for DataSeries {
    fn default() -> Self {
        Self::sample()
    }
}
