use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_SIZE_FACTOR, DataSeries, Viewport};
use crate::error::{RevealError, RevealResult};
use crate::render::Color;

/// Timer period between two ticks.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Stroke width divisor applied to the shorter viewport side.
pub const DEFAULT_STROKE_FACTOR: f64 = 60.0;

/// Immutable animation bootstrap configuration.
///
/// Serializable so hosts can keep the setup in a JSON file instead of
/// hard-coding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGraphConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub data: DataSeries,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_size_factor")]
    pub size_factor: f64,
    #[serde(default = "default_stroke_factor")]
    pub stroke_factor: f64,
    #[serde(default = "default_line_color")]
    pub line_color: Color,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
}

impl LineGraphConfig {
    /// Sample series with default timing and colors.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            data: DataSeries::sample(),
            tick_interval_ms: default_tick_interval_ms(),
            size_factor: default_size_factor(),
            stroke_factor: default_stroke_factor(),
            line_color: default_line_color(),
            background_color: default_background_color(),
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: DataSeries) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    #[must_use]
    pub fn with_size_factor(mut self, size_factor: f64) -> Self {
        self.size_factor = size_factor;
        self
    }

    #[must_use]
    pub fn with_stroke_factor(mut self, stroke_factor: f64) -> Self {
        self.stroke_factor = stroke_factor;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, line_color: Color, background_color: Color) -> Self {
        self.line_color = line_color;
        self.background_color = background_color;
        self
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.viewport.min_side_px() / self.stroke_factor
    }

    pub fn validate(&self) -> RevealResult<()> {
        self.viewport.validate()?;
        if self.tick_interval_ms == 0 {
            return Err(RevealError::InvalidData(
                "tick interval must be > 0 ms".to_owned(),
            ));
        }
        for (name, value) in [
            ("size factor", self.size_factor),
            ("stroke factor", self.stroke_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RevealError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        self.line_color.validate()?;
        self.background_color.validate()
    }

    pub fn from_json_str(input: &str) -> RevealResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            RevealError::InvalidData(format!("failed to parse config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> RevealResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RevealError::InvalidData(format!("failed to serialize config json: {e}")))
    }
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

fn default_size_factor() -> f64 {
    DEFAULT_SIZE_FACTOR
}

fn default_stroke_factor() -> f64 {
    DEFAULT_STROKE_FACTOR
}

fn default_line_color() -> Color {
    Color::LINE
}

fn default_background_color() -> Color {
    Color::BACKGROUND
}

#[cfg(test)]
mod tests {
    use super::LineGraphConfig;
    use crate::core::{DataSeries, Viewport};
    use crate::render::Color;

    #[test]
    fn minimal_json_fills_defaults() {
        let config = LineGraphConfig::from_json_str(r#"{"viewport":{"width":800,"height":600}}"#)
            .expect("parse");
        assert_eq!(config, LineGraphConfig::new(Viewport::new(800, 600)));
        assert_eq!(config.tick_interval().as_millis(), 50);
        assert_eq!(config.stroke_width(), 10.0);
    }

    #[test]
    fn json_round_trip_keeps_custom_series() {
        let data = DataSeries::new(vec![1.0, 4.0, 2.0]).expect("series");
        let config = LineGraphConfig::new(Viewport::new(640, 480))
            .with_data(data)
            .with_tick_interval_ms(16);
        let json = config.to_json_pretty().expect("serialize");
        assert_eq!(LineGraphConfig::from_json_str(&json).expect("parse"), config);
    }

    #[test]
    fn empty_series_in_json_is_rejected() {
        let result = LineGraphConfig::from_json_str(
            r#"{"viewport":{"width":800,"height":600},"data":[]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn invalid_settings_fail_validation() {
        let base = LineGraphConfig::new(Viewport::new(800, 600));
        assert!(base.clone().with_tick_interval_ms(0).validate().is_err());
        assert!(base.clone().with_size_factor(0.0).validate().is_err());
        assert!(base.with_stroke_factor(f64::NAN).validate().is_err());
        assert!(LineGraphConfig::new(Viewport::new(0, 600)).validate().is_err());
    }

    #[test]
    fn hex_colors_in_json_parse_and_round_trip() {
        let config = LineGraphConfig::from_json_str(
            r##"{"viewport":{"width":800,"height":600},"line_color":"#4CAF50","background_color":"#212121"}"##,
        )
        .expect("parse");
        assert_eq!(config.line_color, Color::LINE);
        assert_eq!(config.background_color, Color::BACKGROUND);

        let custom = LineGraphConfig::from_json_str(
            r##"{"viewport":{"width":800,"height":600},"line_color":"#FF000080"}"##,
        )
        .expect("parse");
        let json = custom.to_json_pretty().expect("serialize");
        assert_eq!(LineGraphConfig::from_json_str(&json).expect("reparse"), custom);
    }

    #[test]
    fn malformed_hex_color_in_json_is_rejected() {
        for color in [
            "\"#12345\"",
            "\"green\"",
            r#"{"red":2.0,"green":0.0,"blue":0.0}"#,
        ] {
            let json = format!(
                r#"{{"viewport":{{"width":800,"height":600}},"line_color":{color}}}"#
            );
            assert!(LineGraphConfig::from_json_str(&json).is_err(), "accepted {color}");
        }
    }
}
