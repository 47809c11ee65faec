use serde::{Deserialize, Serialize};

use crate::error::{RevealError, RevealResult};

/// Host viewport size in pixels, captured once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> RevealResult<Self> {
        if !self.is_valid() {
            return Err(RevealError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }

    /// Shorter side, used to derive stroke widths.
    #[must_use]
    pub fn min_side_px(self) -> f64 {
        self.width_px().min(self.height_px())
    }
}

#[cfg(test)]
mod tests {
    use super::Viewport;

    #[test]
    fn zero_sized_viewport_is_rejected() {
        assert!(Viewport::new(0, 600).validate().is_err());
        assert!(Viewport::new(800, 0).validate().is_err());
        assert!(Viewport::new(800, 600).validate().is_ok());
    }

    #[test]
    fn min_side_picks_shorter_dimension() {
        assert_eq!(Viewport::new(800, 600).min_side_px(), 600.0);
        assert_eq!(Viewport::new(320, 900).min_side_px(), 320.0);
    }
}
