use serde::{Deserialize, Serialize};

/// Maps a data domain onto a pixel extent starting at zero.
///
/// Unlike a strict linear scale this never rejects its domain: an empty or
/// zero-width domain is treated as flat and every value lands on the middle of
/// the extent, so layout never produces NaN or infinite coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    domain_min: f64,
    domain_max: f64,
    extent_px: f64,
    inverted: bool,
}

impl AxisScale {
    /// Horizontal scale: `domain_min` maps to 0, `domain_max` to `extent_px`.
    #[must_use]
    pub fn horizontal(domain_min: f64, domain_max: f64, extent_px: f64) -> Self {
        Self {
            domain_min,
            domain_max,
            extent_px,
            inverted: false,
        }
    }

    /// Vertical scale: `domain_min` maps to `extent_px`, `domain_max` to 0.
    #[must_use]
    pub fn vertical(domain_min: f64, domain_max: f64, extent_px: f64) -> Self {
        Self {
            domain_min,
            domain_max,
            extent_px,
            inverted: true,
        }
    }

    /// Builds a scale over the min/max of `values`; empty input is flat.
    #[must_use]
    pub fn fit<I>(values: I, extent_px: f64, inverted: bool) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = values
            .into_iter()
            .fold(None, |acc: Option<(f64, f64)>, value| match acc {
                Some((min, max)) => Some((min.min(value), max.max(value))),
                None => Some((value, value)),
            })
            .unwrap_or((0.0, 0.0));
        Self {
            domain_min: min,
            domain_max: max,
            extent_px,
            inverted,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn extent_px(self) -> f64 {
        self.extent_px
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        let span = self.domain_max - self.domain_min;
        !span.is_finite() || span == 0.0
    }

    #[must_use]
    pub fn to_pixel(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.extent_px * 0.5;
        }
        let normalized = (value - self.domain_min) / (self.domain_max - self.domain_min);
        if self.inverted {
            self.extent_px - normalized * self.extent_px
        } else {
            normalized * self.extent_px
        }
    }
}
