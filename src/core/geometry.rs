use serde::{Deserialize, Serialize};

use crate::core::text_metrics::TextMetrics;
use crate::core::types::Rect;

/// Horizontal line spanning `x_start..=x_end` at pixel row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalLine {
    pub y: f64,
    pub x_start: f64,
    pub x_end: f64,
}

impl HorizontalLine {
    #[must_use]
    pub const fn full_width(y: f64, width: f64) -> Self {
        Self {
            y,
            x_start: 0.0,
            x_end: width,
        }
    }
}

/// A label whose box has been measured and positioned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLabel {
    pub text: String,
    pub rect: Rect,
}

/// Measured label text waiting for a position.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MeasuredLabel {
    pub text: String,
    pub width: f64,
    pub height: f64,
}

impl MeasuredLabel {
    /// Empty or missing text yields `None` so it reserves no space.
    pub fn measure(
        text: Option<&str>,
        font_size_px: f64,
        metrics: &impl TextMetrics,
    ) -> Option<Self> {
        let text = text.filter(|text| !text.is_empty())?;
        let size = metrics.measure(text, font_size_px);
        Some(Self {
            text: text.to_owned(),
            width: size.width,
            height: size.height,
        })
    }

    pub fn place(self, x: f64, y: f64) -> PlacedLabel {
        PlacedLabel {
            rect: Rect::new(x, y, self.width, self.height),
            text: self.text,
        }
    }
}

pub(crate) fn label_height(label: Option<&MeasuredLabel>) -> f64 {
    label.map_or(0.0, |label| label.height)
}
