use serde::{Deserialize, Serialize};

/// Measured size of a single-line label.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextSize {
    pub width: f64,
    pub height: f64,
}

/// Text measurement seam between layout and the host's font stack.
///
/// Empty text must measure as zero so an unset label never reserves space.
pub trait TextMetrics {
    fn measure(&self, text: &str, font_size_px: f64) -> TextSize;
}

/// Deterministic, backend-independent text size estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatedTextMetrics {
    /// Line height as a multiple of the font size.
    pub line_height_factor: f64,
}

impl Default for EstimatedTextMetrics {
    fn default() -> Self {
        Self {
            line_height_factor: 1.2,
        }
    }
}

impl TextMetrics for EstimatedTextMetrics {
    fn measure(&self, text: &str, font_size_px: f64) -> TextSize {
        if text.is_empty() {
            return TextSize::default();
        }
        TextSize {
            width: estimate_label_text_width_px(text, font_size_px),
            height: font_size_px * self.line_height_factor,
        }
    }
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
    fn measure(&self, text: &str, font_size_px: f64) -> TextSize {
        (**self).measure(text, font_size_px)
    }
}

pub(crate) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            'I' | 'i' | 'l' => 0.3,
            'M' | 'W' | 'm' | 'w' => 0.86,
            _ => 0.62,
        }
    });
    units * font_size_px
}
