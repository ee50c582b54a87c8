use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::primitives::{ensure_finite, ensure_non_negative};
use crate::error::{StatsError, StatsResult};
use crate::render::Color;

const ACCENT: Color = Color::rgb(0.0, 0.478, 1.0);
const GRAY_2: Color = Color::rgb(0.682, 0.682, 0.698);
const GRAY_3: Color = Color::rgb(0.780, 0.780, 0.800);

/// Bar chart setup. Serializable so hosts can persist chart styling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    #[serde(default = "default_bar_horizontal_spacing_px")]
    pub horizontal_spacing_px: f64,
    /// Zero merges each column into a single bar.
    #[serde(default = "default_bar_vertical_spacing_px")]
    pub vertical_spacing_px: f64,
    #[serde(default = "default_cell_corner_radius_px")]
    pub cell_corner_radius_px: f64,
    #[serde(default = "default_accent")]
    pub cell_color: Color,
    #[serde(default = "default_hairline_px")]
    pub axis_line_thickness_px: f64,
    #[serde(default = "default_accent")]
    pub axis_line_color: Color,
    #[serde(default = "default_accent")]
    pub axis_label_text_color: Color,
    #[serde(default = "default_label_font_size_px")]
    pub axis_label_font_size_px: f64,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing_px: default_bar_horizontal_spacing_px(),
            vertical_spacing_px: default_bar_vertical_spacing_px(),
            cell_corner_radius_px: default_cell_corner_radius_px(),
            cell_color: default_accent(),
            axis_line_thickness_px: default_hairline_px(),
            axis_line_color: default_accent(),
            axis_label_text_color: default_accent(),
            axis_label_font_size_px: default_label_font_size_px(),
        }
    }
}

impl BarChartConfig {
    #[must_use]
    pub fn with_spacing(mut self, horizontal_px: f64, vertical_px: f64) -> Self {
        self.horizontal_spacing_px = horizontal_px;
        self.vertical_spacing_px = vertical_px;
        self
    }

    pub fn validate(&self) -> StatsResult<()> {
        ensure_non_negative(self.horizontal_spacing_px, "horizontal spacing")?;
        ensure_non_negative(self.vertical_spacing_px, "vertical spacing")?;
        ensure_non_negative(self.cell_corner_radius_px, "cell corner radius")?;
        ensure_positive(self.axis_line_thickness_px, "axis line thickness")?;
        ensure_positive(self.axis_label_font_size_px, "axis label font size")?;
        self.cell_color.validate()?;
        self.axis_line_color.validate()?;
        self.axis_label_text_color.validate()
    }
}

/// Pass-through colors of a line chart; none of them affect geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineChartStyle {
    #[serde(default = "default_accent")]
    pub dot_color: Color,
    #[serde(default = "default_accent")]
    pub line_color: Color,
    #[serde(default = "default_gray_3")]
    pub grid_line_color: Color,
    #[serde(default = "default_gray_3")]
    pub grid_label_text_color: Color,
    #[serde(default = "default_gray_2")]
    pub axis_line_color: Color,
    #[serde(default = "default_gray_2")]
    pub axis_label_text_color: Color,
}

impl Default for LineChartStyle {
    fn default() -> Self {
        Self {
            dot_color: default_accent(),
            line_color: default_accent(),
            grid_line_color: default_gray_3(),
            grid_label_text_color: default_gray_3(),
            axis_line_color: default_gray_2(),
            axis_label_text_color: default_gray_2(),
        }
    }
}

impl LineChartStyle {
    pub fn validate(&self) -> StatsResult<()> {
        for color in [
            self.dot_color,
            self.line_color,
            self.grid_line_color,
            self.grid_label_text_color,
            self.axis_line_color,
            self.axis_label_text_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}

/// Line chart setup. Serializable so hosts can persist chart styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    #[serde(default = "default_dot_diameter_px")]
    pub dot_diameter_px: f64,
    #[serde(default = "default_stroke_px")]
    pub dot_border_thickness_px: f64,
    #[serde(default = "default_stroke_px")]
    pub line_thickness_px: f64,
    #[serde(default = "default_hairline_px")]
    pub grid_line_thickness_px: f64,
    #[serde(default = "default_grid_line_dash_pattern")]
    pub grid_line_dash_pattern: SmallVec<[f64; 2]>,
    #[serde(default = "default_label_font_size_px")]
    pub grid_label_font_size_px: f64,
    #[serde(default = "default_hairline_px")]
    pub axis_line_thickness_px: f64,
    #[serde(default = "default_label_font_size_px")]
    pub axis_label_font_size_px: f64,
    #[serde(default)]
    pub style: LineChartStyle,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            dot_diameter_px: default_dot_diameter_px(),
            dot_border_thickness_px: default_stroke_px(),
            line_thickness_px: default_stroke_px(),
            grid_line_thickness_px: default_hairline_px(),
            grid_line_dash_pattern: default_grid_line_dash_pattern(),
            grid_label_font_size_px: default_label_font_size_px(),
            axis_line_thickness_px: default_hairline_px(),
            axis_label_font_size_px: default_label_font_size_px(),
            style: LineChartStyle::default(),
        }
    }
}

impl LineChartConfig {
    #[must_use]
    pub fn with_dot_diameter(mut self, diameter_px: f64) -> Self {
        self.dot_diameter_px = diameter_px;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: LineChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> StatsResult<()> {
        ensure_positive(self.dot_diameter_px, "dot diameter")?;
        ensure_non_negative(self.dot_border_thickness_px, "dot border thickness")?;
        ensure_positive(self.line_thickness_px, "line thickness")?;
        ensure_positive(self.grid_line_thickness_px, "grid line thickness")?;
        ensure_positive(self.grid_label_font_size_px, "grid label font size")?;
        ensure_positive(self.axis_line_thickness_px, "axis line thickness")?;
        ensure_positive(self.axis_label_font_size_px, "axis label font size")?;
        if self.grid_line_dash_pattern.is_empty() {
            return Err(StatsError::InvalidData(
                "grid line dash pattern must not be empty".to_owned(),
            ));
        }
        for &length in &self.grid_line_dash_pattern {
            ensure_positive(length, "grid line dash length")?;
        }
        self.style.validate()
    }
}

fn ensure_positive(value: f64, field_name: &str) -> StatsResult<f64> {
    let value = ensure_finite(value, field_name)?;
    if value <= 0.0 {
        return Err(StatsError::InvalidData(format!("{field_name} must be > 0")));
    }
    Ok(value)
}

fn default_bar_horizontal_spacing_px() -> f64 {
    10.0
}

fn default_bar_vertical_spacing_px() -> f64 {
    2.0
}

fn default_cell_corner_radius_px() -> f64 {
    3.0
}

fn default_hairline_px() -> f64 {
    0.5
}

fn default_stroke_px() -> f64 {
    2.5
}

fn default_dot_diameter_px() -> f64 {
    12.0
}

fn default_label_font_size_px() -> f64 {
    12.0
}

fn default_grid_line_dash_pattern() -> SmallVec<[f64; 2]> {
    smallvec![4.0]
}

fn default_accent() -> Color {
    ACCENT
}

fn default_gray_2() -> Color {
    GRAY_2
}

fn default_gray_3() -> Color {
    GRAY_3
}
