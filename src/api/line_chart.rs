use tracing::{debug, trace, warn};

use crate::core::primitives::ensure_finite;
use crate::core::{
    AxisLineSpec, DataPoint, EstimatedTextMetrics, GridLineSpec, LineChartGeometry,
    LineLayoutInput, TextMetrics, Viewport, layout_line_chart,
};
use crate::error::StatsResult;
use crate::render::Color;

use super::bar_chart::validate_viewport;
use super::{LineChartConfig, LineChartStyle};

/// Stateful line/scatter chart layout engine.
///
/// Setters that touch data, viewport, grid lines or axes recompute the whole
/// geometry before returning. Color setters only update the style used when a
/// render frame is built.
#[derive(Debug, Clone)]
pub struct LineChartEngine<M: TextMetrics = EstimatedTextMetrics> {
    config: LineChartConfig,
    metrics: M,
    viewport: Viewport,
    points: Vec<DataPoint>,
    grid_lines: Vec<GridLineSpec>,
    top_axis: AxisLineSpec,
    bottom_axis: AxisLineSpec,
    geometry: LineChartGeometry,
}

impl LineChartEngine<EstimatedTextMetrics> {
    pub fn new(viewport: Viewport) -> StatsResult<Self> {
        Self::with_metrics(LineChartConfig::default(), viewport, EstimatedTextMetrics::default())
    }

    pub fn with_config(config: LineChartConfig, viewport: Viewport) -> StatsResult<Self> {
        Self::with_metrics(config, viewport, EstimatedTextMetrics::default())
    }
}

impl<M: TextMetrics> LineChartEngine<M> {
    pub fn with_metrics(config: LineChartConfig, viewport: Viewport, metrics: M) -> StatsResult<Self> {
        config.validate()?;
        validate_viewport(viewport)?;
        let top_axis = AxisLineSpec::default();
        let bottom_axis = AxisLineSpec::default();
        let geometry = layout_line_chart(
            LineLayoutInput {
                points: &[],
                viewport,
                marker_diameter: config.dot_diameter_px,
                grid_lines: &[],
                top_axis: &top_axis,
                bottom_axis: &bottom_axis,
                axis_label_font_size_px: config.axis_label_font_size_px,
                grid_label_font_size_px: config.grid_label_font_size_px,
            },
            &metrics,
        );
        Ok(Self {
            config,
            metrics,
            viewport,
            points: Vec::new(),
            grid_lines: Vec::new(),
            top_axis,
            bottom_axis,
            geometry,
        })
    }

    #[must_use]
    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LineChartConfig) -> StatsResult<()> {
        config.validate()?;
        self.config = config;
        self.relayout();
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> LineChartStyle {
        self.config.style
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Points in the order they were supplied (minus dropped non-finite ones).
    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn grid_lines(&self) -> &[GridLineSpec] {
        &self.grid_lines
    }

    #[must_use]
    pub fn top_axis(&self) -> &AxisLineSpec {
        &self.top_axis
    }

    #[must_use]
    pub fn bottom_axis(&self) -> &AxisLineSpec {
        &self.bottom_axis
    }

    /// Latest layout snapshot.
    #[must_use]
    pub fn geometry(&self) -> &LineChartGeometry {
        &self.geometry
    }

    /// Replaces the dataset. Points with a non-finite coordinate are dropped.
    pub fn set_data(&mut self, mut points: Vec<DataPoint>) {
        let original_count = points.len();
        points.retain(|point| point.is_finite());
        let dropped_count = original_count - points.len();
        if dropped_count > 0 {
            warn!(dropped_count, kept_count = points.len(), "dropped non-finite line points");
        }
        debug!(point_count = points.len(), "set line data");
        self.points = points;
        self.relayout();
    }

    pub fn set_viewport_size(&mut self, width: f64, height: f64) -> StatsResult<()> {
        let viewport = Viewport::new(width, height);
        validate_viewport(viewport)?;
        self.viewport = viewport;
        self.relayout();
        Ok(())
    }

    /// Adds a dashed horizontal line at data value `y_value`.
    pub fn add_grid_line(&mut self, y_value: f64, label: Option<&str>) -> StatsResult<()> {
        let value = ensure_finite(y_value, "grid line value")?;
        self.grid_lines.push(GridLineSpec {
            value,
            label: label.map(str::to_owned),
        });
        self.relayout();
        Ok(())
    }

    pub fn clear_grid_lines(&mut self) {
        self.grid_lines.clear();
        self.relayout();
    }

    /// Shows the solid top axis line; labels are uppercased.
    pub fn add_top_axis_line(&mut self, left_label: Option<&str>, right_label: Option<&str>) {
        self.top_axis = visible_axis(left_label, right_label);
        self.relayout();
    }

    /// Shows the solid bottom axis line; labels are uppercased and shrink the
    /// area data is normalized into.
    pub fn add_bottom_axis_line(&mut self, left_label: Option<&str>, right_label: Option<&str>) {
        self.bottom_axis = visible_axis(left_label, right_label);
        self.relayout();
    }

    pub fn set_style(&mut self, style: LineChartStyle) -> StatsResult<()> {
        style.validate()?;
        self.config.style = style;
        Ok(())
    }

    pub fn set_dot_color(&mut self, color: Color) -> StatsResult<()> {
        color.validate()?;
        self.config.style.dot_color = color;
        Ok(())
    }

    pub fn set_line_color(&mut self, color: Color) -> StatsResult<()> {
        color.validate()?;
        self.config.style.line_color = color;
        Ok(())
    }

    pub fn set_grid_line_color(&mut self, color: Color) -> StatsResult<()> {
        color.validate()?;
        self.config.style.grid_line_color = color;
        Ok(())
    }

    pub fn set_grid_label_text_color(&mut self, color: Color) -> StatsResult<()> {
        color.validate()?;
        self.config.style.grid_label_text_color = color;
        Ok(())
    }

    pub fn set_axis_line_color(&mut self, color: Color) -> StatsResult<()> {
        color.validate()?;
        self.config.style.axis_line_color = color;
        Ok(())
    }

    pub fn set_axis_label_text_color(&mut self, color: Color) -> StatsResult<()> {
        color.validate()?;
        self.config.style.axis_label_text_color = color;
        Ok(())
    }

    /// Pixel x of a data x under the current dataset and viewport.
    #[must_use]
    pub fn normalize_x(&self, x: f64) -> f64 {
        self.geometry.normalize_x(x)
    }

    /// Pixel y of a data y under the current dataset and viewport.
    #[must_use]
    pub fn normalize_y(&self, y: f64) -> f64 {
        self.geometry.normalize_y(y)
    }

    fn relayout(&mut self) {
        self.geometry = layout_line_chart(
            LineLayoutInput {
                points: &self.points,
                viewport: self.viewport,
                marker_diameter: self.config.dot_diameter_px,
                grid_lines: &self.grid_lines,
                top_axis: &self.top_axis,
                bottom_axis: &self.bottom_axis,
                axis_label_font_size_px: self.config.axis_label_font_size_px,
                grid_label_font_size_px: self.config.grid_label_font_size_px,
            },
            &self.metrics,
        );
        trace!(
            markers = self.geometry.markers.len(),
            segments = self.geometry.segments.len(),
            "line chart relayout"
        );
    }
}

fn visible_axis(left_label: Option<&str>, right_label: Option<&str>) -> AxisLineSpec {
    AxisLineSpec {
        visible: true,
        left_label: left_label.map(str::to_uppercase),
        right_label: right_label.map(str::to_uppercase),
    }
}
