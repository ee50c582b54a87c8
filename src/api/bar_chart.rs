use tracing::{debug, trace};

use crate::core::primitives::ensure_non_negative;
use crate::core::{
    BarAxisSpec, BarChartGeometry, BarLayoutInput, BarMode, EstimatedTextMetrics, TextMetrics,
    Viewport, layout_bar_chart,
};
use crate::error::{StatsError, StatsResult};

use super::BarChartConfig;

/// Stateful bar chart layout engine.
///
/// Every setter replaces its piece of state and recomputes the whole geometry
/// before returning; [`BarChartEngine::geometry`] always reflects the latest
/// inputs. Invalid arguments are rejected and leave the engine untouched.
#[derive(Debug, Clone)]
pub struct BarChartEngine<M: TextMetrics = EstimatedTextMetrics> {
    config: BarChartConfig,
    metrics: M,
    viewport: Viewport,
    counts: Vec<u32>,
    axis: BarAxisSpec,
    geometry: BarChartGeometry,
}

impl BarChartEngine<EstimatedTextMetrics> {
    pub fn new(viewport: Viewport) -> StatsResult<Self> {
        Self::with_metrics(BarChartConfig::default(), viewport, EstimatedTextMetrics::default())
    }

    pub fn with_config(config: BarChartConfig, viewport: Viewport) -> StatsResult<Self> {
        Self::with_metrics(config, viewport, EstimatedTextMetrics::default())
    }
}

impl<M: TextMetrics> BarChartEngine<M> {
    pub fn with_metrics(config: BarChartConfig, viewport: Viewport, metrics: M) -> StatsResult<Self> {
        config.validate()?;
        validate_viewport(viewport)?;
        let axis = BarAxisSpec::default();
        let geometry = layout_bar_chart(
            BarLayoutInput {
                counts: &[],
                viewport,
                horizontal_spacing: config.horizontal_spacing_px,
                vertical_spacing: config.vertical_spacing_px,
                axis: &axis,
                label_font_size_px: config.axis_label_font_size_px,
            },
            &metrics,
        );
        Ok(Self {
            config,
            metrics,
            viewport,
            counts: Vec::new(),
            axis,
            geometry,
        })
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BarChartConfig) -> StatsResult<()> {
        config.validate()?;
        self.config = config;
        self.relayout();
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[must_use]
    pub fn axis(&self) -> &BarAxisSpec {
        &self.axis
    }

    #[must_use]
    pub fn mode(&self) -> BarMode {
        self.geometry.mode
    }

    /// Latest layout snapshot.
    #[must_use]
    pub fn geometry(&self) -> &BarChartGeometry {
        &self.geometry
    }

    /// Sets column and row spacing; a vertical spacing of zero merges columns.
    pub fn set_spacing(&mut self, horizontal_px: f64, vertical_px: f64) -> StatsResult<()> {
        ensure_non_negative(horizontal_px, "horizontal spacing")?;
        ensure_non_negative(vertical_px, "vertical spacing")?;
        self.config.horizontal_spacing_px = horizontal_px;
        self.config.vertical_spacing_px = vertical_px;
        self.relayout();
        Ok(())
    }

    pub fn set_horizontal_spacing(&mut self, spacing_px: f64) -> StatsResult<()> {
        self.set_spacing(spacing_px, self.config.vertical_spacing_px)
    }

    pub fn set_vertical_spacing(&mut self, spacing_px: f64) -> StatsResult<()> {
        self.set_spacing(self.config.horizontal_spacing_px, spacing_px)
    }

    /// Replaces the per-column counts.
    ///
    /// In separated mode a grid of more than
    /// [`MAX_SEPARATED_CELLS`](crate::core::MAX_SEPARATED_CELLS) cells lays out
    /// empty instead of allocating one cell per unit.
    pub fn set_data(&mut self, counts: Vec<u32>) {
        debug!(
            column_count = counts.len(),
            max_count = counts.iter().copied().max().unwrap_or(0),
            "set bar data"
        );
        self.counts = counts;
        self.relayout();
    }

    pub fn set_viewport_size(&mut self, width: f64, height: f64) -> StatsResult<()> {
        let viewport = Viewport::new(width, height);
        validate_viewport(viewport)?;
        self.viewport = viewport;
        self.relayout();
        Ok(())
    }

    /// Shows the bottom axis line with optional corner labels.
    ///
    /// Corner labels are uppercased; any column labels are removed.
    pub fn add_bottom_axis_line(&mut self, left_label: Option<&str>, right_label: Option<&str>) {
        self.axis = BarAxisSpec {
            visible: true,
            left_label: left_label.map(str::to_uppercase),
            right_label: right_label.map(str::to_uppercase),
            column_labels: Vec::new(),
        };
        self.relayout();
    }

    /// Shows the bottom axis line with one label centered under each column.
    ///
    /// Labels are paired with columns left to right; surplus labels or columns
    /// are left unlabeled. Corner labels are removed.
    pub fn add_bottom_axis_line_with_column_labels<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.axis = BarAxisSpec {
            visible: true,
            left_label: None,
            right_label: None,
            column_labels: labels.into_iter().map(Into::into).collect(),
        };
        self.relayout();
    }

    fn relayout(&mut self) {
        self.geometry = layout_bar_chart(
            BarLayoutInput {
                counts: &self.counts,
                viewport: self.viewport,
                horizontal_spacing: self.config.horizontal_spacing_px,
                vertical_spacing: self.config.vertical_spacing_px,
                axis: &self.axis,
                label_font_size_px: self.config.axis_label_font_size_px,
            },
            &self.metrics,
        );
        trace!(cells = self.geometry.cells.len(), "bar chart relayout");
    }
}

pub(super) fn validate_viewport(viewport: Viewport) -> StatsResult<()> {
    if !viewport.is_valid() {
        return Err(StatsError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}
