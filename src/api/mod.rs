//! Stateful chart engines driven by the presentation layer.
//!
//! Engines own their inputs and the geometry computed from them. Layout math
//! lives in [`crate::core`]; this layer adds validation, configuration,
//! diagnostics and render-frame materialization.

mod bar_chart;
mod bar_render_frame_builder;
mod chart_config;
mod json_contract;
mod line_chart;
mod line_render_frame_builder;

pub use bar_chart::BarChartEngine;
pub use chart_config::{BarChartConfig, LineChartConfig, LineChartStyle};
pub use line_chart::LineChartEngine;
