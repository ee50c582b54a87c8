pub mod bar_layout;
pub mod geometry;
pub mod line_layout;
pub mod primitives;
pub mod scale;
pub mod text_metrics;
pub mod types;

pub use bar_layout::{
    BarAxisSpec, BarCell, BarChartGeometry, BarLayoutInput, BarMode, MAX_SEPARATED_CELLS,
    layout_bar_chart,
};
pub use geometry::{HorizontalLine, PlacedLabel};
pub use line_layout::{
    AxisLineGeometry, AxisLineSpec, GridLineGeometry, GridLineSpec, LineChartGeometry,
    LineLayoutInput, LineMarker, LineSegment, layout_line_chart,
};
pub use scale::AxisScale;
pub use text_metrics::{EstimatedTextMetrics, TextMetrics, TextSize};
pub use types::{DataPoint, Point, Rect, Viewport};
