use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::geometry::{HorizontalLine, MeasuredLabel, PlacedLabel, label_height};
use crate::core::scale::AxisScale;
use crate::core::text_metrics::TextMetrics;
use crate::core::types::{DataPoint, Point, Rect, Viewport};

/// Dashed reference line at a data value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLineSpec {
    pub value: f64,
    pub label: Option<String>,
}

/// Solid top or bottom axis line with optional corner labels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisLineSpec {
    pub visible: bool,
    pub left_label: Option<String>,
    pub right_label: Option<String>,
}

/// Everything line layout depends on.
#[derive(Debug, Clone, Copy)]
pub struct LineLayoutInput<'a> {
    pub points: &'a [DataPoint],
    pub viewport: Viewport,
    pub marker_diameter: f64,
    pub grid_lines: &'a [GridLineSpec],
    pub top_axis: &'a AxisLineSpec,
    pub bottom_axis: &'a AxisLineSpec,
    pub axis_label_font_size_px: f64,
    pub grid_label_font_size_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineMarker {
    pub data: DataPoint,
    pub center: Point,
    /// Bounding box of the marker disc.
    pub frame: Rect,
}

/// Connection between two adjacent markers.
///
/// `from`/`to` are the marker centers; `start`/`end` is the drawn part, pulled
/// in by one marker radius at each end so the line stops at the discs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    fn between(from: Point, to: Point, radius: f64) -> Self {
        let distance = from.distance_to(to);
        let fraction = if distance > 0.0 {
            radius / distance
        } else {
            f64::INFINITY
        };
        let (start, end) = if fraction >= 0.5 {
            let mid = from.lerp(to, 0.5);
            (mid, mid)
        } else {
            (from.lerp(to, fraction), from.lerp(to, 1.0 - fraction))
        };
        Self {
            from,
            to,
            start,
            end,
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// Overlapping or coincident markers leave nothing to draw.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.length() > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLineGeometry {
    pub value: f64,
    pub line: HorizontalLine,
    pub label: Option<PlacedLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLineGeometry {
    pub line: HorizontalLine,
    pub left_label: Option<PlacedLabel>,
    pub right_label: Option<PlacedLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartGeometry {
    /// Area data is normalized into: full width, height minus bottom labels.
    pub usable_area: Rect,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    /// Sorted ascending by data x.
    pub markers: Vec<LineMarker>,
    pub segments: Vec<LineSegment>,
    pub grid_lines: Vec<GridLineGeometry>,
    pub top_axis: Option<AxisLineGeometry>,
    pub bottom_axis: Option<AxisLineGeometry>,
}

impl LineChartGeometry {
    #[must_use]
    pub fn normalize_x(&self, x: f64) -> f64 {
        self.x_scale.to_pixel(x)
    }

    #[must_use]
    pub fn normalize_y(&self, y: f64) -> f64 {
        self.y_scale.to_pixel(y)
    }
}

/// Lays out a line/scatter chart from scratch.
///
/// Points are sorted by x (stable, so equal x keep input order). Both axes are
/// fitted to the dataset extrema; a flat or empty axis maps every value to its
/// middle.
pub fn layout_line_chart(input: LineLayoutInput<'_>, metrics: &impl TextMetrics) -> LineChartGeometry {
    let LineLayoutInput {
        points,
        viewport,
        marker_diameter,
        grid_lines,
        top_axis,
        bottom_axis,
        axis_label_font_size_px,
        grid_label_font_size_px,
    } = input;

    let measure_axis = |text: &Option<String>| {
        MeasuredLabel::measure(text.as_deref(), axis_label_font_size_px, metrics)
    };
    let bottom_left = measure_axis(&bottom_axis.left_label);
    let bottom_right = measure_axis(&bottom_axis.right_label);
    let bottom_padding = label_height(bottom_left.as_ref()).max(label_height(bottom_right.as_ref()));
    let usable_area = Rect::new(
        0.0,
        0.0,
        viewport.width,
        (viewport.height - bottom_padding).max(0.0),
    );

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    let x_scale = AxisScale::fit(sorted.iter().map(|point| point.x), usable_area.width, false);
    let y_scale = AxisScale::fit(sorted.iter().map(|point| point.y), usable_area.height, true);

    let radius = marker_diameter * 0.5;
    let markers: Vec<LineMarker> = sorted
        .iter()
        .map(|&data| {
            let center = Point::new(x_scale.to_pixel(data.x), y_scale.to_pixel(data.y));
            LineMarker {
                data,
                center,
                frame: Rect::new(
                    center.x - radius,
                    center.y - radius,
                    marker_diameter,
                    marker_diameter,
                ),
            }
        })
        .collect();

    let segments: Vec<LineSegment> = markers
        .windows(2)
        .map(|pair| LineSegment::between(pair[0].center, pair[1].center, radius))
        .collect();

    let grid_lines: Vec<GridLineGeometry> = grid_lines
        .iter()
        .map(|grid| {
            let y = y_scale.to_pixel(grid.value);
            let label = MeasuredLabel::measure(grid.label.as_deref(), grid_label_font_size_px, metrics)
                .map(|label| {
                    let x = viewport.width - label.width;
                    label.place(x, y)
                });
            GridLineGeometry {
                value: grid.value,
                line: HorizontalLine::full_width(y, viewport.width),
                label,
            }
        })
        .collect();

    let top_axis = top_axis.visible.then(|| AxisLineGeometry {
        line: HorizontalLine::full_width(0.0, viewport.width),
        left_label: measure_axis(&top_axis.left_label).map(|label| label.place(0.0, 0.0)),
        right_label: measure_axis(&top_axis.right_label).map(|label| {
            let x = viewport.width - label.width;
            label.place(x, 0.0)
        }),
    });

    let bottom_axis = bottom_axis.visible.then(|| AxisLineGeometry {
        line: HorizontalLine::full_width(viewport.height - bottom_padding, viewport.width),
        left_label: bottom_left.map(|label| {
            let y = viewport.height - label.height;
            label.place(0.0, y)
        }),
        right_label: bottom_right.map(|label| {
            let x = viewport.width - label.width;
            let y = viewport.height - label.height;
            label.place(x, y)
        }),
    });

    trace!(
        markers = markers.len(),
        segments = segments.len(),
        grid_lines = grid_lines.len(),
        x_degenerate = x_scale.is_degenerate(),
        y_degenerate = y_scale.is_degenerate(),
        "line chart layout"
    );

    LineChartGeometry {
        usable_area,
        x_scale,
        y_scale,
        markers,
        segments,
        grid_lines,
        top_axis,
        bottom_axis,
    }
}
