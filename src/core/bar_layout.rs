use std::collections::BTreeSet;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::geometry::{HorizontalLine, MeasuredLabel, PlacedLabel, label_height};
use crate::core::text_metrics::TextMetrics;
use crate::core::types::{Rect, Viewport};

/// Most cells a separated-mode grid (`max(counts) * columns`) may hold; larger
/// grids degrade to an empty layout.
pub const MAX_SEPARATED_CELLS: usize = 1 << 20;

/// How columns are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarMode {
    /// One proportionally sized bar per column (vertical spacing is zero).
    Merged,
    /// A stack of equally sized unit cells per column.
    Separated,
}

/// Bottom axis configuration of a bar chart.
///
/// Corner labels and column labels are mutually exclusive in practice; the
/// engine clears one set when the other is installed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarAxisSpec {
    pub visible: bool,
    pub left_label: Option<String>,
    pub right_label: Option<String>,
    pub column_labels: Vec<String>,
}

/// Everything bar layout depends on.
#[derive(Debug, Clone, Copy)]
pub struct BarLayoutInput<'a> {
    pub counts: &'a [u32],
    pub viewport: Viewport,
    pub horizontal_spacing: f64,
    pub vertical_spacing: f64,
    pub axis: &'a BarAxisSpec,
    pub label_font_size_px: f64,
}

/// One grid cell; `row` 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarCell {
    pub row: usize,
    pub column: usize,
    pub rect: Rect,
    pub filled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartGeometry {
    pub mode: BarMode,
    pub rows: usize,
    pub columns: usize,
    pub cell_width: f64,
    /// Unit height in merged mode, cell height in separated mode.
    pub cell_height: f64,
    pub bottom_label_height: f64,
    /// Row-major: the cell at `(row, column)` is `cells[row * columns + column]`.
    pub cells: Vec<BarCell>,
    pub axis_line: Option<HorizontalLine>,
    pub left_label: Option<PlacedLabel>,
    pub right_label: Option<PlacedLabel>,
    pub column_labels: Vec<PlacedLabel>,
}

impl BarChartGeometry {
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&BarCell> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + column)
    }

    pub fn filled_cells(&self) -> impl Iterator<Item = &BarCell> {
        self.cells.iter().filter(|cell| cell.filled)
    }

    /// Sorted, deduplicated horizontal centers of all cells.
    #[must_use]
    pub fn column_centers(&self) -> Vec<f64> {
        column_centers(&self.cells)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Lays out a bar chart from scratch.
///
/// A vertical spacing of exactly zero selects merged mode. Degenerate input
/// (no columns, no rows in separated mode, or a separated grid above
/// [`MAX_SEPARATED_CELLS`]) yields no cells rather than an error, and no
/// coordinate is ever NaN.
pub fn layout_bar_chart(input: BarLayoutInput<'_>, metrics: &impl TextMetrics) -> BarChartGeometry {
    let BarLayoutInput {
        counts,
        viewport,
        horizontal_spacing,
        vertical_spacing,
        axis,
        label_font_size_px,
    } = input;

    let left = MeasuredLabel::measure(axis.left_label.as_deref(), label_font_size_px, metrics);
    let right = MeasuredLabel::measure(axis.right_label.as_deref(), label_font_size_px, metrics);
    // One slot per entry: an empty label keeps its column but draws nothing.
    let columns_measured: Vec<Option<MeasuredLabel>> = axis
        .column_labels
        .iter()
        .map(|text| MeasuredLabel::measure(Some(text), label_font_size_px, metrics))
        .collect();

    let bottom_label_height = columns_measured
        .iter()
        .flatten()
        .map(|label| label.height)
        .fold(label_height(left.as_ref()).max(label_height(right.as_ref())), f64::max);
    let usable_height = (viewport.height - bottom_label_height).max(0.0);

    let columns = counts.len();
    let max_count = counts.iter().copied().max().unwrap_or(0);
    let cell_width = if columns == 0 {
        0.0
    } else {
        ((viewport.width - (columns as f64 - 1.0) * horizontal_spacing) / columns as f64).max(0.0)
    };
    let column_x = |column: usize| column as f64 * (cell_width + horizontal_spacing);

    let (mode, rows, cell_height, cells) = if vertical_spacing == 0.0 {
        let unit_height = if max_count == 0 {
            0.0
        } else {
            usable_height / f64::from(max_count)
        };
        let cells: Vec<BarCell> = counts
            .iter()
            .enumerate()
            .map(|(column, &count)| {
                let height = f64::from(count) * unit_height;
                BarCell {
                    row: 0,
                    column,
                    rect: Rect::new(column_x(column), usable_height - height, cell_width, height),
                    filled: true,
                }
            })
            .collect();
        let rows = usize::from(columns > 0);
        (BarMode::Merged, rows, unit_height, cells)
    } else {
        let rows = match (max_count as usize).checked_mul(columns) {
            Some(total) if total <= MAX_SEPARATED_CELLS => max_count as usize,
            _ => {
                warn!(
                    max_count,
                    column_count = columns,
                    max_cells = MAX_SEPARATED_CELLS,
                    "separated grid exceeds cell limit; laying out no cells"
                );
                0
            }
        };
        let cell_height = if rows == 0 {
            0.0
        } else {
            ((usable_height - (rows as f64 - 1.0) * vertical_spacing) / rows as f64).max(0.0)
        };
        let mut cells = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            let y = row as f64 * (cell_height + vertical_spacing);
            for (column, &count) in counts.iter().enumerate() {
                cells.push(BarCell {
                    row,
                    column,
                    rect: Rect::new(column_x(column), y, cell_width, cell_height),
                    filled: rows - count as usize <= row,
                });
            }
        }
        (BarMode::Separated, rows, cell_height, cells)
    };

    let axis_line = axis
        .visible
        .then(|| HorizontalLine::full_width(viewport.height - bottom_label_height, viewport.width));
    let left_label = left.map(|label| {
        let y = viewport.height - label.height;
        label.place(0.0, y)
    });
    let right_label = right.map(|label| {
        let x = viewport.width - label.width;
        let y = viewport.height - label.height;
        label.place(x, y)
    });

    if !axis.column_labels.is_empty() && axis.column_labels.len() != columns {
        warn!(
            label_count = axis.column_labels.len(),
            column_count = columns,
            "column label count does not match column count; extra entries are dropped"
        );
    }
    let centers = column_centers(&cells);
    let column_labels: Vec<PlacedLabel> = columns_measured
        .into_iter()
        .zip(centers)
        .filter_map(|(label, center)| {
            let label = label?;
            let x = center - label.width * 0.5;
            let y = viewport.height - label.height;
            Some(label.place(x, y))
        })
        .collect();

    trace!(
        ?mode,
        rows,
        columns,
        cell_width,
        cell_height,
        bottom_label_height,
        "bar chart layout"
    );

    BarChartGeometry {
        mode,
        rows,
        columns,
        cell_width,
        cell_height,
        bottom_label_height,
        cells,
        axis_line,
        left_label,
        right_label,
        column_labels,
    }
}

fn column_centers(cells: &[BarCell]) -> Vec<f64> {
    cells
        .iter()
        .map(|cell| OrderedFloat(cell.rect.mid_x()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(OrderedFloat::into_inner)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{BarAxisSpec, BarLayoutInput, BarMode, layout_bar_chart};
    use crate::core::{EstimatedTextMetrics, Viewport};

    fn input<'a>(counts: &'a [u32], vertical_spacing: f64, axis: &'a BarAxisSpec) -> BarLayoutInput<'a> {
        BarLayoutInput {
            counts,
            viewport: Viewport::new(300.0, 100.0),
            horizontal_spacing: 10.0,
            vertical_spacing,
            axis,
            label_font_size_px: 10.0,
        }
    }

    #[test]
    fn merged_mode_with_all_zero_counts_sits_on_the_axis() {
        let axis = BarAxisSpec::default();
        let geometry = layout_bar_chart(input(&[0, 0], 0.0, &axis), &EstimatedTextMetrics::default());
        assert_eq!(geometry.mode, BarMode::Merged);
        assert_eq!(geometry.cells.len(), 2);
        for cell in &geometry.cells {
            assert_eq!(cell.rect.height, 0.0);
            assert_eq!(cell.rect.y, 100.0);
        }
    }

    #[test]
    fn separated_mode_rows_follow_max_count() {
        let axis = BarAxisSpec::default();
        let geometry = layout_bar_chart(input(&[1, 3], 2.0, &axis), &EstimatedTextMetrics::default());
        assert_eq!(geometry.rows, 3);
        assert_eq!(geometry.cells.len(), 6);
        assert_eq!(geometry.filled_cells().count(), 4);
    }

    #[test]
    fn centers_are_deduplicated_across_rows() {
        let axis = BarAxisSpec::default();
        let geometry = layout_bar_chart(input(&[2, 2, 2], 2.0, &axis), &EstimatedTextMetrics::default());
        assert_eq!(geometry.column_centers().len(), 3);
    }
}
