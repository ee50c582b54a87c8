use crate::core::{PlacedLabel, TextMetrics};
use crate::error::StatsResult;
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::BarChartEngine;

impl<M: TextMetrics> BarChartEngine<M> {
    /// Materializes the current geometry into draw commands.
    ///
    /// Only filled cells are emitted; unfilled cells are transparent.
    pub fn build_render_frame(&self) -> StatsResult<RenderFrame> {
        let config = self.config();
        let geometry = self.geometry();
        let mut frame = RenderFrame::new(self.viewport());

        for cell in geometry.filled_cells() {
            frame.rects.push(
                RectPrimitive::new(
                    cell.rect.x,
                    cell.rect.y,
                    cell.rect.width,
                    cell.rect.height,
                    config.cell_color,
                )
                .with_corner_radius(config.cell_corner_radius_px),
            );
        }

        if let Some(axis) = geometry.axis_line {
            frame.lines.push(LinePrimitive::new(
                axis.x_start,
                axis.y,
                axis.x_end,
                axis.y,
                config.axis_line_thickness_px,
                config.axis_line_color,
            ));
        }

        let labels = geometry
            .left_label
            .iter()
            .map(|label| (label, TextHAlign::Left))
            .chain(geometry.right_label.iter().map(|label| (label, TextHAlign::Right)))
            .chain(geometry.column_labels.iter().map(|label| (label, TextHAlign::Center)));
        for (label, h_align) in labels {
            frame.texts.push(label_text(
                label,
                h_align,
                config.axis_label_font_size_px,
                config.axis_label_text_color,
            ));
        }

        frame.validate()?;
        Ok(frame)
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> StatsResult<()> {
        let frame = self.build_render_frame()?;
        renderer.render(&frame)
    }
}

/// Anchors a placed label box at the edge or center named by `h_align`.
pub(super) fn label_text(
    label: &PlacedLabel,
    h_align: TextHAlign,
    font_size_px: f64,
    color: Color,
) -> TextPrimitive {
    let x = match h_align {
        TextHAlign::Left => label.rect.x,
        TextHAlign::Center => label.rect.mid_x(),
        TextHAlign::Right => label.rect.max_x(),
    };
    TextPrimitive::new(label.text.clone(), x, label.rect.y, font_size_px, color, h_align)
}
