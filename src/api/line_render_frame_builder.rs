use crate::core::TextMetrics;
use crate::error::StatsResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, RenderFrame, Renderer, TextHAlign,
};

use super::LineChartEngine;
use super::bar_render_frame_builder::label_text;

impl<M: TextMetrics> LineChartEngine<M> {
    /// Materializes the current geometry into draw commands.
    ///
    /// Grid lines come first so data strokes sit above them; invisible
    /// segments (overlapping markers) are skipped.
    pub fn build_render_frame(&self) -> StatsResult<RenderFrame> {
        let config = self.config();
        let style = config.style;
        let geometry = self.geometry();
        let mut frame = RenderFrame::new(self.viewport());

        let dash = LineStrokeStyle::Dashed(config.grid_line_dash_pattern.clone());
        for grid in &geometry.grid_lines {
            frame.lines.push(
                LinePrimitive::new(
                    grid.line.x_start,
                    grid.line.y,
                    grid.line.x_end,
                    grid.line.y,
                    config.grid_line_thickness_px,
                    style.grid_line_color,
                )
                .with_stroke_style(dash.clone()),
            );
        }

        for axis in geometry.top_axis.iter().chain(geometry.bottom_axis.iter()) {
            frame.lines.push(LinePrimitive::new(
                axis.line.x_start,
                axis.line.y,
                axis.line.x_end,
                axis.line.y,
                config.axis_line_thickness_px,
                style.axis_line_color,
            ));
        }

        for segment in geometry.segments.iter().filter(|segment| segment.is_visible()) {
            frame.lines.push(LinePrimitive::new(
                segment.start.x,
                segment.start.y,
                segment.end.x,
                segment.end.y,
                config.line_thickness_px,
                style.line_color,
            ));
        }

        for marker in &geometry.markers {
            frame.circles.push(CirclePrimitive {
                center_x: marker.center.x,
                center_y: marker.center.y,
                radius: config.dot_diameter_px * 0.5,
                border_width: config.dot_border_thickness_px,
                border_color: style.dot_color,
                fill_color: Color::TRANSPARENT,
            });
        }

        for label in geometry.grid_lines.iter().filter_map(|grid| grid.label.as_ref()) {
            frame.texts.push(label_text(
                label,
                TextHAlign::Right,
                config.grid_label_font_size_px,
                style.grid_label_text_color,
            ));
        }
        for axis in geometry.top_axis.iter().chain(geometry.bottom_axis.iter()) {
            let labels = axis
                .left_label
                .iter()
                .map(|label| (label, TextHAlign::Left))
                .chain(axis.right_label.iter().map(|label| (label, TextHAlign::Right)));
            for (label, h_align) in labels {
                frame.texts.push(label_text(
                    label,
                    h_align,
                    config.axis_label_font_size_px,
                    style.axis_label_text_color,
                ));
            }
        }

        frame.validate()?;
        Ok(frame)
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> StatsResult<()> {
        let frame = self.build_render_frame()?;
        renderer.render(&frame)
    }
}
