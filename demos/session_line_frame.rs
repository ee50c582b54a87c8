use chrono::NaiveDate;
use climb_stats::api::LineChartEngine;
use climb_stats::core::{DataPoint, Viewport};
use climb_stats::telemetry;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = telemetry::init_default_tracing();

    let sessions = [
        ((2024, 4, 2), 3.0),
        ((2024, 3, 5), 2.0),
        ((2024, 3, 19), 4.0),
        ((2024, 4, 16), 5.0),
        ((2024, 5, 1), 4.0),
    ];
    let mut points = Vec::with_capacity(sessions.len());
    for ((year, month, day), hardest) in sessions {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or("invalid session date")?;
        points.push(DataPoint::from_session_date(date, hardest)?);
    }

    let mut engine = LineChartEngine::new(Viewport::new(390.0, 200.0))?;
    engine.set_data(points);
    engine.add_grid_line(4.0, Some("V4"))?;
    engine.add_top_axis_line(None, Some("hardest send"));
    engine.add_bottom_axis_line(Some("mar"), Some("may"));

    let frame = engine.build_render_frame()?;
    for marker in &engine.geometry().markers {
        println!(
            "day {:>6} value {:>3} -> ({:.1}, {:.1})",
            marker.data.x, marker.data.y, marker.center.x, marker.center.y
        );
    }
    println!(
        "frame primitives: lines={} circles={} texts={}",
        frame.lines.len(),
        frame.circles.len(),
        frame.texts.len()
    );

    Ok(())
}
