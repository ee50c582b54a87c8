use climb_stats::api::BarChartEngine;
use climb_stats::core::Viewport;
use climb_stats::grades::{GradeHistogram, GradeScale};
use climb_stats::render::NullRenderer;
use climb_stats::{GradeCatalog, telemetry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = telemetry::init_default_tracing();

    let catalog = GradeCatalog::builtin();
    let session = ["6A", "6A+", "6B", "6A", "6C", "7A", "5+", "6B+", "6A"];
    let histogram = GradeHistogram::from_labels(&catalog, GradeScale::Fontainebleau, session)?
        .trimmed();

    let mut engine = BarChartEngine::new(Viewport::new(390.0, 220.0))?;
    engine.set_data(histogram.counts.clone());
    if let Some((lowest, highest)) = histogram.endpoint_labels() {
        engine.add_bottom_axis_line(Some(lowest), Some(highest));
    }

    let mut renderer = NullRenderer::default();
    engine.render(&mut renderer)?;

    println!("scale: {} ({})", histogram.scale, catalog.examples(histogram.scale));
    println!("buckets: {:?}", histogram.buckets);
    println!("counts: {:?}", histogram.counts);
    println!(
        "geometry: mode={:?} rows={} columns={}",
        engine.mode(),
        engine.geometry().rows,
        engine.geometry().columns
    );
    println!(
        "frame primitives: rects={} lines={} texts={}",
        renderer.last_rect_count, renderer.last_line_count, renderer.last_text_count
    );

    Ok(())
}
