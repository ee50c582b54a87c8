use climb_stats::api::{BarChartConfig, BarChartEngine, LineChartEngine};
use climb_stats::core::{BarMode, DataPoint, Viewport};
use climb_stats::render::NullRenderer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn separated_cells_stay_inside_the_viewport(
        counts in prop::collection::vec(0u32..12, 1..16),
        width in 1.0f64..1200.0,
        height in 100.0f64..800.0,
        horizontal in 0.0f64..8.0,
        vertical in 0.1f64..4.0
    ) {
        let mut engine = BarChartEngine::with_config(
            BarChartConfig::default().with_spacing(horizontal, vertical),
            Viewport::new(width, height),
        ).expect("engine init");
        engine.set_data(counts.clone());

        let geometry = engine.geometry();
        let max = counts.iter().copied().max().unwrap_or(0) as usize;
        prop_assert_eq!(geometry.mode, BarMode::Separated);
        prop_assert_eq!(geometry.rows, max);
        prop_assert_eq!(geometry.cells.len(), max * counts.len());
        prop_assert_eq!(
            geometry.filled_cells().count(),
            counts.iter().map(|&count| count as usize).sum::<usize>()
        );
        for cell in &geometry.cells {
            prop_assert!(cell.rect.x.is_finite() && cell.rect.y.is_finite());
            prop_assert!(cell.rect.width >= 0.0 && cell.rect.height >= 0.0);
            prop_assert!(cell.rect.y >= -1e-9);
            prop_assert!(cell.rect.max_y() <= height + 1e-6);
        }
    }

    #[test]
    fn merged_bar_heights_are_proportional_to_counts(
        counts in prop::collection::vec(0u32..50, 1..16),
        width in 1.0f64..1200.0,
        height in 1.0f64..800.0
    ) {
        let mut engine = BarChartEngine::with_config(
            BarChartConfig::default().with_spacing(2.0, 0.0),
            Viewport::new(width, height),
        ).expect("engine init");
        engine.set_data(counts.clone());

        let geometry = engine.geometry();
        prop_assert_eq!(geometry.mode, BarMode::Merged);
        prop_assert_eq!(geometry.cells.len(), counts.len());
        let max = counts.iter().copied().max().unwrap_or(0);
        for (cell, &count) in geometry.cells.iter().zip(&counts) {
            let expected = if max == 0 { 0.0 } else { height * f64::from(count) / f64::from(max) };
            prop_assert!((cell.rect.height - expected).abs() <= 1e-6);
            prop_assert!((cell.rect.max_y() - height).abs() <= 1e-6);
        }
    }

    #[test]
    fn column_labels_never_outnumber_columns(
        column_count in 0usize..12,
        label_count in 0usize..12
    ) {
        let mut engine = BarChartEngine::new(Viewport::new(600.0, 200.0)).expect("engine init");
        engine.set_data(vec![1; column_count]);
        engine.add_bottom_axis_line_with_column_labels((0..label_count).map(|i| format!("C{i}")));
        let placed = engine.geometry().column_labels.len();
        prop_assert_eq!(placed, column_count.min(label_count));
    }

    #[test]
    fn bar_layout_is_idempotent(
        counts in prop::collection::vec(0u32..12, 0..16),
        horizontal in 0.0f64..8.0,
        vertical in prop_oneof![Just(0.0f64), 0.1f64..4.0],
        labels in prop::collection::vec("[A-Z0-9]{0,3}", 0..16)
    ) {
        let mut engine = BarChartEngine::with_config(
            BarChartConfig::default().with_spacing(horizontal, vertical),
            Viewport::new(480.0, 240.0),
        ).expect("engine init");
        engine.add_bottom_axis_line_with_column_labels(labels);
        engine.set_data(counts.clone());
        let first = engine.geometry().clone();

        engine.set_data(counts);
        prop_assert_eq!(engine.geometry(), &first);
        engine.set_spacing(horizontal, vertical).expect("spacing");
        prop_assert_eq!(engine.geometry(), &first);
    }

    #[test]
    fn line_markers_are_sorted_and_inside_the_plot_area(
        raw in prop::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 0..40),
        width in 1.0f64..1200.0,
        height in 1.0f64..800.0
    ) {
        let mut engine = LineChartEngine::new(Viewport::new(width, height)).expect("engine init");
        engine.set_data(raw.iter().map(|&(x, y)| DataPoint::new(x, y)).collect());

        let geometry = engine.geometry();
        prop_assert_eq!(geometry.markers.len(), raw.len());
        prop_assert_eq!(geometry.segments.len(), raw.len().saturating_sub(1));
        for pair in geometry.markers.windows(2) {
            prop_assert!(pair[0].data.x <= pair[1].data.x);
            prop_assert!(pair[0].center.x <= pair[1].center.x + 1e-9);
        }
        for marker in &geometry.markers {
            prop_assert!(marker.center.x >= -1e-9 && marker.center.x <= width + 1e-9);
            prop_assert!(marker.center.y >= -1e-9 && marker.center.y <= height + 1e-9);
        }
        for segment in &geometry.segments {
            prop_assert!(segment.length() <= segment.from.distance_to(segment.to) + 1e-9);
        }

        let mut renderer = NullRenderer::default();
        engine.render(&mut renderer).expect("render");
        prop_assert_eq!(renderer.last_circle_count, raw.len());
    }

    #[test]
    fn line_layout_is_idempotent(
        raw in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 0..20)
    ) {
        let points: Vec<DataPoint> = raw.iter().map(|&(x, y)| DataPoint::new(x, y)).collect();
        let mut engine = LineChartEngine::new(Viewport::new(320.0, 240.0)).expect("engine init");
        engine.set_data(points.clone());
        let first = engine.geometry().clone();
        engine.set_data(points);
        prop_assert_eq!(engine.geometry(), &first);
    }
}
