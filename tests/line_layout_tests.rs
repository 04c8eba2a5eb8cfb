use approx::assert_relative_eq;
use dashplot::core::{
    CategorySeries, Dataset, LinePoint, Padding, PlotArea, Viewport, project_line_series,
    smooth_segments,
};

fn plot(width: u32, height: u32) -> PlotArea {
    PlotArea::from_viewport(Viewport::new(width, height), Padding::new(0.0, 0.0, 0.0, 0.0))
        .expect("plot area")
}

#[test]
fn categories_are_placed_at_equal_intervals() {
    let series = CategorySeries::new(
        vec!["a".into(), "b".into(), "c".into()],
        vec![Dataset::new("trend", vec![0.0, 50.0, 100.0])],
    );

    let lines = project_line_series(&series, &[], plot(400, 200)).expect("project");
    assert_eq!(lines.len(), 1);
    let points = &lines[0].points;

    assert_relative_eq!(points[0].x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(points[1].x, 200.0, epsilon = 1e-9);
    assert_relative_eq!(points[2].x, 400.0, epsilon = 1e-9);

    // Shared 0..=100 scale over 200px.
    assert_relative_eq!(points[0].y, 200.0, epsilon = 1e-9);
    assert_relative_eq!(points[1].y, 100.0, epsilon = 1e-9);
    assert_relative_eq!(points[2].y, 0.0, epsilon = 1e-9);
}

#[test]
fn single_category_degenerates_to_one_centered_point() {
    let series = CategorySeries::new(
        vec!["only".into()],
        vec![Dataset::new("trend", vec![10.0])],
    );

    let lines = project_line_series(&series, &[], plot(300, 200)).expect("project");
    assert_eq!(lines[0].points.len(), 1);
    assert_relative_eq!(lines[0].points[0].x, 150.0, epsilon = 1e-9);
    assert!(smooth_segments(&lines[0].points, 0.3).is_empty());
}

#[test]
fn value_scale_is_shared_across_datasets() {
    let series = CategorySeries::new(
        vec!["a".into(), "b".into()],
        vec![
            Dataset::new("low", vec![10.0, 10.0]),
            Dataset::new("high", vec![100.0, 100.0]),
        ],
    );

    let lines = project_line_series(&series, &[], plot(200, 100)).expect("project");
    // Max is 100 for both datasets, so the low series sits at 10% height.
    assert_relative_eq!(lines[0].points[0].y, 90.0, epsilon = 1e-9);
    assert_relative_eq!(lines[1].points[0].y, 0.0, epsilon = 1e-9);
}

#[test]
fn all_zero_values_project_onto_the_baseline() {
    let series = CategorySeries::new(
        vec!["a".into(), "b".into()],
        vec![Dataset::new("flat", vec![0.0, 0.0])],
    );

    let lines = project_line_series(&series, &[], plot(200, 100)).expect("project");
    for point in &lines[0].points {
        assert!(point.x.is_finite() && point.y.is_finite());
        assert_relative_eq!(point.y, 100.0, epsilon = 1e-9);
    }
}

#[test]
fn smooth_segment_control_points_offset_by_tension() {
    let points = [
        LinePoint {
            x: 0.0,
            y: 100.0,
            category_index: 0,
            dataset_index: 0,
            value: 0.0,
        },
        LinePoint {
            x: 100.0,
            y: 0.0,
            category_index: 1,
            dataset_index: 0,
            value: 10.0,
        },
    ];

    let segments = smooth_segments(&points, 0.25);
    assert_eq!(segments.len(), 1);

    let segment = segments[0];
    assert_relative_eq!(segment.c1x, 25.0, epsilon = 1e-9);
    assert_relative_eq!(segment.c1y, 100.0, epsilon = 1e-9);
    assert_relative_eq!(segment.c2x, 75.0, epsilon = 1e-9);
    assert_relative_eq!(segment.c2y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(segment.x, 100.0, epsilon = 1e-9);
    assert_relative_eq!(segment.y, 0.0, epsilon = 1e-9);
}

#[test]
fn inactive_datasets_are_skipped() {
    let series = CategorySeries::new(
        vec!["a".into()],
        vec![
            Dataset::new("visible", vec![1.0]),
            Dataset::new("hidden", vec![2.0]),
        ],
    );

    let lines = project_line_series(&series, &[true, false], plot(200, 100)).expect("project");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].dataset_index, 0);
}
