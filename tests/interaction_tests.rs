use dashplot::api::{BarChart, BarOptions, Chart, ChartOptions, PieChart, PieOptions};
use dashplot::core::{CategorySeries, Dataset, Padding, ProportionSeries, Viewport};
use dashplot::interaction::{HitShape, place_tooltip};

#[test]
fn tooltip_sits_above_right_of_the_pointer_by_default() {
    let (x, y) = place_tooltip(50.0, 200.0, 100.0, 50.0, Viewport::new(600, 400));
    assert!((x - 60.0).abs() <= 1e-9);
    assert!((y - 140.0).abs() <= 1e-9);
}

#[test]
fn tooltip_overflowing_the_right_edge_is_shifted_left() {
    let (x, _) = place_tooltip(580.0, 200.0, 100.0, 50.0, Viewport::new(600, 400));
    assert!((x - 470.0).abs() <= 1e-9);
}

#[test]
fn tooltip_overflowing_the_top_is_flipped_below_the_pointer() {
    let (_, y) = place_tooltip(50.0, 30.0, 100.0, 50.0, Viewport::new(600, 400));
    assert!((y - 40.0).abs() <= 1e-9);
}

#[test]
fn tooltip_never_leaves_the_viewport() {
    for &(ax, ay) in &[(0.0, 0.0), (599.0, 399.0), (300.0, 0.0), (0.0, 399.0)] {
        let (x, y) = place_tooltip(ax, ay, 120.0, 60.0, Viewport::new(600, 400));
        assert!(x >= 0.0 && x + 120.0 <= 600.0 + 1e-9);
        assert!(y >= 0.0 && y + 60.0 <= 400.0 + 1e-9);
    }
}

#[test]
fn sector_hit_testing_respects_angle_and_radius() {
    let sector = HitShape::Sector {
        cx: 0.0,
        cy: 0.0,
        inner_radius: 0.0,
        outer_radius: 10.0,
        start_angle: -90.0,
        sweep_angle: 90.0,
    };

    // Upper-right quadrant is inside; upper-left and far points are not.
    assert!(sector.contains(3.0, -3.0));
    assert!(!sector.contains(-3.0, -3.0));
    assert!(!sector.contains(20.0, -1.0));
}

#[test]
fn annular_sector_excludes_the_doughnut_hole() {
    let sector = HitShape::Sector {
        cx: 0.0,
        cy: 0.0,
        inner_radius: 5.0,
        outer_radius: 10.0,
        start_angle: -90.0,
        sweep_angle: 360.0,
    };

    assert!(!sector.contains(1.0, -1.0));
    assert!(sector.contains(7.0, 0.0));
}

fn bar_chart() -> BarChart {
    let options = BarOptions {
        chart: ChartOptions::new()
            .with_size(300, 200)
            .with_padding(Padding::new(0.0, 0.0, 0.0, 0.0)),
        ..BarOptions::default()
    };
    BarChart::new(options).expect("chart init")
}

#[test]
fn hovering_a_bar_raises_a_tooltip_and_leaving_tears_it_down() {
    let mut chart = bar_chart();
    let series = CategorySeries::new(
        vec!["Mon".into(), "Tue".into(), "Wed".into()],
        vec![Dataset::new("Commits", vec![5.0, 0.0, 10.0])],
    );
    chart.render(&series).expect("render");
    let bare_rects = chart.frame().rects.len();

    // The Wed bar spans x 214..286 over the full plot height.
    let visible = chart.pointer_move(250.0, 100.0).expect("pointer move");
    assert!(visible);
    assert!(chart.frame().rects.len() > bare_rects);
    assert!(
        chart
            .frame()
            .texts
            .iter()
            .any(|text| text.text.contains("Wed"))
    );

    chart.pointer_leave().expect("pointer leave");
    assert_eq!(chart.frame().rects.len(), bare_rects);
}

#[test]
fn pointer_over_empty_space_shows_no_tooltip() {
    let mut chart = bar_chart();
    let series = CategorySeries::new(
        vec!["Mon".into(), "Tue".into(), "Wed".into()],
        vec![Dataset::new("Commits", vec![5.0, 0.0, 10.0])],
    );
    chart.render(&series).expect("render");

    let visible = chart.pointer_move(5.0, 5.0).expect("pointer move");
    assert!(!visible);
}

#[test]
fn disabled_tooltips_ignore_pointer_events() {
    let options = BarOptions {
        chart: ChartOptions::new().with_tooltip(false),
        ..BarOptions::default()
    };
    let mut chart = BarChart::new(options).expect("chart init");
    let series = CategorySeries::new(
        vec!["a".into()],
        vec![Dataset::new("d", vec![10.0])],
    );
    chart.render(&series).expect("render");

    let visible = chart.pointer_move(300.0, 200.0).expect("pointer move");
    assert!(!visible);
}

#[test]
fn hovering_a_slice_reports_value_and_percentage() {
    let mut chart = PieChart::new(PieOptions {
        chart: ChartOptions::new()
            .with_size(200, 200)
            .with_padding(Padding::new(0.0, 0.0, 0.0, 0.0))
            .with_legend(false),
        ..PieOptions::default()
    })
    .expect("chart init");

    let series = ProportionSeries::new(vec!["A".into(), "B".into()], vec![25.0, 75.0]);
    chart.render(&series).expect("render");

    // Slice A covers -90..0 degrees; probe its angular middle.
    let visible = chart.pointer_move(130.0, 70.0).expect("pointer move");
    assert!(visible);
    assert!(
        chart
            .frame()
            .texts
            .iter()
            .any(|text| text.text.contains("25.0%"))
    );
}
