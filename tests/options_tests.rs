use dashplot::api::{
    BarChart, BarOptions, ChartOptions, LineChart, LineOptions, PieChart, PieOptions,
};
use dashplot::core::{Orientation, Padding};
use dashplot::error::ChartError;

#[test]
fn missing_fields_fall_back_to_defaults() {
    let options: BarOptions = serde_json::from_str("{}").expect("parse");
    assert_eq!(options.chart.width, 600);
    assert_eq!(options.chart.height, 400);
    assert_eq!(options.chart.tick_count, 5);
    assert!(options.chart.show_legend && options.chart.show_tooltip);
    assert!(!options.stacked);
    assert_eq!(options.orientation, Orientation::Vertical);
    assert!((options.bar_padding - 0.1).abs() <= 1e-9);
    assert!((options.group_padding - 0.2).abs() <= 1e-9);
}

#[test]
fn flattened_chart_fields_parse_next_to_variant_fields() {
    let options: BarOptions = serde_json::from_str(
        r#"{"width": 300, "height": 150, "stacked": true, "orientation": "Horizontal"}"#,
    )
    .expect("parse");
    assert_eq!(options.chart.width, 300);
    assert!(options.stacked);
    assert_eq!(options.orientation, Orientation::Horizontal);
}

#[test]
fn options_round_trip_through_json() {
    let options = LineOptions {
        chart: ChartOptions::new()
            .with_size(800, 300)
            .with_title("Velocity"),
        smooth: true,
        tension: 0.4,
        ..LineOptions::default()
    };

    let json = serde_json::to_string(&options).expect("serialize");
    let parsed: LineOptions = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed, options);
}

#[test]
fn zero_sized_viewports_are_rejected_at_construction() {
    let options = BarOptions {
        chart: ChartOptions::new().with_size(0, 400),
        ..BarOptions::default()
    };
    match BarChart::new(options) {
        Err(ChartError::InvalidViewport { width, height }) => {
            assert_eq!(width, 0);
            assert_eq!(height, 400);
        }
        other => panic!("expected InvalidViewport, got {other:?}"),
    }
}

#[test]
fn padding_that_consumes_the_viewport_is_rejected() {
    let options = BarOptions {
        chart: ChartOptions::new()
            .with_size(100, 100)
            .with_padding(Padding::new(60.0, 0.0, 60.0, 0.0)),
        ..BarOptions::default()
    };
    assert!(matches!(
        BarChart::new(options),
        Err(ChartError::InvalidConfig(_))
    ));
}

#[test]
fn out_of_range_tension_is_rejected() {
    let options = LineOptions {
        tension: 2.0,
        ..LineOptions::default()
    };
    assert!(matches!(
        LineChart::new(options),
        Err(ChartError::InvalidConfig(_))
    ));
}

#[test]
fn out_of_range_inner_radius_is_rejected() {
    let options = PieOptions {
        doughnut: true,
        inner_radius: 1.5,
        ..PieOptions::default()
    };
    assert!(matches!(
        PieChart::new(options),
        Err(ChartError::InvalidConfig(_))
    ));
}

#[test]
fn zero_tick_count_is_rejected() {
    let options = BarOptions {
        chart: ChartOptions::new().with_tick_count(0),
        ..BarOptions::default()
    };
    assert!(matches!(
        BarChart::new(options),
        Err(ChartError::InvalidConfig(_))
    ));
}
