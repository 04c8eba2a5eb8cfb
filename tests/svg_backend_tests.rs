use dashplot::api::{BarChart, BarOptions, Chart, ChartOptions, PieChart, PieOptions};
use dashplot::core::{CategorySeries, Dataset, ProportionSeries, Viewport};
use dashplot::render::{
    Color, NullRenderer, RectPrimitive, RenderFrame, Renderer, Stroke, SvgRenderer, TextAnchor,
    TextPrimitive,
};

#[test]
fn empty_frame_serializes_to_an_accessible_svg_shell() {
    let mut renderer = SvgRenderer::new("weekly commits");
    renderer
        .render(&RenderFrame::new(Viewport::new(600, 400)))
        .expect("render");

    let svg = renderer.document();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("role=\"img\""));
    assert!(svg.contains("aria-label=\"weekly commits\""));
    assert!(svg.contains("viewBox=\"0 0 600 400\""));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn labels_and_markup_characters_are_escaped() {
    let mut frame = RenderFrame::new(Viewport::new(100, 100));
    frame.push_text(TextPrimitive::new(
        "a<b & \"c\">",
        10.0,
        10.0,
        11.0,
        Color::rgb(0.0, 0.0, 0.0),
        TextAnchor::Start,
    ));

    let mut renderer = SvgRenderer::new("x < y");
    renderer.render(&frame).expect("render");

    let svg = renderer.document();
    assert!(svg.contains("aria-label=\"x &lt; y\""));
    assert!(svg.contains("a&lt;b &amp; &quot;c&quot;&gt;"));
    assert!(!svg.contains("a<b"));
}

#[test]
fn non_finite_geometry_is_rejected_before_serialization() {
    let mut frame = RenderFrame::new(Viewport::new(100, 100));
    frame.push_rect(RectPrimitive::filled(
        f64::NAN,
        0.0,
        10.0,
        10.0,
        Color::rgb(0.0, 0.0, 0.0),
    ));

    let mut renderer = SvgRenderer::new("broken");
    assert!(renderer.render(&frame).is_err());
    assert!(renderer.document().is_empty());
}

#[test]
fn stroke_attributes_are_serialized() {
    let mut frame = RenderFrame::new(Viewport::new(100, 100));
    frame.push_rect(
        RectPrimitive::filled(0.0, 0.0, 10.0, 10.0, Color::rgb8(0x10, 0xb9, 0x81))
            .with_stroke(Stroke::new(Color::rgb(1.0, 1.0, 1.0), 2.0)),
    );

    let mut renderer = SvgRenderer::new("swatch");
    renderer.render(&frame).expect("render");

    let svg = renderer.document();
    assert!(svg.contains("fill=\"#10b981\""));
    assert!(svg.contains("stroke=\"#ffffff\""));
    assert!(svg.contains("stroke-width=\"2\""));
}

#[test]
fn hex_colors_parse_in_short_and_long_form() {
    assert_eq!(
        Color::from_hex("#10b981").expect("parse").to_svg_paint(),
        "#10b981"
    );
    assert_eq!(
        Color::from_hex("#f00").expect("parse").to_svg_paint(),
        "#ff0000"
    );
    assert!(Color::from_hex("#10b9").is_err());
    assert!(Color::from_hex("red").is_err());
}

#[test]
fn null_renderer_validates_and_counts_primitives() {
    let mut chart = BarChart::new(BarOptions::default()).expect("chart init");
    let series = CategorySeries::new(
        vec!["a".into(), "b".into()],
        vec![Dataset::new("d", vec![1.0, 2.0])],
    );
    chart.render(&series).expect("render");

    let mut renderer = NullRenderer::default();
    renderer.render(chart.frame()).expect("render");
    assert_eq!(renderer.last_rect_count, 2);
    assert!(renderer.last_text_count > 0);
}

#[test]
fn chart_title_becomes_the_aria_label_with_a_generic_fallback() {
    let mut chart = BarChart::new(BarOptions {
        chart: ChartOptions::new().with_title("Weekly commits"),
        ..BarOptions::default()
    })
    .expect("chart init");
    let series = CategorySeries::new(vec!["a".into()], vec![Dataset::new("d", vec![1.0])]);
    chart.render(&series).expect("render");
    assert!(
        chart
            .to_svg()
            .expect("svg")
            .contains("aria-label=\"Weekly commits\"")
    );

    let mut untitled = BarChart::new(BarOptions::default()).expect("chart init");
    untitled.render(&series).expect("render");
    assert!(
        untitled
            .to_svg()
            .expect("svg")
            .contains("aria-label=\"bar chart\"")
    );
}

#[test]
fn zero_valued_chart_emits_no_nan_coordinates() {
    let mut chart = BarChart::new(BarOptions::default()).expect("chart init");
    let series = CategorySeries::new(
        vec!["a".into(), "b".into()],
        vec![Dataset::new("flat", vec![0.0, 0.0])],
    );
    chart.render(&series).expect("render");

    let svg = chart.to_svg().expect("svg");
    assert!(!svg.contains("NaN"));
    assert!(!svg.contains("inf"));
}

#[test]
fn pie_slices_serialize_as_arc_paths() {
    let mut chart = PieChart::new(PieOptions::default()).expect("chart init");
    let series = ProportionSeries::new(vec!["A".into(), "B".into()], vec![25.0, 75.0]);
    chart.render(&series).expect("render");

    let svg = chart.to_svg().expect("svg");
    assert!(svg.contains("<path d=\"M "));
    assert!(svg.contains(" A "));
    assert!(svg.contains("25.0%"));
}
