use graphic_charts::api::{ChartConfig, ChartEngine};
use graphic_charts::core::{ChartKind, Record, WrappedLabel, WrappedLine};
use graphic_charts::render::{
    LegendItem, LinePrimitive, RectPrimitive, RenderFrame, Renderer, SvgRenderer, TextPrimitive,
};

#[test]
fn frame_serializes_to_translated_group() {
    let frame = RenderFrame::new(120.0, 80.0, 10.0, 5.0)
        .with_element(RectPrimitive::new(0.0, 0.0, 20.0, 30.0, "#478CCC").with_class("bar a"))
        .with_element(LinePrimitive::new(0.0, 1.5, 100.0, 1.5, "#DDDDDD").with_class("grid"));
    let svg = SvgRenderer::to_svg_string(&frame).expect("svg");

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="80">"#));
    assert!(svg.contains(r#"<g transform="translate(10,5)">"#));
    assert!(svg.contains(r##"<rect x="0" y="0" width="20" height="30" fill="#478CCC" class="bar a"/>"##));
    assert!(svg.contains(r##"style="stroke: #DDDDDD; stroke-width: 1;"/>"##));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn wrapped_text_becomes_tspans() {
    let label = WrappedLabel {
        lines: vec![
            WrappedLine {
                text: "Liberal".to_owned(),
                dx: 32.0,
                dy: 3.0,
            },
            WrappedLine {
                text: "National".to_owned(),
                dx: 32.0,
                dy: 19.0,
            },
        ],
    };
    let frame = RenderFrame::new(100.0, 100.0, 0.0, 0.0)
        .with_element(TextPrimitive::wrapped(label, 50.0, 40.0).with_class("label"));
    let svg = SvgRenderer::to_svg_string(&frame).expect("svg");

    assert!(svg.contains(r#"<tspan x="50" y="40" dx="32" dy="3">Liberal</tspan>"#));
    assert!(svg.contains(r#"<tspan x="50" y="40" dx="32" dy="19">National</tspan>"#));
}

#[test]
fn hidden_text_gets_hidden_class_and_text_is_escaped() {
    let frame = RenderFrame::new(100.0, 100.0, 0.0, 0.0).with_element(
        TextPrimitive::new("A & B", 1.0, 2.0)
            .with_class("value a")
            .with_hidden(true),
    );
    let svg = SvgRenderer::to_svg_string(&frame).expect("svg");
    assert!(svg.contains(r#"class="value a hidden">A &amp; B</text>"#));
}

#[test]
fn legend_renders_as_color_key_list() {
    let html = SvgRenderer::to_legend_html(&[LegendItem {
        label: "Yes".to_owned(),
        color: "#1F79CD".to_owned(),
        class: graphic_charts::render::ClassList::new("key-item key-0 yes"),
    }])
    .expect("legend");

    assert!(html.starts_with(r#"<ul class="key">"#));
    assert!(html.contains(
        r##"<li class="key-item key-0 yes"><b style="background-color: #1F79CD;"></b><label>Yes</label></li>"##
    ));
    assert_eq!(SvgRenderer::to_legend_html(&[]).expect("empty"), "");
}

#[test]
fn renderer_rejects_invalid_frames() {
    let mut renderer = SvgRenderer::new();
    let frame = RenderFrame::new(0.0, 100.0, 0.0, 0.0);
    assert!(renderer.render(&frame).is_err());
    assert!(renderer.last_svg().is_empty());

    let bad_rect = RenderFrame::new(10.0, 10.0, 0.0, 0.0)
        .with_element(RectPrimitive::new(0.0, 0.0, -1.0, 5.0, "#000"));
    assert!(renderer.render(&bad_rect).is_err());
}

#[test]
fn engine_output_is_stable_across_renders() {
    let records =
        Record::many_from_json_str(r#"[{"label":"A","amt":"1"},{"label":"B","amt":"3"}]"#)
            .expect("records");
    let mut engine = ChartEngine::new(
        SvgRenderer::new(),
        ChartKind::Pie,
        records,
        ChartConfig::default().with_colors("ptylab,ptylib"),
    )
    .expect("engine init");

    engine.render(Some(500.0)).expect("first");
    let first = engine.renderer().last_svg().to_owned();
    engine.render(Some(500.0)).expect("second");

    assert_eq!(engine.renderer().last_svg(), first);
    assert!(first.contains(r#"class="arc a""#));
    assert!(first.contains("fill: #C04745;"));
    assert!(first.contains("fill: #4776BE;"));
}
