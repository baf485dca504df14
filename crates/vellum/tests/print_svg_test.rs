//! Integration tests for `print_svg` and the `DiagramRenderer` API
//!
//! These tests build small diagrams through the public API and check the
//! documents with the `svg` crate's own parser.

use svg::{node::element::tag::Type, parser::Event};

use vellum::{
    DiagramRenderer, VellumError,
    color::{Class, Color},
    config::{AppConfig, DocumentConfig, DEFAULT_MARGIN},
    draw::{
        Circle, LabelProps, Line, LineMarkers, LineProps, MarkerKind, Rectangle, ShapeProps,
        VisualElement, connection_line, diagonal_line,
    },
    geometry::{Point, Rotation, Side, Size},
    print_svg,
};

/// Collects every tag name, checking that start and end tags are balanced.
fn assert_well_formed(markup: &str) -> Vec<String> {
    let mut stack: Vec<String> = Vec::new();
    let mut seen = Vec::new();

    for event in svg::read(markup).expect("parser accepts the document") {
        match event {
            Event::Tag(name, Type::Start, _) => {
                stack.push(name.to_string());
                seen.push(name.to_string());
            }
            Event::Tag(name, Type::End, _) => {
                let open = stack.pop().expect("end tag without a start tag");
                assert_eq!(open, name, "mismatched end tag");
            }
            Event::Tag(name, Type::Empty, _) => seen.push(name.to_string()),
            Event::Error(err) => panic!("parse error: {err}"),
            _ => {}
        }
    }

    assert!(stack.is_empty(), "unclosed tags: {stack:?}");
    seen
}

/// Extracts the four numbers of the root `viewBox`.
fn view_box(markup: &str) -> [f64; 4] {
    let start = markup.find("viewBox=\"").expect("viewBox present") + "viewBox=\"".len();
    let end = start + markup[start..].find('"').expect("closing quote");
    let numbers: Vec<f64> = markup[start..end]
        .split_whitespace()
        .map(|n| n.parse().expect("numeric viewBox"))
        .collect();
    [numbers[0], numbers[1], numbers[2], numbers[3]]
}

#[test]
fn test_single_rectangle_document() {
    let rect = Rectangle::new(
        Point::new(40.0, 30.0),
        Size::new(120.0, 60.0),
        ShapeProps::new(Color::Blue),
    )
    .expect("valid rectangle");

    let markup = print_svg(&[rect.into()]).expect("render succeeds");

    let tags = assert_well_formed(&markup);
    assert_eq!(tags.first().map(String::as_str), Some("svg"));
    assert_eq!(tags.iter().filter(|tag| *tag == "rect").count(), 1);

    let [x, y, width, height] = view_box(&markup);
    assert!(x <= 40.0 - DEFAULT_MARGIN);
    assert!(y <= 30.0 - DEFAULT_MARGIN);
    assert!(x + width >= 160.0 + DEFAULT_MARGIN);
    assert!(y + height >= 90.0 + DEFAULT_MARGIN);
}

#[test]
fn test_empty_diagram_is_an_error() {
    assert!(matches!(print_svg(&[]), Err(VellumError::EmptyDiagram)));
}

#[test]
fn test_flat_line_without_margin_is_an_error() {
    let line: VisualElement = Line::new(
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        LineProps::new(Color::Blue).with_markers(LineMarkers::end(MarkerKind::Arrow)),
    )
    .expect("valid line")
    .into();

    let renderer = DiagramRenderer::new(AppConfig::new(
        DocumentConfig::new(Some(0.0), None),
        Default::default(),
    ));
    assert!(matches!(
        renderer.render_svg(std::slice::from_ref(&line)),
        Err(VellumError::DegenerateView { .. })
    ));

    // The default margin gives the same line a view with area.
    let [_, _, width, height] = view_box(&print_svg(&[line]).expect("render succeeds"));
    assert!(width > 100.0 && height > 0.0);
}

#[test]
fn test_topology_document() {
    let a: VisualElement = Circle::new(Point::new(40.0, 40.0), 16.0, ShapeProps::new(Color::Green))
        .and_then(|c| c.with_text(&["A"], LabelProps::default()))
        .expect("valid node")
        .into();
    let b: VisualElement = Circle::new(Point::new(200.0, 120.0), 16.0, ShapeProps::new(Color::Green))
        .and_then(|c| c.with_text(&["B"], LabelProps::default()))
        .expect("valid node")
        .into();

    let link = diagonal_line(&a, &b, LineProps::new(Color::Gray).with_class(Class::Dashed))
        .and_then(|line| line.with_text(&["10 ms"], Rotation::Left, 10.0, LabelProps::default()))
        .expect("nodes are apart");

    let markup = print_svg(&[link.into(), a, b]).expect("render succeeds");
    let tags = assert_well_formed(&markup);

    assert_eq!(tags.iter().filter(|tag| *tag == "marker").count(), 1);
    assert_eq!(tags.iter().filter(|tag| *tag == "circle").count(), 2);
    assert!(markup.contains("marker-end=\"url(#marker-arrow-gray)\""));
    assert!(markup.contains("class=\"gray dashed\""));
}

#[test]
fn test_view_box_covers_labels() {
    let left: VisualElement = Rectangle::new(
        Point::new(0.0, 0.0),
        Size::new(40.0, 40.0),
        ShapeProps::default(),
    )
    .expect("valid rectangle")
    .into();
    let right: VisualElement = Rectangle::new(
        Point::new(200.0, 0.0),
        Size::new(40.0, 40.0),
        ShapeProps::default(),
    )
    .expect("valid rectangle")
    .into();
    let link = connection_line(&left, Side::Right, &right, Side::Left, LineProps::default())
        .and_then(|line| {
            line.with_text(&["a", "tall", "label"], Rotation::Left, 30.0, LabelProps::default())
        })
        .expect("boxes are apart");

    let renderer = DiagramRenderer::new(AppConfig::new(
        DocumentConfig::new(Some(0.0), None),
        Default::default(),
    ));
    let markup = renderer
        .render_svg(&[link.into(), left, right])
        .expect("render succeeds");

    // The label sits above the boxes, so the view extends above y = 0.
    let [_, y, _, _] = view_box(&markup);
    assert!(y < -30.0, "viewBox starts at {y}");
}

#[test]
fn test_renderer_is_reusable() {
    let renderer = DiagramRenderer::default();
    let circle = |x: f64| -> VisualElement {
        Circle::new(Point::new(x, 0.0), 5.0, ShapeProps::default())
            .expect("valid circle")
            .into()
    };

    let first = renderer.render_svg(&[circle(0.0)]).expect("first render");
    let second = renderer.render_svg(&[circle(0.0)]).expect("second render");
    assert_eq!(first, second);

    let moved = renderer.render_svg(&[circle(50.0)]).expect("third render");
    assert_ne!(first, moved);
}
