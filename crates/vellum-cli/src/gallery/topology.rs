//! Network topology: an uplink, a router and hosts joined by diagonal links.

use vellum::{
    DrawError,
    color::{Class, Color},
    draw::{
        Circle, Ellipse, LabelProps, LineMarkers, LineProps, MarkerKind, ShapeProps, VisualElement,
        diagonal_line,
    },
    geometry::{Point, Rotation},
};

const NODE_RADIUS: f64 = 24.0;
const LABEL_DISTANCE: f64 = 12.0;

/// Hosts hanging off the router: name, position and link label.
const HOSTS: [(&str, Point, &str); 3] = [
    ("db", Point::new(140.0, 360.0), "1 Gb/s"),
    ("web", Point::new(320.0, 380.0), "10 Gb/s"),
    ("cache", Point::new(500.0, 360.0), "1 Gb/s"),
];

pub(super) fn build() -> Result<Vec<VisualElement>, DrawError> {
    let internet: VisualElement = Ellipse::new(
        Point::new(320.0, 60.0),
        90.0,
        36.0,
        ShapeProps::new(Color::Blue).with_class(Class::Alpha),
    )?
    .with_text(&["Internet"], LabelProps::default())?
    .into();

    let router: VisualElement = Circle::new(
        Point::new(320.0, 200.0),
        NODE_RADIUS + 6.0,
        ShapeProps::new(Color::Orange).with_class(Class::Beta),
    )?
    .with_text(&["gw"], LabelProps::default())?
    .into();

    let uplink = diagonal_line(
        &router,
        &internet,
        LineProps::new(Color::Blue)
            .with_class(Class::Thick)
            .with_markers(LineMarkers::both(MarkerKind::Arrow)),
    )?
    .with_text(&["uplink"], Rotation::Right, LABEL_DISTANCE, LabelProps::default())?;

    // Links go first so the nodes are drawn over their ends.
    let mut links: Vec<VisualElement> = vec![uplink.into()];
    let mut nodes = vec![internet, router.clone()];

    for (name, center, speed) in HOSTS {
        let host: VisualElement = Circle::new(center, NODE_RADIUS, ShapeProps::new(Color::Green))?
            .with_text(&[name], LabelProps::default())?
            .into();

        let link = diagonal_line(
            &router,
            &host,
            LineProps::new(Color::Gray).with_class(Class::Dashed),
        )?
        .with_text(
            &[speed],
            Rotation::Left,
            LABEL_DISTANCE,
            LabelProps::new(Some(Color::Text)).with_class(Class::Italic),
        )?;

        links.push(link.into());
        nodes.push(host);
    }

    links.extend(nodes);
    Ok(links)
}
