//! Protocol envelope: layers nested around a payload, sized from text estimates.

use vellum::{
    DrawError,
    color::{Class, Color},
    draw::{
        Alignment, HorizontalAlignment, LabelProps, Rectangle, ShapeProps, TEXT_MARGIN, Text,
        TextProps, VerticalAlignment, VisualElement, estimate_text_size_with_margin,
    },
    geometry::{Point, Size},
};

/// Protocol layers, outermost first.
const LAYERS: [(&str, Color); 3] = [
    ("Ethernet", Color::Brown),
    ("IPv4", Color::Blue),
    ("TCP", Color::Green),
];

const PAYLOAD: [&str; 2] = ["GET /index.html HTTP/1.1", "Host: example.org"];

const PADDING: f64 = 12.0;
const CORNER_RADIUS: f64 = 6.0;
const ORIGIN: Point = Point::new(20.0, 20.0);

pub(super) fn build() -> Result<Vec<VisualElement>, DrawError> {
    let payload_size = estimate_text_size_with_margin(&PAYLOAD);
    let header_height = estimate_text_size_with_margin(&["header"]).height();

    // Every layer adds padding on each side plus a header strip on top.
    let step = Point::new(PADDING, header_height + PADDING);
    let growth = Size::new(2.0 * PADDING, header_height + 2.0 * PADDING);

    let depth = LAYERS.len();
    let mut elements = Vec::with_capacity(depth + 1);

    for (level, (name, color)) in LAYERS.into_iter().enumerate() {
        let nested = (depth - level) as f64;
        let position = ORIGIN.add_point(step.scale(level as f64));
        let size = Size::new(
            payload_size.width() + growth.width() * nested,
            payload_size.height() + growth.height() * nested,
        );

        let header = Text::new(
            &[name],
            position.add_point(Point::new(TEXT_MARGIN, TEXT_MARGIN)),
            TextProps::new(color)
                .with_class(Class::Bold)
                .with_alignment(Alignment::new(
                    HorizontalAlignment::Left,
                    VerticalAlignment::Top,
                )),
        )?;

        let layer = Rectangle::new(position, size, ShapeProps::new(color).with_class(Class::Alpha))?
            .with_corner_radius(CORNER_RADIUS)?
            .with_child(header);
        elements.push(layer.into());
    }

    let payload = Rectangle::new(
        ORIGIN.add_point(step.scale(depth as f64)),
        payload_size,
        ShapeProps::new(Color::Gray).with_class(Class::Beta),
    )?
    .with_text(&PAYLOAD, LabelProps::new(Some(Color::Text)).with_class(Class::Mono))?;
    elements.push(payload.into());

    Ok(elements)
}
