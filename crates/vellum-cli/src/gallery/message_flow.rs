//! Message flow between two parties along vertical lifelines.

use vellum::{
    DrawError,
    color::{Class, Color},
    draw::{
        LabelProps, Line, LineMarkers, LineProps, MarkerKind, Rectangle, ShapeProps,
        VisualElement, connection_line, estimate_text_size_with_margin,
    },
    geometry::{Point, Rotation, Side},
};

const CLIENT_X: f64 = 120.0;
const SERVER_X: f64 = 420.0;
const HEAD_Y: f64 = 40.0;
const FOOT_Y: f64 = 380.0;
const FIRST_MESSAGE_Y: f64 = 120.0;
const MESSAGE_SPACING: f64 = 60.0;
const LABEL_DISTANCE: f64 = 6.0;

/// Messages in time order: label, color and whether it flows client to server.
const MESSAGES: [(&str, Color, bool); 4] = [
    ("SYN", Color::Blue, true),
    ("SYN-ACK", Color::Purple, false),
    ("ACK", Color::Blue, true),
    ("GET /", Color::Green, true),
];

fn party(name: &str, x: f64, y: f64) -> Result<VisualElement, DrawError> {
    let size = estimate_text_size_with_margin(&[name]);
    let party = Rectangle::centered(
        Point::new(x, y),
        size,
        ShapeProps::new(Color::Text).with_class(Class::Alpha),
    )?
    .with_corner_radius(4.0)?
    .with_text(&[name], LabelProps::default().with_class(Class::Bold))?;
    Ok(party.into())
}

fn message(y: f64, label: &str, color: Color, rightward: bool) -> Result<Line, DrawError> {
    let (from, to, rotation) = if rightward {
        (CLIENT_X, SERVER_X, Rotation::Left)
    } else {
        (SERVER_X, CLIENT_X, Rotation::Right)
    };

    Line::new(
        Point::new(from, y),
        Point::new(to, y),
        LineProps::new(color).with_markers(LineMarkers::end(MarkerKind::Arrow)),
    )?
    .shorten(0.0, MarkerKind::Arrow.length())?
    .with_text(&[label], rotation, LABEL_DISTANCE, LabelProps::default())
}

pub(super) fn build() -> Result<Vec<VisualElement>, DrawError> {
    let mut parties = Vec::new();
    let mut elements = Vec::new();

    for (name, x) in [("client", CLIENT_X), ("server", SERVER_X)] {
        let head = party(name, x, HEAD_Y)?;
        let foot = party(name, x, FOOT_Y)?;

        let lifeline = connection_line(
            &head,
            Side::Bottom,
            &foot,
            Side::Top,
            LineProps::new(Color::Gray)
                .with_class(Class::Dashed)
                .with_markers(LineMarkers::none()),
        )?;
        elements.push(lifeline.into());
        parties.extend([head, foot]);
    }

    for (index, (label, color, rightward)) in MESSAGES.into_iter().enumerate() {
        let y = FIRST_MESSAGE_Y + MESSAGE_SPACING * index as f64;
        elements.push(message(y, label, color, rightward)?.into());
    }

    elements.extend(parties);
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use vellum::draw::Visual;

    use super::*;

    fn messages(elements: &[VisualElement]) -> Vec<&Line> {
        elements[2..2 + MESSAGES.len()]
            .iter()
            .map(|element| match element {
                VisualElement::Line(line) => line,
                other => panic!("expected a line, got {}", other.kind()),
            })
            .collect()
    }

    #[test]
    fn test_element_order() {
        let elements = build().unwrap();
        let kinds: Vec<_> = elements.iter().map(VisualElement::kind).collect();

        assert_eq!(kinds.len(), 2 + MESSAGES.len() + 4);
        assert!(kinds[..2 + MESSAGES.len()].iter().all(|kind| *kind == "line"));
        assert!(kinds[2 + MESSAGES.len()..].iter().all(|kind| *kind == "rectangle"));
    }

    #[test]
    fn test_arrows_stop_short_of_the_lifeline() {
        let elements = build().unwrap();

        for (line, (_, _, rightward)) in messages(&elements).into_iter().zip(MESSAGES) {
            let target = if rightward { SERVER_X } else { CLIENT_X };
            assert_approx_eq!(
                f64,
                (line.end().x() - target).abs(),
                MarkerKind::Arrow.length(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_labels_sit_above_their_messages() {
        let elements = build().unwrap();

        for line in messages(&elements) {
            let label = line.children()[0].bounding_box();
            assert!(label.max_y() <= line.start().y());
            assert!(label.contains(label.center().with_x(line.midpoint().x())));
        }
    }

    #[test]
    fn test_lifelines_are_vertical() {
        let elements = build().unwrap();

        for element in &elements[..2] {
            let VisualElement::Line(lifeline) = element else {
                panic!("expected a lifeline");
            };
            assert_eq!(lifeline.start().x(), lifeline.end().x());
            assert!(lifeline.start().y() < lifeline.end().y());
            assert_eq!(lifeline.markers(), LineMarkers::none());
        }
    }
}
