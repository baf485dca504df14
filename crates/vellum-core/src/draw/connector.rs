//! Lines anchored to the boundaries of other elements.
//!
//! Connectors never start at a shape's center. [`connection_line`] attaches
//! to the midpoint of a chosen side of each bounding box, while
//! [`diagonal_line`] meets round shapes on their outline, wherever the line
//! between the two centers crosses it. In both cases each end is pulled back
//! by the length of its marker so that the marker's tip, not its base,
//! touches the shape.

use log::debug;

use super::{Line, LineMarkers, LineProps, MarkerKind, Visual, VisualElement};
use crate::{
    DrawError,
    geometry::{Point, Side},
};

fn resolve_markers(props: &LineProps) -> LineMarkers {
    props.markers.unwrap_or(LineMarkers::end(MarkerKind::Arrow))
}

/// Connects a side of one element to a side of another.
///
/// Markers default to an arrowhead at the end.
///
/// # Errors
///
/// Returns [`DrawError::DegenerateGeometry`] if both anchors coincide or the
/// gap between them is too short for the markers.
///
/// # Examples
///
/// ```
/// # use vellum_core::draw::{connection_line, LineProps, Rectangle, ShapeProps, VisualElement};
/// # use vellum_core::geometry::{Point, Side, Size};
/// let a: VisualElement =
///     Rectangle::new(Point::new(0.0, 0.0), Size::new(40.0, 20.0), ShapeProps::default())
///         .unwrap()
///         .into();
/// let b: VisualElement =
///     Rectangle::new(Point::new(100.0, 0.0), Size::new(40.0, 20.0), ShapeProps::default())
///         .unwrap()
///         .into();
///
/// let line = connection_line(&a, Side::Right, &b, Side::Left, LineProps::default()).unwrap();
/// assert_eq!(line.start(), Point::new(40.0, 10.0));
/// assert_eq!(line.end(), Point::new(92.0, 10.0));
/// ```
pub fn connection_line(
    start: &VisualElement,
    start_side: Side,
    end: &VisualElement,
    end_side: Side,
    props: LineProps,
) -> Result<Line, DrawError> {
    let markers = resolve_markers(&props);
    let start_bounds = start.bounding_box();
    let end_bounds = end.bounding_box();

    let from = start_bounds.point_at(start_side, markers.start_offset());
    let to = end_bounds.point_at(end_side, markers.end_offset());

    // The markers must fit between the anchors without flipping the line.
    let room = markers.start_offset() + markers.end_offset();
    if room > 0.0 {
        let raw = end_bounds
            .point_at(end_side, 0.0)
            .sub_point(start_bounds.point_at(start_side, 0.0));
        if raw.length() <= room || raw.dot(to.sub_point(from)) <= 0.0 {
            return Err(DrawError::degenerate(format!(
                "gap of {} between anchors leaves no room for markers of total length {room}",
                raw.length()
            )));
        }
    }

    debug!(
        from:% = from,
        to:% = to,
        start_kind = start.kind(),
        end_kind = end.kind();
        "Anchored connection line"
    );

    Line::new(
        from,
        to,
        LineProps {
            markers: Some(markers),
            ..props
        },
    )
}

/// Returns the fraction of `delta` from an ellipse center to its outline.
fn boundary_fraction(delta: Point, rx: f64, ry: f64) -> f64 {
    let scaled = Point::new(delta.x() / rx, delta.y() / ry);
    1.0 / scaled.length()
}

fn round_shape(element: &VisualElement) -> Result<(Point, f64, f64), DrawError> {
    element.radii().ok_or(DrawError::UnsupportedShape {
        operation: "diagonal_line",
        shape: element.kind(),
    })
}

/// Connects two circles or ellipses along the line between their centers.
///
/// Each end lies on the outline of its shape, then is pulled back by the
/// length of its marker. Markers default to an arrowhead at the end.
///
/// # Errors
///
/// - [`DrawError::UnsupportedShape`] if either element is not round.
/// - [`DrawError::DegenerateGeometry`] if the shapes share a center, overlap,
///   or leave no room for the markers.
pub fn diagonal_line(
    start: &VisualElement,
    end: &VisualElement,
    props: LineProps,
) -> Result<Line, DrawError> {
    let (c1, rx1, ry1) = round_shape(start)?;
    let (c2, rx2, ry2) = round_shape(end)?;

    let delta = c2.sub_point(c1);
    if delta.is_zero() {
        return Err(DrawError::degenerate(format!(
            "cannot draw a diagonal line between shapes sharing the center {c1}"
        )));
    }

    let t1 = boundary_fraction(delta, rx1, ry1);
    let t2 = boundary_fraction(delta, rx2, ry2);
    if t1 + t2 >= 1.0 {
        return Err(DrawError::degenerate(format!(
            "shapes centered at {c1} and {c2} overlap"
        )));
    }

    let from = c1.add_point(delta.scale(t1));
    let to = c2.sub_point(delta.scale(t2));
    let markers = resolve_markers(&props);

    debug!(from:% = from, to:% = to; "Anchored diagonal line");

    Line::new(
        from,
        to,
        LineProps {
            markers: Some(markers),
            ..props
        },
    )?
    .shorten(markers.start_offset(), markers.end_offset())
}
