//! Straight lines with optional end markers and attached labels.

use svg::node::element as svg_element;

use super::{
    LabelProps, LineMarkers, MarkerRegistry, SvgNode, Text, Visual, VisualElement,
    determine_alignment, ensure_finite_point,
    presentation::{FillRule, Presentation},
};
use crate::{
    DrawError,
    color::{Class, Color},
    geometry::{BoundingBox, Point, Rotation, round_coordinate},
};

/// Presentation and markers for a line.
///
/// `markers: None` selects the default for the constructor: no markers for
/// [`Line::new`], an arrowhead at the end for the connectors.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LineProps {
    pub color: Color,
    pub classes: Vec<Class>,
    pub markers: Option<LineMarkers>,
}

impl LineProps {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    pub fn with_markers(mut self, markers: LineMarkers) -> Self {
        self.markers = Some(markers);
        self
    }
}

/// A straight segment between two distinct points.
///
/// # Examples
///
/// ```
/// # use vellum_core::draw::{Line, LineProps};
/// # use vellum_core::geometry::Point;
/// let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), LineProps::default())
///     .unwrap()
///     .shorten(10.0, 10.0)
///     .unwrap();
/// assert_eq!(line.start(), Point::new(10.0, 0.0));
/// assert_eq!(line.end(), Point::new(90.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
    presentation: Presentation,
    markers: LineMarkers,
    children: Vec<VisualElement>,
}

impl Line {
    /// Creates a line between two points.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DegenerateGeometry`] if either point is not finite
    /// or both points coincide.
    pub fn new(start: Point, end: Point, props: LineProps) -> Result<Self, DrawError> {
        ensure_finite_point(start, "line start")?;
        ensure_finite_point(end, "line end")?;
        if start == end {
            return Err(DrawError::degenerate(format!(
                "line from {start} to {end} has zero length"
            )));
        }
        Ok(Self {
            start,
            end,
            presentation: Presentation::new(props.color, props.classes),
            markers: props.markers.unwrap_or_default(),
            children: Vec::new(),
        })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn markers(&self) -> LineMarkers {
        self.markers
    }

    pub fn color(&self) -> Color {
        self.presentation.color()
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Returns the unit vector pointing from start to end.
    pub fn direction(&self) -> Result<Point, DrawError> {
        self.end.sub_point(self.start).normalize(1.0)
    }

    /// Returns a copy with each endpoint pulled toward the other.
    ///
    /// Markers, presentation and children are kept.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DegenerateGeometry`] if an offset is negative or
    /// not finite, or if the offsets together consume the whole line.
    pub fn shorten(&self, start_offset: f64, end_offset: f64) -> Result<Self, DrawError> {
        for offset in [start_offset, end_offset] {
            if !offset.is_finite() || offset < 0.0 {
                return Err(DrawError::degenerate(format!(
                    "shorten offsets must be finite and non-negative, got {offset}"
                )));
            }
        }

        let length = self.length();
        if start_offset + end_offset >= length {
            return Err(DrawError::degenerate(format!(
                "cannot shorten a line of length {} by {} and {}",
                round_coordinate(length),
                start_offset,
                end_offset
            )));
        }

        let direction = self.direction()?;
        Ok(Self {
            start: self.start.add_point(direction.scale(start_offset)),
            end: self.end.sub_point(direction.scale(end_offset)),
            ..self.clone()
        })
    }

    /// Creates a label beside the line.
    ///
    /// The label is anchored at the midpoint, displaced perpendicular to the
    /// line by `distance` towards `rotation`, and aligned so it grows away
    /// from the line. It takes the line's color unless `props` overrides it.
    ///
    /// # Errors
    ///
    /// Fails if `lines` is empty or `distance` is not finite.
    pub fn text(
        &self,
        lines: &[&str],
        rotation: Rotation,
        distance: f64,
        props: LabelProps,
    ) -> Result<Text, DrawError> {
        if !distance.is_finite() {
            return Err(DrawError::degenerate(format!(
                "label distance must be finite, got {distance}"
            )));
        }
        let offset = self.direction()?.scale(distance).rotate(rotation);
        let text_props = props.into_text_props(self.color(), determine_alignment(offset));
        Text::new(lines, self.midpoint().add_point(offset), text_props)
    }

    /// Returns a copy with a label from [`Line::text`] attached as a child.
    pub fn with_text(
        self,
        lines: &[&str],
        rotation: Rotation,
        distance: f64,
        props: LabelProps,
    ) -> Result<Self, DrawError> {
        let label = self.text(lines, rotation, distance, props)?;
        Ok(self.with_child(label))
    }

    /// Returns a copy with an extra child element.
    pub fn with_child(mut self, child: impl Into<VisualElement>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Visual for Line {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::around(self.start, self.end)
    }

    fn children(&self) -> &[VisualElement] {
        &self.children
    }

    fn encode_own(&self, markers: &mut MarkerRegistry) -> SvgNode {
        let line = svg_element::Line::new()
            .set("x1", round_coordinate(self.start.x()))
            .set("y1", round_coordinate(self.start.y()))
            .set("x2", round_coordinate(self.end.x()))
            .set("y2", round_coordinate(self.end.y()));
        let mut line = crate::apply_presentation!(line, &self.presentation, FillRule::StrokeOnly);

        let color = self.color();
        if let Some(kind) = self.markers.start_kind() {
            line = line.set("marker-start", markers.reference(kind, color));
        }
        if let Some(kind) = self.markers.end_kind() {
            line = line.set("marker-end", markers.reference(kind, color));
        }

        Box::new(line)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::draw::{HorizontalAlignment, MarkerKind, VerticalAlignment};

    fn horizontal_line() -> Line {
        Line::new(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            LineProps::new(Color::Blue),
        )
        .unwrap()
    }

    #[test]
    fn test_zero_length_line_is_rejected() {
        let point = Point::new(5.0, 5.0);
        assert!(matches!(
            Line::new(point, point, LineProps::default()),
            Err(DrawError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn test_non_finite_line_is_rejected() {
        assert!(
            Line::new(
                Point::new(f64::INFINITY, 0.0),
                Point::new(1.0, 0.0),
                LineProps::default()
            )
            .is_err()
        );
    }

    #[test]
    fn test_shorten_scenario() {
        let line = horizontal_line().shorten(10.0, 10.0).unwrap();
        assert_eq!(line.start(), Point::new(10.0, 0.0));
        assert_eq!(line.end(), Point::new(90.0, 0.0));
        assert_eq!(line.color(), Color::Blue);
    }

    #[test]
    fn test_shorten_diagonal() {
        let line = Line::new(
            Point::new(0.0, 0.0),
            Point::new(30.0, 40.0),
            LineProps::default(),
        )
        .unwrap()
        .shorten(5.0, 0.0)
        .unwrap();
        assert_approx_eq!(f64, line.start().x(), 3.0, epsilon = 1e-9);
        assert_approx_eq!(f64, line.start().y(), 4.0, epsilon = 1e-9);
        assert_approx_eq!(f64, line.length(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_shorten_consuming_line_fails() {
        let line = horizontal_line();
        assert!(line.shorten(50.0, 50.0).is_err());
        assert!(line.shorten(80.0, 30.0).is_err());
        assert!(line.shorten(-1.0, 0.0).is_err());
        assert!(line.shorten(49.0, 50.0).is_ok());
    }

    #[test]
    fn test_label_above_horizontal_line() {
        let label = horizontal_line()
            .text(&["hello"], Rotation::Left, 12.0, LabelProps::default())
            .unwrap();

        assert_eq!(label.anchor(), Point::new(50.0, -12.0));
        assert_eq!(label.alignment().horizontal(), HorizontalAlignment::Center);
        assert_eq!(label.alignment().vertical(), VerticalAlignment::Bottom);
        assert_eq!(label.color(), Color::Blue);
    }

    #[test]
    fn test_label_beside_vertical_line() {
        let line = Line::new(
            Point::new(0.0, 0.0),
            Point::new(0.0, 100.0),
            LineProps::default(),
        )
        .unwrap();
        let label = line
            .text(&["down"], Rotation::Left, 8.0, LabelProps::default())
            .unwrap();

        assert_eq!(label.anchor(), Point::new(8.0, 50.0));
        assert_eq!(label.alignment().horizontal(), HorizontalAlignment::Left);
        assert_eq!(label.alignment().vertical(), VerticalAlignment::Center);
    }

    #[test]
    fn test_label_color_override() {
        let label = horizontal_line()
            .text(
                &["x"],
                Rotation::Right,
                4.0,
                LabelProps::new(Some(Color::Red)),
            )
            .unwrap();
        assert_eq!(label.color(), Color::Red);
    }

    #[test]
    fn test_with_text_attaches_child() {
        let line = horizontal_line()
            .with_text(&["a", "b"], Rotation::Right, 6.0, LabelProps::default())
            .unwrap();
        assert_eq!(line.children().len(), 1);
        assert!(matches!(line.children()[0], VisualElement::Text(_)));
    }

    #[test]
    fn test_encode_references_markers() {
        let line = Line::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            LineProps::new(Color::Green).with_markers(LineMarkers::both(MarkerKind::Arrow)),
        )
        .unwrap();

        let mut registry = MarkerRegistry::new();
        let markup = line.encode(&mut registry).to_string();

        assert!(markup.contains("marker-start=\"url(#marker-arrow-green)\""));
        assert!(markup.contains("marker-end=\"url(#marker-arrow-green)\""));
        assert!(markup.contains("class=\"green\""));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_encode_rounds_coordinates() {
        let line = Line::new(
            Point::new(0.1 + 0.2, 0.0),
            Point::new(1.0 / 3.0, 2.0),
            LineProps::default(),
        )
        .unwrap();
        let markup = line.encode(&mut MarkerRegistry::new()).to_string();
        assert!(markup.contains("x1=\"0.3\""));
        assert!(markup.contains("x2=\"0.333\""));
        assert!(!markup.contains("marker-"));
    }
}
