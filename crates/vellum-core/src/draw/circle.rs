//! Round shapes: circles and axis-aligned ellipses.

use svg::node::element as svg_element;

use super::{
    Alignment, LabelProps, MarkerRegistry, ShapeProps, SvgNode, Text, Visual, VisualElement,
    ensure_finite_point, ensure_positive,
    presentation::{FillRule, Presentation},
};
use crate::{
    DrawError,
    color::Color,
    geometry::{BoundingBox, Point, Size, round_coordinate},
};

/// A circle given by its center and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    presentation: Presentation,
    children: Vec<VisualElement>,
}

impl Circle {
    /// Creates a circle.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DegenerateGeometry`] if the center is not finite
    /// or the radius is not positive.
    pub fn new(center: Point, radius: f64, props: ShapeProps) -> Result<Self, DrawError> {
        ensure_finite_point(center, "circle center")?;
        ensure_positive(radius, "circle radius")?;
        Ok(Self {
            center,
            radius,
            presentation: props.presentation(),
            children: Vec::new(),
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.presentation.color()
    }

    /// Creates a label centered on the circle.
    pub fn text(&self, lines: &[&str], props: LabelProps) -> Result<Text, DrawError> {
        Text::new(
            lines,
            self.center,
            props.into_text_props(self.color(), Alignment::center()),
        )
    }

    /// Returns a copy with a centered label attached as a child.
    pub fn with_text(self, lines: &[&str], props: LabelProps) -> Result<Self, DrawError> {
        let label = self.text(lines, props)?;
        Ok(self.with_child(label))
    }

    /// Returns a copy with an extra child element.
    pub fn with_child(mut self, child: impl Into<VisualElement>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Visual for Circle {
    fn bounding_box(&self) -> BoundingBox {
        let diameter = self.radius * 2.0;
        self.center.to_bounds(Size::new(diameter, diameter))
    }

    fn children(&self) -> &[VisualElement] {
        &self.children
    }

    fn encode_own(&self, _markers: &mut MarkerRegistry) -> SvgNode {
        let circle = svg_element::Circle::new()
            .set("cx", round_coordinate(self.center.x()))
            .set("cy", round_coordinate(self.center.y()))
            .set("r", round_coordinate(self.radius));
        Box::new(crate::apply_presentation!(
            circle,
            &self.presentation,
            FillRule::Fillable
        ))
    }
}

/// An ellipse with axes parallel to the coordinate axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    center: Point,
    rx: f64,
    ry: f64,
    presentation: Presentation,
    children: Vec<VisualElement>,
}

impl Ellipse {
    /// Creates an ellipse.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DegenerateGeometry`] if the center is not finite
    /// or either radius is not positive.
    pub fn new(center: Point, rx: f64, ry: f64, props: ShapeProps) -> Result<Self, DrawError> {
        ensure_finite_point(center, "ellipse center")?;
        ensure_positive(rx, "ellipse horizontal radius")?;
        ensure_positive(ry, "ellipse vertical radius")?;
        Ok(Self {
            center,
            rx,
            ry,
            presentation: props.presentation(),
            children: Vec::new(),
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn rx(&self) -> f64 {
        self.rx
    }

    pub fn ry(&self) -> f64 {
        self.ry
    }

    pub fn color(&self) -> Color {
        self.presentation.color()
    }

    /// Creates a label centered on the ellipse.
    pub fn text(&self, lines: &[&str], props: LabelProps) -> Result<Text, DrawError> {
        Text::new(
            lines,
            self.center,
            props.into_text_props(self.color(), Alignment::center()),
        )
    }

    /// Returns a copy with a centered label attached as a child.
    pub fn with_text(self, lines: &[&str], props: LabelProps) -> Result<Self, DrawError> {
        let label = self.text(lines, props)?;
        Ok(self.with_child(label))
    }

    /// Returns a copy with an extra child element.
    pub fn with_child(mut self, child: impl Into<VisualElement>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Visual for Ellipse {
    fn bounding_box(&self) -> BoundingBox {
        self.center
            .to_bounds(Size::new(self.rx * 2.0, self.ry * 2.0))
    }

    fn children(&self) -> &[VisualElement] {
        &self.children
    }

    fn encode_own(&self, _markers: &mut MarkerRegistry) -> SvgNode {
        let ellipse = svg_element::Ellipse::new()
            .set("cx", round_coordinate(self.center.x()))
            .set("cy", round_coordinate(self.center.y()))
            .set("rx", round_coordinate(self.rx))
            .set("ry", round_coordinate(self.ry));
        Box::new(crate::apply_presentation!(
            ellipse,
            &self.presentation,
            FillRule::Fillable
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Class;

    #[test]
    fn test_circle_bounding_box() {
        let circle = Circle::new(Point::new(10.0, 20.0), 5.0, ShapeProps::default()).unwrap();
        let bounds = circle.bounding_box();
        assert_eq!(bounds.min_point(), Point::new(5.0, 15.0));
        assert_eq!(bounds.max_point(), Point::new(15.0, 25.0));
    }

    #[test]
    fn test_invalid_radius_is_rejected() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    Circle::new(Point::default(), radius, ShapeProps::default()),
                    Err(DrawError::DegenerateGeometry(_))
                ),
                "radius {radius} accepted"
            );
        }
        assert!(Ellipse::new(Point::default(), 10.0, 0.0, ShapeProps::default()).is_err());
    }

    #[test]
    fn test_ellipse_bounding_box() {
        let ellipse =
            Ellipse::new(Point::new(0.0, 0.0), 30.0, 10.0, ShapeProps::default()).unwrap();
        let bounds = ellipse.bounding_box();
        assert_eq!(bounds.width(), 60.0);
        assert_eq!(bounds.height(), 20.0);
        assert_eq!(bounds.center(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_circle_encode() {
        let circle = Circle::new(
            Point::new(1.0, 2.0),
            3.0,
            ShapeProps::new(Color::Yellow).with_class(Class::Alpha),
        )
        .unwrap();
        let markup = circle.encode(&mut MarkerRegistry::new()).to_string();
        assert!(markup.starts_with("<circle"));
        assert!(markup.contains("cx=\"1\""));
        assert!(markup.contains("r=\"3\""));
        assert!(markup.contains("class=\"yellow alpha filled\""));
    }

    #[test]
    fn test_circle_label_is_centered_and_inherits_color() {
        let circle = Circle::new(Point::new(50.0, 50.0), 20.0, ShapeProps::new(Color::Brown))
            .unwrap()
            .with_text(&["A"], LabelProps::default())
            .unwrap();

        let [VisualElement::Text(label)] = circle.children() else {
            panic!("expected a single text child");
        };
        assert_eq!(label.anchor(), Point::new(50.0, 50.0));
        assert_eq!(label.alignment(), Alignment::center());
        assert_eq!(label.color(), Color::Brown);
    }

    #[test]
    fn test_ellipse_encode() {
        let ellipse =
            Ellipse::new(Point::new(0.0, 0.0), 4.5, 2.25, ShapeProps::default()).unwrap();
        let markup = ellipse.encode(&mut MarkerRegistry::new()).to_string();
        assert!(markup.contains("rx=\"4.5\""));
        assert!(markup.contains("ry=\"2.25\""));
        assert!(markup.contains("class=\"text\""));
    }
}
