//! Axis-aligned rectangles with optional rounded corners.

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

/// A rectangle given by its top-left corner and size.
///
/// # Examples
///
/// ```
/// # use vellum_core::draw::{LabelProps, Rectangle, ShapeProps, Visual};
/// # use vellum_core::geometry::{Point, Size};
/// let rect = Rectangle::new(Point::new(0.0, 0.0), Size::new(100.0, 40.0), ShapeProps::default())
///     .unwrap()
///     .with_text(&["payload"], LabelProps::default())
///     .unwrap();
/// assert_eq!(rect.children().len(), 1);
/// assert_eq!(rect.bounding_box().center().x(), 50.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    position: Point,
    size: Size,
    corner_radius: Option<f64>,
    presentation: Presentation,
    children: Vec<VisualElement>,
}

impl Rectangle {
    /// Creates a rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DegenerateGeometry`] if the position is not finite
    /// or the width or height is not positive.
    pub fn new(position: Point, size: Size, props: ShapeProps) -> Result<Self, DrawError> {
        ensure_finite_point(position, "rectangle position")?;
        ensure_positive(size.width(), "rectangle width")?;
        ensure_positive(size.height(), "rectangle height")?;
        Ok(Self {
            position,
            size,
            corner_radius: None,
            presentation: props.presentation(),
            children: Vec::new(),
        })
    }

    /// Creates a rectangle of the given size centered on a point.
    pub fn centered(center: Point, size: Size, props: ShapeProps) -> Result<Self, DrawError> {
        let position = center.sub_point(size.to_point().scale(0.5));
        Self::new(position, size, props)
    }

    /// Returns a copy with rounded corners.
    ///
    /// # Errors
    ///
    /// Fails if the radius is not positive.
    pub fn with_corner_radius(mut self, radius: f64) -> Result<Self, DrawError> {
        ensure_positive(radius, "corner radius")?;
        self.corner_radius = Some(radius);
        Ok(self)
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn corner_radius(&self) -> Option<f64> {
        self.corner_radius
    }

    pub fn color(&self) -> Color {
        self.presentation.color()
    }

    /// Creates a label centered in the rectangle.
    pub fn text(&self, lines: &[&str], props: LabelProps) -> Result<Text, DrawError> {
        Text::new(
            lines,
            self.bounding_box().center(),
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

impl Visual for Rectangle {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.position, self.size)
    }

    fn children(&self) -> &[VisualElement] {
        &self.children
    }

    fn encode_own(&self, _markers: &mut MarkerRegistry) -> SvgNode {
        let mut rect = svg_element::Rectangle::new()
            .set("x", round_coordinate(self.position.x()))
            .set("y", round_coordinate(self.position.y()))
            .set("width", round_coordinate(self.size.width()))
            .set("height", round_coordinate(self.size.height()));

        if let Some(radius) = self.corner_radius {
            rect = rect.set("rx", round_coordinate(radius));
        }

        Box::new(crate::apply_presentation!(
            rect,
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
    fn test_rectangle_bounding_box() {
        let rect = Rectangle::new(
            Point::new(10.0, 20.0),
            Size::new(30.0, 40.0),
            ShapeProps::default(),
        )
        .unwrap();
        assert_eq!(
            rect.bounding_box(),
            BoundingBox::around(Point::new(10.0, 20.0), Point::new(40.0, 60.0))
        );
    }

    #[test]
    fn test_non_positive_size_is_rejected() {
        for size in [Size::new(0.0, 10.0), Size::new(10.0, -1.0)] {
            assert!(matches!(
                Rectangle::new(Point::default(), size, ShapeProps::default()),
                Err(DrawError::DegenerateGeometry(_))
            ));
        }
    }

    #[test]
    fn test_centered() {
        let rect = Rectangle::centered(
            Point::new(0.0, 0.0),
            Size::new(20.0, 10.0),
            ShapeProps::default(),
        )
        .unwrap();
        assert_eq!(rect.position(), Point::new(-10.0, -5.0));
    }

    #[test]
    fn test_corner_radius() {
        let rect = Rectangle::new(
            Point::default(),
            Size::new(10.0, 10.0),
            ShapeProps::default(),
        )
        .unwrap();
        assert!(rect.clone().with_corner_radius(0.0).is_err());

        let rounded = rect.with_corner_radius(4.0).unwrap();
        let markup = rounded.encode(&mut MarkerRegistry::new()).to_string();
        assert!(markup.contains("rx=\"4\""));
    }

    #[test]
    fn test_encode_classes() {
        let rect = Rectangle::new(
            Point::default(),
            Size::new(10.0, 10.0),
            ShapeProps::new(Color::Blue)
                .with_class(Class::Angular)
                .with_class(Class::Beta),
        )
        .unwrap();
        let markup = rect.encode(&mut MarkerRegistry::new()).to_string();
        assert!(markup.contains("class=\"blue angular beta filled\""));
        assert!(!markup.contains("rx="));
    }

    #[test]
    fn test_label_overrides_color() {
        let rect = Rectangle::new(
            Point::new(0.0, 0.0),
            Size::new(100.0, 50.0),
            ShapeProps::new(Color::Gray),
        )
        .unwrap();
        let label = rect
            .text(&["x"], LabelProps::new(Some(Color::Text)))
            .unwrap();
        assert_eq!(label.color(), Color::Text);
        assert_eq!(label.anchor(), Point::new(50.0, 25.0));
    }
}
