//! The visual element model.
//!
//! A diagram is a list of [`VisualElement`] values. Each variant wraps one
//! shape type implementing [`Visual`], which reports the shape's bounding box
//! and encodes it to an SVG node. Elements may host children (typically a
//! text label); an element with children is encoded as a `<g>` containing its
//! own tag followed by each child in order.
//!
//! Construction is fallible and validates geometry up front. Encoding is
//! infallible: the only state it touches is the [`MarkerRegistry`] passed in
//! by the serializer.

mod alignment;
mod circle;
mod connector;
mod line;
mod marker;
mod polygon;
mod presentation;
mod rectangle;
mod text;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment, determine_alignment};
pub use circle::{Circle, Ellipse};
pub use connector::{connection_line, diagonal_line};
pub use line::{Line, LineProps};
pub use marker::{LineMarkers, MarkerKind, MarkerRegistry};
pub use polygon::Polygon;
pub use presentation::{FillRule, Presentation};
pub use rectangle::Rectangle;
pub use text::{
    CHAR_WIDTH, LINE_HEIGHT, LabelProps, TEXT_MARGIN, Text, TextProps, estimate_text_size,
    estimate_text_size_with_margin,
};

use svg::node::element as svg_element;

use crate::{
    color::{Class, Color},
    geometry::{BoundingBox, Point},
};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Presentation for closed shapes: circles, ellipses, rectangles and polygons.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ShapeProps {
    pub color: Color,
    pub classes: Vec<Class>,
}

impl ShapeProps {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            classes: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    fn presentation(&self) -> Presentation {
        Presentation::new(self.color, self.classes.iter().copied())
    }
}

/// A drawable element: its geometry, its presentation and its children.
pub trait Visual {
    /// Bounding box of the element's own geometry, children excluded.
    fn bounding_box(&self) -> BoundingBox;

    /// Elements nested inside this one, in drawing order.
    fn children(&self) -> &[VisualElement];

    /// Encodes the element's own tag, without children.
    fn encode_own(&self, markers: &mut MarkerRegistry) -> SvgNode;

    /// Bounding box of the element together with all of its descendants.
    fn total_bounding_box(&self) -> BoundingBox {
        self.children()
            .iter()
            .fold(self.bounding_box(), |bounds, child| {
                bounds.merge(&child.total_bounding_box())
            })
    }

    /// Encodes the element and its descendants.
    fn encode(&self, markers: &mut MarkerRegistry) -> SvgNode {
        let own = self.encode_own(markers);
        if self.children().is_empty() {
            return own;
        }
        let group = self
            .children()
            .iter()
            .fold(svg_element::Group::new().add(own), |group, child| {
                group.add(child.encode(markers))
            });
        Box::new(group)
    }
}

/// The closed set of element kinds a diagram is built from.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualElement {
    Line(Line),
    Circle(Circle),
    Ellipse(Ellipse),
    Rectangle(Rectangle),
    Text(Text),
    Polygon(Polygon),
}

impl VisualElement {
    /// Returns the element kind, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Circle(_) => "circle",
            Self::Ellipse(_) => "ellipse",
            Self::Rectangle(_) => "rectangle",
            Self::Text(_) => "text",
            Self::Polygon(_) => "polygon",
        }
    }

    /// Returns the center and the horizontal and vertical radii of a round shape.
    pub fn radii(&self) -> Option<(Point, f64, f64)> {
        match self {
            Self::Circle(circle) => Some((circle.center(), circle.radius(), circle.radius())),
            Self::Ellipse(ellipse) => Some((ellipse.center(), ellipse.rx(), ellipse.ry())),
            _ => None,
        }
    }

    fn as_visual(&self) -> &dyn Visual {
        match self {
            Self::Line(line) => line,
            Self::Circle(circle) => circle,
            Self::Ellipse(ellipse) => ellipse,
            Self::Rectangle(rectangle) => rectangle,
            Self::Text(text) => text,
            Self::Polygon(polygon) => polygon,
        }
    }
}

impl Visual for VisualElement {
    fn bounding_box(&self) -> BoundingBox {
        self.as_visual().bounding_box()
    }

    fn children(&self) -> &[VisualElement] {
        self.as_visual().children()
    }

    fn encode_own(&self, markers: &mut MarkerRegistry) -> SvgNode {
        self.as_visual().encode_own(markers)
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for VisualElement {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(Line, Circle, Ellipse, Rectangle, Text, Polygon);

/// Rejects a non-finite point with a message naming the offending field.
fn ensure_finite_point(point: Point, what: &str) -> Result<(), crate::DrawError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(crate::DrawError::degenerate(format!(
            "{what} has non-finite coordinates ({}, {})",
            point.x(),
            point.y()
        )))
    }
}

/// Rejects a value that is not a finite, strictly positive number.
fn ensure_positive(value: f64, what: &str) -> Result<(), crate::DrawError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(crate::DrawError::degenerate(format!(
            "{what} must be positive, got {value}"
        )))
    }
}
