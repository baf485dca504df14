//! Closed polygons.

use svg::node::element as svg_element;

use super::{
    MarkerRegistry, ShapeProps, SvgNode, Visual, VisualElement, ensure_finite_point,
    presentation::{FillRule, Presentation},
};
use crate::{
    DrawError,
    color::Color,
    geometry::{BoundingBox, Point},
};

/// A closed polygon through three or more points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    bounds: BoundingBox,
    presentation: Presentation,
    children: Vec<VisualElement>,
}

impl Polygon {
    /// Creates a polygon.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DegenerateGeometry`] for fewer than three points
    /// or a non-finite point.
    pub fn new(points: Vec<Point>, props: ShapeProps) -> Result<Self, DrawError> {
        if points.len() < 3 {
            return Err(DrawError::degenerate(format!(
                "polygon needs at least 3 points, got {}",
                points.len()
            )));
        }
        for point in &points {
            ensure_finite_point(*point, "polygon vertex")?;
        }
        let bounds = BoundingBox::enclosing(points.iter().copied())
            .ok_or_else(|| DrawError::degenerate("polygon has no points"))?;

        Ok(Self {
            points,
            bounds,
            presentation: props.presentation(),
            children: Vec::new(),
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.presentation.color()
    }

    /// Returns a copy with an extra child element.
    pub fn with_child(mut self, child: impl Into<VisualElement>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Visual for Polygon {
    fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    fn children(&self) -> &[VisualElement] {
        &self.children
    }

    fn encode_own(&self, _markers: &mut MarkerRegistry) -> SvgNode {
        let points = self
            .points
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let polygon = svg_element::Polygon::new().set("points", points);
        Box::new(crate::apply_presentation!(
            polygon,
            &self.presentation,
            FillRule::Fillable
        ))
    }
}
