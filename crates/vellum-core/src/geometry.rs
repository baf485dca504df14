//! Geometric primitives for diagram construction.
//!
//! This module provides the value types every element is built from.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate or vector in diagram space
//! - [`Rotation`] - The sense of a quarter turn used for perpendicular offsets
//! - [`Size`] - Width and height dimensions
//! - [`Insets`] - Padding/margin values for four sides
//! - [`Side`] - A named edge of a box, used to anchor connectors
//! - [`BoundingBox`] - An axis-aligned rectangle enclosing some geometry
//!
//! # Coordinate System
//!
//! Vellum uses the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Coordinates are kept at full `f64` precision during construction.
//! [`round_coordinate`] is only applied when markup is written.

use std::{fmt, str::FromStr};

use crate::DrawError;

/// Rounds a coordinate to three decimal places for serialization.
///
/// Negative zero is folded into zero so `-0` never appears in the output.
///
/// # Examples
///
/// ```
/// # use vellum_core::geometry::round_coordinate;
/// assert_eq!(round_coordinate(1.23456), 1.235);
/// assert_eq!(round_coordinate(0.1 + 0.2), 0.3);
/// assert_eq!(round_coordinate(-0.0001).to_string(), "0");
/// ```
pub fn round_coordinate(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// The sense of a quarter turn.
///
/// Directions are as seen on screen: rotating a rightward vector to the
/// `Left` makes it point up, rotating it to the `Right` makes it point down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Left,
    Right,
}

impl Rotation {
    /// Returns the opposite rotation.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A 2D point representing a position or a vector in diagram space.
///
/// # Examples
///
/// ```
/// # use vellum_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum, Point::new(15.0, 25.0));
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid, Point::new(7.5, 12.5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Checks if both coordinates are finite numbers
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns a new point with absolute values of both coordinates
    pub fn abs(self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Returns the Euclidean length of this vector.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns the Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        other.sub_point(self).length()
    }

    /// Rotates this vector by a quarter turn.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vellum_core::geometry::{Point, Rotation};
    /// let right = Point::new(1.0, 0.0);
    /// assert_eq!(right.rotate(Rotation::Left), Point::new(0.0, -1.0));
    /// assert_eq!(right.rotate(Rotation::Right), Point::new(0.0, 1.0));
    /// ```
    pub fn rotate(self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Left => Self {
                x: self.y,
                y: -self.x,
            },
            Rotation::Right => Self {
                x: -self.y,
                y: self.x,
            },
        }
    }

    /// Returns the dot product of two vectors.
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns a vector of exactly `length` pointing in the same direction.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DegenerateVector`] if this vector has zero (or
    /// non-finite) length, since it has no direction to preserve.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vellum_core::geometry::Point;
    /// let v = Point::new(3.0, 4.0).normalize(10.0).unwrap();
    /// assert_eq!(v, Point::new(6.0, 8.0));
    ///
    /// assert!(Point::default().normalize(1.0).is_err());
    /// ```
    pub fn normalize(self, length: f64) -> Result<Self, DrawError> {
        let current = self.length();
        if current == 0.0 || !current.is_finite() {
            return Err(DrawError::DegenerateVector);
        }
        Ok(self.scale(length / current))
    }

    /// Converts a point and size into a bounding box centered on the point.
    pub fn to_bounds(self, size: Size) -> BoundingBox {
        BoundingBox::new_from_center(self, size)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}",
            round_coordinate(self.x),
            round_coordinate(self.y)
        )
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns a new Size with the given insets added to both dimensions
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns the vector from a box's top-left corner to its opposite corner.
    pub fn to_point(self) -> Point {
        Point::new(self.width, self.height)
    }
}

/// Padding or margin values for the four sides of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
}

impl Insets {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates insets with the same value on all four sides.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates insets with one value for top/bottom and one for left/right.
    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn top(self) -> f64 {
        self.top
    }

    pub fn right(self) -> f64 {
        self.right
    }

    pub fn bottom(self) -> f64 {
        self.bottom
    }

    pub fn left(self) -> f64 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f64 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f64 {
        self.top + self.bottom
    }
}

/// A named edge of a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Returns the edge facing this one.
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            _ => Err(format!(
                "invalid side `{s}`, valid values: top, right, bottom, left"
            )),
        }
    }
}

/// An axis-aligned rectangle defined by its minimum and maximum coordinates.
///
/// Width and height are never negative: every constructor orders the
/// coordinates it is given.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl BoundingBox {
    /// Creates a box from its top-left position and size.
    ///
    /// A negative size extends the box up or left of `position`.
    pub fn new(position: Point, size: Size) -> Self {
        Self::around(position, position.add_point(size.to_point()))
    }

    /// Creates the smallest box containing both points, in either order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vellum_core::geometry::{BoundingBox, Point};
    /// let bounds = BoundingBox::around(Point::new(30.0, 40.0), Point::new(10.0, 5.0));
    /// assert_eq!(bounds.min_point(), Point::new(10.0, 5.0));
    /// assert_eq!(bounds.width(), 20.0);
    /// assert_eq!(bounds.height(), 35.0);
    /// ```
    pub fn around(p1: Point, p2: Point) -> Self {
        Self {
            min_x: p1.x.min(p2.x),
            min_y: p1.y.min(p2.y),
            max_x: p1.x.max(p2.x),
            max_y: p1.y.max(p2.y),
        }
    }

    /// Creates a new box from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half = Point::new(size.width / 2.0, size.height / 2.0);
        Self::around(center.sub_point(half), center.add_point(half))
    }

    /// Creates the smallest box containing every point, or `None` for no points.
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        points
            .into_iter()
            .map(|point| Self::around(point, point))
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    pub fn min_x(self) -> f64 {
        self.min_x
    }

    pub fn min_y(self) -> f64 {
        self.min_y
    }

    pub fn max_x(self) -> f64 {
        self.max_x
    }

    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the width of the box
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the box
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Returns the bottom-right corner
    pub fn max_point(self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Returns the center point of the box
    pub fn center(self) -> Point {
        self.min_point().midpoint(self.max_point())
    }

    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Returns true if the point lies inside or on the edge of the box.
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Returns true if the other box lies entirely within this one.
    pub fn contains_box(self, other: BoundingBox) -> bool {
        self.contains(other.min_point()) && self.contains(other.max_point())
    }

    /// Returns the midpoint of an edge pushed outward by `offset`.
    ///
    /// The offset is measured perpendicular to the edge, so a connector
    /// ending at the returned point stops `offset` units short of the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vellum_core::geometry::{BoundingBox, Point, Side, Size};
    /// let bounds = BoundingBox::new(Point::new(0.0, 0.0), Size::new(40.0, 20.0));
    /// assert_eq!(bounds.point_at(Side::Right, 5.0), Point::new(45.0, 10.0));
    /// assert_eq!(bounds.point_at(Side::Top, 0.0), Point::new(20.0, 0.0));
    /// ```
    pub fn point_at(self, side: Side, offset: f64) -> Point {
        let center = self.center();
        match side {
            Side::Top => center.with_y(self.min_y - offset),
            Side::Right => center.with_x(self.max_x + offset),
            Side::Bottom => center.with_y(self.max_y + offset),
            Side::Left => center.with_x(self.min_x - offset),
        }
    }

    /// Merges two boxes into the smallest box containing both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vellum_core::geometry::{BoundingBox, Point, Size};
    /// let header = BoundingBox::new(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let content = BoundingBox::new(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let combined = header.merge(&content);
    /// assert_eq!(combined.width(), 130.0);
    /// assert_eq!(combined.height(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Moves the box by the specified offset.
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Grows the box outward by the given insets.
    pub fn add_margin(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x - insets.left,
            min_y: self.min_y - insets.top,
            max_x: self.max_x + insets.right,
            max_y: self.max_y + insets.bottom,
        }
    }
}
