//! Text block alignment relative to an anchor point.

use crate::geometry::{BoundingBox, Point, Size};

/// A label whose offset along one axis is more than this many times its
/// offset along the other is centered on the dominant axis.
const DOMINANCE_RATIO: f64 = 4.0;

/// Horizontal placement of a text block relative to its anchor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// The block starts at the anchor and grows rightward
    Left,
    #[default]
    Center,
    /// The block ends at the anchor
    Right,
}

impl HorizontalAlignment {
    /// Returns the SVG `text-anchor` value.
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }
}

/// Vertical placement of a text block relative to its anchor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// The block starts at the anchor and grows downward
    Top,
    #[default]
    Center,
    /// The block ends at the anchor
    Bottom,
}

/// Independent horizontal and vertical placement of a text block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment {
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
}

impl Alignment {
    pub fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Centered on both axes.
    pub fn center() -> Self {
        Self::default()
    }

    pub fn horizontal(self) -> HorizontalAlignment {
        self.horizontal
    }

    pub fn vertical(self) -> VerticalAlignment {
        self.vertical
    }

    /// Places a block of the given size relative to the anchor.
    pub fn place(self, anchor: Point, size: Size) -> BoundingBox {
        let x = match self.horizontal {
            HorizontalAlignment::Left => anchor.x(),
            HorizontalAlignment::Center => anchor.x() - size.width() / 2.0,
            HorizontalAlignment::Right => anchor.x() - size.width(),
        };
        let y = match self.vertical {
            VerticalAlignment::Top => anchor.y(),
            VerticalAlignment::Center => anchor.y() - size.height() / 2.0,
            VerticalAlignment::Bottom => anchor.y() - size.height(),
        };
        BoundingBox::new(Point::new(x, y), size)
    }
}

/// Chooses the alignment of a label displaced from its reference point by `offset`.
///
/// A label pushed mostly downward (`|y| > 4·|x|`) is centered horizontally so
/// it sits directly below; a label pushed mostly sideways is centered
/// vertically. Otherwise the block grows away from the reference point: a
/// positive x offset aligns it left, a positive y offset aligns it top.
///
/// # Examples
///
/// ```
/// # use vellum_core::draw::{determine_alignment, HorizontalAlignment, VerticalAlignment};
/// # use vellum_core::geometry::Point;
/// let above = determine_alignment(Point::new(1.0, -10.0));
/// assert_eq!(above.horizontal(), HorizontalAlignment::Center);
/// assert_eq!(above.vertical(), VerticalAlignment::Bottom);
///
/// let diagonal = determine_alignment(Point::new(-5.0, 5.0));
/// assert_eq!(diagonal.horizontal(), HorizontalAlignment::Right);
/// assert_eq!(diagonal.vertical(), VerticalAlignment::Top);
/// ```
pub fn determine_alignment(offset: Point) -> Alignment {
    let magnitude = offset.abs();

    let horizontal = if magnitude.y() > DOMINANCE_RATIO * magnitude.x() || offset.x() == 0.0 {
        HorizontalAlignment::Center
    } else if offset.x() > 0.0 {
        HorizontalAlignment::Left
    } else {
        HorizontalAlignment::Right
    };

    let vertical = if magnitude.x() > DOMINANCE_RATIO * magnitude.y() || offset.y() == 0.0 {
        VerticalAlignment::Center
    } else if offset.y() > 0.0 {
        VerticalAlignment::Top
    } else {
        VerticalAlignment::Bottom
    };

    Alignment::new(horizontal, vertical)
}
