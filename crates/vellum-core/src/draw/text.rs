//! Multi-line text blocks and text size estimation.
//!
//! Text is never measured with a real font. Sizes are estimated from the
//! display width of each line in a fixed-pitch grid, which is what the
//! default stylesheet renders with (`mono` font at 16px). The estimate is
//! deterministic and good enough to size the boxes that enclose labels.

use svg::node::{Text as SvgText, element as svg_element};
use unicode_width::UnicodeWidthStr;

use super::{
    Alignment, MarkerRegistry, SvgNode, Visual, VisualElement, ensure_finite_point,
    presentation::{FillRule, Presentation},
};
use crate::{
    DrawError,
    color::{Class, Color},
    geometry::{BoundingBox, Insets, Point, Size, round_coordinate},
};

/// Advance width of one display column.
pub const CHAR_WIDTH: f64 = 9.6;

/// Distance between consecutive baselines.
pub const LINE_HEIGHT: f64 = 24.0;

/// Padding added on every side by [`estimate_text_size_with_margin`].
pub const TEXT_MARGIN: f64 = 8.0;

/// Estimates the size of a text block.
///
/// The width is the widest line in display columns (wide glyphs count as
/// two) times [`CHAR_WIDTH`]; the height is the line count times
/// [`LINE_HEIGHT`].
///
/// # Examples
///
/// ```
/// # use vellum_core::draw::{estimate_text_size, CHAR_WIDTH, LINE_HEIGHT};
/// let size = estimate_text_size(&["IPv4", "header"]);
/// assert_eq!(size.width(), 6.0 * CHAR_WIDTH);
/// assert_eq!(size.height(), 2.0 * LINE_HEIGHT);
/// ```
pub fn estimate_text_size<S: AsRef<str>>(lines: &[S]) -> Size {
    let columns = lines
        .iter()
        .map(|line| line.as_ref().width())
        .max()
        .unwrap_or(0);
    Size::new(
        columns as f64 * CHAR_WIDTH,
        lines.len() as f64 * LINE_HEIGHT,
    )
}

/// Estimates the size of a text block with [`TEXT_MARGIN`] on all sides.
pub fn estimate_text_size_with_margin<S: AsRef<str>>(lines: &[S]) -> Size {
    estimate_text_size(lines).add_padding(Insets::uniform(TEXT_MARGIN))
}

/// Presentation and placement of a text block.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextProps {
    pub color: Color,
    pub classes: Vec<Class>,
    pub alignment: Alignment,
}

impl TextProps {
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

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Presentation of a label derived from another element.
///
/// A `None` color inherits the color of the element the label belongs to.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LabelProps {
    pub color: Option<Color>,
    pub classes: Vec<Class>,
}

impl LabelProps {
    pub fn new(color: Option<Color>) -> Self {
        Self {
            color,
            classes: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    pub(crate) fn into_text_props(self, inherited: Color, alignment: Alignment) -> TextProps {
        TextProps {
            color: self.color.unwrap_or(inherited),
            classes: self.classes,
            alignment,
        }
    }
}

/// A block of one or more lines placed relative to an anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    lines: Vec<String>,
    anchor: Point,
    alignment: Alignment,
    presentation: Presentation,
    children: Vec<VisualElement>,
}

impl Text {
    /// Creates a text block.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DegenerateGeometry`] if there are no lines or the
    /// anchor is not finite.
    pub fn new(lines: &[&str], anchor: Point, props: TextProps) -> Result<Self, DrawError> {
        if lines.is_empty() {
            return Err(DrawError::degenerate("text must have at least one line"));
        }
        ensure_finite_point(anchor, "text anchor")?;
        Ok(Self {
            lines: lines.iter().map(|line| line.to_string()).collect(),
            anchor,
            alignment: props.alignment,
            presentation: Presentation::new(props.color, props.classes),
            children: Vec::new(),
        })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn color(&self) -> Color {
        self.presentation.color()
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Returns the estimated size of the block.
    pub fn size(&self) -> Size {
        estimate_text_size(&self.lines)
    }

    /// Returns a copy with an extra child element.
    pub fn with_child(mut self, child: impl Into<VisualElement>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Visual for Text {
    fn bounding_box(&self) -> BoundingBox {
        self.alignment.place(self.anchor, self.size())
    }

    fn children(&self) -> &[VisualElement] {
        &self.children
    }

    fn encode_own(&self, _markers: &mut MarkerRegistry) -> SvgNode {
        let top = self.bounding_box().min_y();
        let x = round_coordinate(self.anchor.x());

        // Each tspan advances one line, so start half a line above the block.
        let text = svg_element::Text::new("")
            .set("x", x)
            .set("y", round_coordinate(top - LINE_HEIGHT / 2.0))
            .set("text-anchor", self.alignment.horizontal().to_svg_value())
            .set("dominant-baseline", "central");
        let text = crate::apply_presentation!(text, &self.presentation, FillRule::StrokeOnly);

        let text = self.lines.iter().fold(text, |text, line| {
            text.add(
                svg_element::TSpan::new("")
                    .set("x", x)
                    .set("dy", LINE_HEIGHT)
                    .add(SvgText::new(line.as_str())),
            )
        });

        Box::new(text)
    }
}
