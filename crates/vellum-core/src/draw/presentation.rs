//! Shared presentation properties for every visual element.
//!
//! A [`Presentation`] pairs a palette [`Color`] with a list of [`Class`]
//! modifiers. All shape variants render their `class` attribute through
//! [`Presentation::class_attribute`] (usually via the
//! [`apply_presentation!`](crate::apply_presentation!) macro), so the same
//! vocabulary means the same thing on every shape.
//!
//! # Class Rules
//!
//! | Input | Rendered classes |
//! |-------|------------------|
//! | color | always first, e.g. `blue` |
//! | `alpha` / `beta` on a fillable shape | the opacity class plus `filled` |
//! | fill classes on a line or text | dropped |
//! | duplicates | written once, in first-seen order |

use crate::color::{Class, Color};

/// Whether an element kind can carry a fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillRule {
    /// Closed shapes: circles, ellipses, rectangles, polygons
    Fillable,
    /// Lines and text: fill classes have no meaning
    StrokeOnly,
}

/// Color and class modifiers shared by all element kinds.
///
/// # Examples
///
/// ```
/// use vellum_core::color::{Class, Color};
/// use vellum_core::draw::{FillRule, Presentation};
///
/// let presentation = Presentation::new(Color::Blue, [Class::Alpha, Class::Thin]);
/// assert_eq!(
///     presentation.class_attribute(FillRule::Fillable),
///     "blue alpha filled thin"
/// );
/// assert_eq!(presentation.class_attribute(FillRule::StrokeOnly), "blue thin");
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Presentation {
    color: Color,
    classes: Vec<Class>,
}

impl Presentation {
    /// Creates a presentation, dropping repeated classes.
    pub fn new(color: Color, classes: impl IntoIterator<Item = Class>) -> Self {
        let mut presentation = Self {
            color,
            classes: Vec::new(),
        };
        for class in classes {
            presentation.push_class(class);
        }
        presentation
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn has_class(&self, class: Class) -> bool {
        self.classes.contains(&class)
    }

    /// Returns a copy with a different color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns a copy with an extra class.
    pub fn with_class(mut self, class: Class) -> Self {
        self.push_class(class);
        self
    }

    fn push_class(&mut self, class: Class) {
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    /// Computes the value of the `class` attribute for an element kind.
    pub fn class_attribute(&self, fill_rule: FillRule) -> String {
        let mut names = vec![self.color.class_name()];
        let mut push = |name: &'static str| {
            if !names.contains(&name) {
                names.push(name);
            }
        };

        for class in &self.classes {
            match (fill_rule, class) {
                (FillRule::StrokeOnly, Class::Filled | Class::Alpha | Class::Beta) => {}
                (FillRule::Fillable, class) if class.is_opacity() => {
                    push(class.class_name());
                    push(Class::Filled.class_name());
                }
                (_, class) => push(class.class_name()),
            }
        }

        names.join(" ")
    }
}

/// Apply the presentation `class` attribute to an SVG element.
///
/// # Examples
///
/// ```
/// use vellum_core::color::Color;
/// use vellum_core::draw::{FillRule, Presentation};
/// use svg::node::element as svg_element;
///
/// let presentation = Presentation::new(Color::Green, []);
/// let rect = svg_element::Rectangle::new().set("x", 0).set("y", 0);
///
/// let rect = vellum_core::apply_presentation!(rect, &presentation, FillRule::Fillable);
/// ```
#[macro_export]
macro_rules! apply_presentation {
    ($element:expr, $presentation:expr, $fill_rule:expr) => {{ $element.set("class", $presentation.class_attribute($fill_rule)) }};
}
