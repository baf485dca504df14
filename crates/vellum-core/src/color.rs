//! Palette colors and style classes for Vellum diagrams.
//!
//! Diagrams never carry concrete color values. Every element names a
//! [`Color`] from a closed palette and a set of [`Class`] modifiers, and both
//! are written out as CSS class names that an external stylesheet resolves.
//! Parsing a name outside either vocabulary is a construction-time error.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::DrawError;

/// A named color from the diagram palette.
///
/// # Examples
///
/// ```
/// use vellum_core::color::Color;
///
/// let blue: Color = "blue".parse().unwrap();
/// assert_eq!(blue.class_name(), "blue");
/// assert!("teal".parse::<Color>().is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// The regular text color of the surrounding page
    #[default]
    Text,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Brown,
    Gray,
}

impl Color {
    /// Every palette entry, in declaration order.
    pub const ALL: [Color; 10] = [
        Self::Text,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::Pink,
        Self::Brown,
        Self::Gray,
    ];

    /// Returns the CSS class name the stylesheet uses for this color.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Brown => "brown",
            Self::Gray => "gray",
        }
    }

    /// Returns the CSS color used when a stylesheet is embedded in the document.
    pub fn default_css_value(self) -> &'static str {
        match self {
            Self::Text => "#222222",
            Self::Red => "#e0301e",
            Self::Orange => "#f28c28",
            Self::Yellow => "#d4a017",
            Self::Green => "#2e9e44",
            Self::Blue => "#1f6fd1",
            Self::Purple => "#8e44ad",
            Self::Pink => "#e0529c",
            Self::Brown => "#8b5a2b",
            Self::Gray => "#888888",
        }
    }

    fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|color| color.class_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Color {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.class_name() == s)
            .ok_or_else(|| DrawError::UnknownColor {
                name: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// A style modifier understood by the diagram stylesheet.
///
/// # Examples
///
/// ```
/// use vellum_core::color::Class;
///
/// assert_eq!("thin".parse::<Class>().unwrap(), Class::Thin);
/// assert!("sparkly".parse::<Class>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Class {
    /// Narrower stroke
    Thin,
    /// Wider stroke
    Thick,
    /// Solid fill in the element's color
    Filled,
    /// Mitered joins instead of rounded ones
    Angular,
    /// Faint translucent fill
    Alpha,
    /// Stronger translucent fill
    Beta,
    Dashed,
    Bold,
    Italic,
    Mono,
}

impl Class {
    /// Every class, in declaration order.
    pub const ALL: [Class; 10] = [
        Self::Thin,
        Self::Thick,
        Self::Filled,
        Self::Angular,
        Self::Alpha,
        Self::Beta,
        Self::Dashed,
        Self::Bold,
        Self::Italic,
        Self::Mono,
    ];

    /// Returns the CSS class name.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Thin => "thin",
            Self::Thick => "thick",
            Self::Filled => "filled",
            Self::Angular => "angular",
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Dashed => "dashed",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Mono => "mono",
        }
    }

    /// Returns true for the classes that give a shape a translucent fill.
    pub fn is_opacity(self) -> bool {
        matches!(self, Self::Alpha | Self::Beta)
    }

    /// Parses a whitespace-separated class list such as `"thin dashed"`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::UnknownClass`] for the first unrecognized name.
    pub fn parse_list(list: &str) -> Result<Vec<Self>, DrawError> {
        list.split_whitespace().map(str::parse).collect()
    }
}

impl FromStr for Class {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.class_name() == s)
            .ok_or_else(|| DrawError::UnknownClass {
                name: s.to_string(),
                valid: Self::ALL
                    .iter()
                    .map(|class| class.class_name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default(), Color::Text);
        assert_eq!(Color::default().to_string(), "text");
    }

    #[test]
    fn test_color_round_trips_through_name() {
        for color in Color::ALL {
            assert_eq!(color.class_name().parse::<Color>().unwrap(), color);
        }
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let err = "turquoise".parse::<Color>().unwrap_err();
        assert!(matches!(err, DrawError::UnknownColor { ref name, .. } if name == "turquoise"));
        assert!(err.to_string().contains("blue"));
    }

    #[test]
    fn test_color_names_are_case_sensitive() {
        assert!("Blue".parse::<Color>().is_err());
    }

    #[test]
    fn test_class_parse_list() {
        assert_eq!(
            Class::parse_list("thin  filled\tangular").unwrap(),
            vec![Class::Thin, Class::Filled, Class::Angular]
        );
        assert_eq!(Class::parse_list("").unwrap(), Vec::new());

        let err = Class::parse_list("thin glowing").unwrap_err();
        assert!(matches!(err, DrawError::UnknownClass { ref name, .. } if name == "glowing"));
    }

    #[test]
    fn test_opacity_classes() {
        assert!(Class::Alpha.is_opacity());
        assert!(Class::Beta.is_opacity());
        assert!(!Class::Filled.is_opacity());
    }

    #[test]
    fn test_default_css_values_are_hex() {
        for color in Color::ALL {
            let value = color.default_css_value();
            assert!(value.starts_with('#') && value.len() == 7, "{color}: {value}");
        }
    }
}
