//! Line-end markers and the per-document marker registry.
//!
//! SVG markers do not inherit the stroke color of the line referencing them,
//! so one `<marker>` definition is needed per (kind, color) pair. The
//! [`MarkerRegistry`] collects those pairs while a document is encoded and
//! emits a single `<defs>` block at the end.

use std::{fmt, str::FromStr};

use indexmap::IndexSet;
use log::trace;
use svg::node::element as svg_element;

use crate::{DrawError, color::Color};

const ARROW_LENGTH: f64 = 8.0;
const ARROW_WIDTH: f64 = 8.0;
const DOT_RADIUS: f64 = 3.5;

/// The shape drawn at a line end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// A filled triangle whose base sits on the line end
    Arrow,
    /// A filled circle centered on the line end
    Dot,
}

impl MarkerKind {
    /// Returns how far the marker reaches past the line end.
    ///
    /// Connectors pull their endpoints back by this amount so the tip of an
    /// arrow, or the rim of a dot, touches the connected shape.
    pub fn length(self) -> f64 {
        match self {
            Self::Arrow => ARROW_LENGTH,
            Self::Dot => DOT_RADIUS,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Arrow => "arrow",
            Self::Dot => "dot",
        }
    }

    /// Returns the definition id for this kind in the given color.
    pub fn id(self, color: Color) -> String {
        format!("marker-{}-{}", self.name(), color.class_name())
    }

    fn definition(self, color: Color) -> svg_element::Marker {
        let marker = svg_element::Marker::new()
            .set("id", self.id(color))
            .set("class", color.class_name())
            .set("viewBox", "0 0 10 10")
            .set("refY", 5)
            .set("markerUnits", "userSpaceOnUse")
            .set("orient", "auto-start-reverse");

        match self {
            Self::Arrow => marker
                .set("refX", 0)
                .set("markerWidth", ARROW_LENGTH)
                .set("markerHeight", ARROW_WIDTH)
                .add(
                    svg_element::Path::new()
                        .set("d", "M 0 0 L 10 5 L 0 10 z")
                        .set("class", "filled"),
                ),
            Self::Dot => marker
                .set("refX", 5)
                .set("markerWidth", DOT_RADIUS * 2.0)
                .set("markerHeight", DOT_RADIUS * 2.0)
                .add(
                    svg_element::Circle::new()
                        .set("cx", 5)
                        .set("cy", 5)
                        .set("r", 5)
                        .set("class", "filled"),
                ),
        }
    }
}

impl FromStr for MarkerKind {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arrow" => Ok(Self::Arrow),
            "dot" => Ok(Self::Dot),
            _ => Err(DrawError::UnknownMarker {
                name: s.to_string(),
                valid: "arrow, dot".to_string(),
            }),
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The markers placed on the two ends of a line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineMarkers {
    start: Option<MarkerKind>,
    end: Option<MarkerKind>,
}

impl LineMarkers {
    pub const fn new(start: Option<MarkerKind>, end: Option<MarkerKind>) -> Self {
        Self { start, end }
    }

    /// No markers at either end.
    pub const fn none() -> Self {
        Self::new(None, None)
    }

    /// A marker at the end only (`->`).
    pub const fn end(kind: MarkerKind) -> Self {
        Self::new(None, Some(kind))
    }

    /// A marker at the start only (`<-`).
    pub const fn start(kind: MarkerKind) -> Self {
        Self::new(Some(kind), None)
    }

    /// The same marker at both ends (`<->`).
    pub const fn both(kind: MarkerKind) -> Self {
        Self::new(Some(kind), Some(kind))
    }

    pub fn start_kind(self) -> Option<MarkerKind> {
        self.start
    }

    pub fn end_kind(self) -> Option<MarkerKind> {
        self.end
    }

    /// Distance the start point must keep from the shape it attaches to.
    pub fn start_offset(self) -> f64 {
        self.start.map_or(0.0, MarkerKind::length)
    }

    /// Distance the end point must keep from the shape it attaches to.
    pub fn end_offset(self) -> f64 {
        self.end.map_or(0.0, MarkerKind::length)
    }

    /// Swaps the two ends.
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }
}

impl FromStr for LineMarkers {
    type Err = DrawError;

    /// Parses the arrow notation `-`, `->`, `<-` and `<->` using arrowheads.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Self::none()),
            "->" => Ok(Self::end(MarkerKind::Arrow)),
            "<-" => Ok(Self::start(MarkerKind::Arrow)),
            "<->" => Ok(Self::both(MarkerKind::Arrow)),
            _ => Err(DrawError::UnknownMarker {
                name: s.to_string(),
                valid: "-, ->, <-, <->".to_string(),
            }),
        }
    }
}

/// Collects the marker definitions referenced while encoding one document.
///
/// Each (kind, color) pair is defined once, in first-reference order.
/// A registry is created fresh for every serialization pass.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    markers: IndexSet<(MarkerKind, Color)>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a marker if needed and returns the `url(#…)` reference to it.
    pub fn reference(&mut self, kind: MarkerKind, color: Color) -> String {
        if self.markers.insert((kind, color)) {
            trace!(kind:% = kind, color:% = color; "Registered marker definition");
        }
        format!("url(#{})", kind.id(color))
    }

    /// Returns the number of distinct definitions registered so far.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Iterates over the registered (kind, color) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (MarkerKind, Color)> + '_ {
        self.markers.iter().copied()
    }

    /// Builds the `<defs>` block, or `None` if no marker was referenced.
    pub fn definitions(&self) -> Option<svg_element::Definitions> {
        if self.markers.is_empty() {
            return None;
        }
        Some(
            self.markers
                .iter()
                .fold(svg_element::Definitions::new(), |defs, (kind, color)| {
                    defs.add(kind.definition(*color))
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_kind_from_str() {
        assert_eq!("arrow".parse::<MarkerKind>().unwrap(), MarkerKind::Arrow);
        assert_eq!("dot".parse::<MarkerKind>().unwrap(), MarkerKind::Dot);
        assert!(matches!(
            "star".parse::<MarkerKind>(),
            Err(DrawError::UnknownMarker { .. })
        ));
    }

    #[test]
    fn test_line_markers_from_arrow_notation() {
        assert_eq!("-".parse::<LineMarkers>().unwrap(), LineMarkers::none());
        assert_eq!(
            "->".parse::<LineMarkers>().unwrap(),
            LineMarkers::end(MarkerKind::Arrow)
        );
        assert_eq!(
            "<-".parse::<LineMarkers>().unwrap(),
            LineMarkers::start(MarkerKind::Arrow)
        );
        assert_eq!(
            "<->".parse::<LineMarkers>().unwrap(),
            LineMarkers::both(MarkerKind::Arrow)
        );
        assert!(">>".parse::<LineMarkers>().is_err());
    }

    #[test]
    fn test_line_marker_offsets() {
        let markers = LineMarkers::new(Some(MarkerKind::Dot), Some(MarkerKind::Arrow));
        assert_eq!(markers.start_offset(), DOT_RADIUS);
        assert_eq!(markers.end_offset(), ARROW_LENGTH);
        assert_eq!(LineMarkers::none().start_offset(), 0.0);
        assert_eq!(markers.reversed().start_kind(), Some(MarkerKind::Arrow));
    }

    #[test]
    fn test_registry_deduplicates_by_kind_and_color() {
        let mut registry = MarkerRegistry::new();
        let first = registry.reference(MarkerKind::Arrow, Color::Blue);
        let second = registry.reference(MarkerKind::Arrow, Color::Blue);
        registry.reference(MarkerKind::Arrow, Color::Green);
        registry.reference(MarkerKind::Dot, Color::Blue);

        assert_eq!(first, "url(#marker-arrow-blue)");
        assert_eq!(first, second);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_registry_preserves_first_reference_order() {
        let mut registry = MarkerRegistry::new();
        registry.reference(MarkerKind::Dot, Color::Red);
        registry.reference(MarkerKind::Arrow, Color::Text);
        registry.reference(MarkerKind::Dot, Color::Red);

        let order: Vec<_> = registry.iter().collect();
        assert_eq!(
            order,
            vec![(MarkerKind::Dot, Color::Red), (MarkerKind::Arrow, Color::Text)]
        );
    }

    #[test]
    fn test_empty_registry_has_no_definitions() {
        let registry = MarkerRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.definitions().is_none());
    }

    #[test]
    fn test_definitions_contain_each_marker_once() {
        let mut registry = MarkerRegistry::new();
        registry.reference(MarkerKind::Arrow, Color::Orange);
        registry.reference(MarkerKind::Arrow, Color::Orange);
        registry.reference(MarkerKind::Dot, Color::Orange);

        let defs = registry.definitions().unwrap().to_string();
        assert_eq!(defs.matches("id=\"marker-arrow-orange\"").count(), 1);
        assert_eq!(defs.matches("id=\"marker-dot-orange\"").count(), 1);
        assert!(defs.contains("orient=\"auto-start-reverse\""));
    }
}
