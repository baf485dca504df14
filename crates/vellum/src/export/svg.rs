//! SVG document assembly.
//!
//! [`Svg`] wraps a list of elements into a single `<svg>` document:
//!
//! 1. The union of every element's total bounding box (children included)
//!    is grown by the configured margin and becomes the `viewBox`.
//! 2. Elements are encoded in input order, which is also the z-order, while a
//!    fresh [`MarkerRegistry`] collects the markers they reference.
//! 3. The optional stylesheet, the marker `<defs>` and the encoded elements
//!    are appended to the root, in that order.

mod stylesheet;

use log::{debug, trace};
use svg::{Document, node::element as svg_element};

use vellum_core::{
    draw::{MarkerRegistry, SvgNode, Visual, VisualElement},
    geometry::{BoundingBox, Insets, round_coordinate},
};

use super::Exporter;
use crate::{
    VellumError,
    config::{DocumentConfig, StyleConfig},
};

/// Builder for [`Svg`] exporters.
///
/// # Examples
///
/// ```
/// use vellum::config::{DocumentConfig, StyleConfig};
/// use vellum::export::svg::SvgBuilder;
///
/// let svg = SvgBuilder::new()
///     .with_document(&DocumentConfig::new(Some(8.0), None))
///     .with_style(&StyleConfig::default())
///     .build()
///     .unwrap();
/// assert_eq!(svg.margin(), 8.0);
/// ```
#[derive(Debug, Default)]
pub struct SvgBuilder {
    document: DocumentConfig,
    style: StyleConfig,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document options.
    pub fn with_document(mut self, document: &DocumentConfig) -> Self {
        self.document = document.clone();
        self
    }

    /// Sets the style options.
    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Validates the options and builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::Config`] for an invalid margin, palette override
    /// or font stack.
    pub fn build(self) -> Result<Svg, VellumError> {
        self.document
            .validate()
            .map_err(VellumError::new_config_error)?;
        self.style.validate().map_err(VellumError::new_config_error)?;

        let stylesheet = if self.style.standalone() {
            Some(stylesheet::build(&self.style).map_err(VellumError::new_config_error)?)
        } else {
            None
        };

        Ok(Svg {
            margin: self.document.margin(),
            class: self.document.class().map(str::to_string),
            stylesheet,
        })
    }
}

/// An SVG exporter with validated options.
#[derive(Debug)]
pub struct Svg {
    margin: f64,
    class: Option<String>,
    stylesheet: Option<String>,
}

impl Svg {
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Renders the elements into an SVG document string.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::EmptyDiagram`] if `elements` is empty and
    /// [`VellumError::DegenerateView`] if the view has no width or no height.
    pub fn render(&self, elements: &[VisualElement]) -> Result<String, VellumError> {
        Ok(self.render_document(elements)?.to_string())
    }

    /// Builds the document tree for the elements.
    ///
    /// Line bounds cover the endpoints only, so a margin smaller than
    /// [`MarkerKind::length`](vellum_core::draw::MarkerKind::length) clips
    /// markers drawn at the edge of the content.
    pub fn render_document(&self, elements: &[VisualElement]) -> Result<Document, VellumError> {
        let content_bounds = Self::content_bounds(elements).ok_or(VellumError::EmptyDiagram)?;
        let view = content_bounds.add_margin(Insets::uniform(self.margin));
        if view.width() <= 0.0 || view.height() <= 0.0 {
            return Err(VellumError::DegenerateView {
                width: view.width(),
                height: view.height(),
            });
        }

        let mut markers = MarkerRegistry::new();
        let nodes: Vec<SvgNode> = elements
            .iter()
            .map(|element| element.encode(&mut markers))
            .collect();

        debug!(
            elements = elements.len(),
            markers = markers.len(),
            width = view.width(),
            height = view.height();
            "Rendering SVG document"
        );

        let width = round_coordinate(view.width());
        let height = round_coordinate(view.height());
        let mut doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    round_coordinate(view.min_x()),
                    round_coordinate(view.min_y()),
                    width,
                    height
                ),
            )
            .set("width", width)
            .set("height", height);

        if let Some(class) = &self.class {
            doc = doc.set("class", class.as_str());
        }

        if let Some(css) = &self.stylesheet {
            doc = doc.add(svg_element::Style::new(css.as_str()));
        }

        if let Some(defs) = markers.definitions() {
            trace!(definitions = markers.len(); "Adding marker definitions");
            doc = doc.add(defs);
        }

        Ok(nodes.into_iter().fold(doc, |doc, node| doc.add(node)))
    }

    /// Returns the union of the total bounding boxes, or `None` for no elements.
    fn content_bounds(elements: &[VisualElement]) -> Option<BoundingBox> {
        elements
            .iter()
            .map(Visual::total_bounding_box)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }
}

impl Exporter for Svg {
    fn export(&self, elements: &[VisualElement]) -> Result<String, VellumError> {
        self.render(elements)
    }
}
