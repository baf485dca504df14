//! Vellum - Build-time SVG diagrams from explicit coordinates.
//!
//! Diagram scripts construct [`draw::VisualElement`] values with the types
//! re-exported from `vellum_core` and hand them to [`print_svg`] or a
//! configured [`DiagramRenderer`], which returns a self-contained SVG string.

pub mod config;
pub mod export;

mod error;

pub use vellum_core::{DrawError, color, draw, geometry};

pub use error::VellumError;

use log::{debug, info};

use config::AppConfig;
use draw::VisualElement;
use export::{Exporter, svg::SvgBuilder};

/// Renders elements to an SVG document with the default configuration.
///
/// The elements are drawn in the given order; later elements are drawn on top.
///
/// # Errors
///
/// Returns [`VellumError::EmptyDiagram`] if `elements` is empty.
///
/// # Examples
///
/// ```
/// use vellum::draw::{Rectangle, ShapeProps};
/// use vellum::geometry::{Point, Size};
///
/// let rect = Rectangle::new(Point::new(0.0, 0.0), Size::new(100.0, 50.0), ShapeProps::default())
///     .unwrap();
/// let svg = vellum::print_svg(&[rect.into()]).unwrap();
/// assert!(svg.contains("<rect"));
/// ```
pub fn print_svg(elements: &[VisualElement]) -> Result<String, VellumError> {
    DiagramRenderer::default().render_svg(elements)
}

/// Renders diagrams with a fixed configuration.
///
/// # Examples
///
/// ```
/// use vellum::{DiagramRenderer, config::AppConfig};
/// use vellum::draw::{Circle, ShapeProps};
/// use vellum::geometry::Point;
///
/// let renderer = DiagramRenderer::new(AppConfig::default().with_standalone(true));
/// let node = Circle::new(Point::new(20.0, 20.0), 16.0, ShapeProps::default()).unwrap();
/// let svg = renderer.render_svg(&[node.into()]).unwrap();
/// assert!(svg.contains("<style"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramRenderer {
    config: AppConfig,
}

impl DiagramRenderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this renderer.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Render elements to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::Config`] if the configuration is invalid,
    /// [`VellumError::EmptyDiagram`] if `elements` is empty and
    /// [`VellumError::DegenerateView`] if the resulting view has no area.
    pub fn render_svg(&self, elements: &[VisualElement]) -> Result<String, VellumError> {
        info!(elements = elements.len(); "Rendering diagram");

        let svg = SvgBuilder::new()
            .with_document(self.config.document())
            .with_style(self.config.style())
            .build()?;
        let output = svg.export(elements)?;

        debug!(bytes = output.len(); "SVG rendered successfully");
        Ok(output)
    }
}
