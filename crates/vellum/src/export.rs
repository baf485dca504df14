//! Export functionality for Vellum diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning a list of elements into a finished document. It is the final stage
//! of every diagram script.
//!
//! # Pipeline Position
//!
//! ```text
//! Diagram script
//!     ↓ construct (vellum_core::draw)
//! Visual elements
//!     ↓ export (this module)
//! Document string
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]

/// SVG export backend.
pub mod svg;

use vellum_core::draw::VisualElement;

use crate::VellumError;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Exports the elements, in z-order, to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::EmptyDiagram`] if `elements` is empty.
    fn export(&self, elements: &[VisualElement]) -> Result<String, VellumError>;
}
