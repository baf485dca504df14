//! Error type for element construction.
//!
//! Every failure in this crate happens while a diagram is being built, never
//! while it is being encoded: encoding a value that was successfully
//! constructed is infallible.

use thiserror::Error;

/// Errors raised while constructing diagram elements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("unknown color `{name}`, valid colors: {valid}")]
    UnknownColor { name: String, valid: String },

    #[error("unknown class `{name}`, valid classes: {valid}")]
    UnknownClass { name: String, valid: String },

    #[error("unknown marker `{name}`, valid markers: {valid}")]
    UnknownMarker { name: String, valid: String },

    #[error("`{operation}` does not support {shape} elements")]
    UnsupportedShape {
        operation: &'static str,
        shape: &'static str,
    },
}

impl DrawError {
    /// Create a new `DegenerateGeometry` error from any message.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry(message.into())
    }
}
