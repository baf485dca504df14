//! Error types for Vellum operations.
//!
//! This module provides the main error type [`VellumError`] which wraps
//! construction failures from [`vellum_core`] and adds the conditions that
//! can occur while a document is assembled.

use std::io;

use thiserror::Error;

use vellum_core::DrawError;

/// The main error type for Vellum operations.
#[derive(Debug, Error)]
pub enum VellumError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Draw error: {0}")]
    Draw(#[from] DrawError),

    #[error("cannot render a diagram with no elements")]
    EmptyDiagram,

    #[error("diagram view has zero size ({width} x {height})")]
    DegenerateView { width: f64, height: f64 },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl VellumError {
    /// Create a new `Config` error from any message.
    pub fn new_config_error(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
