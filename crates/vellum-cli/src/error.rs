//! Error type for the CLI.

use std::io;

use thiserror::Error;

use vellum::{DrawError, VellumError};

use crate::config::ConfigError;

/// Errors raised while rendering the gallery from the command line.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Vellum(#[from] VellumError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown diagram `{name}`, available diagrams: {available}")]
    UnknownDiagram { name: String, available: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<DrawError> for CliError {
    fn from(err: DrawError) -> Self {
        Self::Vellum(VellumError::Draw(err))
    }
}
