//! Error adapter for converting [`CliError`] to miette diagnostics.
//!
//! This module provides the bridge between the CLI's error types and the rich
//! diagnostic formatting used when reporting failures. Every error gets a
//! stable code; the ones a user can act on also get a help message.

use miette::MietteDiagnostic;

use vellum::{DrawError, VellumError};

use crate::{CliError, config::ConfigError};

/// Converts an error into a diagnostic ready to be rendered by miette.
pub fn to_diagnostic(err: &CliError) -> MietteDiagnostic {
    let diagnostic = MietteDiagnostic::new(err.to_string()).with_code(code(err));
    match help(err) {
        Some(help) => diagnostic.with_help(help),
        None => diagnostic,
    }
}

fn code(err: &CliError) -> &'static str {
    match err {
        CliError::Vellum(VellumError::Draw(_)) => "vellum::draw",
        CliError::Vellum(VellumError::EmptyDiagram) => "vellum::empty_diagram",
        CliError::Vellum(VellumError::DegenerateView { .. }) => "vellum::degenerate_view",
        CliError::Vellum(VellumError::Config(_)) | CliError::Config(_) => "vellum::config",
        CliError::Vellum(VellumError::Io(_)) | CliError::Io(_) => "vellum::io",
        CliError::UnknownDiagram { .. } => "vellum::unknown_diagram",
    }
}

fn help(err: &CliError) -> Option<String> {
    match err {
        CliError::UnknownDiagram { .. } => {
            Some("run `vellum --list` to see the gallery diagrams".to_string())
        }
        CliError::Config(ConfigError::MissingFile(_)) => {
            Some("check the path given to `--config`".to_string())
        }
        CliError::Config(ConfigError::Parse(_)) => {
            Some("the configuration file must be valid TOML".to_string())
        }
        CliError::Config(ConfigError::Validation(_)) | CliError::Vellum(VellumError::Config(_)) => {
            Some("palette entries take CSS colors such as \"#1f6fd1\" or \"rgb(31, 111, 209)\"".to_string())
        }
        CliError::Vellum(VellumError::DegenerateView { .. }) => {
            Some("set a positive `margin` in the `[document]` configuration".to_string())
        }
        CliError::Vellum(VellumError::Draw(DrawError::UnknownColor { valid, .. })) => {
            Some(format!("valid colors: {valid}"))
        }
        CliError::Vellum(VellumError::Draw(DrawError::UnknownClass { valid, .. })) => {
            Some(format!("valid classes: {valid}"))
        }
        _ => None,
    }
}
