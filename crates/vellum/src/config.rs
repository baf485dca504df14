//! Configuration types for Vellum documents.
//!
//! This module provides configuration structures that control how a diagram
//! is wrapped into a document and styled. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining document and style settings.
//! - [`DocumentConfig`] - Margin around the content and the root element class.
//! - [`StyleConfig`] - Embedded stylesheet switch, palette overrides and font.
//!
//! # Example
//!
//! ```
//! # use vellum::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.document().margin(), vellum::config::DEFAULT_MARGIN);
//! assert!(!config.style().standalone());
//! ```

use std::{collections::BTreeMap, str::FromStr};

use color::DynamicColor;
use serde::Deserialize;

use vellum_core::color::Color;

/// Space left around the union bounding box when no margin is configured.
pub const DEFAULT_MARGIN: f64 = 16.0;

/// Font stack of the embedded stylesheet when none is configured.
pub const DEFAULT_FONT_FAMILY: &str = "ui-monospace, SFMono-Regular, Menlo, Consolas, monospace";

/// Top-level configuration combining document and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Document configuration section.
    #[serde(default)]
    document: DocumentConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified document and style configurations.
    pub fn new(document: DocumentConfig, style: StyleConfig) -> Self {
        Self { document, style }
    }

    /// Returns the document configuration.
    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns a copy with the embedded stylesheet switched on or off.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.style.standalone = standalone;
        self
    }
}

/// Document-level options: the margin around the content and the root class.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DocumentConfig {
    /// Margin on every side of the union bounding box.
    #[serde(default)]
    margin: Option<f64>,

    /// Class set on the root `<svg>` element.
    #[serde(default)]
    class: Option<String>,
}

impl DocumentConfig {
    pub fn new(margin: Option<f64>, class: Option<String>) -> Self {
        Self { margin, class }
    }

    /// Returns the configured margin, or [`DEFAULT_MARGIN`].
    pub fn margin(&self) -> f64 {
        self.margin.unwrap_or(DEFAULT_MARGIN)
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Checks that the margin is a finite, non-negative number.
    ///
    /// # Errors
    ///
    /// Returns a message describing the invalid margin.
    pub fn validate(&self) -> Result<(), String> {
        let margin = self.margin();
        if margin.is_finite() && margin >= 0.0 {
            Ok(())
        } else {
            Err(format!(
                "document margin must be a finite non-negative number, got {margin}"
            ))
        }
    }
}

/// Styling of the embedded stylesheet.
///
/// Diagrams are normally embedded in a page whose stylesheet resolves the
/// palette and class names. When `standalone` is set, a stylesheet is embedded
/// in the document instead, so it also renders on its own.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Whether a `<style>` element is embedded in the document.
    #[serde(default)]
    standalone: bool,

    /// CSS color overrides for palette entries, e.g. `blue = "#0050ef"`.
    #[serde(default)]
    palette: BTreeMap<Color, String>,

    /// Font stack for text.
    #[serde(default)]
    font_family: Option<String>,
}

impl StyleConfig {
    pub fn new(
        standalone: bool,
        palette: BTreeMap<Color, String>,
        font_family: Option<String>,
    ) -> Self {
        Self {
            standalone,
            palette,
            font_family,
        }
    }

    pub fn standalone(&self) -> bool {
        self.standalone
    }

    /// Returns the font stack, or [`DEFAULT_FONT_FAMILY`].
    pub fn font_family(&self) -> &str {
        self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
    }

    /// Returns the CSS value of a palette entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured override is not a valid CSS color.
    pub fn palette_value(&self, color: Color) -> Result<String, String> {
        match self.palette.get(&color) {
            Some(value) => DynamicColor::from_str(value.trim())
                .map(|_| value.trim().to_string())
                .map_err(|err| format!("Invalid `{color}` palette color in config: {err}")),
            None => Ok(color.default_css_value().to_string()),
        }
    }

    /// Checks that every palette override is a valid CSS color and that the
    /// font stack cannot break out of its declaration.
    ///
    /// # Errors
    ///
    /// Returns the message of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(font_family) = self
            .font_family
            .as_ref()
            .filter(|font_family| font_family.contains(['{', '}', ';', '<', '>']))
        {
            return Err(format!(
                "Invalid font family in config: `{font_family}` contains a reserved character"
            ));
        }
        self.palette
            .keys()
            .try_for_each(|color| self.palette_value(*color).map(|_| ()))
    }
}
