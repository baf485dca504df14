//! The stylesheet embedded in standalone documents.
//!
//! Elements only carry class names. This stylesheet gives every palette
//! color and class the meaning a host page would otherwise provide.

use vellum_core::color::Color;

use crate::config::StyleConfig;

/// Rules that do not depend on configuration.
const BASE_RULES: &str = "\
line, circle, ellipse, rect, polygon { fill: none; stroke: currentColor; stroke-width: 2; stroke-linecap: round; stroke-linejoin: round; }
text { fill: currentColor; stroke: none; font-size: 16px; }
marker * { stroke: none; }
.thin { stroke-width: 1; }
.thick { stroke-width: 3; }
.filled { fill: currentColor; }
.alpha { fill-opacity: 0.15; }
.beta { fill-opacity: 0.3; }
.angular { stroke-linecap: butt; stroke-linejoin: miter; }
.dashed { stroke-dasharray: 6 4; }
.bold { font-weight: bold; }
.italic { font-style: italic; }
.mono { font-family: monospace; }
";

/// Builds the CSS text for a `<style>` element.
///
/// # Errors
///
/// Returns an error if a palette override is not a valid CSS color.
pub(super) fn build(style: &StyleConfig) -> Result<String, String> {
    let mut css = format!("svg {{ font-family: {}; }}\n", style.font_family());
    css.push_str(BASE_RULES);
    for color in Color::ALL {
        css.push_str(&format!(
            ".{} {{ color: {}; }}\n",
            color.class_name(),
            style.palette_value(color)?
        ));
    }
    Ok(css)
}
