//! CLI logic for the Vellum diagram tool.
//!
//! The binary renders the built-in diagram gallery to SVG files.

pub mod error_adapter;
pub mod gallery;

mod args;
mod config;
mod error;

pub use args::Args;
pub use error::CliError;

use std::{fs, path::PathBuf};

use log::{debug, info};

use vellum::DiagramRenderer;

use gallery::Diagram;

/// Run the Vellum CLI application
///
/// Renders the selected gallery diagrams and writes each one to
/// `<output_dir>/<name>.svg`. With `--list`, prints the gallery instead and
/// writes nothing.
///
/// # Returns
///
/// The paths of the files written, in gallery order.
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - Unknown diagram names
/// - Diagram construction and rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<Vec<PathBuf>, CliError> {
    if args.list {
        for diagram in gallery::all() {
            println!("{:<14} {}", diagram.name, diagram.description);
        }
        return Ok(Vec::new());
    }

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.standalone {
        app_config = app_config.with_standalone(true);
    }

    let diagrams = select_diagrams(&args.diagrams)?;
    let output_dir = PathBuf::from(&args.output_dir);
    fs::create_dir_all(&output_dir)?;

    let renderer = DiagramRenderer::new(app_config);
    let mut written = Vec::with_capacity(diagrams.len());

    for diagram in diagrams {
        info!(diagram = diagram.name; "Building diagram");
        let elements = diagram.build()?;
        debug!(diagram = diagram.name, elements = elements.len(); "Diagram built");

        let svg = renderer.render_svg(&elements)?;
        let path = output_dir.join(format!("{}.svg", diagram.name));
        fs::write(&path, svg)?;

        info!(output_file = path.display().to_string(); "SVG exported successfully");
        written.push(path);
    }

    Ok(written)
}

/// Resolves diagram names, keeping gallery order when none are named.
fn select_diagrams(names: &[String]) -> Result<Vec<&'static Diagram>, CliError> {
    if names.is_empty() {
        return Ok(gallery::all().iter().collect());
    }

    names
        .iter()
        .map(|name| {
            gallery::find(name).ok_or_else(|| CliError::UnknownDiagram {
                name: name.clone(),
                available: gallery::names(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_when_none_named() {
        let selected = select_diagrams(&[]).unwrap();
        assert_eq!(selected.len(), gallery::all().len());
    }

    #[test]
    fn test_select_named() {
        let selected = select_diagrams(&["markers".to_string(), "topology".to_string()]).unwrap();
        let names: Vec<_> = selected.iter().map(|diagram| diagram.name).collect();
        assert_eq!(names, ["markers", "topology"]);
    }

    #[test]
    fn test_select_unknown() {
        let err = select_diagrams(&["flowchart".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::UnknownDiagram { ref name, .. } if name == "flowchart"));
    }
}
