use std::fs;

use tempfile::{TempDir, tempdir};

use vellum_cli::{Args, CliError, gallery, run};

/// Writes an empty configuration file so the tests never pick up a user's config.
fn empty_config(dir: &TempDir) -> String {
    let path = dir.path().join("config.toml");
    fs::write(&path, "").expect("Failed to write config");
    path.to_string_lossy().to_string()
}

fn args(dir: &TempDir, diagrams: &[&str]) -> Args {
    Args {
        diagrams: diagrams.iter().map(|name| name.to_string()).collect(),
        output_dir: dir.path().join("out").to_string_lossy().to_string(),
        config: Some(empty_config(dir)),
        log_level: "off".to_string(),
        standalone: false,
        list: false,
    }
}

#[test]
fn e2e_smoke_test_gallery() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let written = run(&args(&temp_dir, &[])).expect("gallery renders");
    assert_eq!(written.len(), gallery::all().len());

    for (path, diagram) in written.iter().zip(gallery::all()) {
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some(format!("{}.svg", diagram.name).as_str())
        );

        let content = fs::read_to_string(path).expect("Failed to read output");
        assert!(content.contains("<svg"), "{} has no svg root", diagram.name);
        assert!(content.trim_end().ends_with("</svg>"));
    }
}

#[test]
fn e2e_standalone_embeds_stylesheet() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let mut args = args(&temp_dir, &["topology"]);
    args.standalone = true;

    let written = run(&args).expect("topology renders");
    assert_eq!(written.len(), 1);

    let content = fs::read_to_string(&written[0]).expect("Failed to read output");
    assert!(content.contains("<style"));
}

#[test]
fn e2e_unknown_diagram() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let err = run(&args(&temp_dir, &["flowchart"])).unwrap_err();
    assert!(matches!(err, CliError::UnknownDiagram { .. }));
    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn e2e_list_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let mut args = args(&temp_dir, &[]);
    args.list = true;

    let written = run(&args).expect("listing succeeds");
    assert!(written.is_empty());
    assert!(!temp_dir.path().join("out").exists());
}
