//! Built-in diagram scripts.
//!
//! Each diagram is a plain function that lays out its elements with explicit
//! coordinates and returns them in drawing order.

mod envelope;
mod markers;
mod message_flow;
mod topology;

use vellum::{DrawError, draw::VisualElement};

/// A named diagram script.
#[derive(Debug, Clone, Copy)]
pub struct Diagram {
    pub name: &'static str,
    pub description: &'static str,
    builder: fn() -> Result<Vec<VisualElement>, DrawError>,
}

impl Diagram {
    /// Runs the script and returns its elements.
    pub fn build(&self) -> Result<Vec<VisualElement>, DrawError> {
        (self.builder)()
    }
}

const DIAGRAMS: [Diagram; 4] = [
    Diagram {
        name: "topology",
        description: "Network nodes joined by labeled diagonal links",
        builder: topology::build,
    },
    Diagram {
        name: "envelope",
        description: "Protocol layers nested around a payload",
        builder: envelope::build,
    },
    Diagram {
        name: "message-flow",
        description: "Two parties exchanging messages along lifelines",
        builder: message_flow::build,
    },
    Diagram {
        name: "markers",
        description: "Every marker combination in every palette color",
        builder: markers::build,
    },
];

/// Returns every gallery diagram.
pub fn all() -> &'static [Diagram] {
    &DIAGRAMS
}

/// Looks a diagram up by name.
pub fn find(name: &str) -> Option<&'static Diagram> {
    DIAGRAMS.iter().find(|diagram| diagram.name == name)
}

/// Returns the diagram names as a comma-separated list.
pub fn names() -> String {
    DIAGRAMS
        .iter()
        .map(|diagram| diagram.name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_diagram_builds() {
        for diagram in all() {
            let elements = diagram.build().unwrap();
            assert!(!elements.is_empty(), "{} is empty", diagram.name);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("markers").map(|d| d.name), Some("markers"));
        assert!(find("missing").is_none());
    }

    #[test]
    fn test_names() {
        assert_eq!(names(), "topology, envelope, message-flow, markers");
    }
}
