//! Parser registry — detect diagram type and dispatch to the right parser.

pub mod base;
pub mod flowchart;

pub use base::Parser;

use log::debug;

use crate::syntax::types::Graph;
use flowchart::FlowchartParser;

/// Diagram kinds the registry knows how to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramType {
    Flowchart,
}

/// Detect the diagram type from the first significant line of the source.
///
/// Blank lines and `%%` comments are skipped. Returns `None` when that line
/// is not a recognized header.
pub fn detect_type(src: &str) -> Option<DiagramType> {
    let first = src
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with("%%"))?;
    base::is_directive(first).then_some(DiagramType::Flowchart)
}

/// Parse a Mermaid DSL string into a graph model.
///
/// Never fails: unsupported lines are skipped. Input without a header is
/// parsed as a flowchart.
pub fn parse(src: &str) -> Graph {
    match detect_type(src) {
        Some(DiagramType::Flowchart) => FlowchartParser.parse(src),
        None => {
            debug!("No diagram header found, parsing as flowchart");
            FlowchartParser.parse(src)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_registry.rs"]
mod tests;
