//! mermaid-drawio — Mermaid flowchart syntax to draw.io XML converter.
//!
//! Public API: `convert()` / `convert_with_config()`, plus `parse()` and
//! `emit()` for callers that want the intermediate graph model.
//!
//! Pipeline: source text → `parsers` → `syntax::types::Graph` → `emitters` → XML.

pub mod config;
pub mod emitters;
pub mod error;
pub mod parsers;
pub mod syntax;

#[cfg(feature = "wasm")]
mod wasm;

use log::{debug, trace};

pub use crate::config::EmitConfig;
pub use crate::error::{Error, Result};
pub use crate::parsers::parse;
use crate::emitters::{DrawioEmitter, Emitter};
use crate::syntax::types::Graph;

/// Emit an already-parsed graph with the default configuration.
pub fn emit(graph: &Graph) -> Result<String> {
    emit_with_config(graph, &EmitConfig::default())
}

/// Emit an already-parsed graph.
pub fn emit_with_config(graph: &Graph, config: &EmitConfig) -> Result<String> {
    DrawioEmitter::new(config.clone()).emit(graph)
}

/// Convert a Mermaid flowchart string to draw.io XML.
pub fn convert(src: &str) -> Result<String> {
    convert_with_config(src, &EmitConfig::default())
}

/// Convert a Mermaid flowchart string to draw.io XML with a custom config.
pub fn convert_with_config(src: &str, config: &EmitConfig) -> Result<String> {
    let graph = parse(src);
    debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len();
        "Flowchart parsed"
    );
    trace!(graph:?; "Parsed graph");
    emit_with_config(&graph, config)
}
