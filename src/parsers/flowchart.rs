//! Line-oriented parser for Mermaid flowchart/graph syntax.

use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};

use crate::syntax::types::{Edge, Graph, Node};

use super::base::{EdgeLine, Endpoint, LineKind, Parser, classify_line};

/// Single-pass parser for Mermaid flowchart diagrams.
pub struct FlowchartParser;

impl Parser for FlowchartParser {
    fn parse(&self, src: &str) -> Graph {
        let mut builder = GraphBuilder::default();
        for (index, raw) in src.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            match classify_line(line) {
                LineKind::Directive => trace!(line_no; "Skipping orientation directive"),
                LineKind::Edge(edge) => {
                    trace!(line_no, kind:? = edge.kind; "Edge");
                    builder.add_edge(edge);
                }
                LineKind::NodeDecl(node) => {
                    trace!(
                        line_no,
                        id = node.id.as_str(),
                        shape = node.shape.as_str();
                        "Node declaration"
                    );
                    builder.declare(node);
                }
                LineKind::Unrecognized if line.is_empty() => {}
                LineKind::Unrecognized => debug!(line_no, line; "Skipping unrecognized line"),
            }
        }
        builder.finish()
    }
}

// ─── GraphBuilder ────────────────────────────────────────────────────────────

/// Accumulates declarations and edges during the pass.
///
/// `declared` holds explicit declarations in first-declaration order; `seen`
/// holds every id in first-sight order so implied nodes come out
/// deterministically.
#[derive(Debug, Default)]
struct GraphBuilder {
    declared: IndexMap<String, Node>,
    seen: IndexSet<String>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// First declaration of an id wins; later ones are dropped.
    fn declare(&mut self, node: Node) {
        self.seen.insert(node.id.clone());
        match self.declared.entry(node.id.clone()) {
            Entry::Occupied(_) => {
                debug!(id = node.id.as_str(); "Ignoring duplicate node declaration");
            }
            Entry::Vacant(slot) => {
                slot.insert(node);
            }
        }
    }

    fn reference(&mut self, endpoint: Endpoint) {
        match endpoint.declaration {
            Some(node) => self.declare(node),
            None => {
                self.seen.insert(endpoint.id);
            }
        }
    }

    fn add_edge(&mut self, line: EdgeLine) {
        self.edges.push(line.to_edge());
        self.reference(line.source);
        self.reference(line.target);
    }

    /// Materialize a default node for every seen id that was never declared.
    fn finish(self) -> Graph {
        let GraphBuilder {
            mut declared,
            seen,
            edges,
        } = self;
        for id in seen {
            if !declared.contains_key(&id) {
                debug!(id = id.as_str(); "Materializing implied node");
                declared.insert(id.clone(), Node::bare(id));
            }
        }
        Graph {
            nodes: declared.into_values().collect(),
            edges,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_flowchart.rs"]
mod tests;
