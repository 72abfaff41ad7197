//! draw.io (mxGraph) XML emitter.
//!
//! Produces an uncompressed `<mxfile>` with a single page. Cell ids 0 and 1
//! are the root cell and the default layer; content cells are numbered from
//! 2, nodes first in sequence order, then edges.

use std::borrow::Cow;
use std::collections::HashMap;

use log::{debug, warn};
use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use super::Emitter;
use super::layout::{Geometry, row_position};
use super::style::{EDGE_STYLE, node_style};
use crate::config::EmitConfig;
use crate::error::Result;
use crate::syntax::types::Graph;

// ─── Document constants ──────────────────────────────────────────────────────

pub const ROOT_CELL_ID: usize = 0;
pub const LAYER_CELL_ID: usize = 1;
pub const FIRST_CELL_ID: usize = 2;

const MXFILE_ATTRS: &[(&str, &str)] = &[("compressed", "false"), ("host", "app.diagrams.net")];

const DIAGRAM_ATTRS: &[(&str, &str)] = &[("id", "Diagram1"), ("name", "Page-1")];

const GRAPH_MODEL_ATTRS: &[(&str, &str)] = &[
    ("dx", "1000"),
    ("dy", "800"),
    ("grid", "1"),
    ("gridSize", "10"),
    ("guides", "1"),
    ("tooltips", "1"),
    ("connect", "1"),
    ("arrows", "1"),
    ("fold", "1"),
    ("page", "1"),
    ("pageScale", "1"),
    ("pageWidth", "850"),
    ("pageHeight", "1100"),
    ("math", "0"),
    ("shadow", "0"),
];

// ─── Cell plan ───────────────────────────────────────────────────────────────

/// A content cell with its assigned id, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell<'a> {
    Vertex {
        id: usize,
        value: &'a str,
        style: &'static str,
        geometry: Geometry,
    },
    Edge {
        id: usize,
        value: &'a str,
        style: &'static str,
        source: usize,
        target: usize,
    },
}

impl Cell<'_> {
    pub fn id(&self) -> usize {
        match self {
            Cell::Vertex { id, .. } | Cell::Edge { id, .. } => *id,
        }
    }
}

/// Assign cell ids and geometry to every node and every resolvable edge.
///
/// An edge whose endpoint has no node is skipped with a warning. It still
/// consumes its id so the numbering of later edges does not shift.
pub fn plan_cells<'a>(graph: &'a Graph, config: &EmitConfig) -> Vec<Cell<'a>> {
    let mut next_id = FIRST_CELL_ID;
    let mut cell_ids: HashMap<&str, usize> = HashMap::with_capacity(graph.nodes.len());
    let mut cells = Vec::with_capacity(graph.nodes.len() + graph.edges.len());

    for (index, node) in graph.nodes.iter().enumerate() {
        let id = next_id;
        next_id += 1;
        cell_ids.insert(node.id.as_str(), id);
        cells.push(Cell::Vertex {
            id,
            value: &node.label,
            style: node_style(node.shape),
            geometry: row_position(index, config),
        });
    }

    for edge in &graph.edges {
        let id = next_id;
        next_id += 1;
        let source = cell_ids.get(edge.source.as_str()).copied();
        let target = cell_ids.get(edge.target.as_str()).copied();
        let (Some(source), Some(target)) = (source, target) else {
            warn!(
                source = edge.source.as_str(),
                target = edge.target.as_str(),
                cell_id = id;
                "Skipping edge with unresolved endpoint"
            );
            continue;
        };
        cells.push(Cell::Edge {
            id,
            value: &edge.label,
            style: EDGE_STYLE,
            source,
            target,
        });
    }

    cells
}

// ─── Emitter ─────────────────────────────────────────────────────────────────

/// Serializes a graph into a draw.io document.
#[derive(Debug, Clone, Default)]
pub struct DrawioEmitter {
    pub config: EmitConfig,
}

impl DrawioEmitter {
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }
}

impl Emitter for DrawioEmitter {
    fn emit(&self, graph: &Graph) -> Result<String> {
        let cells = plan_cells(graph, &self.config);
        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            cells = cells.len();
            "Writing draw.io document"
        );
        write_document(&cells, self.config.indent)
    }
}

// ─── XML writing ─────────────────────────────────────────────────────────────

/// Escape an attribute value, including the whitespace characters a reader
/// would otherwise normalize to spaces.
fn escape_attribute(value: &str) -> Cow<'_, str> {
    let escaped = escape(value);
    if !escaped.contains(['\t', '\n', '\r']) {
        return escaped;
    }
    let mut out = String::with_capacity(escaped.len() + 8);
    for c in escaped.chars() {
        match c {
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn element<'a>(name: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    let mut elem = BytesStart::new(name);
    for &(key, value) in attrs {
        // Pushed as raw bytes: the value is already escaped.
        let value = escape_attribute(value);
        elem.push_attribute((key.as_bytes(), value.as_bytes()));
    }
    elem
}

fn write_document(cells: &[Cell<'_>], indent: Option<usize>) -> Result<String> {
    let mut writer = match indent {
        Some(size) => Writer::new_with_indent(Vec::new(), b' ', size),
        None => Writer::new(Vec::new()),
    };

    writer.write_event(Event::Start(element("mxfile", MXFILE_ATTRS)))?;
    writer.write_event(Event::Start(element("diagram", DIAGRAM_ATTRS)))?;
    writer.write_event(Event::Start(element("mxGraphModel", GRAPH_MODEL_ATTRS)))?;
    writer.write_event(Event::Start(BytesStart::new("root")))?;

    let root_id = ROOT_CELL_ID.to_string();
    let layer_id = LAYER_CELL_ID.to_string();
    writer.write_event(Event::Empty(element("mxCell", &[("id", root_id.as_str())])))?;
    writer.write_event(Event::Empty(element(
        "mxCell",
        &[("id", layer_id.as_str()), ("parent", root_id.as_str())],
    )))?;

    for cell in cells {
        write_cell(&mut writer, cell, &layer_id)?;
    }

    writer.write_event(Event::End(BytesEnd::new("root")))?;
    writer.write_event(Event::End(BytesEnd::new("mxGraphModel")))?;
    writer.write_event(Event::End(BytesEnd::new("diagram")))?;
    writer.write_event(Event::End(BytesEnd::new("mxfile")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_cell(writer: &mut Writer<Vec<u8>>, cell: &Cell<'_>, parent: &str) -> Result<()> {
    let id = cell.id().to_string();
    match cell {
        Cell::Vertex {
            value,
            style,
            geometry,
            ..
        } => {
            writer.write_event(Event::Start(element(
                "mxCell",
                &[
                    ("id", id.as_str()),
                    ("value", *value),
                    ("style", *style),
                    ("parent", parent),
                    ("vertex", "1"),
                ],
            )))?;
            let x = geometry.x.to_string();
            let y = geometry.y.to_string();
            let width = geometry.width.to_string();
            let height = geometry.height.to_string();
            writer.write_event(Event::Empty(element(
                "mxGeometry",
                &[
                    ("x", x.as_str()),
                    ("y", y.as_str()),
                    ("width", width.as_str()),
                    ("height", height.as_str()),
                    ("as", "geometry"),
                ],
            )))?;
        }
        Cell::Edge {
            value,
            style,
            source,
            target,
            ..
        } => {
            let source = source.to_string();
            let target = target.to_string();
            writer.write_event(Event::Start(element(
                "mxCell",
                &[
                    ("id", id.as_str()),
                    ("value", *value),
                    ("style", *style),
                    ("parent", parent),
                    ("edge", "1"),
                    ("source", source.as_str()),
                    ("target", target.as_str()),
                ],
            )))?;
            writer.write_event(Event::Empty(element(
                "mxGeometry",
                &[("relative", "1"), ("as", "geometry")],
            )))?;
        }
    }
    writer.write_event(Event::End(BytesEnd::new("mxCell")))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/rust/test_emitters_drawio.rs"]
mod tests;
