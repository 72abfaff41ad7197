/// Graph model for Mermaid flowchart syntax.
///
/// These types represent the normalized form of the input DSL:
/// enums (NodeShape, EdgeKind) and structs (Node, Edge, Graph).
/// Both entity kinds are built once by the parser and only read afterwards.

// ─── NodeShape ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeShape {
    Rectangle, // id[Label]
    Rhombus,   // id{Label}
    Stadium,   // id(Label) or id((Label))
    #[default]
    Default, // bare id, or implied by an edge endpoint
}

impl NodeShape {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeShape::Rectangle => "rectangle",
            NodeShape::Rhombus => "rhombus",
            NodeShape::Stadium => "stadium",
            NodeShape::Default => "default",
        }
    }
}

// ─── EdgeKind ─────────────────────────────────────────────────────────────────

/// Grammar form an edge was written in, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    LabeledArrow, // A -- text --> B
    Labeled,      // A -- text -- B
    Arrow,        // A --> B
    Line,         // A --- B
}

impl EdgeKind {
    /// All edge forms in the order the line grammar tries them.
    pub const PRIORITY: [EdgeKind; 4] = [
        EdgeKind::LabeledArrow,
        EdgeKind::Labeled,
        EdgeKind::Arrow,
        EdgeKind::Line,
    ];

    pub fn has_label(self) -> bool {
        matches!(self, EdgeKind::LabeledArrow | EdgeKind::Labeled)
    }
}

// ─── Node ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Mermaid identifier (e.g. "A", "Start", "db_1").
    pub id: String,
    /// Display label. Defaults to id when no shape bracket is given.
    pub label: String,
    pub shape: NodeShape,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>, shape: NodeShape) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            shape,
        }
    }

    /// Create a bare node (id = label, default shape).
    ///
    /// Used both for bare declarations and for nodes materialized from
    /// edge endpoints that were never declared.
    pub fn bare(id: impl Into<String>) -> Self {
        let id = id.into();
        let label = id.clone();
        Self {
            id,
            label,
            shape: NodeShape::Default,
        }
    }
}

// ─── Edge ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// ID of the source node.
    pub source: String,
    /// ID of the target node.
    pub target: String,
    /// Inline label, empty when the edge form carries none.
    pub label: String,
    pub kind: EdgeKind,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: EdgeKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: String::new(),
            kind,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

// ─── Graph (parser output) ───────────────────────────────────────────────────

/// Ordered node and edge sequences.
///
/// Every id referenced by an edge has exactly one entry in `nodes`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
