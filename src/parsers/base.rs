//! Parser trait definition and the shared line grammar.
//!
//! Every input line is classified into exactly one [`LineKind`]. Edge forms
//! are tried most specific first; a line that matches no edge form is tried
//! as a node declaration, and anything else is reported as
//! [`LineKind::Unrecognized`] for the caller to skip.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::syntax::types::{Edge, EdgeKind, Graph, Node, NodeShape};

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Trait for diagram parsers.
///
/// Parsing is best-effort: lines outside the supported grammar are dropped,
/// so a parser always produces a graph.
pub trait Parser {
    /// Parse the input source string into a normalized graph model.
    fn parse(&self, src: &str) -> Graph;
}

// ─── Grammar fragments ───────────────────────────────────────────────────────

/// Leading keywords of an orientation directive (`graph TD`, `flowchart LR`).
pub const DIRECTIVE_KEYWORDS: &[&str] = &["graph", "flowchart"];

/// Identifier with at most one shape bracket. `@` is replaced by a group prefix.
///
/// `((label))` is listed before `(label)` so the inner parens stay out of the label.
const NODE_REF_TEMPLATE: &str = r"(?P<@_id>\w+)\s*(?:\(\((?P<@_circle>.*?)\)\)|\[(?P<@_rect>.*?)\]|\{(?P<@_rhomb>.*?)\}|\((?P<@_stadium>.*?)\))?";

/// Bracket capture group suffixes and the shape each one declares.
const SHAPE_GROUPS: &[(&str, NodeShape)] = &[
    ("circle", NodeShape::Stadium),
    ("rect", NodeShape::Rectangle),
    ("rhomb", NodeShape::Rhombus),
    ("stadium", NodeShape::Stadium),
];

const LINE_END: &str = r"\s*;?$";

fn node_ref(prefix: &str) -> String {
    NODE_REF_TEMPLATE.replace('@', prefix)
}

/// Connector between the two endpoints for each edge form.
fn connector(kind: EdgeKind) -> &'static str {
    match kind {
        EdgeKind::LabeledArrow => r"\s*--\s*(?P<label>.*?)\s*-{2,}>\s*",
        EdgeKind::Labeled => r"\s*--\s*(?P<label>.*?)\s*--\s*",
        EdgeKind::Arrow => r"\s*-{2,}>\s*",
        EdgeKind::Line => r"\s*-{3,}\s*",
    }
}

pub fn edge_pattern(kind: EdgeKind) -> String {
    ["^", &node_ref("src"), connector(kind), &node_ref("dst"), LINE_END].concat()
}

pub fn node_pattern() -> String {
    ["^", &node_ref("node"), LINE_END].concat()
}

// ─── Compiled patterns ───────────────────────────────────────────────────────

struct LinePatterns {
    /// Edge patterns in priority order.
    edges: Vec<(EdgeKind, Regex)>,
    node: Regex,
}

impl LinePatterns {
    fn compile() -> Self {
        let edges = EdgeKind::PRIORITY
            .iter()
            .map(|&kind| {
                let re = Regex::new(&edge_pattern(kind)).expect("edge pattern must compile");
                (kind, re)
            })
            .collect();
        let node = Regex::new(&node_pattern()).expect("node pattern must compile");
        Self { edges, node }
    }
}

fn patterns() -> &'static LinePatterns {
    static PATTERNS: OnceLock<LinePatterns> = OnceLock::new();
    PATTERNS.get_or_init(LinePatterns::compile)
}

// ─── Line classification ─────────────────────────────────────────────────────

/// One side of an edge line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub id: String,
    /// Present when the endpoint carries its own shape bracket (`A[Client] --> B`).
    pub declaration: Option<Node>,
}

impl Endpoint {
    pub fn bare(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            declaration: None,
        }
    }
}

/// A recognized edge statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLine {
    pub kind: EdgeKind,
    pub source: Endpoint,
    pub target: Endpoint,
    /// Trimmed label, empty for unlabeled forms.
    pub label: String,
}

impl EdgeLine {
    pub fn to_edge(&self) -> Edge {
        Edge::new(&self.source.id, &self.target.id, self.kind).with_label(&self.label)
    }
}

/// Outcome of classifying a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `graph ...` / `flowchart ...` header.
    Directive,
    Edge(EdgeLine),
    NodeDecl(Node),
    /// Outside the supported grammar (blank lines, comments, subgraphs, ...).
    Unrecognized,
}

/// Case-insensitive prefix test against [`DIRECTIVE_KEYWORDS`].
pub fn is_directive(line: &str) -> bool {
    let lower = line.to_lowercase();
    DIRECTIVE_KEYWORDS.iter().any(|kw| lower.starts_with(kw))
}

/// Classify a line of flowchart source.
pub fn classify_line(line: &str) -> LineKind {
    let line = line.trim();
    if is_directive(line) {
        return LineKind::Directive;
    }

    let patterns = patterns();
    for (kind, re) in &patterns.edges {
        if let Some(edge) = re.captures(line).and_then(|caps| read_edge(&caps, *kind)) {
            return LineKind::Edge(edge);
        }
    }

    let declaration = patterns
        .node
        .captures(line)
        .and_then(|caps| read_endpoint(&caps, "node"));
    match declaration {
        Some(Endpoint {
            declaration: Some(node),
            ..
        }) => LineKind::NodeDecl(node),
        Some(Endpoint { id, .. }) => LineKind::NodeDecl(Node::bare(id)),
        None => LineKind::Unrecognized,
    }
}

fn read_edge(caps: &Captures<'_>, kind: EdgeKind) -> Option<EdgeLine> {
    let source = read_endpoint(caps, "src")?;
    let target = read_endpoint(caps, "dst")?;
    let label = caps
        .name("label")
        .map_or("", |m| m.as_str())
        .trim()
        .to_string();
    // A bare dash run (`A ---- B`) is a plain line, not an empty-label edge.
    if kind.has_label() && label.chars().all(|c| c == '-') {
        return None;
    }
    Some(EdgeLine {
        kind,
        source,
        target,
        label,
    })
}

fn read_endpoint(caps: &Captures<'_>, prefix: &str) -> Option<Endpoint> {
    let id = caps.name(&format!("{prefix}_id"))?.as_str().to_string();
    let declaration = SHAPE_GROUPS.iter().find_map(|(group, shape)| {
        caps.name(&format!("{prefix}_{group}"))
            .map(|m| Node::new(id.clone(), m.as_str().trim(), *shape))
    });
    Some(Endpoint { id, declaration })
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_base.rs"]
mod tests;
