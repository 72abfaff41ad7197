use super::*;
use crate::syntax::types::NodeShape;

#[test]
fn test_detect_type_flowchart_header() {
    assert_eq!(detect_type("graph TD\nA --> B"), Some(DiagramType::Flowchart));
    assert_eq!(
        detect_type("%% title\n\nflowchart LR\n"),
        Some(DiagramType::Flowchart)
    );
}

#[test]
fn test_detect_type_without_header() {
    assert_eq!(detect_type("A --> B"), None);
    assert_eq!(detect_type("A --> B\ngraph TD"), None);
    assert_eq!(detect_type(""), None);
}

#[test]
fn test_parse_headerless_input_as_flowchart() {
    let g = parse("A --> B\n");
    assert_eq!(g.nodes.len(), 2);
    assert_eq!(g.edges.len(), 1);
}

#[test]
fn test_parse_dispatches_to_flowchart() {
    let g = parse("graph TD\nA{Check} --> B\n");
    assert_eq!(g.nodes.len(), 2);
    assert_eq!(g.nodes[0].shape, NodeShape::Rhombus);
    assert_eq!(g.edges.len(), 1);
}
