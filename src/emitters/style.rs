//! Shape → draw.io style strings.

use crate::syntax::types::NodeShape;

pub const RECTANGLE_STYLE: &str = "rounded=0;whiteSpace=wrap;html=1;";
pub const RHOMBUS_STYLE: &str = "shape=rhombus;whiteSpace=wrap;html=1;";
pub const STADIUM_STYLE: &str = "shape=ellipse;perimeter=ellipsePerimeter;whiteSpace=wrap;html=1;";

/// Every edge is drawn as a straight arrow, whatever form it was written in.
pub const EDGE_STYLE: &str = "endArrow=classic;html=1;rounded=0;";

pub fn node_style(shape: NodeShape) -> &'static str {
    match shape {
        NodeShape::Rectangle | NodeShape::Default => RECTANGLE_STYLE,
        NodeShape::Rhombus => RHOMBUS_STYLE,
        NodeShape::Stadium => STADIUM_STYLE,
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_emitters_style.rs"]
mod tests;
