//! Positional layout: one row, left to right, in node order.
//!
//! Not graph-aware. Nodes never wrap and edges are left for the editor to
//! route between their endpoints.

use crate::config::EmitConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Geometry {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Geometry of the node at `index` in the node sequence.
pub fn row_position(index: usize, config: &EmitConfig) -> Geometry {
    let step = index as i64 * config.spacing_x;
    Geometry::new(
        config.origin_x + step,
        config.origin_y,
        config.node_width,
        config.node_height,
    )
}

#[cfg(test)]
#[path = "../../tests/rust/test_emitters_layout.rs"]
mod tests;
