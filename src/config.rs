//! Configuration for the emission pipeline.

/// Default node box width.
pub const NODE_WIDTH: i64 = 120;
/// Default node box height.
pub const NODE_HEIGHT: i64 = 60;
/// Left edge of the first node.
pub const ORIGIN_X: i64 = 50;
/// Vertical coordinate of the node row.
pub const ORIGIN_Y: i64 = 50;
/// Distance between successive node left edges.
pub const SPACING_X: i64 = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    pub node_width: i64,
    pub node_height: i64,
    pub origin_x: i64,
    pub origin_y: i64,
    pub spacing_x: i64,
    /// Pretty-print with this many spaces per level. None = compact single line.
    pub indent: Option<usize>,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            node_width: NODE_WIDTH,
            node_height: NODE_HEIGHT,
            origin_x: ORIGIN_X,
            origin_y: ORIGIN_Y,
            spacing_x: SPACING_X,
            indent: None,
        }
    }
}

impl EmitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self {
            indent: Some(2),
            ..Self::default()
        }
    }
}
