//! Emitter registry and Emitter trait.

pub mod drawio;
pub mod layout;
pub mod style;

pub use drawio::DrawioEmitter;

use crate::error::Result;
use crate::syntax::types::Graph;

/// Trait for document emitters.
///
/// Emitters only read the graph; emitting the same graph twice yields the
/// same document.
pub trait Emitter {
    /// Serialize a parsed graph to a document string.
    fn emit(&self, graph: &Graph) -> Result<String>;
}
