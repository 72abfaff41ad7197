//! WASM bindings for mermaid-drawio.
//!
//! Exposes `convert` and `convertWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::EmitConfig;

/// Convert Mermaid flowchart DSL to compact draw.io XML.
#[wasm_bindgen]
pub fn convert(src: &str) -> Result<String, JsError> {
    crate::convert(src).map_err(|e| JsError::new(&e.to_string()))
}

/// Convert Mermaid flowchart DSL with control over output formatting.
///
/// - `pretty`: indent the document two spaces per level
#[wasm_bindgen(js_name = "convertWithOptions")]
pub fn convert_with_options(src: &str, pretty: bool) -> Result<String, JsError> {
    let config = if pretty {
        EmitConfig::pretty()
    } else {
        EmitConfig::default()
    };
    crate::convert_with_config(src, &config).map_err(|e| JsError::new(&e.to_string()))
}
