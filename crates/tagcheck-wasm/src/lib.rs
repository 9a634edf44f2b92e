//! WASM bindings for the tagcheck checker.
//!
//! Exposes `check()` to JavaScript via wasm-bindgen.
//! Returns a JS array of diagnostic messages; an empty array means the
//! markup is balanced.

use wasm_bindgen::prelude::*;

/// Check tag balance in markup source.
///
/// Returns an array of message strings in the order they were found.
/// Never throws: malformed markup is reported, not rejected.
#[wasm_bindgen]
pub fn check(source: &str) -> js_sys::Array {
    messages(source).into_iter().map(JsValue::from).collect()
}

/// Get the checker version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn messages(source: &str) -> Vec<String> {
    tagcheck_checker::check(source)
        .iter()
        .map(ToString::to_string)
        .collect()
}
