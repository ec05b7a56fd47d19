//! Shared helpers for view integration tests.
//!
//! Sources are written as `serde_json::json!` literals and converted into
//! the engine's value model.

#![allow(dead_code)]

use serde_json::Value as Json;
use strata::{RootView, Value};

/// Root view over the given sources, highest priority first.
pub fn root(sources: Vec<Json>) -> RootView {
    RootView::new(sources)
}

/// Root view over a single source.
pub fn single(source: Json) -> RootView {
    RootView::new([source])
}

/// Convert a JSON literal into a value.
pub fn value(json: Json) -> Value {
    Value::from(json)
}

/// Shorthand for a string value.
pub fn s(text: &str) -> Value {
    Value::Str(text.to_string())
}

/// Collect a view's contents, panicking on the first error.
pub fn contents(view: &strata::View) -> Vec<Value> {
    view.all_contents()
        .collect::<Result<Vec<_>, _>>()
        .expect("contents should not fail")
}
