//! Conversion engine.
//!
//! [`observe`] is the single recursive helper the whole crate is built on:
//! it runs once over the initial data document, and again from every setter
//! through the [`From<Value>`] conversion whenever plain JSON is assigned
//! into an already-converted graph.

use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::value::{ArrayNode, ObjectNode, ReactiveValue, ValueCell};

/// Convert a plain JSON document into a reactive graph.
///
/// Scalars (and `null`) are the base case and pass through untouched.
/// Objects and arrays convert every entry present at this moment; entries
/// that appear later in a snapshot of the source document are never seen.
/// The conversion consumes its input, so there is no unconverted alias left
/// behind and no way to unconvert.
///
/// # Example
///
/// ```
/// use observable_json::observe;
/// use serde_json::json;
///
/// let data = observe(json!({"a": 1, "b": {"c": 2}}));
/// let b = data.as_object().unwrap().get("b").unwrap();
/// b.as_object().unwrap().set("c", json!(3));
/// assert_eq!(data.view(), json!({"a": 1, "b": {"c": 3}}));
/// ```
pub fn observe(value: Value) -> ReactiveValue {
    match value {
        Value::Object(map) => {
            let mut cells = IndexMap::with_capacity(map.len());
            for (key, child) in map {
                // Children convert before the parent node exists, so a
                // nested read through the parent always sees the converted
                // form.
                cells.insert(key, ValueCell::new(observe(child)));
            }
            ReactiveValue::Object(Rc::new(ObjectNode::new(cells)))
        }
        Value::Array(items) => {
            let cells = items
                .into_iter()
                .map(|item| ValueCell::new(observe(item)))
                .collect();
            ReactiveValue::Array(Rc::new(ArrayNode::new(cells)))
        }
        scalar => ReactiveValue::Scalar(scalar),
    }
}

impl From<Value> for ReactiveValue {
    /// Plain JSON assigned through any setter converts on the way in, which
    /// is what makes an object assigned long after the initial walk reactive
    /// too.
    fn from(value: Value) -> Self {
        observe(value)
    }
}
