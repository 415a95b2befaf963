//! Reactive value graph.
//!
//! The source design intercepts property reads and writes by redefining
//! accessor pairs on plain objects. Rust has no redefinable properties, so a
//! converted document is represented as an explicit graph of wrapper nodes:
//! every object becomes an [`ObjectNode`], every array an [`ArrayNode`], and
//! every property a [`ValueCell`] that all reads and writes go through.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::Value;

/// Shared handle to a converted object node.
pub type ObjectRef = Rc<ObjectNode>;

/// Shared handle to a converted array node.
pub type ArrayRef = Rc<ArrayNode>;

/// A value held by the reactive graph.
///
/// Cloning is cheap for composite values: the clone aliases the same node,
/// which is how object reference identity survives the translation from the
/// source design (see [`ReactiveValue::same`]).
#[derive(Debug, Clone)]
pub enum ReactiveValue {
    /// Null, boolean, number, or string. Never `Value::Object` or
    /// `Value::Array`; those convert to nodes.
    Scalar(Value),
    /// A converted object.
    Object(ObjectRef),
    /// A converted array.
    Array(ArrayRef),
}

impl ReactiveValue {
    /// Identity comparison used by every setter guard.
    ///
    /// Scalars compare by value and nodes by pointer, matching strict
    /// equality in the source design: two structurally equal but distinct
    /// objects are different values. This is deliberately not deep equality.
    pub fn same(&self, other: &ReactiveValue) -> bool {
        match (self, other) {
            (ReactiveValue::Scalar(a), ReactiveValue::Scalar(b)) => a == b,
            (ReactiveValue::Object(a), ReactiveValue::Object(b)) => Rc::ptr_eq(a, b),
            (ReactiveValue::Array(a), ReactiveValue::Array(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Get the scalar payload, if this is a scalar.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            ReactiveValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Get the object node, if this is a converted object.
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            ReactiveValue::Object(node) => Some(node),
            _ => None,
        }
    }

    /// Get the array node, if this is a converted array.
    pub fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            ReactiveValue::Array(node) => Some(node),
            _ => None,
        }
    }

    /// Check if this value is a scalar leaf.
    pub fn is_scalar(&self) -> bool {
        matches!(self, ReactiveValue::Scalar(_))
    }

    /// Check if this value is a converted object.
    pub fn is_object(&self) -> bool {
        matches!(self, ReactiveValue::Object(_))
    }

    /// Check if this value is a converted array.
    pub fn is_array(&self) -> bool {
        matches!(self, ReactiveValue::Array(_))
    }

    /// Materialize the current state of the graph below this value as plain
    /// JSON, preserving key order.
    ///
    /// Cycles are not detected: a document where a node has been written
    /// into its own subtree is unsupported input and will not snapshot.
    pub fn view(&self) -> Value {
        match self {
            ReactiveValue::Scalar(value) => value.clone(),
            ReactiveValue::Object(node) => node.view(),
            ReactiveValue::Array(node) => node.view(),
        }
    }
}

/// The mutable slot backing one reactive property.
///
/// The source design hides each property's current value inside a closure
/// shared by its getter and setter; here the slot is explicit. Nothing
/// outside the owning node holds a cell, so the slot dies with its node.
#[derive(Debug)]
pub struct ValueCell {
    slot: RefCell<ReactiveValue>,
}

impl ValueCell {
    pub(crate) fn new(value: ReactiveValue) -> Self {
        ValueCell {
            slot: RefCell::new(value),
        }
    }

    /// Read the current value. Composite values come back as aliases of the
    /// stored node.
    pub fn get(&self) -> ReactiveValue {
        self.slot.borrow().clone()
    }

    /// Write a new value, unless it is [`same`](ReactiveValue::same) as the
    /// current one. Returns whether the slot changed.
    pub fn replace(&self, new: ReactiveValue) -> bool {
        if self.slot.borrow().same(&new) {
            return false;
        }
        *self.slot.borrow_mut() = new;
        true
    }
}

/// A converted object: an ordered map from key to value cell.
///
/// The key set is frozen when the node is built. Keys that were not present
/// at conversion time can never be observed or written through the node;
/// [`ObjectNode::set`] on an unknown key is a silent no-op. This is the
/// documented boundary of the design, not an error.
#[derive(Debug)]
pub struct ObjectNode {
    cells: IndexMap<String, ValueCell>,
}

impl ObjectNode {
    pub(crate) fn new(cells: IndexMap<String, ValueCell>) -> Self {
        ObjectNode { cells }
    }

    /// Read the current value of `key`, or `None` if the key was not present
    /// at conversion time.
    pub fn get(&self, key: &str) -> Option<ReactiveValue> {
        self.cells.get(key).map(ValueCell::get)
    }

    /// Write `key`, converting plain JSON input recursively on the way in.
    ///
    /// Returns `false` without touching the cell when the new value is
    /// identical to the current one, or when `key` is outside the frozen
    /// key set.
    pub fn set(&self, key: &str, value: impl Into<ReactiveValue>) -> bool {
        match self.cells.get(key) {
            Some(cell) => cell.replace(value.into()),
            None => false,
        }
    }

    /// Check whether `key` was present at conversion time.
    pub fn contains_key(&self, key: &str) -> bool {
        self.cells.contains_key(key)
    }

    /// Iterate the keys in conversion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the node has no keys.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Snapshot the node and everything below it as plain JSON.
    pub fn view(&self) -> Value {
        let mut map = serde_json::Map::with_capacity(self.cells.len());
        for (key, cell) in &self.cells {
            map.insert(key.clone(), cell.slot.borrow().view());
        }
        Value::Object(map)
    }
}

/// A converted array: one value cell per element present at conversion time.
///
/// Elements are intercepted like object properties; the length is fixed and
/// no push/pop surface exists.
#[derive(Debug)]
pub struct ArrayNode {
    cells: Vec<ValueCell>,
}

impl ArrayNode {
    pub(crate) fn new(cells: Vec<ValueCell>) -> Self {
        ArrayNode { cells }
    }

    /// Read the current value at `index`.
    pub fn get(&self, index: usize) -> Option<ReactiveValue> {
        self.cells.get(index).map(ValueCell::get)
    }

    /// Write the element at `index`, with the same identity guard and
    /// recursive conversion as [`ObjectNode::set`]. Out-of-range writes are
    /// a silent no-op.
    pub fn set(&self, index: usize, value: impl Into<ReactiveValue>) -> bool {
        match self.cells.get(index) {
            Some(cell) => cell.replace(value.into()),
            None => false,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Snapshot the array and everything below it as plain JSON.
    pub fn view(&self) -> Value {
        Value::Array(self.cells.iter().map(|cell| cell.slot.borrow().view()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::observe;
    use serde_json::json;

    #[test]
    fn test_same_scalars_by_value() {
        let a = ReactiveValue::Scalar(json!(1));
        let b = ReactiveValue::Scalar(json!(1));
        let c = ReactiveValue::Scalar(json!(2));
        assert!(a.same(&b));
        assert!(!a.same(&c));
        assert!(!a.same(&ReactiveValue::Scalar(json!(null))));
    }

    #[test]
    fn test_same_nodes_by_identity() {
        let a = observe(json!({"x": 1}));
        let b = observe(json!({"x": 1}));
        assert!(a.same(&a.clone()));
        // Structurally equal, but distinct nodes.
        assert!(!a.same(&b));
    }

    #[test]
    fn test_cell_replace_guards_identity() {
        let cell = ValueCell::new(ReactiveValue::Scalar(json!(1)));
        assert!(!cell.replace(ReactiveValue::Scalar(json!(1))));
        assert!(cell.replace(ReactiveValue::Scalar(json!(2))));
        assert_eq!(cell.get().view(), json!(2));
    }

    #[test]
    fn test_view_preserves_key_order() {
        let root = observe(json!({"z": 1, "a": 2, "m": 3}));
        let node = root.as_object().unwrap();
        let keys: Vec<&str> = node.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(
            serde_json::to_string(&root.view()).unwrap(),
            r#"{"z":1,"a":2,"m":3}"#
        );
    }

    #[test]
    fn test_set_outside_frozen_key_set_is_noop() {
        let root = observe(json!({"a": 1}));
        let node = root.as_object().unwrap();
        assert!(!node.set("b", json!(2)));
        assert!(node.get("b").is_none());
        assert_eq!(root.view(), json!({"a": 1}));
    }
}
