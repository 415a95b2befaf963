//! Host facade: field projection over a converted data document.
//!
//! A [`Host`] owns its data document and mirrors the document's top-level
//! keys onto itself, so consumers read and write `host` fields instead of
//! reaching through `host.data()`. The mirrored accessors are pure forwards:
//! a host field and the corresponding data entry are two views of one cell,
//! never independent copies.

use serde_json::Value;
use thiserror::Error;

use crate::observer::observe;
use crate::value::ReactiveValue;

/// Errors from the parsing constructor. The reactive core itself never
/// raises.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid data document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An object that exposes a converted data document through projected
/// fields.
///
/// The projection is a snapshot of the document's top-level keys taken at
/// construction; keys are never added to it afterwards.
#[derive(Debug)]
pub struct Host {
    data: ReactiveValue,
    fields: Vec<String>,
}

impl Host {
    /// Convert `data` and project its top-level keys.
    ///
    /// A non-object document degrades to an empty projection: the host holds
    /// the converted value but mirrors no fields.
    ///
    /// # Example
    ///
    /// ```
    /// use observable_json::Host;
    /// use serde_json::json;
    ///
    /// let host = Host::new(json!({"a": 1}));
    /// host.set("a", json!(5));
    /// assert_eq!(host.view(), json!({"a": 5}));
    /// ```
    pub fn new(data: Value) -> Self {
        let data = observe(data);
        let fields = match &data {
            ReactiveValue::Object(node) => node.keys().map(str::to_string).collect(),
            _ => Vec::new(),
        };
        Host { data, fields }
    }

    /// Parse a JSON document and construct a host from it.
    pub fn from_json(text: &str) -> Result<Self, HostError> {
        Ok(Self::new(serde_json::from_str(text)?))
    }

    /// The projected field names, in document order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Check whether `field` was projected at construction.
    pub fn is_projected(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    /// The converted data document the host forwards to.
    pub fn data(&self) -> &ReactiveValue {
        &self.data
    }

    /// Read a projected field. `None` for anything outside the projection
    /// snapshot.
    pub fn get(&self, field: &str) -> Option<ReactiveValue> {
        if !self.is_projected(field) {
            return None;
        }
        match &self.data {
            ReactiveValue::Object(node) => node.get(field),
            _ => None,
        }
    }

    /// Write a projected field, forwarding to the data document's setter and
    /// inheriting its identity guard and recursive conversion. Returns
    /// whether the underlying cell changed; writes outside the projection
    /// are a silent no-op.
    pub fn set(&self, field: &str, value: impl Into<ReactiveValue>) -> bool {
        if !self.is_projected(field) {
            return false;
        }
        match &self.data {
            ReactiveValue::Object(node) => node.set(field, value),
            _ => false,
        }
    }

    /// Snapshot the current state of the data document as plain JSON.
    pub fn view(&self) -> Value {
        self.data.view()
    }
}
