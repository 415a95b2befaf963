//! Minimal reactive data layer over JSON documents.
//!
//! [`observe`] converts a plain nested document into a graph of wrapper
//! nodes whose every read and write goes through an explicit cell, so
//! external code can observe mutations at any depth; plain JSON assigned
//! into the graph later converts recursively on the way in. [`Host`]
//! projects the document's top-level keys onto itself as forwarding
//! accessors.
//!
//! What this crate deliberately does not do: dependency tracking or
//! subscriber registries, array mutation interception, batching, and
//! diffing. Writes are synchronous, and the graph is single-threaded
//! (`Rc`-based).
//!
//! Known boundaries: keys absent at conversion time never become reactive
//! (see [`ObjectNode`]), and converted documents are expected to stay
//! acyclic — aliasing one node under two sibling paths is fine, but writing
//! a node into its own subtree creates a cycle that snapshotting does not
//! detect.
//!
//! # Example
//!
//! ```
//! use observable_json::{find, observe, Host};
//! use serde_json::json;
//!
//! let data = observe(json!({"a": 1, "b": {"c": 2}}));
//! let b = data.as_object().unwrap().get("b").unwrap();
//! b.as_object().unwrap().set("c", json!(3));
//! assert_eq!(find(&data, "/b/c").unwrap().view(), json!(3));
//!
//! let host = Host::new(json!({"a": 1}));
//! host.set("a", json!(5));
//! assert_eq!(host.view(), json!({"a": 5}));
//! ```

pub mod host;
pub mod observer;
pub mod path;
pub mod value;

pub use host::{Host, HostError};
pub use observer::observe;
pub use path::{find, parse_pointer, set_at_path, value_at_path, PathStep};
pub use value::{ArrayNode, ArrayRef, ObjectNode, ObjectRef, ReactiveValue, ValueCell};

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
