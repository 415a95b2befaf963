//! JSON Pointer addressing over the reactive graph.
//!
//! Display layers bind to nested values by path rather than by walking
//! handles, so the crate resolves [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901)
//! strings against converted documents. Unresolvable paths degrade to
//! `None`/`false`; nothing here raises.

use crate::value::ReactiveValue;

/// A step in a pointer path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    /// Object key.
    Key(String),
    /// Array index.
    Index(usize),
}

/// Undo the escaping in a single pointer component: `~1` back to `/`, `~0`
/// back to `~`.
///
/// # Example
///
/// ```
/// use observable_json::path::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 before ~0, otherwise "~01" would decode to "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escape a key so it can appear as one pointer component: `~` becomes
/// `~0`, `/` becomes `~1`.
///
/// # Example
///
/// ```
/// use observable_json::path::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // ~ before /, so the ~1 sequences written for / are not re-escaped
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a pointer string into path steps.
///
/// The empty pointer is the root (empty path). Each component is unescaped,
/// and purely numeric components become array indexes. A missing leading
/// `/` is tolerated: the pointer is read as if it had one.
///
/// # Example
///
/// ```
/// use observable_json::path::{parse_pointer, PathStep};
///
/// assert_eq!(parse_pointer(""), Vec::<PathStep>::new());
/// assert_eq!(
///     parse_pointer("/foo/0"),
///     vec![PathStep::Key("foo".into()), PathStep::Index(0)]
/// );
/// assert_eq!(parse_pointer("foo"), vec![PathStep::Key("foo".into())]);
/// ```
pub fn parse_pointer(pointer: &str) -> Vec<PathStep> {
    if pointer.is_empty() {
        return Vec::new();
    }
    pointer
        .strip_prefix('/')
        .unwrap_or(pointer)
        .split('/')
        .map(|component| {
            let component = unescape_component(component);
            if let Ok(idx) = component.parse::<usize>() {
                PathStep::Index(idx)
            } else {
                PathStep::Key(component)
            }
        })
        .collect()
}

/// Resolve a path against a converted document.
///
/// Returns `None` when a step does not match the shape it lands on (a key
/// step on a non-object, an index step on a non-array, or a missing entry).
pub fn value_at_path(root: &ReactiveValue, path: &[PathStep]) -> Option<ReactiveValue> {
    let mut cur = root.clone();
    for step in path {
        cur = match (step, &cur) {
            (PathStep::Key(key), ReactiveValue::Object(node)) => node.get(key)?,
            (PathStep::Index(idx), ReactiveValue::Array(node)) => node.get(*idx)?,
            _ => return None,
        };
    }
    Some(cur)
}

/// Write through the cell a path resolves to.
///
/// The parent is resolved first, then the ordinary identity-guarded setter
/// runs at the leaf. Returns `false` when the path does not resolve, when
/// the path is empty (the root itself has no enclosing cell), or when the
/// setter absorbs the write as an identity no-op.
pub fn set_at_path(
    root: &ReactiveValue,
    path: &[PathStep],
    value: impl Into<ReactiveValue>,
) -> bool {
    let Some((leaf, parent)) = path.split_last() else {
        return false;
    };
    let Some(target) = value_at_path(root, parent) else {
        return false;
    };
    match (leaf, &target) {
        (PathStep::Key(key), ReactiveValue::Object(node)) => node.set(key, value),
        (PathStep::Index(idx), ReactiveValue::Array(node)) => node.set(*idx, value),
        _ => false,
    }
}

/// Resolve a pointer string against a converted document.
///
/// # Example
///
/// ```
/// use observable_json::{find, observe};
/// use serde_json::json;
///
/// let data = observe(json!({"a": {"b": [10, 20]}}));
/// assert_eq!(find(&data, "/a/b/1").unwrap().view(), json!(20));
/// assert!(find(&data, "/a/missing").is_none());
/// ```
pub fn find(root: &ReactiveValue, pointer: &str) -> Option<ReactiveValue> {
    value_at_path(root, &parse_pointer(pointer))
}
