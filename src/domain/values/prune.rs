//! Recursive removal of falsy values from a tree of scalars, sequences and mappings.

use serde_json::Value;

/// A node in a tree that can have its empty or falsy descendants removed.
pub trait Prunable: Sized {
    /// `true` for null, `false`, zero, empty strings and empty containers.
    fn is_falsy(&self) -> bool;

    /// Rebuild this node with every falsy descendant removed. Scalars are returned unchanged.
    fn prune_children(self) -> Self;
}

/// Prune bottom-up: children first, then drop the node itself if it ended up falsy.
/// A mapping whose every field was a placeholder therefore disappears too.
pub fn prune<T: Prunable>(node: T) -> Option<T> {
    let node = node.prune_children();
    if node.is_falsy() {
        None
    } else {
        Some(node)
    }
}

impl Prunable for Value {
    fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
        }
    }

    fn prune_children(self) -> Self {
        match self {
            Value::Array(items) => Value::Array(items.into_iter().filter_map(prune).collect()),
            Value::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .filter_map(|(k, v)| prune(v).map(|v| (k, v)))
                    .collect(),
            ),
            scalar => scalar,
        }
    }
}
