use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Namespace stripped from term URIs unless configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "http://edamontology.org/";

/// A pointer from an entry to an ontology term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermReference {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

impl TermReference {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            term: None,
        }
    }

    /// Term id with the namespace removed. URIs outside the namespace are returned whole.
    pub fn canonical_id<'a>(&'a self, namespace: &str) -> &'a str {
        self.uri.strip_prefix(namespace).unwrap_or(&self.uri)
    }

    /// Append every reference found in `value`, which may be a single
    /// reference object or a list of them. Items without a string `uri` are
    /// skipped; a `term` that is not a string is ignored.
    pub fn collect_into(value: &Value, out: &mut Vec<TermReference>) {
        match value {
            Value::Array(items) => {
                for item in items {
                    Self::collect_into(item, out);
                }
            }
            Value::Object(fields) => match fields.get("uri").and_then(Value::as_str) {
                Some(uri) => out.push(TermReference {
                    uri: uri.to_string(),
                    term: fields.get("term").and_then(Value::as_str).map(String::from),
                }),
                None => tracing::debug!(reference = %value, "skipping term reference without uri"),
            },
            _ => {}
        }
    }
}
