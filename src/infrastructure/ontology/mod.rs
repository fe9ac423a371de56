pub mod file;
pub mod http;

use crate::domain::entities::ontology::OntologyIndex;
use crate::domain::error::DomainError;
use serde_json::Value;

/// The index service wraps the term map in `{ "data": ... }`; local copies may not.
pub(crate) fn parse_index_document(doc: Value) -> Result<OntologyIndex, DomainError> {
    let terms = match doc {
        Value::Object(mut obj) if obj.contains_key("data") => obj.remove("data").unwrap_or_default(),
        other => other,
    };
    Ok(serde_json::from_value(terms)?)
}
