use crate::domain::error::DomainError;
use crate::domain::values::timestamp::parse_timestamp_with_offset;
use chrono::{DateTime, FixedOffset, Utc};
use serde_json::Value;

/// Fields an entry identifier is read from, in order of preference.
pub const ID_FIELDS: [&str; 2] = ["bioagentsID", "id"];
pub const ADDITION_DATE_FIELD: &str = "additionDate";

/// A registry record with its identifier and addition time pulled out.
///
/// The rest of the record stays opaque JSON; term extraction reads it by
/// field name.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub id: String,
    /// Addition time in the offset it was recorded with.
    pub added_at: Option<DateTime<FixedOffset>>,
    pub record: Value,
}

impl RegistryEntry {
    pub fn from_record(record: Value) -> Result<Self, DomainError> {
        let id = ID_FIELDS
            .iter()
            .find_map(|f| record.get(*f).and_then(Value::as_str))
            .map(String::from)
            .ok_or_else(|| {
                DomainError::Parse(format!(
                    "Entry has no identifier (expected one of: {})",
                    ID_FIELDS.join(", ")
                ))
            })?;

        let added_at = match record.get(ADDITION_DATE_FIELD) {
            None => None,
            Some(Value::String(s)) => Some(
                parse_timestamp_with_offset(s).map_err(|e| DomainError::Parse(format!("Entry {id}: {e}")))?,
            ),
            Some(other) => {
                return Err(DomainError::Parse(format!(
                    "Entry {id}: {ADDITION_DATE_FIELD} is not a string: {other}"
                )))
            }
        };

        Ok(Self { id, added_at, record })
    }

    pub fn added_before(&self, limit: DateTime<Utc>) -> Option<bool> {
        self.added_at.map(|added| added.with_timezone(&Utc) < limit)
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.record.get(name)
    }

    /// The entry's `function` sub-records; empty when the field is absent.
    pub fn functions(&self) -> impl Iterator<Item = &Value> {
        self.field("function")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
    }
}
