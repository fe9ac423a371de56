use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four ontology branches a registry entry can be annotated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermCategory {
    Topic,
    Operation,
    Format,
    Data,
}

impl TermCategory {
    pub const ALL: [TermCategory; 4] = [
        TermCategory::Topic,
        TermCategory::Operation,
        TermCategory::Format,
        TermCategory::Data,
    ];

    /// Capitalized form used by the ontology index service (`index_EDAM_Topic`).
    pub fn index_name(&self) -> &'static str {
        match self {
            TermCategory::Topic => "Topic",
            TermCategory::Operation => "Operation",
            TermCategory::Format => "Format",
            TermCategory::Data => "Data",
        }
    }
}

impl fmt::Display for TermCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermCategory::Topic => write!(f, "topic"),
            TermCategory::Operation => write!(f, "operation"),
            TermCategory::Format => write!(f, "format"),
            TermCategory::Data => write!(f, "data"),
        }
    }
}

impl FromStr for TermCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "topic" => Ok(TermCategory::Topic),
            "operation" => Ok(TermCategory::Operation),
            "format" => Ok(TermCategory::Format),
            "data" => Ok(TermCategory::Data),
            _ => Err(DomainError::InvalidCategory(format!(
                "'{s}' is not valid. Must be 'Topic', 'Operation', 'Format', or 'Data'"
            ))),
        }
    }
}
