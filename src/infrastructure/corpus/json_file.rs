use crate::domain::error::DomainError;
use crate::domain::ports::corpus_source::CorpusSource;
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

/// Entry corpus stored as a JSON file: either a bare array of records or
/// the registry's paged export shape `{ "list": [...] }`.
pub struct JsonFileCorpus {
    path: PathBuf,
}

impl JsonFileCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CorpusSource for JsonFileCorpus {
    async fn load(&self) -> Result<Vec<Value>, DomainError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| DomainError::Io(format!("{}: {e}", self.path.display())))?;
        let doc: Value = serde_json::from_slice(&bytes)?;

        let entries = match doc {
            Value::Array(items) => items,
            Value::Object(mut obj) => match obj.remove("list") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(DomainError::Parse(format!(
                        "{}: expected an array of entries or an object with a 'list' array",
                        self.path.display()
                    )))
                }
            },
            _ => {
                return Err(DomainError::Parse(format!(
                    "{}: expected an array of entries",
                    self.path.display()
                )))
            }
        };

        tracing::info!(path = %self.path.display(), entries = entries.len(), "loaded entry corpus");
        Ok(entries)
    }
}
