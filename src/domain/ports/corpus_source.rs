use crate::domain::error::DomainError;
use async_trait::async_trait;
use serde_json::Value;

/// Supplies the raw registry entries, one JSON record per entry.
#[async_trait]
pub trait CorpusSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Value>, DomainError>;
}
