use super::parse_index_document;
use crate::domain::entities::ontology::OntologyIndex;
use crate::domain::error::DomainError;
use crate::domain::ports::ontology_source::OntologySource;
use crate::domain::values::term_category::TermCategory;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_INDEX_URL: &str = "https://bio.tools/api/o";

/// Fetches `{base_url}/index_EDAM_<Category>?format=json` from the registry's ontology service.
pub struct HttpOntologySource {
    client: Client,
    base_url: String,
}

impl HttpOntologySource {
    pub fn new(base_url: Option<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .user_agent(concat!("registry-stats/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_INDEX_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    pub fn index_url(&self, category: TermCategory) -> String {
        format!("{}/index_EDAM_{}?format=json", self.base_url, category.index_name())
    }
}

#[async_trait]
impl OntologySource for HttpOntologySource {
    async fn fetch(&self, category: TermCategory) -> Result<OntologyIndex, DomainError> {
        let url = self.index_url(category);
        tracing::debug!(%url, "fetching ontology index");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Network(format!("Index request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Network(format!("Index service {status}: {body}")));
        }

        let doc: Value = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Index response: {e}")))?;
        let index = parse_index_document(doc)?;
        tracing::info!(%category, terms = index.len(), "fetched ontology index");
        Ok(index)
    }
}
