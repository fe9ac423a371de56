use crate::domain::entities::ontology::OntologyIndex;
use crate::domain::error::DomainError;
use crate::domain::values::term_category::TermCategory;
use async_trait::async_trait;

/// Supplies the ontology index for one term category.
#[async_trait]
pub trait OntologySource: Send + Sync {
    async fn fetch(&self, category: TermCategory) -> Result<OntologyIndex, DomainError>;
}
