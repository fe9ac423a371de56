use super::parse_index_document;
use crate::domain::entities::ontology::OntologyIndex;
use crate::domain::error::DomainError;
use crate::domain::ports::ontology_source::OntologySource;
use crate::domain::values::term_category::TermCategory;
use async_trait::async_trait;
use std::path::PathBuf;

enum Location {
    /// One file used for whatever category is asked for.
    File(PathBuf),
    /// `index_EDAM_<Category>.json` inside a directory.
    Dir(PathBuf),
}

pub struct FileOntologySource {
    location: Location,
}

impl FileOntologySource {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: Location::File(path.into()),
        }
    }

    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            location: Location::Dir(dir.into()),
        }
    }

    fn path_for(&self, category: TermCategory) -> PathBuf {
        match &self.location {
            Location::File(path) => path.clone(),
            Location::Dir(dir) => dir.join(format!("index_EDAM_{}.json", category.index_name())),
        }
    }
}

#[async_trait]
impl OntologySource for FileOntologySource {
    async fn fetch(&self, category: TermCategory) -> Result<OntologyIndex, DomainError> {
        let path = self.path_for(category);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| DomainError::Io(format!("{}: {e}", path.display())))?;
        let index = parse_index_document(serde_json::from_slice(&bytes)?)?;
        tracing::info!(path = %path.display(), terms = index.len(), "loaded ontology index");
        Ok(index)
    }
}
