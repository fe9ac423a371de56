use crate::domain::entities::license_catalog::{LicenseCatalog, SpdxLicenseList};
use crate::domain::error::DomainError;
use crate::domain::ports::license_source::LicenseSource;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a local copy of the SPDX license list (`licenses.json`).
pub struct SpdxFileLicenseSource {
    path: PathBuf,
}

impl SpdxFileLicenseSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LicenseSource for SpdxFileLicenseSource {
    async fn fetch(&self) -> Result<LicenseCatalog, DomainError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| DomainError::Io(format!("{}: {e}", self.path.display())))?;
        let list: SpdxLicenseList = serde_json::from_slice(&bytes)?;
        let catalog = LicenseCatalog::from(list);
        tracing::info!(path = %self.path.display(), licenses = catalog.licenses.len(), "loaded license list");
        Ok(catalog)
    }
}
