use crate::domain::entities::license_catalog::LicenseCatalog;
use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Supplies license metadata for the general statistics.
#[async_trait]
pub trait LicenseSource: Send + Sync {
    async fn fetch(&self) -> Result<LicenseCatalog, DomainError>;
}
