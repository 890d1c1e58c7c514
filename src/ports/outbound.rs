//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Catalog, DepartmentSeed, DomainError};
use std::path::Path;

/// Static reference data and per-department demo data.
pub trait SeedSource {
    /// Tactics, interaction types and departments.
    fn catalog(&self) -> Result<Catalog, DomainError>;

    /// Seed for one department. `Ok(None)` if the department has no data.
    fn department_seed(&self, department_id: &str) -> Result<Option<DepartmentSeed>, DomainError>;
}

/// Reads an uploaded picture into a `data:` URL.
///
/// Completes once: resolves with the URL or fails with `DomainError::InvalidImage`
/// when the input is missing or not an image.
#[async_trait::async_trait]
pub trait ImageReader: Send + Sync {
    async fn read_as_data_url(&self, path: &Path) -> Result<String, DomainError>;
}
