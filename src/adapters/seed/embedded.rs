//! Implements SeedSource over JSON compiled into the binary.
//!
//! `data/catalog.json` holds tactics, interaction types and departments;
//! `data/departments.json` maps department id to its demo data.

use crate::domain::{Catalog, DepartmentSeed, DomainError};
use crate::ports::SeedSource;
use std::collections::HashMap;
use tracing::debug;

const CATALOG_JSON: &str = include_str!("../../../data/catalog.json");
const DEPARTMENTS_JSON: &str = include_str!("../../../data/departments.json");

/// Seed source parsed from embedded JSON. Departments are parsed once, on construction.
pub struct EmbeddedSeed {
    catalog_json: &'static str,
    departments: HashMap<String, DepartmentSeed>,
}

impl EmbeddedSeed {
    pub fn new() -> Result<Self, DomainError> {
        Self::from_json(CATALOG_JSON, DEPARTMENTS_JSON)
    }

    /// Builds a source from arbitrary documents in the embedded format.
    pub fn from_json(
        catalog_json: &'static str,
        departments_json: &str,
    ) -> Result<Self, DomainError> {
        let departments: HashMap<String, DepartmentSeed> = serde_json::from_str(departments_json)
            .map_err(|e| DomainError::Seed(format!("departments: {}", e)))?;
        debug!(departments = departments.len(), "seed data parsed");
        Ok(Self {
            catalog_json,
            departments,
        })
    }
}

impl SeedSource for EmbeddedSeed {
    fn catalog(&self) -> Result<Catalog, DomainError> {
        serde_json::from_str(self.catalog_json)
            .map_err(|e| DomainError::Seed(format!("catalog: {}", e)))
    }

    fn department_seed(&self, department_id: &str) -> Result<Option<DepartmentSeed>, DomainError> {
        Ok(self.departments.get(department_id).cloned())
    }
}
