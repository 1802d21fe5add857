use super::domain::Institution;
use super::Catalog;

/// Storage abstraction supplying catalog snapshots to the recommendation service.
pub trait CatalogSource: Send + Sync {
    /// Full catalog in its stored order. Callers treat the result as immutable.
    fn snapshot(&self) -> Result<Vec<Institution>, CatalogError>;
    fn fetch(&self, id: &str) -> Result<Option<Institution>, CatalogError>;
}

/// Error enumeration for catalog storage failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("institution not found")]
    NotFound,
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Read-only catalog held in memory for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    catalog: Catalog,
}

impl InMemoryCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl CatalogSource for InMemoryCatalog {
    fn snapshot(&self) -> Result<Vec<Institution>, CatalogError> {
        Ok(self.catalog.institutions().to_vec())
    }

    fn fetch(&self, id: &str) -> Result<Option<Institution>, CatalogError> {
        Ok(self.catalog.get(id).cloned())
    }
}
