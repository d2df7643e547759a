//! Catalog sources: the bundled lesson set and user-supplied files

use std::path::Path;

use super::{Catalog, CatalogError};

/// Lesson set shipped with the binary
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

impl Catalog {
    /// Parse the bundled catalog
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Read and validate a catalog file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        let catalog = Self::from_json(&contents)?;
        tracing::info!("Loaded {} sections from {:?}", catalog.len(), path);
        Ok(catalog)
    }
}
