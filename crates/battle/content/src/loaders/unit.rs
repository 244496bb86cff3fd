//! Unit template loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique, read_file};
use crate::templates::UnitTemplate;

/// Unit catalog structure for RON files. Players and enemies share one
/// namespace; which side a template fights on is decided by the encounter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitCatalogFile {
    pub units: Vec<UnitTemplate>,
}

/// Loader for unit templates from RON files.
pub struct UnitLoader;

impl UnitLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<UnitTemplate>> {
        let content = read_file(path)?;
        let catalog: UnitCatalogFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit catalog RON: {}", e))?;

        ensure_unique("unit", &catalog.units, |u| u.id.clone())?;
        Ok(catalog.units)
    }
}
