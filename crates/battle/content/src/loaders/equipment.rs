//! Equipment catalog loader.

use std::path::Path;

use battle_core::Equipment;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique, read_file};

/// Equipment catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentCatalogFile {
    pub equipment: Vec<Equipment>,
}

/// Loader for the equipment catalog from RON files.
pub struct EquipmentLoader;

impl EquipmentLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Equipment>> {
        let content = read_file(path)?;
        let catalog: EquipmentCatalogFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment catalog RON: {}", e))?;

        ensure_unique("equipment", &catalog.equipment, |e| e.id.clone())?;
        Ok(catalog.equipment)
    }
}
