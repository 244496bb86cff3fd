//! Encounter loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique, read_file};
use crate::templates::Encounter;

/// Encounter list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterFile {
    pub encounters: Vec<Encounter>,
}

/// Loader for encounters from RON files.
pub struct EncounterLoader;

impl EncounterLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Encounter>> {
        let content = read_file(path)?;
        let file: EncounterFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse encounter RON: {}", e))?;

        ensure_unique("encounter", &file.encounters, |e| e.id.clone())?;
        Ok(file.encounters)
    }
}
