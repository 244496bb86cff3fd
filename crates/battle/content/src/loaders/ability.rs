//! Ability catalog loader.

use std::path::Path;

use battle_core::Ability;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique, read_file};

/// Ability catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityCatalogFile {
    pub abilities: Vec<Ability>,
}

/// Loader for the ability catalog from RON files.
pub struct AbilityLoader;

impl AbilityLoader {
    /// Load the ability catalog from a RON file.
    ///
    /// Ability ids must be unique, and every buff or debuff must carry a
    /// `stat_modifier`.
    pub fn load(path: &Path) -> LoadResult<Vec<Ability>> {
        let content = read_file(path)?;
        let catalog: AbilityCatalogFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ability catalog RON: {}", e))?;

        ensure_unique("ability", &catalog.abilities, |a| a.id.clone())?;
        if let Some(ability) = catalog.abilities.iter().find(|a| !a.is_resolvable()) {
            return Err(anyhow::anyhow!(
                "Ability '{}' is a {} without a stat_modifier",
                ability.id,
                ability.kind
            ));
        }
        Ok(catalog.abilities)
    }
}
