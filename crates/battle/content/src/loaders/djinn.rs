//! Djinn catalog loader.
//!
//! Each Djinn lists, per unit id, the abilities it grants under each
//! element relationship:
//!
//! ```ron
//! (
//!     djinn: [
//!         (
//!             id: "flint",
//!             name: "Flint",
//!             element: Venus,
//!             granted_abilities: {
//!                 "isaac": (same: ["ragnarok"], counter: [], neutral: []),
//!             },
//!         ),
//!     ],
//! )
//! ```

use std::path::Path;

use battle_core::Djinn;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique, read_file};

/// Djinn catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DjinnCatalogFile {
    pub djinn: Vec<Djinn>,
}

/// Loader for the Djinn catalog from RON files.
pub struct DjinnLoader;

impl DjinnLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Djinn>> {
        let content = read_file(path)?;
        let catalog: DjinnCatalogFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse djinn catalog RON: {}", e))?;

        ensure_unique("djinn", &catalog.djinn, |d| d.id.clone())?;
        Ok(catalog.djinn)
    }
}
