//! Content loaders for reading battle data from files.
//!
//! Each loader turns one RON/TOML file into battle-core values or the
//! templates in [`crate::templates`]. [`ContentFactory`] ties them together.

pub mod ability;
pub mod config;
pub mod djinn;
pub mod encounter;
pub mod equipment;
pub mod factory;
pub mod unit;

pub use ability::AbilityLoader;
pub use config::ConfigLoader;
pub use djinn::DjinnLoader;
pub use encounter::EncounterLoader;
pub use equipment::EquipmentLoader;
pub use factory::{BattleSetup, ContentFactory};
pub use unit::UnitLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Fails on the first id that appears twice.
pub(crate) fn ensure_unique<'a, T: 'a, K: Ord + core::fmt::Display>(
    kind: &str,
    items: impl IntoIterator<Item = &'a T>,
    key: impl Fn(&T) -> K,
) -> LoadResult<()> {
    let mut seen = std::collections::BTreeSet::new();
    for item in items {
        let id = key(item);
        if seen.contains(&id) {
            return Err(anyhow::anyhow!("Duplicate {} id '{}'", kind, id));
        }
        seen.insert(id);
    }
    Ok(())
}
