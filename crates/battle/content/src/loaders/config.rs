//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their [`BattleConfig::default`] values. Percentages
    /// above 100 are rejected.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        let config: BattleConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        for (key, value) in [
            ("poison_percent", config.poison_percent),
            ("burn_percent", config.burn_percent),
            ("freeze_break_chance", config.freeze_break_chance),
            ("paralyze_fail_chance", config.paralyze_fail_chance),
        ] {
            if value > 100 {
                return Err(anyhow::anyhow!(
                    "Invalid config value {} = {}: must be at most 100",
                    key,
                    value
                ));
            }
        }
        Ok(config)
    }
}
