//! Content factory for assembling battles from data files.

use std::path::{Path, PathBuf};

use battle_core::{
    Ability, AbilityCatalog, BattleConfig, BattleState, Djinn, Equipment, Team, Unit,
    create_battle_state,
};

use crate::loaders::{
    AbilityLoader, ConfigLoader, DjinnLoader, EncounterLoader, EquipmentLoader, LoadResult,
    UnitLoader,
};
use crate::templates::{Encounter, UnitTemplate};

/// Everything needed to start one encounter.
#[derive(Clone, Debug)]
pub struct BattleSetup {
    pub encounter: Encounter,
    pub config: BattleConfig,
    pub abilities: AbilityCatalog,
    pub team: Team,
    pub enemies: Vec<Unit>,
}

impl BattleSetup {
    /// Round-1 planning state for this encounter.
    pub fn initial_state(&self) -> BattleState {
        create_battle_state(&self.team, self.enemies.clone(), &self.abilities)
    }
}

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── abilities.ron
/// ├── equipment.ron
/// ├── djinn.ron
/// ├── units.ron
/// └── encounters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the ability catalog from `abilities.ron`.
    pub fn load_abilities(&self) -> LoadResult<Vec<Ability>> {
        AbilityLoader::load(&self.data_dir.join("abilities.ron"))
    }

    /// Load the equipment catalog from `equipment.ron`.
    pub fn load_equipment(&self) -> LoadResult<Vec<Equipment>> {
        EquipmentLoader::load(&self.data_dir.join("equipment.ron"))
    }

    /// Load the Djinn catalog from `djinn.ron`.
    pub fn load_djinn(&self) -> LoadResult<Vec<Djinn>> {
        DjinnLoader::load(&self.data_dir.join("djinn.ron"))
    }

    /// Load unit templates from `units.ron`.
    pub fn load_units(&self) -> LoadResult<Vec<UnitTemplate>> {
        UnitLoader::load(&self.data_dir.join("units.ron"))
    }

    /// Load encounters from `encounters.ron`.
    pub fn load_encounters(&self) -> LoadResult<Vec<Encounter>> {
        EncounterLoader::load(&self.data_dir.join("encounters.ron"))
    }

    /// Assembles the encounter `encounter_id`.
    ///
    /// Every referenced unit, ability, equipment and Djinn id is resolved
    /// against the catalogs. Player units keep their template ids; repeated
    /// enemy templates get ordinal suffixes. Djinn start `Set`.
    pub fn build_battle(&self, encounter_id: &str) -> LoadResult<BattleSetup> {
        let config = self.load_config()?;
        let abilities = self.load_abilities()?;
        let equipment = self.load_equipment()?;
        let djinn = self.load_djinn()?;
        let units = self.load_units()?;
        let encounter = self
            .load_encounters()?
            .into_iter()
            .find(|e| e.id == encounter_id)
            .ok_or_else(|| anyhow::anyhow!("Unknown encounter '{}'", encounter_id))?;

        let template = |id: &battle_core::UnitId| {
            units.iter().find(|t| &t.id == id).ok_or_else(|| {
                anyhow::anyhow!("Encounter '{}' references unknown unit '{}'", encounter_id, id)
            })
        };
        let instantiate = |source: &UnitTemplate, instance_id| {
            source
                .instantiate(
                    instance_id,
                    |id| abilities.iter().find(|a| &a.id == id),
                    |id| equipment.iter().find(|e| &e.id == id),
                )
                .map_err(|e| anyhow::anyhow!("Failed to build unit '{}': {}", source.id, e))
        };

        let mut party = Vec::with_capacity(encounter.party.len());
        for id in &encounter.party {
            party.push(instantiate(template(id)?, id.clone())?);
        }

        let mut equipped = Vec::with_capacity(encounter.djinn.len());
        for id in &encounter.djinn {
            let definition = djinn.iter().find(|d| &d.id == id).ok_or_else(|| {
                anyhow::anyhow!("Encounter '{}' references unknown djinn '{}'", encounter_id, id)
            })?;
            for granted in definition.granted_abilities.values().flat_map(|g| g.all()) {
                if !abilities.iter().any(|a| &a.id == granted) {
                    return Err(anyhow::anyhow!(
                        "Djinn '{}' grants unknown ability '{}'",
                        id,
                        granted
                    ));
                }
            }
            equipped.push(definition.clone());
        }

        let team = Team::new(party, equipped)
            .map_err(|e| anyhow::anyhow!("Invalid party for encounter '{}': {}", encounter_id, e))?;

        let mut enemies = Vec::with_capacity(encounter.enemies.len());
        for (template_id, instance_id) in encounter.enemy_instance_ids() {
            enemies.push(instantiate(template(&template_id)?, instance_id)?);
        }
        if enemies.is_empty() {
            return Err(anyhow::anyhow!("Encounter '{}' has no enemies", encounter_id));
        }

        tracing::debug!(
            encounter = encounter_id,
            party = team.units().len(),
            enemies = enemies.len(),
            "battle assembled"
        );
        Ok(BattleSetup {
            encounter,
            config,
            abilities: abilities.into_iter().collect(),
            team,
            enemies,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
