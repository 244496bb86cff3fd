//! Pre-battle descriptions of units and encounters.
//!
//! Templates reference catalog entries by id. They become battle-core
//! [`Unit`]s once every id has been resolved, see
//! [`UnitTemplate::instantiate`].

use battle_core::{
    Ability, AbilityId, DjinnId, Element, Equipment, EquipmentId, EquipmentLoadout, Stats, Unit,
    UnitId,
};

/// A unit as authored in `units.ron`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitTemplate {
    pub id: UnitId,
    pub name: String,
    pub element: Element,
    #[cfg_attr(feature = "serde", serde(default = "first_level"))]
    pub level: u32,
    pub base_stats: Stats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub growth_rates: Stats,
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub mana_contribution: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<AbilityId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: Vec<EquipmentId>,
}

#[cfg(feature = "serde")]
fn first_level() -> u32 {
    1
}

#[cfg(feature = "serde")]
fn one() -> u32 {
    1
}

/// Why a template could not become a unit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InstantiateError {
    #[error("unknown ability '{0}'")]
    UnknownAbility(AbilityId),

    #[error("unknown equipment '{0}'")]
    UnknownEquipment(EquipmentId),

    #[error("equipment '{0}' collides with an item in the same slot")]
    SlotTaken(EquipmentId),
}

impl UnitTemplate {
    /// Builds a full-HP unit with the given instance id, resolving ability
    /// and equipment ids through the lookups.
    pub fn instantiate<'c>(
        &self,
        instance_id: UnitId,
        ability: impl Fn(&AbilityId) -> Option<&'c Ability>,
        equipment: impl Fn(&EquipmentId) -> Option<&'c Equipment>,
    ) -> Result<Unit, InstantiateError> {
        let mut loadout = EquipmentLoadout::empty();
        for id in &self.equipment {
            let item = equipment(id).ok_or_else(|| InstantiateError::UnknownEquipment(id.clone()))?;
            if loadout.equip(item.clone()).is_some() {
                return Err(InstantiateError::SlotTaken(id.clone()));
            }
        }

        let mut unit = Unit::new(
            instance_id,
            self.element,
            self.level,
            self.base_stats,
            self.growth_rates,
        )
        .with_name(self.name.clone())
        .with_mana_contribution(self.mana_contribution)
        .with_equipment(loadout);

        for id in &self.abilities {
            let definition = ability(id).ok_or_else(|| InstantiateError::UnknownAbility(id.clone()))?;
            unit = unit.with_ability(definition.clone());
        }
        Ok(unit)
    }
}

/// A party and enemy lineup as authored in `encounters.ron`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    pub id: String,
    pub name: String,
    /// Player unit template ids, in roster order.
    pub party: Vec<UnitId>,
    /// Djinn equipped on the party, in equip order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub djinn: Vec<DjinnId>,
    /// Enemy template ids. A template may appear more than once.
    pub enemies: Vec<UnitId>,
}

impl Encounter {
    /// Instance ids for the enemy lineup. Templates that appear more than
    /// once get a 1-based ordinal suffix (`slime-1`, `slime-2`).
    pub fn enemy_instance_ids(&self) -> Vec<(UnitId, UnitId)> {
        let mut seen: Vec<(&UnitId, u32)> = Vec::new();
        self.enemies
            .iter()
            .map(|template| {
                let repeated = self.enemies.iter().filter(|id| *id == template).count() > 1;
                if !repeated {
                    return (template.clone(), template.clone());
                }
                let ordinal = match seen.iter_mut().find(|(id, _)| *id == template) {
                    Some((_, n)) => {
                        *n += 1;
                        *n
                    }
                    None => {
                        seen.push((template, 1));
                        1
                    }
                };
                (template.clone(), UnitId::new(format!("{template}-{ordinal}")))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{AbilityKind, EquipmentSlot};

    fn template() -> UnitTemplate {
        UnitTemplate {
            id: "isaac".into(),
            name: "Isaac".into(),
            element: Element::Venus,
            level: 3,
            base_stats: Stats::new(80, 20, 12, 8, 10, 11),
            growth_rates: Stats::new(10, 2, 2, 1, 1, 1),
            mana_contribution: 2,
            abilities: vec!["quake".into()],
            equipment: vec!["long-sword".into()],
        }
    }

    #[test]
    fn instantiate_resolves_every_reference() {
        let quake = Ability::new("quake", AbilityKind::Elemental);
        let sword = Equipment::new("long-sword", EquipmentSlot::Weapon, Stats::new(0, 0, 8, 0, 0, 0));

        let unit = template()
            .instantiate(
                "isaac".into(),
                |id| (id == &quake.id).then_some(&quake),
                |id| (id == &sword.id).then_some(&sword),
            )
            .unwrap();
        assert_eq!(unit.name, "Isaac");
        assert_eq!(unit.mana_contribution, 2);
        assert_eq!(unit.max_hp(), 100);
        assert!(unit.can_use(&"quake".into()));
        assert_eq!(unit.equipment.stat_bonus().atk, 8);
    }

    #[test]
    fn dangling_ids_are_reported() {
        let result = template().instantiate("isaac".into(), |_| None, |_| None);
        assert_eq!(result, Err(InstantiateError::UnknownEquipment("long-sword".into())));
    }

    #[test]
    fn repeated_enemies_get_ordinals() {
        let encounter = Encounter {
            id: "test".into(),
            name: "Test".into(),
            party: vec!["isaac".into()],
            djinn: Vec::new(),
            enemies: vec!["slime".into(), "wolf".into(), "slime".into()],
        };
        let ids: Vec<String> = encounter
            .enemy_instance_ids()
            .into_iter()
            .map(|(_, id)| id.to_string())
            .collect();
        assert_eq!(ids, ["slime-1", "wolf", "slime-2"]);
    }
}
