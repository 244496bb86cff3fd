//! Battle participants.

use std::collections::BTreeSet;

use super::{Ability, AbilityId, Element, EquipmentLoadout, Stats, StatusEffects, UnitId};

/// A single combatant on either side.
///
/// Units are values: every battle transition produces new `Unit`s instead of
/// mutating the ones a caller holds. A unit at 0 HP is knocked out but stays
/// in its roster so queue slots and indices remain aligned.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub element: Element,
    pub level: u32,
    pub base_stats: Stats,
    pub growth_rates: Stats,
    pub current_hp: i32,
    pub current_pp: i32,
    /// Mana this unit adds to the team pool.
    pub mana_contribution: u32,
    pub equipment: EquipmentLoadout,
    /// Every ability the unit knows, including ones not yet unlocked.
    pub abilities: Vec<Ability>,
    pub unlocked_abilities: BTreeSet<AbilityId>,
    pub status_effects: StatusEffects,
}

impl Unit {
    /// Creates a unit at full HP/PP with no equipment or abilities.
    pub fn new(
        id: impl Into<UnitId>,
        element: Element,
        level: u32,
        base_stats: Stats,
        growth_rates: Stats,
    ) -> Self {
        let id = id.into();
        let mut unit = Self {
            name: id.to_string(),
            id,
            element,
            level: level.max(1),
            base_stats,
            growth_rates,
            current_hp: 0,
            current_pp: 0,
            mana_contribution: 1,
            equipment: EquipmentLoadout::empty(),
            abilities: Vec::new(),
            unlocked_abilities: BTreeSet::new(),
            status_effects: StatusEffects::empty(),
        };
        unit.current_hp = unit.max_hp();
        unit.current_pp = unit.max_pp();
        unit
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_mana_contribution(mut self, mana: u32) -> Self {
        self.mana_contribution = mana;
        self
    }

    /// Equips the loadout and refills HP/PP to the new maximums.
    #[must_use]
    pub fn with_equipment(mut self, equipment: EquipmentLoadout) -> Self {
        self.equipment = equipment;
        self.current_hp = self.max_hp();
        self.current_pp = self.max_pp();
        self
    }

    /// Teaches an ability, unlocking it if the unit's level allows.
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.learn(ability);
        self
    }

    pub(crate) fn learn(&mut self, ability: Ability) {
        if ability.unlock_level <= self.level {
            self.unlocked_abilities.insert(ability.id.clone());
        }
        if !self.abilities.iter().any(|a| a.id == ability.id) {
            self.abilities.push(ability);
        }
    }

    /// Base stats plus level growth.
    pub fn level_stats(&self) -> Stats {
        self.base_stats + self.growth_rates.scaled(self.level as i32 - 1)
    }

    /// HP ceiling: level-scaled base plus equipment. Transient sources (Djinn,
    /// buffs) do not raise it.
    pub fn max_hp(&self) -> i32 {
        (self.level_stats().hp + self.equipment.stat_bonus().hp).max(1)
    }

    pub fn max_pp(&self) -> i32 {
        (self.level_stats().pp + self.equipment.stat_bonus().pp).max(0)
    }

    pub fn is_ko(&self) -> bool {
        self.current_hp <= 0
    }

    pub fn is_alive(&self) -> bool {
        !self.is_ko()
    }

    pub fn ability(&self, id: &AbilityId) -> Option<&Ability> {
        self.abilities.iter().find(|a| &a.id == id)
    }

    /// Known, unlocked, and level-eligible.
    pub fn can_use(&self, id: &AbilityId) -> bool {
        self.unlocked_abilities.contains(id)
            && self
                .ability(id)
                .is_some_and(|a| a.unlock_level <= self.level)
    }

    /// Usable abilities in the order the unit learned them.
    pub fn usable_abilities(&self) -> impl Iterator<Item = &Ability> {
        self.abilities
            .iter()
            .filter(|a| self.unlocked_abilities.contains(&a.id) && a.unlock_level <= self.level)
    }

    /// Applies HP change and clamps to `[0, max_hp]`. Returns the applied delta.
    pub(crate) fn adjust_hp(&mut self, delta: i32) -> i32 {
        let before = self.current_hp;
        self.current_hp = (self.current_hp + delta).clamp(0, self.max_hp());
        self.current_hp - before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{AbilityKind, Equipment, EquipmentSlot};

    fn adept() -> Unit {
        Unit::new(
            "isaac",
            Element::Venus,
            3,
            Stats::new(100, 20, 15, 10, 12, 8),
            Stats::new(10, 2, 3, 2, 2, 1),
        )
    }

    #[test]
    fn level_growth_applies_from_level_two() {
        let unit = adept();
        assert_eq!(unit.level_stats(), Stats::new(120, 24, 21, 14, 16, 10));
        assert_eq!(unit.current_hp, 120);
        assert_eq!(unit.current_pp, 24);
    }

    #[test]
    fn equipment_raises_max_hp() {
        let mut loadout = EquipmentLoadout::empty();
        loadout.equip(Equipment::new(
            "mail",
            EquipmentSlot::Armor,
            Stats::new(30, 0, 0, 5, 0, 0),
        ));
        let unit = adept().with_equipment(loadout);
        assert_eq!(unit.max_hp(), 150);
        assert_eq!(unit.current_hp, 150);
    }

    #[test]
    fn locked_abilities_are_not_usable() {
        let mut quake = Ability::new("quake", AbilityKind::Elemental);
        quake.unlock_level = 5;
        let unit = adept()
            .with_ability(Ability::new("cure", AbilityKind::Healing))
            .with_ability(quake);

        assert!(unit.can_use(&AbilityId::new("cure")));
        assert!(!unit.can_use(&AbilityId::new("quake")));
        assert_eq!(unit.usable_abilities().count(), 1);
    }

    #[test]
    fn hp_adjustment_clamps() {
        let mut unit = adept();
        assert_eq!(unit.adjust_hp(-500), -120);
        assert!(unit.is_ko());
        assert_eq!(unit.adjust_hp(500), 120);
    }
}
