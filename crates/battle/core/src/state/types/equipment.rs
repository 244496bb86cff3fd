//! Equipment definitions and per-unit loadouts.
//!
//! Equipment contributes flat stat bonuses to the stats pipeline. Boots may
//! additionally grant evasion and the "always first turn" override consumed
//! by turn ordering.

use super::{EquipmentId, Stats};

/// The four equipment slots a unit can fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Helm,
    Boots,
}

/// Immutable equipment definition from the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    pub slot: EquipmentSlot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stat_bonus: Stats,
    /// Only meaningful on boots.
    #[cfg_attr(feature = "serde", serde(default))]
    pub always_first_turn: bool,
    /// Extra evasion in percentage points. Only meaningful on boots.
    #[cfg_attr(feature = "serde", serde(default))]
    pub evasion: i32,
}

impl Equipment {
    pub fn new(id: impl Into<EquipmentId>, slot: EquipmentSlot, stat_bonus: Stats) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            slot,
            stat_bonus,
            always_first_turn: false,
            evasion: 0,
        }
    }

    #[must_use]
    pub fn with_always_first_turn(mut self) -> Self {
        self.always_first_turn = true;
        self
    }

    #[must_use]
    pub fn with_evasion(mut self, evasion: i32) -> Self {
        self.evasion = evasion;
        self
    }
}

/// Equipment currently worn by a unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EquipmentLoadout {
    pub weapon: Option<Equipment>,
    pub armor: Option<Equipment>,
    pub helm: Option<Equipment>,
    pub boots: Option<Equipment>,
}

impl EquipmentLoadout {
    /// Creates an empty loadout.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Equips an item into the slot it declares, returning the previous item.
    pub fn equip(&mut self, item: Equipment) -> Option<Equipment> {
        self.slot_mut(item.slot).replace(item)
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Equipment> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_ref(),
            EquipmentSlot::Armor => self.armor.as_ref(),
            EquipmentSlot::Helm => self.helm.as_ref(),
            EquipmentSlot::Boots => self.boots.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Equipment> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Helm => &mut self.helm,
            EquipmentSlot::Boots => &mut self.boots,
        }
    }

    /// Iterates over equipped items in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Equipment> {
        [&self.weapon, &self.armor, &self.helm, &self.boots]
            .into_iter()
            .flatten()
    }

    /// Sum of `stat_bonus` across all four slots.
    pub fn stat_bonus(&self) -> Stats {
        self.iter().map(|item| item.stat_bonus).sum()
    }

    pub fn always_first_turn(&self) -> bool {
        self.boots.as_ref().is_some_and(|b| b.always_first_turn)
    }

    pub fn evasion(&self) -> i32 {
        self.boots.as_ref().map_or(0, |b| b.evasion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_bonus_sums_all_slots() {
        let mut loadout = EquipmentLoadout::empty();
        loadout.equip(Equipment::new(
            "sword",
            EquipmentSlot::Weapon,
            Stats::new(0, 0, 10, 0, 0, 0),
        ));
        loadout.equip(Equipment::new(
            "mail",
            EquipmentSlot::Armor,
            Stats::new(5, 0, 0, 6, 0, -1),
        ));
        loadout.equip(Equipment::new(
            "boots",
            EquipmentSlot::Boots,
            Stats::new(0, 0, 0, 1, 0, 3),
        ));

        assert_eq!(loadout.stat_bonus(), Stats::new(5, 0, 10, 7, 0, 2));
    }

    #[test]
    fn equip_replaces_slot() {
        let mut loadout = EquipmentLoadout::empty();
        loadout.equip(Equipment::new("a", EquipmentSlot::Helm, Stats::ZERO));
        let previous = loadout.equip(Equipment::new("b", EquipmentSlot::Helm, Stats::ZERO));
        assert_eq!(previous.map(|e| e.id), Some(EquipmentId::new("a")));
        assert_eq!(loadout.iter().count(), 1);
    }

    #[test]
    fn only_boots_grant_first_turn() {
        let mut loadout = EquipmentLoadout::empty();
        loadout.equip(
            Equipment::new("ring", EquipmentSlot::Helm, Stats::ZERO).with_always_first_turn(),
        );
        assert!(!loadout.always_first_turn());

        loadout.equip(
            Equipment::new("hermes", EquipmentSlot::Boots, Stats::ZERO)
                .with_always_first_turn()
                .with_evasion(10),
        );
        assert!(loadout.always_first_turn());
        assert_eq!(loadout.evasion(), 10);
    }
}
