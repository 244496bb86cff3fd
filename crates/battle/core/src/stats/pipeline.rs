//! Effective stats: base + level + equipment + Djinn + status, then floors.

use strum::IntoEnumIterator;

use super::bonus::{Bonus, BonusSource, BonusStack, StatBounds};
use crate::djinn::{relationship_bonus, team_synergy};
use crate::state::{StatKind, Stats, Team, Unit};

/// Per-source contributions for one unit, before floors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBreakdown {
    pub base: Stats,
    pub level: Stats,
    pub equipment: Stats,
    /// Team-wide synergy of Set Djinn; identical for every unit of a team.
    pub djinn_synergy: Stats,
    /// This unit's relationship deltas over Set Djinn.
    pub djinn_relationship: Stats,
    pub status: Stats,
}

impl StatBreakdown {
    /// Computes every source for `unit` in the Djinn context of `team`.
    pub fn compute(unit: &Unit, team: &Team) -> Self {
        let synergy = team_synergy(team);
        let relationship = relationship_bonus(unit, team);

        let mut status = Stats::ZERO;
        for kind in StatKind::iter() {
            *status.get_mut(kind) = unit.status_effects.stat_delta(kind);
        }

        Self {
            base: unit.base_stats,
            level: unit.growth_rates.scaled(unit.level as i32 - 1),
            equipment: unit.equipment.stat_bonus(),
            djinn_synergy: Stats {
                atk: synergy.atk,
                def: synergy.def,
                spd: synergy.spd,
                ..Stats::ZERO
            },
            djinn_relationship: Stats {
                atk: relationship.atk,
                def: relationship.def,
                ..Stats::ZERO
            },
            status,
        }
    }

    /// Bonus stack for one stat, sources in pipeline order.
    pub fn stack(&self, kind: StatKind) -> BonusStack {
        let mut stack = BonusStack::new();
        stack.add(Bonus::new(BonusSource::Level, self.level.get(kind)));
        stack.add(Bonus::new(BonusSource::Equipment, self.equipment.get(kind)));
        stack.add(Bonus::new(
            BonusSource::DjinnSynergy,
            self.djinn_synergy.get(kind),
        ));
        stack.add(Bonus::new(
            BonusSource::DjinnRelationship,
            self.djinn_relationship.get(kind),
        ));
        stack.add(Bonus::new(BonusSource::Status, self.status.get(kind)));
        stack
    }

    /// Final stats with floors applied.
    pub fn effective(&self) -> Stats {
        let mut stats = Stats::ZERO;
        for kind in StatKind::iter() {
            *stats.get_mut(kind) = self
                .stack(kind)
                .apply(self.base.get(kind), StatBounds::floor(kind));
        }
        stats
    }
}

/// Effective stats of `unit` with Djinn bonuses drawn from `team`.
///
/// Pass [`Team::none`] for units that fight without Djinn.
pub fn calculate_effective_stats(unit: &Unit, team: &Team) -> Stats {
    StatBreakdown::compute(unit, team).effective()
}

/// Effective SPD; the turn-order key.
pub fn effective_spd(unit: &Unit, team: &Team) -> i32 {
    calculate_effective_stats(unit, team).spd
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        Djinn, DjinnState, Element, Equipment, EquipmentLoadout, EquipmentSlot, StatusEffect,
        StatusEffectKind,
    };

    fn unit() -> Unit {
        let mut loadout = EquipmentLoadout::empty();
        loadout.equip(Equipment::new(
            "bronze-sword",
            EquipmentSlot::Weapon,
            Stats::new(0, 0, 6, 0, 0, 0),
        ));
        loadout.equip(Equipment::new(
            "leather-boots",
            EquipmentSlot::Boots,
            Stats::new(0, 0, 0, 1, 0, 2),
        ));
        Unit::new(
            "isaac",
            Element::Venus,
            3,
            Stats::new(100, 20, 15, 10, 12, 8),
            Stats::new(10, 2, 3, 2, 2, 1),
        )
        .with_equipment(loadout)
    }

    #[test]
    fn base_level_and_equipment() {
        let stats = calculate_effective_stats(&unit(), Team::none());
        assert_eq!(stats, Stats::new(120, 24, 27, 15, 16, 12));
    }

    #[test]
    fn set_djinn_add_synergy_and_relationship() {
        let unit = unit();
        let team = Team::new(
            [unit.clone()],
            [Djinn::new("flint", Element::Venus), Djinn::new("granite", Element::Venus)],
        )
        .unwrap();

        let breakdown = StatBreakdown::compute(&unit, &team);
        assert_eq!(breakdown.djinn_synergy.atk, 8);
        assert_eq!(breakdown.djinn_synergy.def, 5);
        assert_eq!(breakdown.djinn_relationship.atk, 8);
        assert_eq!(breakdown.djinn_relationship.def, 6);

        let stats = breakdown.effective();
        assert_eq!(stats.atk, 27 + 8 + 8);
        assert_eq!(stats.def, 15 + 5 + 6);
    }

    #[test]
    fn standby_djinn_contribute_nothing() {
        let unit = unit();
        let mut team = Team::new([unit.clone()], [Djinn::new("flint", Element::Venus)]).unwrap();
        if let Some(tracker) = team.tracker_mut(&"flint".into()) {
            tracker.state = DjinnState::Standby;
        }
        assert_eq!(
            calculate_effective_stats(&unit, &team),
            calculate_effective_stats(&unit, Team::none())
        );
    }

    #[test]
    fn status_modifiers_stack_and_respect_floors() {
        let mut unit = unit();
        unit.status_effects.apply(StatusEffect::new(
            StatusEffectKind::Buff {
                stat: StatKind::Atk,
                modifier: 5,
            },
            3,
        ));
        unit.status_effects.apply(StatusEffect::new(
            StatusEffectKind::Debuff {
                stat: StatKind::Spd,
                modifier: -100,
            },
            3,
        ));
        unit.status_effects.apply(StatusEffect::new(
            StatusEffectKind::Debuff {
                stat: StatKind::Def,
                modifier: -100,
            },
            3,
        ));

        let stats = calculate_effective_stats(&unit, Team::none());
        assert_eq!(stats.atk, 32);
        assert_eq!(stats.spd, 1);
        assert_eq!(stats.def, 0);
        assert_eq!(effective_spd(&unit, Team::none()), 1);
    }
}
