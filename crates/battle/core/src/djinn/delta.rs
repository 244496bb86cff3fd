//! Relationship-bonus snapshots and the delta events derived from them.
//!
//! Djinn transitions are reported as "snapshot → transition → snapshot →
//! diff": take a [`BonusSnapshot`] before flipping trackers, another after,
//! and turn the per-unit differences into events.

use std::collections::BTreeMap;

use super::compatibility::{RelationshipBonus, relationship_bonus};
use crate::state::{BattleEvent, DjinnId, Team, UnitId};

/// Per-unit relationship bonuses at one point in time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BonusSnapshot {
    bonuses: BTreeMap<UnitId, RelationshipBonus>,
    /// Roster order, so events come out in unit order.
    order: Vec<UnitId>,
}

impl BonusSnapshot {
    pub fn capture(team: &Team) -> Self {
        let mut snapshot = Self::default();
        for unit in team.units() {
            snapshot
                .bonuses
                .insert(unit.id.clone(), relationship_bonus(unit, team));
            snapshot.order.push(unit.id.clone());
        }
        snapshot
    }

    pub fn get(&self, unit: &UnitId) -> RelationshipBonus {
        self.bonuses.get(unit).copied().unwrap_or_default()
    }
}

/// Direction of a Djinn transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DjinnTransition {
    /// Djinn left `Set`.
    Standby,
    /// Djinn returned to `Set`.
    Recovered,
}

/// Emits one event per unit whose relationship bonus changed.
pub fn diff_events(
    before: &BonusSnapshot,
    after: &BonusSnapshot,
    djinn_ids: &[DjinnId],
    transition: DjinnTransition,
) -> Vec<BattleEvent> {
    if djinn_ids.is_empty() {
        return Vec::new();
    }

    after
        .order
        .iter()
        .filter_map(|unit_id| {
            let old = before.get(unit_id);
            let new = after.get(unit_id);
            let atk_delta = new.atk - old.atk;
            let def_delta = new.def - old.def;
            if atk_delta == 0 && def_delta == 0 {
                return None;
            }
            let unit_id = unit_id.clone();
            let djinn_ids = djinn_ids.to_vec();
            Some(match transition {
                DjinnTransition::Standby => BattleEvent::DjinnStandby {
                    unit_id,
                    djinn_ids,
                    atk_delta,
                    def_delta,
                },
                DjinnTransition::Recovered => BattleEvent::DjinnRecovered {
                    unit_id,
                    djinn_ids,
                    atk_delta,
                    def_delta,
                },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::djinn::lifecycle::{activate, tick_recovery};
    use crate::state::{Djinn, Element, Stats, Unit};

    fn team() -> Team {
        let stats = Stats::new(40, 10, 10, 10, 10, 10);
        Team::new(
            [
                Unit::new("isaac", Element::Venus, 1, stats, Stats::ZERO),
                Unit::new("garet", Element::Mars, 1, stats, Stats::ZERO),
            ],
            [Djinn::new("flint", Element::Venus)],
        )
        .unwrap()
    }

    #[test]
    fn standby_reports_lost_bonus_per_unit() {
        let team = team();
        let ids = vec![DjinnId::new("flint")];
        let before = BonusSnapshot::capture(&team);
        let activation = activate(&team, &BTreeMap::new(), &ids, 1);
        let after = BonusSnapshot::capture(&activation.team);

        let events = diff_events(&before, &after, &ids, DjinnTransition::Standby);
        assert_eq!(
            events,
            vec![
                // Isaac loses a same-element bonus.
                BattleEvent::DjinnStandby {
                    unit_id: "isaac".into(),
                    djinn_ids: ids.clone(),
                    atk_delta: -4,
                    def_delta: -3,
                },
                // Garet loses a counter penalty.
                BattleEvent::DjinnStandby {
                    unit_id: "garet".into(),
                    djinn_ids: ids.clone(),
                    atk_delta: 3,
                    def_delta: 2,
                },
            ]
        );
    }

    #[test]
    fn recovery_reports_restored_bonus() {
        let team = team();
        let ids = vec![DjinnId::new("flint")];
        let activation = activate(&team, &BTreeMap::new(), &ids, 1);
        let first = tick_recovery(&activation.team, &activation.timers);

        let before = BonusSnapshot::capture(&first.team);
        let second = tick_recovery(&first.team, &first.timers);
        let after = BonusSnapshot::capture(&second.team);

        let events = diff_events(&before, &after, &second.recovered, DjinnTransition::Recovered);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            BattleEvent::DjinnRecovered { atk_delta: 4, def_delta: 3, .. }
        ));
    }

    #[test]
    fn no_transition_no_events() {
        let team = team();
        let snapshot = BonusSnapshot::capture(&team);
        assert!(diff_events(&snapshot, &snapshot, &[], DjinnTransition::Standby).is_empty());
    }
}
