//! Set → Standby → Recovery → Set state machine.
//!
//! Activation and recovery operate on a team plus the battle's recovery
//! timer table and return new values. Stat and ability consequences are
//! handled by the caller through [`super::delta`] and [`super::grants`].

use std::collections::BTreeMap;

use crate::state::{DjinnId, DjinnState, Team};

/// Rounds a Djinn spends out of `Set` when activated as part of a group of
/// `count`.
pub const fn recovery_rounds(count: usize) -> u32 {
    count as u32 + 1
}

/// True if the Djinn is equipped and currently `Set`.
pub fn can_activate(team: &Team, id: &DjinnId) -> bool {
    team.tracker(id).is_some_and(|t| t.is_set())
}

/// Result of activating a group of Djinn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activation {
    pub team: Team,
    pub timers: BTreeMap<DjinnId, u32>,
    /// Djinn that actually flipped, in activation order.
    pub activated: Vec<DjinnId>,
}

/// Flips every activatable Djinn in `ids` to `Standby` and starts its timer.
///
/// Ids that are not `Set` are ignored. The timer length counts all Djinn
/// that flipped together.
pub fn activate(
    team: &Team,
    timers: &BTreeMap<DjinnId, u32>,
    ids: &[DjinnId],
    round: u32,
) -> Activation {
    let activated: Vec<DjinnId> = ids
        .iter()
        .filter(|id| can_activate(team, id))
        .cloned()
        .collect();
    let rounds = recovery_rounds(activated.len());

    let mut next_team = team.clone();
    let mut next_timers = timers.clone();
    for id in &activated {
        if let Some(tracker) = next_team.tracker_mut(id) {
            tracker.state = DjinnState::Standby;
            tracker.last_activated_round = Some(round);
        }
        next_timers.insert(id.clone(), rounds);
    }

    Activation {
        team: next_team,
        timers: next_timers,
        activated,
    }
}

/// Result of one recovery countdown step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoveryTick {
    pub team: Team,
    pub timers: BTreeMap<DjinnId, u32>,
    /// Djinn that returned to `Set` on this tick.
    pub recovered: Vec<DjinnId>,
}

/// Decrements every recovery timer by one.
///
/// Djinn reaching zero return to `Set` and leave the timer table; the rest
/// move to `Recovery`.
pub fn tick_recovery(team: &Team, timers: &BTreeMap<DjinnId, u32>) -> RecoveryTick {
    let mut next_team = team.clone();
    let mut next_timers = BTreeMap::new();
    let mut recovered = Vec::new();

    for (id, remaining) in timers {
        let remaining = remaining.saturating_sub(1);
        let Some(tracker) = next_team.tracker_mut(id) else {
            continue;
        };
        if remaining == 0 {
            tracker.state = DjinnState::Set;
            recovered.push(id.clone());
        } else {
            tracker.state = DjinnState::Recovery;
            next_timers.insert(id.clone(), remaining);
        }
    }

    RecoveryTick {
        team: next_team,
        timers: next_timers,
        recovered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Djinn, Element, Stats, Unit};

    fn team() -> Team {
        Team::new(
            [Unit::new("isaac", Element::Venus, 1, Stats::new(10, 0, 1, 1, 1, 1), Stats::ZERO)],
            [
                Djinn::new("flint", Element::Venus),
                Djinn::new("forge", Element::Mars),
                Djinn::new("fizz", Element::Mercury),
            ],
        )
        .unwrap()
    }

    fn ids(list: &[&str]) -> Vec<DjinnId> {
        list.iter().map(|s| DjinnId::new(*s)).collect()
    }

    #[test]
    fn activation_sets_standby_and_timer() {
        let team = team();
        let result = activate(&team, &BTreeMap::new(), &ids(&["flint", "forge"]), 4);

        assert_eq!(result.activated.len(), 2);
        for id in &result.activated {
            let tracker = result.team.tracker(id).unwrap();
            assert_eq!(tracker.state, DjinnState::Standby);
            assert_eq!(tracker.last_activated_round, Some(4));
            assert_eq!(result.timers[id], 3);
        }
        assert!(can_activate(&result.team, &"fizz".into()));
        assert!(!can_activate(&result.team, &"flint".into()));
    }

    #[test]
    fn spent_djinn_cannot_reactivate() {
        let team = team();
        let first = activate(&team, &BTreeMap::new(), &ids(&["flint"]), 1);
        let second = activate(&first.team, &first.timers, &ids(&["flint"]), 1);
        assert!(second.activated.is_empty());
        assert_eq!(second.timers, first.timers);
    }

    #[test]
    fn single_activation_recovers_after_two_ticks() {
        let team = team();
        let activated = activate(&team, &BTreeMap::new(), &ids(&["flint"]), 1);

        let tick1 = tick_recovery(&activated.team, &activated.timers);
        assert_eq!(tick1.timers.get(&DjinnId::new("flint")), Some(&1));
        assert_eq!(
            tick1.team.tracker(&"flint".into()).map(|t| t.state),
            Some(DjinnState::Recovery)
        );
        assert!(tick1.recovered.is_empty());

        let tick2 = tick_recovery(&tick1.team, &tick1.timers);
        assert!(tick2.timers.is_empty());
        assert_eq!(tick2.recovered, ids(&["flint"]));
        assert!(can_activate(&tick2.team, &"flint".into()));
    }

    #[test]
    fn mega_activation_takes_four_ticks() {
        let team = team();
        let mut state = {
            let a = activate(&team, &BTreeMap::new(), &ids(&["flint", "forge", "fizz"]), 1);
            (a.team, a.timers)
        };
        for _ in 0..3 {
            let tick = tick_recovery(&state.0, &state.1);
            assert!(tick.recovered.is_empty());
            state = (tick.team, tick.timers);
        }
        let last = tick_recovery(&state.0, &state.1);
        assert_eq!(last.recovered.len(), 3);
        assert_eq!(last.team.set_djinn().count(), 3);
    }
}
