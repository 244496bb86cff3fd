//! Executing → planning transition.

use super::planning::refresh_mana;
use crate::djinn::{BonusSnapshot, DjinnTransition, diff_events, merge_team_abilities, tick_recovery};
use crate::env::AbilityOracle;
use crate::state::{BattleEvent, BattlePhase, BattleState};

/// Prepares the next planning phase after a round that did not end the
/// battle.
///
/// Recovery timers count down and Djinn reaching zero return to `Set` with
/// delta events. Granted abilities are re-merged, the queue and queued Djinn
/// are reset, mana is refreshed and the round number advances.
pub fn begin_planning(
    state: &BattleState,
    abilities: &dyn AbilityOracle,
) -> (BattleState, Vec<BattleEvent>) {
    let before = BonusSnapshot::capture(&state.player_team);
    let tick = tick_recovery(&state.player_team, &state.djinn_recovery_timers);
    let team = merge_team_abilities(&tick.team, abilities);
    let after = BonusSnapshot::capture(&team);
    let events = diff_events(&before, &after, &tick.recovered, DjinnTransition::Recovered);
    if !tick.recovered.is_empty() {
        tracing::debug!(recovered = ?tick.recovered, "djinn recovered");
    }

    let mut next = state.clone();
    next.player_team = team;
    next.djinn_recovery_timers = tick.timers;
    next.queued_actions = Default::default();
    next.queued_djinn.clear();
    next.phase = BattlePhase::Planning;
    next.round_number += 1;
    (refresh_mana(&next), events)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::djinn::activate;
    use crate::env::AbilityCatalog;
    use crate::state::{Djinn, DjinnId, DjinnState, Element, QueuedAction, Team};
    use crate::test_support::{empty_state, unit};

    #[test]
    fn resets_the_queue_and_advances_the_round() {
        let mut state = crate::test_support::duel_state();
        state.phase = BattlePhase::Executing;
        state.queued_actions[0] = Some(QueuedAction::basic_attack("isaac".into(), "slime".into()));
        state.remaining_mana = 0;

        let (next, events) = begin_planning(&state, &AbilityCatalog::new());
        assert!(events.is_empty());
        assert_eq!(next.phase, BattlePhase::Planning);
        assert_eq!(next.round_number, state.round_number + 1);
        assert!(next.queued_actions.iter().all(Option::is_none));
        assert_eq!(next.remaining_mana, next.max_mana);
    }

    #[test]
    fn recovered_djinn_report_restored_bonuses() {
        let team = Team::new(
            [unit("isaac", Element::Venus, 50, 10, 10, 10)],
            [Djinn::new("flint", Element::Venus)],
        )
        .unwrap();
        let activation = activate(&team, &BTreeMap::new(), &[DjinnId::new("flint")], 1);
        let state = BattleState {
            player_team: activation.team,
            djinn_recovery_timers: activation.timers,
            phase: BattlePhase::Executing,
            ..empty_state()
        };

        let (round2, events) = begin_planning(&state, &AbilityCatalog::new());
        assert!(events.is_empty());
        assert_eq!(
            round2.player_team.tracker(&"flint".into()).map(|t| t.state),
            Some(DjinnState::Recovery)
        );

        let (round3, events) = begin_planning(&round2, &AbilityCatalog::new());
        assert_eq!(
            events,
            vec![BattleEvent::DjinnRecovered {
                unit_id: "isaac".into(),
                djinn_ids: vec!["flint".into()],
                atk_delta: 4,
                def_delta: 3,
            }]
        );
        assert!(round3.djinn_recovery_timers.is_empty());
    }
}
