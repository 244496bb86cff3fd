//! Djinn activation at the start of execution.

use crate::config::BattleConfig;
use crate::djinn::{BonusSnapshot, DjinnTransition, activate, diff_events, merge_team_abilities};
use crate::env::{AbilityOracle, Prng};
use crate::state::{BattleEvent, BattleState, UnitId};

/// Flips queued Djinn to `Standby`, reports per-unit bonus deltas, re-merges
/// granted abilities, then deals summon damage.
///
/// One or two Djinn strike a single living enemy chosen by PRNG draw; a full
/// set of three strikes every living enemy. Summon damage ignores defense.
pub fn resolve_djinn_phase(
    state: &BattleState,
    abilities: &dyn AbilityOracle,
    config: &BattleConfig,
    rng: &mut Prng,
) -> (BattleState, Vec<BattleEvent>) {
    let mut next = state.clone();
    let mut events = Vec::new();
    if state.queued_djinn.is_empty() {
        return (next, events);
    }

    let before = BonusSnapshot::capture(&state.player_team);
    let activation = activate(
        &state.player_team,
        &state.djinn_recovery_timers,
        &state.queued_djinn,
        state.round_number,
    );
    if activation.activated.is_empty() {
        return (next, events);
    }
    let team = merge_team_abilities(&activation.team, abilities);
    let after = BonusSnapshot::capture(&team);
    events.extend(diff_events(
        &before,
        &after,
        &activation.activated,
        DjinnTransition::Standby,
    ));
    next.player_team = team;
    next.djinn_recovery_timers = activation.timers;

    let count = activation.activated.len();
    let damage = config.summon_damage_for(count);
    let living: Vec<UnitId> = next.living_enemies().map(|u| u.id.clone()).collect();
    let target_ids: Vec<UnitId> = if living.is_empty() {
        Vec::new()
    } else if count >= BattleConfig::MAX_EQUIPPED_DJINN {
        living
    } else {
        vec![living[rng.next_index(living.len())].clone()]
    };
    tracing::debug!(djinn = ?activation.activated, damage, targets = ?target_ids, "summon");
    if target_ids.is_empty() {
        return (next, events);
    }

    events.push(BattleEvent::Summon {
        djinn_ids: activation.activated.clone(),
        damage,
        target_ids: target_ids.clone(),
    });
    for target_id in target_ids {
        let Some(enemy) = next.enemies.iter_mut().find(|u| u.id == target_id) else {
            continue;
        };
        enemy.adjust_hp(-damage);
        events.push(BattleEvent::Hit {
            source_id: None,
            target_id: target_id.clone(),
            amount: damage,
            critical: false,
            remaining_hp: enemy.current_hp,
        });
        if enemy.is_ko() {
            events.push(BattleEvent::UnitKnockedOut { unit_id: target_id });
        }
    }

    (next, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::AbilityCatalog;
    use crate::state::{Djinn, DjinnId, DjinnState, Element, Team};
    use crate::test_support::{empty_state, unit};

    fn state(queued: &[&str]) -> BattleState {
        let team = Team::new(
            [unit("isaac", Element::Venus, 80, 10, 10, 10)],
            [
                Djinn::new("flint", Element::Venus),
                Djinn::new("forge", Element::Mars),
                Djinn::new("fizz", Element::Mercury),
            ],
        )
        .unwrap();
        let mut state = BattleState {
            player_team: team,
            enemies: vec![
                unit("bat-a", Element::Neutral, 100, 5, 50, 5),
                unit("bat-b", Element::Neutral, 100, 5, 50, 5),
            ],
            ..empty_state()
        };
        for id in queued {
            state.queued_djinn.push(DjinnId::new(*id));
        }
        state
    }

    #[test]
    fn no_queued_djinn_is_a_no_op() {
        let state = state(&[]);
        let mut rng = Prng::new(1);
        let (next, events) =
            resolve_djinn_phase(&state, &AbilityCatalog::new(), &BattleConfig::default(), &mut rng);
        assert_eq!(next, state);
        assert!(events.is_empty());
        assert_eq!(rng.draw_count(), 0);
    }

    #[test]
    fn single_activation_strikes_one_enemy() {
        let state = state(&["flint"]);
        let (next, events) = resolve_djinn_phase(
            &state,
            &AbilityCatalog::new(),
            &BattleConfig::default(),
            &mut Prng::new(8),
        );

        assert_eq!(
            next.player_team.tracker(&"flint".into()).map(|t| t.state),
            Some(DjinnState::Standby)
        );
        assert_eq!(next.djinn_recovery_timers[&DjinnId::new("flint")], 2);
        assert!(matches!(events[0], BattleEvent::DjinnStandby { atk_delta: -4, def_delta: -3, .. }));

        let damaged: Vec<_> = next.enemies.iter().filter(|u| u.current_hp == 70).collect();
        assert_eq!(damaged.len(), 1);
        assert!(events.iter().any(|e| matches!(e, BattleEvent::Summon { damage: 30, .. })));
    }

    #[test]
    fn mega_summon_strikes_every_enemy_ignoring_defense() {
        let state = state(&["flint", "forge", "fizz"]);
        let (next, events) = resolve_djinn_phase(
            &state,
            &AbilityCatalog::new(),
            &BattleConfig::default(),
            &mut Prng::new(8),
        );
        assert!(next.enemies.iter().all(|u| u.current_hp == 0));
        let knocked_out = events
            .iter()
            .filter(|e| matches!(e, BattleEvent::UnitKnockedOut { .. }))
            .count();
        assert_eq!(knocked_out, 2);
        assert!(next.djinn_recovery_timers.values().all(|t| *t == 4));
    }
}
