//! Speed-based ordering.
//!
//! Two orderings exist and they are intentionally different:
//!
//! - [`calculate_turn_order`] is the round-level order. Units wearing
//!   "always first turn" boots lead in input order; the rest sort by
//!   descending effective SPD with equal-SPD ties broken by PRNG draws.
//! - [`sort_actions_by_speed`] orders queued actions inside one execution
//!   phase. Ties fall back to player-before-enemy, then unit id, so the
//!   order is stable and inspectable.

use crate::env::Prng;
use crate::state::{BattleState, QueuedAction, Side, Team, Unit, UnitId};
use crate::stats::effective_spd;

/// Round-level turn order over `units`, each paired with its Djinn context.
///
/// Knocked-out units are excluded. One tie-break value is drawn per
/// non-leading living unit, in input order.
pub fn calculate_turn_order(units: &[(&Unit, &Team)], rng: &mut Prng) -> Vec<UnitId> {
    let living: Vec<&(&Unit, &Team)> = units.iter().filter(|(u, _)| u.is_alive()).collect();

    let mut order: Vec<UnitId> = living
        .iter()
        .filter(|(u, _)| u.equipment.always_first_turn())
        .map(|(u, _)| u.id.clone())
        .collect();

    let mut rest: Vec<(i32, u32, UnitId)> = living
        .iter()
        .filter(|(u, _)| !u.equipment.always_first_turn())
        .map(|(u, team)| (effective_spd(u, team), rng.next_u32(), u.id.clone()))
        .collect();
    rest.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

    order.extend(rest.into_iter().map(|(_, _, id)| id));
    tracing::debug!(?order, "turn order");
    order
}

/// Round-level turn order for every unit in the battle, players listed first.
pub fn battle_turn_order(state: &BattleState, rng: &mut Prng) -> Vec<UnitId> {
    let units: Vec<(&Unit, &Team)> = [Side::Player, Side::Enemy]
        .into_iter()
        .flat_map(|side| {
            let team = state.team_context(side);
            state.units(side).iter().map(move |u| (u, team))
        })
        .collect();
    calculate_turn_order(&units, rng)
}

/// Orders one phase's queued actions: SPD descending, then player side
/// first, then unit id.
///
/// Actors missing from the state sort last.
pub fn sort_actions_by_speed(
    state: &BattleState,
    mut actions: Vec<(Side, QueuedAction)>,
) -> Vec<(Side, QueuedAction)> {
    let speed = |side: Side, id: &UnitId| {
        state
            .unit(id)
            .map_or(i32::MIN, |u| effective_spd(u, state.team_context(side)))
    };
    actions.sort_by(|(side_a, a), (side_b, b)| {
        speed(*side_b, &b.unit_id)
            .cmp(&speed(*side_a, &a.unit_id))
            .then(side_a.cmp(side_b))
            .then_with(|| a.unit_id.cmp(&b.unit_id))
    });
    actions
}
