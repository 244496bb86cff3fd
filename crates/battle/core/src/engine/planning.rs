//! Planning-phase operations.
//!
//! Each takes the current state by reference and returns a new one, so a
//! failed call cannot leave a partially updated state behind.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use super::errors::QueueError;
use super::targeting::target_side;
use crate::djinn::{can_activate, merge_team_abilities};
use crate::env::AbilityOracle;
use crate::mana;
use crate::state::{
    AbilityId, BattlePhase, BattleState, DjinnId, QueuedAction, Side, TargetShape, Team, Unit,
    UnitId,
};

/// Starts a battle at round 1 in planning with a full mana pool.
///
/// Djinn-granted abilities are merged into every player unit up front.
pub fn create_battle_state(
    player_team: &Team,
    enemies: Vec<Unit>,
    abilities: &dyn AbilityOracle,
) -> BattleState {
    let player_team = merge_team_abilities(player_team, abilities);
    let max_mana = mana::max_mana(&player_team);
    tracing::info!(
        players = player_team.units().len(),
        enemies = enemies.len(),
        max_mana,
        "battle created"
    );
    BattleState {
        player_team,
        enemies,
        phase: BattlePhase::Planning,
        round_number: 1,
        queued_actions: Default::default(),
        queued_djinn: ArrayVec::new(),
        remaining_mana: max_mana,
        max_mana,
        djinn_recovery_timers: BTreeMap::new(),
        execution_index: 0,
    }
}

fn require_planning(state: &BattleState) -> Result<(), QueueError> {
    if state.phase != BattlePhase::Planning {
        return Err(QueueError::WrongPhase {
            expected: BattlePhase::Planning,
            actual: state.phase,
        });
    }
    Ok(())
}

fn slot_index(state: &BattleState, unit_id: &UnitId) -> Result<usize, QueueError> {
    state
        .player_team
        .unit_index(unit_id)
        .ok_or_else(|| QueueError::UnknownUnit(unit_id.clone()))
}

/// Fills the unit's queue slot, spending the ability's mana immediately.
///
/// Re-queueing a filled slot refunds the previous action first. Targets must
/// sit on the action's side: allies for healing and buffs, enemies otherwise.
/// An all-target ability queued without targets is filled with every living
/// unit on that side; every other action takes exactly one target.
pub fn queue_action(
    state: &BattleState,
    unit_id: &UnitId,
    ability_id: Option<AbilityId>,
    target_ids: Vec<UnitId>,
) -> Result<BattleState, QueueError> {
    require_planning(state)?;
    let index = slot_index(state, unit_id)?;
    let unit = &state.player_team.units()[index];

    let ability = match &ability_id {
        Some(id) => {
            let ability = unit.ability(id).ok_or_else(|| QueueError::UnknownAbility {
                unit_id: unit_id.clone(),
                ability_id: id.clone(),
            })?;
            if !unit.can_use(id) {
                return Err(QueueError::AbilityLocked {
                    unit_id: unit_id.clone(),
                    ability_id: id.clone(),
                });
            }
            if !ability.is_resolvable() {
                return Err(QueueError::UnresolvableAbility {
                    unit_id: unit_id.clone(),
                    ability_id: id.clone(),
                });
            }
            if ability.pp_cost as i32 > unit.current_pp {
                return Err(QueueError::InsufficientPp {
                    unit_id: unit_id.clone(),
                    needed: ability.pp_cost,
                    available: unit.current_pp,
                });
            }
            Some(ability)
        }
        None => None,
    };

    let refund = state.queued_actions[index]
        .as_ref()
        .map_or(0, |queued| queued.mana_cost);
    let available = state.remaining_mana + refund;
    let cost = mana::action_cost(ability);
    if !mana::can_afford(available, cost) {
        return Err(QueueError::InsufficientMana {
            needed: cost,
            remaining: available,
        });
    }

    let side = target_side(Side::Player, ability);
    if let Some(stray) = target_ids.iter().find(|id| state.side_of(id) != Some(side)) {
        return Err(QueueError::InvalidTarget(stray.clone()));
    }
    let shape = ability.map_or(TargetShape::Single, |a| a.target);
    let target_ids = match shape {
        TargetShape::All if target_ids.is_empty() => {
            state.living(side).map(|u| u.id.clone()).collect()
        }
        TargetShape::All => target_ids,
        TargetShape::Single if target_ids.len() == 1 => target_ids,
        TargetShape::Single => {
            return Err(QueueError::TargetCount {
                expected: 1,
                actual: target_ids.len(),
            });
        }
    };

    tracing::debug!(
        unit = %unit_id,
        ability = ?ability_id,
        ?target_ids,
        cost,
        "action queued"
    );

    let mut next = state.clone();
    next.queued_actions[index] = Some(QueuedAction {
        unit_id: unit_id.clone(),
        ability_id,
        target_ids,
        mana_cost: cost,
    });
    next.remaining_mana = available - cost;
    Ok(next)
}

/// Empties the unit's slot and refunds its mana. Clearing an empty slot is a
/// no-op.
pub fn clear_queued_action(state: &BattleState, unit_id: &UnitId) -> Result<BattleState, QueueError> {
    require_planning(state)?;
    let index = slot_index(state, unit_id)?;

    let mut next = state.clone();
    if let Some(cleared) = next.queued_actions[index].take() {
        next.remaining_mana += cleared.mana_cost;
    }
    Ok(next)
}

/// Queues a `Set` Djinn for activation at the start of execution.
/// Queueing one that is already queued is a no-op.
pub fn queue_djinn(state: &BattleState, djinn_id: &DjinnId) -> Result<BattleState, QueueError> {
    require_planning(state)?;
    if !can_activate(&state.player_team, djinn_id) {
        return Err(QueueError::DjinnNotActivatable(djinn_id.clone()));
    }

    let mut next = state.clone();
    if !next.queued_djinn.contains(djinn_id) {
        next.queued_djinn
            .try_push(djinn_id.clone())
            .map_err(|_| QueueError::DjinnNotActivatable(djinn_id.clone()))?;
    }
    Ok(next)
}

pub fn unqueue_djinn(state: &BattleState, djinn_id: &DjinnId) -> Result<BattleState, QueueError> {
    require_planning(state)?;
    let mut next = state.clone();
    next.queued_djinn.retain(|id| id != djinn_id);
    Ok(next)
}

/// Resets the pool to its maximum. Only meaningful with an empty queue.
pub fn refresh_mana(state: &BattleState) -> BattleState {
    let mut next = state.clone();
    next.remaining_mana = next.max_mana;
    next
}

/// Checks every precondition of round execution.
pub fn validate_round(state: &BattleState) -> Result<(), QueueError> {
    require_planning(state)?;
    if !state.is_queue_complete() {
        let required = state.player_team.units().len();
        let filled = state
            .queued_actions
            .iter()
            .take(required)
            .filter(|slot| slot.is_some())
            .count();
        return Err(QueueError::QueueIncomplete { filled, required });
    }
    if !mana::is_budget_valid(state) {
        return Err(QueueError::ManaBudgetInvalid {
            remaining: state.remaining_mana,
            queued: state.queued_cost(),
            max: state.max_mana,
        });
    }
    Ok(())
}
