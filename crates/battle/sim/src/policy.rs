//! Auto-queue policy standing in for a human player.
//!
//! Deterministic and PRNG-free: the same state always produces the same
//! queue, so a run is reproducible from its seed alone.

use anyhow::Result;
use battle_core::{
    Ability, AbilityId, AbilityKind, BattleState, DjinnState, TargetShape, Unit, UnitId,
    queue_action, queue_djinn,
};

/// Allies below this share of max HP get healed first.
const HEAL_BELOW_PERCENT: i32 = 50;

/// Fills every queue slot and, when the whole set is ready, queues every
/// Djinn for a full summon.
///
/// Each unit heals the most wounded ally if one is low, otherwise uses its
/// strongest affordable damaging ability on the weakest enemy, otherwise
/// basic-attacks. Knocked-out units still fill their slot.
pub fn plan_round(state: &BattleState) -> Result<BattleState> {
    let mut next = state.clone();

    let equipped = next.player_team.equipped_djinn().len();
    let ready = next.player_team.djinn_in_state(DjinnState::Set).count();
    if equipped > 0 && ready == equipped {
        let ids: Vec<_> = next.player_team.set_djinn().map(|d| d.id.clone()).collect();
        for id in ids {
            next = queue_djinn(&next, &id)?;
        }
    }

    let roster: Vec<UnitId> = next.player_team.units().iter().map(|u| u.id.clone()).collect();
    for unit_id in roster {
        next = plan_unit(&next, &unit_id)?;
    }
    Ok(next)
}

fn plan_unit(state: &BattleState, unit_id: &UnitId) -> Result<BattleState> {
    let unit = state
        .unit(unit_id)
        .ok_or_else(|| anyhow::anyhow!("Unknown unit '{}'", unit_id))?;
    let weakest = weakest(state.living_enemies())
        .ok_or_else(|| anyhow::anyhow!("No living enemy for '{}' to target", unit_id))?;

    if unit.is_alive() {
        if let Some((ability, target)) = heal_choice(state, unit) {
            if let Ok(next) = queue_action(state, unit_id, Some(ability), vec![target]) {
                return Ok(next);
            }
        }
        if let Some(ability) = strongest_attack(state, unit) {
            let targets = match ability.target {
                TargetShape::All => Vec::new(),
                TargetShape::Single => vec![weakest.clone()],
            };
            if let Ok(next) = queue_action(state, unit_id, Some(ability.id.clone()), targets) {
                return Ok(next);
            }
        }
    }

    tracing::trace!(unit = %unit_id, target = %weakest, "basic attack");
    Ok(queue_action(state, unit_id, None, vec![weakest])?)
}

fn affordable<'u>(state: &BattleState, unit: &'u Unit) -> impl Iterator<Item = &'u Ability> {
    let mana = state.remaining_mana;
    unit.usable_abilities()
        .filter(move |a| a.mana_cost <= mana && a.pp_cost as i32 <= unit.current_pp)
}

fn heal_choice(state: &BattleState, unit: &Unit) -> Option<(AbilityId, UnitId)> {
    let heal = affordable(state, unit).find(|a| a.kind == AbilityKind::Healing)?;
    let patient = state
        .living_players()
        .filter(|u| u.current_hp * 100 < u.max_hp() * HEAL_BELOW_PERCENT)
        .min_by_key(|u| u.current_hp * 100 / u.max_hp())?;
    Some((heal.id.clone(), patient.id.clone()))
}

fn strongest_attack<'u>(state: &BattleState, unit: &'u Unit) -> Option<&'u Ability> {
    affordable(state, unit)
        .filter(|a| a.kind.deals_damage())
        .fold(None, |best: Option<&Ability>, a| match best {
            Some(b) if b.base_power >= a.base_power => Some(b),
            _ => Some(a),
        })
}

/// Lowest current HP, first in roster order on ties.
fn weakest<'a>(units: impl Iterator<Item = &'a Unit>) -> Option<UnitId> {
    units
        .fold(None, |best: Option<&Unit>, u| match best {
            Some(b) if b.current_hp <= u.current_hp => Some(b),
            _ => Some(u),
        })
        .map(|u| u.id.clone())
}
