//! Team mana pool bookkeeping.
//!
//! The pool is shared by the whole player team. Queueing an action spends its
//! cost immediately and clearing it refunds, so during planning the pool
//! always satisfies `remaining + queued == max`.

use crate::state::{Ability, BattleState, Team};

/// Pool size: the sum of every unit's mana contribution.
pub fn max_mana(team: &Team) -> u32 {
    team.units().iter().map(|u| u.mana_contribution).sum()
}

/// Mana cost of a queued action. Basic attacks are free.
pub fn action_cost(ability: Option<&Ability>) -> u32 {
    ability.map_or(0, |a| a.mana_cost)
}

pub fn can_afford(remaining: u32, cost: u32) -> bool {
    remaining >= cost
}

/// True if `remaining + queued == max` and nothing is overdrawn.
pub fn is_budget_valid(state: &BattleState) -> bool {
    state.remaining_mana <= state.max_mana
        && state.remaining_mana + state.queued_cost() == state.max_mana
}

/// Adds up to `amount` to `remaining` without exceeding `max`.
///
/// Returns the new total and how much was actually gained.
pub fn generate(remaining: u32, max: u32, amount: u32) -> (u32, u32) {
    let new_total = remaining.saturating_add(amount).min(max);
    (new_total, new_total.saturating_sub(remaining))
}
