//! Resolution-time target re-validation.

use crate::state::{Ability, BattleState, Side, TargetShape, UnitId};

/// Side an action lands on: healing and buffs hit the actor's own side,
/// everything else the opponents.
pub fn target_side(actor_side: Side, ability: Option<&Ability>) -> Side {
    if ability.is_some_and(|a| a.kind.targets_allies()) {
        actor_side
    } else {
        actor_side.opponent()
    }
}

/// Targets an action actually resolves against.
///
/// Living original targets are kept. When every original target is down,
/// the action is redirected while keeping its shape: single-target actions
/// take the first living unit on the target side in roster order, all-target
/// actions take every living unit there. An empty result means the action is
/// skipped.
pub fn resolve_targets(
    state: &BattleState,
    actor_side: Side,
    ability: Option<&Ability>,
    original: &[UnitId],
) -> Vec<UnitId> {
    let living_original: Vec<UnitId> = original
        .iter()
        .filter(|id| state.unit(id).is_some_and(|u| u.is_alive()))
        .cloned()
        .collect();
    if !living_original.is_empty() {
        return living_original;
    }

    let side = target_side(actor_side, ability);
    let mut living = state.living(side).map(|u| u.id.clone());
    let retargeted: Vec<UnitId> = match ability.map_or(TargetShape::Single, |a| a.target) {
        TargetShape::Single => living.next().into_iter().collect(),
        TargetShape::All => living.collect(),
    };
    tracing::debug!(?original, ?retargeted, "retargeted");
    retargeted
}
