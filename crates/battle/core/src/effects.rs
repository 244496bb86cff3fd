//! Status effect engine: apply, gate actions, tick, expire.
//!
//! Every probability roll here draws from the battle's single [`Prng`].

use crate::config::BattleConfig;
use crate::env::Prng;
use crate::state::{
    BattleEvent, PreventReason, StatusEffect, StatusEffectKind, StatusTag, Unit,
};

/// Returns `unit` with `effect` applied under the replace-not-stack rule.
pub fn apply_status(unit: &Unit, effect: StatusEffect) -> Unit {
    let mut next = unit.clone();
    next.status_effects.apply(effect);
    next
}

/// Decides whether a unit's status prevents it from acting this turn.
///
/// Freeze and stun always prevent. Paralysis rolls its failure chance once
/// per attempt; a paralyzed unit that is also frozen does not roll.
pub fn action_gate(unit: &Unit, rng: &mut Prng, config: &BattleConfig) -> Option<PreventReason> {
    let effects = &unit.status_effects;
    if effects.has(StatusTag::Freeze) {
        return Some(PreventReason::Frozen);
    }
    if effects.has(StatusTag::Stun) {
        return Some(PreventReason::Stunned);
    }
    if effects.has(StatusTag::Paralyze) && rng.chance(config.paralyze_fail_chance) {
        tracing::trace!(unit = %unit.id, "paralysis roll failed the action");
        return Some(PreventReason::Paralyzed);
    }
    None
}

/// Result of ticking one unit's effects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    pub unit: Unit,
    pub events: Vec<BattleEvent>,
}

/// Advances every effect on `unit` by one round.
///
/// Damage and healing resolve first, in application order. Freeze then rolls
/// its early-break chance. Finally every remaining duration drops by one and
/// effects reaching zero are removed. Knocked-out units do not tick.
pub fn tick_unit(unit: &Unit, rng: &mut Prng, config: &BattleConfig) -> TickOutcome {
    let mut next = unit.clone();
    let mut events = Vec::new();
    if unit.is_ko() {
        return TickOutcome { unit: next, events };
    }

    let max_hp = unit.max_hp();
    let effects: Vec<StatusEffect> = unit.status_effects.iter().copied().collect();
    for effect in &effects {
        let hp_delta = match effect.kind {
            StatusEffectKind::Poison => -percent_of(max_hp, config.poison_percent),
            StatusEffectKind::Burn => -percent_of(max_hp, config.burn_percent),
            StatusEffectKind::Regen { amount } => amount.max(0),
            _ => continue,
        };
        if next.is_ko() {
            break;
        }
        let applied = next.adjust_hp(hp_delta);
        events.push(BattleEvent::StatusTicked {
            unit_id: unit.id.clone(),
            status: effect.kind.tag(),
            hp_delta: applied,
        });
        if next.is_ko() {
            events.push(BattleEvent::UnitKnockedOut {
                unit_id: unit.id.clone(),
            });
        }
    }

    if next.status_effects.has(StatusTag::Freeze) && rng.chance(config.freeze_break_chance) {
        next.status_effects.remove(StatusTag::Freeze);
        events.push(BattleEvent::StatusExpired {
            unit_id: unit.id.clone(),
            status: StatusTag::Freeze,
        });
    }

    let mut expired = Vec::new();
    next.status_effects.retain(|effect| {
        effect.duration = effect.duration.saturating_sub(1);
        if effect.duration == 0 {
            expired.push(effect.kind.tag());
            false
        } else {
            true
        }
    });
    events.extend(expired.into_iter().map(|status| BattleEvent::StatusExpired {
        unit_id: unit.id.clone(),
        status,
    }));

    TickOutcome { unit: next, events }
}

/// `percent`% of `value`, at least 1.
fn percent_of(value: i32, percent: u32) -> i32 {
    ((i64::from(value) * i64::from(percent)) / 100).max(1) as i32
}
