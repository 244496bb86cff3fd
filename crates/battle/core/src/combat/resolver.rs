//! Action resolution: the `perform_action` seam consumed by the orchestrator.

use super::damage::{
    apply_critical, element_modifier, elemental_damage, healing_amount, physical_damage,
    roll_variance,
};
use super::hit::{check_crit, check_hit, hit_chance};
use crate::config::BattleConfig;
use crate::env::Prng;
use crate::error::{BattleError, ErrorSeverity};
use crate::state::{
    Ability, AbilityId, AbilityKind, BattleEvent, BattleState, Element, StatusEffect,
    StatusEffectKind, Unit, UnitId,
};
use crate::stats::calculate_effective_stats;

/// Errors from resolving one action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("actor {0} is not in the battle")]
    UnknownActor(UnitId),

    #[error("target {0} is not in the battle")]
    UnknownTarget(UnitId),

    #[error("ability {0} is a buff or debuff without a stat modifier")]
    MissingStatModifier(AbilityId),
}

impl BattleError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownActor(_) => "COMBAT_UNKNOWN_ACTOR",
            Self::UnknownTarget(_) => "COMBAT_UNKNOWN_TARGET",
            Self::MissingStatModifier(_) => "COMBAT_MISSING_STAT_MODIFIER",
        }
    }
}

/// Result of one resolved action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub state: BattleState,
    pub events: Vec<BattleEvent>,
    /// At least one damaging hit landed.
    pub connected: bool,
}

/// Numeric resolution of a single action against already-validated targets.
///
/// `ability` is `None` for a basic attack. Implementations must not touch
/// mana; the pool is the orchestrator's concern.
pub trait CombatResolver {
    fn perform_action(
        &self,
        state: &BattleState,
        actor_id: &UnitId,
        ability: Option<&Ability>,
        target_ids: &[UnitId],
        rng: &mut Prng,
    ) -> Result<ActionOutcome, CombatError>;
}

/// Default combat math.
///
/// Per damaging target the draw order is hit, crit, variance, then the
/// infliction roll when the ability carries one.
#[derive(Clone, Debug, Default)]
pub struct StandardCombat {
    config: BattleConfig,
}

impl StandardCombat {
    pub fn new(config: BattleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }
}

impl CombatResolver for StandardCombat {
    fn perform_action(
        &self,
        state: &BattleState,
        actor_id: &UnitId,
        ability: Option<&Ability>,
        target_ids: &[UnitId],
        rng: &mut Prng,
    ) -> Result<ActionOutcome, CombatError> {
        let actor = state
            .unit(actor_id)
            .ok_or_else(|| CombatError::UnknownActor(actor_id.clone()))?;
        let actor_side = state
            .side_of(actor_id)
            .ok_or_else(|| CombatError::UnknownActor(actor_id.clone()))?;
        let attacker = calculate_effective_stats(actor, state.team_context(actor_side));
        let actor_element = actor.element;

        let mut next = state.clone();
        let mut events = vec![BattleEvent::AbilityUsed {
            caster_id: actor_id.clone(),
            ability_id: ability.map(|a| a.id.clone()),
            target_ids: target_ids.to_vec(),
        }];

        let pp_cost = ability.map_or(0, |a| a.pp_cost);
        if pp_cost > 0 {
            if let Some(caster) = next.unit_mut(actor_id) {
                caster.current_pp = (caster.current_pp - pp_cost as i32).max(0);
            }
        }

        let kind = ability.map(|a| a.kind);
        let mut connected = false;

        for target_id in target_ids {
            let target = next
                .unit(target_id)
                .ok_or_else(|| CombatError::UnknownTarget(target_id.clone()))?;
            if target.is_ko() {
                continue;
            }
            let target_side = next
                .side_of(target_id)
                .ok_or_else(|| CombatError::UnknownTarget(target_id.clone()))?;
            let defender = calculate_effective_stats(target, next.team_context(target_side));
            let target_element = target.element;
            let boots_evasion = target.equipment.evasion();

            match kind {
                None | Some(AbilityKind::Physical) | Some(AbilityKind::Elemental) => {
                    let chance = hit_chance(attacker.spd, defender.spd, boots_evasion);
                    if !check_hit(chance, rng) {
                        tracing::trace!(actor = %actor_id, target = %target_id, chance, "miss");
                        events.push(BattleEvent::Miss {
                            source_id: actor_id.clone(),
                            target_id: target_id.clone(),
                        });
                        continue;
                    }
                    let critical = check_crit(attacker.spd, rng);
                    let variance = roll_variance(rng);
                    let base = match ability {
                        Some(a) if a.kind == AbilityKind::Elemental => {
                            let element = if a.element == Element::Neutral {
                                actor_element
                            } else {
                                a.element
                            };
                            let modifier = element_modifier(element, target_element);
                            elemental_damage(a.base_power, &attacker, &defender, modifier, variance)
                        }
                        Some(a) => physical_damage(a.base_power, &attacker, &defender, variance),
                        None => physical_damage(0, &attacker, &defender, variance),
                    };
                    let amount = apply_critical(base, critical);

                    let unit = unit_mut(&mut next, target_id)?;
                    unit.adjust_hp(-amount);
                    let remaining_hp = unit.current_hp;
                    let knocked_out = unit.is_ko();
                    connected = true;

                    events.push(BattleEvent::Hit {
                        source_id: Some(actor_id.clone()),
                        target_id: target_id.clone(),
                        amount,
                        critical,
                        remaining_hp,
                    });
                    if knocked_out {
                        events.push(BattleEvent::UnitKnockedOut {
                            unit_id: target_id.clone(),
                        });
                        continue;
                    }

                    let Some(infliction) = ability.and_then(|a| a.inflicts) else {
                        continue;
                    };
                    if rng.chance(infliction.chance) {
                        let unit = unit_mut(&mut next, target_id)?;
                        unit.status_effects
                            .apply(StatusEffect::new(infliction.kind, infliction.duration));
                        events.push(BattleEvent::StatusApplied {
                            target_id: target_id.clone(),
                            status: infliction.kind,
                            duration: infliction.duration,
                        });
                    }
                }
                Some(AbilityKind::Healing) => {
                    let base_power = ability.map_or(0, |a| a.base_power);
                    let variance = roll_variance(rng);
                    let amount = healing_amount(base_power, &attacker, variance);
                    let unit = unit_mut(&mut next, target_id)?;
                    let healed = unit.adjust_hp(amount);
                    events.push(BattleEvent::Heal {
                        source_id: Some(actor_id.clone()),
                        target_id: target_id.clone(),
                        amount: healed,
                    });
                }
                Some(kind @ (AbilityKind::Buff | AbilityKind::Debuff)) => {
                    let Some(ability) = ability else { continue };
                    let modifier = ability
                        .stat_modifier
                        .ok_or_else(|| CombatError::MissingStatModifier(ability.id.clone()))?;
                    let status = if kind == AbilityKind::Buff {
                        StatusEffectKind::Buff {
                            stat: modifier.stat,
                            modifier: modifier.modifier,
                        }
                    } else {
                        StatusEffectKind::Debuff {
                            stat: modifier.stat,
                            modifier: modifier.modifier,
                        }
                    };
                    let duration = modifier
                        .duration
                        .unwrap_or(self.config.default_buff_duration);
                    let unit = unit_mut(&mut next, target_id)?;
                    unit.status_effects.apply(StatusEffect::new(status, duration));
                    events.push(BattleEvent::StatusApplied {
                        target_id: target_id.clone(),
                        status,
                        duration,
                    });
                }
            }
        }

        Ok(ActionOutcome {
            state: next,
            events,
            connected,
        })
    }
}

fn unit_mut<'s>(state: &'s mut BattleState, id: &UnitId) -> Result<&'s mut Unit, CombatError> {
    state
        .unit_mut(id)
        .ok_or_else(|| CombatError::UnknownTarget(id.clone()))
}
