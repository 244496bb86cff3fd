//! Weighted-score decision maker.
//!
//! Two layers, each a weighted PRNG draw over [`Score`] values:
//!
//! 1. **Option**: basic attack or one of the unit's affordable abilities.
//! 2. **Target**: for single-target offense, every living opponent weighted
//!    by the ability's hints. Healing picks the most wounded ally, buffs land
//!    on the caster, and all-target abilities take the whole side.

use super::score::{Score, weighted_choice};
use super::{Decision, DecisionError, DecisionMaker};
use crate::combat::{elemental_damage, physical_damage};
use crate::env::Prng;
use crate::state::{
    Ability, AbilityKind, BattleState, Side, Stats, TargetShape, TargetingHint, Unit, UnitId,
};
use crate::stats::calculate_effective_stats;

/// Default opponent AI.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicAi;

impl HeuristicAi {
    /// Situation score of a basic attack.
    pub const BASIC_ATTACK_SITUATION: u32 = 50;
    /// Situation of a non-preferred target.
    pub const OTHER_TARGET_SITUATION: u32 = 25;
    pub const PREFERRED_TARGET_MODIFIER: u32 = 200;
    pub const OVERKILL_MODIFIER: u32 = 20;
    /// Healing is only considered when some ally is below this HP percentage.
    pub const HEAL_THRESHOLD_PERCENT: i32 = 60;

    pub fn new() -> Self {
        Self
    }

    /// Scores one ability for `unit`.
    fn score_ability(state: &BattleState, side: Side, unit: &Unit, ability: &Ability) -> Score {
        if !is_affordable(state, side, unit, ability) {
            return Score::impossible();
        }
        match ability.kind {
            AbilityKind::Physical | AbilityKind::Elemental => {
                let situation = (50 + ability.base_power.max(0) as u32).min(100);
                Score::new(true, situation, 100, Score::NEUTRAL_MODIFIER)
            }
            AbilityKind::Healing => match most_wounded(state, side) {
                Some((_, percent)) if percent < Self::HEAL_THRESHOLD_PERCENT => {
                    Score::new(true, (100 - percent) as u32, 100, 150)
                }
                _ => Score::impossible(),
            },
            AbilityKind::Buff | AbilityKind::Debuff => {
                Score::new(ability.stat_modifier.is_some(), 40, 100, Score::NEUTRAL_MODIFIER)
            }
        }
    }

    fn choose_targets(
        state: &BattleState,
        side: Side,
        unit: &Unit,
        ability: Option<&Ability>,
        rng: &mut Prng,
    ) -> Option<Vec<UnitId>> {
        let allies = ability.is_some_and(|a| a.kind.targets_allies());
        let target_side = if allies { side } else { side.opponent() };
        let living: Vec<&Unit> = state.living(target_side).collect();
        if living.is_empty() {
            return None;
        }

        let shape = ability.map_or(TargetShape::Single, |a| a.target);
        if shape == TargetShape::All {
            return Some(living.iter().map(|u| u.id.clone()).collect());
        }

        match ability.map(|a| a.kind) {
            Some(AbilityKind::Healing) => {
                most_wounded(state, side).map(|(target, _)| vec![target.id.clone()])
            }
            Some(AbilityKind::Buff) => Some(vec![unit.id.clone()]),
            _ => {
                let attacker = calculate_effective_stats(unit, state.team_context(side));
                let weights = Self::target_weights(state, target_side, &attacker, ability, &living);
                let index = weighted_choice(&weights, rng)?;
                Some(vec![living[index].id.clone()])
            }
        }
    }

    /// Per-target weights for a single-target offensive action.
    fn target_weights(
        state: &BattleState,
        target_side: Side,
        attacker: &Stats,
        ability: Option<&Ability>,
        living: &[&Unit],
    ) -> Vec<u32> {
        let has_hint = |hint| ability.is_some_and(|a| a.has_hint(hint));
        let defenders: Vec<Stats> = living
            .iter()
            .map(|u| calculate_effective_stats(u, state.team_context(target_side)))
            .collect();

        let preferred = if has_hint(TargetingHint::PreferHighestDef) {
            (0..living.len()).max_by_key(|&i| (defenders[i].def, std::cmp::Reverse(i)))
        } else {
            (0..living.len()).min_by_key(|&i| (living[i].current_hp, i))
        };

        let weights: Vec<u32> = living
            .iter()
            .enumerate()
            .map(|(i, target)| {
                let mut score = if Some(i) == preferred {
                    Score::new(true, 100, 100, Self::PREFERRED_TARGET_MODIFIER)
                } else {
                    Score::new(true, Self::OTHER_TARGET_SITUATION, 100, Score::NEUTRAL_MODIFIER)
                };
                if has_hint(TargetingHint::AvoidOverkill)
                    && target.current_hp * 2 <= estimate_damage(ability, attacker, &defenders[i])
                {
                    score.modifier = Self::OVERKILL_MODIFIER;
                }
                score.value()
            })
            .collect();

        tracing::debug!(
            candidates = ?living.iter().map(|u| u.id.as_str()).collect::<Vec<_>>(),
            ?weights,
            "target weights"
        );
        weights
    }
}

impl DecisionMaker for HeuristicAi {
    fn decide(
        &self,
        state: &BattleState,
        unit_id: &UnitId,
        rng: &mut Prng,
    ) -> Result<Decision, DecisionError> {
        let unit = state
            .unit(unit_id)
            .ok_or_else(|| DecisionError::UnknownUnit(unit_id.clone()))?;
        let side = state
            .side_of(unit_id)
            .ok_or_else(|| DecisionError::UnknownUnit(unit_id.clone()))?;
        if unit.is_ko() {
            return Err(DecisionError::ActorKnockedOut(unit_id.clone()));
        }
        if state.living(side.opponent()).next().is_none() {
            return Err(DecisionError::NoLivingTarget(unit_id.clone()));
        }

        let mut options: Vec<Option<&Ability>> = vec![None];
        let mut weights = vec![
            Score::new(true, Self::BASIC_ATTACK_SITUATION, 100, Score::NEUTRAL_MODIFIER).value(),
        ];
        for ability in unit.usable_abilities() {
            options.push(Some(ability));
            weights.push(Self::score_ability(state, side, unit, ability).value());
        }
        tracing::debug!(unit = %unit_id, ?weights, "option weights");

        let chosen = weighted_choice(&weights, rng)
            .and_then(|i| options.get(i).copied())
            .flatten();

        match Self::choose_targets(state, side, unit, chosen, rng) {
            Some(target_ids) => Ok(Decision {
                ability_id: chosen.map(|a| a.id.clone()),
                target_ids,
            }),
            None => {
                let target_ids = Self::choose_targets(state, side, unit, None, rng)
                    .ok_or_else(|| DecisionError::NoLivingTarget(unit_id.clone()))?;
                Ok(Decision {
                    ability_id: None,
                    target_ids,
                })
            }
        }
    }
}

/// PP always applies; the shared mana pool only constrains the player side.
fn is_affordable(state: &BattleState, side: Side, unit: &Unit, ability: &Ability) -> bool {
    let pp_ok = ability.pp_cost as i32 <= unit.current_pp;
    let mana_ok = side == Side::Enemy || ability.mana_cost <= state.remaining_mana;
    pp_ok && mana_ok
}

/// Living ally with the lowest HP percentage, ties to roster order.
fn most_wounded(state: &BattleState, side: Side) -> Option<(&Unit, i32)> {
    state
        .living(side)
        .map(|u| (u, u.current_hp * 100 / u.max_hp()))
        .min_by_key(|(_, percent)| *percent)
}

/// Damage estimate with no variance and no critical.
fn estimate_damage(ability: Option<&Ability>, attacker: &Stats, defender: &Stats) -> i32 {
    match ability {
        Some(a) if a.kind == AbilityKind::Elemental => {
            elemental_damage(a.base_power, attacker, defender, 1.0, 1.0)
        }
        Some(a) => physical_damage(a.base_power, attacker, defender, 1.0),
        None => physical_damage(0, attacker, defender, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Element, StatKind, Team};
    use crate::test_support::{empty_state, unit};

    fn ai_state(players: Vec<Unit>, enemy: Unit) -> BattleState {
        BattleState {
            player_team: Team::new(players, []).unwrap(),
            enemies: vec![enemy],
            ..empty_state()
        }
    }

    fn pick_rate(state: &BattleState, enemy: &str, expected: &str, trials: u32) -> f64 {
        let ai = HeuristicAi::new();
        let mut rng = Prng::new(2024);
        let hits = (0..trials)
            .filter(|_| {
                let decision = ai.decide(state, &enemy.into(), &mut rng).unwrap();
                decision.target_ids == vec![UnitId::new(expected)]
            })
            .count();
        hits as f64 / f64::from(trials)
    }

    #[test]
    fn basic_attacks_prefer_the_weakest() {
        let mut hurt = unit("garet", Element::Mars, 100, 10, 5, 10);
        hurt.current_hp = 20;
        let state = ai_state(
            vec![
                unit("isaac", Element::Venus, 100, 10, 5, 10),
                hurt,
                unit("ivan", Element::Jupiter, 100, 10, 5, 10),
            ],
            unit("orc", Element::Neutral, 50, 12, 5, 8),
        );

        let rate = pick_rate(&state, "orc", "garet", 600);
        assert!((0.7..0.9).contains(&rate), "rate = {rate}");
    }

    #[test]
    fn armor_piercing_prefers_highest_def() {
        let pierce = Ability::new("pierce", AbilityKind::Physical)
            .with_power(100)
            .with_hint(TargetingHint::PreferHighestDef);
        let enemy = unit("knight", Element::Neutral, 50, 12, 5, 8).with_ability(pierce);
        let state = ai_state(
            vec![
                unit("isaac", Element::Venus, 100, 10, 5, 10),
                unit("garet", Element::Mars, 100, 10, 30, 10),
                unit("ivan", Element::Jupiter, 100, 10, 5, 10),
            ],
            enemy,
        );

        // The basic attack option splits picks; count only pierce decisions.
        let ai = HeuristicAi::new();
        let mut rng = Prng::new(7);
        let (mut pierces, mut on_garet) = (0u32, 0u32);
        for _ in 0..800 {
            let decision = ai.decide(&state, &"knight".into(), &mut rng).unwrap();
            if decision.ability_id.is_some() {
                pierces += 1;
                if decision.target_ids == vec![UnitId::new("garet")] {
                    on_garet += 1;
                }
            }
        }
        let rate = f64::from(on_garet) / f64::from(pierces);
        assert!(pierces > 100);
        assert!((0.7..0.9).contains(&rate), "rate = {rate}");
    }

    #[test]
    fn avoid_overkill_spreads_big_hits() {
        let nuke = Ability::new("nuke", AbilityKind::Physical)
            .with_power(100)
            .with_hint(TargetingHint::AvoidOverkill);
        let mut nearly_down = unit("garet", Element::Mars, 100, 10, 5, 10);
        nearly_down.current_hp = 5;
        let mut enemy = unit("ogre", Element::Neutral, 50, 12, 5, 8).with_ability(nuke);
        enemy.current_pp = 20;
        let state = ai_state(
            vec![unit("isaac", Element::Venus, 100, 10, 5, 10), nearly_down],
            enemy,
        );

        let ai = HeuristicAi::new();
        let mut rng = Prng::new(99);
        let (mut nukes, mut on_garet) = (0u32, 0u32);
        for _ in 0..600 {
            let decision = ai.decide(&state, &"ogre".into(), &mut rng).unwrap();
            if decision.ability_id.is_some() {
                nukes += 1;
                if decision.target_ids == vec![UnitId::new("garet")] {
                    on_garet += 1;
                }
            }
        }
        assert!(f64::from(on_garet) / f64::from(nukes) < 0.6);
    }

    #[test]
    fn all_target_abilities_take_every_living_opponent() {
        let quake = Ability::new("quake", AbilityKind::Elemental)
            .with_power(200)
            .with_target(TargetShape::All)
            .with_hint(TargetingHint::PreferWeakest);
        let mut ko = unit("ivan", Element::Jupiter, 100, 10, 5, 10);
        ko.current_hp = 0;
        let state = ai_state(
            vec![
                unit("isaac", Element::Venus, 100, 10, 5, 10),
                ko,
                unit("mia", Element::Mercury, 100, 10, 5, 10),
            ],
            unit("golem", Element::Venus, 50, 12, 5, 8).with_ability(quake),
        );

        let ai = HeuristicAi::new();
        let mut rng = Prng::new(5);
        for _ in 0..50 {
            let decision = ai.decide(&state, &"golem".into(), &mut rng).unwrap();
            if decision.ability_id.is_some() {
                assert_eq!(
                    decision.target_ids,
                    vec![UnitId::new("isaac"), UnitId::new("mia")]
                );
            } else {
                assert_eq!(decision.target_ids.len(), 1);
                assert_ne!(decision.target_ids[0], UnitId::new("ivan"));
            }
        }
    }

    #[test]
    fn unaffordable_abilities_are_never_chosen() {
        let costly = Ability::new("meteor", AbilityKind::Elemental)
            .with_power(100)
            .with_pp_cost(50);
        let state = ai_state(
            vec![unit("isaac", Element::Venus, 100, 10, 5, 10)],
            unit("imp", Element::Mars, 30, 8, 4, 9).with_ability(costly),
        );

        let ai = HeuristicAi::new();
        let mut rng = Prng::new(3);
        for _ in 0..100 {
            let decision = ai.decide(&state, &"imp".into(), &mut rng).unwrap();
            assert_eq!(decision.ability_id, None);
        }
    }

    #[test]
    fn player_side_abilities_respect_the_mana_pool() {
        let bolt = Ability::new("bolt", AbilityKind::Elemental)
            .with_power(100)
            .with_mana_cost(3);
        let ivan = unit("ivan", Element::Jupiter, 100, 10, 5, 10).with_ability(bolt);
        let mut state = ai_state(vec![ivan], unit("imp", Element::Mars, 30, 8, 4, 9));
        state.remaining_mana = 2;

        let ai = HeuristicAi::new();
        let mut rng = Prng::new(8);
        for _ in 0..100 {
            assert_eq!(
                ai.decide(&state, &"ivan".into(), &mut rng).unwrap().ability_id,
                None
            );
        }
    }

    #[test]
    fn heals_the_most_wounded_ally() {
        let cure = Ability::new("cure", AbilityKind::Healing).with_power(30);
        let mut hurt = unit("imp-b", Element::Mars, 40, 8, 4, 9);
        hurt.current_hp = 4;
        let mut state = ai_state(
            vec![unit("isaac", Element::Venus, 100, 10, 5, 10)],
            unit("imp-a", Element::Mars, 40, 8, 4, 9).with_ability(cure),
        );
        state.enemies.push(hurt);

        let ai = HeuristicAi::new();
        let mut rng = Prng::new(21);
        let heals: Vec<Decision> = (0..100)
            .map(|_| ai.decide(&state, &"imp-a".into(), &mut rng).unwrap())
            .filter(|d| d.ability_id.is_some())
            .collect();
        assert!(!heals.is_empty());
        assert!(heals.iter().all(|d| d.target_ids == vec![UnitId::new("imp-b")]));
    }

    #[test]
    fn buffs_without_a_modifier_are_ignored() {
        let empty = Ability::new("focus", AbilityKind::Buff);
        let guard = Ability::new("guard", AbilityKind::Buff).with_stat_modifier(StatKind::Def, 4);
        let state = ai_state(
            vec![unit("isaac", Element::Venus, 100, 10, 5, 10)],
            unit("imp", Element::Mars, 30, 8, 4, 9)
                .with_ability(empty)
                .with_ability(guard),
        );

        let ai = HeuristicAi::new();
        let mut rng = Prng::new(4);
        for _ in 0..100 {
            let decision = ai.decide(&state, &"imp".into(), &mut rng).unwrap();
            assert_ne!(decision.ability_id.as_ref().map(|id| id.as_str()), Some("focus"));
            if decision.ability_id.is_some() {
                assert_eq!(decision.target_ids, vec![UnitId::new("imp")]);
            }
        }
    }

    #[test]
    fn no_living_target_is_a_hard_failure() {
        let mut ko = unit("isaac", Element::Venus, 100, 10, 5, 10);
        ko.current_hp = 0;
        let state = ai_state(vec![ko], unit("imp", Element::Mars, 30, 8, 4, 9));
        assert_eq!(
            HeuristicAi::new().decide(&state, &"imp".into(), &mut Prng::new(1)),
            Err(DecisionError::NoLivingTarget("imp".into()))
        );
    }
}
