//! Round execution: the executing phase of the battle state machine.

use super::errors::{RoundError, RoundStage};
use super::planning::validate_round;
use super::summon::resolve_djinn_phase;
use super::targeting::resolve_targets;
use super::transition::begin_planning;
use super::{BattleEngine, RoundOutcome};
use crate::effects::{action_gate, tick_unit};
use crate::env::Prng;
use crate::mana;
use crate::state::{Ability, BattleEvent, BattlePhase, BattleState, QueuedAction, Side};
use crate::turn_order::sort_actions_by_speed;

impl BattleEngine<'_> {
    /// Executes one round, returning an error instead of panicking on a
    /// broken precondition.
    ///
    /// Sub-order: Djinn activations and summons, player actions, enemy
    /// decisions and actions, status ticks, then either battle end or the
    /// transition back to planning.
    ///
    /// # Errors
    ///
    /// - [`RoundError::Precondition`] if the state is not in planning, the
    ///   queue is incomplete or the mana budget is broken.
    /// - [`RoundError::Combat`] if the combat resolver rejects an action.
    pub fn try_execute_round(
        &self,
        state: &BattleState,
        rng: &mut Prng,
    ) -> Result<RoundOutcome, RoundError> {
        validate_round(state)?;

        let round = state.round_number;
        tracing::info!(round, "round started");

        let mut next = state.clone();
        next.phase = BattlePhase::Executing;
        let mut events = vec![BattleEvent::RoundStarted { round }];

        let (next, djinn_events) =
            resolve_djinn_phase(&next, self.env.abilities(), self.env.config(), rng);
        events.extend(djinn_events);

        let next = self.run_player_phase(next, &mut events, rng)?;
        let next = self.run_enemy_phase(next, &mut events, rng)?;
        let mut next = self.tick_statuses(next, &mut events, rng);

        if let Some(outcome) = next.check_battle_end() {
            next.phase = outcome.into();
            events.push(BattleEvent::BattleEnd { outcome });
            tracing::info!(round, %outcome, "battle ended");
            return Ok(RoundOutcome {
                state: next,
                events,
            });
        }

        let (next, recovery_events) = begin_planning(&next, self.env.abilities());
        events.extend(recovery_events);
        tracing::info!(round, events = events.len(), "round resolved");
        Ok(RoundOutcome {
            state: next,
            events,
        })
    }

    /// Executes one round.
    ///
    /// # Panics
    ///
    /// Panics if the round's preconditions do not hold (wrong phase,
    /// incomplete queue, broken mana budget) or the combat resolver fails.
    /// Callers validate with [`super::validate_round`] first.
    pub fn execute_round(&self, state: &BattleState, rng: &mut Prng) -> RoundOutcome {
        match self.try_execute_round(state, rng) {
            Ok(outcome) => outcome,
            Err(error) => panic!("execute_round: {error}"),
        }
    }

    fn run_player_phase(
        &self,
        state: BattleState,
        events: &mut Vec<BattleEvent>,
        rng: &mut Prng,
    ) -> Result<BattleState, RoundError> {
        let actions: Vec<(Side, QueuedAction)> = state
            .queued_actions
            .iter()
            .flatten()
            .map(|action| (Side::Player, action.clone()))
            .collect();
        let actions = sort_actions_by_speed(&state, actions);

        let mut state = state;
        for (side, action) in &actions {
            state = self
                .resolve_action(state, *side, action, events, rng)
                .map_err(|error| RoundError::combat(RoundStage::PlayerActions, error))?;
        }
        Ok(state)
    }

    /// Collects a decision for every living enemy, then resolves them in
    /// speed order. A failed decision becomes a basic attack on the first
    /// living player.
    fn run_enemy_phase(
        &self,
        state: BattleState,
        events: &mut Vec<BattleEvent>,
        rng: &mut Prng,
    ) -> Result<BattleState, RoundError> {
        let mut actions = Vec::new();
        for enemy in state.living_enemies() {
            let action = match self.env.decisions().decide(&state, &enemy.id, rng) {
                Ok(decision) => QueuedAction {
                    unit_id: enemy.id.clone(),
                    ability_id: decision.ability_id,
                    target_ids: decision.target_ids,
                    mana_cost: 0,
                },
                Err(error) => {
                    tracing::warn!(unit = %enemy.id, %error, "decision failed, falling back to basic attack");
                    let Some(target) = state.living_players().next() else {
                        continue;
                    };
                    QueuedAction::basic_attack(enemy.id.clone(), target.id.clone())
                }
            };
            actions.push((Side::Enemy, action));
        }
        let actions = sort_actions_by_speed(&state, actions);

        let mut state = state;
        for (side, action) in &actions {
            state = self
                .resolve_action(state, *side, action, events, rng)
                .map_err(|error| RoundError::combat(RoundStage::EnemyActions, error))?;
        }
        Ok(state)
    }

    /// Resolves one action: skip if the actor is down, gate on status,
    /// re-validate targets, perform, then generate mana for a connecting
    /// player basic attack.
    fn resolve_action(
        &self,
        state: BattleState,
        side: Side,
        action: &QueuedAction,
        events: &mut Vec<BattleEvent>,
        rng: &mut Prng,
    ) -> Result<BattleState, crate::combat::CombatError> {
        let Some(actor) = state.unit(&action.unit_id) else {
            return Err(crate::combat::CombatError::UnknownActor(action.unit_id.clone()));
        };
        if actor.is_ko() {
            return Ok(state);
        }
        if let Some(reason) = action_gate(actor, rng, self.env.config()) {
            tracing::debug!(unit = %action.unit_id, %reason, "action prevented");
            events.push(BattleEvent::ActionPrevented {
                unit_id: action.unit_id.clone(),
                reason,
            });
            return Ok(state);
        }

        let ability: Option<Ability> = match &action.ability_id {
            Some(id) => match actor
                .ability(id)
                .or_else(|| self.env.abilities().ability(id))
            {
                Some(ability) => Some(ability.clone()),
                None => {
                    tracing::warn!(unit = %action.unit_id, ability = %id, "unknown ability, action skipped");
                    return Ok(state);
                }
            },
            None => None,
        };
        if ability.as_ref().is_some_and(|a| !a.is_resolvable()) {
            tracing::warn!(unit = %action.unit_id, ability = ?action.ability_id, "buff or debuff without a stat modifier, action skipped");
            return Ok(state);
        }

        let targets = resolve_targets(&state, side, ability.as_ref(), &action.target_ids);
        if targets.is_empty() {
            tracing::debug!(unit = %action.unit_id, "no living target, action skipped");
            return Ok(state);
        }

        let outcome = self.env.combat().perform_action(
            &state,
            &action.unit_id,
            ability.as_ref(),
            &targets,
            rng,
        )?;
        events.extend(outcome.events);
        let mut next = outcome.state;

        if side == Side::Player && action.is_basic_attack() && outcome.connected {
            let (new_total, gained) = mana::generate(
                next.remaining_mana,
                next.max_mana,
                self.env.config().mana_per_basic_hit,
            );
            if gained > 0 {
                next.remaining_mana = new_total;
                events.push(BattleEvent::ManaGenerated {
                    source_id: action.unit_id.clone(),
                    amount: gained,
                    new_total,
                });
            }
        }

        next.execution_index += 1;
        Ok(next)
    }

    /// Ticks every living unit's status effects, players first.
    fn tick_statuses(
        &self,
        mut state: BattleState,
        events: &mut Vec<BattleEvent>,
        rng: &mut Prng,
    ) -> BattleState {
        for side in [Side::Player, Side::Enemy] {
            for index in 0..state.units(side).len() {
                let unit = &state.units(side)[index];
                if unit.is_ko() || unit.status_effects.is_empty() {
                    continue;
                }
                let outcome = tick_unit(unit, rng, self.env.config());
                events.extend(outcome.events);
                state.units_mut(side)[index] = outcome.unit;
            }
        }
        state
    }
}
