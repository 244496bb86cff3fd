//! Deterministic, queue-based party battle simulation.
//!
//! `battle-core` defines the canonical battle rules (stats, Djinn, mana,
//! turn order, status effects, combat math, opponent AI) and exposes pure
//! APIs over [`BattleState`]. Planning flows through the functions in
//! [`engine`], rounds through [`engine::BattleEngine`], and every random
//! decision draws from one explicitly threaded [`env::Prng`].
pub mod ai;
pub mod combat;
pub mod config;
pub mod djinn;
pub mod effects;
pub mod engine;
pub mod env;
pub mod error;
pub mod mana;
pub mod state;
pub mod stats;
pub mod turn_order;

#[cfg(test)]
pub(crate) mod test_support;

pub use ai::{Decision, DecisionError, DecisionMaker, HeuristicAi, Score};
pub use combat::{ActionOutcome, CombatError, CombatResolver, StandardCombat};
pub use config::BattleConfig;
pub use djinn::{
    DjinnSynergy, ElementCompatibility, calculate_djinn_synergy, element_compatibility,
    merge_djinn_abilities,
};
pub use effects::{action_gate, apply_status, tick_unit};
pub use engine::{
    BattleEngine, QueueError, RoundError, RoundOutcome, RoundStage, clear_queued_action,
    create_battle_state, queue_action, queue_djinn, refresh_mana, unqueue_djinn, validate_round,
};
pub use env::{AbilityCatalog, AbilityOracle, BattleEnv, Env, Prng, PrngSnapshot, derive_seed};
pub use error::{BattleError, ErrorSeverity};
pub use state::{
    Ability, AbilityGroups, AbilityId, AbilityKind, BattleEvent, BattleOutcome, BattlePhase,
    BattleState, Djinn, DjinnId, DjinnState, DjinnTracker, Element, Equipment, EquipmentId,
    EquipmentLoadout, EquipmentSlot, PreventReason, QueuedAction, Side, StatKind, StatModifier,
    Stats, StatusEffect, StatusEffectKind, StatusInfliction, StatusTag, TargetShape,
    TargetingHint, Team, TeamError, Unit, UnitId,
};
pub use stats::{StatBreakdown, calculate_effective_stats, effective_spd};
pub use turn_order::{battle_turn_order, calculate_turn_order, sort_actions_by_speed};
