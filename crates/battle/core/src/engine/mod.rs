//! Battle orchestrator.
//!
//! ```text
//! planning ──validate──▶ executing ──┬──▶ victory | defeat
//!    ▲                               │
//!    └──── recovery, re-merge, ──────┘
//!          reset queue, refresh mana
//! ```
//!
//! Planning operations are free functions over `&BattleState`. Round
//! execution lives on [`BattleEngine`], which borrows the read-only
//! collaborators in [`BattleEnv`] and threads the caller's [`Prng`].

mod errors;
mod planning;
mod round;
mod summon;
mod targeting;
mod transition;

pub use errors::{QueueError, RoundError, RoundStage};
pub use planning::{
    clear_queued_action, create_battle_state, queue_action, queue_djinn, refresh_mana,
    unqueue_djinn, validate_round,
};
pub use summon::resolve_djinn_phase;
pub use targeting::{resolve_targets, target_side};
pub use transition::begin_planning;

use crate::env::{BattleEnv, Prng};
use crate::state::{BattleEvent, BattleState, UnitId};
use crate::turn_order::battle_turn_order;

/// New state plus the ordered event log of one round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundOutcome {
    pub state: BattleState,
    pub events: Vec<BattleEvent>,
}

/// Executes rounds against a fixed set of collaborators.
///
/// The engine holds no battle state of its own; every call takes a state
/// and returns a new one.
pub struct BattleEngine<'a> {
    env: BattleEnv<'a>,
}

impl<'a> BattleEngine<'a> {
    pub fn new(env: BattleEnv<'a>) -> Self {
        Self { env }
    }

    pub fn env(&self) -> BattleEnv<'a> {
        self.env
    }

    /// Round-level turn order for display, computed on a cloned generator so
    /// the authoritative sequence does not advance.
    pub fn preview_turn_order(&self, state: &BattleState, rng: &Prng) -> Vec<UnitId> {
        battle_turn_order(state, &mut rng.clone())
    }
}
