//! Canonical battle state representation.
//!
//! [`BattleState`] is the single root of truth. Supporting types live in
//! [`types`], and the round event log in [`event`].

mod battle;
mod event;
pub mod types;

pub use battle::{BattleOutcome, BattlePhase, BattleState, QueueSlots, QueuedAction, Side};
pub use event::{BattleEvent, PreventReason};
pub use types::*;
