//! Opponent decision procedure.
//!
//! The orchestrator asks a [`DecisionMaker`] for one action per living enemy
//! and owns the fallback when the answer is an error. Implementations must:
//!
//! - never pick an ability the unit cannot pay for (basic attacks are free)
//! - never target a knocked-out unit
//! - resolve all-target abilities to every living unit on the target side
//! - treat targeting hints as weights, not rules

pub mod heuristic;
pub mod score;

pub use heuristic::HeuristicAi;
pub use score::{Score, weighted_choice};

use crate::env::Prng;
use crate::error::{BattleError, ErrorSeverity};
use crate::state::{AbilityId, BattleState, UnitId};

/// Action chosen for one unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    /// `None` is a basic attack.
    pub ability_id: Option<AbilityId>,
    pub target_ids: Vec<UnitId>,
}

/// Hard failures of the decision procedure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error("unit {0} is not in the battle")]
    UnknownUnit(UnitId),

    #[error("unit {0} is knocked out and cannot act")]
    ActorKnockedOut(UnitId),

    #[error("no living target for unit {0}")]
    NoLivingTarget(UnitId),
}

impl BattleError for DecisionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoLivingTarget(_) => ErrorSeverity::Recoverable,
            Self::UnknownUnit(_) | Self::ActorKnockedOut(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownUnit(_) => "AI_UNKNOWN_UNIT",
            Self::ActorKnockedOut(_) => "AI_ACTOR_KNOCKED_OUT",
            Self::NoLivingTarget(_) => "AI_NO_LIVING_TARGET",
        }
    }
}

/// Chooses an action for `unit_id` from the current state.
///
/// Draws from `rng` are part of the authoritative sequence.
pub trait DecisionMaker {
    fn decide(
        &self,
        state: &BattleState,
        unit_id: &UnitId,
        rng: &mut Prng,
    ) -> Result<Decision, DecisionError>;
}
