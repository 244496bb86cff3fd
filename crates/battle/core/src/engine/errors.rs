//! Error types for planning and round execution.

use crate::combat::CombatError;
use crate::error::{BattleError, ErrorSeverity};
use crate::state::{AbilityId, BattlePhase, DjinnId, UnitId};

/// Planning-phase validation failures.
///
/// Every operation that returns one leaves the caller's state untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("operation requires the {expected} phase, battle is in {actual}")]
    WrongPhase {
        expected: BattlePhase,
        actual: BattlePhase,
    },

    #[error("unit {0} is not on the player team")]
    UnknownUnit(UnitId),

    #[error("unit {unit_id} does not know ability {ability_id}")]
    UnknownAbility {
        unit_id: UnitId,
        ability_id: AbilityId,
    },

    #[error("ability {ability_id} is not unlocked for unit {unit_id}")]
    AbilityLocked {
        unit_id: UnitId,
        ability_id: AbilityId,
    },

    #[error("ability {ability_id} of unit {unit_id} is a buff or debuff without a stat modifier")]
    UnresolvableAbility {
        unit_id: UnitId,
        ability_id: AbilityId,
    },

    #[error("target {0} is not in the battle or on the wrong side")]
    InvalidTarget(UnitId),

    #[error("expected {expected} target(s), got {actual}")]
    TargetCount { expected: usize, actual: usize },

    #[error("insufficient mana: need {needed}, have {remaining}")]
    InsufficientMana { needed: u32, remaining: u32 },

    #[error("insufficient PP for {unit_id}: need {needed}, have {available}")]
    InsufficientPp {
        unit_id: UnitId,
        needed: u32,
        available: i32,
    },

    #[error("djinn {0} is not equipped or not set")]
    DjinnNotActivatable(DjinnId),

    #[error("queue incomplete: {filled} of {required} slots filled")]
    QueueIncomplete { filled: usize, required: usize },

    #[error("mana budget broken: remaining {remaining} + queued {queued} != max {max}")]
    ManaBudgetInvalid { remaining: u32, queued: u32, max: u32 },
}

impl BattleError for QueueError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientMana { .. }
            | Self::InsufficientPp { .. }
            | Self::QueueIncomplete { .. }
            | Self::DjinnNotActivatable(_) => ErrorSeverity::Recoverable,
            Self::ManaBudgetInvalid { .. } => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::WrongPhase { .. } => "QUEUE_WRONG_PHASE",
            Self::UnknownUnit(_) => "QUEUE_UNKNOWN_UNIT",
            Self::UnknownAbility { .. } => "QUEUE_UNKNOWN_ABILITY",
            Self::AbilityLocked { .. } => "QUEUE_ABILITY_LOCKED",
            Self::UnresolvableAbility { .. } => "QUEUE_UNRESOLVABLE_ABILITY",
            Self::InvalidTarget(_) => "QUEUE_INVALID_TARGET",
            Self::TargetCount { .. } => "QUEUE_TARGET_COUNT",
            Self::InsufficientMana { .. } => "QUEUE_INSUFFICIENT_MANA",
            Self::InsufficientPp { .. } => "QUEUE_INSUFFICIENT_PP",
            Self::DjinnNotActivatable(_) => "QUEUE_DJINN_NOT_ACTIVATABLE",
            Self::QueueIncomplete { .. } => "QUEUE_INCOMPLETE",
            Self::ManaBudgetInvalid { .. } => "QUEUE_MANA_BUDGET_INVALID",
        }
    }
}

/// Identifies which stage of round execution produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundStage {
    Validate,
    PlayerActions,
    EnemyActions,
}

impl RoundStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundStage::Validate => "validate",
            RoundStage::PlayerActions => "player_actions",
            RoundStage::EnemyActions => "enemy_actions",
        }
    }
}

impl std::fmt::Display for RoundStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures of round execution.
///
/// A `Precondition` error means the caller executed a round it had not
/// validated; [`super::BattleEngine::execute_round`] panics on it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("round precondition violated: {0}")]
    Precondition(#[from] QueueError),

    #[error("{stage} failed: {error}")]
    Combat { stage: RoundStage, error: CombatError },
}

impl RoundError {
    pub fn combat(stage: RoundStage, error: CombatError) -> Self {
        Self::Combat { stage, error }
    }

    pub fn stage(&self) -> RoundStage {
        match self {
            Self::Precondition(_) => RoundStage::Validate,
            Self::Combat { stage, .. } => *stage,
        }
    }
}

impl BattleError for RoundError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Precondition(_) => ErrorSeverity::Fatal,
            Self::Combat { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Precondition(_) => "ROUND_PRECONDITION",
            Self::Combat { .. } => "ROUND_COMBAT",
        }
    }
}
