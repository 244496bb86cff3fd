//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (`QueueError`, `RoundError`, `DecisionError`,
//! `CombatError`) live next to the operations that produce them. This module
//! holds the shared classification they all report through.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each component has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Untouched State**: A failed operation never yields a partially updated state

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The caller can fix its input (queue another slot, wait for mana)
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: A caller contract breach; the battle cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with the same or an alternative input.
    ///
    /// Examples: insufficient mana, incomplete queue
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown unit id, ability not unlocked
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: queued actor missing from the roster
    Internal,

    /// Fatal error - the caller broke the round-execution contract.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug in the caller or the crate.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
