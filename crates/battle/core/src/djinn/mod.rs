//! Djinn subsystem: synergy, element relationships, ability grants, and the
//! Set/Standby/Recovery lifecycle.
//!
//! Bonuses are never cached on units. Every consumer recomputes them from the
//! `(unit, team)` pair so a tracker flip is reflected immediately.

pub mod compatibility;
pub mod delta;
pub mod grants;
pub mod lifecycle;
pub mod synergy;

pub use compatibility::{
    ElementCompatibility, RelationshipBonus, element_compatibility, relationship_bonus,
};
pub use delta::{BonusSnapshot, DjinnTransition, diff_events};
pub use grants::{granted_abilities, merge_djinn_abilities, merge_team_abilities};
pub use lifecycle::{
    Activation, RecoveryTick, activate, can_activate, recovery_rounds, tick_recovery,
};
pub use synergy::{DjinnSynergy, calculate_djinn_synergy, team_synergy};
