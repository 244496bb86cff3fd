//! Shared data types referenced throughout the battle state.

mod ability;
mod djinn;
mod element;
mod equipment;
mod ids;
mod stats;
mod status;
mod team;
mod unit;

pub use ability::{
    Ability, AbilityKind, StatModifier, StatusInfliction, TargetShape, TargetingHint,
};
pub use djinn::{AbilityGroups, Djinn, DjinnState, DjinnTracker};
pub use element::Element;
pub use equipment::{Equipment, EquipmentLoadout, EquipmentSlot};
pub use ids::{AbilityId, DjinnId, EquipmentId, UnitId};
pub use stats::{StatKind, Stats};
pub use status::{StatusEffect, StatusEffectKind, StatusEffects, StatusTag};
pub use team::{Team, TeamError};
pub use unit::Unit;
