//! Data-driven battle content and loaders.
//!
//! This crate houses the templates that describe a battle before it starts
//! and provides loaders for the RON/TOML data files:
//! - Ability catalog (RON)
//! - Equipment catalog (RON)
//! - Djinn catalog with per-unit ability grants (RON)
//! - Unit templates for both sides (RON)
//! - Encounters pairing a party with an enemy lineup (RON)
//! - Battle tuning (`BattleConfig`, TOML)
//!
//! Content is resolved into battle-core values once, before the battle
//! starts, and never appears in `BattleState` by id alone.

pub mod templates;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use templates::{Encounter, InstantiateError, UnitTemplate};

#[cfg(feature = "loaders")]
pub use loaders::{
    AbilityLoader, BattleSetup, ConfigLoader, ContentFactory, DjinnLoader, EncounterLoader,
    EquipmentLoader, LoadResult, UnitLoader,
};
