//! Effective-stats pipeline.
//!
//! ```text
//! [ Base stats ]
//!      + level growth × (level − 1)
//!      + equipment (four slots)
//!      + Djinn synergy and relationship (Set Djinn only)
//!      + status buffs/debuffs
//!      ↓
//! [ Floors: HP/ATK/MAG/SPD ≥ 1, DEF/PP ≥ 0 ]
//! ```
//!
//! All sources are additive and computed on demand from `(unit, team)`;
//! nothing is cached on the unit.

pub mod bonus;
pub mod pipeline;

pub use bonus::{Bonus, BonusSource, BonusStack, StatBounds};
pub use pipeline::{StatBreakdown, calculate_effective_stats, effective_spd};
