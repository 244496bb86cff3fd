//! Combat math.
//!
//! The orchestrator only sees the [`CombatResolver`] trait; [`StandardCombat`]
//! is the shipped implementation. Formulas live in pure functions so they can
//! be tested without building a battle.
//!
//! # Core Functions
//!
//! - `hit_chance` / `check_hit`: speed-based evasion against a fixed accuracy
//! - `crit_chance` / `check_crit`: speed-scaled critical chance, ×2 damage
//! - `physical_damage` / `elemental_damage`: damage before the crit multiplier
//! - `healing_amount`: healing before the max-HP cap

pub mod damage;
pub mod hit;
pub mod resolver;

pub use damage::{
    apply_critical, element_modifier, elemental_damage, healing_amount, physical_damage,
    roll_variance,
};
pub use hit::{check_crit, check_hit, crit_chance, evasion_chance, hit_chance};
pub use resolver::{ActionOutcome, CombatError, CombatResolver, StandardCombat};
