//! Damage, healing and element calculations.

use crate::env::Prng;
use crate::state::{Element, Stats};

// ============================================================================
// Element Modifier
// ============================================================================

pub const ADVANTAGE_MULTIPLIER: f64 = 1.5;
pub const DISADVANTAGE_MULTIPLIER: f64 = 0.67;

/// Damage multiplier for an `attack` element striking a `defender` element.
///
/// Advantage follows the cycle Venus → Jupiter → Mercury → Mars → Venus; the
/// reverse direction is resisted. Neutral on either side is even.
pub fn element_modifier(attack: Element, defender: Element) -> f64 {
    if attack.strong_against() == Some(defender) {
        ADVANTAGE_MULTIPLIER
    } else if defender.strong_against() == Some(attack) {
        DISADVANTAGE_MULTIPLIER
    } else {
        1.0
    }
}

// ============================================================================
// Variance
// ============================================================================

/// Random spread in `[0.9, 1.1)`. Always draws once.
pub fn roll_variance(rng: &mut Prng) -> f64 {
    0.9 + rng.next_f64() * 0.2
}

// ============================================================================
// Damage Calculation
// ============================================================================

/// Physical damage before the critical multiplier.
///
/// # Formula
///
/// ```text
/// power  = base_power if base_power > 0 else atk
/// damage = max(1, floor((power + atk - def / 2) * variance))
/// ```
pub fn physical_damage(base_power: i32, attacker: &Stats, defender: &Stats, variance: f64) -> i32 {
    let power = if base_power > 0 { base_power } else { attacker.atk };
    let raw = f64::from(power + attacker.atk) - f64::from(defender.def) / 2.0;
    floor_at_one(raw * variance)
}

/// Psynergy damage before the critical multiplier.
///
/// # Formula
///
/// ```text
/// damage = max(1, floor((base_power + mag - def * 0.3) * element_modifier * variance))
/// ```
pub fn elemental_damage(
    base_power: i32,
    attacker: &Stats,
    defender: &Stats,
    element_modifier: f64,
    variance: f64,
) -> i32 {
    let raw = f64::from(base_power + attacker.mag) - f64::from(defender.def) * 0.3;
    floor_at_one(raw * element_modifier * variance)
}

/// Healing amount before the max-HP cap.
pub fn healing_amount(base_power: i32, caster: &Stats, variance: f64) -> i32 {
    (f64::from(base_power + caster.mag) * variance).floor().max(0.0) as i32
}

/// Applies the critical multiplier.
pub fn apply_critical(damage: i32, critical: bool) -> i32 {
    if critical {
        (f64::from(damage) * super::hit::CRIT_MULTIPLIER) as i32
    } else {
        damage
    }
}

fn floor_at_one(value: f64) -> i32 {
    (value.floor() as i32).max(1)
}
