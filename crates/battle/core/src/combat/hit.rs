//! Hit and critical-hit rolls.

use crate::env::Prng;

/// Evasion ceiling.
pub const MAX_EVASION: f64 = 0.40;
/// Baseline evasion every defender has.
pub const BASE_EVASION: f64 = 0.05;
/// Accuracy before evasion is applied.
pub const BASE_ACCURACY: f64 = 0.95;
pub const MIN_HIT_CHANCE: f64 = 0.05;

pub const BASE_CRIT_CHANCE: f64 = 0.05;
pub const MAX_CRIT_CHANCE: f64 = 0.35;
pub const CRIT_MULTIPLIER: f64 = 2.0;

/// Chance the defender dodges.
///
/// # Formula
///
/// ```text
/// evasion = min(0.40, 0.05 + boots_evasion / 100 + (defender_spd - attacker_spd) * 0.01)
/// ```
pub fn evasion_chance(attacker_spd: i32, defender_spd: i32, boots_evasion: i32) -> f64 {
    let speed_edge = f64::from(defender_spd - attacker_spd) * 0.01;
    (BASE_EVASION + f64::from(boots_evasion) / 100.0 + speed_edge).min(MAX_EVASION)
}

/// Probability that an attack connects, in `[0.05, 0.95]`.
pub fn hit_chance(attacker_spd: i32, defender_spd: i32, boots_evasion: i32) -> f64 {
    let evasion = evasion_chance(attacker_spd, defender_spd, boots_evasion);
    (BASE_ACCURACY * (1.0 - evasion)).clamp(MIN_HIT_CHANCE, BASE_ACCURACY)
}

/// Rolls the hit check. Always draws once.
pub fn check_hit(chance: f64, rng: &mut Prng) -> bool {
    rng.next_f64() < chance
}

/// Critical-hit probability for an attacker with `spd`.
///
/// # Formula
///
/// ```text
/// crit = min(0.05 + sqrt(spd) / 200, 0.35)
/// ```
pub fn crit_chance(spd: i32) -> f64 {
    (BASE_CRIT_CHANCE + f64::from(spd.max(0)).sqrt() / 200.0).min(MAX_CRIT_CHANCE)
}

/// Rolls the critical check. Always draws once.
pub fn check_crit(spd: i32, rng: &mut Prng) -> bool {
    rng.next_f64() < crit_chance(spd)
}
