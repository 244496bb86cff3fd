//! Structured utility scores.

/// Utility of one option, split into explicit components so score tables
/// can be logged and inspected.
///
/// # Score Formula
///
/// ```text
/// value = is_possible × situation × personality × modifier / 10000
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Can this option be executed at all?
    pub is_possible: bool,

    /// How favorable the battle state is for this option (0-100).
    pub situation: u32,

    /// How much this decision maker likes the option (0-100).
    pub personality: u32,

    /// Contextual adjustment (0-200, typically 100).
    ///
    /// Targeting hints act here: a preferred target gets 200, an overkill
    /// target gets 20.
    pub modifier: u32,
}

impl Score {
    pub const NEUTRAL_MODIFIER: u32 = 100;

    pub const fn new(is_possible: bool, situation: u32, personality: u32, modifier: u32) -> Self {
        Self {
            is_possible,
            situation,
            personality,
            modifier,
        }
    }

    pub const fn impossible() -> Self {
        Self {
            is_possible: false,
            situation: 0,
            personality: 0,
            modifier: 0,
        }
    }

    /// Final weight; 0 if impossible.
    pub const fn value(&self) -> u32 {
        if !self.is_possible {
            return 0;
        }
        (self.situation * self.personality * self.modifier) / 10000
    }
}

/// Picks an index with probability proportional to each weight.
///
/// Draws exactly once when any weight is positive; returns `None` without
/// drawing otherwise.
pub fn weighted_choice(weights: &[u32], rng: &mut crate::env::Prng) -> Option<usize> {
    let total: u64 = weights.iter().map(|w| u64::from(*w)).sum();
    if total == 0 {
        return None;
    }
    let mut roll = (rng.next_f64() * total as f64) as u64;
    for (index, weight) in weights.iter().enumerate() {
        let weight = u64::from(*weight);
        if roll < weight {
            return Some(index);
        }
        roll -= weight;
    }
    weights.iter().rposition(|w| *w > 0)
}
