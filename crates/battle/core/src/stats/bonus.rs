//! Bonus accumulation for the effective-stats pipeline.
//!
//! Every source contributes flat, additive bonuses. The stack sums them onto
//! the base value and clamps the result to the stat's floor; there is no
//! multiplicative layer and no cap.

use crate::state::StatKind;

/// Where a bonus came from, in pipeline order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BonusSource {
    Level,
    Equipment,
    DjinnSynergy,
    DjinnRelationship,
    Status,
}

/// A single flat bonus tagged with its source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bonus {
    pub source: BonusSource,
    pub value: i32,
}

impl Bonus {
    pub const fn new(source: BonusSource, value: i32) -> Self {
        Self { source, value }
    }
}

/// A collection of bonuses applied to one stat.
///
/// # Example
/// ```
/// # use battle_core::stats::bonus::{Bonus, BonusSource, BonusStack};
/// let mut stack = BonusStack::new();
/// stack.add(Bonus::new(BonusSource::Level, 6));
/// stack.add(Bonus::new(BonusSource::Status, -30));
///
/// assert_eq!(stack.total(), -24);
/// assert_eq!(stack.apply(20, 1), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusStack {
    bonuses: Vec<Bonus>,
}

impl BonusStack {
    pub fn new() -> Self {
        Self {
            bonuses: Vec::new(),
        }
    }

    /// Adds a bonus; zero-valued bonuses are dropped.
    pub fn add(&mut self, bonus: Bonus) {
        if bonus.value != 0 {
            self.bonuses.push(bonus);
        }
    }

    pub fn total(&self) -> i32 {
        self.bonuses.iter().map(|b| b.value).sum()
    }

    /// Sum of bonuses from one source.
    pub fn from_source(&self, source: BonusSource) -> i32 {
        self.bonuses
            .iter()
            .filter(|b| b.source == source)
            .map(|b| b.value)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bonus> {
        self.bonuses.iter()
    }

    /// `max(base + total, floor)`.
    pub fn apply(&self, base: i32, floor: i32) -> i32 {
        (base + self.total()).max(floor)
    }
}

/// Minimum values for effective stats.
pub struct StatBounds;

impl StatBounds {
    pub const HP_MIN: i32 = 1;
    pub const PP_MIN: i32 = 0;
    pub const ATK_MIN: i32 = 1;
    pub const DEF_MIN: i32 = 0;
    pub const MAG_MIN: i32 = 1;
    pub const SPD_MIN: i32 = 1;

    pub const fn floor(kind: StatKind) -> i32 {
        match kind {
            StatKind::Hp => Self::HP_MIN,
            StatKind::Pp => Self::PP_MIN,
            StatKind::Atk => Self::ATK_MIN,
            StatKind::Def => Self::DEF_MIN,
            StatKind::Mag => Self::MAG_MIN,
            StatKind::Spd => Self::SPD_MIN,
        }
    }
}
