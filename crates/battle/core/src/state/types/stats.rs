//! Six-stat block used for base stats, growth rates, bonuses and snapshots.

use core::ops::{Add, AddAssign};

/// Stat selector used by buff/debuff effects and bonus breakdowns.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum StatKind {
    Hp,
    Pp,
    Atk,
    Def,
    Mag,
    Spd,
}

/// A full stat line. Values are signed so the same type carries deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Stats {
    pub hp: i32,
    pub pp: i32,
    pub atk: i32,
    pub def: i32,
    pub mag: i32,
    pub spd: i32,
}

impl Stats {
    pub const ZERO: Stats = Stats {
        hp: 0,
        pp: 0,
        atk: 0,
        def: 0,
        mag: 0,
        spd: 0,
    };

    pub const fn new(hp: i32, pp: i32, atk: i32, def: i32, mag: i32, spd: i32) -> Self {
        Self {
            hp,
            pp,
            atk,
            def,
            mag,
            spd,
        }
    }

    pub const fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Pp => self.pp,
            StatKind::Atk => self.atk,
            StatKind::Def => self.def,
            StatKind::Mag => self.mag,
            StatKind::Spd => self.spd,
        }
    }

    pub fn get_mut(&mut self, kind: StatKind) -> &mut i32 {
        match kind {
            StatKind::Hp => &mut self.hp,
            StatKind::Pp => &mut self.pp,
            StatKind::Atk => &mut self.atk,
            StatKind::Def => &mut self.def,
            StatKind::Mag => &mut self.mag,
            StatKind::Spd => &mut self.spd,
        }
    }

    /// Returns a copy with `kind` offset by `delta`.
    #[must_use]
    pub fn with_delta(mut self, kind: StatKind, delta: i32) -> Self {
        *self.get_mut(kind) += delta;
        self
    }

    /// Multiplies every stat by `factor`.
    #[must_use]
    pub const fn scaled(self, factor: i32) -> Self {
        Self {
            hp: self.hp * factor,
            pp: self.pp * factor,
            atk: self.atk * factor,
            def: self.def * factor,
            mag: self.mag * factor,
            spd: self.spd * factor,
        }
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(self, rhs: Stats) -> Stats {
        Stats {
            hp: self.hp + rhs.hp,
            pp: self.pp + rhs.pp,
            atk: self.atk + rhs.atk,
            def: self.def + rhs.def,
            mag: self.mag + rhs.mag,
            spd: self.spd + rhs.spd,
        }
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Stats) {
        *self = *self + rhs;
    }
}

impl core::iter::Sum for Stats {
    fn sum<I: Iterator<Item = Stats>>(iter: I) -> Stats {
        iter.fold(Stats::ZERO, Add::add)
    }
}
