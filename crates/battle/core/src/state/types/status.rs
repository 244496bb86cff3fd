//! Status effect storage for units.
//!
//! Effects carry a remaining duration in rounds. The engine in
//! [`crate::effects`] decrements durations and removes effects at zero; this
//! module only stores them and enforces the replace-not-stack rule.

use arrayvec::ArrayVec;

use super::StatKind;
use crate::config::BattleConfig;

/// Payload-free discriminant of a status effect, for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum StatusTag {
    Poison,
    Burn,
    Freeze,
    Paralyze,
    Stun,
    Regen,
    Buff,
    Debuff,
}

/// Types of status effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusEffectKind {
    // ========================================================================
    // Damage over time
    // ========================================================================
    /// Loses a percentage of max HP each tick.
    Poison,

    /// Loses a larger percentage of max HP each tick.
    Burn,

    // ========================================================================
    // Crowd control
    // ========================================================================
    /// Skips actions; may thaw early on each tick.
    Freeze,

    /// Each action attempt may fail.
    Paralyze,

    /// Skips actions for the full duration.
    Stun,

    // ========================================================================
    // Modifiers
    // ========================================================================
    /// Restores a fixed amount of HP each tick.
    Regen { amount: i32 },

    Buff { stat: StatKind, modifier: i32 },

    Debuff { stat: StatKind, modifier: i32 },
}

impl StatusEffectKind {
    pub const fn tag(&self) -> StatusTag {
        match self {
            StatusEffectKind::Poison => StatusTag::Poison,
            StatusEffectKind::Burn => StatusTag::Burn,
            StatusEffectKind::Freeze => StatusTag::Freeze,
            StatusEffectKind::Paralyze => StatusTag::Paralyze,
            StatusEffectKind::Stun => StatusTag::Stun,
            StatusEffectKind::Regen { .. } => StatusTag::Regen,
            StatusEffectKind::Buff { .. } => StatusTag::Buff,
            StatusEffectKind::Debuff { .. } => StatusTag::Debuff,
        }
    }

    /// Identity used for replacement: two effects with the same key never
    /// coexist. Buffs and debuffs on different stats are different types.
    pub fn stack_key(&self) -> (StatusTag, Option<StatKind>) {
        match self {
            StatusEffectKind::Buff { stat, .. } | StatusEffectKind::Debuff { stat, .. } => {
                (self.tag(), Some(*stat))
            }
            _ => (self.tag(), None),
        }
    }

    /// Signed contribution to `stat`, if this is a buff or debuff on it.
    pub fn stat_delta(&self, stat: StatKind) -> i32 {
        match self {
            StatusEffectKind::Buff { stat: s, modifier }
            | StatusEffectKind::Debuff { stat: s, modifier }
                if *s == stat =>
            {
                *modifier
            }
            _ => 0,
        }
    }
}

/// A single status effect with its remaining duration in rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusEffectKind,
    pub duration: u32,
}

impl StatusEffect {
    pub const fn new(kind: StatusEffectKind, duration: u32) -> Self {
        Self { kind, duration }
    }
}

/// Active status effects on a unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { BattleConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Applies an effect, replacing any effect of the same type.
    ///
    /// When the set is full the oldest effect is evicted.
    pub fn apply(&mut self, effect: StatusEffect) {
        let key = effect.kind.stack_key();
        self.effects.retain(|e| e.kind.stack_key() != key);
        if self.effects.is_full() {
            self.effects.remove(0);
        }
        self.effects.push(effect);
    }

    pub fn has(&self, tag: StatusTag) -> bool {
        self.effects.iter().any(|e| e.kind.tag() == tag)
    }

    pub fn get(&self, tag: StatusTag) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.kind.tag() == tag)
    }

    /// Removes every effect of the given type.
    pub fn remove(&mut self, tag: StatusTag) {
        self.effects.retain(|e| e.kind.tag() != tag);
    }

    pub fn retain(&mut self, f: impl FnMut(&mut StatusEffect) -> bool) {
        self.effects.retain(f);
    }

    /// Sum of buff/debuff modifiers on `stat`. Uncapped.
    pub fn stat_delta(&self, stat: StatKind) -> i32 {
        self.effects.iter().map(|e| e.kind.stat_delta(stat)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl FromIterator<StatusEffect> for StatusEffects {
    fn from_iter<I: IntoIterator<Item = StatusEffect>>(iter: I) -> Self {
        let mut effects = Self::empty();
        for effect in iter {
            effects.apply(effect);
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_type_replaces() {
        let mut effects = StatusEffects::empty();
        effects.apply(StatusEffect::new(StatusEffectKind::Poison, 2));
        effects.apply(StatusEffect::new(StatusEffectKind::Poison, 3));

        let poisons: Vec<_> = effects
            .iter()
            .filter(|e| e.kind.tag() == StatusTag::Poison)
            .collect();
        assert_eq!(poisons.len(), 1);
        assert_eq!(poisons[0].duration, 3);
    }

    #[test]
    fn different_types_coexist() {
        let mut effects = StatusEffects::empty();
        effects.apply(StatusEffect::new(StatusEffectKind::Poison, 2));
        effects.apply(StatusEffect::new(StatusEffectKind::Burn, 2));
        effects.apply(StatusEffect::new(
            StatusEffectKind::Buff {
                stat: StatKind::Atk,
                modifier: 5,
            },
            3,
        ));
        effects.apply(StatusEffect::new(
            StatusEffectKind::Buff {
                stat: StatKind::Def,
                modifier: 4,
            },
            3,
        ));
        assert_eq!(effects.len(), 4);
    }

    #[test]
    fn stat_delta_sums_buffs_and_debuffs() {
        let effects: StatusEffects = [
            StatusEffect::new(
                StatusEffectKind::Buff {
                    stat: StatKind::Atk,
                    modifier: 6,
                },
                3,
            ),
            StatusEffect::new(
                StatusEffectKind::Debuff {
                    stat: StatKind::Atk,
                    modifier: -2,
                },
                3,
            ),
        ]
        .into_iter()
        .collect();

        assert_eq!(effects.stat_delta(StatKind::Atk), 4);
        assert_eq!(effects.stat_delta(StatKind::Spd), 0);
    }

    #[test]
    fn full_set_evicts_oldest() {
        let mut effects = StatusEffects::empty();
        for (i, stat) in [
            StatKind::Hp,
            StatKind::Pp,
            StatKind::Atk,
            StatKind::Def,
            StatKind::Mag,
            StatKind::Spd,
        ]
        .into_iter()
        .enumerate()
        {
            effects.apply(StatusEffect::new(
                StatusEffectKind::Buff { stat, modifier: 1 },
                i as u32 + 1,
            ));
        }
        effects.apply(StatusEffect::new(StatusEffectKind::Poison, 1));
        effects.apply(StatusEffect::new(StatusEffectKind::Burn, 1));
        effects.apply(StatusEffect::new(StatusEffectKind::Stun, 1));

        assert_eq!(effects.len(), BattleConfig::MAX_STATUS_EFFECTS);
        assert!(effects.has(StatusTag::Stun));
        assert_eq!(effects.stat_delta(StatKind::Hp), 0);
    }
}
