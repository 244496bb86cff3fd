//! Static ability definitions.
//!
//! Abilities are loaded once from the content catalog and never mutated. A
//! queued action that carries no ability id is a basic attack, which has no
//! definition here and is always free.

use super::{AbilityId, Element, StatKind, StatusEffectKind};

/// What an ability does when it resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum AbilityKind {
    /// Weapon-based damage scaled by ATK.
    Physical,
    /// Psynergy damage scaled by MAG and element matchups.
    Elemental,
    /// Restores HP to allies.
    Healing,
    /// Applies a positive stat modifier to allies.
    Buff,
    /// Applies a negative stat modifier to opponents.
    Debuff,
}

impl AbilityKind {
    /// Healing and buffs land on the caster's own side.
    pub const fn targets_allies(self) -> bool {
        matches!(self, AbilityKind::Healing | AbilityKind::Buff)
    }

    pub const fn deals_damage(self) -> bool {
        matches!(self, AbilityKind::Physical | AbilityKind::Elemental)
    }
}

/// How many units an ability resolves against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetShape {
    #[default]
    Single,
    All,
}

/// Soft targeting preferences consulted by the opponent decision procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetingHint {
    /// Favor the opponent with the lowest current HP.
    PreferWeakest,
    /// Favor the opponent with the highest DEF (armor-piercing moves).
    PreferHighestDef,
    /// Avoid spending a big hit on an opponent that is already nearly down.
    AvoidOverkill,
}

/// Stat change carried by buff and debuff abilities. Debuffs use a negative
/// `modifier`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifier {
    pub stat: StatKind,
    pub modifier: i32,
    /// Falls back to the configured default when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<u32>,
}

/// Status effect rolled onto each target an ability hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusInfliction {
    pub kind: StatusEffectKind,
    pub duration: u32,
    /// Chance (0-100) per hit target.
    pub chance: u32,
}

/// Immutable ability definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub id: AbilityId,
    pub name: String,
    pub kind: AbilityKind,
    #[cfg_attr(feature = "serde", serde(default = "neutral"))]
    pub element: Element,
    /// Cost paid from the team mana pool when queued.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mana_cost: u32,
    /// Cost paid from the caster's PP when resolved.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pp_cost: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_power: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: TargetShape,
    #[cfg_attr(feature = "serde", serde(default = "first_level"))]
    pub unlock_level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hints: Vec<TargetingHint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stat_modifier: Option<StatModifier>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inflicts: Option<StatusInfliction>,
}

#[cfg(feature = "serde")]
fn neutral() -> Element {
    Element::Neutral
}

#[cfg(feature = "serde")]
fn first_level() -> u32 {
    1
}

impl Ability {
    /// Minimal definition with defaults for every optional field.
    pub fn new(id: impl Into<AbilityId>, kind: AbilityKind) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            kind,
            element: Element::Neutral,
            mana_cost: 0,
            pp_cost: 0,
            base_power: 0,
            target: TargetShape::Single,
            unlock_level: 1,
            hints: Vec::new(),
            stat_modifier: None,
            inflicts: None,
        }
    }

    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    #[must_use]
    pub fn with_mana_cost(mut self, mana_cost: u32) -> Self {
        self.mana_cost = mana_cost;
        self
    }

    #[must_use]
    pub fn with_pp_cost(mut self, pp_cost: u32) -> Self {
        self.pp_cost = pp_cost;
        self
    }

    #[must_use]
    pub fn with_power(mut self, base_power: i32) -> Self {
        self.base_power = base_power;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: TargetShape) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: TargetingHint) -> Self {
        self.hints.push(hint);
        self
    }

    #[must_use]
    pub fn with_stat_modifier(mut self, stat: StatKind, modifier: i32) -> Self {
        self.stat_modifier = Some(StatModifier {
            stat,
            modifier,
            duration: None,
        });
        self
    }

    #[must_use]
    pub fn with_inflicts(mut self, kind: StatusEffectKind, duration: u32, chance: u32) -> Self {
        self.inflicts = Some(StatusInfliction {
            kind,
            duration,
            chance,
        });
        self
    }

    /// Buffs and debuffs resolve only when they carry a stat modifier.
    pub fn is_resolvable(&self) -> bool {
        !matches!(self.kind, AbilityKind::Buff | AbilityKind::Debuff)
            || self.stat_modifier.is_some()
    }

    pub fn has_hint(&self, hint: TargetingHint) -> bool {
        self.hints.contains(&hint)
    }
}
