//! Djinn definitions and lifecycle trackers.

use std::collections::BTreeMap;

use super::{AbilityId, DjinnId, Element, UnitId};

/// Per-unit ability grants, keyed by the unit's relationship to the Djinn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AbilityGroups {
    pub same: Vec<AbilityId>,
    pub counter: Vec<AbilityId>,
    pub neutral: Vec<AbilityId>,
}

impl AbilityGroups {
    /// Every ability id in any group.
    pub fn all(&self) -> impl Iterator<Item = &AbilityId> {
        self.same
            .iter()
            .chain(self.counter.iter())
            .chain(self.neutral.iter())
    }
}

/// Immutable Djinn definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Djinn {
    pub id: DjinnId,
    pub name: String,
    pub element: Element,
    #[cfg_attr(feature = "serde", serde(default))]
    pub granted_abilities: BTreeMap<UnitId, AbilityGroups>,
}

impl Djinn {
    pub fn new(id: impl Into<DjinnId>, element: Element) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            element,
            granted_abilities: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_grants(mut self, unit: impl Into<UnitId>, groups: AbilityGroups) -> Self {
        self.granted_abilities.insert(unit.into(), groups);
        self
    }
}

/// Lifecycle state of an equipped Djinn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DjinnState {
    /// Available: contributes bonuses and grants, may be queued.
    Set,
    /// Spent this round; contributes nothing.
    Standby,
    /// Counting down to `Set`; contributes nothing.
    Recovery,
}

/// Team-scoped lifecycle record for one equipped Djinn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DjinnTracker {
    pub state: DjinnState,
    pub last_activated_round: Option<u32>,
}

impl DjinnTracker {
    pub const fn set() -> Self {
        Self {
            state: DjinnState::Set,
            last_activated_round: None,
        }
    }

    pub const fn is_set(&self) -> bool {
        matches!(self.state, DjinnState::Set)
    }
}

impl Default for DjinnTracker {
    fn default() -> Self {
        Self::set()
    }
}
