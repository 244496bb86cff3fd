use std::collections::BTreeMap;

use crate::state::{Ability, AbilityId};

/// Read-only lookup of ability definitions by id.
///
/// Units carry their own learned abilities; the oracle is consulted when
/// Djinn grant abilities a unit does not already know.
pub trait AbilityOracle {
    fn ability(&self, id: &AbilityId) -> Option<&Ability>;
}

/// Immutable, id-keyed ability table loaded once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbilityCatalog {
    abilities: BTreeMap<AbilityId, Ability>,
}

impl AbilityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.values()
    }
}

impl FromIterator<Ability> for AbilityCatalog {
    /// Later definitions with a duplicate id replace earlier ones.
    fn from_iter<I: IntoIterator<Item = Ability>>(iter: I) -> Self {
        Self {
            abilities: iter.into_iter().map(|a| (a.id.clone(), a)).collect(),
        }
    }
}

impl AbilityOracle for AbilityCatalog {
    fn ability(&self, id: &AbilityId) -> Option<&Ability> {
        self.abilities.get(id)
    }
}
