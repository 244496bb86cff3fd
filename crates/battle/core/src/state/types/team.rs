//! Player party: units plus the team-scoped Djinn they share.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use super::{Djinn, DjinnId, DjinnState, DjinnTracker, Unit, UnitId};
use crate::config::BattleConfig;
use crate::error::{BattleError, ErrorSeverity};

/// Errors raised while assembling a team.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TeamError {
    #[error("team needs between 1 and {max} units, got {count}")]
    InvalidUnitCount { count: usize, max: usize },

    #[error("at most {max} Djinn can be equipped, got {count}")]
    TooManyDjinn { count: usize, max: usize },

    #[error("unit id {0} appears more than once")]
    DuplicateUnit(UnitId),

    #[error("djinn id {0} appears more than once")]
    DuplicateDjinn(DjinnId),
}

impl BattleError for TeamError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidUnitCount { .. } => "TEAM_INVALID_UNIT_COUNT",
            Self::TooManyDjinn { .. } => "TEAM_TOO_MANY_DJINN",
            Self::DuplicateUnit(_) => "TEAM_DUPLICATE_UNIT",
            Self::DuplicateDjinn(_) => "TEAM_DUPLICATE_DJINN",
        }
    }
}

/// An ordered party of up to four units and up to three equipped Djinn.
///
/// A tracker exists for exactly the equipped Djinn; [`Team::new`] creates
/// them in the `Set` state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    units: ArrayVec<Unit, { BattleConfig::PARTY_SIZE }>,
    equipped_djinn: ArrayVec<Djinn, { BattleConfig::MAX_EQUIPPED_DJINN }>,
    djinn_trackers: BTreeMap<DjinnId, DjinnTracker>,
}

impl Team {
    pub fn new(
        units: impl IntoIterator<Item = Unit>,
        djinn: impl IntoIterator<Item = Djinn>,
    ) -> Result<Self, TeamError> {
        let units: Vec<Unit> = units.into_iter().collect();
        let djinn: Vec<Djinn> = djinn.into_iter().collect();

        if units.is_empty() || units.len() > BattleConfig::PARTY_SIZE {
            return Err(TeamError::InvalidUnitCount {
                count: units.len(),
                max: BattleConfig::PARTY_SIZE,
            });
        }
        if djinn.len() > BattleConfig::MAX_EQUIPPED_DJINN {
            return Err(TeamError::TooManyDjinn {
                count: djinn.len(),
                max: BattleConfig::MAX_EQUIPPED_DJINN,
            });
        }
        for (i, unit) in units.iter().enumerate() {
            if units[..i].iter().any(|u| u.id == unit.id) {
                return Err(TeamError::DuplicateUnit(unit.id.clone()));
            }
        }

        let mut djinn_trackers = BTreeMap::new();
        for d in &djinn {
            if djinn_trackers
                .insert(d.id.clone(), DjinnTracker::set())
                .is_some()
            {
                return Err(TeamError::DuplicateDjinn(d.id.clone()));
            }
        }

        Ok(Self {
            units: units.into_iter().collect(),
            equipped_djinn: djinn.into_iter().collect(),
            djinn_trackers,
        })
    }

    /// A team with no units and no Djinn.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shared empty team, used as the stat context for units that have no
    /// Djinn (the opposing side).
    pub fn none() -> &'static Team {
        static NONE: Team = Team {
            units: ArrayVec::new_const(),
            equipped_djinn: ArrayVec::new_const(),
            djinn_trackers: BTreeMap::new(),
        };
        &NONE
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub(crate) fn units_mut(&mut self) -> &mut [Unit] {
        &mut self.units
    }

    pub fn unit(&self, id: &UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| &u.id == id)
    }

    pub fn unit_index(&self, id: &UnitId) -> Option<usize> {
        self.units.iter().position(|u| &u.id == id)
    }

    pub fn equipped_djinn(&self) -> &[Djinn] {
        &self.equipped_djinn
    }

    pub fn djinn(&self, id: &DjinnId) -> Option<&Djinn> {
        self.equipped_djinn.iter().find(|d| &d.id == id)
    }

    pub fn djinn_trackers(&self) -> &BTreeMap<DjinnId, DjinnTracker> {
        &self.djinn_trackers
    }

    pub fn tracker(&self, id: &DjinnId) -> Option<&DjinnTracker> {
        self.djinn_trackers.get(id)
    }

    pub(crate) fn tracker_mut(&mut self, id: &DjinnId) -> Option<&mut DjinnTracker> {
        self.djinn_trackers.get_mut(id)
    }

    /// Equipped Djinn currently in `state`, in equip order.
    pub fn djinn_in_state(&self, state: DjinnState) -> impl Iterator<Item = &Djinn> {
        self.equipped_djinn
            .iter()
            .filter(move |d| self.tracker(&d.id).is_some_and(|t| t.state == state))
    }

    /// Equipped Djinn that currently provide bonuses and grants.
    pub fn set_djinn(&self) -> impl Iterator<Item = &Djinn> {
        self.djinn_in_state(DjinnState::Set)
    }

    pub fn living_units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(|u| u.is_alive())
    }

    pub fn is_wiped(&self) -> bool {
        self.units.iter().all(Unit::is_ko)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{Element, Stats};

    fn unit(id: &str) -> Unit {
        Unit::new(id, Element::Venus, 1, Stats::new(50, 10, 10, 10, 10, 10), Stats::ZERO)
    }

    #[test]
    fn trackers_exist_for_equipped_djinn() {
        let team = Team::new(
            [unit("a"), unit("b")],
            [
                Djinn::new("flint", Element::Venus),
                Djinn::new("forge", Element::Mars),
            ],
        )
        .unwrap();

        assert_eq!(team.djinn_trackers().len(), 2);
        assert!(team.djinn_trackers().values().all(DjinnTracker::is_set));
        assert_eq!(team.set_djinn().count(), 2);
    }

    #[test]
    fn rejects_oversized_rosters() {
        let units = ["a", "b", "c", "d", "e"].map(unit);
        assert!(matches!(
            Team::new(units, []),
            Err(TeamError::InvalidUnitCount { count: 5, .. })
        ));

        let djinn = ["w", "x", "y", "z"].map(|id| Djinn::new(id, Element::Mars));
        assert!(matches!(
            Team::new([unit("a")], djinn),
            Err(TeamError::TooManyDjinn { count: 4, .. })
        ));
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            Team::new([unit("a"), unit("a")], []),
            Err(TeamError::DuplicateUnit(UnitId::new("a")))
        );
        assert_eq!(
            Team::new(
                [unit("a")],
                [
                    Djinn::new("flint", Element::Venus),
                    Djinn::new("flint", Element::Venus)
                ]
            ),
            Err(TeamError::DuplicateDjinn(DjinnId::new("flint")))
        );
    }
}
