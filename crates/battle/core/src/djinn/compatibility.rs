//! Per-unit element relationship to each Djinn.

use crate::state::{Element, Team, Unit};

/// How a unit's element relates to a Djinn's element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum ElementCompatibility {
    Same,
    Counter,
    Neutral,
}

impl ElementCompatibility {
    /// Flat (atk, def) delta one Set Djinn gives a unit with this relationship.
    pub const fn stat_delta(self) -> RelationshipBonus {
        match self {
            ElementCompatibility::Same => RelationshipBonus { atk: 4, def: 3 },
            ElementCompatibility::Counter => RelationshipBonus { atk: -3, def: -2 },
            ElementCompatibility::Neutral => RelationshipBonus { atk: 2, def: 2 },
        }
    }
}

/// Resolves the relationship between a unit element and a Djinn element.
///
/// Matching elements are `Same`; the axis opposites (Venus/Mars and
/// Mercury/Jupiter) are `Counter`; everything else, including any pairing
/// with a lone Neutral, is `Neutral`.
pub fn element_compatibility(unit: Element, djinn: Element) -> ElementCompatibility {
    if unit == djinn {
        ElementCompatibility::Same
    } else if unit.opposite() == Some(djinn) {
        ElementCompatibility::Counter
    } else {
        ElementCompatibility::Neutral
    }
}

/// Summed relationship deltas for one unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationshipBonus {
    pub atk: i32,
    pub def: i32,
}

impl core::ops::Add for RelationshipBonus {
    type Output = RelationshipBonus;

    fn add(self, rhs: RelationshipBonus) -> RelationshipBonus {
        RelationshipBonus {
            atk: self.atk + rhs.atk,
            def: self.def + rhs.def,
        }
    }
}

/// Relationship deltas summed over the team's Set Djinn.
pub fn relationship_bonus(unit: &Unit, team: &Team) -> RelationshipBonus {
    team.set_djinn()
        .map(|d| element_compatibility(unit.element, d.element).stat_delta())
        .fold(RelationshipBonus::default(), core::ops::Add::add)
}
