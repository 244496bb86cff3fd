//! Team-wide synergy bonus from the element mix of Set Djinn.

use crate::state::{Element, Team};

/// Result of the synergy lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DjinnSynergy {
    pub atk: i32,
    pub def: i32,
    /// Only the all-different three-Djinn mix grants speed.
    pub spd: i32,
    pub class_change: String,
    pub abilities_unlocked: Vec<String>,
}

impl DjinnSynergy {
    fn bonus(atk: i32, def: i32, class_change: impl Into<String>) -> Self {
        Self {
            atk,
            def,
            spd: 0,
            class_change: class_change.into(),
            abilities_unlocked: Vec::new(),
        }
    }

    fn unlocking(mut self, ability: impl Into<String>) -> Self {
        self.abilities_unlocked.push(ability.into());
        self
    }
}

/// Looks up the synergy bonus for a multiset of Djinn elements.
///
/// The result depends only on how many Djinn there are and how their
/// elements repeat. When several elements share the highest count, the
/// primary element is the first of them in canonical [`Element`] order.
/// Elements past the third are ignored.
pub fn calculate_djinn_synergy(elements: &[Element]) -> DjinnSynergy {
    let elements = &elements[..elements.len().min(3)];

    let mut counts = [0usize; Element::COUNT];
    for element in elements {
        counts[element.index()] += 1;
    }
    let max_count = counts.iter().copied().max().unwrap_or(0);
    let primary = primary_element(&counts, max_count);

    match (elements.len(), max_count, primary) {
        (0, _, _) | (_, _, None) => DjinnSynergy::bonus(0, 0, "Base"),
        (1, _, _) => DjinnSynergy::bonus(4, 3, "Adept"),
        (2, 2, Some(primary)) => DjinnSynergy::bonus(8, 5, format!("{primary} Warrior")),
        (2, _, _) => DjinnSynergy::bonus(5, 5, "Hybrid"),
        (_, 3, Some(primary)) => DjinnSynergy::bonus(12, 8, format!("{primary} Adept"))
            .unlocking(format!("{primary}-Ultimate")),
        (_, 2, Some(primary)) => {
            DjinnSynergy::bonus(8, 6, format!("{primary} Knight")).unlocking("Hybrid-Spell")
        }
        _ => {
            let mut mystic = DjinnSynergy::bonus(4, 4, "Mystic").unlocking("Elemental Harmony");
            mystic.spd = 4;
            mystic
        }
    }
}

fn primary_element(counts: &[usize; Element::COUNT], max_count: usize) -> Option<Element> {
    use strum::IntoEnumIterator;

    if max_count == 0 {
        return None;
    }
    Element::iter().find(|e| counts[e.index()] == max_count)
}

/// Synergy of the team's Djinn that are currently `Set`.
pub fn team_synergy(team: &Team) -> DjinnSynergy {
    let elements: Vec<Element> = team.set_djinn().map(|d| d.element).collect();
    calculate_djinn_synergy(&elements)
}
