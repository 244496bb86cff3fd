//! Elemental affinities shared by units, abilities and Djinn.

/// The five elements. Declaration order is the canonical order used whenever
/// elements must be ranked (e.g. synergy tie-breaks).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Venus,
    Mars,
    Mercury,
    Jupiter,
    Neutral,
}

impl Element {
    /// Number of elements, for fixed-size count tables.
    pub const COUNT: usize = 5;

    /// Position in canonical order.
    pub const fn index(self) -> usize {
        match self {
            Element::Venus => 0,
            Element::Mars => 1,
            Element::Mercury => 2,
            Element::Jupiter => 3,
            Element::Neutral => 4,
        }
    }

    /// Opposing element on the same axis (Venus/Mars, Mercury/Jupiter).
    ///
    /// Neutral has no opposite.
    pub const fn opposite(self) -> Option<Element> {
        match self {
            Element::Venus => Some(Element::Mars),
            Element::Mars => Some(Element::Venus),
            Element::Mercury => Some(Element::Jupiter),
            Element::Jupiter => Some(Element::Mercury),
            Element::Neutral => None,
        }
    }

    /// Element this one deals bonus damage against.
    ///
    /// The damage cycle is Venus → Jupiter → Mercury → Mars → Venus.
    pub const fn strong_against(self) -> Option<Element> {
        match self {
            Element::Venus => Some(Element::Jupiter),
            Element::Jupiter => Some(Element::Mercury),
            Element::Mercury => Some(Element::Mars),
            Element::Mars => Some(Element::Venus),
            Element::Neutral => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn canonical_order_matches_index() {
        for (position, element) in Element::iter().enumerate() {
            assert_eq!(element.index(), position);
        }
        assert_eq!(Element::iter().count(), Element::COUNT);
    }

    #[test]
    fn opposites_are_symmetric() {
        for element in Element::iter() {
            if let Some(opposite) = element.opposite() {
                assert_eq!(opposite.opposite(), Some(element));
            }
        }
    }

    #[test]
    fn advantage_cycle_has_no_self_loops() {
        for element in Element::iter() {
            assert_ne!(element.strong_against(), Some(element));
        }
    }
}
