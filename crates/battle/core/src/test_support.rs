//! Shared fixtures for unit tests.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use crate::state::{BattlePhase, BattleState, Element, Stats, Team, Unit};

/// A planning-phase state with no units on either side.
pub(crate) fn empty_state() -> BattleState {
    BattleState {
        player_team: Team::empty(),
        enemies: Vec::new(),
        phase: BattlePhase::Planning,
        round_number: 1,
        queued_actions: Default::default(),
        queued_djinn: ArrayVec::new(),
        remaining_mana: 0,
        max_mana: 0,
        djinn_recovery_timers: BTreeMap::new(),
        execution_index: 0,
    }
}

/// Level-1 unit with no growth, equipment or abilities.
pub(crate) fn unit(id: &str, element: Element, hp: i32, atk: i32, def: i32, spd: i32) -> Unit {
    Unit::new(id, element, 1, Stats::new(hp, 20, atk, def, 10, spd), Stats::ZERO)
}

/// Two-versus-one planning state with full mana and no Djinn.
pub(crate) fn duel_state() -> BattleState {
    let team = Team::new(
        [
            unit("isaac", Element::Venus, 80, 14, 8, 12),
            unit("mia", Element::Mercury, 60, 8, 6, 10),
        ],
        [],
    )
    .expect("fixture team is valid");
    BattleState {
        remaining_mana: 2,
        max_mana: 2,
        player_team: team,
        enemies: vec![unit("slime", Element::Neutral, 40, 9, 4, 6)],
        ..empty_state()
    }
}
