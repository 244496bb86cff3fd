//! Root battle state.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use super::types::{AbilityId, DjinnId, Team, Unit, UnitId};
use crate::config::BattleConfig;

/// Which side of the battle a unit fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Phase of the round state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum BattlePhase {
    Planning,
    Executing,
    Victory,
    Defeat,
}

impl BattlePhase {
    pub const fn is_over(self) -> bool {
        matches!(self, BattlePhase::Victory | BattlePhase::Defeat)
    }
}

/// Terminal result of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

impl From<BattleOutcome> for BattlePhase {
    fn from(outcome: BattleOutcome) -> Self {
        match outcome {
            BattleOutcome::Victory => BattlePhase::Victory,
            BattleOutcome::Defeat => BattlePhase::Defeat,
        }
    }
}

/// One filled queue slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueuedAction {
    pub unit_id: UnitId,
    /// `None` is a basic attack.
    pub ability_id: Option<AbilityId>,
    pub target_ids: Vec<UnitId>,
    pub mana_cost: u32,
}

impl QueuedAction {
    pub fn basic_attack(unit_id: UnitId, target: UnitId) -> Self {
        Self {
            unit_id,
            ability_id: None,
            target_ids: vec![target],
            mana_cost: 0,
        }
    }

    pub fn is_basic_attack(&self) -> bool {
        self.ability_id.is_none()
    }
}

/// Queue slots, index-aligned with the player roster.
pub type QueueSlots = [Option<QueuedAction>; BattleConfig::PARTY_SIZE];

/// Single root of truth for an encounter.
///
/// Operations in [`crate::engine`] take `&BattleState` and return a new value;
/// nothing in this crate mutates a state a caller still holds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub player_team: Team,
    pub enemies: Vec<Unit>,
    pub phase: BattlePhase,
    /// Starts at 1.
    pub round_number: u32,
    pub queued_actions: QueueSlots,
    pub queued_djinn: ArrayVec<DjinnId, { BattleConfig::MAX_EQUIPPED_DJINN }>,
    pub remaining_mana: u32,
    pub max_mana: u32,
    /// Rounds until each spent Djinn returns to `Set`.
    pub djinn_recovery_timers: BTreeMap<DjinnId, u32>,
    /// Actions resolved since the battle began. Never reset.
    pub execution_index: u32,
}

impl BattleState {
    pub fn units(&self, side: Side) -> &[Unit] {
        match side {
            Side::Player => self.player_team.units(),
            Side::Enemy => &self.enemies,
        }
    }

    pub(crate) fn units_mut(&mut self, side: Side) -> &mut [Unit] {
        match side {
            Side::Player => self.player_team.units_mut(),
            Side::Enemy => &mut self.enemies,
        }
    }

    pub fn side_of(&self, id: &UnitId) -> Option<Side> {
        if self.player_team.unit(id).is_some() {
            Some(Side::Player)
        } else if self.enemies.iter().any(|u| &u.id == id) {
            Some(Side::Enemy)
        } else {
            None
        }
    }

    /// Looks a unit up on either side.
    pub fn unit(&self, id: &UnitId) -> Option<&Unit> {
        self.player_team
            .unit(id)
            .or_else(|| self.enemies.iter().find(|u| &u.id == id))
    }

    pub(crate) fn unit_mut(&mut self, id: &UnitId) -> Option<&mut Unit> {
        let side = self.side_of(id)?;
        self.units_mut(side).iter_mut().find(|u| &u.id == id)
    }

    /// Djinn context for stat calculation. Only the player side fields Djinn.
    pub fn team_context(&self, side: Side) -> &Team {
        match side {
            Side::Player => &self.player_team,
            Side::Enemy => Team::none(),
        }
    }

    pub fn living(&self, side: Side) -> impl Iterator<Item = &Unit> {
        self.units(side).iter().filter(|u| u.is_alive())
    }

    pub fn living_players(&self) -> impl Iterator<Item = &Unit> {
        self.living(Side::Player)
    }

    pub fn living_enemies(&self) -> impl Iterator<Item = &Unit> {
        self.living(Side::Enemy)
    }

    /// Every occupied roster index has a filled slot.
    pub fn is_queue_complete(&self) -> bool {
        let roster = self.player_team.units().len();
        self.queued_actions
            .iter()
            .take(roster)
            .all(Option::is_some)
    }

    /// Total mana committed by filled slots.
    pub fn queued_cost(&self) -> u32 {
        self.queued_actions
            .iter()
            .flatten()
            .map(|a| a.mana_cost)
            .sum()
    }

    /// Battle result if one side has no living units. A simultaneous wipe is
    /// a defeat.
    pub fn check_battle_end(&self) -> Option<BattleOutcome> {
        if self.living_players().next().is_none() {
            Some(BattleOutcome::Defeat)
        } else if self.living_enemies().next().is_none() {
            Some(BattleOutcome::Victory)
        } else {
            None
        }
    }

    /// SHA-256 of the bincode encoding of this state.
    ///
    /// Identical states always produce identical digests, which makes it a
    /// cheap equality check for replay and determinism tests.
    ///
    /// # Panics
    ///
    /// Panics if bincode cannot encode the state. Every field is a plain
    /// value or an ordered map, so encoding does not fail.
    #[cfg(feature = "serde")]
    pub fn digest(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        let bytes = bincode::serialize(self).expect("BattleState serialization should not fail");
        Sha256::digest(&bytes).into()
    }
}
