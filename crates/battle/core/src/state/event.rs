//! Observable occurrences emitted while a round resolves.
//!
//! The log is append-only and consumed by presentation layers. The simulator
//! never reads it back, so events carry exactly what a renderer needs and
//! nothing the engine depends on.

use super::battle::BattleOutcome;
use super::types::{AbilityId, DjinnId, StatusEffectKind, StatusTag, UnitId};

/// Why a queued action did not happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case")]
pub enum PreventReason {
    Frozen,
    Stunned,
    Paralyzed,
}

/// One entry in a round's event log.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BattleEvent {
    RoundStarted {
        round: u32,
    },

    /// A unit lost Djinn bonuses because Djinn went to Standby.
    DjinnStandby {
        unit_id: UnitId,
        djinn_ids: Vec<DjinnId>,
        atk_delta: i32,
        def_delta: i32,
    },

    /// A unit regained Djinn bonuses because Djinn returned to Set.
    DjinnRecovered {
        unit_id: UnitId,
        djinn_ids: Vec<DjinnId>,
        atk_delta: i32,
        def_delta: i32,
    },

    Summon {
        djinn_ids: Vec<DjinnId>,
        damage: i32,
        target_ids: Vec<UnitId>,
    },

    AbilityUsed {
        caster_id: UnitId,
        /// `None` for a basic attack.
        ability_id: Option<AbilityId>,
        target_ids: Vec<UnitId>,
    },

    Hit {
        /// `None` for summon damage.
        source_id: Option<UnitId>,
        target_id: UnitId,
        amount: i32,
        critical: bool,
        remaining_hp: i32,
    },

    Miss {
        source_id: UnitId,
        target_id: UnitId,
    },

    Heal {
        source_id: Option<UnitId>,
        target_id: UnitId,
        amount: i32,
    },

    StatusApplied {
        target_id: UnitId,
        status: StatusEffectKind,
        duration: u32,
    },

    /// Damage or healing from an effect tick; negative `hp_delta` is damage.
    StatusTicked {
        unit_id: UnitId,
        status: StatusTag,
        hp_delta: i32,
    },

    StatusExpired {
        unit_id: UnitId,
        status: StatusTag,
    },

    ActionPrevented {
        unit_id: UnitId,
        reason: PreventReason,
    },

    ManaGenerated {
        source_id: UnitId,
        amount: u32,
        new_total: u32,
    },

    UnitKnockedOut {
        unit_id: UnitId,
    },

    BattleEnd {
        outcome: BattleOutcome,
    },
}
