/// Battle configuration constants and tunable parameters.
///
/// Capacity limits are compile-time constants because they size the bounded
/// collections in [`crate::state`]. Everything else is a runtime-tunable value
/// loaded from `config.toml` by the content crate, with defaults matching the
/// shipped balance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Poison damage per tick, as a percentage of max HP.
    pub poison_percent: u32,
    /// Burn damage per tick, as a percentage of max HP.
    pub burn_percent: u32,
    /// Chance (0-100) that a frozen unit thaws when its freeze ticks.
    pub freeze_break_chance: u32,
    /// Chance (0-100) that a paralyzed unit fails an action attempt.
    pub paralyze_fail_chance: u32,
    /// Duration used for buff/debuff abilities that do not specify one.
    pub default_buff_duration: u32,
    /// Summon damage indexed by activation count minus one.
    pub summon_damage: [i32; Self::MAX_EQUIPPED_DJINN],
    /// Team mana restored by a basic attack that connects.
    pub mana_per_basic_hit: u32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Units per team; also the number of queue slots.
    pub const PARTY_SIZE: usize = 4;
    pub const MAX_EQUIPPED_DJINN: usize = 3;
    pub const MAX_STATUS_EFFECTS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_POISON_PERCENT: u32 = 8;
    pub const DEFAULT_BURN_PERCENT: u32 = 10;
    pub const DEFAULT_FREEZE_BREAK_CHANCE: u32 = 30;
    pub const DEFAULT_PARALYZE_FAIL_CHANCE: u32 = 25;
    pub const DEFAULT_BUFF_DURATION: u32 = 3;
    pub const DEFAULT_SUMMON_DAMAGE: [i32; Self::MAX_EQUIPPED_DJINN] = [30, 80, 150];
    pub const DEFAULT_MANA_PER_BASIC_HIT: u32 = 1;

    pub fn new() -> Self {
        Self {
            poison_percent: Self::DEFAULT_POISON_PERCENT,
            burn_percent: Self::DEFAULT_BURN_PERCENT,
            freeze_break_chance: Self::DEFAULT_FREEZE_BREAK_CHANCE,
            paralyze_fail_chance: Self::DEFAULT_PARALYZE_FAIL_CHANCE,
            default_buff_duration: Self::DEFAULT_BUFF_DURATION,
            summon_damage: Self::DEFAULT_SUMMON_DAMAGE,
            mana_per_basic_hit: Self::DEFAULT_MANA_PER_BASIC_HIT,
        }
    }

    /// Summon damage dealt to each struck enemy when `count` Djinn are
    /// activated together. Zero Djinn deal nothing; counts past the table
    /// saturate at the mega-summon entry.
    pub fn summon_damage_for(&self, count: usize) -> i32 {
        match count {
            0 => 0,
            n => self.summon_damage[n.min(Self::MAX_EQUIPPED_DJINN) - 1],
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
