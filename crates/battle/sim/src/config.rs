//! Simulator configuration from environment variables.
use std::env;
use std::path::PathBuf;

/// Settings for one headless run.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub seed: u32,
    pub data_dir: PathBuf,
    pub encounter: String,
    /// Rounds to play before giving up on an unfinished battle.
    pub max_rounds: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            data_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../content/data")),
            encounter: "mountain-pass".to_owned(),
            max_rounds: 50,
        }
    }
}

impl SimConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_SEED` - PRNG seed (default: 42)
    /// - `BATTLE_DATA_DIR` - Content directory (default: the shipped data)
    /// - `BATTLE_ENCOUNTER` - Encounter id (default: `mountain-pass`)
    /// - `BATTLE_MAX_ROUNDS` - Round limit (default: 50)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u32>("BATTLE_SEED") {
            config.seed = seed;
        }
        if let Some(dir) = read_env::<PathBuf>("BATTLE_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(encounter) = read_env::<String>("BATTLE_ENCOUNTER") {
            config.encounter = encounter;
        }
        if let Some(rounds) = read_env::<u32>("BATTLE_MAX_ROUNDS") {
            config.max_rounds = rounds.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
