//! Headless battle simulator.
//!
//! Loads content, assembles an encounter, plays it with the auto-queue
//! policy and prints every round's event log to stdout as JSON lines.
//! Logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! BATTLE_SEED=7 BATTLE_ENCOUNTER=golem-lair cargo run -p battle-sim
//! RUST_LOG=battle_core=debug cargo run -p battle-sim
//! ```

mod config;
mod policy;

use std::io::{self, Write};

use anyhow::Result;
use battle_content::ContentFactory;
use battle_core::{
    BattleEngine, BattleEvent, Env, HeuristicAi, Prng, StandardCombat, derive_seed,
};
use serde::Serialize;

use crate::config::SimConfig;

/// One line of output.
#[derive(Serialize)]
struct EventLine<'a> {
    round: u32,
    event: &'a BattleEvent,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    tracing::info!(
        seed = config.seed,
        encounter = %config.encounter,
        data_dir = %config.data_dir.display(),
        "Starting battle simulator"
    );

    let setup = ContentFactory::new(&config.data_dir).build_battle(&config.encounter)?;
    let combat = StandardCombat::new(setup.config.clone());
    let ai = HeuristicAi::new();
    let engine = BattleEngine::new(
        Env::new(&setup.abilities, &combat, &ai, &setup.config).into_battle_env(),
    );

    let mut rng = Prng::new(derive_seed(config.seed, &setup.encounter.id));
    let mut state = setup.initial_state();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    while !state.phase.is_over() && state.round_number <= config.max_rounds {
        let planned = policy::plan_round(&state)?;
        let preview = engine.preview_turn_order(&planned, &rng);
        tracing::debug!(round = planned.round_number, ?preview, "turn order preview");

        let round = planned.round_number;
        let outcome = engine.try_execute_round(&planned, &mut rng)?;
        for event in &outcome.events {
            serde_json::to_writer(&mut out, &EventLine { round, event })?;
            writeln!(out)?;
        }
        state = outcome.state;
    }
    out.flush()?;

    if state.phase.is_over() {
        tracing::info!(
            phase = ?state.phase,
            rounds = state.round_number,
            actions = state.execution_index,
            draws = rng.draw_count(),
            digest = %hex::encode(state.digest()),
            "Battle finished"
        );
    } else {
        tracing::warn!(
            max_rounds = config.max_rounds,
            digest = %hex::encode(state.digest()),
            "Round limit reached before the battle ended"
        );
    }

    Ok(())
}
