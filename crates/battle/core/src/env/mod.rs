//! Read-only collaborators of the orchestrator.
//!
//! The [`Env`] aggregate bundles the ability catalog, the combat resolver,
//! the opponent decision procedure and the tunable config so the engine can
//! reach everything without hard coupling to concrete implementations. The
//! [`Prng`] is not part of it; it is the only mutable collaborator and is
//! threaded by `&mut` alongside.
mod abilities;
mod rng;

pub use abilities::{AbilityCatalog, AbilityOracle};
pub use rng::{Prng, PrngSnapshot, derive_seed};

use crate::ai::DecisionMaker;
use crate::combat::CombatResolver;
use crate::config::BattleConfig;

/// Aggregates the collaborators required by round execution.
pub struct Env<'a, A, C, D>
where
    A: AbilityOracle + ?Sized,
    C: CombatResolver + ?Sized,
    D: DecisionMaker + ?Sized,
{
    abilities: &'a A,
    combat: &'a C,
    decisions: &'a D,
    config: &'a BattleConfig,
}

pub type BattleEnv<'a> =
    Env<'a, dyn AbilityOracle + 'a, dyn CombatResolver + 'a, dyn DecisionMaker + 'a>;

impl<A, C, D> Clone for Env<'_, A, C, D>
where
    A: AbilityOracle + ?Sized,
    C: CombatResolver + ?Sized,
    D: DecisionMaker + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, C, D> Copy for Env<'_, A, C, D>
where
    A: AbilityOracle + ?Sized,
    C: CombatResolver + ?Sized,
    D: DecisionMaker + ?Sized,
{
}

impl<'a, A, C, D> Env<'a, A, C, D>
where
    A: AbilityOracle + ?Sized,
    C: CombatResolver + ?Sized,
    D: DecisionMaker + ?Sized,
{
    pub fn new(
        abilities: &'a A,
        combat: &'a C,
        decisions: &'a D,
        config: &'a BattleConfig,
    ) -> Self {
        Self {
            abilities,
            combat,
            decisions,
            config,
        }
    }

    pub fn abilities(&self) -> &'a A {
        self.abilities
    }

    pub fn combat(&self) -> &'a C {
        self.combat
    }

    pub fn decisions(&self) -> &'a D {
        self.decisions
    }

    pub fn config(&self) -> &'a BattleConfig {
        self.config
    }
}

impl<'a, A, C, D> Env<'a, A, C, D>
where
    A: AbilityOracle + 'a,
    C: CombatResolver + 'a,
    D: DecisionMaker + 'a,
{
    /// Converts this environment into a trait-object based [`BattleEnv`].
    pub fn into_battle_env(self) -> BattleEnv<'a> {
        let abilities: &'a dyn AbilityOracle = self.abilities;
        let combat: &'a dyn CombatResolver = self.combat;
        let decisions: &'a dyn DecisionMaker = self.decisions;
        Env::new(abilities, combat, decisions, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::HeuristicAi;
    use crate::combat::StandardCombat;
    use crate::state::{Ability, AbilityKind};

    #[test]
    fn battle_env_exposes_collaborators() {
        let catalog: AbilityCatalog = [Ability::new("cure", AbilityKind::Healing)]
            .into_iter()
            .collect();
        let combat = StandardCombat::default();
        let ai = HeuristicAi::new();
        let config = BattleConfig::default();

        let env = Env::new(&catalog, &combat, &ai, &config).into_battle_env();
        let copy = env;
        assert!(copy.abilities().ability(&"cure".into()).is_some());
        assert_eq!(env.config().poison_percent, BattleConfig::DEFAULT_POISON_PERCENT);
    }
}
