#![allow(dead_code)]

use battle_core::{
    Ability, AbilityCatalog, AbilityGroups, AbilityKind, BattleConfig, BattleState, Djinn,
    Element, HeuristicAi, StandardCombat, Stats, TargetShape, Team, Unit, UnitId,
    create_battle_state, queue_action,
};

/// Owns every collaborator an engine borrows.
pub struct Fixture {
    pub catalog: AbilityCatalog,
    pub combat: StandardCombat,
    pub ai: HeuristicAi,
    pub config: BattleConfig,
}

impl Fixture {
    pub fn new() -> Self {
        let config = BattleConfig::default();
        Self {
            catalog: catalog(),
            combat: StandardCombat::new(config.clone()),
            ai: HeuristicAi::new(),
            config,
        }
    }

    pub fn engine(&self) -> battle_core::BattleEngine<'_> {
        battle_core::BattleEngine::new(
            battle_core::Env::new(&self.catalog, &self.combat, &self.ai, &self.config)
                .into_battle_env(),
        )
    }
}

pub fn catalog() -> AbilityCatalog {
    [
        Ability::new("ragnarok", AbilityKind::Physical)
            .with_element(Element::Venus)
            .with_mana_cost(2)
            .with_power(30),
        Ability::new("quake", AbilityKind::Elemental)
            .with_element(Element::Venus)
            .with_mana_cost(1)
            .with_power(12)
            .with_target(TargetShape::All),
        Ability::new("flare", AbilityKind::Elemental)
            .with_element(Element::Mars)
            .with_mana_cost(1)
            .with_power(18),
        Ability::new("ply", AbilityKind::Healing)
            .with_element(Element::Mercury)
            .with_mana_cost(1)
            .with_power(25),
        Ability::new("stone-spire", AbilityKind::Elemental)
            .with_element(Element::Venus)
            .with_mana_cost(2)
            .with_power(35),
    ]
    .into_iter()
    .collect()
}

pub fn adept(id: &str, element: Element, hp: i32, spd: i32) -> Unit {
    Unit::new(
        id,
        element,
        5,
        Stats::new(hp, 30, 14, 8, 12, spd),
        Stats::new(5, 2, 2, 1, 2, 1),
    )
}

pub fn monster(id: &str, hp: i32, atk: i32) -> Unit {
    Unit::new(id, Element::Neutral, 1, Stats::new(hp, 10, atk, 6, 6, 7), Stats::ZERO)
}

pub fn learn(catalog: &AbilityCatalog, id: &str) -> Ability {
    catalog
        .iter()
        .find(|a| a.id.as_str() == id)
        .cloned()
        .expect("ability is in the catalog")
}

/// Three-adept party with three Djinn, against two sturdy monsters.
pub fn party_state(catalog: &AbilityCatalog, enemy_hp: i32) -> BattleState {
    let isaac = adept("isaac", Element::Venus, 90, 12).with_ability(learn(catalog, "ragnarok"));
    let garet = adept("garet", Element::Mars, 100, 9).with_ability(learn(catalog, "flare"));
    let mia = adept("mia", Element::Mercury, 80, 11).with_ability(learn(catalog, "ply"));

    let flint = Djinn::new("flint", Element::Venus).with_grants(
        "isaac",
        AbilityGroups {
            same: vec!["stone-spire".into()],
            ..AbilityGroups::default()
        },
    );
    let team = Team::new(
        [isaac, garet, mia],
        [
            flint,
            Djinn::new("forge", Element::Mars),
            Djinn::new("fizz", Element::Mercury),
        ],
    )
    .expect("valid team");

    create_battle_state(
        &team,
        vec![monster("golem", enemy_hp, 5), monster("ghoul", enemy_hp, 5)],
        catalog,
    )
}

/// Queues a basic attack for every player unit on the first living enemy.
pub fn queue_basic_attacks(state: &BattleState) -> BattleState {
    let target: UnitId = state
        .living_enemies()
        .next()
        .or_else(|| state.enemies.first())
        .map(|u| u.id.clone())
        .expect("battle has enemies");
    let ids: Vec<UnitId> = state.player_team.units().iter().map(|u| u.id.clone()).collect();
    ids.iter().fold(state.clone(), |state, id| {
        queue_action(&state, id, None, vec![target.clone()]).expect("basic attacks are free")
    })
}
