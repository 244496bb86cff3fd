use battle_core::{
    BattleConfig, Element, Prng, StatKind, StatusEffect, StatusEffectKind, StatusTag, Stats,
    Unit, apply_status, tick_unit,
};

fn target() -> Unit {
    Unit::new("golem", Element::Venus, 1, Stats::new(100, 0, 10, 10, 10, 10), Stats::ZERO)
}

#[test]
fn reapplying_replaces_duration() {
    let unit = apply_status(&target(), StatusEffect::new(StatusEffectKind::Poison, 3));
    let unit = apply_status(&unit, StatusEffect::new(StatusEffectKind::Poison, 5));
    assert_eq!(unit.status_effects.len(), 1);
    assert_eq!(unit.status_effects.get(StatusTag::Poison).map(|e| e.duration), Some(5));

    let unit = apply_status(&unit, StatusEffect::new(StatusEffectKind::Poison, 2));
    assert_eq!(unit.status_effects.get(StatusTag::Poison).map(|e| e.duration), Some(2));
}

#[test]
fn reapplied_poison_ticks_once() {
    let unit = apply_status(&target(), StatusEffect::new(StatusEffectKind::Poison, 3));
    let unit = apply_status(&unit, StatusEffect::new(StatusEffectKind::Poison, 3));

    let outcome = tick_unit(&unit, &mut Prng::new(1), &BattleConfig::default());
    assert_eq!(outcome.unit.current_hp, 92);
}

#[test]
fn buffs_on_different_stats_coexist() {
    let atk = StatusEffectKind::Buff { stat: StatKind::Atk, modifier: 5 };
    let def = StatusEffectKind::Buff { stat: StatKind::Def, modifier: 3 };
    let unit = apply_status(&target(), StatusEffect::new(atk, 3));
    let unit = apply_status(&unit, StatusEffect::new(def, 3));
    let unit = apply_status(&unit, StatusEffect::new(atk, 1));

    assert_eq!(unit.status_effects.len(), 2);
    assert_eq!(unit.status_effects.stat_delta(StatKind::Atk), 5);
    assert_eq!(unit.status_effects.stat_delta(StatKind::Def), 3);
}

#[test]
fn different_types_stack() {
    let unit = apply_status(&target(), StatusEffect::new(StatusEffectKind::Poison, 3));
    let unit = apply_status(&unit, StatusEffect::new(StatusEffectKind::Burn, 3));
    assert!(unit.status_effects.has(StatusTag::Poison));
    assert!(unit.status_effects.has(StatusTag::Burn));

    let outcome = tick_unit(&unit, &mut Prng::new(1), &BattleConfig::default());
    assert_eq!(outcome.unit.current_hp, 82);
}
