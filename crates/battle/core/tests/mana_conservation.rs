mod common;

use battle_core::{BattleEvent, Prng, QueueError, clear_queued_action, queue_action};
use common::{Fixture, party_state, queue_basic_attacks};

#[test]
fn remaining_plus_queued_equals_max_while_planning() {
    let fixture = Fixture::new();
    let state = party_state(&fixture.catalog, 500);
    assert_eq!(state.max_mana, 3);

    let state = queue_action(&state, &"isaac".into(), Some("ragnarok".into()), vec!["golem".into()])
        .expect("ragnarok is affordable");
    assert_eq!(state.remaining_mana + state.queued_cost(), state.max_mana);

    let state = queue_action(&state, &"garet".into(), None, vec!["golem".into()]).unwrap();
    assert_eq!(state.remaining_mana + state.queued_cost(), state.max_mana);

    // Re-queueing refunds first.
    let state = queue_action(&state, &"isaac".into(), None, vec!["ghoul".into()]).unwrap();
    assert_eq!(state.remaining_mana, 3);
    assert_eq!(state.remaining_mana + state.queued_cost(), state.max_mana);

    let state = clear_queued_action(&state, &"garet".into()).unwrap();
    assert_eq!(state.remaining_mana + state.queued_cost(), state.max_mana);
}

#[test]
fn overspending_is_rejected() {
    let fixture = Fixture::new();
    let state = party_state(&fixture.catalog, 500);
    let state = queue_action(&state, &"isaac".into(), Some("ragnarok".into()), vec!["golem".into()]).unwrap();
    let state = queue_action(&state, &"garet".into(), Some("flare".into()), vec!["golem".into()]).unwrap();
    assert_eq!(state.remaining_mana, 0);

    let result = queue_action(&state, &"mia".into(), Some("ply".into()), vec!["isaac".into()]);
    assert!(matches!(
        result,
        Err(QueueError::InsufficientMana { needed: 1, remaining: 0 })
    ));
    assert_eq!(state.remaining_mana + state.queued_cost(), state.max_mana);
}

#[test]
fn budget_is_checked_before_execution() {
    let fixture = Fixture::new();
    let engine = fixture.engine();
    let mut state = queue_basic_attacks(&party_state(&fixture.catalog, 500));
    state.remaining_mana = 1;

    let result = engine.try_execute_round(&state, &mut Prng::new(1));
    assert!(matches!(
        result,
        Err(battle_core::RoundError::Precondition(QueueError::ManaBudgetInvalid { .. }))
    ));
}

#[test]
fn pool_refreshes_and_generation_never_exceeds_max() {
    let fixture = Fixture::new();
    let engine = fixture.engine();
    let state = queue_basic_attacks(&party_state(&fixture.catalog, 500));

    let outcome = engine.execute_round(&state, &mut Prng::new(8));
    for event in &outcome.events {
        if let BattleEvent::ManaGenerated { new_total, amount, .. } = event {
            assert!(*new_total <= outcome.state.max_mana);
            assert!(*amount > 0);
        }
    }
    assert_eq!(outcome.state.remaining_mana, outcome.state.max_mana);
    assert_eq!(outcome.state.queued_cost(), 0);
}
