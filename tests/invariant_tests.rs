//! Property-based tests: session invariants hold under arbitrary input.

use std::time::Duration;

use memory_match::cards::is_well_formed;
use memory_match::{
    Action, Card, CardId, GameController, GameStatus, SelectOutcome, Session, CARD_COUNT,
    MAX_ATTEMPTS,
};
use proptest::prelude::*;

// Raw ids 0..14 include two that never exist.
fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        8 => (0u32..14).prop_map(|id| Action::Select(CardId::new(id))),
        4 => (0u64..1500).prop_map(|ms| Action::Tick(Duration::from_millis(ms))),
        1 => Just(Action::Restart),
    ]
}

fn new_game(seed: u64) -> GameController {
    GameController::builder().seed(seed).build().expect("valid config")
}

fn check_invariants(session: &Session) -> Result<(), TestCaseError> {
    let cards: Vec<Card> = session.cards.iter().cloned().collect();
    prop_assert!(is_well_formed(&cards));
    prop_assert_eq!(cards.len(), CARD_COUNT);

    prop_assert!(session.selection.len() <= 2);
    prop_assert!(session.attempts <= MAX_ATTEMPTS);

    for card in &cards {
        if card.is_matched {
            prop_assert!(card.is_flipped);
        }
    }

    // Face-up unmatched cards are exactly the selection.
    let mut face_up: Vec<CardId> = cards
        .iter()
        .filter(|c| c.is_flipped && !c.is_matched)
        .map(|c| c.id)
        .collect();
    let mut selected: Vec<CardId> = session.selection.to_vec();
    face_up.sort();
    selected.sort();
    prop_assert_eq!(face_up, selected);

    if session.is_resolving {
        prop_assert_eq!(session.selection.len(), 2);
    }

    prop_assert_eq!(session.status == GameStatus::Won, session.all_matched());
    if session.status == GameStatus::Lost {
        prop_assert_eq!(session.attempts, MAX_ATTEMPTS);
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_invariants_hold(seed in any::<u64>(), actions in prop::collection::vec(action_strategy(), 0..200)) {
        let mut game = new_game(seed);
        check_invariants(game.session())?;

        for action in actions {
            let before = game.session().clone();
            game.apply(action);
            let after = game.session();
            check_invariants(after)?;

            if after.epoch == before.epoch {
                prop_assert!(after.attempts >= before.attempts);
                if before.status.is_over() {
                    prop_assert_eq!(after, &before);
                }
            } else {
                prop_assert_eq!(action, Action::Restart);
                prop_assert_eq!(after.attempts, 0);
                prop_assert_eq!(after.status, GameStatus::Playing);
            }
        }
    }

    #[test]
    fn test_ignored_clicks_change_nothing(seed in any::<u64>(), actions in prop::collection::vec(action_strategy(), 0..100), probe in 0u32..14) {
        let mut game = new_game(seed);
        for action in actions {
            game.apply(action);
        }

        let before = game.session().clone();
        let history_len = game.history().len();
        if let SelectOutcome::Ignored(_) = game.select_card(CardId::new(probe)) {
            prop_assert_eq!(game.session(), &before);
            prop_assert_eq!(game.history().len(), history_len);
        }
    }

    #[test]
    fn test_resolving_blocks_every_click(seed in any::<u64>(), probe in 0u32..14) {
        let mut game = new_game(seed);
        let ids: Vec<CardId> = game.session().card_ids().collect();

        // Find a non-matching pair and flip it.
        let first = ids[0];
        let symbol = game.session().card(first).unwrap().symbol;
        let second = ids
            .iter()
            .copied()
            .find(|&id| game.session().card(id).unwrap().symbol != symbol)
            .unwrap();
        game.select_card(first);
        game.select_card(second);
        prop_assert!(game.session().is_resolving);

        let before = game.session().clone();
        prop_assert!(matches!(game.select_card(CardId::new(probe)), SelectOutcome::Ignored(_)));
        prop_assert_eq!(game.session(), &before);
    }

    #[test]
    fn test_every_deal_is_well_formed(seed in any::<u64>(), restarts in 0usize..5) {
        let mut game = new_game(seed);
        for _ in 0..restarts {
            game.restart();
        }
        let session = game.session();
        let cards: Vec<Card> = session.cards.iter().cloned().collect();
        prop_assert!(is_well_formed(&cards));
        prop_assert!(cards.iter().all(|c| !c.is_flipped && !c.is_matched));
    }
}
