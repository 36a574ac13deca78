use std::rc::Rc;

use yew::Reducible;
use yew_word_match::shuffle::seeded_rng;
use yew_word_match::{Catalog, DropOutcome, ItemId, MatchAction, MatchBoard};

fn drop_word(board: Rc<MatchBoard>, word: u32, image: u32) -> Rc<MatchBoard> {
    board.reduce(MatchAction::Drop {
        word_id: ItemId(word),
        image_id: ItemId(image),
    })
}

#[test]
fn full_session_from_embedded_catalog() {
    let catalog = Catalog::embedded().expect("embedded catalog");
    let board = Rc::new(catalog.deal(&mut seeded_rng(2024)));
    assert_eq!(board.total(), 6);

    let board = drop_word(board, 3, 3);
    assert_eq!(board.score(), 1);
    assert!(board.is_word_matched(ItemId(3)));
    assert!(board.is_image_matched(ItemId(3)));

    let board = drop_word(board, 1, 2);
    assert_eq!(board.score(), 1);
    assert_eq!(
        board.last_outcome,
        Some(DropOutcome::Mismatch {
            word_id: ItemId(1),
            image_id: ItemId(2)
        })
    );
    assert!(!board.is_word_matched(ItemId(1)));

    let mut board = board;
    let mut completions = 0;
    for id in [6, 2, 5, 1, 4] {
        board = drop_word(board, id, id);
        if let Some(DropOutcome::Matched { completed: true, .. }) = board.last_outcome {
            completions += 1;
        }
    }
    assert_eq!(board.score(), 6);
    assert!(board.is_complete());
    assert_eq!(completions, 1);

    // dropping again after the win changes nothing
    let board = drop_word(board, 4, 4);
    assert_eq!(board.last_outcome, Some(DropOutcome::AlreadyMatched));
    assert_eq!(board.score(), 6);
    assert_eq!(board.matches.len(), 6);
}

#[test]
fn matches_keep_discovery_order() {
    let catalog = Catalog::embedded().expect("embedded catalog");
    let mut board = catalog.deal(&mut seeded_rng(5));
    for id in [4, 2, 6] {
        board.attempt_match(ItemId(id), ItemId(id));
    }
    let order: Vec<u32> = board.matches.iter().map(|m| m.word_id.0).collect();
    assert_eq!(order, vec![4, 2, 6]);
}

#[test]
fn sessions_are_dealt_independently() {
    let catalog = Catalog::embedded().expect("embedded catalog");
    let mut rng = seeded_rng(77);
    let orders: Vec<Vec<ItemId>> = (0..20)
        .map(|_| catalog.deal(&mut rng).words.iter().map(|w| w.id).collect())
        .collect();
    assert!(orders.iter().any(|o| o != &orders[0]));
}
