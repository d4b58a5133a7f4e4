#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate poker_hand;

use libfuzzer_sys::fuzz_target;
use poker_hand::core::{Card, Hand, PokerError, TIER_STEP};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub cards: Vec<Card>,
}

fuzz_target!(|input: Input| {
    let mut hand = Hand::new();
    for card in input.cards.into_iter().take(9) {
        match hand.add_card(card) {
            Ok(()) => {}
            Err(PokerError::DuplicateCardInHand(dup)) => assert!(hand.contains(&dup)),
            Err(e) => panic!("Unexpected error {e}"),
        }
    }

    if hand.is_empty() {
        assert_eq!(Err(PokerError::EmptyHand), hand.score());
        return;
    }

    let first = hand.evaluate().unwrap().clone();
    let tier = first.rank().tier();
    assert!((1..=10).contains(&tier));
    assert!(first.score() >= tier * TIER_STEP);
    assert!(first.cards().len() <= 5);
    assert_eq!(&first, hand.evaluate().unwrap());
});
