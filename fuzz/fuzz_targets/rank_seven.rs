#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate poker_hand;
use poker_hand::core::{CardIter, Hand};
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(h) = Hand::new_from_str(s) {
            if h.len() == 7 {
                let r_seven = h.rank().unwrap();
                let r_five_max = CardIter::new(h.cards(), 5)
                    .map(|cards| Hand::new_with_cards(cards).unwrap().rank().unwrap())
                    .map(|eval| eval.strength())
                    .max()
                    .unwrap();
                assert_eq!(r_five_max, r_seven.strength());
            }
        }
    }
});
