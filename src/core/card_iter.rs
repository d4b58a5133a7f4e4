use crate::core::card::Card;

/// Iterator over every `num_cards` sized combination of a set of
/// cards. Combinations come out in lexicographic order of the input
/// positions.
///
/// ```
/// use poker_hand::core::{CardIter, Deck};
///
/// let cards = Deck::ordered_cards();
/// assert_eq!(21, CardIter::new(&cards[..7], 5).count());
/// ```
#[derive(Debug)]
pub struct CardIter {
    // All the possible cards that can be dealt
    possible_cards: Vec<Card>,

    // Offsets of the next combination, None when done.
    idx: Option<Vec<usize>>,
}

impl CardIter {
    pub fn new(possible_cards: &[Card], num_cards: usize) -> CardIter {
        let idx = if num_cards <= possible_cards.len() {
            Some((0..num_cards).collect())
        } else {
            None
        };
        CardIter {
            possible_cards: possible_cards.to_vec(),
            idx,
        }
    }
}

impl Iterator for CardIter {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        let idx = self.idx.as_mut()?;
        let result: Vec<Card> = idx.iter().map(|i| self.possible_cards[*i]).collect();

        // Find the right most offset that can still move forward
        // leaving room for every offset after it.
        let n = self.possible_cards.len();
        let k = idx.len();
        match (0..k).rev().find(|&level| idx[level] < n - k + level) {
            Some(level) => {
                idx[level] += 1;
                for after in level + 1..k {
                    idx[after] = idx[after - 1] + 1;
                }
            }
            None => self.idx = None,
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Deck, Suit, Value};

    #[test]
    fn test_iter_one() {
        let cards = vec![Card::new(Value::Two, Suit::Spade)];

        for combo in CardIter::new(&cards, 1) {
            assert_eq!(1, combo.len());
        }
        assert_eq!(1, CardIter::new(&cards, 1).count());
    }

    #[test]
    fn test_iter_two() {
        let cards = vec![
            Card::new(Value::Two, Suit::Spade),
            Card::new(Value::Three, Suit::Spade),
            Card::new(Value::Four, Suit::Spade),
        ];

        // Make sure that we get the correct number back.
        assert_eq!(3, CardIter::new(&cards, 2).count());

        // Make sure that everything has two cards and they are different.
        for combo in CardIter::new(&cards, 2) {
            assert_eq!(2, combo.len());
            assert!(combo[0] != combo[1]);
        }
    }

    #[test]
    fn test_too_many_requested() {
        let cards = Deck::ordered_cards();
        assert_eq!(0, CardIter::new(&cards[..4], 5).count());
    }

    #[test]
    fn test_exact_size() {
        let cards = Deck::ordered_cards();
        let all: Vec<Vec<Card>> = CardIter::new(&cards[..5], 5).collect();
        assert_eq!(vec![cards[..5].to_vec()], all);
    }

    #[test]
    fn test_seven_choose_five() {
        let cards = Deck::ordered_cards();
        let combos: Vec<Vec<Card>> = CardIter::new(&cards[..7], 5).collect();
        assert_eq!(21, combos.len());
        assert_eq!(cards[..5].to_vec(), combos[0]);
        assert_eq!(cards[2..7].to_vec(), combos[20]);
    }

    #[test]
    #[ignore]
    fn test_iter_deck() {
        let cards = Deck::ordered_cards();
        assert_eq!(2_598_960, CardIter::new(&cards, 5).count());
    }
}
