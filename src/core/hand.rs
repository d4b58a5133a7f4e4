use std::fmt;
use std::str::FromStr;

use tracing::event;

use super::rank::classify;
use super::{Card, CardIter, Evaluation, PokerError, Suit, Value};

/// The number of cards that make a poker hand.
pub const HAND_SIZE: usize = 5;

/// A poker hand and its evaluator.
///
/// Cards are kept sorted by value, lowest first, and the hand keeps
/// a running count of each suit and each value as cards are added.
/// Evaluating reads those counts and caches the result until the
/// hand changes.
///
/// # Examples
///
/// ```
/// use poker_hand::core::{Hand, Rank};
///
/// let mut hand = Hand::new_from_str("AcTdTcThTs").unwrap();
/// let evaluation = hand.evaluate().unwrap();
///
/// assert_eq!(Rank::FourOfAKind, evaluation.rank());
/// assert_eq!("Four of a Kind Tens", evaluation.description());
/// assert_eq!(55, evaluation.score());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    suit_count: [u8; 4],
    value_count: [u8; 13],
    evaluation: Option<Evaluation>,
}

impl Hand {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(HAND_SIZE),
            ..Default::default()
        }
    }

    /// Build a hand from the given cards, failing on the first duplicate.
    pub fn new_with_cards<I: IntoIterator<Item = Card>>(cards: I) -> Result<Self, PokerError> {
        let mut hand = Self::new();
        for card in cards {
            hand.add_card(card)?;
        }
        Ok(hand)
    }

    /// Parse a hand written as back to back cards, `"AcTdTh"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand::core::{Card, Hand, PokerError, Suit, Value};
    ///
    /// let hand = Hand::new_from_str("AdKd").unwrap();
    /// assert_eq!(2, hand.len());
    /// assert!(hand.contains(&Card::new(Value::King, Suit::Diamond)));
    ///
    /// assert!(matches!(
    ///     Hand::new_from_str("AdAd"),
    ///     Err(PokerError::DuplicateCardInHand(_))
    /// ));
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, PokerError> {
        let mut chars = hand_string.chars();
        let mut hand = Self::new();

        while let Some(vc) = chars.next() {
            let v = Value::from_char(vc).ok_or(PokerError::UnexpectedValueChar)?;
            let s = chars
                .next()
                .ok_or(PokerError::TooFewChars)
                .and_then(|sc| Suit::from_char(sc).ok_or(PokerError::UnexpectedSuitChar))?;

            hand.add_card(Card::new(v, s))?;
        }

        Ok(hand)
    }

    /// Add a card keeping the cards sorted by value. Among cards
    /// of the same value the earlier one stays first.
    ///
    /// A card that is already in the hand is rejected and the hand
    /// is left as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand::core::{Card, Hand, PokerError, Suit, Value};
    ///
    /// let mut hand = Hand::new();
    /// let card = Card::new(Value::King, Suit::Club);
    ///
    /// hand.add_card(card).unwrap();
    /// assert_eq!(Err(PokerError::DuplicateCardInHand(card)), hand.add_card(card));
    /// assert_eq!(1, hand.len());
    /// ```
    pub fn add_card(&mut self, card: Card) -> Result<(), PokerError> {
        if self.contains(&card) {
            return Err(PokerError::DuplicateCardInHand(card));
        }

        let idx = self.cards.partition_point(|c| c.value <= card.value);
        self.cards.insert(idx, card);
        self.suit_count[card.suit as usize] += 1;
        self.value_count[card.value as usize] += 1;
        self.evaluation = None;

        event!(tracing::Level::TRACE, %card, len = self.cards.len(), "Added card to hand");
        Ok(())
    }

    /// Given a card, is it in the current hand?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards sorted by value, lowest first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// How many cards of this suit are in the hand.
    pub fn suit_count(&self, suit: Suit) -> u8 {
        self.suit_count[suit as usize]
    }

    /// How many cards of this value are in the hand.
    pub fn value_count(&self, value: Value) -> u8 {
        self.value_count[value as usize]
    }

    /// Empty the hand so that it can be used for the next deal.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.suit_count = [0; 4];
        self.value_count = [0; 13];
        self.evaluation = None;
    }

    /// The first suit with five or more cards.
    pub fn flush_suit(&self) -> Option<Suit> {
        Suit::suits()
            .into_iter()
            .find(|s| self.suit_count(*s) >= HAND_SIZE as u8)
    }

    /// The high card of the best straight in the hand.
    ///
    /// Values are walked from the ace down. A missing value restarts
    /// the run and a repeated value is skipped. The ace also counts
    /// below the two, in which case the five is the high card.
    pub fn straight_high(&self) -> Option<Value> {
        let mut run = 0;
        let mut top = Value::Ace;
        for v in Value::values().into_iter().rev() {
            if self.value_count(v) == 0 {
                run = 0;
                continue;
            }
            if run == 0 {
                top = v;
            }
            run += 1;
            if run == HAND_SIZE {
                return Some(top);
            }
        }

        // The run ending at the two can be finished by the ace.
        if run == HAND_SIZE - 1 && self.value_count(Value::Ace) > 0 {
            return Some(Value::Five);
        }
        None
    }

    /// Up to two values held more than once, highest value first.
    pub fn paired_values(&self) -> Vec<(Value, u8)> {
        Value::values()
            .into_iter()
            .rev()
            .map(|v| (v, self.value_count(v)))
            .filter(|(_, count)| *count >= 2)
            .take(2)
            .collect()
    }

    /// Evaluate the hand without touching the cache.
    ///
    /// Hands of up to five cards are classified directly. Larger hands
    /// try every five card combination and keep the strongest.
    pub fn rank(&self) -> Result<Evaluation, PokerError> {
        if self.is_empty() {
            return Err(PokerError::EmptyHand);
        }
        if self.len() <= HAND_SIZE {
            return Ok(classify(self));
        }

        let best = CardIter::new(&self.cards, HAND_SIZE)
            .filter_map(|combo| Hand::new_with_cards(combo).ok())
            .map(|five| classify(&five))
            .reduce(|best, next| {
                if next.strength() > best.strength() {
                    next
                } else {
                    best
                }
            })
            .ok_or(PokerError::EmptyHand)?;

        event!(
            tracing::Level::DEBUG,
            from = self.len(),
            best = %best,
            "Picked best five cards"
        );
        Ok(best)
    }

    /// Evaluate the hand. The result is kept until a card is added
    /// or the hand is cleared.
    pub fn evaluate(&mut self) -> Result<&Evaluation, PokerError> {
        if self.evaluation.is_none() {
            self.evaluation = Some(self.rank()?);
        }
        self.evaluation.as_ref().ok_or(PokerError::EmptyHand)
    }

    /// Shortcut for `evaluate().score()`.
    pub fn score(&mut self) -> Result<u32, PokerError> {
        self.evaluate().map(Evaluation::score)
    }

    /// Shortcut for `evaluate().description()`.
    pub fn description(&mut self) -> Result<&str, PokerError> {
        self.evaluate().map(Evaluation::description)
    }
}

/// Two hands are equal when they hold the same cards.
impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
    }
}

impl Eq for Hand {}

impl FromStr for Hand {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

/// Values joined by dashes, highest first: `A-10-10-10-10`.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: Vec<&str> = self.cards.iter().rev().map(|c| c.value.letter()).collect();
        write!(f, "{}", letters.join("-"))
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    use super::*;
    use crate::core::{Deck, FlatDeck, Rank};

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn test_add_keeps_value_order() {
        let mut hand = Hand::new();
        for c in ["9c", "2d", "Ah", "9s", "5c"] {
            hand.add_card(card(c)).unwrap();
        }
        let values: Vec<Value> = hand.iter().map(|c| c.value).collect();
        assert_eq!(
            vec![Value::Two, Value::Five, Value::Nine, Value::Nine, Value::Ace],
            values
        );
        // Equal values keep insertion order.
        assert_eq!(card("9c"), hand.cards()[2]);
        assert_eq!(card("9s"), hand.cards()[3]);
    }

    #[test]
    fn test_counts() {
        let hand = Hand::new_from_str("9c9d9hAc2c").unwrap();
        assert_eq!(3, hand.value_count(Value::Nine));
        assert_eq!(0, hand.value_count(Value::King));
        assert_eq!(3, hand.suit_count(Suit::Club));
        assert_eq!(0, hand.suit_count(Suit::Spade));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut hand = Hand::new();
        let kc = card("Kc");
        assert!(hand.add_card(kc).is_ok());
        assert_eq!(Err(PokerError::DuplicateCardInHand(kc)), hand.add_card(kc));
        assert_eq!(1, hand.len());
        assert_eq!(1, hand.value_count(Value::King));
        assert_eq!(1, hand.suit_count(Suit::Club));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Hand::new_from_str("Xc"),
            Err(PokerError::UnexpectedValueChar)
        ));
        assert!(matches!(
            Hand::new_from_str("AcK"),
            Err(PokerError::TooFewChars)
        ));
        assert!(matches!(
            Hand::new_from_str("AcKx"),
            Err(PokerError::UnexpectedSuitChar)
        ));
        assert!("AcKd".parse::<Hand>().is_ok());
    }

    #[test]
    fn test_empty_hand() {
        let mut hand = Hand::new();
        assert_eq!(Err(PokerError::EmptyHand), hand.evaluate().cloned());
        assert!(hand.is_empty());
        assert_eq!(Hand::new(), hand);
    }

    #[test]
    fn test_clear() {
        let mut hand = Hand::new_from_str("AcKcQcJcTc").unwrap();
        hand.evaluate().unwrap();
        hand.clear();
        assert!(hand.is_empty());
        assert_eq!(0, hand.suit_count(Suit::Club));
        assert_eq!(0, hand.value_count(Value::Ace));
        assert_eq!(Err(PokerError::EmptyHand), hand.score());

        // Clearing twice is the same as clearing once.
        hand.clear();
        hand.add_card(card("2d")).unwrap();
        assert_eq!("Two High Card", hand.description().unwrap());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut hand = Hand::new_from_str("8c8dJhJs3c").unwrap();
        let first = hand.evaluate().unwrap().clone();
        let second = hand.evaluate().unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(hand.rank().unwrap(), first);
    }

    #[test]
    fn test_add_invalidates_evaluation() {
        let mut hand = Hand::new_from_str("8c8dJh3s").unwrap();
        assert_eq!(Rank::OnePair, hand.evaluate().unwrap().rank());
        hand.add_card(card("Jc")).unwrap();
        assert_eq!(Rank::TwoPair, hand.evaluate().unwrap().rank());
    }

    #[test]
    fn test_flush_suit() {
        assert_eq!(
            Some(Suit::Heart),
            Hand::new_from_str("2h5h9hJhKh").unwrap().flush_suit()
        );
        assert_eq!(None, Hand::new_from_str("2h5h9hJhKs").unwrap().flush_suit());
        // More than five cards still counts.
        assert_eq!(
            Some(Suit::Heart),
            Hand::new_from_str("2h5h9hJhKhAhQs").unwrap().flush_suit()
        );
    }

    #[test]
    fn test_straight_wheel() {
        let hand = Hand::new_from_str("Ac2d3h4s5c").unwrap();
        assert_eq!(Some(Value::Five), hand.straight_high());
    }

    #[test]
    fn test_straight_after_broken_run() {
        // 2-3-4 breaks before the six, the straight starts later.
        let hand = Hand::new_from_str("2c3d4h6s7c8d9hTs").unwrap();
        assert_eq!(Some(Value::Ten), hand.straight_high());
    }

    #[test]
    fn test_straight_through_a_pair() {
        let hand = Hand::new_from_str("5c6d6h7s8c9d").unwrap();
        assert_eq!(Some(Value::Nine), hand.straight_high());
    }

    #[test]
    fn test_no_straight() {
        assert_eq!(None, Hand::new_from_str("2c3d4h5sKd").unwrap().straight_high());
        assert_eq!(None, Hand::new_from_str("2c3d4h6s7c9d").unwrap().straight_high());
        assert_eq!(None, Hand::new_from_str("JcQdKhAs2c").unwrap().straight_high());
    }

    #[test]
    fn test_best_straight_is_highest() {
        let hand = Hand::new_from_str("Ac2d3h4s5c6d").unwrap();
        assert_eq!(Some(Value::Six), hand.straight_high());
    }

    #[test]
    fn test_paired_values_are_descending() {
        let hand = Hand::new_from_str("3c3d9h9sQc").unwrap();
        assert_eq!(
            vec![(Value::Nine, 2), (Value::Three, 2)],
            hand.paired_values()
        );
    }

    #[test]
    fn test_seven_card_best_five() {
        // Board pairs the nine but the hole cards make a flush.
        let mut hand = Hand::new_from_str("Ah7h9c9h2hKd4h").unwrap();
        let evaluation = hand.evaluate().unwrap();
        assert_eq!(Rank::Flush, evaluation.rank());
        assert_eq!("Hearts Flush Ace-high", evaluation.description());
        assert_eq!(5, evaluation.cards().len());
        assert!(evaluation.cards().iter().all(|c| c.suit == Suit::Heart));
    }

    #[test]
    fn test_seven_card_straight_flush_needs_one_suit() {
        // A straight and a flush that don't share cards.
        let mut hand = Hand::new_from_str("5h6h7h8c9h2hTd").unwrap();
        assert_eq!(Rank::Flush, hand.evaluate().unwrap().rank());

        let mut hand = Hand::new_from_str("5h6h7h8h9h2cTd").unwrap();
        assert_eq!(Rank::StraightFlush, hand.evaluate().unwrap().rank());
    }

    #[test]
    fn test_seven_card_full_house_from_two_trips() {
        let mut hand = Hand::new_from_str("KcKdKh2s2c2dAs").unwrap();
        let evaluation = hand.evaluate().unwrap();
        assert_eq!(Rank::FullHouse, evaluation.rank());
        assert_eq!("Full House KKK22", evaluation.description());
    }

    #[test]
    fn test_display() {
        let hand = Hand::new_from_str("AcTdTcThTs").unwrap();
        assert_eq!("A-10-10-10-10", hand.to_string());
        assert_eq!("", Hand::new().to_string());
    }

    #[test]
    fn test_tier_is_monotone_over_sampled_hands() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cards = Deck::ordered_cards();
        let mut evaluations = Vec::new();
        for _ in 0..2_000 {
            cards.shuffle(&mut rng);
            let hand = Hand::new_with_cards(cards[..5].iter().copied()).unwrap();
            evaluations.push(hand.rank().unwrap());
        }

        for a in &evaluations {
            for b in evaluations.iter().take(200) {
                if a.rank().tier() < b.rank().tier() {
                    assert!(a.strength() > b.strength());
                }
            }
        }
    }

    #[test]
    fn test_score_bounds_over_sampled_hands() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..2_000 {
            let mut deck = FlatDeck::ordered();
            deck.shuffle(&mut rng);
            let mut hand = Hand::new_with_cards(deck.deal_n(5).unwrap()).unwrap();
            let e = hand.evaluate().unwrap();
            let tier = e.rank().tier();
            assert!((1..=10).contains(&tier));
            // Five ordinals sum to at most 12 + 12 + 12 + 12 + 11.
            assert!(e.score() >= tier * 13);
            assert!(e.score() <= tier * 13 + 59);
        }
    }

    #[test]
    #[ignore]
    fn test_every_five_card_hand() {
        let cards = Deck::ordered_cards();
        let mut counts = [0usize; 10];
        for combo in CardIter::new(&cards, 5) {
            let e = Hand::new_with_cards(combo).unwrap().rank().unwrap();
            counts[e.rank() as usize] += 1;
        }
        assert_eq!(
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 36, 4],
            counts
        );
    }
}
