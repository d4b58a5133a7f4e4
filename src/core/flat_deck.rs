use crate::core::card::Card;
use crate::core::deck::Deck;
use crate::core::error::PokerError;
use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};

use rand::Rng;
use rand::rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// `FlatDeck` is a deck of cards that allows easy
/// indexing into the cards. It does not provide
/// contains methods.
///
/// Cards are dealt from the end of the vector.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatDeck {
    /// Card storage.
    cards: Vec<Card>,
    shuffled: bool,
}

impl FlatDeck {
    /// A full deck in the canonical order, not shuffled.
    ///
    /// ```
    /// use poker_hand::core::FlatDeck;
    ///
    /// let deck = FlatDeck::ordered();
    /// assert_eq!(52, deck.len());
    /// assert!(!deck.is_shuffled());
    /// ```
    pub fn ordered() -> Self {
        Self {
            cards: Deck::ordered_cards(),
            shuffled: false,
        }
    }

    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    /// Have all cards been dealt ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    /// Has `shuffle` been called on this deck.
    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Add a card to the deck.
    /// This does not check if the card is already in the deck.
    /// It will just add it to the end of the deck.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use poker_hand::core::{Card, Deck, FlatDeck, Suit, Value};
    ///
    /// let mut deck: FlatDeck = Deck::new().into();
    /// let card = Card::new(Value::Ace, Suit::Club);
    /// deck.push(card);
    ///
    /// assert_eq!(1, deck.len());
    /// assert_eq!(card, deck.deal().unwrap());
    /// ```
    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    /// Give a random sample of the cards still left in the deck
    pub fn sample(&self, n: usize) -> Vec<Card> {
        let mut rng = rng();
        self.cards.choose_multiple(&mut rng, n).cloned().collect()
    }

    /// Randomly shuffle the flat deck.
    /// This is a Fisher-Yates shuffle driven by the given rng.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.shuffled = true;
    }

    /// Deal a card if there is one there to deal.
    /// None if the deck is empty
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal `n` cards. If fewer than `n` remain nothing is dealt.
    ///
    /// ```
    /// use poker_hand::core::FlatDeck;
    ///
    /// let mut deck = FlatDeck::ordered();
    /// assert_eq!(50, deck.deal_n(50).unwrap().len());
    /// assert!(deck.deal_n(3).is_err());
    /// assert_eq!(2, deck.len());
    /// ```
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, PokerError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(PokerError::NotEnoughCards {
                requested: n,
                remaining,
            });
        }
        let mut dealt = self.cards.split_off(remaining - n);
        dealt.reverse();
        Ok(dealt)
    }

    /// Put back cards taken by `deal_n`. The next `deal_n` of the
    /// same size hands them out again in the same order.
    ///
    /// ```
    /// use poker_hand::core::FlatDeck;
    ///
    /// let mut deck = FlatDeck::ordered();
    /// let dealt = deck.deal_n(3).unwrap();
    /// deck.put_back(dealt.clone());
    /// assert_eq!(FlatDeck::ordered(), deck);
    /// assert_eq!(dealt, deck.deal_n(3).unwrap());
    /// ```
    pub fn put_back(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards.into_iter().rev());
    }
}

impl Index<usize> for FlatDeck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
impl Index<Range<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeTo<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFrom<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeFrom<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFull> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl From<Vec<Card>> for FlatDeck {
    fn from(value: Vec<Card>) -> Self {
        Self {
            cards: value,
            shuffled: false,
        }
    }
}

/// Allow creating a flat deck from a Deck
impl From<Deck> for FlatDeck {
    /// Flatten this deck, consuming it to produce a `FlatDeck` that's
    /// easier to get random access to.
    fn from(value: Deck) -> Self {
        // We sort the cards so that the same input
        // cards always result in the same starting flat deck
        let mut cards: Vec<Card> = value.into_iter().collect();
        cards.sort();
        Self {
            cards,
            shuffled: false,
        }
    }
}

/// A full deck shuffled with the thread local rng.
impl Default for FlatDeck {
    fn default() -> Self {
        let mut deck = Self::ordered();
        deck.shuffle(&mut rng());
        deck
    }
}
