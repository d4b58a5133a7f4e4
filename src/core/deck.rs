use crate::core::card::{Card, Suit, Value};
use std::collections::HashSet;
use std::collections::hash_set::{IntoIter, Iter};

/// Deck struct that can tell quickly if a card is in the deck
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Card storage.
    /// Used to figure out quickly
    /// if this card is in the deck.
    cards: HashSet<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Create a new empty deck.
    ///
    /// ```
    /// use poker_hand::core::Deck;
    ///
    /// assert!(Deck::new().is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            cards: HashSet::with_capacity(Self::SIZE),
        }
    }

    /// Build the 52 cards in their canonical order: by value
    /// from Two up to Ace, and by suit within a value.
    ///
    /// This is built on every call so there is no shared template
    /// that could be mutated.
    ///
    /// ```
    /// use poker_hand::core::{Card, Deck, Suit, Value};
    ///
    /// let cards = Deck::ordered_cards();
    /// assert_eq!(52, cards.len());
    /// assert_eq!(Card::new(Value::Two, Suit::Club), cards[0]);
    /// assert_eq!(Card::new(Value::Ace, Suit::Spade), cards[51]);
    /// ```
    pub fn ordered_cards() -> Vec<Card> {
        Value::values()
            .into_iter()
            .flat_map(|v| Suit::suits().into_iter().map(move |s| Card::new(v, s)))
            .collect()
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }
    /// Given a card remove it from the deck if it is present.
    pub fn remove(&mut self, c: &Card) -> bool {
        self.cards.remove(c)
    }
    /// Add a given card to the deck. Returns false if it was
    /// already there.
    pub fn insert(&mut self, c: Card) -> bool {
        self.cards.insert(c)
    }
    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    /// Get an iterator from this deck
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

/// Create the default 52 card deck
///
/// ```
/// use poker_hand::core::Deck;
///
/// assert_eq!(52, Deck::default().len());
/// ```
impl Default for Deck {
    fn default() -> Self {
        Self {
            cards: Self::ordered_cards().into_iter().collect(),
        }
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> IntoIter<Card> {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_in() {
        let d = Deck::default();
        assert!(d.contains(&Card::new(Value::Eight, Suit::Heart)));
    }

    #[test]
    fn test_remove() {
        let mut d = Deck::default();
        let c = Card::new(Value::Ace, Suit::Heart);
        assert!(d.contains(&c));
        assert!(d.remove(&c));
        assert!(!d.contains(&c));
        assert!(!d.remove(&c));
        assert_eq!(51, d.len());
    }

    #[test]
    fn test_insert_twice() {
        let mut d = Deck::new();
        let c = Card::new(Value::Four, Suit::Club);
        assert!(d.insert(c));
        assert!(!d.insert(c));
        assert_eq!(1, d.len());
    }

    #[test]
    fn test_ordered_cards_are_unique() {
        let cards = Deck::ordered_cards();
        let unique: HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(Deck::SIZE, unique.len());

        let mut sorted = cards.clone();
        sorted.sort();
        assert_eq!(sorted, cards);
    }
}
