//! This is the core module. It exports the cards, the decks
//! and the hand evaluator.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// All the errors the core can return.
mod error;
pub use self::error::PokerError;

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::CardIter;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Flattened deck
mod flat_deck;
/// Export the flat deck used for dealing.
pub use self::flat_deck::FlatDeck;

/// Hand classification and scoring.
mod rank;
/// Export the categories and the results.
pub use self::rank::{Evaluation, Rank, Strength, TIER_STEP};
