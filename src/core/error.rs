use thiserror::Error;

use super::Card;

/// This is the core error type for the library. It uses
/// `thiserror` to provide readable error messages.
///
/// Every variant is recoverable by the caller. A failed
/// operation leaves the hand or deck it was called on untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card already added to hand {0}")]
    DuplicateCardInHand(Card),
    #[error("Card dealt twice in one deal {0}")]
    DuplicateCardDealt(Card),
    #[error("Can't evaluate an empty hand")]
    EmptyHand,
    #[error("Requested {requested} cards but only {remaining} remain in the deck")]
    NotEnoughCards { requested: usize, remaining: usize },
}
