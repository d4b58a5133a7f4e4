use thiserror::Error;

use crate::core::PokerError;

use super::PlayerId;

/// Errors from dealing or looking up players at a table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("No player with id {0} is seated at the table")]
    UnknownPlayer(PlayerId),
    #[error(transparent)]
    Poker(#[from] PokerError),
}

/// ListenerError is the error type for listener implementations.
#[derive(Error, Debug)]
pub enum ListenerError {
    #[error("Unable to handle table event")]
    UnableToHandleEvent,
    #[error("Borrow Mut Error: {0}")]
    BorrowMutError(#[from] std::cell::BorrowMutError),
}
