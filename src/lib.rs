//! A small library for dealing and scoring poker hands.
//!
//! The [`core`] module has the cards, decks and the hand evaluator.
//! A [`core::Hand`] classifies its cards from high card up to royal
//! flush, describes the result and gives it a score where the lower
//! score is the stronger hand.
//!
//! ```
//! use poker_hand::core::{Hand, Rank};
//!
//! let mut hand = Hand::new_from_str("Ac2d3h4s5c").unwrap();
//! let evaluation = hand.evaluate().unwrap();
//! assert_eq!(Rank::Straight, evaluation.rank());
//! assert_eq!("Straight Five-high", evaluation.description());
//! ```
//!
//! The [`table`] module deals from a shuffled deck to seated players
//! and tells registered listeners about what was dealt.

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Seats, dealing and table events.
pub mod table;
