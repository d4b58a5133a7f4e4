//! A table deals from one shuffled deck to its seated players and to
//! the board. Each player holds their own [`Hand`], and community cards
//! are added to every seated hand as they are dealt.
//!
//! Anything that wants to follow the deal registers a [`Listener`] and
//! receives a [`TableEvent`] for each step.
//!
//! ```
//! use poker_hand::table::TableBuilder;
//!
//! let mut table = TableBuilder::default()
//!     .players(vec!["alice", "bob"])
//!     .build();
//!
//! table.deal_to_all_players(2).unwrap();
//! table.deal_to_table(5).unwrap();
//!
//! let ids: Vec<_> = table.players().map(|(id, _name)| id).collect();
//! for id in ids {
//!     let evaluation = table.evaluate_player(id).unwrap();
//!     assert_eq!(5, evaluation.cards().len());
//! }
//! ```
use std::collections::HashSet;
use std::fmt;

use rand::RngCore;
use tracing::event;

use crate::core::{Card, Evaluation, FlatDeck, Hand, PokerError};

mod builder;
mod errors;
mod listener;

pub use builder::TableBuilder;
pub use errors::{ListenerError, TableError};
pub use listener::{FnListener, Listener, VecListener};

/// Identifies a seat at a table. Ids are never reused by a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub usize);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What happened at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableEvent {
    PlayerJoined(PlayerId),
    PlayerLeft(PlayerId),
    /// Private cards given to one player.
    HoleCardsDealt { player: PlayerId, cards: Vec<Card> },
    /// Cards added to the board, and so to every seated hand.
    CommunityCardsDealt(Vec<Card>),
    /// Hands and board were cleared and a fresh deck shuffled.
    NewDeal,
}

#[derive(Debug)]
struct Seat {
    id: PlayerId,
    name: String,
    hand: Hand,
}

/// A card table. Build one with [`TableBuilder`].
pub struct Table {
    deck: FlatDeck,
    seats: Vec<Seat>,
    community: Vec<Card>,
    listeners: Vec<Box<dyn Listener>>,
    rng: Box<dyn RngCore>,
    next_id: usize,
}

impl Table {
    /// A table with no players and a freshly shuffled deck.
    pub fn new() -> Self {
        TableBuilder::default().build()
    }

    pub(crate) fn with_parts(
        deck: FlatDeck,
        listeners: Vec<Box<dyn Listener>>,
        rng: Box<dyn RngCore>,
    ) -> Self {
        Self {
            deck,
            seats: Vec::new(),
            community: Vec::with_capacity(5),
            listeners,
            rng,
            next_id: 0,
        }
    }

    /// Seat a player. Adding a name that is already seated returns
    /// the id it already has. A player joining mid-deal starts with
    /// the community cards in hand.
    pub fn add_player<S: Into<String>>(&mut self, name: S) -> PlayerId {
        let name = name.into();
        if let Some(seat) = self.seats.iter().find(|s| s.name == name) {
            return seat.id;
        }

        let id = PlayerId(self.next_id);
        self.next_id += 1;
        // The board never repeats a card, `deal_to_table` rejects that.
        let hand = Hand::new_with_cards(self.community.iter().copied()).unwrap_or_default();
        self.seats.push(Seat { id, name, hand });
        self.notify(TableEvent::PlayerJoined(id));
        id
    }

    /// Remove a player and their hand. Returns false if they
    /// weren't seated.
    pub fn remove_player(&mut self, id: PlayerId) -> bool {
        let before = self.seats.len();
        self.seats.retain(|s| s.id != id);
        let removed = self.seats.len() != before;
        if removed {
            self.notify(TableEvent::PlayerLeft(id));
        }
        removed
    }

    /// The seated players in seating order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &str)> {
        self.seats.iter().map(|s| (s.id, s.name.as_str()))
    }

    pub fn player_hand(&self, id: PlayerId) -> Result<&Hand, TableError> {
        Ok(&self.seat(id)?.hand)
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }

    /// How many cards are left to deal.
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn add_listener(&mut self, listener: Box<dyn Listener>) {
        self.listeners.push(listener);
    }

    /// Deal `n` cards to every seated player, one card at a time
    /// around the table.
    ///
    /// Fails without dealing anything if the deck can't cover every
    /// player or a card would land in a hand twice.
    pub fn deal_to_all_players(&mut self, n: usize) -> Result<(), TableError> {
        let players = self.seats.len();
        let count = n
            .checked_mul(players)
            .ok_or(PokerError::NotEnoughCards {
                requested: usize::MAX,
                remaining: self.deck.len(),
            })?;

        let staged = self.deal_checked(count, |table, dealt| {
            table
                .seats
                .iter()
                .enumerate()
                .map(|(offset, seat)| -> Result<(Hand, Vec<Card>), TableError> {
                    let cards: Vec<Card> =
                        dealt.iter().skip(offset).step_by(players).copied().collect();
                    let mut hand = seat.hand.clone();
                    for card in &cards {
                        hand.add_card(*card)?;
                    }
                    Ok((hand, cards))
                })
                .collect::<Result<Vec<_>, _>>()
        })?;
        event!(tracing::Level::DEBUG, n, players, "Dealt to all players");

        for (seat, (hand, cards)) in self.seats.iter_mut().zip(staged) {
            seat.hand = hand;
            let hole = TableEvent::HoleCardsDealt {
                player: seat.id,
                cards,
            };
            notify_all(&mut self.listeners, &hole);
        }
        Ok(())
    }

    /// Deal `n` cards to one player.
    pub fn deal_to_player(&mut self, id: PlayerId, n: usize) -> Result<(), TableError> {
        // Look the player up first so a bad id doesn't burn cards.
        self.seat(id)?;
        let (hand, cards) = self.deal_checked(n, |table, dealt| {
            let mut hand = table.seat(id)?.hand.clone();
            for card in dealt {
                hand.add_card(*card)?;
            }
            Ok((hand, dealt.to_vec()))
        })?;
        event!(tracing::Level::DEBUG, n, %id, "Dealt to player");

        self.seat_mut(id)?.hand = hand;
        self.notify(TableEvent::HoleCardsDealt { player: id, cards });
        Ok(())
    }

    /// Deal `n` community cards. They go to every seated hand and
    /// every listener hears about them.
    pub fn deal_to_table(&mut self, n: usize) -> Result<(), TableError> {
        let (hands, cards) = self.deal_checked(n, |table, dealt| {
            if let Some(card) = dealt.iter().find(|c| table.community.contains(c)) {
                return Err(PokerError::DuplicateCardDealt(*card).into());
            }
            let hands = table
                .seats
                .iter()
                .map(|seat| -> Result<Hand, TableError> {
                    let mut hand = seat.hand.clone();
                    for card in dealt {
                        hand.add_card(*card)?;
                    }
                    Ok(hand)
                })
                .collect::<Result<Vec<Hand>, _>>()?;
            Ok((hands, dealt.to_vec()))
        })?;
        event!(tracing::Level::DEBUG, n, "Dealt to table");

        for (seat, hand) in self.seats.iter_mut().zip(hands) {
            seat.hand = hand;
        }
        self.community.extend_from_slice(&cards);
        self.notify(TableEvent::CommunityCardsDealt(cards));
        Ok(())
    }

    /// Evaluate the best hand a player can make from their hole cards
    /// and the board.
    pub fn evaluate_player(&mut self, id: PlayerId) -> Result<Evaluation, TableError> {
        let seat = self.seat_mut(id)?;
        Ok(seat.hand.evaluate()?.clone())
    }

    /// Start over: clear every hand and the board and shuffle a full
    /// deck. The players stay seated.
    pub fn new_deal(&mut self) {
        for seat in self.seats.iter_mut() {
            seat.hand.clear();
        }
        self.community.clear();

        let mut deck = FlatDeck::ordered();
        deck.shuffle(self.rng.as_mut());
        self.deck = deck;

        event!(tracing::Level::DEBUG, players = self.seats.len(), "New deal");
        self.notify(TableEvent::NewDeal);
    }

    fn seat(&self, id: PlayerId) -> Result<&Seat, TableError> {
        self.seats
            .iter()
            .find(|s| s.id == id)
            .ok_or(TableError::UnknownPlayer(id))
    }

    fn seat_mut(&mut self, id: PlayerId) -> Result<&mut Seat, TableError> {
        self.seats
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(TableError::UnknownPlayer(id))
    }

    /// Take `count` cards off the deck and let `stage` work out what
    /// the deal would do. The table only changes once `stage` succeeds.
    /// On any failure the cards go back on top of the deck.
    fn deal_checked<T, F>(&mut self, count: usize, stage: F) -> Result<T, TableError>
    where
        F: FnOnce(&Self, &[Card]) -> Result<T, TableError>,
    {
        let dealt = self.deck.deal_n(count)?;
        let staged = match check_unique(&dealt) {
            Ok(()) => stage(self, &dealt),
            Err(e) => Err(e.into()),
        };
        if let Err(error) = &staged {
            event!(tracing::Level::DEBUG, %error, count, "Deal rejected");
            self.deck.put_back(dealt);
        }
        staged
    }

    fn notify(&mut self, table_event: TableEvent) {
        notify_all(&mut self.listeners, &table_event);
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// A batch of cards may not hold the same card twice.
fn check_unique(cards: &[Card]) -> Result<(), PokerError> {
    let mut seen = HashSet::with_capacity(cards.len());
    match cards.iter().find(|c| !seen.insert(**c)) {
        Some(card) => Err(PokerError::DuplicateCardDealt(*card)),
        None => Ok(()),
    }
}

/// Send an event to every listener, dropping the ones that fail.
fn notify_all(listeners: &mut Vec<Box<dyn Listener>>, table_event: &TableEvent) {
    listeners.retain_mut(|listener| match listener.on_event(table_event) {
        Ok(()) => true,
        Err(error) => {
            event!(tracing::Level::WARN, %error, ?table_event, "Dropping table listener");
            false
        }
    });
}
