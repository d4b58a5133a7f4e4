use rand::RngCore;

use crate::core::FlatDeck;

use super::{Listener, Table};

/// # TableBuilder
///
/// `TableBuilder` configures a [`Table`]. Every field is optional.
///
/// ## Setters
///
/// Each setter will set the optional value to the passed in value. Then
/// return the mutated builder.
///
/// Without an rng the table shuffles with the thread local rng, which is
/// a cryptographically strong generator. Without a deck a full deck is
/// shuffled with that rng.
///
/// ## Examples
///
/// ```
/// use poker_hand::table::TableBuilder;
///
/// let table = TableBuilder::default()
///     .players(vec!["alice", "bob"])
///     .build();
/// assert_eq!(2, table.players().count());
/// assert_eq!(52, table.deck_len());
/// ```
///
/// However sometimes you want a known but random deal. In that case
/// you can pass in the rng like this:
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use poker_hand::table::TableBuilder;
///
/// let deal = |seed| {
///     let mut table = TableBuilder::default()
///         .rng(StdRng::seed_from_u64(seed))
///         .build();
///     table.deal_to_table(5).unwrap();
///     table.community_cards().to_vec()
/// };
/// assert_eq!(deal(420), deal(420));
/// ```
#[derive(Default)]
pub struct TableBuilder {
    players: Vec<String>,
    listeners: Vec<Box<dyn Listener>>,
    deck: Option<FlatDeck>,
    rng: Option<Box<dyn RngCore>>,
}

impl TableBuilder {
    /// Seat these players, in order, when the table is built.
    pub fn players<S: Into<String>, I: IntoIterator<Item = S>>(mut self, names: I) -> Self {
        self.players = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the listeners for the table created by this builder.
    pub fn listeners(mut self, listeners: Vec<Box<dyn Listener>>) -> Self {
        self.listeners = listeners;
        self
    }

    /// Set the deck for the first deal. It is used as is, with no
    /// shuffling, to allow for a deterministic deal.
    pub fn deck(mut self, deck: FlatDeck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Set the rng used to shuffle every deck.
    pub fn rng<R: RngCore + 'static>(mut self, rng: R) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Given the fields already specified build any that are not
    /// specified and create the table.
    pub fn build(self) -> Table {
        let mut rng: Box<dyn RngCore> = self.rng.unwrap_or_else(|| Box::new(rand::rng()));
        let deck = self.deck.unwrap_or_else(|| {
            let mut deck = FlatDeck::ordered();
            deck.shuffle(rng.as_mut());
            deck
        });

        let mut table = Table::with_parts(deck, self.listeners, rng);
        for name in self.players {
            table.add_player(name);
        }
        table
    }
}
