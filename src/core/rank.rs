use std::fmt;

use tracing::event;

use super::{Card, Hand, Suit, Value};

/// All the different possible hand categories, weakest first.
///
/// The derived ordering has the stronger category as the greater
/// one. `tier` gives the scoring class where 1 is the best.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard,
    /// One Card matches another.
    OnePair,
    /// Two different pairs of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Ten through Ace all of the same suit.
    ///
    /// Holding the ace and ten of a flush is not enough, the five
    /// cards must also be a straight. `AsTs7s4s2s` is a flush.
    RoyalFlush,
}

/// Every rank, weakest first.
const RANKS: [Rank; 10] = [
    Rank::HighCard,
    Rank::OnePair,
    Rank::TwoPair,
    Rank::ThreeOfAKind,
    Rank::Straight,
    Rank::Flush,
    Rank::FullHouse,
    Rank::FourOfAKind,
    Rank::StraightFlush,
    Rank::RoyalFlush,
];

/// The width of one tier in a score.
pub const TIER_STEP: u32 = 13;

impl Rank {
    pub fn ranks() -> [Rank; 10] {
        RANKS
    }

    /// Scoring class of this rank, 1 for a royal flush
    /// through 10 for a high card.
    ///
    /// ```
    /// use poker_hand::core::Rank;
    ///
    /// assert_eq!(1, Rank::RoyalFlush.tier());
    /// assert_eq!(4, Rank::FullHouse.tier());
    /// assert_eq!(10, Rank::HighCard.tier());
    /// ```
    pub fn tier(self) -> u32 {
        Rank::RoyalFlush as u32 - self as u32 + 1
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::HighCard => "High Card",
            Rank::OnePair => "Pair",
            Rank::TwoPair => "Two Pair",
            Rank::ThreeOfAKind => "Three of a Kind",
            Rank::Straight => "Straight",
            Rank::Flush => "Flush",
            Rank::FullHouse => "Full House",
            Rank::FourOfAKind => "Four of a Kind",
            Rank::StraightFlush => "Straight Flush",
            Rank::RoyalFlush => "Royal Flush",
        };
        write!(f, "{name}")
    }
}

/// Exact strength of a hand.
///
/// Compares the rank first and then the deciding values
/// lexicographically. For straights that is only the high card,
/// for everything else the values are grouped by how many times
/// they appear (bigger groups first) then by value, highest first.
///
/// A greater `Strength` is a stronger hand.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strength {
    pub rank: Rank,
    pub values: Vec<Value>,
}

/// The result of evaluating a hand.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    rank: Rank,
    description: String,
    score: u32,
    values: Vec<Value>,
    cards: Vec<Card>,
}

impl Evaluation {
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Human readable summary such as `"Jack-Eight Two Pair"`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Coarse comparable score, lower is stronger.
    ///
    /// `tier * 13` plus the sum of the `Value::ordinal` of every
    /// evaluated card. The rank sum can reach past one tier step so
    /// only `strength` gives an exact order between hands.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The cards that made the hand, lowest value first. For hands
    /// of more than five cards these are the best five.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn strength(&self) -> Strength {
        Strength {
            rank: self.rank,
            values: self.values.clone(),
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.score)
    }
}

/// Classify a hand of at most five cards.
///
/// The checks run strongest first and the first match wins.
pub(crate) fn classify(hand: &Hand) -> Evaluation {
    let flush = hand.flush_suit();
    let straight = hand.straight_high();
    let pairs = hand.paired_values();
    let high = hand
        .cards()
        .last()
        .map(|c| c.value)
        .unwrap_or(Value::Two);

    let with_count = |n: u8| pairs.iter().find(|(_, c)| *c == n).map(|(v, _)| *v);
    let quads = with_count(4);
    let trips = with_count(3);
    let twos: Vec<Value> = pairs
        .iter()
        .filter(|(_, c)| *c == 2)
        .map(|(v, _)| *v)
        .collect();

    let (rank, description) = match (flush, straight) {
        (Some(_), Some(Value::Ace)) if hand.value_count(Value::Ten) > 0 => {
            (Rank::RoyalFlush, String::from("Royal Flush"))
        }
        (Some(_), Some(top)) => (
            Rank::StraightFlush,
            format!("Straight Flush {}-high", top.name()),
        ),
        _ => match (quads, trips, twos.as_slice()) {
            (Some(v), _, _) => (Rank::FourOfAKind, format!("Four of a Kind {}", v.plural())),
            (None, Some(t), [p, ..]) => (Rank::FullHouse, full_house(t, *p)),
            _ => match (flush, straight) {
                (Some(suit), _) => (Rank::Flush, flush_description(suit, high)),
                (None, Some(top)) => (Rank::Straight, format!("Straight {}-high", top.name())),
                (None, None) => match (trips, twos.as_slice()) {
                    (Some(t), _) => (Rank::ThreeOfAKind, format!("Three of a Kind {}", t.plural())),
                    (None, [first, second, ..]) => (
                        Rank::TwoPair,
                        format!("{}-{} Two Pair", first.name(), second.name()),
                    ),
                    (None, [only]) => (Rank::OnePair, format!("{} Pair", only.name())),
                    (None, []) => (Rank::HighCard, format!("{} High Card", high.name())),
                },
            },
        },
    };

    let values = match (rank, straight) {
        (Rank::RoyalFlush | Rank::StraightFlush | Rank::Straight, Some(top)) => vec![top],
        _ => grouped_values(hand),
    };
    let rank_sum: u32 = hand.cards().iter().map(|c| c.value.ordinal()).sum();
    let score = rank.tier() * TIER_STEP + rank_sum;

    event!(
        tracing::Level::TRACE,
        hand = %hand,
        ?rank,
        score,
        "Classified hand"
    );

    Evaluation {
        rank,
        description,
        score,
        values,
        cards: hand.cards().to_vec(),
    }
}

fn full_house(trips: Value, pair: Value) -> String {
    format!(
        "Full House {}{}",
        trips.letter().repeat(3),
        pair.letter().repeat(2)
    )
}

fn flush_description(suit: Suit, high: Value) -> String {
    format!("{} Flush {}-high", suit.name(), high.name())
}

/// Values ordered by group size then by value, both descending.
fn grouped_values(hand: &Hand) -> Vec<Value> {
    let mut groups: Vec<(u8, Value)> = Value::values()
        .into_iter()
        .map(|v| (hand.value_count(v), v))
        .filter(|(count, _)| *count > 0)
        .collect();
    groups.sort_by(|a, b| b.cmp(a));
    groups.into_iter().map(|(_, v)| v).collect()
}
