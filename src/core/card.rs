use std::fmt;

use super::PokerError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, lowest first.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// Take a u8 and convert it to a value. Anything
    /// past the ace is `None`.
    ///
    /// ```
    /// use poker_hand::core::Value;
    ///
    /// assert_eq!(Some(Value::Two), Value::from_u8(0));
    /// assert_eq!(None, Value::from_u8(13));
    /// ```
    pub fn from_u8(v: u8) -> Option<Value> {
        VALUES.get(usize::from(v)).copied()
    }

    /// Parse the compact single character notation.
    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// The single character used by `from_char`.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }

    /// The glyph printed in hand descriptions. Ten is
    /// the only one that takes two characters.
    pub fn letter(self) -> &'static str {
        match self {
            Value::Ace => "A",
            Value::King => "K",
            Value::Queen => "Q",
            Value::Jack => "J",
            Value::Ten => "10",
            Value::Nine => "9",
            Value::Eight => "8",
            Value::Seven => "7",
            Value::Six => "6",
            Value::Five => "5",
            Value::Four => "4",
            Value::Three => "3",
            Value::Two => "2",
        }
    }

    /// Position in an ace-high listing. Ace is 0 and Two is 12.
    ///
    /// This is the per card component of a hand score.
    ///
    /// ```
    /// use poker_hand::core::Value;
    ///
    /// assert_eq!(0, Value::Ace.ordinal());
    /// assert_eq!(4, Value::Ten.ordinal());
    /// assert_eq!(12, Value::Two.ordinal());
    /// ```
    pub fn ordinal(self) -> u32 {
        Value::Ace as u32 - self as u32
    }

    /// The value one step up, if there is one.
    pub fn next(self) -> Option<Value> {
        Value::from_u8(self as u8 + 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            Value::Ace => "Ace",
            Value::King => "King",
            Value::Queen => "Queen",
            Value::Jack => "Jack",
            Value::Ten => "Ten",
            Value::Nine => "Nine",
            Value::Eight => "Eight",
            Value::Seven => "Seven",
            Value::Six => "Six",
            Value::Five => "Five",
            Value::Four => "Four",
            Value::Three => "Three",
            Value::Two => "Two",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Value::Ace => "Aces",
            Value::King => "Kings",
            Value::Queen => "Queens",
            Value::Jack => "Jacks",
            Value::Ten => "Tens",
            Value::Nine => "Nines",
            Value::Eight => "Eights",
            Value::Seven => "Sevens",
            Value::Six => "Sixes",
            Value::Five => "Fives",
            Value::Four => "Fours",
            Value::Three => "Threes",
            Value::Two => "Twos",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Diamonds
    Diamond = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'c' => Some(Suit::Club),
            'd' => Some(Suit::Diamond),
            'h' => Some(Suit::Heart),
            's' => Some(Suit::Spade),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Club => 'c',
            Suit::Diamond => 'd',
            Suit::Heart => 'h',
            Suit::Spade => 's',
        }
    }

    /// Plural name used in flush descriptions.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Club => "Clubs",
            Suit::Diamond => "Diamonds",
            Suit::Heart => "Hearts",
            Suit::Spade => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Cards compare by value first and suit second. Two
/// cards are the same card only when both match.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand::core::{Card, Suit, Value};
    ///
    /// let card = Card::new(Value::Ace, Suit::Club);
    /// assert_eq!(Value::Ace, card.value);
    /// assert_eq!(Suit::Club, card.suit);
    /// ```
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

/// Parse a two character card such as `"Ah"` or `"Td"`.
///
/// ```
/// use poker_hand::core::{Card, Suit, Value};
///
/// let card = Card::try_from("Td").unwrap();
/// assert_eq!(Card::new(Value::Ten, Suit::Diamond), card);
/// ```
impl TryFrom<&str> for Card {
    type Error = PokerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let value = chars
            .next()
            .ok_or(PokerError::TooFewChars)
            .and_then(|c| Value::from_char(c).ok_or(PokerError::UnexpectedValueChar))?;
        let suit = chars
            .next()
            .ok_or(PokerError::TooFewChars)
            .and_then(|c| Suit::from_char(c).ok_or(PokerError::UnexpectedSuitChar))?;

        if chars.next().is_some() {
            return Err(PokerError::UnparsedCharsRemaining);
        }
        Ok(Self { value, suit })
    }
}
