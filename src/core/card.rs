use std::fmt;
use std::str::FromStr;

use super::{PokerError, Result};

/// Card rank. The discriminant is the card's rank value, so `Two` is 0 and
/// `Ace` is 12. Ordering follows the discriminant.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
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
    /// 10
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A, always high except in the wheel straight.
    Ace = 12,
}

impl Value {
    /// Every value from lowest to highest.
    pub const VALUES: [Value; 13] = [
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

    /// The integer rank value, 0 for a two up to 12 for an ace.
    pub const fn rank_value(self) -> u8 {
        self as u8
    }

    /// Look up a value from its rank value.
    ///
    /// # Examples
    /// ```
    /// use holdem_odds::core::Value;
    ///
    /// assert_eq!(Value::Ace, Value::from_rank_value(12).unwrap());
    /// assert!(Value::from_rank_value(13).is_err());
    /// ```
    pub fn from_rank_value(v: u8) -> Result<Self> {
        Self::VALUES
            .get(v as usize)
            .copied()
            .ok_or_else(|| PokerError::InvalidRank(v.to_string()))
    }

    /// Parse the rank part of a card, e.g. `"10"`, `"q"` or `"A"`. `T` is
    /// accepted as a synonym for ten.
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        match symbol.to_ascii_uppercase().as_str() {
            "10" | "T" => Ok(Value::Ten),
            s if s.len() == 1 => s
                .chars()
                .next()
                .map_or(Err(PokerError::InvalidRank(symbol.to_string())), |c| {
                    Self::from_char(c)
                }),
            _ => Err(PokerError::InvalidRank(symbol.to_string())),
        }
    }

    /// Single character form. Ten has no single digit so only `T` works here.
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Value::Two),
            '3' => Ok(Value::Three),
            '4' => Ok(Value::Four),
            '5' => Ok(Value::Five),
            '6' => Ok(Value::Six),
            '7' => Ok(Value::Seven),
            '8' => Ok(Value::Eight),
            '9' => Ok(Value::Nine),
            'T' => Ok(Value::Ten),
            'J' => Ok(Value::Jack),
            'Q' => Ok(Value::Queen),
            'K' => Ok(Value::King),
            'A' => Ok(Value::Ace),
            _ => Err(PokerError::InvalidRank(c.to_string())),
        }
    }

    /// The symbol used when printing a card.
    pub const fn symbol(self) -> &'static str {
        match self {
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
            Value::Ace => "A",
        }
    }
}

/// Card suit. Suits carry no strength of their own.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Hearts
    Heart = 0,
    /// Diamonds
    Diamond = 1,
    /// Clubs
    Club = 2,
    /// Spades
    Spade = 3,
}

impl Suit {
    /// Every suit in deck order.
    pub const SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

    /// Suit from its letter, H, D, C or S in either case.
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'H' => Ok(Suit::Heart),
            'D' => Ok(Suit::Diamond),
            'C' => Ok(Suit::Club),
            'S' => Ok(Suit::Spade),
            _ => Err(PokerError::InvalidSuit(c.to_string())),
        }
    }

    /// The upper case letter for this suit.
    pub const fn to_char(self) -> char {
        match self {
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
            Suit::Spade => 'S',
        }
    }
}

/// A single playing card.
///
/// Equality is structural: two cards are the same card when both the value
/// and the suit match.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Card {
    pub value: Value,
    pub suit: Suit,
}

impl Card {
    /// Create a card. Every value and suit pair is a valid card.
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Integer rank value of this card, 0 (two) to 12 (ace).
    pub const fn rank_value(&self) -> u8 {
        self.value.rank_value()
    }

    /// Position of this card in a 52 card universe. Used as the bit index in
    /// `CardBitSet`.
    pub(crate) const fn index(&self) -> usize {
        self.value as usize * 4 + self.suit as usize
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        Card::new(Value::VALUES[idx / 4], Suit::SUITS[idx % 4])
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.symbol(), self.suit.to_char())
    }
}

/// Parse a card written as a rank symbol followed by a suit symbol.
///
/// # Examples
/// ```
/// use holdem_odds::core::{parse_card, Card, Suit, Value};
///
/// assert_eq!(Card::new(Value::Ace, Suit::Spade), parse_card("AS").unwrap());
/// assert_eq!(Card::new(Value::Ten, Suit::Diamond), parse_card("10d").unwrap());
/// ```
pub fn parse_card(text: &str) -> Result<Card> {
    let text = text.trim();
    let len = text.chars().count();
    if !(2..=3).contains(&len) {
        return Err(PokerError::InvalidCardLength(text.to_string()));
    }
    // The suit is always the last character so everything before it is the
    // rank.
    let (rank, suit) = text.split_at(text.len() - text.chars().last().map_or(0, char::len_utf8));
    let value = Value::from_symbol(rank)?;
    let suit = suit
        .chars()
        .next()
        .ok_or_else(|| PokerError::InvalidCardLength(text.to_string()))
        .and_then(Suit::from_char)?;
    Ok(Card::new(value, suit))
}

/// Parse a list of cards separated by whitespace or commas.
///
/// The same card may not appear twice.
pub fn parse_cards(text: &str) -> Result<Vec<Card>> {
    let mut seen = super::CardBitSet::new();
    let mut cards = Vec::new();
    for token in text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let card = parse_card(token)?;
        if !seen.insert(card) {
            return Err(PokerError::DuplicateCard(card));
        }
        cards.push(card);
    }
    Ok(cards)
}

impl FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self> {
        parse_card(s)
    }
}
