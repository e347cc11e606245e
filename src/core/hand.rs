use std::fmt;
use std::ops::Deref;

use super::{Card, Deck, PokerError, Result};

/// Exactly five distinct cards. This is the unit that gets scored.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; 5]);

impl Hand {
    /// Build a hand from a slice, checking the count and that no card repeats.
    pub fn new(cards: &[Card]) -> Result<Self> {
        let cards: [Card; 5] = cards.try_into().map_err(|_| PokerError::WrongCardCount {
            expected: 5,
            found: cards.len(),
        })?;
        Deck::known_set(&cards)?;
        Ok(Self(cards))
    }

    /// Callers must already know the cards are distinct.
    pub(crate) const fn from_array(cards: [Card; 5]) -> Self {
        Self(cards)
    }

    /// The five cards, in the order they were given.
    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }
}

impl Deref for Hand {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.0
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}
