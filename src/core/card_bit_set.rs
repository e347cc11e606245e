use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use super::Card;

const ALL_CARDS: u64 = (1 << 52) - 1;

/// A set of cards backed by a single `u64`, one bit per card.
///
/// Iteration always yields cards in full deck order regardless of insertion
/// order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct CardBitSet {
    cards: u64,
}

impl CardBitSet {
    /// An empty set.
    pub const fn new() -> Self {
        Self { cards: 0 }
    }

    /// The set of all 52 cards.
    pub const fn full() -> Self {
        Self { cards: ALL_CARDS }
    }

    /// Add a card. Returns false if the card was already present.
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let fresh = self.cards & bit == 0;
        self.cards |= bit;
        fresh
    }

    /// Take a card out. Returns true if it was there.
    pub fn remove(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let present = self.cards & bit != 0;
        self.cards &= !bit;
        present
    }

    /// Is this card in the set
    pub fn contains(&self, card: Card) -> bool {
        self.cards & (1u64 << card.index()) != 0
    }

    /// Number of cards in the set.
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    /// True when no cards are in the set.
    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// Iterate the cards in deck order, lowest index first.
    pub fn iter(&self) -> CardBitSetIter {
        CardBitSetIter { cards: self.cards }
    }
}

impl BitOr for CardBitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            cards: self.cards | rhs.cards,
        }
    }
}

impl BitAnd for CardBitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            cards: self.cards & rhs.cards,
        }
    }
}

impl BitXor for CardBitSet {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self {
            cards: self.cards ^ rhs.cards,
        }
    }
}

impl Not for CardBitSet {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            cards: !self.cards & ALL_CARDS,
        }
    }
}

impl fmt::Debug for CardBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Walks the set from the lowest bit up.
#[derive(Debug, Clone)]
pub struct CardBitSetIter {
    cards: u64,
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.cards == 0 {
            return None;
        }
        let idx = self.cards.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.cards &= self.cards - 1;
        Some(Card::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.cards.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CardBitSetIter {}

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> CardBitSetIter {
        self.iter()
    }
}

impl IntoIterator for &CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> CardBitSetIter {
        self.iter()
    }
}
