use super::{Card, CardBitSet, PokerError, Result, Suit, Value};

/// The canonical 52 card deck.
///
/// There is no shuffling and no dealing. The deck only answers which cards
/// exist and which are still unseen given some known cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deck;

impl Deck {
    /// All 52 cards, rank major: every two, then every three, up to the aces.
    /// Within a rank the suits follow `Suit::SUITS`.
    pub fn full() -> Vec<Card> {
        Value::VALUES
            .iter()
            .flat_map(|&value| Suit::SUITS.iter().map(move |&suit| Card::new(value, suit)))
            .collect()
    }

    /// Collect `known` into a set, failing on the first repeated card.
    pub fn known_set(known: &[Card]) -> Result<CardBitSet> {
        let mut set = CardBitSet::new();
        for &card in known {
            if !set.insert(card) {
                return Err(PokerError::DuplicateCard(card));
            }
        }
        Ok(set)
    }

    /// Every card of the full deck that isn't in `known`, in full deck order.
    ///
    /// # Examples
    /// ```
    /// use holdem_odds::core::{parse_cards, Deck};
    ///
    /// let known = parse_cards("AS KS").unwrap();
    /// assert_eq!(50, Deck::remaining(&known).unwrap().len());
    /// ```
    pub fn remaining(known: &[Card]) -> Result<Vec<Card>> {
        let known = Self::known_set(known)?;
        Ok((!known).into_iter().collect())
    }
}

/// Free function form of [`Deck::full`].
pub fn full_deck() -> Vec<Card> {
    Deck::full()
}
