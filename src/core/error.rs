use thiserror::Error;

use super::Card;

/// Everything that can go wrong when building cards, ranking hands, or
/// computing a win probability.
///
/// Every variant is a caller contract violation. Nothing here is
/// transient so nothing should be retried.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum PokerError {
    #[error("Invalid format of card: {0:?}. Use a rank followed by a suit, like AS or 10D")]
    InvalidCardLength(String),
    #[error("Invalid rank: {0:?}. Valid ranks are 2, 3, 4, 5, 6, 7, 8, 9, 10, J, Q, K, A")]
    InvalidRank(String),
    #[error("Invalid suit: {0:?}. Valid suits are H, D, C, S")]
    InvalidSuit(String),
    #[error("Expected exactly {expected} cards but got {found}")]
    WrongCardCount { expected: usize, found: usize },
    #[error("Need at least 5 cards to make a hand, got {0}")]
    InsufficientCards(usize),
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    /// A table needs at least two players. Raised before any enumeration,
    /// and kept apart from `DuplicateCard` so the message names the real
    /// problem.
    #[error("Need at least 2 players, got {0}")]
    InvalidPlayerCount(usize),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, PokerError>;
