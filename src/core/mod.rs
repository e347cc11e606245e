/// Errors for everything in this crate.
mod error;
/// Export `PokerError` and the crate `Result`
pub use self::error::{PokerError, Result};

/// card.rs has value and suit for poker cards, plus parsing.
mod card;
/// Export `Card`, `Suit`, `Value` and the parsers.
pub use self::card::{parse_card, parse_cards, Card, Suit, Value};

/// A set of cards packed into a `u64`.
mod card_bit_set;
/// Export `CardBitSet`
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// The full 52 card universe and the unseen remainder.
mod deck;
/// Export `Deck`
pub use self::deck::{full_deck, Deck};

/// Exactly five cards.
mod hand;
/// Export `Hand`
pub use self::hand::Hand;

/// Enumerate every fixed size group of cards.
mod card_iter;
/// Export `CardIter`
pub use self::card_iter::{n_choose_k, CardIter};

/// Hand categories, scores and the order between them.
mod score;
/// Export `HandScore`
pub use self::score::{compare, compare_signum, HandCategory, HandScore};

/// Scoring five card hands and picking the best five.
mod rank;
/// Export `Rankable`
pub use self::rank::{best_five, evaluate_hand, Rankable};
pub(crate) use self::rank::best_five_of;
