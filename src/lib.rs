//! `holdem_odds` answers one question about a Texas Hold'em river: with
//! these two hole cards on this five card board, how likely am I to have the
//! best hand against some number of opponents?
//!
//! `core` has cards, the deck, and the hand ranking kernel: scoring any five
//! cards into a category plus tie-break values, and picking the best five out
//! of seven. `holdem` has the win probability engine, which tries every two
//! card holding an opponent could have.
//!
//! ```
//! use holdem_odds::core::parse_cards;
//! use holdem_odds::holdem::win_probability;
//!
//! let hole = parse_cards("9S 8S").unwrap();
//! let board = parse_cards("QS JS 10S 2H 3C").unwrap();
//! let p = win_probability(&hole, &board, 4).unwrap();
//! assert!(p > 0.9 && p <= 1.0);
//! ```

/// Cards, the deck, and hand ranking.
pub mod core;

/// Texas Hold'em win probability.
pub mod holdem;
