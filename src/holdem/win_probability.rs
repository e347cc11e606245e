use std::cmp::Ordering;
use std::ops::Add;

use tracing::{debug, instrument, trace};

use crate::core::{
    best_five_of, n_choose_k, Card, CardIter, Deck, Hand, HandScore, PokerError, Result,
};

/// How one hand fared against every opponent holding that was tried.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShowdownTally {
    /// Holdings that our best five beats outright
    pub wins: u64,
    /// Holdings whose best five scores exactly the same as ours
    pub ties: u64,
    /// Holdings that beat us
    pub losses: u64,
}

impl ShowdownTally {
    /// Total number of opponent holdings evaluated
    pub fn total(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// Chance of beating a single opponent, with a tie worth half a win.
    pub fn heads_up_probability(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.wins as f64 + self.ties as f64 / 2.0) / total as f64
    }

    /// Chance of beating every one of `player_count - 1` opponents.
    ///
    /// Each opponent is treated as an independent heads up match against us,
    /// so this is the heads up probability raised to the number of
    /// opponents. Opponents share the board and can't hold the same cards, so
    /// the real multiway number differs somewhat.
    ///
    /// A table needs at least two players, anything less is
    /// `PokerError::InvalidPlayerCount`.
    ///
    /// # Example
    /// ```
    /// use holdem_odds::core::PokerError;
    /// use holdem_odds::holdem::ShowdownTally;
    ///
    /// let tally = ShowdownTally { wins: 0, ties: 0, losses: 990 };
    /// assert_eq!(Ok(0.0), tally.win_probability(2));
    /// assert_eq!(Err(PokerError::InvalidPlayerCount(1)), tally.win_probability(1));
    /// ```
    pub fn win_probability(&self, player_count: usize) -> Result<f64> {
        if player_count < 2 {
            return Err(PokerError::InvalidPlayerCount(player_count));
        }
        Ok(self.against(player_count - 1))
    }

    /// Heads up probability raised to the number of opponents.
    fn against(&self, opponents: usize) -> f64 {
        self.heads_up_probability()
            .powi(i32::try_from(opponents).unwrap_or(i32::MAX))
    }

    /// Calculate win percentage (0.0 - 100.0)
    pub fn win_percentage(&self) -> f64 {
        self.percentage(self.wins)
    }

    /// Calculate tie percentage (0.0 - 100.0)
    pub fn tie_percentage(&self) -> f64 {
        self.percentage(self.ties)
    }

    fn percentage(&self, count: u64) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (count as f64 / total as f64) * 100.0
    }
}

/// A single showdown, from our side of the table.
impl From<Ordering> for ShowdownTally {
    fn from(ordering: Ordering) -> Self {
        let mut tally = Self::default();
        match ordering {
            Ordering::Greater => tally.wins = 1,
            Ordering::Equal => tally.ties = 1,
            Ordering::Less => tally.losses = 1,
        }
        tally
    }
}

impl Add for ShowdownTally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            losses: self.losses + rhs.losses,
        }
    }
}

/// Calculator for the chance that our hand is best on a complete board.
///
/// Given our two hole cards and the five community cards, every two card
/// holding an opponent could have is tried against our best five.
#[derive(Debug, Clone)]
pub struct WinProbabilityCalculator {
    community: [Card; 5],
    player_count: usize,
    /// Our best five out of hole plus community, and its score.
    my_best: (Hand, HandScore),
    /// Cards that could be in an opponent's hand
    remaining_cards: Vec<Card>,
}

impl WinProbabilityCalculator {
    /// Create a new calculator.
    ///
    /// All validation happens here so `calculate` can't fail.
    ///
    /// # Arguments
    /// * `hole` - exactly two cards
    /// * `community` - exactly five cards
    /// * `player_count` - everyone at the table, us included. At least 2.
    ///
    /// # Example
    /// ```
    /// use holdem_odds::core::parse_cards;
    /// use holdem_odds::holdem::WinProbabilityCalculator;
    ///
    /// let hole = parse_cards("AS KS").unwrap();
    /// let board = parse_cards("QS JS 10S 2H 3C").unwrap();
    ///
    /// let calc = WinProbabilityCalculator::new(&hole, &board, 6).unwrap();
    /// assert_eq!(45, calc.remaining_cards().len());
    /// ```
    pub fn new(hole: &[Card], community: &[Card], player_count: usize) -> Result<Self> {
        let hole: [Card; 2] = hole.try_into().map_err(|_| PokerError::WrongCardCount {
            expected: 2,
            found: hole.len(),
        })?;
        let community: [Card; 5] = community.try_into().map_err(|_| PokerError::WrongCardCount {
            expected: 5,
            found: community.len(),
        })?;
        if player_count < 2 {
            return Err(PokerError::InvalidPlayerCount(player_count));
        }

        let mut known = [hole[0]; 7];
        known[..2].copy_from_slice(&hole);
        known[2..].copy_from_slice(&community);

        // This is also the duplicate check for the seven known cards.
        let remaining_cards = Deck::remaining(&known)?;
        let my_best = best_five_of(&known);

        Ok(Self {
            community,
            player_count,
            my_best,
            remaining_cards,
        })
    }

    /// Our best five card hand and its score.
    pub fn my_best(&self) -> (&Hand, &HandScore) {
        (&self.my_best.0, &self.my_best.1)
    }

    /// The cards that aren't in our hand or on the board.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.remaining_cards
    }

    /// Everyone at the table, us included. Always at least 2.
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Try every possible opponent holding and count the outcomes.
    #[instrument(level = "debug", skip(self), fields(player_count = self.player_count))]
    pub fn calculate(&self) -> ShowdownTally {
        trace!(
            my_best = %self.my_best.1,
            holdings = n_choose_k(self.remaining_cards.len(), 2),
            "Enumerating opponent holdings"
        );
        let tally = self.tally_opponents();
        debug_assert_eq!(n_choose_k(self.remaining_cards.len(), 2), tally.total());
        debug!(
            wins = tally.wins,
            ties = tally.ties,
            losses = tally.losses,
            "Finished showdown enumeration"
        );
        tally
    }

    /// Shortcut for `calculate().win_probability(player_count)`.
    ///
    /// The player count was checked in `new`, so this can't fail.
    pub fn win_probability(&self) -> f64 {
        self.calculate().against(self.player_count - 1)
    }

    #[cfg(not(feature = "rayon"))]
    fn tally_opponents(&self) -> ShowdownTally {
        CardIter::<2>::new(&self.remaining_cards)
            .map(|opponent| self.showdown(opponent))
            .fold(ShowdownTally::default(), Add::add)
    }

    #[cfg(feature = "rayon")]
    fn tally_opponents(&self) -> ShowdownTally {
        use rayon::prelude::*;

        // Tallies add associatively and commutatively; shard order is free.
        CardIter::<2>::new(&self.remaining_cards)
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|opponent| self.showdown(opponent))
            .reduce(ShowdownTally::default, Add::add)
    }

    /// Our best five against the best five this opponent can make.
    fn showdown(&self, opponent: [Card; 2]) -> ShowdownTally {
        let mut seven = [opponent[0]; 7];
        seven[..2].copy_from_slice(&opponent);
        seven[2..].copy_from_slice(&self.community);
        let (_, opponent_score) = best_five_of(&seven);
        self.my_best.1.cmp(&opponent_score).into()
    }
}

/// Chance that `hole` wins on the complete `community` board against
/// `player_count - 1` opponents.
///
/// # Example
/// ```
/// use holdem_odds::core::parse_cards;
/// use holdem_odds::holdem::win_probability;
///
/// let hole = parse_cards("AS KS").unwrap();
/// let board = parse_cards("QS JS 10S 2H 3C").unwrap();
/// assert_eq!(1.0, win_probability(&hole, &board, 9).unwrap());
/// ```
pub fn win_probability(hole: &[Card], community: &[Card], player_count: usize) -> Result<f64> {
    Ok(WinProbabilityCalculator::new(hole, community, player_count)?.win_probability())
}
