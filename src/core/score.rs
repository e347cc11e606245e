use std::cmp::Ordering;
use std::fmt;

use super::Value;

/// The category of a five card hand, weakest first.
///
/// The discriminant is the category number, so `HighCard` is 0 and
/// `RoyalFlush` is 9.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum HandCategory {
    /// No matches
    HighCard = 0,
    /// One Card matches another.
    OnePair = 1,
    /// Two different pair of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five cards in a sequence
    Straight = 4,
    /// Five cards of the same suit
    Flush = 5,
    /// Three of one value and two of another value
    FullHouse = 6,
    /// Four of the same value.
    FourOfAKind = 7,
    /// Five cards in a sequence all for the same suit.
    StraightFlush = 8,
    /// Ten through ace all of one suit.
    RoyalFlush = 9,
}

impl HandCategory {
    /// Every category, weakest first.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    /// Category number, 0 to 9.
    pub const fn category(self) -> u8 {
        self as u8
    }

    /// How many tie-break values a hand of this category always carries.
    pub const fn tie_break_len(self) -> usize {
        match self {
            HandCategory::HighCard | HandCategory::Flush => 5,
            HandCategory::OnePair => 4,
            HandCategory::TwoPair | HandCategory::ThreeOfAKind => 3,
            HandCategory::FullHouse | HandCategory::FourOfAKind => 2,
            HandCategory::Straight | HandCategory::StraightFlush => 1,
            HandCategory::RoyalFlush => 0,
        }
    }

    /// Human readable name, as used by `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The strength of a five card hand: a category plus the rank values that
/// break ties inside that category, most significant first.
///
/// Scores are ordered by category, then by tie-break values element by
/// element. When one tie-break runs out before a difference is found the two
/// scores are equal; that is a genuine tie that only differs in suits.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct HandScore {
    pub category: HandCategory,
    pub tie_break: Vec<u8>,
}

impl HandScore {
    pub fn new(category: HandCategory, tie_break: Vec<u8>) -> Self {
        Self {
            category,
            tie_break,
        }
    }
}

impl Ord for HandScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| {
            self.tie_break
                .iter()
                .zip(other.tie_break.iter())
                .map(|(a, b)| a.cmp(b))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for HandScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality has to agree with `Ord`, which ignores trailing tie-break values.
impl PartialEq for HandScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for HandScore {}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        let mut values = self
            .tie_break
            .iter()
            .filter_map(|&v| Value::from_rank_value(v).ok());
        if let Some(first) = values.next() {
            write!(f, " ({}", first.symbol())?;
            for v in values {
                write!(f, " {}", v.symbol())?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// Compare two scores. `Greater` means `a` is the stronger hand.
pub fn compare(a: &HandScore, b: &HandScore) -> Ordering {
    a.cmp(b)
}

/// [`compare`] as an integer: 1 if `a` wins, -1 if `b` wins, 0 for a tie.
pub fn compare_signum(a: &HandScore, b: &HandScore) -> i8 {
    match compare(a, b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn score(category: HandCategory, tie_break: &[u8]) -> HandScore {
        HandScore::new(category, tie_break.to_vec())
    }

    #[test]
    fn test_category_numbers() {
        for (i, c) in HandCategory::ALL.iter().enumerate() {
            assert_eq!(i as u8, c.category());
        }
    }

    #[test]
    fn test_category_beats_tie_break() {
        for x in 0..13 {
            for y in 0..13 {
                let quads = score(HandCategory::FourOfAKind, &[x, y]);
                let boat = score(HandCategory::FullHouse, &[x, y]);
                assert_eq!(Ordering::Greater, compare(&quads, &boat));
                assert_eq!(1, compare_signum(&quads, &boat));
                assert_eq!(-1, compare_signum(&boat, &quads));
            }
        }
        assert!(
            score(HandCategory::OnePair, &[0, 1, 2, 3])
                > score(HandCategory::HighCard, &[12, 11, 10, 9, 7])
        );
    }

    #[test]
    fn test_first_difference_decides() {
        let a = score(HandCategory::Flush, &[12, 9, 5, 3, 1]);
        let b = score(HandCategory::Flush, &[12, 9, 5, 3, 0]);
        let c = score(HandCategory::Flush, &[12, 10, 0, 0, 0]);
        assert_eq!(Ordering::Greater, compare(&a, &b));
        assert_eq!(Ordering::Less, compare(&a, &c));
    }

    #[test]
    fn test_prefix_is_a_tie() {
        let a = score(HandCategory::TwoPair, &[10, 4]);
        let b = score(HandCategory::TwoPair, &[10, 4, 2]);
        assert_eq!(Ordering::Equal, compare(&a, &b));
        assert_eq!(a, b);
        let royal = score(HandCategory::RoyalFlush, &[]);
        assert_eq!(0, compare_signum(&royal, &royal.clone()));
    }

    #[test]
    fn test_total_order_laws() {
        let mut rng = rand::rng();
        let scores: Vec<HandScore> = (0..60)
            .map(|_| {
                let category = HandCategory::ALL[rng.random_range(0..3)];
                let tie_break: Vec<u8> = (0..category.tie_break_len())
                    .map(|_| rng.random_range(0..3))
                    .collect();
                HandScore::new(category, tie_break)
            })
            .collect();

        for a in &scores {
            assert_eq!(Ordering::Equal, compare(a, a));
            for b in &scores {
                assert_eq!(compare_signum(a, b), -compare_signum(b, a));
                for c in &scores {
                    if compare(a, b).is_ge() && compare(b, c).is_ge() {
                        assert!(compare(a, c).is_ge());
                    }
                }
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            "Straight Flush (Q)",
            score(HandCategory::StraightFlush, &[10]).to_string()
        );
        assert_eq!("Royal Flush", score(HandCategory::RoyalFlush, &[]).to_string());
        assert_eq!(
            "Full House (10 2)",
            score(HandCategory::FullHouse, &[8, 0]).to_string()
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let s = score(HandCategory::FourOfAKind, &[12, 11]);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(r#"{"category":"FourOfAKind","tie_break":[12,11]}"#, json);
        let back: HandScore = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
