use crate::core::{Card, CardIter, Deck, Hand, HandCategory, HandScore, PokerError, Result};

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u16 = 0b1_0000_0000_1111;

/// Rank value of the wheel's high card. The ace plays low so the five is
/// high.
const WHEEL_HIGH: u8 = 3;

/// Rank value of an ace.
const ACE: u8 = 12;

/// The most significant set bit, as a rank value.
fn highest(value_set: u16) -> u8 {
    debug_assert!(value_set != 0);
    (15 - value_set.leading_zeros()) as u8
}

/// Rank values present in the set, highest first.
fn values_desc(value_set: u16) -> impl Iterator<Item = u8> {
    (0..13u8).rev().filter(move |&v| value_set & (1 << v) != 0)
}

/// Given the bitset of values in a five card hand, find the straight's high
/// card. Wheel is the lowest at 3, broadway the highest at 12.
///
/// Returns None if the values don't make a straight.
fn straight_high(value_set: u16) -> Option<u8> {
    if value_set.count_ones() != 5 {
        return None;
    }
    let high = highest(value_set);
    let low = value_set.trailing_zeros() as u8;
    if high - low == 4 {
        Some(high)
    } else if value_set == WHEEL {
        Some(WHEEL_HIGH)
    } else {
        None
    }
}

/// Score exactly five distinct cards.
///
/// Categories are tested strongest first and the first match wins. Which
/// value has a given multiplicity is always read off the count bitsets from
/// the top bit down, so ties between candidates go to the higher value.
fn score_five(cards: &[Card; 5]) -> HandScore {
    let mut value_to_count: [u8; 13] = [0; 13];
    // count => bitset of values.
    let mut count_to_value: [u16; 5] = [0; 5];
    let mut suit_set: u8 = 0;
    let mut value_set: u16 = 0;

    for c in cards {
        let v = c.rank_value();
        value_to_count[v as usize] += 1;
        value_set |= 1 << v;
        suit_set |= 1 << (c.suit as u8);
    }

    // Now rotate the value to count map.
    for (value, &count) in value_to_count.iter().enumerate() {
        count_to_value[count as usize] |= 1 << value;
    }

    let mut ranks: Vec<u8> = cards.iter().map(Card::rank_value).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = suit_set.count_ones() == 1;
    let straight = straight_high(value_set);

    match (straight, flush) {
        (Some(ACE), true) => return HandScore::new(HandCategory::RoyalFlush, vec![]),
        (Some(high), true) => return HandScore::new(HandCategory::StraightFlush, vec![high]),
        _ => {}
    }

    if count_to_value[4] != 0 {
        let quads = highest(count_to_value[4]);
        let kicker = highest(value_set ^ (1 << quads));
        HandScore::new(HandCategory::FourOfAKind, vec![quads, kicker])
    } else if count_to_value[3] != 0 && count_to_value[2] != 0 {
        let set = highest(count_to_value[3]);
        let pair = highest(count_to_value[2]);
        HandScore::new(HandCategory::FullHouse, vec![set, pair])
    } else if flush {
        HandScore::new(HandCategory::Flush, ranks)
    } else if let Some(high) = straight {
        HandScore::new(HandCategory::Straight, vec![high])
    } else if count_to_value[3] != 0 {
        let set = highest(count_to_value[3]);
        let mut tie_break = vec![set];
        tie_break.extend(values_desc(count_to_value[1]));
        HandScore::new(HandCategory::ThreeOfAKind, tie_break)
    } else if count_to_value[2].count_ones() == 2 {
        let mut tie_break: Vec<u8> = values_desc(count_to_value[2]).collect();
        tie_break.push(highest(count_to_value[1]));
        HandScore::new(HandCategory::TwoPair, tie_break)
    } else if count_to_value[2] != 0 {
        let mut tie_break = vec![highest(count_to_value[2])];
        tie_break.extend(values_desc(count_to_value[1]));
        HandScore::new(HandCategory::OnePair, tie_break)
    } else {
        HandScore::new(HandCategory::HighCard, ranks)
    }
}

/// Pick the strongest five card subset of at least five distinct cards. The
/// first subset to reach the best score wins, so among equal scores the
/// result follows `CardIter` order.
pub(crate) fn best_five_of(cards: &[Card]) -> (Hand, HandScore) {
    debug_assert!(cards.len() >= 5);
    // `CardIter` always starts with the first five cards.
    let mut best: [Card; 5] = std::array::from_fn(|i| cards[i]);
    let mut best_score = score_five(&best);
    for five in CardIter::<5>::new(cards).skip(1) {
        let score = score_five(&five);
        if score > best_score {
            best = five;
            best_score = score;
        }
    }
    (Hand::from_array(best), best_score)
}

/// Score exactly five cards.
///
/// # Examples
/// ```
/// use holdem_odds::core::{evaluate_hand, parse_cards, HandCategory};
///
/// let cards = parse_cards("10S JS QS KS AS").unwrap();
/// let score = evaluate_hand(&cards).unwrap();
/// assert_eq!(HandCategory::RoyalFlush, score.category);
/// assert!(score.tie_break.is_empty());
/// ```
pub fn evaluate_hand(cards: &[Card]) -> Result<HandScore> {
    let hand = Hand::new(cards)?;
    Ok(score_five(hand.cards()))
}

/// Find the best five card hand out of five, six or seven cards.
///
/// # Examples
/// ```
/// use holdem_odds::core::{best_five, parse_cards, HandCategory};
///
/// let cards = parse_cards("9S 8S QS JS 10S 2H 3C").unwrap();
/// let (hand, score) = best_five(&cards).unwrap();
/// assert_eq!(HandCategory::StraightFlush, score.category);
/// assert_eq!(vec![10], score.tie_break);
/// assert!(!hand.contains(&cards[5]));
/// ```
pub fn best_five(cards: &[Card]) -> Result<(Hand, HandScore)> {
    if cards.len() < 5 {
        return Err(PokerError::InsufficientCards(cards.len()));
    }
    if cards.len() > 7 {
        return Err(PokerError::WrongCardCount {
            expected: 7,
            found: cards.len(),
        });
    }
    Deck::known_set(cards)?;
    Ok(best_five_of(cards))
}

/// Anything that is a collection of cards can be ranked.
///
/// Implemented for `[Card]`, so `Vec<Card>`, arrays and `Hand` all pick it up
/// through deref.
pub trait Rankable {
    /// Score this collection as exactly five cards.
    fn evaluate(&self) -> Result<HandScore>;

    /// Find the best five card hand in this collection of 5 to 7 cards.
    fn best_five(&self) -> Result<(Hand, HandScore)>;
}

impl Rankable for [Card] {
    fn evaluate(&self) -> Result<HandScore> {
        evaluate_hand(self)
    }

    fn best_five(&self) -> Result<(Hand, HandScore)> {
        best_five(self)
    }
}

impl Hand {
    /// Score this hand. A `Hand` is always five distinct cards so this can't
    /// fail.
    pub fn score(&self) -> HandScore {
        score_five(self.cards())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{full_deck, parse_cards, Suit, Value};
    use rand::seq::SliceRandom;

    fn eval(s: &str) -> HandScore {
        evaluate_hand(&parse_cards(s).unwrap()).unwrap()
    }

    fn check(s: &str, category: HandCategory, tie_break: &[u8]) {
        let score = eval(s);
        assert_eq!(category, score.category, "{s}");
        assert_eq!(tie_break, &score.tie_break[..], "{s}");
    }

    #[test]
    fn test_royal_flush() {
        check("10S JS QS KS AS", HandCategory::RoyalFlush, &[]);
    }

    #[test]
    fn test_straight_flush() {
        check("9S 8S 7S 6S 5S", HandCategory::StraightFlush, &[7]);
        check("KH QH JH 10H 9H", HandCategory::StraightFlush, &[11]);
    }

    #[test]
    fn test_wheel_straight_flush() {
        check("AD 2D 3D 4D 5D", HandCategory::StraightFlush, &[3]);
    }

    #[test]
    fn test_four_of_a_kind() {
        check("AD AC AS AH 10S", HandCategory::FourOfAKind, &[12, 8]);
        check("3D 2C 2S 2H 2D", HandCategory::FourOfAKind, &[0, 1]);
    }

    #[test]
    fn test_full_house() {
        check("AD AC 9D 9C 9S", HandCategory::FullHouse, &[7, 12]);
        check("KD KC KS 2C 2S", HandCategory::FullHouse, &[11, 0]);
    }

    #[test]
    fn test_flush() {
        check("AD 8D 9D 10D 5D", HandCategory::Flush, &[12, 8, 7, 6, 3]);
    }

    #[test]
    fn test_straight() {
        check("2C 3S 4H 5S 6D", HandCategory::Straight, &[4]);
        check("AC KS QH JS 10D", HandCategory::Straight, &[12]);
    }

    #[test]
    fn test_wheel() {
        check("AD 2C 3S 4H 5S", HandCategory::Straight, &[3]);
        // The wheel is the lowest straight.
        assert!(eval("AD 2C 3S 4H 5S") < eval("2C 3S 4H 5S 6D"));
    }

    #[test]
    fn test_not_a_straight() {
        check("AD 2C 3S 4H 6D", HandCategory::HighCard, &[12, 4, 2, 1, 0]);
        check("KD AC 2S 3H 4D", HandCategory::HighCard, &[12, 11, 2, 1, 0]);
        // Spread of four but a pair in the middle.
        check("2D 2C 3S 4H 6D", HandCategory::OnePair, &[0, 4, 2, 1]);
    }

    #[test]
    fn test_three_of_a_kind() {
        check("2C 2S 2H 5S 6D", HandCategory::ThreeOfAKind, &[0, 4, 3]);
    }

    #[test]
    fn test_two_pair() {
        check("AD AC 9D 9C 10S", HandCategory::TwoPair, &[12, 7, 8]);
        check("3D 3C 4D 4C 2S", HandCategory::TwoPair, &[2, 1, 0]);
    }

    #[test]
    fn test_one_pair() {
        check("AD AC 9D 8C 10S", HandCategory::OnePair, &[12, 8, 7, 6]);
    }

    #[test]
    fn test_high_card() {
        check("AD 8H 9C 10C 5C", HandCategory::HighCard, &[12, 8, 7, 6, 3]);
    }

    #[test]
    fn test_order_within_category() {
        assert!(eval("AS AH KD QC JS") > eval("KS KH AD QC JS"));
        assert!(eval("AS AH KD KC JS") > eval("AS AH QD QC KS"));
        assert!(eval("AS AH AD KC JS") > eval("KS KH KD AC JS"));
        assert!(eval("AS AH KD QC JS") > eval("AD AC KH QS 10H"));
    }

    #[test]
    fn test_suits_only_is_a_tie() {
        assert_eq!(eval("AS AH KD QC JS"), eval("AD AC KH QS JH"));
    }

    #[test]
    fn test_evaluate_wrong_count() {
        let cards = parse_cards("AS KS QS JS").unwrap();
        assert_eq!(
            Err(PokerError::WrongCardCount {
                expected: 5,
                found: 4
            }),
            evaluate_hand(&cards)
        );
        let cards = parse_cards("AS KS QS JS 10S 9S").unwrap();
        assert_eq!(
            Err(PokerError::WrongCardCount {
                expected: 5,
                found: 6
            }),
            cards.evaluate()
        );
    }

    #[test]
    fn test_every_five_card_hand() {
        let deck = full_deck();
        let mut counts = [0usize; 10];
        for five in CardIter::<5>::new(&deck) {
            let score = score_five(&five);
            assert_eq!(score.category.tie_break_len(), score.tie_break.len());
            assert!(score.tie_break.iter().all(|&v| v <= ACE));
            counts[score.category as usize] += 1;
        }
        assert_eq!(
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 36, 4],
            counts
        );
    }

    #[test]
    fn test_best_five_straight_flush() {
        let cards = parse_cards("9S 8S QS JS 10S 2H 3C").unwrap();
        let (hand, score) = best_five(&cards).unwrap();
        assert_eq!(HandCategory::StraightFlush, score.category);
        assert_eq!(vec![10], score.tie_break);
        let expected = Deck::known_set(&parse_cards("9S 8S QS JS 10S").unwrap()).unwrap();
        assert_eq!(expected, Deck::known_set(&hand).unwrap());
        assert!(hand.iter().all(|c| c.suit == Suit::Spade));
    }

    #[test]
    fn test_best_five_of_five() {
        let cards = parse_cards("2C 7D 9H JS KC").unwrap();
        let (hand, score) = cards.best_five().unwrap();
        assert_eq!(&cards[..], &hand[..]);
        assert_eq!(eval("2C 7D 9H JS KC"), score);
        assert_eq!(score, hand.score());
    }

    #[test]
    fn test_best_five_picks_higher_full_house() {
        let cards = parse_cards("AS 2H 2D 2C 8D 8S 8C").unwrap();
        let (_, score) = best_five(&cards).unwrap();
        assert_eq!(HandCategory::FullHouse, score.category);
        assert_eq!(vec![6, 0], score.tie_break);
    }

    #[test]
    fn test_best_five_wheel_straight_flush_over_straight() {
        let cards = parse_cards("2D 3D 4D 5D 6H 7C AD").unwrap();
        let (_, score) = best_five(&cards).unwrap();
        assert_eq!(HandCategory::StraightFlush, score.category);
        assert_eq!(vec![3], score.tie_break);
    }

    #[test]
    fn test_best_five_is_optimal() {
        let mut rng = rand::rng();
        let mut deck = full_deck();
        for n in [6, 7] {
            for _ in 0..500 {
                deck.shuffle(&mut rng);
                let cards = &deck[..n];
                let (hand, best) = best_five(cards).unwrap();
                assert_eq!(5, hand.len());
                assert!(hand.iter().all(|c| cards.contains(c)));
                assert_eq!(best, hand.score());
                for five in CardIter::<5>::new(cards) {
                    assert!(best >= score_five(&five));
                }
            }
        }
    }

    #[test]
    fn test_best_five_errors() {
        let cards = parse_cards("AS KS QS JS").unwrap();
        assert_eq!(Err(PokerError::InsufficientCards(4)), best_five(&cards));
        assert_eq!(Err(PokerError::InsufficientCards(0)), best_five(&[]));

        let cards = parse_cards("AS KS QS JS 10S 9S 8S 7S").unwrap();
        assert_eq!(
            Err(PokerError::WrongCardCount {
                expected: 7,
                found: 8
            }),
            best_five(&cards)
        );

        let dup = Card::new(Value::Ace, Suit::Spade);
        let cards = [
            dup,
            dup,
            Card::new(Value::Two, Suit::Club),
            Card::new(Value::Three, Suit::Club),
            Card::new(Value::Four, Suit::Club),
        ];
        assert_eq!(Err(PokerError::DuplicateCard(dup)), best_five(&cards));
    }
}
