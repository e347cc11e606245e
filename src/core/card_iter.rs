use crate::core::Card;

/// Given some cards create every group of `N` of them.
///
/// Groups come out in lexicographic index order, so for a stable input slice
/// the enumeration order is stable too. The iterator only holds indices into
/// the borrowed slice and can be rewound with [`CardIter::reset`].
#[derive(Debug, Clone)]
pub struct CardIter<'a, const N: usize> {
    /// All the possible cards that can be picked
    possible_cards: &'a [Card],

    /// Offsets of the group that will be returned next.
    idx: [usize; N],

    /// Set once every group has been returned.
    done: bool,
}

impl<'a, const N: usize> CardIter<'a, N> {
    /// Create a new `CardIter` over a slice of cards.
    ///
    /// # Examples
    /// ```
    /// use holdem_odds::core::{parse_cards, CardIter};
    ///
    /// let cards = parse_cards("AS KS QS JS").unwrap();
    /// assert_eq!(6, CardIter::<2>::new(&cards).count());
    /// ```
    pub fn new(possible_cards: &'a [Card]) -> Self {
        Self {
            possible_cards,
            idx: std::array::from_fn(|i| i),
            done: N > possible_cards.len(),
        }
    }

    /// Start over from the first group.
    pub fn reset(&mut self) {
        *self = Self::new(self.possible_cards);
    }

    /// Move the offsets to the next group, or mark the iterator done.
    fn advance(&mut self) {
        let len = self.possible_cards.len();
        // Find the right most offset that still has room to move. Offset `i`
        // can go no higher than `len - N + i` or the ones after it would run
        // off the end.
        for i in (0..N).rev() {
            if self.idx[i] < len - N + i {
                self.idx[i] += 1;
                for j in i + 1..N {
                    self.idx[j] = self.idx[j - 1] + 1;
                }
                return;
            }
        }
        self.done = true;
    }
}

impl<const N: usize> Iterator for CardIter<'_, N> {
    type Item = [Card; N];

    fn next(&mut self) -> Option<[Card; N]> {
        if self.done {
            return None;
        }
        let group = std::array::from_fn(|i| self.possible_cards[self.idx[i]]);
        self.advance();
        Some(group)
    }
}

/// Number of ways to pick `k` items out of `n`.
///
/// # Examples
/// ```
/// use holdem_odds::core::n_choose_k;
///
/// assert_eq!(990, n_choose_k(45, 2));
/// assert_eq!(21, n_choose_k(7, 5));
/// ```
pub fn n_choose_k(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u64, |acc, i| acc * (n - i) as u64 / (i + 1) as u64)
}
