// Candidate generator: every ordering of every bounded-size token subset
//
// Candidates are produced lazily. The cursor state is the current subset
// size, the subset itself (sorted indices into the token slice) and an
// ordering of that subset; each `next` call advances the ordering, then the
// subset, then the size.

pub mod combination;
pub mod permutation;

use combination::{first_combination, next_combination};
use permutation::{first_permutation, next_permutation};

/// Largest subset size enumerated for `n` tokens under growth cap `cap`.
///
/// This is `min(n, cap) - 1`, raised to 1 whenever there is at least one
/// token so a lone token still yields itself. Zero tokens or a zero cap
/// enumerate nothing.
///
/// | n \ cap | 1 | 2 | 4 | 6 |
/// |---------|---|---|---|---|
/// | 1       | 1 | 1 | 1 | 1 |
/// | 3       | 1 | 1 | 2 | 2 |
/// | 5       | 1 | 1 | 3 | 4 |
/// | 10      | 1 | 1 | 3 | 5 |
pub fn max_subset_len(n: usize, cap: usize) -> usize {
    if n == 0 || cap == 0 {
        return 0;
    }
    (n.min(cap) - 1).max(1)
}

/// Exact number of candidates for `n` tokens under growth cap `cap`.
///
/// The sum of the falling factorials `n!/(n-i)!` for `i` in
/// `1..=max_subset_len(n, cap)`. Returns `None` if the count overflows
/// `u128`.
///
/// Growth for the default cap of 4 is cubic (`n=10` gives 820, `n=100`
/// gives 980 200); with a cap of 6 it is quintic (`n=10` gives 36 100,
/// `n=100` gives about 9.1e9).
pub fn candidate_count(n: usize, cap: usize) -> Option<u128> {
    let n128 = n as u128;
    let mut total: u128 = 0;
    let mut falling: u128 = 1;
    for i in 0..max_subset_len(n, cap) as u128 {
        falling = falling.checked_mul(n128 - i)?;
        total = total.checked_add(falling)?;
    }
    Some(total)
}

/// Lazy, restartable candidate sequence over a token slice.
///
/// Order: subsets by increasing size; within a size, subsets in lexicographic
/// index order; within a subset, orderings in lexicographic position order.
/// Each ordering is concatenated without separator. No deduplication is
/// done, so distinct orderings that spell the same text are all yielded.
#[derive(Debug, Clone)]
pub struct Candidates<'a, S = String> {
    tokens: &'a [S],
    max_len: usize,
    /// Current subset size; 0 before the first candidate.
    size: usize,
    subset: Vec<usize>,
    order: Vec<usize>,
    emitted: u128,
    total: Option<u128>,
    done: bool,
}

impl<'a, S: AsRef<str>> Candidates<'a, S> {
    /// Enumerate candidates of `tokens` with subset sizes bounded by `cap`.
    pub fn new(tokens: &'a [S], cap: usize) -> Self {
        let max_len = max_subset_len(tokens.len(), cap);
        Self {
            tokens,
            max_len,
            size: 0,
            subset: Vec::with_capacity(max_len),
            order: Vec::with_capacity(max_len),
            emitted: 0,
            total: candidate_count(tokens.len(), cap),
            done: max_len == 0,
        }
    }

    /// Rewind to the first candidate.
    pub fn reset(&mut self) {
        self.size = 0;
        self.subset.clear();
        self.order.clear();
        self.emitted = 0;
        self.done = self.max_len == 0;
    }

    /// Largest subset size this sequence enumerates.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Total number of candidates in the full sequence (`None` on overflow).
    pub fn total(&self) -> Option<u128> {
        self.total
    }

    /// Number of candidates yielded since the last reset.
    pub fn emitted(&self) -> u128 {
        self.emitted
    }

    /// Candidates not yet yielded (`None` if the total overflows).
    pub fn remaining(&self) -> Option<u128> {
        self.total.map(|t| t - self.emitted)
    }

    /// Step the cursor. Returns `false` once the sequence is exhausted.
    fn advance(&mut self) -> bool {
        if self.size == 0 {
            return self.start_size(1);
        }
        if next_permutation(&mut self.order) {
            return true;
        }
        if next_combination(&mut self.subset, self.tokens.len()) {
            first_permutation(&mut self.order, self.size);
            return true;
        }
        self.start_size(self.size + 1)
    }

    fn start_size(&mut self, size: usize) -> bool {
        if size > self.max_len {
            return false;
        }
        self.size = size;
        first_combination(&mut self.subset, size);
        first_permutation(&mut self.order, size);
        true
    }

    fn render(&self) -> String {
        let len = self
            .order
            .iter()
            .map(|&p| self.tokens[self.subset[p]].as_ref().len())
            .sum();
        let mut out = String::with_capacity(len);
        for &p in &self.order {
            out.push_str(self.tokens[self.subset[p]].as_ref());
        }
        out
    }
}

impl<S: AsRef<str>> Iterator for Candidates<'_, S> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        if !self.advance() {
            self.done = true;
            return None;
        }
        self.emitted += 1;
        Some(self.render())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.remaining().map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            _ => (usize::MAX, None),
        }
    }
}

impl<S: AsRef<str>> std::iter::FusedIterator for Candidates<'_, S> {}
