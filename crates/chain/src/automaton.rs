//! Prefix-matching automaton construction.
//!
//! The chain's state is the length of the longest suffix of the draws so
//! far that matches a leading prefix of the target pattern: states `0..n`
//! are transient, state `n` (full match) is absorbing. For each transient
//! state and each possible next symbol, [`step`] computes the resulting
//! state and [`transition_counts`] tallies the results into one row per
//! state.

use crate::pattern::{Pattern, Symbol};

/// Per-state symbol-transition counts for one pattern's absorbing chain.
///
/// Row `i` (transient state `i`) counts how many of the `m` possible next
/// symbols lead to each of the states `0..=n`. Every row sums to exactly
/// `m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix {
    counts: Vec<Vec<u32>>,
    alphabet_size: u16,
}

impl CountMatrix {
    /// Number of transient states (the pattern length `n`).
    pub fn n_transient(&self) -> usize {
        self.counts.len()
    }

    /// Total number of states including the absorbing one (`n + 1`).
    pub fn n_states(&self) -> usize {
        self.counts.len() + 1
    }

    /// The alphabet size `m` the counts were tallied over.
    pub fn alphabet_size(&self) -> u16 {
        self.alphabet_size
    }

    /// Returns the counts row for transient state `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state` is not transient.
    pub fn row(&self, state: usize) -> &[u32] {
        assert!(
            state < self.counts.len(),
            "state {state} is not transient (n = {})",
            self.counts.len()
        );
        &self.counts[state]
    }

    /// Returns how many symbols move the chain from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is not transient or `to` is out of range.
    pub fn count(&self, from: usize, to: usize) -> u32 {
        self.row(from)[to]
    }
}

/// Computes the state reached from transient state `state` on drawing
/// `symbol`: the length of the longest suffix of the updated draw history
/// that is a prefix of the pattern. A result of `pattern.len()` means the
/// pattern was completed (absorption).
///
/// # Panics
///
/// Panics if `state` is not transient or `symbol` is outside the alphabet.
pub fn step(pattern: &Pattern, state: usize, symbol: Symbol) -> usize {
    let n = pattern.len();
    assert!(state < n, "state {state} is not transient (n = {n})");
    assert!(
        u16::from(symbol) < pattern.alphabet_size(),
        "symbol {symbol} outside alphabet 0..{}",
        pattern.alphabet_size()
    );

    // The last state+1 observed symbols: the matched prefix plus the draw.
    let mut window = Vec::with_capacity(state + 1);
    window.extend_from_slice(&pattern.symbols()[..state]);
    window.push(symbol);

    longest_matching_prefix(pattern.symbols(), &window)
}

/// Builds the transition-count matrix for a pattern's absorbing chain:
/// `n` rows of `n + 1` counts, one row per transient state.
pub fn transition_counts(pattern: &Pattern) -> CountMatrix {
    let n = pattern.len();
    let m = pattern.alphabet_size();
    let mut counts = vec![vec![0u32; n + 1]; n];

    for state in 0..n {
        for s in 0..m {
            let next = step(pattern, state, s as Symbol);
            counts[state][next] += 1;
        }
    }

    CountMatrix {
        counts,
        alphabet_size: m,
    }
}

/// Length of the longest suffix of `window` that is a leading prefix of
/// `pattern`.
///
/// Drop offsets are scanned in increasing order, so the first hit is the
/// longest match; the empty suffix always matches, so the scan terminates
/// with 0 in the worst case. A window equal to the full pattern yields
/// `pattern.len()` (absorption).
fn longest_matching_prefix(pattern: &[Symbol], window: &[Symbol]) -> usize {
    for start in 0..window.len() {
        let tail = &window[start..];
        if pattern.starts_with(tail) {
            return tail.len();
        }
    }
    0
}
