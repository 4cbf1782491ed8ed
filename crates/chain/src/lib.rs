//! Expected waiting times for symbol patterns under uniform random draws.
//!
//! For a target pattern of length `n` over an alphabet of size `m`, this
//! crate models the draw process as an absorbing Markov chain whose state is
//! the longest prefix of the pattern currently matched, then computes the
//! expected number of draws until the pattern first appears via the
//! fundamental-matrix identity `N = (I - Q)^-1`.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │   pattern     │────▶│   automaton    │────▶│    transition    │
//!  │  (enumerate)  │     │ (count steps)  │     │ (probabilities)  │
//!  └──────────────┘     └────────────────┘     └────────┬─────────┘
//!                                                       │
//!                                              ┌────────▼─────────┐
//!                                              │     hitting      │
//!                                              │  (I-Q inverse)   │
//!                                              └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use tyche_chain::{Pattern, waiting_time};
//!
//! // Expected draws until "heads, heads" with a fair coin: 6.
//! let pattern = Pattern::new(vec![0, 0], 2).unwrap();
//! let e = waiting_time(&pattern).unwrap();
//! assert!((e - 6.0).abs() < 1e-9);
//! ```

pub mod automaton;
pub mod error;
pub mod hitting;
pub mod pattern;
pub mod transition;

pub use automaton::{CountMatrix, step, transition_counts};
pub use error::ChainError;
pub use hitting::{expected_steps, fundamental_matrix, pattern_waiting_times, waiting_time};
pub use pattern::{MAX_ALPHABET, Pattern, Patterns, Symbol, pattern_count, patterns};
pub use transition::{display_rows, probability_matrix, validate_probability};
