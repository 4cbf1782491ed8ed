//! Error types for the tyche-chain crate.

use tyche_linalg::LinalgError;

/// Error type for all fallible operations in the tyche-chain crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChainError {
    /// Returned when the alphabet has fewer than two symbols.
    #[error("alphabet size {alphabet_size} is too small (must be >= 2)")]
    AlphabetTooSmall {
        /// The rejected alphabet size.
        alphabet_size: u16,
    },

    /// Returned when the alphabet exceeds the symbol range.
    #[error("alphabet size {alphabet_size} is too large (must be <= {max})")]
    AlphabetTooLarge {
        /// The rejected alphabet size.
        alphabet_size: u16,
        /// Maximum supported alphabet size.
        max: u16,
    },

    /// Returned when a pattern has no symbols.
    #[error("pattern must contain at least one symbol")]
    EmptyPattern,

    /// Returned when a pattern symbol is outside the alphabet.
    #[error("symbol {symbol} is outside the alphabet 0..{alphabet_size}")]
    SymbolOutOfRange {
        /// The offending symbol.
        symbol: u8,
        /// The alphabet size it was checked against.
        alphabet_size: u16,
    },

    /// Returned when `m^n` patterns cannot be counted in a `u64`.
    #[error("too many patterns: {alphabet_size}^{len} overflows")]
    TooManyPatterns {
        /// Alphabet size.
        alphabet_size: u16,
        /// Pattern length.
        len: usize,
    },

    /// Returned when a supplied matrix is not a valid absorbing-chain
    /// probability matrix.
    #[error("invalid probability matrix: {reason}")]
    InvalidProbability {
        /// Description of the problem.
        reason: String,
    },

    /// A linear-algebra failure, notably a singular `I - Q`.
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}
