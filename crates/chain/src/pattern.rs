//! Target patterns and base-m enumeration.

use std::fmt;

use crate::error::ChainError;

/// A symbol drawn from the alphabet `{0, ..., m-1}`.
pub type Symbol = u8;

/// Maximum supported alphabet size (symbols are stored as `u8`).
pub const MAX_ALPHABET: u16 = 256;

/// An immutable target pattern: an ordered run of symbols to wait for.
///
/// A pattern carries the alphabet size it was drawn from, since the
/// absorbing chain it induces depends on both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    symbols: Vec<Symbol>,
    alphabet_size: u16,
}

impl Pattern {
    /// Builds a pattern, validating the alphabet and every symbol.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::AlphabetTooSmall`] or
    /// [`ChainError::AlphabetTooLarge`] for an invalid alphabet size,
    /// [`ChainError::EmptyPattern`] for zero-length input, and
    /// [`ChainError::SymbolOutOfRange`] if any symbol is `>= m`.
    pub fn new(symbols: Vec<Symbol>, alphabet_size: u16) -> Result<Self, ChainError> {
        validate_alphabet(alphabet_size)?;
        if symbols.is_empty() {
            return Err(ChainError::EmptyPattern);
        }
        for &symbol in &symbols {
            if u16::from(symbol) >= alphabet_size {
                return Err(ChainError::SymbolOutOfRange {
                    symbol,
                    alphabet_size,
                });
            }
        }
        Ok(Self {
            symbols,
            alphabet_size,
        })
    }

    /// Builds the `index`-th pattern of length `len` in base-`m` numeric
    /// order (index 0 is all zeros).
    ///
    /// # Errors
    ///
    /// Returns the same configuration errors as [`Pattern::new`], plus
    /// [`ChainError::TooManyPatterns`] if `m^len` overflows a `u64`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= m^len`.
    pub fn from_index(index: u64, alphabet_size: u16, len: usize) -> Result<Self, ChainError> {
        let total = pattern_count(alphabet_size, len)?;
        assert!(
            index < total,
            "pattern index {index} out of range (total {total})"
        );
        Ok(Self {
            symbols: digits(index, alphabet_size, len),
            alphabet_size,
        })
    }

    /// Number of symbols in the pattern.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: construction rejects empty patterns.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The pattern's symbols in order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The alphabet size this pattern was drawn from.
    pub fn alphabet_size(&self) -> u16 {
        self.alphabet_size
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Number of distinct patterns of length `len` over `alphabet_size` symbols.
///
/// # Errors
///
/// Returns configuration errors for invalid `(m, len)` and
/// [`ChainError::TooManyPatterns`] if `m^len` overflows a `u64`.
pub fn pattern_count(alphabet_size: u16, len: usize) -> Result<u64, ChainError> {
    validate_alphabet(alphabet_size)?;
    if len == 0 {
        return Err(ChainError::EmptyPattern);
    }
    let overflow = ChainError::TooManyPatterns { alphabet_size, len };
    let exp = u32::try_from(len).map_err(|_| overflow.clone())?;
    u64::from(alphabet_size)
        .checked_pow(exp)
        .ok_or(overflow)
}

/// Returns an iterator over all `m^len` patterns in base-`m` numeric order.
///
/// # Errors
///
/// Same as [`pattern_count`].
pub fn patterns(alphabet_size: u16, len: usize) -> Result<Patterns, ChainError> {
    let total = pattern_count(alphabet_size, len)?;
    Ok(Patterns {
        alphabet_size,
        len,
        next: 0,
        total,
    })
}

/// Iterator over every pattern of a fixed length, in base-`m` order.
#[derive(Debug, Clone)]
pub struct Patterns {
    alphabet_size: u16,
    len: usize,
    next: u64,
    total: u64,
}

impl Iterator for Patterns {
    type Item = Pattern;

    fn next(&mut self) -> Option<Pattern> {
        if self.next >= self.total {
            return None;
        }
        let pattern = Pattern {
            symbols: digits(self.next, self.alphabet_size, self.len),
            alphabet_size: self.alphabet_size,
        };
        self.next += 1;
        Some(pattern)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Patterns {}

/// Base-`m` digits of `index`, most significant first, zero-padded to `len`.
fn digits(index: u64, alphabet_size: u16, len: usize) -> Vec<Symbol> {
    let m = u64::from(alphabet_size);
    let mut symbols = vec![0 as Symbol; len];
    let mut rem = index;
    for slot in symbols.iter_mut().rev() {
        *slot = (rem % m) as Symbol;
        rem /= m;
    }
    symbols
}

fn validate_alphabet(alphabet_size: u16) -> Result<(), ChainError> {
    if alphabet_size < 2 {
        return Err(ChainError::AlphabetTooSmall { alphabet_size });
    }
    if alphabet_size > MAX_ALPHABET {
        return Err(ChainError::AlphabetTooLarge {
            alphabet_size,
            max: MAX_ALPHABET,
        });
    }
    Ok(())
}
