//! Expected hitting times via the fundamental matrix.
//!
//! For an absorbing chain with transient block `Q`, the fundamental matrix
//! `N = (I - Q)^-1` exists whenever absorption is reachable from every
//! transient state, and the sum of row `i` of `N` is the expected number of
//! steps to absorption starting from state `i`. Starting before any draw is
//! state 0, so the expected waiting time is the row-0 sum.

use tracing::debug;
use tyche_linalg::{Matrix, inverse};

use crate::automaton::transition_counts;
use crate::error::ChainError;
use crate::pattern::{Pattern, pattern_count, patterns};
use crate::transition::{probability_matrix, validate_probability};

/// Computes the fundamental matrix `N = (I - Q)^-1` of an absorbing-chain
/// probability matrix whose last row/column is the absorbing state.
///
/// # Errors
///
/// Returns [`ChainError::InvalidProbability`] if `prob` is not a valid
/// probability matrix or has no transient states, and surfaces
/// [`tyche_linalg::LinalgError::Singular`] if `I - Q` has a determinant of
/// exactly zero (absorption unreachable from some state).
pub fn fundamental_matrix(prob: &Matrix) -> Result<Matrix, ChainError> {
    validate_probability(prob)?;
    if prob.rows() < 2 {
        return Err(ChainError::InvalidProbability {
            reason: "matrix has no transient states".to_string(),
        });
    }

    let n = prob.rows() - 1;
    let mut q = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            q.set(i, j, prob.get(i, j));
        }
    }

    let i_minus_q = Matrix::identity(n).sub(&q)?;
    Ok(inverse(&i_minus_q)?)
}

/// Expected number of steps to absorption starting from state 0: the sum of
/// row 0 of the fundamental matrix.
///
/// # Errors
///
/// Same as [`fundamental_matrix`].
pub fn expected_steps(prob: &Matrix) -> Result<f64, ChainError> {
    let fundamental = fundamental_matrix(prob)?;
    Ok(fundamental.row(0).iter().sum())
}

/// Expected number of uniform draws until `pattern` first appears.
///
/// Runs the full per-pattern pipeline: automaton counts, probability
/// matrix, fundamental matrix, row-0 sum.
///
/// # Errors
///
/// Surfaces a singular `I - Q` as [`ChainError::Linalg`]; this does not
/// occur for chains built from a valid pattern.
pub fn waiting_time(pattern: &Pattern) -> Result<f64, ChainError> {
    let counts = transition_counts(pattern);
    let prob = probability_matrix(&counts);
    expected_steps(&prob)
}

/// Computes the expected waiting time of every pattern of length `len` over
/// an alphabet of `alphabet_size` symbols, in base-`m` enumeration order.
///
/// # Errors
///
/// Rejects invalid `(m, len)` configurations before any computation;
/// per-pattern failures abort the whole run (they are deterministic, so a
/// retry would reproduce them).
pub fn pattern_waiting_times(
    alphabet_size: u16,
    len: usize,
) -> Result<Vec<(Pattern, f64)>, ChainError> {
    let total = pattern_count(alphabet_size, len)?;
    let mut results = Vec::with_capacity(total as usize);

    for pattern in patterns(alphabet_size, len)? {
        let value = waiting_time(&pattern)?;
        debug!(pattern = %pattern, value, "waiting time computed");
        results.push((pattern, value));
    }
    Ok(results)
}
