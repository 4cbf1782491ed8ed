//! Probability-matrix assembly from transition counts.

use tyche_linalg::Matrix;

use crate::automaton::CountMatrix;
use crate::error::ChainError;

/// Tolerance for row-stochastic validation.
const ROW_SUM_TOL: f64 = 1e-9;

/// Assembles the full `(n+1) x (n+1)` row-stochastic probability matrix.
///
/// Transient rows are the counts divided by the alphabet size; the final
/// (absorbing) row is the identity row, so the chain stays absorbed with
/// probability 1.
pub fn probability_matrix(counts: &CountMatrix) -> Matrix {
    let n = counts.n_transient();
    let m = f64::from(counts.alphabet_size());

    let mut prob = Matrix::zeros(n + 1, n + 1);
    for state in 0..n {
        for (to, &count) in counts.row(state).iter().enumerate() {
            prob.set(state, to, f64::from(count) / m);
        }
    }
    prob.set(n, n, 1.0);
    prob
}

/// Renders the counts in fractional form for diagnostics.
///
/// Transient entries appear as `"c / m"` when nonzero and `"0.0"` otherwise;
/// the absorbing row is `"0.0", ..., "1.0"`. Nothing downstream consumes
/// this form.
pub fn display_rows(counts: &CountMatrix) -> Vec<Vec<String>> {
    let n = counts.n_transient();
    let m = counts.alphabet_size();

    let mut rows = Vec::with_capacity(n + 1);
    for state in 0..n {
        let row = counts
            .row(state)
            .iter()
            .map(|&count| {
                if count != 0 {
                    format!("{count} / {m}")
                } else {
                    "0.0".to_string()
                }
            })
            .collect();
        rows.push(row);
    }

    let mut absorbing = vec!["0.0".to_string(); n + 1];
    absorbing[n] = "1.0".to_string();
    rows.push(absorbing);
    rows
}

/// Validates that `prob` is a square, row-stochastic probability matrix.
///
/// Checks that all entries are finite and in `[0, 1]` and that every row
/// sums to 1 within `1e-9`.
///
/// # Errors
///
/// Returns [`ChainError::InvalidProbability`] describing the first
/// violation found.
pub fn validate_probability(prob: &Matrix) -> Result<(), ChainError> {
    if !prob.is_square() {
        return Err(ChainError::InvalidProbability {
            reason: format!("matrix is {}x{}, expected square", prob.rows(), prob.cols()),
        });
    }
    for i in 0..prob.rows() {
        let mut sum = 0.0;
        for (j, &p) in prob.row(i).iter().enumerate() {
            if !p.is_finite() {
                return Err(ChainError::InvalidProbability {
                    reason: format!("entry ({i}, {j}) is not finite: {p}"),
                });
            }
            if !(0.0..=1.0).contains(&p) {
                return Err(ChainError::InvalidProbability {
                    reason: format!("entry ({i}, {j}) = {p} is outside [0, 1]"),
                });
            }
            sum += p;
        }
        if (sum - 1.0).abs() > ROW_SUM_TOL {
            return Err(ChainError::InvalidProbability {
                reason: format!("row {i} sums to {sum}, expected ~1.0"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::transition_counts;
    use crate::pattern::Pattern;
    use approx::assert_abs_diff_eq;

    fn counts_for(symbols: &[u8], m: u16) -> CountMatrix {
        transition_counts(&Pattern::new(symbols.to_vec(), m).unwrap())
    }

    #[test]
    fn probability_known_pattern_00() {
        let prob = probability_matrix(&counts_for(&[0, 0], 2));
        assert_eq!(prob.row(0), &[0.5, 0.5, 0.0]);
        assert_eq!(prob.row(1), &[0.5, 0.0, 0.5]);
        assert_eq!(prob.row(2), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn probability_rows_are_stochastic() {
        for symbols in [&[0u8][..], &[0, 1], &[2, 0, 1], &[1, 1, 1, 1]] {
            let prob = probability_matrix(&counts_for(symbols, 3));
            for i in 0..prob.rows() {
                let sum: f64 = prob.row(i).iter().sum();
                assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-9);
            }
            assert!(validate_probability(&prob).is_ok());
        }
    }

    #[test]
    fn display_known_pattern_00() {
        let rows = display_rows(&counts_for(&[0, 0], 2));
        assert_eq!(rows[0], vec!["1 / 2", "1 / 2", "0.0"]);
        assert_eq!(rows[1], vec!["1 / 2", "0.0", "1 / 2"]);
        assert_eq!(rows[2], vec!["0.0", "0.0", "1.0"]);
    }

    #[test]
    fn validate_rejects_non_square() {
        let m = Matrix::zeros(2, 3);
        assert!(matches!(
            validate_probability(&m),
            Err(ChainError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn validate_rejects_bad_row_sum() {
        let m = Matrix::from_rows(vec![vec![0.5, 0.4], vec![0.0, 1.0]]).unwrap();
        assert!(matches!(
            validate_probability(&m),
            Err(ChainError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let m = Matrix::from_rows(vec![vec![1.5, -0.5], vec![0.0, 1.0]]).unwrap();
        assert!(matches!(
            validate_probability(&m),
            Err(ChainError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn validate_rejects_non_finite() {
        let m = Matrix::from_rows(vec![vec![f64::NAN, 1.0], vec![0.0, 1.0]]).unwrap();
        assert!(matches!(
            validate_probability(&m),
            Err(ChainError::InvalidProbability { .. })
        ));
    }
}
