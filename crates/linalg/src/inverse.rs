//! Matrix inversion via the cofactor/adjugate method.
//!
//! `inverse(A) = adjugate(A) / determinant(A)`, with the determinant
//! computed by recursive Laplace expansion along the first row. Cost is
//! factorial in the dimension; callers are expected to keep matrices small.

use crate::error::LinalgError;
use crate::matrix::Matrix;

/// Computes the determinant by Laplace expansion along the first row.
///
/// # Errors
///
/// Returns [`LinalgError::NotSquare`] if the matrix is not square.
pub fn determinant(a: &Matrix) -> Result<f64, LinalgError> {
    require_square(a)?;
    Ok(det_recursive(a))
}

/// Returns the minor of `a` at `(row, col)`: the submatrix obtained by
/// deleting that row and column.
///
/// # Panics
///
/// Panics if `a` is not square with dimension at least 2, or if the indices
/// are out of bounds.
pub fn minor(a: &Matrix, row: usize, col: usize) -> Matrix {
    let n = a.rows();
    assert!(a.is_square(), "minor requires a square matrix");
    assert!(n >= 2, "minor requires dimension >= 2, got {n}");
    assert!(row < n && col < n, "minor index ({row}, {col}) out of bounds");

    let mut result = Matrix::zeros(n - 1, n - 1);
    let mut ri = 0;
    for i in 0..n {
        if i == row {
            continue;
        }
        let mut rj = 0;
        for j in 0..n {
            if j == col {
                continue;
            }
            result.set(ri, rj, a.get(i, j));
            rj += 1;
        }
        ri += 1;
    }
    result
}

/// Computes the adjugate: the transpose of the signed cofactor matrix.
///
/// Entry `(j, i)` of the result is `sign(i + j) * det(minor(a, i, j))`.
/// The adjugate of a 1x1 matrix is `[[1.0]]`.
///
/// # Errors
///
/// Returns [`LinalgError::NotSquare`] if the matrix is not square.
pub fn adjugate(a: &Matrix) -> Result<Matrix, LinalgError> {
    require_square(a)?;
    let n = a.rows();
    if n == 1 {
        return Matrix::from_rows(vec![vec![1.0]]);
    }

    let mut adj = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            // Transpose placement: cofactor of (i, j) lands at (j, i).
            adj.set(j, i, sign * det_recursive(&minor(a, i, j)));
        }
    }
    Ok(adj)
}

/// Computes the inverse as `adjugate / determinant`.
///
/// # Errors
///
/// Returns [`LinalgError::NotSquare`] if the matrix is not square, and
/// [`LinalgError::Singular`] if the determinant is exactly zero.
pub fn inverse(a: &Matrix) -> Result<Matrix, LinalgError> {
    let det = determinant(a)?;
    if det == 0.0 {
        return Err(LinalgError::Singular);
    }

    let adj = adjugate(a)?;
    let n = a.rows();
    let mut inv = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            inv.set(i, j, adj.get(i, j) / det);
        }
    }
    Ok(inv)
}

fn require_square(a: &Matrix) -> Result<(), LinalgError> {
    if !a.is_square() {
        return Err(LinalgError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    Ok(())
}

fn det_recursive(a: &Matrix) -> f64 {
    let n = a.rows();
    if n == 1 {
        return a.get(0, 0);
    }

    let mut det = 0.0;
    let mut sign = 1.0;
    for col in 0..n {
        det += sign * a.get(0, col) * det_recursive(&minor(a, 0, col));
        sign = -sign;
    }
    det
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn determinant_1x1() {
        let a = Matrix::from_rows(vec![vec![3.5]]).unwrap();
        assert_eq!(determinant(&a).unwrap(), 3.5);
    }

    #[test]
    fn determinant_2x2() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_relative_eq!(determinant(&a).unwrap(), -2.0);
    }

    #[test]
    fn determinant_3x3() {
        // det = 6*(2*6 - 1*4) - 1*(4*6 - 1*2) + 1*(4*4 - 2*2) = 48 - 22 + 12 = 38
        let a = Matrix::from_rows(vec![
            vec![6.0, 1.0, 1.0],
            vec![4.0, 2.0, 1.0],
            vec![2.0, 4.0, 6.0],
        ])
        .unwrap();
        assert_relative_eq!(determinant(&a).unwrap(), 38.0);
    }

    #[test]
    fn determinant_identity() {
        for n in 1..=5 {
            assert_eq!(determinant(&Matrix::identity(n)).unwrap(), 1.0);
        }
    }

    #[test]
    fn determinant_not_square() {
        let a = Matrix::zeros(2, 3);
        assert!(matches!(
            determinant(&a),
            Err(LinalgError::NotSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn minor_deletes_row_and_col() {
        let a = Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap();
        let m = minor(&a, 1, 0);
        assert_eq!(m.row(0), &[2.0, 3.0]);
        assert_eq!(m.row(1), &[8.0, 9.0]);
    }

    #[test]
    fn adjugate_2x2() {
        // adj([[a, b], [c, d]]) = [[d, -b], [-c, a]]
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let adj = adjugate(&a).unwrap();
        assert_eq!(adj.row(0), &[4.0, -2.0]);
        assert_eq!(adj.row(1), &[-3.0, 1.0]);
    }

    #[test]
    fn adjugate_1x1() {
        let a = Matrix::from_rows(vec![vec![42.0]]).unwrap();
        let adj = adjugate(&a).unwrap();
        assert_eq!(adj.get(0, 0), 1.0);
    }

    #[test]
    fn inverse_1x1() {
        let a = Matrix::from_rows(vec![vec![0.5]]).unwrap();
        let inv = inverse(&a).unwrap();
        assert_relative_eq!(inv.get(0, 0), 2.0);
    }

    #[test]
    fn inverse_2x2_known() {
        // inv([[4, 7], [2, 6]]) = [[0.6, -0.7], [-0.2, 0.4]]
        let a = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
        let inv = inverse(&a).unwrap();
        assert_relative_eq!(inv.get(0, 0), 0.6);
        assert_relative_eq!(inv.get(0, 1), -0.7);
        assert_relative_eq!(inv.get(1, 0), -0.2);
        assert_relative_eq!(inv.get(1, 1), 0.4);
    }

    #[test]
    fn inverse_singular() {
        // Second row is a multiple of the first.
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        assert!(matches!(inverse(&a), Err(LinalgError::Singular)));
    }

    #[test]
    fn inverse_zero_matrix_singular() {
        let a = Matrix::zeros(3, 3);
        assert!(matches!(inverse(&a), Err(LinalgError::Singular)));
    }
}
