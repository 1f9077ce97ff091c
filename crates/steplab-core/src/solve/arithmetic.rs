//! Entry-by-entry traced matrix arithmetic.
//!
//! Each operation returns the result matrix plus one [`EntryDetail`] per
//! entry showing how that entry was computed, e.g.
//! `c11 = (1 × 5) + (2 × 7) = 19` for a product. Entry labels are
//! 1-based, matching the row/column numbering used everywhere else in
//! the derivations.

use crate::error::{EngineError, Result};
use crate::matrix::Matrix;

/// The worked formula for one entry of a result matrix.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryDetail {
    /// Zero-based row of the entry.
    pub row: usize,
    /// Zero-based column of the entry.
    pub col: usize,
    pub formula: String,
}

/// A result matrix with per-entry derivations, in row-major order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArithmeticResult {
    pub matrix: Matrix,
    pub details: Vec<EntryDetail>,
}

/// `A + B` with per-entry formulas.
///
/// ```
/// # use steplab_core::matrix::Matrix;
/// # use steplab_core::solve::arithmetic;
/// let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
/// let b = Matrix::from_vec(vec![5.0, 6.0, 7.0, 8.0], 2, 2).unwrap();
/// let sum = arithmetic::add(&a, &b).unwrap();
/// assert_eq!(sum.details[0].formula, "c11 = 1 + 5 = 6");
/// ```
pub fn add(a: &Matrix, b: &Matrix) -> Result<ArithmeticResult> {
    elementwise(a, b, "+", |x, y| x + y)
}

/// `A - B` with per-entry formulas.
pub fn sub(a: &Matrix, b: &Matrix) -> Result<ArithmeticResult> {
    elementwise(a, b, "-", |x, y| x - y)
}

fn elementwise(
    a: &Matrix,
    b: &Matrix,
    op: &str,
    f: impl Fn(f64, f64) -> f64,
) -> Result<ArithmeticResult> {
    if a.shape() != b.shape() {
        return Err(EngineError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    let (rows, cols) = a.shape();
    let mut matrix = Matrix::zeros(rows, cols);
    let mut details = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            let value = f(a[(i, j)], b[(i, j)]);
            matrix[(i, j)] = value;
            details.push(EntryDetail {
                row: i,
                col: j,
                formula: format!(
                    "c{}{} = {} {op} {} = {value}",
                    i + 1,
                    j + 1,
                    a[(i, j)],
                    b[(i, j)]
                ),
            });
        }
    }
    Ok(ArithmeticResult { matrix, details })
}

/// `A × B` with the expanded product sum for every entry.
///
/// The inner dimensions must agree; an `m x n` times `n x p` input gives
/// an `m x p` result.
pub fn mul(a: &Matrix, b: &Matrix) -> Result<ArithmeticResult> {
    if a.cols() != b.rows() {
        return Err(EngineError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    let (m, n, p) = (a.rows(), a.cols(), b.cols());
    let mut matrix = Matrix::zeros(m, p);
    let mut details = Vec::with_capacity(m * p);
    for i in 0..m {
        for j in 0..p {
            let mut value = 0.0;
            let mut terms = Vec::with_capacity(n);
            for k in 0..n {
                value += a[(i, k)] * b[(k, j)];
                terms.push(format!("({} × {})", a[(i, k)], b[(k, j)]));
            }
            matrix[(i, j)] = value;
            details.push(EntryDetail {
                row: i,
                col: j,
                formula: format!("c{}{} = {} = {value}", i + 1, j + 1, terms.join(" + ")),
            });
        }
    }
    Ok(ArithmeticResult { matrix, details })
}

/// `Aᵗ` with one formula per entry showing where it came from.
#[must_use]
pub fn transpose(a: &Matrix) -> ArithmeticResult {
    let matrix = a.transpose();
    let (rows, cols) = matrix.shape();
    let mut details = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            details.push(EntryDetail {
                row: i,
                col: j,
                formula: format!("b{}{} = a{}{} = {}", i + 1, j + 1, j + 1, i + 1, matrix[(i, j)]),
            });
        }
    }
    ArithmeticResult { matrix, details }
}
