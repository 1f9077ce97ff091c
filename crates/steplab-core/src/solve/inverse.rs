//! Matrix inversion by Gauss-Jordan elimination of the augmented
//! matrix `[A | I]`.
//!
//! The determinant is checked first so a singular input fails with a
//! structured error before any row work happens. Pivot factors are shown
//! as exact fractions where one exists, which keeps the row operations
//! legible for matrices with rational entries.

use crate::error::{EngineError, Result};
use crate::fraction::to_fraction;
use crate::matrix::Matrix;
use crate::solve::determinant;
use crate::trace::{Step, StepTrace};

/// Determinants smaller than this mean the matrix has no inverse.
const SINGULAR_TOLERANCE: f64 = 1e-10;

/// The inverse of a matrix together with its derivation and a
/// verification product.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InverseResult {
    /// A⁻¹.
    pub inverse: Matrix,
    /// det(A), computed for the singularity check.
    pub determinant: f64,
    /// A × A⁻¹, for the caller to confirm it is the identity.
    pub verification: Matrix,
    /// The Gauss-Jordan derivation, augmented-matrix snapshots included.
    pub trace: StepTrace,
}

/// Invert a square matrix, recording every row operation.
///
/// Returns [`EngineError::SingularMatrix`] when `|det(A)| < 1e-10`.
///
/// ```
/// # use steplab_core::matrix::Matrix;
/// # use steplab_core::solve::inverse;
/// let a = Matrix::from_vec(vec![4.0, 7.0, 2.0, 6.0], 2, 2).unwrap();
/// let result = inverse::invert(&a).unwrap();
/// assert!((result.inverse[(0, 0)] - 0.6).abs() < 1e-12);
/// assert!(result.verification.approx_eq(&Matrix::identity(2), 1e-10));
/// ```
pub fn invert(a: &Matrix) -> Result<InverseResult> {
    if !a.is_square() {
        return Err(EngineError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    let n = a.rows();

    let det = determinant::det(a)?;
    if det.abs() < SINGULAR_TOLERANCE {
        return Err(EngineError::SingularMatrix { det });
    }

    let mut trace = StepTrace::new();
    trace.push(Step::with_matrix("Original matrix A", a.clone()));
    trace.push(Step::note(format!(
        "Determinant: det(A) = {} ≠ 0, so A⁻¹ exists",
        to_fraction(det)
    )));

    // Augmented working matrix [A | I], n x 2n.
    let mut aug = Matrix::zeros(n, 2 * n);
    for i in 0..n {
        for j in 0..n {
            aug[(i, j)] = a[(i, j)];
        }
        aug[(i, n + i)] = 1.0;
    }
    trace.push(Step::with_matrix(
        "Create augmented matrix [A | I]",
        aug.clone(),
    ));

    for i in 0..n {
        // Partial pivoting on the left half.
        let mut max_row = i;
        for k in (i + 1)..n {
            if aug[(k, i)].abs() > aug[(max_row, i)].abs() {
                max_row = k;
            }
        }
        if max_row != i {
            aug.swap_rows(i, max_row);
            trace.push(Step::with_matrix(
                format!("Swap row {} ↔ row {}", i + 1, max_row + 1),
                aug.clone(),
            ));
        }

        let pivot = aug[(i, i)];
        if pivot != 1.0 {
            for j in 0..(2 * n) {
                aug[(i, j)] /= pivot;
            }
            trace.push(Step::with_matrix(
                format!("Row {} = Row {} / ({})", i + 1, i + 1, to_fraction(pivot)),
                aug.clone(),
            ));
        }

        for k in 0..n {
            if k == i || aug[(k, i)] == 0.0 {
                continue;
            }
            let factor = aug[(k, i)];
            for j in 0..(2 * n) {
                let aij = aug[(i, j)];
                aug[(k, j)] -= factor * aij;
            }
            trace.push(Step::with_matrix(
                format!(
                    "Row {} = Row {} - ({}) × Row {}",
                    k + 1,
                    k + 1,
                    to_fraction(factor),
                    i + 1
                ),
                aug.clone(),
            ));
        }
    }

    let mut inverse = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            inverse[(i, j)] = aug[(i, n + j)];
        }
    }
    trace.push(Step::with_matrix(
        "Final: extract A⁻¹ from the right half of [I | A⁻¹]",
        inverse.clone(),
    ));

    let verification = a.matmul(&inverse)?;

    Ok(InverseResult {
        inverse,
        determinant: det,
        verification,
        trace,
    })
}
