//! Linear-system solver: Gaussian elimination with partial pivoting,
//! then back substitution.
//!
//! The forward pass records the full working state (coefficient matrix and
//! constants column) after every row swap and row operation; the backward
//! pass records each variable's resolved formula. Both traces together
//! replay the entire solution.

use crate::error::{EngineError, Result};
use crate::matrix::Matrix;
use crate::trace::{Step, StepTrace};
use crate::vector::Vector;

/// Pivots smaller than this leave the system without a unique solution.
const ZERO_PIVOT: f64 = 1e-10;

/// One resolved variable from back substitution.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackStep {
    /// Variable name, `x1`-based.
    pub variable: String,
    /// The substituted formula that resolves it.
    pub formula: String,
    /// The resolved value.
    pub value: f64,
}

/// The solution of `Ax = b` with both derivation passes.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemSolution {
    /// The solution vector `x`.
    pub solution: Vector,
    /// Forward elimination: initial system, swaps, row operations.
    pub forward: StepTrace,
    /// Back substitution, ordered `x1..xn`.
    pub back_substitution: Vec<BackStep>,
}

/// Solve the square system `Ax = b`.
///
/// Returns [`EngineError::SingularSystem`] when elimination leaves a zero
/// pivot on the diagonal — the system is inconsistent or has infinitely
/// many solutions, and no unique `x` exists.
///
/// ```
/// # use steplab_core::matrix::Matrix;
/// # use steplab_core::vector::Vector;
/// # use steplab_core::solve::elimination;
/// let a = Matrix::from_vec(vec![2.0, 1.0, 1.0, 3.0], 2, 2).unwrap();
/// let b = Vector::new(vec![3.0, 5.0]);
/// let result = elimination::solve_system(&a, &b).unwrap();
/// assert!((result.solution[0] - 0.8).abs() < 1e-12);
/// assert!((result.solution[1] - 1.4).abs() < 1e-12);
/// ```
pub fn solve_system(a: &Matrix, b: &Vector) -> Result<SystemSolution> {
    if !a.is_square() {
        return Err(EngineError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    let n = a.rows();
    if b.dim() != n {
        return Err(EngineError::DimensionMismatch {
            expected: n,
            got: b.dim(),
        });
    }

    // Work on copies; the caller's system is never touched.
    let mut m = a.clone();
    let mut c: Vec<f64> = b.as_slice().to_vec();
    let mut forward = StepTrace::new();

    forward.push(Step::with_system(
        "Initial system",
        m.clone(),
        Vector::new(c.clone()),
    ));

    for i in 0..n {
        // Partial pivoting: bring the largest |entry| in column i up.
        let mut max_row = i;
        for k in (i + 1)..n {
            if m[(k, i)].abs() > m[(max_row, i)].abs() {
                max_row = k;
            }
        }
        if max_row != i {
            m.swap_rows(i, max_row);
            c.swap(i, max_row);
            forward.push(Step::with_system(
                format!("Swap row {} ↔ row {}", i + 1, max_row + 1),
                m.clone(),
                Vector::new(c.clone()),
            ));
        }

        for k in (i + 1)..n {
            if m[(i, i)] == 0.0 {
                continue;
            }
            let factor = m[(k, i)] / m[(i, i)];
            if factor == 0.0 {
                continue;
            }
            c[k] -= factor * c[i];
            for j in i..n {
                let mij = m[(i, j)];
                m[(k, j)] -= factor * mij;
            }
            forward.push(Step::with_system(
                format!("Row {} = Row {} - ({factor:.2}) × Row {}", k + 1, k + 1, i + 1),
                m.clone(),
                Vector::new(c.clone()),
            ));
        }
    }

    // Back substitution, last row upward.
    let mut x = vec![0.0; n];
    let mut back = Vec::with_capacity(n);
    for i in (0..n).rev() {
        let pivot = m[(i, i)];
        if pivot.abs() < ZERO_PIVOT {
            return Err(EngineError::SingularSystem);
        }
        let mut xi = c[i];
        let mut formula = format!("x{} = {:.4}", i + 1, c[i]);
        for j in (i + 1)..n {
            xi -= m[(i, j)] * x[j];
            formula.push_str(&format!(" - ({:.2} × {:.4})", m[(i, j)], x[j]));
        }
        xi /= pivot;
        formula.push_str(&format!(" / {pivot:.2} = {xi:.4}"));
        x[i] = xi;
        back.push(BackStep {
            variable: format!("x{}", i + 1),
            formula,
            value: xi,
        });
    }
    back.reverse();

    Ok(SystemSolution {
        solution: Vector::new(x),
        forward,
        back_substitution: back,
    })
}
