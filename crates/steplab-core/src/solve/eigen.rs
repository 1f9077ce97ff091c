//! Eigendecomposition of 2×2 matrices via the characteristic polynomial.
//!
//! For a 2×2 matrix the characteristic equation is the quadratic
//! `λ² - tr(A)λ + det(A) = 0`, solved in closed form. A negative
//! discriminant yields a conjugate complex pair, reported as structured
//! data rather than an error; complex eigenvalues have no real
//! eigenvectors, so the pair list is empty in that case.
//!
//! Eigenvectors come from the null space of `A - λI`. Row one gives the
//! ray `(b, λ - a)` and row two the ray `(λ - d, c)`; whichever row has a
//! usable off-diagonal entry is taken, so triangular and diagonal inputs
//! never divide by zero.

use crate::error::{EngineError, Result};
use crate::matrix::Matrix;
use crate::trace::{Step, StepTrace};
use crate::vector::Vector;

/// Entries below this are treated as zero when picking an eigenvector ray.
const NULL_TOLERANCE: f64 = 1e-10;

/// The roots of the characteristic polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Eigenvalues {
    /// Two real roots, largest first.
    Real(f64, f64),
    /// A conjugate pair `re ± im·i`.
    Complex { re: f64, im: f64 },
}

/// One real eigenvalue with its unit eigenvector and the verification
/// products `Av` and `λv`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EigenPair {
    pub value: f64,
    /// Unit eigenvector.
    pub vector: Vector,
    /// `A × v`, for the caller to confirm `Av = λv`.
    pub av: Vector,
    /// `λ × v`.
    pub lambda_v: Vector,
}

/// Eigenvalues, eigenvectors, and the characteristic-polynomial
/// derivation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EigenDecomposition {
    pub eigenvalues: Eigenvalues,
    /// One pair per real eigenvalue; empty for a complex pair.
    pub pairs: Vec<EigenPair>,
    pub trace: StepTrace,
}

/// Decompose a 2×2 matrix.
///
/// Returns [`EngineError::UnsupportedSize`] for any other shape.
///
/// ```
/// # use steplab_core::matrix::Matrix;
/// # use steplab_core::solve::eigen::{self, Eigenvalues};
/// let a = Matrix::from_vec(vec![4.0, 1.0, 2.0, 3.0], 2, 2).unwrap();
/// let result = eigen::eigen_2x2(&a).unwrap();
/// assert_eq!(result.eigenvalues, Eigenvalues::Real(5.0, 2.0));
/// ```
pub fn eigen_2x2(m: &Matrix) -> Result<EigenDecomposition> {
    if m.shape() != (2, 2) {
        return Err(EngineError::UnsupportedSize {
            op: "eigendecomposition",
            required: "2×2 matrices",
        });
    }
    let (a, b, c, d) = (m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]);
    let tr = a + d;
    let det = a * d - b * c;

    let mut trace = StepTrace::new();
    trace.push(Step::formula("Characteristic equation", "det(A - λI) = 0"));
    trace.push(Step::formula(
        "Matrix A - λI",
        format!("[[{a} - λ, {b}], [{c}, {d} - λ]]"),
    ));
    trace.push(Step::formula(
        "Determinant calculation",
        format!("({a} - λ)({d} - λ) - ({b})({c}) = 0"),
    ));
    trace.push(Step::formula(
        "Expand",
        format!("λ² - ({a} + {d})λ + ({a} × {d} - {b} × {c}) = 0"),
    ));
    trace.push(Step::formula(
        "Quadratic equation",
        format!("λ² - {tr}λ + {det} = 0"),
    ));

    let disc = tr * tr - 4.0 * det;
    trace.push(Step::formula(
        "Discriminant",
        format!(
            "Δ = b² - 4ac = ({tr})² - 4(1)({det}) = {} - {} = {disc}",
            tr * tr,
            4.0 * det
        ),
    ));

    if disc < 0.0 {
        let re = tr / 2.0;
        let im = (-disc).sqrt() / 2.0;
        trace.push(Step::formula(
            "Complex eigenvalues",
            format!("λ = ({tr} ± √({disc})) / 2 = {re:.4} ± {im:.4}i"),
        ));
        trace.push(Step::note(
            "Complex eigenvalues have no real eigenvectors",
        ));
        return Ok(EigenDecomposition {
            eigenvalues: Eigenvalues::Complex { re, im },
            pairs: Vec::new(),
            trace,
        });
    }

    let root = disc.sqrt();
    let l1 = (tr + root) / 2.0;
    let l2 = (tr - root) / 2.0;
    trace.push(Step::formula(
        "Real eigenvalues",
        format!("λ = ({tr} ± √{disc}) / 2 → λ₁ = {l1:.4}, λ₂ = {l2:.4}"),
    ));

    let mut pairs = Vec::with_capacity(2);
    for (idx, lambda) in [l1, l2].into_iter().enumerate() {
        let vector = eigenvector(a, b, c, d, lambda)?;
        trace.push(Step::formula(
            format!("Eigenvector for λ{} = {lambda:.4}", subscript(idx + 1)),
            format!(
                "(A - λI)v = 0 → v = ({:.4}, {:.4})",
                vector[0], vector[1]
            ),
        ));
        let av = m.matvec(&vector)?;
        let lambda_v = vector.scale(lambda);
        pairs.push(EigenPair {
            value: lambda,
            vector,
            av,
            lambda_v,
        });
    }

    Ok(EigenDecomposition {
        eigenvalues: Eigenvalues::Real(l1, l2),
        pairs,
        trace,
    })
}

/// A unit vector in the null space of `A - λI`.
fn eigenvector(a: f64, b: f64, c: f64, d: f64, lambda: f64) -> Result<Vector> {
    let raw = if b.abs() > NULL_TOLERANCE {
        // Row one: (a - λ)x + by = 0
        Vector::new(vec![b, lambda - a])
    } else if c.abs() > NULL_TOLERANCE {
        // Row two: cx + (d - λ)y = 0
        Vector::new(vec![lambda - d, c])
    } else if (a - lambda).abs() > NULL_TOLERANCE {
        // Diagonal with a ≠ λ: only the second axis remains
        Vector::new(vec![0.0, 1.0])
    } else {
        // λ matches the first diagonal entry, or A = λI
        Vector::new(vec![1.0, 0.0])
    };
    raw.normalize()
}

fn subscript(i: usize) -> char {
    match i {
        1 => '₁',
        _ => '₂',
    }
}
