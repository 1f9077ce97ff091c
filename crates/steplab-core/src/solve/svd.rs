//! Singular value decomposition of 2×2 matrices via the eigensystem
//! of `AᵗA`.
//!
//! `AᵗA` is symmetric positive semi-definite, so its eigenvalues are real
//! and non-negative; the singular values are their square roots, largest
//! first. Right singular vectors are the (normalized) eigenvectors of
//! `AᵗA`; left singular vectors come from `uᵢ = Avᵢ / σᵢ`, falling back
//! to the standard basis when a singular value vanishes. Rounding can
//! push the discriminant or an eigenvalue a hair below zero, so both are
//! clamped before taking square roots.

use crate::error::{EngineError, Result};
use crate::matrix::Matrix;
use crate::trace::{Step, StepTrace};
use crate::vector::Vector;

/// Off-diagonal entries of `AᵗA` below this mean it is already diagonal.
const DIAGONAL_TOLERANCE: f64 = 1e-10;
/// Singular values below this use the standard-basis fallback for `uᵢ`.
const ZERO_SIGMA: f64 = 1e-10;

/// The factorization `A = UΣVᵀ` with its derivation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvdResult {
    /// Left singular vectors, one per column.
    pub u: Matrix,
    /// Diagonal matrix of singular values.
    pub sigma: Matrix,
    /// Transposed right singular vectors.
    pub vt: Matrix,
    /// `(σ₁, σ₂)`, largest first.
    pub singular_values: (f64, f64),
    /// `UΣVᵀ`, for the caller to confirm it reproduces `A`.
    pub reconstruction: Matrix,
    pub trace: StepTrace,
}

/// Decompose a 2×2 matrix as `A = UΣVᵀ`.
///
/// Returns [`EngineError::UnsupportedSize`] for any other shape.
///
/// ```
/// # use steplab_core::matrix::Matrix;
/// # use steplab_core::solve::svd;
/// let a = Matrix::from_vec(vec![3.0, 0.0, 0.0, 2.0], 2, 2).unwrap();
/// let result = svd::svd_2x2(&a).unwrap();
/// assert_eq!(result.singular_values, (3.0, 2.0));
/// ```
pub fn svd_2x2(a: &Matrix) -> Result<SvdResult> {
    if a.shape() != (2, 2) {
        return Err(EngineError::UnsupportedSize {
            op: "singular value decomposition",
            required: "2×2 matrices",
        });
    }

    let mut trace = StepTrace::new();

    let ata = a.transpose().matmul(a)?;
    trace.push(Step::with_matrix("Compute AᵗA", ata.clone()));

    let (p, q, r) = (ata[(0, 0)], ata[(0, 1)], ata[(1, 1)]);
    let tr = p + r;
    let det = p * r - q * q;
    let disc = (tr * tr - 4.0 * det).max(0.0);
    let root = disc.sqrt();
    let l1 = ((tr + root) / 2.0).max(0.0);
    let l2 = ((tr - root) / 2.0).max(0.0);
    trace.push(Step::formula(
        "Eigenvalues of AᵗA",
        format!("λ² - {tr}λ + {det} = 0 → λ₁ = {l1:.4}, λ₂ = {l2:.4}"),
    ));

    let s1 = l1.sqrt();
    let s2 = l2.sqrt();
    trace.push(Step::formula(
        "Singular values",
        format!("σᵢ = √λᵢ → σ₁ = {s1:.4}, σ₂ = {s2:.4}"),
    ));

    let (v1, v2) = if q.abs() > DIAGONAL_TOLERANCE {
        // Second row of (AᵗA - λI)v = 0: qx + (r - λ)y = 0
        (
            Vector::new(vec![l1 - r, q]).normalize()?,
            Vector::new(vec![l2 - r, q]).normalize()?,
        )
    } else if p >= r {
        (Vector::new(vec![1.0, 0.0]), Vector::new(vec![0.0, 1.0]))
    } else {
        (Vector::new(vec![0.0, 1.0]), Vector::new(vec![1.0, 0.0]))
    };
    let v = columns(&v1, &v2);
    trace.push(Step::with_matrix("Right singular vectors V", v.clone()));

    let u1 = left_vector(a, &v1, s1, Vector::new(vec![1.0, 0.0]))?;
    let u2 = left_vector(a, &v2, s2, Vector::new(vec![0.0, 1.0]))?;
    let u = columns(&u1, &u2);
    trace.push(Step::with_matrix(
        "Left singular vectors U (uᵢ = Avᵢ / σᵢ)",
        u.clone(),
    ));

    let sigma = Matrix::from_vec(vec![s1, 0.0, 0.0, s2], 2, 2)?;
    let vt = v.transpose();
    let reconstruction = u.matmul(&sigma)?.matmul(&vt)?;
    trace.push(Step::with_matrix(
        "Assemble A = UΣVᵀ",
        reconstruction.clone(),
    ));

    Ok(SvdResult {
        u,
        sigma,
        vt,
        singular_values: (s1, s2),
        reconstruction,
        trace,
    })
}

/// `Av / σ`, or the fallback axis when σ vanishes.
fn left_vector(a: &Matrix, v: &Vector, sigma: f64, fallback: Vector) -> Result<Vector> {
    if sigma < ZERO_SIGMA {
        return Ok(fallback);
    }
    Ok(a.matvec(v)?.scale(1.0 / sigma))
}

/// A 2×2 matrix with the given columns.
fn columns(c1: &Vector, c2: &Vector) -> Matrix {
    let mut m = Matrix::zeros(2, 2);
    m[(0, 0)] = c1[0];
    m[(1, 0)] = c1[1];
    m[(0, 1)] = c2[0];
    m[(1, 1)] = c2[1];
    m
}
