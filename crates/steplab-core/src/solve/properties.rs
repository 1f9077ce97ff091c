//! Structural analysis of a matrix: rank, trace, norms, and the usual
//! classification predicates.
//!
//! Square-only properties (trace, determinant, symmetry, triangularity,
//! orthogonality) come back as `Option` so a rectangular input yields a
//! report instead of an error. Structural predicates compare entries
//! exactly; a matrix is diagonal only when its off-diagonal entries are
//! literally zero. Symmetry and orthogonality are numeric checks with
//! their own tolerances.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::solve::determinant;

/// Pivots below this do not count toward the rank.
const RANK_TOLERANCE: f64 = 1e-10;
/// Entry tolerance for the symmetry check.
const SYMMETRY_TOLERANCE: f64 = 1e-10;
/// Entry tolerance for `AᵗA ≈ I` in the orthogonality check.
const ORTHOGONALITY_TOLERANCE: f64 = 1e-6;

/// Everything the analyzer can say about one matrix.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixProperties {
    pub rows: usize,
    pub cols: usize,
    pub is_square: bool,
    /// Sum of the diagonal. Square matrices only.
    pub trace: Option<f64>,
    /// det(A). Square matrices only.
    pub determinant: Option<f64>,
    /// `|det(A)| < 1e-10`. Square matrices only.
    pub is_singular: Option<bool>,
    pub is_invertible: Option<bool>,
    pub is_identity: Option<bool>,
    pub is_diagonal: Option<bool>,
    pub is_upper_triangular: Option<bool>,
    pub is_lower_triangular: Option<bool>,
    pub is_symmetric: Option<bool>,
    /// `AᵗA ≈ I` within `1e-6`. Square matrices only.
    pub is_orthogonal: Option<bool>,
    /// Number of nonzero pivots in row-echelon form.
    pub rank: usize,
    /// `rank == min(rows, cols)`.
    pub is_full_rank: bool,
    /// Every entry exactly zero.
    pub is_zero: bool,
    /// `√(Σ aᵢⱼ²)`.
    pub frobenius_norm: f64,
    /// `max |aᵢⱼ|`.
    pub max_norm: f64,
}

/// Analyze a matrix.
///
/// ```
/// # use steplab_core::matrix::Matrix;
/// # use steplab_core::solve::properties;
/// let report = properties::analyze(&Matrix::identity(3)).unwrap();
/// assert_eq!(report.rank, 3);
/// assert_eq!(report.is_identity, Some(true));
/// assert_eq!(report.is_orthogonal, Some(true));
/// ```
pub fn analyze(a: &Matrix) -> Result<MatrixProperties> {
    let (rows, cols) = a.shape();
    let square = a.is_square();

    let det = if square { Some(determinant::det(a)?) } else { None };

    let rank = rank(a);

    Ok(MatrixProperties {
        rows,
        cols,
        is_square: square,
        trace: square.then(|| (0..rows).map(|i| a[(i, i)]).sum()),
        determinant: det,
        is_singular: det.map(|d| d.abs() < RANK_TOLERANCE),
        is_invertible: det.map(|d| d.abs() >= RANK_TOLERANCE),
        is_identity: square.then(|| is_identity(a)),
        is_diagonal: square.then(|| is_diagonal(a)),
        is_upper_triangular: square.then(|| is_upper_triangular(a)),
        is_lower_triangular: square.then(|| is_lower_triangular(a)),
        is_symmetric: square.then(|| is_symmetric(a)),
        is_orthogonal: if square { is_orthogonal(a) } else { None },
        rank,
        is_full_rank: rank == rows.min(cols),
        is_zero: a.as_slice().iter().all(|&x| x == 0.0),
        frobenius_norm: a.as_slice().iter().map(|x| x * x).sum::<f64>().sqrt(),
        max_norm: a.as_slice().iter().fold(0.0, |m, x| m.max(x.abs())),
    })
}

/// Rank by row reduction with partial pivoting.
#[must_use]
pub fn rank(a: &Matrix) -> usize {
    let (rows, cols) = a.shape();
    let mut m = a.clone();
    let mut rank = 0;
    let mut pivot_row = 0;

    for col in 0..cols {
        if pivot_row >= rows {
            break;
        }
        let mut max_row = pivot_row;
        for r in (pivot_row + 1)..rows {
            if m[(r, col)].abs() > m[(max_row, col)].abs() {
                max_row = r;
            }
        }
        if m[(max_row, col)].abs() < RANK_TOLERANCE {
            continue;
        }
        m.swap_rows(pivot_row, max_row);
        for r in (pivot_row + 1)..rows {
            let factor = m[(r, col)] / m[(pivot_row, col)];
            for c in col..cols {
                let pc = m[(pivot_row, c)];
                m[(r, c)] -= factor * pc;
            }
        }
        rank += 1;
        pivot_row += 1;
    }
    rank
}

fn is_identity(a: &Matrix) -> bool {
    let n = a.rows();
    (0..n).all(|i| (0..n).all(|j| a[(i, j)] == if i == j { 1.0 } else { 0.0 }))
}

fn is_diagonal(a: &Matrix) -> bool {
    let n = a.rows();
    (0..n).all(|i| (0..n).all(|j| i == j || a[(i, j)] == 0.0))
}

fn is_upper_triangular(a: &Matrix) -> bool {
    let n = a.rows();
    (0..n).all(|i| (0..i).all(|j| a[(i, j)] == 0.0))
}

fn is_lower_triangular(a: &Matrix) -> bool {
    let n = a.rows();
    (0..n).all(|i| ((i + 1)..n).all(|j| a[(i, j)] == 0.0))
}

fn is_symmetric(a: &Matrix) -> bool {
    let n = a.rows();
    (0..n).all(|i| (0..n).all(|j| (a[(i, j)] - a[(j, i)]).abs() < SYMMETRY_TOLERANCE))
}

fn is_orthogonal(a: &Matrix) -> Option<bool> {
    let product = a.transpose().matmul(a).ok()?;
    Some(product.approx_eq(&Matrix::identity(a.rows()), ORTHOGONALITY_TOLERANCE))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn mat(data: &[f64], rows: usize, cols: usize) -> Matrix {
        Matrix::from_vec(data.to_vec(), rows, cols).unwrap()
    }

    #[test]
    fn test_identity_properties() {
        let report = analyze(&Matrix::identity(3)).unwrap();
        assert_eq!(report.trace, Some(3.0));
        assert_eq!(report.determinant, Some(1.0));
        assert_eq!(report.is_identity, Some(true));
        assert_eq!(report.is_diagonal, Some(true));
        assert_eq!(report.is_upper_triangular, Some(true));
        assert_eq!(report.is_lower_triangular, Some(true));
        assert_eq!(report.is_symmetric, Some(true));
        assert_eq!(report.is_orthogonal, Some(true));
        assert_eq!(report.rank, 3);
        assert!(report.is_full_rank);
        assert!(!report.is_zero);
    }

    #[test]
    fn test_rectangular_skips_square_properties() {
        let report = analyze(&mat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3)).unwrap();
        assert!(!report.is_square);
        assert!(report.trace.is_none());
        assert!(report.determinant.is_none());
        assert!(report.is_symmetric.is_none());
        assert_eq!(report.rank, 2);
        assert!(report.is_full_rank);
    }

    #[test]
    fn test_rank_deficient() {
        // >>> np.linalg.matrix_rank([[1,2,3],[2,4,6],[1,1,1]])
        // 2
        let a = mat(&[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 1.0, 1.0], 3, 3);
        let report = analyze(&a).unwrap();
        assert_eq!(report.rank, 2);
        assert!(!report.is_full_rank);
        assert_eq!(report.is_singular, Some(true));
        assert_eq!(report.is_invertible, Some(false));
    }

    #[test]
    fn test_zero_matrix() {
        let report = analyze(&Matrix::zeros(2, 2)).unwrap();
        assert!(report.is_zero);
        assert_eq!(report.rank, 0);
        assert_eq!(report.frobenius_norm, 0.0);
        assert_eq!(report.max_norm, 0.0);
        // The zero matrix is diagonal but not the identity
        assert_eq!(report.is_diagonal, Some(true));
        assert_eq!(report.is_identity, Some(false));
    }

    #[test]
    fn test_triangular_flags() {
        let upper = mat(&[1.0, 2.0, 0.0, 3.0], 2, 2);
        let report = analyze(&upper).unwrap();
        assert_eq!(report.is_upper_triangular, Some(true));
        assert_eq!(report.is_lower_triangular, Some(false));
        assert_eq!(report.is_diagonal, Some(false));
    }

    #[test]
    fn test_symmetric_not_exact() {
        // Within the symmetry tolerance even though entries differ in the
        // last bits
        let a = mat(&[1.0, 2.0, 2.0 + 1e-12, 3.0], 2, 2);
        assert_eq!(analyze(&a).unwrap().is_symmetric, Some(true));
    }

    #[test]
    fn test_rotation_is_orthogonal() {
        let (s, c) = std::f64::consts::FRAC_PI_4.sin_cos();
        let rot = mat(&[c, -s, s, c], 2, 2);
        let report = analyze(&rot).unwrap();
        assert_eq!(report.is_orthogonal, Some(true));
        assert!((report.determinant.unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_norms() {
        // >>> np.linalg.norm([[1,2],[3,4]])
        // 5.477225575051661
        let a = mat(&[1.0, 2.0, 3.0, 4.0], 2, 2);
        let report = analyze(&a).unwrap();
        assert!((report.frobenius_norm - 30.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(report.max_norm, 4.0);
    }

    #[test]
    fn test_rank_wide_and_tall() {
        let wide = mat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        let tall = wide.transpose();
        assert_eq!(rank(&wide), 2);
        assert_eq!(rank(&tall), 2);
    }
}
