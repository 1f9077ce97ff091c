//! Dense row-major matrix of `f64` values.
//!
//! [`Matrix`] is the working currency of every engine in this crate. It is
//! deliberately small: fixed shape at construction, contiguous row-major
//! storage, deep-copy `Clone`. Engines always operate on their own copies,
//! so a caller's matrix is never mutated.

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::error::{EngineError, Result};
use crate::vector::Vector;

/// A rectangular grid of real numbers with fixed shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix from a flat row-major vector and a shape.
    ///
    /// Returns an error if `rows * cols` does not equal `data.len()` or if
    /// either dimension is zero.
    ///
    /// ```
    /// # use steplab_core::matrix::Matrix;
    /// let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
    /// assert_eq!(a[(1, 0)], 3.0);
    /// ```
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidShape {
                reason: "matrix dimensions must be nonzero",
            });
        }
        if rows * cols != data.len() {
            return Err(EngineError::InvalidShape {
                reason: "shape product does not match data length",
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from nested rows.
    ///
    /// Every row must have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let r = rows.len();
        if r == 0 {
            return Err(EngineError::InvalidShape {
                reason: "matrix dimensions must be nonzero",
            });
        }
        let c = rows[0].len();
        if rows.iter().any(|row| row.len() != c) {
            return Err(EngineError::InvalidShape {
                reason: "rows have unequal lengths",
            });
        }
        let data: Vec<f64> = rows.iter().flatten().copied().collect();
        Self::from_vec(data, r, c)
    }

    /// An all-zero matrix of the given shape.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be nonzero");
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// The n x n identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether row and column counts are equal.
    #[inline]
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The elements of row `i` as a slice.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// A flat row-major slice of all elements.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    /// The transpose: rows become columns.
    ///
    /// ```
    /// # use steplab_core::matrix::Matrix;
    /// let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(0, 1)], 4.0);
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Matrix {
        let mut t = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                t[(j, i)] = self[(i, j)];
            }
        }
        t
    }

    /// Matrix product `self * rhs`.
    ///
    /// Inner dimensions must agree.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(EngineError::ShapeMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self[(i, k)] * rhs[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        Ok(out)
    }

    /// Matrix-vector product `self * v`.
    pub fn matvec(&self, v: &Vector) -> Result<Vector> {
        if self.cols != v.dim() {
            return Err(EngineError::DimensionMismatch {
                expected: self.cols,
                got: v.dim(),
            });
        }
        let mut out = vec![0.0; self.rows];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self
                .row(i)
                .iter()
                .zip(v.as_slice())
                .map(|(&a, &x)| a * x)
                .sum();
        }
        Ok(Vector::new(out))
    }

    /// The minor of `(row, col)`: this matrix with that row and column
    /// removed. Used by cofactor expansion.
    ///
    /// # Panics
    /// Panics if the matrix is 1x1 (the minor would be empty).
    #[must_use]
    pub fn minor(&self, row: usize, col: usize) -> Matrix {
        assert!(
            self.rows > 1 && self.cols > 1,
            "minor of a 1x1 matrix is empty"
        );
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in 0..self.rows {
            if i == row {
                continue;
            }
            for j in 0..self.cols {
                if j == col {
                    continue;
                }
                data.push(self[(i, j)]);
            }
        }
        Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            data,
        }
    }

    /// Entry-wise comparison within an absolute tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() < tol)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        &mut self.data[i * self.cols + j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.rows {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self[(i, j)])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_shape_check() {
        assert!(Matrix::from_vec(vec![1.0, 2.0, 3.0], 2, 2).is_err());
        assert!(Matrix::from_vec(vec![], 0, 0).is_err());
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(Matrix::from_rows(&rows).is_err());
    }

    #[test]
    fn test_identity() {
        let i = Matrix::identity(3);
        assert_eq!(i[(0, 0)], 1.0);
        assert_eq!(i[(0, 1)], 0.0);
        assert_eq!(i[(2, 2)], 1.0);
    }

    #[test]
    fn test_transpose() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_matmul() {
        // >>> np.array([[1,2],[3,4]]) @ np.array([[5,6],[7,8]])
        // array([[19, 22],
        //        [43, 50]])
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let b = Matrix::from_vec(vec![5.0, 6.0, 7.0, 8.0], 2, 2).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_matmul_shape_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        assert!(a.matmul(&b).is_err());
    }

    #[test]
    fn test_matvec() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let v = Vector::new(vec![1.0, 1.0]);
        let out = a.matvec(&v).unwrap();
        assert_eq!(out.as_slice(), &[3.0, 7.0]);
    }

    #[test]
    fn test_minor() {
        let a = Matrix::from_vec(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
            3,
            3,
        )
        .unwrap();
        let m = a.minor(0, 1);
        assert_eq!(m.as_slice(), &[4.0, 6.0, 7.0, 9.0]);
    }

    #[test]
    fn test_swap_rows() {
        let mut a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        a.swap_rows(0, 1);
        assert_eq!(a.as_slice(), &[3.0, 4.0, 1.0, 2.0]);
    }

    #[test]
    fn test_display() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        assert_eq!(format!("{a}"), "[[1, 2], [3, 4]]");
    }
}
