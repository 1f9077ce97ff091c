//! Fixed-length real vector and the vector algebra library.
//!
//! Binary operations check dimensions and report mismatches as
//! [`EngineError::DimensionMismatch`]; the cross product is 3-D only.

mod norms;
mod worked;

pub use norms::NormReport;
pub use worked::Worked;

use core::fmt;
use core::ops::Index;

use crate::error::{EngineError, Result};

/// Tolerance for the parallel / orthogonal predicates.
const DIRECTION_TOLERANCE: f64 = 1e-4;

/// An ordered, fixed-length sequence of real numbers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Wrap a list of components.
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// The zero vector of dimension `n`.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self { data: vec![0.0; n] }
    }

    /// The dimension (number of components).
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    /// The components as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Iterate over components.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }

    fn check_dim(&self, other: &Vector) -> Result<()> {
        if self.dim() == other.dim() {
            Ok(())
        } else {
            Err(EngineError::DimensionMismatch {
                expected: self.dim(),
                got: other.dim(),
            })
        }
    }

    /// Component-wise sum `u + v`.
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.check_dim(other)?;
        Ok(Vector::new(
            self.iter().zip(other.iter()).map(|(a, b)| a + b).collect(),
        ))
    }

    /// Component-wise difference `u - v`.
    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        self.check_dim(other)?;
        Ok(Vector::new(
            self.iter().zip(other.iter()).map(|(a, b)| a - b).collect(),
        ))
    }

    /// Scalar multiple `k * u`.
    #[must_use]
    pub fn scale(&self, k: f64) -> Vector {
        Vector::new(self.iter().map(|x| k * x).collect())
    }

    /// The negation `-u`.
    #[must_use]
    pub fn negate(&self) -> Vector {
        self.scale(-1.0)
    }

    /// Dot product `u · v`.
    ///
    /// ```
    /// # use steplab_core::vector::Vector;
    /// let u = Vector::new(vec![1.0, 2.0, 3.0]);
    /// let v = Vector::new(vec![4.0, 5.0, 6.0]);
    /// assert_eq!(u.dot(&v).unwrap(), 32.0);
    /// ```
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_dim(other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// Cross product `u × v`, defined for 3-D vectors only.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        if self.dim() != 3 || other.dim() != 3 {
            return Err(EngineError::UnsupportedSize {
                op: "cross product",
                required: "3-D vectors",
            });
        }
        let (u, v) = (&self.data, &other.data);
        Ok(Vector::new(vec![
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ]))
    }

    /// Euclidean length `||u||`.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Euclidean distance `||u - v||`.
    pub fn distance(&self, other: &Vector) -> Result<f64> {
        Ok(self.sub(other)?.magnitude())
    }

    /// The angle between `u` and `v` in degrees.
    ///
    /// `cos θ` is clamped into `[-1, 1]` before `acos` so rounding noise
    /// cannot produce NaN for (anti)parallel inputs.
    pub fn angle_degrees(&self, other: &Vector) -> Result<f64> {
        let cos_theta = self.dot(other)? / (self.magnitude() * other.magnitude());
        Ok(cos_theta.clamp(-1.0, 1.0).acos().to_degrees())
    }

    /// Whether `u = k·v` for some scalar `k`, judged by component ratios.
    ///
    /// Components where `v_i == 0` are skipped, matching the ratio test
    /// as usually taught; ratios must agree within `1e-4`.
    pub fn is_parallel(&self, other: &Vector) -> Result<bool> {
        self.check_dim(other)?;
        let ratios: Vec<f64> = self
            .iter()
            .zip(other.iter())
            .filter(|(_, &v)| v != 0.0)
            .map(|(&u, &v)| u / v)
            .collect();
        let Some(&first) = ratios.first() else {
            return Ok(true);
        };
        Ok(ratios.iter().all(|r| (r - first).abs() < DIRECTION_TOLERANCE))
    }

    /// Whether `u · v` is zero within `1e-4`.
    pub fn is_orthogonal(&self, other: &Vector) -> Result<bool> {
        Ok(self.dot(other)?.abs() < DIRECTION_TOLERANCE)
    }

    /// Vector projection of `self` onto `v`: `((u·v) / ||v||²) v`.
    pub fn project_onto(&self, v: &Vector) -> Result<Vector> {
        let scale = self.dot(v)? / v.iter().map(|x| x * x).sum::<f64>();
        Ok(v.scale(scale))
    }

    /// Scalar projection of `self` onto `v`: `(u·v) / ||v||`.
    pub fn scalar_projection_onto(&self, v: &Vector) -> Result<f64> {
        Ok(self.dot(v)? / v.magnitude())
    }

    /// The unit vector `u / ||u||`.
    ///
    /// Returns [`EngineError::ZeroVector`] for the zero vector.
    pub fn normalize(&self) -> Result<Vector> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(EngineError::ZeroVector);
        }
        Ok(self.scale(1.0 / mag))
    }

    /// Whether every component is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.iter().all(|&x| x == 0.0)
    }

    /// Components joined as `(a, b, c)` for formula strings.
    pub(crate) fn component_list(&self) -> String {
        let parts: Vec<String> = self.iter().map(|x| format!("{x}")).collect();
        format!("({})", parts.join(", "))
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.component_list())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub() {
        let u = Vector::new(vec![3.0, 1.0]);
        let v = Vector::new(vec![1.0, 2.0]);
        assert_eq!(u.add(&v).unwrap().as_slice(), &[4.0, 3.0]);
        assert_eq!(u.sub(&v).unwrap().as_slice(), &[2.0, -1.0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let u = Vector::new(vec![1.0, 2.0]);
        let v = Vector::new(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            u.add(&v),
            Err(EngineError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        ));
    }

    #[test]
    fn test_cross() {
        // >>> np.cross([1,0,0],[0,1,0])
        // array([0, 0, 1])
        let i = Vector::new(vec![1.0, 0.0, 0.0]);
        let j = Vector::new(vec![0.0, 1.0, 0.0]);
        assert_eq!(i.cross(&j).unwrap().as_slice(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_cross_wrong_dimension() {
        let u = Vector::new(vec![1.0, 2.0]);
        let v = Vector::new(vec![3.0, 4.0]);
        assert!(matches!(
            u.cross(&v),
            Err(EngineError::UnsupportedSize { .. })
        ));
    }

    #[test]
    fn test_magnitude_distance() {
        let u = Vector::new(vec![3.0, 4.0]);
        assert_eq!(u.magnitude(), 5.0);
        let v = Vector::new(vec![0.0, 0.0]);
        assert_eq!(u.distance(&v).unwrap(), 5.0);
    }

    #[test]
    fn test_angle() {
        let u = Vector::new(vec![1.0, 0.0]);
        let v = Vector::new(vec![0.0, 1.0]);
        assert!((u.angle_degrees(&v).unwrap() - 90.0).abs() < 1e-10);
        // Antiparallel vectors must not NaN out of acos
        let w = Vector::new(vec![-2.0, 0.0]);
        assert!((u.angle_degrees(&w).unwrap() - 180.0).abs() < 1e-10);
    }

    #[test]
    fn test_parallel() {
        let u = Vector::new(vec![2.0, 4.0]);
        let v = Vector::new(vec![1.0, 2.0]);
        assert!(u.is_parallel(&v).unwrap());
        let w = Vector::new(vec![1.0, 3.0]);
        assert!(!u.is_parallel(&w).unwrap());
    }

    #[test]
    fn test_orthogonal() {
        let u = Vector::new(vec![1.0, 0.0]);
        let v = Vector::new(vec![0.0, 5.0]);
        assert!(u.is_orthogonal(&v).unwrap());
        assert!(!u.is_orthogonal(&u).unwrap());
    }

    #[test]
    fn test_projection() {
        // proj of (3,1) onto (1,0) is (3,0); scalar projection 3
        let u = Vector::new(vec![3.0, 1.0]);
        let e = Vector::new(vec![1.0, 0.0]);
        assert_eq!(u.project_onto(&e).unwrap().as_slice(), &[3.0, 0.0]);
        assert_eq!(u.scalar_projection_onto(&e).unwrap(), 3.0);
    }

    #[test]
    fn test_normalize() {
        let u = Vector::new(vec![3.0, 4.0]);
        let n = u.normalize().unwrap();
        assert!((n.magnitude() - 1.0).abs() < 1e-12);
        assert_eq!(n.as_slice(), &[0.6, 0.8]);
    }

    #[test]
    fn test_normalize_zero() {
        let z = Vector::zeros(3);
        assert!(matches!(z.normalize(), Err(EngineError::ZeroVector)));
    }

    #[test]
    fn test_is_zero() {
        assert!(Vector::zeros(2).is_zero());
        assert!(!Vector::new(vec![0.0, 1e-9]).is_zero());
    }

    #[test]
    fn test_display() {
        let u = Vector::new(vec![1.0, 2.5]);
        assert_eq!(format!("{u}"), "(1, 2.5)");
    }
}
