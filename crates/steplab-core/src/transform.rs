//! Standard 2-D linear transformations as matrices.
//!
//! Each [`Transform`] names a geometric operation; [`Transform::matrix`]
//! produces its 2×2 matrix and [`Transform::apply`] multiplies it onto a
//! point. Rotation angles are given in degrees, counterclockwise.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// The axis a [`Transform::Reflection`] mirrors across.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReflectionAxis {
    /// Across the x-axis: `(x, y) → (x, -y)`.
    X,
    /// Across the y-axis: `(x, y) → (-x, y)`.
    Y,
    /// Across the line `y = x`: `(x, y) → (y, x)`.
    Diagonal,
}

/// A named 2-D linear transformation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transform {
    /// Counterclockwise rotation.
    Rotation { degrees: f64 },
    /// Axis-aligned scaling.
    Scaling { sx: f64, sy: f64 },
    /// Shear with factors along each axis.
    Shear { kx: f64, ky: f64 },
    Reflection { axis: ReflectionAxis },
}

impl Transform {
    /// The 2×2 matrix of this transformation.
    ///
    /// ```
    /// # use steplab_core::transform::Transform;
    /// let m = Transform::Scaling { sx: 2.0, sy: 3.0 }.matrix();
    /// assert_eq!(m[(0, 0)], 2.0);
    /// assert_eq!(m[(1, 1)], 3.0);
    /// ```
    #[must_use]
    pub fn matrix(&self) -> Matrix {
        let entries = match *self {
            Transform::Rotation { degrees } => {
                let (s, c) = degrees.to_radians().sin_cos();
                vec![c, -s, s, c]
            }
            Transform::Scaling { sx, sy } => vec![sx, 0.0, 0.0, sy],
            Transform::Shear { kx, ky } => vec![1.0, kx, ky, 1.0],
            Transform::Reflection { axis } => match axis {
                ReflectionAxis::X => vec![1.0, 0.0, 0.0, -1.0],
                ReflectionAxis::Y => vec![-1.0, 0.0, 0.0, 1.0],
                ReflectionAxis::Diagonal => vec![0.0, 1.0, 1.0, 0.0],
            },
        };
        // 4 entries into 2x2 always succeeds
        Matrix::from_vec(entries, 2, 2).unwrap_or_else(|_| Matrix::identity(2))
    }

    /// Transform a 2-D point.
    pub fn apply(&self, point: &Vector) -> Result<Vector> {
        self.matrix().matvec(point)
    }

    /// The symbolic form of the matrix, for display alongside the
    /// numeric one.
    #[must_use]
    pub fn describe(&self) -> String {
        match *self {
            Transform::Rotation { degrees } => {
                format!("R({degrees}°) = [[cos θ, -sin θ], [sin θ, cos θ]]")
            }
            Transform::Scaling { sx, sy } => format!("S = [[{sx}, 0], [0, {sy}]]"),
            Transform::Shear { kx, ky } => format!("H = [[1, {kx}], [{ky}, 1]]"),
            Transform::Reflection { axis } => match axis {
                ReflectionAxis::X => "F = [[1, 0], [0, -1]] (across the x-axis)".to_string(),
                ReflectionAxis::Y => "F = [[-1, 0], [0, 1]] (across the y-axis)".to_string(),
                ReflectionAxis::Diagonal => "F = [[0, 1], [1, 0]] (across y = x)".to_string(),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn approx(v: &Vector, expected: &[f64], tol: f64) -> bool {
        v.as_slice()
            .iter()
            .zip(expected)
            .all(|(&x, &y)| (x - y).abs() < tol)
    }

    #[test]
    fn test_rotation_90() {
        let rot = Transform::Rotation { degrees: 90.0 };
        let image = rot.apply(&Vector::new(vec![1.0, 0.0])).unwrap();
        assert!(approx(&image, &[0.0, 1.0], 1e-9));
    }

    #[test]
    fn test_rotation_360_is_identity() {
        let rot = Transform::Rotation { degrees: 360.0 };
        let image = rot.apply(&Vector::new(vec![2.0, -3.0])).unwrap();
        assert!(approx(&image, &[2.0, -3.0], 1e-9));
    }

    #[test]
    fn test_scaling() {
        let scale = Transform::Scaling { sx: 2.0, sy: 3.0 };
        let image = scale.apply(&Vector::new(vec![1.0, 1.0])).unwrap();
        assert_eq!(image.as_slice(), &[2.0, 3.0]);
    }

    #[test]
    fn test_shear() {
        let shear = Transform::Shear { kx: 1.0, ky: 0.0 };
        let image = shear.apply(&Vector::new(vec![0.0, 1.0])).unwrap();
        assert_eq!(image.as_slice(), &[1.0, 1.0]);
    }

    #[test]
    fn test_reflections() {
        let p = Vector::new(vec![2.0, 3.0]);
        let fx = Transform::Reflection {
            axis: ReflectionAxis::X,
        };
        let fy = Transform::Reflection {
            axis: ReflectionAxis::Y,
        };
        let fd = Transform::Reflection {
            axis: ReflectionAxis::Diagonal,
        };
        assert_eq!(fx.apply(&p).unwrap().as_slice(), &[2.0, -3.0]);
        assert_eq!(fy.apply(&p).unwrap().as_slice(), &[-2.0, 3.0]);
        assert_eq!(fd.apply(&p).unwrap().as_slice(), &[3.0, 2.0]);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let rot = Transform::Rotation { degrees: 37.0 };
        let p = Vector::new(vec![3.0, 4.0]);
        let image = rot.apply(&p).unwrap();
        assert!((image.magnitude() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_describe() {
        let rot = Transform::Rotation { degrees: 45.0 };
        assert!(rot.describe().starts_with("R(45°)"));
    }
}
