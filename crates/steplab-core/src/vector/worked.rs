//! Vector operations that show their work.
//!
//! Each `*_worked` method returns the same value as its plain counterpart
//! together with the substituted formula that justifies it, ready for
//! display.

use super::Vector;
use crate::error::Result;

/// A computed value paired with its substituted formula.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worked<T> {
    /// The numeric result.
    pub value: T,
    /// The derivation, e.g. `u · v = (3 × 1) + (1 × 2) = 5.0000`.
    pub formula: String,
}

impl Vector {
    /// [`Vector::add`] with its formula.
    ///
    /// ```
    /// # use steplab_core::vector::Vector;
    /// let u = Vector::new(vec![3.0, 1.0]);
    /// let v = Vector::new(vec![1.0, 2.0]);
    /// let sum = u.add_worked(&v).unwrap();
    /// assert_eq!(sum.formula, "(3, 1) + (1, 2) = (4, 3)");
    /// ```
    pub fn add_worked(&self, other: &Vector) -> Result<Worked<Vector>> {
        let value = self.add(other)?;
        let formula = format!(
            "{} + {} = {}",
            self.component_list(),
            other.component_list(),
            value.component_list()
        );
        Ok(Worked { value, formula })
    }

    /// [`Vector::sub`] with its formula.
    pub fn sub_worked(&self, other: &Vector) -> Result<Worked<Vector>> {
        let value = self.sub(other)?;
        let formula = format!(
            "{} - {} = {}",
            self.component_list(),
            other.component_list(),
            value.component_list()
        );
        Ok(Worked { value, formula })
    }

    /// [`Vector::dot`] with the expanded product-sum.
    pub fn dot_worked(&self, other: &Vector) -> Result<Worked<f64>> {
        let value = self.dot(other)?;
        let terms: Vec<String> = self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| format!("({a} × {b})"))
            .collect();
        let formula = format!("u · v = {} = {value:.4}", terms.join(" + "));
        Ok(Worked { value, formula })
    }

    /// [`Vector::cross`] with the component-wise expansion.
    pub fn cross_worked(&self, other: &Vector) -> Result<Worked<Vector>> {
        let value = self.cross(other)?;
        let (u, v) = (self, other);
        let formula = format!(
            "u × v = ({}×{} - {}×{}, {}×{} - {}×{}, {}×{} - {}×{}) = {}",
            u[1],
            v[2],
            u[2],
            v[1],
            u[2],
            v[0],
            u[0],
            v[2],
            u[0],
            v[1],
            u[1],
            v[0],
            value.component_list()
        );
        Ok(Worked { value, formula })
    }

    /// [`Vector::magnitude`] with the radicand spelled out.
    #[must_use]
    pub fn magnitude_worked(&self) -> Worked<f64> {
        let value = self.magnitude();
        let terms: Vec<String> = self.iter().map(|x| format!("{x}²")).collect();
        let formula = format!("||u|| = √({}) = {value:.4}", terms.join(" + "));
        Worked { value, formula }
    }

    /// [`Vector::distance`] with the difference vector spelled out.
    pub fn distance_worked(&self, other: &Vector) -> Result<Worked<f64>> {
        let diff = self.sub(other)?;
        let value = diff.magnitude();
        let terms: Vec<String> = diff.iter().map(|x| format!("{x}²")).collect();
        let formula = format!(
            "d(u, v) = ||u - v|| = √({}) = {value:.4}",
            terms.join(" + ")
        );
        Ok(Worked { value, formula })
    }

    /// [`Vector::angle_degrees`] with the cosine derivation.
    pub fn angle_degrees_worked(&self, other: &Vector) -> Result<Worked<f64>> {
        let dot = self.dot(other)?;
        let mag_u = self.magnitude();
        let mag_v = other.magnitude();
        let cos_theta = (dot / (mag_u * mag_v)).clamp(-1.0, 1.0);
        let value = cos_theta.acos().to_degrees();
        let formula = format!(
            "cos(θ) = (u · v) / (||u|| × ||v||) = {dot:.4} / ({mag_u:.4} × {mag_v:.4}) = {cos_theta:.4}\nθ = {value:.4}°"
        );
        Ok(Worked { value, formula })
    }

    /// [`Vector::project_onto`] with the scalar factor derivation.
    pub fn project_onto_worked(&self, v: &Vector) -> Result<Worked<Vector>> {
        let dot = self.dot(v)?;
        let mag_sq: f64 = v.iter().map(|x| x * x).sum();
        let value = v.scale(dot / mag_sq);
        let projected: Vec<String> = value.iter().map(|x| format!("{x:.4}")).collect();
        let formula = format!(
            "proj_v(u) = ((u · v) / ||v||²) × v = ({dot:.4} / {mag_sq:.4}) × {} = ({})",
            v.component_list(),
            projected.join(", ")
        );
        Ok(Worked { value, formula })
    }

    /// [`Vector::scalar_projection_onto`] with its derivation.
    pub fn scalar_projection_onto_worked(&self, v: &Vector) -> Result<Worked<f64>> {
        let dot = self.dot(v)?;
        let mag = v.magnitude();
        let value = dot / mag;
        let formula = format!("comp_v(u) = (u · v) / ||v|| = {dot:.4} / {mag:.4} = {value:.4}");
        Ok(Worked { value, formula })
    }

    /// [`Vector::scale`] with its formula.
    #[must_use]
    pub fn scale_worked(&self, k: f64) -> Worked<Vector> {
        let value = self.scale(k);
        let formula = format!(
            "{k} × {} = {}",
            self.component_list(),
            value.component_list()
        );
        Worked { value, formula }
    }

    /// [`Vector::negate`] with its formula.
    #[must_use]
    pub fn negate_worked(&self) -> Worked<Vector> {
        let value = self.negate();
        let formula = format!("-{} = {}", self.component_list(), value.component_list());
        Worked { value, formula }
    }

    /// [`Vector::normalize`] with its formula.
    pub fn normalize_worked(&self) -> Result<Worked<Vector>> {
        let value = self.normalize()?;
        let mag = self.magnitude();
        let components: Vec<String> = value.iter().map(|x| format!("{x:.4}")).collect();
        let formula = format!(
            "u / ||u|| = {} / {mag:.4} = ({})",
            self.component_list(),
            components.join(", ")
        );
        Ok(Worked { value, formula })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_worked() {
        let u = Vector::new(vec![3.0, 1.0]);
        let v = Vector::new(vec![1.0, 2.0]);
        let dot = u.dot_worked(&v).unwrap();
        assert_eq!(dot.value, 5.0);
        assert_eq!(dot.formula, "u · v = (3 × 1) + (1 × 2) = 5.0000");
    }

    #[test]
    fn test_cross_worked() {
        let i = Vector::new(vec![1.0, 0.0, 0.0]);
        let j = Vector::new(vec![0.0, 1.0, 0.0]);
        let cross = i.cross_worked(&j).unwrap();
        assert_eq!(cross.value.as_slice(), &[0.0, 0.0, 1.0]);
        assert!(cross.formula.ends_with("= (0, 0, 1)"));
    }

    #[test]
    fn test_magnitude_worked() {
        let u = Vector::new(vec![3.0, 4.0]);
        let mag = u.magnitude_worked();
        assert_eq!(mag.value, 5.0);
        assert_eq!(mag.formula, "||u|| = √(3² + 4²) = 5.0000");
    }

    #[test]
    fn test_normalize_worked() {
        let u = Vector::new(vec![3.0, 4.0]);
        let unit = u.normalize_worked().unwrap();
        assert_eq!(unit.value.as_slice(), &[0.6, 0.8]);
        assert_eq!(unit.formula, "u / ||u|| = (3, 4) / 5.0000 = (0.6000, 0.8000)");
    }

    #[test]
    fn test_angle_worked_newline_split() {
        let u = Vector::new(vec![1.0, 0.0]);
        let v = Vector::new(vec![0.0, 1.0]);
        let angle = u.angle_degrees_worked(&v).unwrap();
        assert!((angle.value - 90.0).abs() < 1e-10);
        // Two display lines: the cosine and the angle
        assert_eq!(angle.formula.lines().count(), 2);
    }

    #[test]
    fn test_worked_value_matches_plain() {
        let u = Vector::new(vec![2.0, -1.0, 0.5]);
        let v = Vector::new(vec![1.0, 3.0, -2.0]);
        assert_eq!(u.dot_worked(&v).unwrap().value, u.dot(&v).unwrap());
        assert_eq!(
            u.project_onto_worked(&v).unwrap().value,
            u.project_onto(&v).unwrap()
        );
        assert_eq!(u.scale_worked(3.0).value, u.scale(3.0));
    }
}
