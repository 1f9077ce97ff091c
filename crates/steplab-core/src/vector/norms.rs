//! Vector norms: L0, L1, L2, L∞, and general Lp.

use super::Vector;

/// `L2` magnitudes this close to 1 count as a unit vector.
const UNIT_TOLERANCE: f64 = 1e-6;

impl Vector {
    /// L0 "norm": the number of nonzero components (sparsity count).
    #[must_use]
    pub fn norm_l0(&self) -> usize {
        self.iter().filter(|&&x| x != 0.0).count()
    }

    /// L1 norm (Manhattan): `Σ |v_i|`.
    #[must_use]
    pub fn norm_l1(&self) -> f64 {
        self.iter().map(|x| x.abs()).sum()
    }

    /// L2 norm (Euclidean): `√(Σ v_i²)`. Same as [`Vector::magnitude`].
    #[must_use]
    pub fn norm_l2(&self) -> f64 {
        self.magnitude()
    }

    /// L∞ norm: `max |v_i|`.
    #[must_use]
    pub fn norm_linf(&self) -> f64 {
        self.iter().map(|x| x.abs()).fold(0.0, f64::max)
    }

    /// General Lp norm: `(Σ |v_i|^p)^(1/p)` for `p >= 1`.
    #[must_use]
    pub fn norm_lp(&self, p: f64) -> f64 {
        self.iter()
            .map(|x| x.abs().powf(p))
            .sum::<f64>()
            .powf(1.0 / p)
    }

    /// Compute every norm at once, plus the unit vector and the
    /// zero/unit classification flags.
    ///
    /// ```
    /// # use steplab_core::vector::Vector;
    /// let report = Vector::new(vec![3.0, 4.0]).norm_report();
    /// assert_eq!(report.l0, 2);
    /// assert_eq!(report.l1, 7.0);
    /// assert_eq!(report.l2, 5.0);
    /// assert_eq!(report.l_inf, 4.0);
    /// ```
    #[must_use]
    pub fn norm_report(&self) -> NormReport {
        let l2 = self.norm_l2();
        NormReport {
            vector: self.clone(),
            l0: self.norm_l0(),
            l1: self.norm_l1(),
            l2,
            l_inf: self.norm_linf(),
            p_norms: [3, 4, 5]
                .iter()
                .map(|&p| (p, self.norm_lp(f64::from(p))))
                .collect(),
            unit: if l2 == 0.0 {
                self.clone()
            } else {
                self.scale(1.0 / l2)
            },
            is_zero: l2 == 0.0,
            is_unit: (l2 - 1.0).abs() < UNIT_TOLERANCE,
        }
    }
}

/// All norms of a vector, bundled for display.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormReport {
    /// The vector the report describes.
    pub vector: Vector,
    /// Count of nonzero components.
    pub l0: usize,
    /// Manhattan norm.
    pub l1: f64,
    /// Euclidean norm.
    pub l2: f64,
    /// Max norm.
    pub l_inf: f64,
    /// `(p, Lp norm)` for p in {3, 4, 5}.
    pub p_norms: Vec<(u32, f64)>,
    /// `v / ||v||₂`, or the vector itself when it is zero.
    pub unit: Vector,
    /// Whether the L2 norm is exactly zero.
    pub is_zero: bool,
    /// Whether the L2 norm is 1 within `1e-6`.
    pub is_unit: bool,
}

impl NormReport {
    /// `||v||₁ = |3| + |4| = 7.0000`
    #[must_use]
    pub fn l1_formula(&self) -> String {
        let terms: Vec<String> = self.vector.iter().map(|x| format!("|{x}|")).collect();
        format!("||v||₁ = {} = {:.4}", terms.join(" + "), self.l1)
    }

    /// `||v||₂ = √(3² + 4²) = 5.0000`
    #[must_use]
    pub fn l2_formula(&self) -> String {
        let terms: Vec<String> = self.vector.iter().map(|x| format!("{x}²")).collect();
        format!("||v||₂ = √({}) = {:.4}", terms.join(" + "), self.l2)
    }

    /// `||v||∞ = max(|v|) = 4.0000`
    #[must_use]
    pub fn linf_formula(&self) -> String {
        format!("||v||∞ = max(|v|) = {:.4}", self.l_inf)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_norms_3_4() {
        let v = Vector::new(vec![3.0, 4.0]);
        assert_eq!(v.norm_l0(), 2);
        assert_eq!(v.norm_l1(), 7.0);
        assert_eq!(v.norm_l2(), 5.0);
        assert_eq!(v.norm_linf(), 4.0);
    }

    #[test]
    fn test_lp_norms_decrease_with_p() {
        let v = Vector::new(vec![3.0, 4.0]);
        let l3 = v.norm_lp(3.0);
        let l4 = v.norm_lp(4.0);
        assert!(v.norm_l1() >= v.norm_l2());
        assert!(v.norm_l2() >= l3);
        assert!(l3 >= l4);
        assert!(l4 >= v.norm_linf());
    }

    #[test]
    fn test_norm_monotonicity() {
        // L1 >= L2 >= Linf for any nonzero vector
        for v in [
            Vector::new(vec![1.0, -2.0, 3.0]),
            Vector::new(vec![0.5, 0.5]),
            Vector::new(vec![-7.0]),
        ] {
            assert!(v.norm_l1() >= v.norm_l2());
            assert!(v.norm_l2() >= v.norm_linf());
        }
    }

    #[test]
    fn test_report_unit_flags() {
        let v = Vector::new(vec![1.0, 0.0]);
        let report = v.norm_report();
        assert!(report.is_unit);
        assert!(!report.is_zero);
        assert_eq!(report.unit.as_slice(), &[1.0, 0.0]);

        let z = Vector::zeros(2);
        let report = z.norm_report();
        assert!(report.is_zero);
        assert!(!report.is_unit);
        // Zero vector has no direction; the "unit" field stays as-is
        assert_eq!(report.unit.as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn test_report_p_norms() {
        let report = Vector::new(vec![3.0, 4.0]).norm_report();
        assert_eq!(report.p_norms.len(), 3);
        let (p, l3) = report.p_norms[0];
        assert_eq!(p, 3);
        // (27 + 64)^(1/3)
        assert!((l3 - 91.0_f64.powf(1.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_formulas() {
        let report = Vector::new(vec![3.0, 4.0]).norm_report();
        assert_eq!(report.l1_formula(), "||v||₁ = |3| + |4| = 7.0000");
        assert_eq!(report.l2_formula(), "||v||₂ = √(3² + 4²) = 5.0000");
        assert_eq!(report.linf_formula(), "||v||∞ = max(|v|) = 4.0000");
    }
}
