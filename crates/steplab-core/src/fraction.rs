//! Rational display approximation.
//!
//! Converts a real number into the nicest short form for a derivation
//! trace: an integer, a reduced fraction like `3/7`, or a 4-decimal
//! fallback. This is presentation only — computed values are never
//! touched.

/// Denominators are searched exhaustively up to this bound.
const MAX_DENOMINATOR: i64 = 1000;

/// A candidate fraction must match the input this closely to be accepted.
const MATCH_TOLERANCE: f64 = 1e-6;

/// Greatest common divisor (Euclid), on absolute values.
fn gcd(mut a: i64, mut b: i64) -> i64 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Format a real number as an integer, a reduced fraction, or a 4-decimal
/// string.
///
/// Searches denominators `1..=1000` for the closest match within `1e-6`;
/// values indistinguishable from zero render as `"0"`.
///
/// ```
/// # use steplab_core::fraction::to_fraction;
/// assert_eq!(to_fraction(0.5), "1/2");
/// assert_eq!(to_fraction(-0.25), "-1/4");
/// assert_eq!(to_fraction(3.0), "3");
/// ```
#[must_use]
pub fn to_fraction(value: f64) -> String {
    if value.abs() < 1e-10 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value}");
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let x = value.abs();

    for den in 1..=MAX_DENOMINATOR {
        #[allow(clippy::cast_possible_truncation)]
        let num = (x * den as f64).round() as i64;
        if (x - num as f64 / den as f64).abs() < MATCH_TOLERANCE {
            let g = gcd(num, den);
            let (num, den) = (num / g, den / g);
            if den == 1 {
                return format!("{sign}{num}");
            }
            return format!("{sign}{num}/{den}");
        }
    }

    // No small fraction is close enough.
    format!("{x:.4}")
}
