//! Determinant by recursive cofactor expansion.
//!
//! Base cases are handled directly (1x1: the entry, 2x2: `ad - bc`);
//! larger matrices expand along row 1. The traced entry point records the
//! expansion layout, one minor/cofactor pair per nonzero entry of row 1,
//! and the final signed sum. Minors are evaluated silently — the trace
//! shows one level of expansion, which is what a reader can follow.
//!
//! Cost is O(n!) in the naive cofactor form; callers bound n (the
//! surrounding application caps input at 10x10).

use crate::error::{EngineError, Result};
use crate::matrix::Matrix;
use crate::trace::{Step, StepTrace};

/// A determinant value together with its derivation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetResult {
    /// det(A).
    pub value: f64,
    /// The cofactor-expansion derivation. Empty for 1x1 input.
    pub trace: StepTrace,
}

/// Compute the determinant of a square matrix, silently.
///
/// This is the shared numeric core: the inversion engine uses it for its
/// singularity pre-check and the property analyzer for its
/// singular/invertible flags.
///
/// ```
/// # use steplab_core::matrix::Matrix;
/// # use steplab_core::solve::determinant;
/// let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
/// assert_eq!(determinant::det(&a).unwrap(), -2.0);
/// ```
pub fn det(a: &Matrix) -> Result<f64> {
    if !a.is_square() {
        return Err(EngineError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    Ok(det_value(a))
}

/// Compute the determinant and the cofactor-expansion trace.
///
/// ```
/// # use steplab_core::matrix::Matrix;
/// # use steplab_core::solve::determinant;
/// let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
/// let result = determinant::det_with_trace(&a).unwrap();
/// assert_eq!(result.value, -2.0);
/// assert_eq!(result.trace.len(), 1);
/// ```
pub fn det_with_trace(a: &Matrix) -> Result<DetResult> {
    if !a.is_square() {
        return Err(EngineError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }

    let n = a.rows();
    let mut trace = StepTrace::new();

    if n == 1 {
        return Ok(DetResult {
            value: a[(0, 0)],
            trace,
        });
    }

    if n == 2 {
        let value = det_value(a);
        trace.push(Step::formula(
            "2×2 determinant formula",
            format!(
                "det(A) = ({}) × ({}) - ({}) × ({}) = {value}",
                a[(0, 0)],
                a[(1, 1)],
                a[(0, 1)],
                a[(1, 0)]
            ),
        ));
        return Ok(DetResult { value, trace });
    }

    // Expansion layout: det(A) = a11 × M11 - a12 × M12 + ...
    let mut layout = String::from("det(A) = ");
    for j in 0..n {
        if j > 0 {
            layout.push_str(if j % 2 == 0 { " + " } else { " - " });
        }
        layout.push_str(&format!("{} × M1{}", a[(0, j)], j + 1));
    }
    trace.push(Step::formula("Cofactor expansion along row 1", layout));

    let mut value = 0.0;
    let mut terms = Vec::with_capacity(n);
    for j in 0..n {
        let minor = a.minor(0, j);
        let minor_det = det_value(&minor);
        let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
        let cofactor = sign * a[(0, j)] * minor_det;
        value += cofactor;
        terms.push(cofactor);

        // Zero entries contribute nothing; skip their steps to keep the
        // trace readable.
        if a[(0, j)] == 0.0 {
            continue;
        }

        let mut minor_formula = format!("M1{} = det({})", j + 1, minor_display(&minor));
        if minor.rows() == 2 {
            minor_formula.push_str(&format!(
                " = ({} × {}) - ({} × {}) = {:.2} - {:.2}",
                minor[(0, 0)],
                minor[(1, 1)],
                minor[(0, 1)],
                minor[(1, 0)],
                minor[(0, 0)] * minor[(1, 1)],
                minor[(0, 1)] * minor[(1, 0)]
            ));
        }
        minor_formula.push_str(&format!(" = {minor_det:.2}"));
        trace.push(Step::formula(
            format!("Minor M1{} (remove row 1, column {})", j + 1, j + 1),
            minor_formula,
        ));

        trace.push(Step::formula(
            format!("Cofactor C1{}", j + 1),
            format!(
                "C1{} = {} × {} × {minor_det:.2} = {cofactor:.2}",
                j + 1,
                if j % 2 == 0 { "(+1)" } else { "(-1)" },
                a[(0, j)]
            ),
        ));
    }

    let sum: Vec<String> = terms.iter().map(|t| format!("{t:.2}")).collect();
    trace.push(Step::formula(
        "Final result",
        format!("det(A) = {} = {value:.2}", sum.join(" + ")),
    ));

    Ok(DetResult { value, trace })
}

/// Silent recursive cofactor expansion.
fn det_value(a: &Matrix) -> f64 {
    let n = a.rows();
    if n == 1 {
        return a[(0, 0)];
    }
    if n == 2 {
        return a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)];
    }
    let mut det = 0.0;
    for j in 0..n {
        if a[(0, j)] == 0.0 {
            continue;
        }
        let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
        det += sign * a[(0, j)] * det_value(&a.minor(0, j));
    }
    det
}

/// Compact minor rendering for formulas: bars for 2x2, bracketed rows
/// above that.
fn minor_display(m: &Matrix) -> String {
    if m.rows() == 1 {
        return format!("{}", m[(0, 0)]);
    }
    if m.rows() == 2 {
        return format!(
            "|{} {}| |{} {}|",
            m[(0, 0)],
            m[(0, 1)],
            m[(1, 0)],
            m[(1, 1)]
        );
    }
    let rows: Vec<String> = (0..m.rows())
        .map(|i| {
            let cells: Vec<String> = m.row(i).iter().map(|v| format!("{v:.2}")).collect();
            format!("[{}]", cells.join(", "))
        })
        .collect();
    rows.join(", ")
}
