//! Derivation traces.
//!
//! Every engine in this crate returns a [`StepTrace`] alongside its numeric
//! result: the ordered list of intermediate matrices and substituted
//! formulas that justify the answer. Steps hold deep copies of working
//! state — later row operations cannot retroactively change an earlier
//! snapshot. Traces are append-only while a computation runs and read-only
//! once returned.

use core::fmt;
use core::ops::Index;

use crate::matrix::Matrix;
use crate::vector::Vector;

/// One record in a derivation: a description plus an optional formula
/// and optional matrix / constants snapshots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    description: String,
    formula: Option<String>,
    matrix: Option<Matrix>,
    constants: Option<Vector>,
}

impl Step {
    /// A step carrying only a description, e.g. "det(A) ≠ 0, so A⁻¹ exists".
    pub fn note(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            formula: None,
            matrix: None,
            constants: None,
        }
    }

    /// A step with a substituted formula.
    pub fn formula(description: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            formula: Some(formula.into()),
            matrix: None,
            constants: None,
        }
    }

    /// A step with a matrix snapshot (the matrix is captured by value).
    pub fn with_matrix(description: impl Into<String>, matrix: Matrix) -> Self {
        Self {
            description: description.into(),
            formula: None,
            matrix: Some(matrix),
            constants: None,
        }
    }

    /// A step with both a coefficient-matrix snapshot and the constants
    /// column, as produced by elimination.
    pub fn with_system(description: impl Into<String>, matrix: Matrix, constants: Vector) -> Self {
        Self {
            description: description.into(),
            formula: None,
            matrix: Some(matrix),
            constants: Some(constants),
        }
    }

    /// What the step does, in words.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The substituted formula, if this step has one.
    #[must_use]
    pub fn formula_text(&self) -> Option<&str> {
        self.formula.as_deref()
    }

    /// The matrix snapshot, if this step has one.
    #[must_use]
    pub fn matrix(&self) -> Option<&Matrix> {
        self.matrix.as_ref()
    }

    /// The constants-column snapshot, if this step has one.
    #[must_use]
    pub fn constants(&self) -> Option<&Vector> {
        self.constants.as_ref()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)?;
        if let Some(formula) = &self.formula {
            write!(f, ": {formula}")?;
        }
        if let Some(matrix) = &self.matrix {
            write!(f, " {matrix}")?;
        }
        if let Some(constants) = &self.constants {
            write!(f, " | {constants}")?;
        }
        Ok(())
    }
}

/// An ordered, append-only sequence of [`Step`]s.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepTrace {
    steps: Vec<Step>,
}

impl StepTrace {
    /// An empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step. Only engines extend traces; callers receive them
    /// finished.
    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The steps as a slice.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Iterate over steps in order.
    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }
}

impl Index<usize> for StepTrace {
    type Output = Step;

    fn index(&self, i: usize) -> &Step {
        &self.steps[i]
    }
}

impl<'a> IntoIterator for &'a StepTrace {
    type Item = &'a Step;
    type IntoIter = core::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for StepTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {step}", i + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut working = Matrix::identity(2);
        let step = Step::with_matrix("initial", working.clone());
        working[(0, 0)] = 99.0;
        // The snapshot must not see the later mutation
        assert_eq!(step.matrix().unwrap()[(0, 0)], 1.0);
    }

    #[test]
    fn test_trace_order() {
        let mut trace = StepTrace::new();
        trace.push(Step::note("first"));
        trace.push(Step::formula("second", "1 + 1 = 2"));
        assert_eq!(trace.len(), 2);
        assert_eq!(trace[0].description(), "first");
        assert_eq!(trace[1].formula_text(), Some("1 + 1 = 2"));
    }

    #[test]
    fn test_display() {
        let mut trace = StepTrace::new();
        trace.push(Step::formula("2×2 determinant formula", "ad - bc = -2"));
        let text = format!("{trace}");
        assert_eq!(text, "1. 2×2 determinant formula: ad - bc = -2");
    }
}
