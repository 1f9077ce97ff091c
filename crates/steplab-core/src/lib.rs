//! `steplab-core` — Engine crate for the Steplab workspace.
//!
//! Small-matrix linear algebra where every answer shows its work: each
//! engine returns its numeric result together with the ordered
//! [`StepTrace`](trace::StepTrace) of intermediate matrices and
//! substituted formulas that justify it.
//!
//! # Design
//!
//! - **Zero external dependencies** for math — every algorithm is from
//!   scratch over `f64`.
//! - Engines are pure functions over owned snapshots; traces never alias
//!   working state.
//! - Every failure is a structured [`EngineError`] value. Library code
//!   does not panic except on out-of-bounds indexing, which is the
//!   caller's bug.

pub mod error;
pub mod fraction;
pub mod matrix;
pub mod solve;
pub mod trace;
pub mod transform;
pub mod vector;

// Re-export key types at crate root for convenience.
pub use error::{EngineError, Result};
pub use matrix::Matrix;
pub use trace::{Step, StepTrace};
pub use vector::Vector;

/// Items intended for glob-import: `use steplab_core::prelude::*;`
pub mod prelude {
    pub use crate::error::{EngineError, Result};
    pub use crate::matrix::Matrix;
    pub use crate::solve::arithmetic::ArithmeticResult;
    pub use crate::solve::determinant::DetResult;
    pub use crate::solve::eigen::{EigenDecomposition, Eigenvalues};
    pub use crate::solve::elimination::SystemSolution;
    pub use crate::solve::inverse::InverseResult;
    pub use crate::solve::properties::MatrixProperties;
    pub use crate::solve::svd::SvdResult;
    pub use crate::trace::{Step, StepTrace};
    pub use crate::transform::{ReflectionAxis, Transform};
    pub use crate::vector::{NormReport, Vector, Worked};
}
