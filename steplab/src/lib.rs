//! # Steplab
//!
//! Small-matrix linear algebra that shows its work.
//!
//! Every operation — determinants, linear systems, inversion,
//! eigendecomposition, SVD, vector geometry — returns both the numeric
//! result and the ordered derivation that produced it, ready to render
//! as a worked example.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `serde` | `Serialize`/`Deserialize` on results and traces, `Serialize` on errors |
//!
//! ```
//! use steplab::prelude::*;
//!
//! let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2)?;
//! let det = steplab::core::solve::determinant::det_with_trace(&a)?;
//! assert_eq!(det.value, -2.0);
//! for step in &det.trace {
//!     println!("{step}");
//! }
//! # Ok::<(), EngineError>(())
//! ```

pub use steplab_core as core;

/// Glob-import convenience: `use steplab::prelude::*;`
pub mod prelude {
    pub use steplab_core::prelude::*;
}
