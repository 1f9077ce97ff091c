//! The computation engines.
//!
//! Each submodule computes one kind of result together with the
//! [`StepTrace`](crate::trace::StepTrace) that justifies it:
//!
//! | Module | Operation | Supported sizes |
//! |--------|-----------|-----------------|
//! | [`determinant`] | cofactor-expansion determinant | n x n (callers bound n ≤ 10) |
//! | [`elimination`] | Gaussian elimination + back substitution | n x n |
//! | [`inverse`] | Gauss-Jordan inversion of `[A | I]` | n x n |
//! | [`properties`] | rank, trace, norms, structural predicates | m x n |
//! | [`eigen`] | characteristic-polynomial eigendecomposition | 2 x 2 only |
//! | [`svd`] | singular value decomposition via `AᵗA` | 2 x 2 only |
//! | [`arithmetic`] | entry-by-entry traced `+`, `-`, `*`, transpose | shape-checked |
//!
//! Engines are pure: they copy their inputs, share no state between
//! calls, and report every failure as an
//! [`EngineError`](crate::error::EngineError) value.

pub mod arithmetic;
pub mod determinant;
pub mod eigen;
pub mod elimination;
pub mod inverse;
pub mod properties;
pub mod svd;
