//! Solvers for equation problems — finding roots of scalar equations.
//!
//! An [`EquationProblem`] maps solver variables `x: [f64; N]` to model inputs,
//! calls the model, and computes residuals. Solvers in this module drive those
//! residuals toward zero.
//!
//! # Solvers
//!
//! - [`brent`] — guaranteed convergence on a bracketed interval, with
//!   superlinear steps when the function is well behaved
//! - [`scan`] — locates the sub-intervals where the residual changes sign
//!
//! Plain closures can be solved through the [`ScalarFn`] model and the
//! [`ZeroOf`] problem, or directly with [`brent::find_root`].
//!
//! [`EquationProblem`]: zeroin_core::EquationProblem

mod evaluate;
mod scalar;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use scalar::{ScalarFn, ZeroOf};

pub mod brent;
pub mod scan;
