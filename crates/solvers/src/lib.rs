//! Numerical solvers for the zeroin workspace.
//!
//! - [`equation::brent`] — Brent-Dekker root finding on a bracketed interval
//! - [`equation::scan`] — incremental search for sign changes, producing
//!   brackets for the root finder

pub mod equation;
