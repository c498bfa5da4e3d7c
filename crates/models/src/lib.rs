//! Engineering models posed as scalar root-finding problems.
//!
//! Each module pairs a [`Model`](zeroin_core::Model) with an
//! [`EquationProblem`](zeroin_core::EquationProblem) whose root is the
//! quantity of interest. Physical parameters are `uom` SI quantities.
//!
//! - [`pipe_friction`] — Darcy friction factor from the Colebrook equation
//! - [`rectifier`] — ripple of a capacitor-smoothed bridge rectifier

pub mod pipe_friction;
pub mod rectifier;
