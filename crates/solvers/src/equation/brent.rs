//! Brent's method for bracketed root finding.
//!
//! # Algorithm
//!
//! Brent's method (Brent-Dekker) keeps a bracket `[a, b]` whose residuals
//! have opposite signs. `b` is always the best estimate so far and `a` the
//! contrapoint. Each iteration tries an open method, secant when only two
//! distinct points are known and inverse quadratic interpolation otherwise,
//! and falls back to bisection whenever the interpolated step would leave the
//! safe part of the bracket or would not shrink fast enough. The result
//! converges superlinearly on smooth functions and never does worse than a
//! small multiple of plain bisection.
//!
//! The solver stops when the residual at `b` is exactly zero or when
//! `0.5 * |a - b| <= 2 * epsilon * max(|b|, 1)`, with `epsilon` taken from
//! [`Config`] (machine epsilon by default).
//!
//! # Requirements
//!
//! - The residual must be continuous on the bracket.
//! - The endpoint residuals must have opposite signs, or one of them must be
//!   exactly zero. Otherwise the solver fails with
//!   [`BracketError::NoSignChange`] after evaluating only the endpoints.
//!
//! # Observer Events
//!
//! The endpoints are evaluated silently. After that the solver emits one
//! [`Event`] per step, carrying the [`Step`] kind, the bracket used to choose
//! it, and the new evaluation. Observers can return [`Action::StopEarly`] to
//! halt and receive the best estimate so far.
//!
//! # Example
//!
//! ```
//! use zeroin_solvers::equation::brent::{Config, find_root};
//!
//! let root = find_root(|x: f64| (-x).exp() - x, [0.0, 1.0], &Config::default()).unwrap();
//! assert!((root - 0.567_143_290_409_783_8).abs() < 1e-12);
//! ```

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;
mod state;
mod step;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use step::Step;

use zeroin_core::{EquationProblem, Model, Observer};

use crate::equation::{Evaluation, ScalarFn, ZeroOf, evaluate};

use bracket::same_sign;
use state::State;

/// Finds a root of the equation using Brent's method.
///
/// The observer receives an [`Event`] for each step after the endpoints.
/// See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, a residual is non-finite, a
/// step leaves the bracket, the iteration limit is reached, or the model or
/// problem fails.
#[allow(clippy::float_cmp)]
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let initial = bracket::validate(bracket)?;
    let [low, high] = initial;

    let low = evaluate_finite(model, problem, low)?;
    let high = evaluate_finite(model, problem, high)?;

    let (low_residual, high_residual) = (low.residuals[0], high.residuals[0]);
    if low_residual == 0.0 {
        return Ok(exact(low, high.x[0]));
    }
    if high_residual == 0.0 {
        return Ok(exact(high, low.x[0]));
    }
    if same_sign(low_residual, high_residual) {
        return Err(BracketError::NoSignChange {
            left: low.x[0],
            right: high.x[0],
            left_residual: low_residual,
            right_residual: high_residual,
        }
        .into());
    }

    let mut state = State::new(low, high);
    let mut iters = 0;

    loop {
        if state.is_root() {
            return Ok(state.into_solution(Status::Converged, iters));
        }

        state.normalize();

        let tol = config.tolerance(state.estimate());
        if state.is_converged(tol) {
            return Ok(state.into_solution(Status::Converged, iters));
        }

        if iters == config.max_iters() {
            return Err(state.into_max_iters_error(iters));
        }
        iters += 1;

        let bracket = state.bracket();
        let step = state.select_step(tol);
        let x = state.next_x(tol);
        if !bracket::contains(initial, x) {
            return Err(Error::StepOutsideBracket {
                x,
                bracket: initial,
            });
        }
        let eval = evaluate_finite(model, problem, x)?;

        let event = Event {
            iter: iters,
            step,
            bracket,
            tolerance: tol,
            eval: &eval,
        };
        let action = observer.observe(&event);

        state.advance(eval);

        if let Some(Action::StopEarly) = action {
            return Ok(state.into_best_solution(Status::StoppedByObserver, iters));
        }
    }
}

/// Runs Brent's method without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, a residual is non-finite,
/// the iteration limit is reached, or the model or problem fails.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Finds `x` in `bracket` with `f(x) = 0` and returns it.
///
/// This is a convenience wrapper around [`solve`] for plain functions.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, `f` returns a non-finite
/// value, or the iteration limit is reached.
pub fn find_root<F>(f: F, bracket: [f64; 2], config: &Config) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    solve_unobserved(&ScalarFn(f), &ZeroOf, bracket, config).map(|solution| solution.x)
}

/// Evaluates at `x` and rejects NaN or infinite residuals.
fn evaluate_finite<M, P>(
    model: &M,
    problem: &P,
    x: f64,
) -> Result<Evaluation<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, [x])?;
    let residual = eval.residuals[0];
    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }
    Ok(eval)
}

/// Solution for an endpoint whose residual is exactly zero.
fn exact<I, O>(eval: Evaluation<I, O, 1>, contrapoint: f64) -> Solution<I, O> {
    Solution {
        status: Status::Converged,
        x: eval.x[0],
        residual: eval.residuals[0],
        contrapoint,
        snapshot: eval.snapshot,
        iters: 0,
    }
}
