//! Incremental search for sign changes.
//!
//! Samples the residual at equally spaced points across an interval and
//! reports each pair of neighbouring samples whose residuals differ in sign.
//! For a continuous residual every reported pair brackets at least one root
//! and can be handed to [`brent::solve`](super::brent::solve). Roots of even
//! multiplicity, or pairs of roots closer than the sample spacing, produce no
//! sign change and are missed.

use std::error::Error as StdError;

use thiserror::Error;

use zeroin_core::{EquationProblem, Model};

use super::{EvalError, ScalarFn, ZeroOf, evaluate};

/// Errors that can occur during an incremental search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("bounds contain non-finite value: {value}")]
    NonFiniteBounds { value: f64 },

    #[error("at least 2 sample points are required, got {points}")]
    TooFewPoints { points: usize },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}

/// Returns the sub-intervals of `bounds` where the residual changes sign.
///
/// The residual is evaluated at `points` abscissae
/// `low + (high - low) * i / (points - 1)`, with the bounds reordered so that
/// `low <= high`. Signs are compared by sign bit, so a residual of exactly
/// `+0.0` counts as positive. Brackets are returned in ascending order.
///
/// # Errors
///
/// Returns an error if the bounds are non-finite, fewer than two points are
/// requested, a residual is non-finite, or the model or problem fails.
pub fn scan<M, P>(
    model: &M,
    problem: &P,
    bounds: [f64; 2],
    points: usize,
) -> Result<Vec<[f64; 2]>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let [low, high] = validate(bounds, points)?;

    #[allow(clippy::cast_precision_loss)]
    let spacing = (points - 1) as f64;

    let mut brackets = Vec::new();
    let mut previous = low;
    let mut previous_sign = sign_at(model, problem, low)?;

    for i in 1..points {
        #[allow(clippy::cast_precision_loss)]
        let x = low + (high - low) * (i as f64) / spacing;
        let sign = sign_at(model, problem, x)?;

        if sign != previous_sign {
            brackets.push([previous, x]);
        }

        previous = x;
        previous_sign = sign;
    }

    Ok(brackets)
}

/// Runs [`scan`] on a plain function.
///
/// # Errors
///
/// Returns an error if the bounds are non-finite, fewer than two points are
/// requested, or `f` returns a non-finite value.
pub fn scan_fn<F>(f: F, bounds: [f64; 2], points: usize) -> Result<Vec<[f64; 2]>, Error>
where
    F: Fn(f64) -> f64,
{
    scan(&ScalarFn(f), &ZeroOf, bounds, points)
}

fn validate(bounds: [f64; 2], points: usize) -> Result<[f64; 2], Error> {
    if points < 2 {
        return Err(Error::TooFewPoints { points });
    }

    let [a, b] = bounds;
    for value in [a, b] {
        if !value.is_finite() {
            return Err(Error::NonFiniteBounds { value });
        }
    }

    Ok(if a <= b { [a, b] } else { [b, a] })
}

/// Returns `true` if the residual at `x` has its sign bit set.
fn sign_at<M, P>(model: &M, problem: &P, x: f64) -> Result<bool, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let residual = evaluate(model, problem, [x])?.residuals[0];
    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }
    Ok(residual.is_sign_negative())
}
