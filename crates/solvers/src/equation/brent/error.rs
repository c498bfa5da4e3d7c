use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

use super::BracketError;

/// Errors that can occur during Brent solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    /// A step produced an estimate that is non-finite or outside the
    /// initial bracket.
    #[error("step left the bracket [{}, {}]: x = {x}", bracket[0], bracket[1])]
    StepOutsideBracket { x: f64, bracket: [f64; 2] },

    /// The iteration limit was reached before the tolerance test passed.
    ///
    /// Carries the best estimate found so far.
    #[error("no convergence after {iters} iterations: best x = {x}, residual = {residual}")]
    MaxIters {
        x: f64,
        residual: f64,
        contrapoint: f64,
        iters: usize,
    },

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
