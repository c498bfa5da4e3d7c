use std::convert::Infallible;

use zeroin_core::{EquationProblem, Model};

/// Wraps a plain `f64 -> f64` function as a [`Model`].
///
/// The function is treated as infallible; non-finite results are left for the
/// solver to reject.
#[derive(Debug, Clone, Copy)]
pub struct ScalarFn<F>(pub F);

impl<F> Model for ScalarFn<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok((self.0)(*input))
    }
}

/// The problem `f(x) = 0` for a scalar model with `f64` input and output.
///
/// The solver variable is passed through as the model input and the model
/// output is the residual.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroOf;

impl EquationProblem<1> for ZeroOf {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([*output])
    }
}
