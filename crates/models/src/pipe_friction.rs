//! Darcy friction factor for turbulent pipe flow.
//!
//! The Colebrook equation relates the friction factor `f` to the Reynolds
//! number `Re` and the relative roughness `ε/D`:
//!
//! ```text
//! 1/√f = -2 log10(ε / (3.7 D) + 2.51 / (Re √f))
//! ```
//!
//! It is implicit in `f`. [`FrictionFactor`] poses it as a residual whose root
//! lies in [`FrictionFactor::BRACKET`] for practical turbulent flows.

use std::convert::Infallible;

use thiserror::Error;
use uom::si::f64::{DynamicViscosity, Length, MassDensity, Velocity};
use zeroin_core::{EquationProblem, Model};

/// Fluid and geometry describing flow through a circular pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeFlow {
    pub density: MassDensity,
    pub viscosity: DynamicViscosity,
    pub diameter: Length,
    pub velocity: Velocity,
    pub roughness: Length,
}

impl PipeFlow {
    /// Returns the Reynolds number `ρ V D / μ`.
    #[must_use]
    pub fn reynolds_number(&self) -> f64 {
        (self.density * self.velocity * self.diameter / self.viscosity).value
    }

    /// Returns the relative roughness `ε / D`.
    #[must_use]
    pub fn relative_roughness(&self) -> f64 {
        (self.roughness / self.diameter).value
    }
}

/// Errors from constructing or calling a [`Colebrook`] model.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ColebrookError {
    #[error("Reynolds number must be positive and finite, got {0}")]
    Reynolds(f64),

    #[error("relative roughness must be non-negative and finite, got {0}")]
    Roughness(f64),

    #[error("friction factor must be positive and finite, got {0}")]
    FrictionFactor(f64),
}

/// Both sides of the Colebrook equation at a trial friction factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookSides {
    /// Left-hand side, `1/√f`.
    pub inverse_sqrt: f64,

    /// Right-hand side, `-2 log10(ε / (3.7 D) + 2.51 / (Re √f))`.
    pub log_term: f64,
}

/// Evaluates the Colebrook equation for a fixed flow.
///
/// The input is a trial friction factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colebrook {
    reynolds: f64,
    relative_roughness: f64,
}

impl Colebrook {
    /// Creates the model for the given flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the flow has a non-positive Reynolds number or a
    /// negative relative roughness.
    pub fn new(flow: &PipeFlow) -> Result<Self, ColebrookError> {
        let reynolds = flow.reynolds_number();
        if !(reynolds.is_finite() && reynolds > 0.0) {
            return Err(ColebrookError::Reynolds(reynolds));
        }

        let relative_roughness = flow.relative_roughness();
        if !(relative_roughness.is_finite() && relative_roughness >= 0.0) {
            return Err(ColebrookError::Roughness(relative_roughness));
        }

        Ok(Self {
            reynolds,
            relative_roughness,
        })
    }

    /// Returns the Reynolds number of the flow.
    #[must_use]
    pub fn reynolds(&self) -> f64 {
        self.reynolds
    }
}

impl Model for Colebrook {
    type Input = f64;
    type Output = ColebrookSides;
    type Error = ColebrookError;

    fn call(&self, friction: &f64) -> Result<ColebrookSides, ColebrookError> {
        let f = *friction;
        if !(f.is_finite() && f > 0.0) {
            return Err(ColebrookError::FrictionFactor(f));
        }

        let sqrt_f = f.sqrt();
        let argument = self.relative_roughness / 3.7 + 2.51 / (self.reynolds * sqrt_f);

        Ok(ColebrookSides {
            inverse_sqrt: sqrt_f.recip(),
            log_term: -2.0 * argument.log10(),
        })
    }
}

/// Solves the Colebrook equation for the friction factor.
///
/// The solver variable is the friction factor and the residual is
/// `1/√f + 2 log10(ε / (3.7 D) + 2.51 / (Re √f))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrictionFactor;

impl FrictionFactor {
    /// Friction factors spanning turbulent flow in commercial pipes.
    pub const BRACKET: [f64; 2] = [0.008, 0.08];
}

impl EquationProblem<1> for FrictionFactor {
    type Input = f64;
    type Output = ColebrookSides;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &ColebrookSides) -> Result<[f64; 1], Self::Error> {
        Ok([output.inverse_sqrt - output.log_term])
    }
}
