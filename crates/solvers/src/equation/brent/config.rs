use thiserror::Error;

/// Configuration for the Brent solver.
///
/// The convergence tolerance at each iteration is
/// `2 * epsilon * max(|b|, 1)`, where `b` is the current estimate, so it
/// scales with the magnitude of the root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    epsilon: f64,
}

/// Errors that can occur when validating a Brent solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,
}

impl Default for Config {
    /// Allows 100 iterations and uses machine epsilon for `f64`.
    fn default() -> Self {
        Self {
            max_iters: 100,
            epsilon: f64::EPSILON,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is non-finite or not positive.
    pub fn new(max_iters: usize, epsilon: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }

        Ok(Self { max_iters, epsilon })
    }

    /// Returns the maximum number of steps after the endpoint evaluations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance scale.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the convergence tolerance around the estimate `x`.
    #[must_use]
    pub fn tolerance(&self, x: f64) -> f64 {
        2.0 * self.epsilon * x.abs().max(1.0)
    }
}
