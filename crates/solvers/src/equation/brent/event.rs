use crate::equation::Evaluation;

use super::Step;

/// Iteration event emitted by the Brent solver.
///
/// One event is emitted per step, after the new estimate has been evaluated.
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based, excludes the endpoint evaluations).
    pub iter: usize,

    /// The kind of step that produced the new estimate.
    pub step: Step,

    /// Contrapoint and previous estimate, `[a, b]`, when the step was chosen.
    ///
    /// Their residuals always have opposite signs.
    pub bracket: [f64; 2],

    /// Convergence tolerance in effect when the step was chosen.
    pub tolerance: f64,

    /// Evaluation at the new estimate.
    pub eval: &'a Evaluation<I, O, 1>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the new estimate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x[0]
    }

    /// Returns the residual at the new estimate.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residuals[0]
    }
}
