use zeroin_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// Observer that stops a solver once the residual is small enough.
///
/// Useful when the residual has a physical scale and full machine precision
/// in `x` is not needed. The solver returns its best estimate with an
/// early-stop status.
#[derive(Debug, Clone, Copy)]
pub struct ResidualThreshold {
    tolerance: f64,
}

impl ResidualThreshold {
    /// Creates an observer that stops when `|residual| <= tolerance`.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.abs(),
        }
    }

    /// Returns the residual tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl<E, A> Observer<E, A> for ResidualThreshold
where
    E: HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.residual().abs() <= self.tolerance).then(A::stop_early)
    }
}
