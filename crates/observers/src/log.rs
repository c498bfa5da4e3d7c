use tracing::debug;
use zeroin_core::Observer;

use crate::traits::{HasEstimate, HasResidual};

/// Observer that emits a `tracing` event at `debug` level for every step.
///
/// Each event records the observer's label, a running step count, the
/// estimate, and the residual. The observer never alters the solve.
///
/// Install a subscriber (for example `tracing_subscriber::fmt`) to see the
/// output; without one the events are discarded.
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: &'static str,
    steps: usize,
}

impl LogObserver {
    /// Creates a log observer that tags its events with `label`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self { label, steps: 0 }
    }

    /// Returns the number of events logged so far.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new("zeroin")
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasEstimate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.steps += 1;
        debug!(
            solver = self.label,
            step = self.steps,
            x = event.estimate(),
            residual = event.residual(),
            "root finder step"
        );
        None
    }
}
