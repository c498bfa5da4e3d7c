use zeroin_core::Snapshot;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The residual is exactly zero or the bracket is within tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Brent solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the root.
    pub x: f64,

    /// Residual at the reported root estimate.
    pub residual: f64,

    /// The opposite end of the final bracket.
    ///
    /// Unless the residual is exactly zero, the root lies between
    /// `contrapoint` and `x`.
    pub contrapoint: f64,

    /// Snapshot at the reported root estimate.
    pub snapshot: Snapshot<I, O>,

    /// Number of steps taken after the endpoint evaluations.
    pub iters: usize,
}
