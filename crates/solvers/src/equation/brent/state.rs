use std::mem;

use crate::equation::Evaluation;

use super::{Error, Solution, Status, Step, bracket::same_sign};

/// Search state carried between Brent iterations.
///
/// - `b` is the current estimate.
/// - `a` is the contrapoint; once normalized, `f(a)` and `f(b)` have
///   opposite signs and `|f(b)| <= |f(a)|`.
/// - `c` is the previous estimate.
/// - `d` is the step just taken and `e` the one before it.
pub(super) struct State<I, O> {
    a: Evaluation<I, O, 1>,
    b: Evaluation<I, O, 1>,
    c: Evaluation<I, O, 1>,
    d: f64,
    e: f64,
}

impl<I: Clone, O: Clone> State<I, O> {
    /// Starts from a validated bracket with `a = low` and `b = high`.
    pub(super) fn new(low: Evaluation<I, O, 1>, high: Evaluation<I, O, 1>) -> Self {
        let c = low.clone();
        let d = high.x[0] - c.x[0];
        Self {
            a: low,
            b: high,
            c,
            d,
            e: d,
        }
    }

    /// Restores the bracket and moves the best estimate into `b`.
    pub(super) fn normalize(&mut self) {
        if same_sign(self.fa(), self.fb()) {
            self.a = self.c.clone();
            self.d = self.xb() - self.xc();
            self.e = self.d;
        }

        if self.fa().abs() < self.fb().abs() {
            // (a, b, c) <- (b, a, b)
            mem::swap(&mut self.a, &mut self.b);
            self.c = self.a.clone();
        }
    }
}

impl<I, O> State<I, O> {
    fn xa(&self) -> f64 {
        self.a.x[0]
    }

    fn xb(&self) -> f64 {
        self.b.x[0]
    }

    fn xc(&self) -> f64 {
        self.c.x[0]
    }

    fn fa(&self) -> f64 {
        self.a.residuals[0]
    }

    fn fb(&self) -> f64 {
        self.b.residuals[0]
    }

    fn fc(&self) -> f64 {
        self.c.residuals[0]
    }

    /// Returns the current estimate.
    pub(super) fn estimate(&self) -> f64 {
        self.xb()
    }

    /// Returns `[a, b]`.
    pub(super) fn bracket(&self) -> [f64; 2] {
        [self.xa(), self.xb()]
    }

    /// Returns true if the residual at the estimate is exactly zero.
    #[allow(clippy::float_cmp)]
    pub(super) fn is_root(&self) -> bool {
        self.fb() == 0.0
    }

    /// Half the signed distance from the estimate to the contrapoint.
    ///
    /// Halving each end first keeps the offset finite for brackets that
    /// span more than `f64::MAX`.
    fn midpoint_offset(&self) -> f64 {
        0.5 * self.xa() - 0.5 * self.xb()
    }

    /// Termination test, valid after [`State::normalize`].
    pub(super) fn is_converged(&self, tol: f64) -> bool {
        self.midpoint_offset().abs() <= tol || self.is_root()
    }

    /// Chooses the next step and updates the step memory.
    ///
    /// Interpolation is attempted only when the step before last was at
    /// least `tol` and the previous estimate was worse than the current one.
    /// Two distinct points give a secant step, three give inverse quadratic
    /// interpolation. The interpolated step is kept only if it stays well
    /// inside the bracket and shrinks faster than half the step before last;
    /// otherwise the solver bisects. Degenerate coefficients (zero, infinite,
    /// or NaN) fail those comparisons and also lead to bisection.
    #[allow(clippy::float_cmp)]
    pub(super) fn select_step(&mut self, tol: f64) -> Step {
        let m = self.midpoint_offset();

        if self.e.abs() >= tol && self.fc().abs() > self.fb().abs() {
            let s = self.fb() / self.fc();

            let (mut p, mut q, step) = if self.xa() == self.xc() {
                (2.0 * m * s, 1.0 - s, Step::Secant)
            } else {
                let q = self.fc() / self.fa();
                let r = self.fb() / self.fa();
                let p = s * (2.0 * m * q * (q - r) - (self.xb() - self.xc()) * (r - 1.0));
                let q = (q - 1.0) * (r - 1.0) * (s - 1.0);
                (p, q, Step::InverseQuadratic)
            };

            if p > 0.0 {
                q = -q;
            } else {
                p = -p;
            }

            if 2.0 * p < 3.0 * m * q - (tol * q).abs() && p < (0.5 * self.e * q).abs() {
                self.e = self.d;
                self.d = p / q;
                return step;
            }
        }

        self.d = m;
        self.e = m;
        Step::Bisection
    }

    /// Returns the next estimate from the selected step.
    ///
    /// Steps smaller than `tol` are replaced by a move of exactly `tol`
    /// away from the contrapoint.
    pub(super) fn next_x(&self, tol: f64) -> f64 {
        if self.d.abs() > tol {
            self.xb() + self.d
        } else {
            self.xb() - tol.copysign(self.xb() - self.xa())
        }
    }

    /// Records a new estimate, keeping the previous one as `c`.
    pub(super) fn advance(&mut self, eval: Evaluation<I, O, 1>) {
        self.c = mem::replace(&mut self.b, eval);
    }

    /// Finishes with the current estimate.
    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution<I, O> {
        let contrapoint = self.xa();
        finish(self.b, contrapoint, status, iters)
    }

    /// Finishes with whichever of the current and previous estimates has the
    /// smaller residual magnitude.
    pub(super) fn into_best_solution(self, status: Status, iters: usize) -> Solution<I, O> {
        let (best, contrapoint) = self.into_best();
        finish(best, contrapoint, status, iters)
    }

    /// Builds the iteration-limit error from the best estimate.
    pub(super) fn into_max_iters_error(self, iters: usize) -> Error {
        let (best, contrapoint) = self.into_best();
        Error::MaxIters {
            x: best.x[0],
            residual: best.residuals[0],
            contrapoint,
            iters,
        }
    }

    /// Returns the better of `b` and `c` with the tightest point known to
    /// have the opposite sign.
    ///
    /// The state may not be normalized here, so `a` is only a fallback.
    fn into_best(self) -> (Evaluation<I, O, 1>, f64) {
        let xa = self.xa();
        let (best, other) = if self.fc().abs() < self.fb().abs() {
            (self.c, self.b)
        } else {
            (self.b, self.c)
        };

        let contrapoint = if same_sign(best.residuals[0], other.residuals[0]) {
            xa
        } else {
            other.x[0]
        };
        (best, contrapoint)
    }
}

fn finish<I, O>(
    eval: Evaluation<I, O, 1>,
    contrapoint: f64,
    status: Status,
    iters: usize,
) -> Solution<I, O> {
    Solution {
        status,
        x: eval.x[0],
        residual: eval.residuals[0],
        contrapoint,
        snapshot: eval.snapshot,
        iters,
    }
}
