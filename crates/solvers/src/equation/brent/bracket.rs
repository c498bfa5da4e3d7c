use thiserror::Error;

/// Errors that can occur when validating a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// An endpoint is NaN or infinite.
    #[error("non-finite endpoint: {value}")]
    NonFinite { value: f64 },

    /// Both endpoint residuals are nonzero and share a sign.
    #[error("no sign change: f({left}) = {left_residual}, f({right}) = {right_residual}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },
}

/// Checks that both endpoints are finite.
///
/// The endpoints are returned in the order given. Brent's method does not
/// need `left < right`, and a zero-width bracket is left for the sign check
/// to accept (exact root) or reject.
pub(super) fn validate(bracket: [f64; 2]) -> Result<[f64; 2], BracketError> {
    for value in bracket {
        if !value.is_finite() {
            return Err(BracketError::NonFinite { value });
        }
    }
    Ok(bracket)
}

/// Returns true if `x` is finite and lies within `bracket`, in either order.
pub(super) fn contains(bracket: [f64; 2], x: f64) -> bool {
    let [a, b] = bracket;
    x.is_finite() && a.min(b) <= x && x <= a.max(b)
}

/// Returns true if both values carry the same sign bit.
///
/// Signed zeros count: `+0.0` is positive and `-0.0` is negative.
pub(super) fn same_sign(lhs: f64, rhs: f64) -> bool {
    lhs.signum() == rhs.signum()
}
