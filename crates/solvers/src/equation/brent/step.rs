use std::fmt;

/// The kind of step the Brent solver took to produce a new estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Halving toward the contrapoint.
    ///
    /// Taken whenever interpolation is not attempted or its result is rejected.
    Bisection,

    /// Linear interpolation through the estimate and the contrapoint.
    Secant,

    /// Inverse quadratic interpolation through three distinct points.
    InverseQuadratic,
}

impl Step {
    /// Returns true for the open (interpolating) methods.
    #[must_use]
    pub fn is_interpolation(self) -> bool {
        !matches!(self, Step::Bisection)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Bisection => "bisection",
            Step::Secant => "secant",
            Step::InverseQuadratic => "inverse quadratic interpolation",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_bisection_is_not_interpolation() {
        assert!(!Step::Bisection.is_interpolation());
        assert!(Step::Secant.is_interpolation());
        assert!(Step::InverseQuadratic.is_interpolation());
    }

    #[test]
    fn displays_method_names() {
        assert_eq!(Step::Secant.to_string(), "secant");
        assert_eq!(
            Step::InverseQuadratic.to_string(),
            "inverse quadratic interpolation"
        );
    }
}
