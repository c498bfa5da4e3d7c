use std::{cell::Cell, convert::Infallible};

use approx::assert_relative_eq;
use thiserror::Error;

use zeroin_core::{EquationProblem, Model};

use crate::equation::{ScalarFn, ZeroOf};

use super::{
    Action, BracketError, Config, Error, Event, Status, Step, find_root, solve, solve_unobserved,
};

/// Root of `e^-x = x`.
const OMEGA: f64 = 0.567_143_290_409_783_8;

fn fixed_point(x: f64) -> f64 {
    (-x).exp() - x
}

/// Checks the convergence criterion on a finished solve.
fn assert_within_tolerance(x: f64, contrapoint: f64, residual: f64) {
    let tol = Config::default().tolerance(x);
    assert!(
        residual == 0.0 || 0.5 * (contrapoint - x).abs() <= tol,
        "x = {x}, contrapoint = {contrapoint}, residual = {residual}"
    );
}

#[test]
fn finds_polynomial_root() {
    let model = ScalarFn(|x: f64| x.powi(10) - 1.0);

    let solution = solve_unobserved(&model, &ZeroOf, [0.0, 1.3], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 1.0, epsilon = 1e-12);
    assert_within_tolerance(solution.x, solution.contrapoint, solution.residual);
}

#[test]
fn finds_transcendental_root() {
    let solution = solve_unobserved(&ScalarFn(fixed_point), &ZeroOf, [0.0, 1.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, OMEGA, epsilon = 1e-12);
    assert!(solution.residual.abs() < 1e-12);
    assert_within_tolerance(solution.x, solution.contrapoint, solution.residual);
}

#[test]
fn finds_colebrook_friction_factor() {
    let reynolds = 1.23 * 40.0 * 0.005 / 1.79e-5;
    let roughness = 1.5e-6;
    let diameter = 0.005;
    let colebrook = move |f: f64| {
        1.0 / f.sqrt() + 2.0 * (roughness / (3.7 * diameter) + 2.51 / (reynolds * f.sqrt())).log10()
    };

    let friction = find_root(colebrook, [0.008, 0.08], &Config::default()).expect("should converge");

    assert!(colebrook(friction).abs() < 1e-6);
    assert!(friction > 0.02 && friction < 0.04, "friction = {friction}");
}

#[test]
fn reversed_bracket_finds_same_root() {
    let root = find_root(fixed_point, [1.0, 0.0], &Config::default()).expect("should converge");
    assert_relative_eq!(root, OMEGA, epsilon = 1e-12);
}

#[test]
fn first_step_is_secant() {
    let mut steps = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| -> Option<Action> {
        steps.push((event.step, event.x()));
        None
    };

    solve(&ScalarFn(fixed_point), &ZeroOf, [0.0, 1.0], &Config::default(), observer)
        .expect("should converge");

    let (f0, f1) = (fixed_point(0.0), fixed_point(1.0));
    let secant_root = 1.0 - f1 / (f1 - f0);

    let (step, x) = steps[0];
    assert_eq!(step, Step::Secant);
    assert_relative_eq!(x, secant_root, epsilon = 1e-15);
    assert!(
        steps
            .iter()
            .any(|(step, _)| *step == Step::InverseQuadratic)
    );
}

#[test]
fn bracket_brackets_root_at_every_step() {
    let f = |x: f64| x.powi(3) - 2.0 * x - 5.0;
    let mut events = 0;
    let observer = |event: &Event<'_, f64, f64>| -> Option<Action> {
        let [a, b] = event.bracket;
        assert_ne!(f(a).signum(), f(b).signum(), "bracket lost at {a}, {b}");
        assert!(event.tolerance > 0.0);
        events += 1;
        None
    };

    let solution = solve(&ScalarFn(f), &ZeroOf, [2.0, 3.0], &Config::default(), observer)
        .expect("should converge");

    assert_eq!(events, solution.iters);
    assert_relative_eq!(solution.x, 2.094_551_481_542_326_5, epsilon = 1e-12);
}

#[test]
fn rejects_bracket_without_sign_change() {
    let calls = Cell::new(0);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        x + 5.0
    };

    let result = find_root(f, [1.0, 2.0], &Config::default());

    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NoSignChange { .. }))
    ));
    assert_eq!(calls.get(), 2);
}

#[test]
fn rejects_non_finite_bracket() {
    let result = find_root(fixed_point, [f64::NAN, 1.0], &Config::default());
    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NonFinite { .. }))
    ));

    let result = find_root(fixed_point, [0.0, f64::INFINITY], &Config::default());
    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NonFinite { .. }))
    ));
}

#[test]
fn exact_root_at_low_end_short_circuits() {
    let calls = Cell::new(0);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        x
    };

    let solution = solve_unobserved(&ScalarFn(f), &ZeroOf, [0.0, 1.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.x, 0.0);
    assert_relative_eq!(solution.contrapoint, 1.0);
    assert_eq!(calls.get(), 2);
}

#[test]
fn exact_root_at_high_end_short_circuits() {
    let root = find_root(|x: f64| x - 1.0, [0.0, 1.0], &Config::default()).expect("exact root");
    assert_relative_eq!(root, 1.0);
}

#[test]
fn collapsed_bracket_at_exact_root_is_idempotent() {
    let f = |x: f64| x - 0.5;

    let root = find_root(f, [0.0, 1.0], &Config::default()).expect("should converge");
    assert_relative_eq!(root, 0.5);

    let again = solve_unobserved(&ScalarFn(f), &ZeroOf, [root, root], &Config::default())
        .expect("exact root");
    assert_eq!(again.iters, 0);
    assert_relative_eq!(again.x, root);
}

#[test]
fn collapsed_bracket_with_residual_is_rejected() {
    let root = find_root(fixed_point, [0.0, 1.0], &Config::default()).expect("should converge");

    let result = find_root(fixed_point, [root, root], &Config::default());

    if fixed_point(root) == 0.0 {
        assert_relative_eq!(result.expect("exact root"), root);
    } else {
        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::NoSignChange { .. }))
        ));
    }
}

#[test]
fn iteration_limit_reports_best_estimate() {
    let config = Config::new(2, f64::EPSILON).unwrap();

    let result = find_root(fixed_point, [0.0, 1.0], &config);

    let Err(Error::MaxIters {
        x,
        residual,
        contrapoint,
        iters,
    }) = result
    else {
        panic!("expected iteration limit, got {result:?}");
    };
    assert_eq!(iters, 2);
    assert_relative_eq!(residual, fixed_point(x));
    assert!(residual.abs() < 0.1);
    assert_ne!(fixed_point(contrapoint).signum(), residual.signum());
}

#[test]
fn zero_iters_reports_better_endpoint() {
    let config = Config::new(0, f64::EPSILON).unwrap();

    let result = find_root(fixed_point, [0.0, 1.0], &config);

    // f(0) = 1 and f(1) = -0.63, so x = 1 is the better endpoint.
    assert!(matches!(
        result,
        Err(Error::MaxIters { x, iters: 0, .. }) if x == 1.0
    ));
}

#[test]
fn observer_can_stop_iteration() {
    let mut calls = 0usize;
    let observer = |event: &Event<'_, f64, f64>| {
        calls += 1;
        if event.iter >= 3 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = solve(&ScalarFn(fixed_point), &ZeroOf, [0.0, 1.0], &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_eq!(calls, 3);
    assert_relative_eq!(solution.residual, fixed_point(solution.x));
    assert_ne!(
        fixed_point(solution.contrapoint).signum(),
        solution.residual.signum()
    );
}

#[test]
fn errors_on_non_finite_residual() {
    // The first step bisects [-1, 1] and lands on the pole.
    let result = find_root(|x: f64| 1.0 / x, [-1.0, 1.0], &Config::default());

    assert!(matches!(
        result,
        Err(Error::NonFiniteResidual { x, .. }) if x == 0.0
    ));
}

#[test]
fn larger_epsilon_stops_sooner() {
    let tight = solve_unobserved(&ScalarFn(fixed_point), &ZeroOf, [0.0, 1.0], &Config::default())
        .expect("should converge");
    let loose = solve_unobserved(
        &ScalarFn(fixed_point),
        &ZeroOf,
        [0.0, 1.0],
        &Config::new(100, 1e-4).unwrap(),
    )
    .expect("should converge");

    assert!(loose.iters <= tight.iters);
    assert_relative_eq!(loose.x, OMEGA, epsilon = 1e-3);
}

#[test]
fn step_sequence_is_reproducible() {
    let config = Config::default();

    let omega = solve_unobserved(&ScalarFn(fixed_point), &ZeroOf, [0.0, 1.0], &config)
        .expect("should converge");
    assert_eq!(omega.iters, 5);
    assert_eq!(omega.x.to_bits(), 0x3fe2_2609_af8e_9657);

    let reynolds = 1.23 * 40.0 * 0.005 / 1.79e-5;
    let colebrook = move |f: f64| {
        1.0 / f.sqrt() + 2.0 * (1.5e-6 / (3.7 * 0.005) + 2.51 / (reynolds * f.sqrt())).log10()
    };
    let friction = solve_unobserved(&ScalarFn(colebrook), &ZeroOf, [0.008, 0.08], &config)
        .expect("should converge");
    assert_eq!(friction.iters, 9);
    assert_eq!(friction.x.to_bits(), 0x3f9d_a9bc_d54a_d3bf);

    let cubic = |x: f64| x.powi(3) - 2.0 * x - 5.0;
    let wallis = solve_unobserved(&ScalarFn(cubic), &ZeroOf, [2.0, 3.0], &config)
        .expect("should converge");
    assert_eq!(wallis.iters, 6);
}

#[test]
fn bracket_wider_than_f64_max_stays_inside() {
    let root = find_root(f64::atan, [-1e308, 1e308], &Config::default()).expect("should converge");
    assert_relative_eq!(root, 0.0);

    let root =
        find_root(f64::atan, [-f64::MAX, f64::MAX], &Config::default()).expect("should converge");
    assert_relative_eq!(root, 0.0);

    let solution = solve_unobserved(
        &ScalarFn(|x: f64| x - 1.0),
        &ZeroOf,
        [-1e308, 1e308],
        &Config::default(),
    )
    .expect("should converge");
    assert!(solution.x.is_finite());
    assert_relative_eq!(solution.x, 1.0, epsilon = 1e-12);
}

/// Flow through an orifice, `Q = k * sqrt(dp)`, solved for the pressure drop.
struct Orifice {
    k: f64,
}

#[derive(Debug, Error)]
#[error("negative pressure drop: {0}")]
struct NegativePressure(f64);

impl Model for Orifice {
    type Input = f64;
    type Output = f64;
    type Error = NegativePressure;

    fn call(&self, dp: &f64) -> Result<f64, Self::Error> {
        if *dp < 0.0 {
            return Err(NegativePressure(*dp));
        }
        Ok(self.k * dp.sqrt())
    }
}

struct TargetFlow(f64);

impl EquationProblem<1> for TargetFlow {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _dp: &f64, flow: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([flow - self.0])
    }
}

#[test]
fn solves_model_with_problem() {
    let model = Orifice { k: 0.5 };
    let problem = TargetFlow(2.0);

    let solution = solve_unobserved(&model, &problem, [0.0, 100.0], &Config::default())
        .expect("should converge");

    assert_relative_eq!(solution.x, 16.0, epsilon = 1e-10);
    assert_relative_eq!(solution.snapshot.input, solution.x);
    assert_relative_eq!(solution.snapshot.output, 2.0, epsilon = 1e-12);
}

#[test]
fn model_errors_propagate() {
    let model = Orifice { k: 0.5 };
    let problem = TargetFlow(2.0);

    let result = solve_unobserved(&model, &problem, [-1.0, 100.0], &Config::default());

    assert!(matches!(result, Err(Error::Model(_))));
}
