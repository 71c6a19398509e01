use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error as ThisError;

use powell_core::{Model, OptimizationProblem};

use crate::optimization::ObjectiveFn;

use super::{Config, Error, maximize, maximize_along, minimize, minimize_along};

#[test]
fn finds_quadratic_minimum_within_tolerance() {
    let config = Config::default();

    for c in [-0.7, -0.25, 0.0, 0.4, 0.9] {
        let f = ObjectiveFn::new(move |x: &[f64; 1]| (x[0] - c).powi(2));

        let minimum = minimize(&f, &f, &config).expect("finite objective");

        assert!(
            (minimum.step - c).abs() <= config.tolerance(),
            "expected step near {c}, got {}",
            minimum.step
        );
        assert_relative_eq!(minimum.x()[0], minimum.step);
    }
}

#[test]
fn maximizes_concave_function() {
    let f = ObjectiveFn::new(|x: &[f64; 1]| 1.0 - (x[0] + 0.3).powi(2));

    let maximum = maximize(&f, &f, &Config::default()).expect("finite objective");

    assert_relative_eq!(maximum.step, -0.3, epsilon = 1e-5);
    assert_relative_eq!(maximum.objective(), 1.0, epsilon = 1e-9);
}

#[test]
fn searches_along_scaled_direction() {
    // f(x, y) = (x - 2)² + (y - 1)², searched from (1, 1) along (2, 0).
    // The minimizer (2, 1) is reached at λ = 0.5.
    let f = ObjectiveFn::new(|x: &[f64; 2]| (x[0] - 2.0).powi(2) + (x[1] - 1.0).powi(2));

    let minimum = minimize_along(&f, &f, &[1.0, 1.0], &[2.0, 0.0], &Config::default())
        .expect("finite objective");

    assert_relative_eq!(minimum.step, 0.5, epsilon = 1e-5);
    assert_relative_eq!(minimum.x()[0], 2.0, epsilon = 2e-5);
    assert_relative_eq!(minimum.x()[1], 1.0);
}

#[test]
fn maximize_along_reports_objective_as_computed() {
    let f = ObjectiveFn::new(|x: &[f64; 2]| -(x[0].powi(2) + x[1].powi(2)));

    let maximum = maximize_along(&f, &f, &[0.5, 0.5], &[1.0, 1.0], &Config::default())
        .expect("finite objective");

    assert_relative_eq!(maximum.step, -0.5, epsilon = 1e-5);
    assert!(maximum.objective() <= 0.0);
    assert_relative_eq!(maximum.objective(), 0.0, epsilon = 1e-9);
}

#[test]
fn bracket_is_not_expanded() {
    // Minimum at λ = 3 lies outside [-1, 1]; the search stops at the bound.
    let f = ObjectiveFn::new(|x: &[f64; 1]| (x[0] - 3.0).powi(2));

    let minimum = minimize(&f, &f, &Config::default()).expect("finite objective");

    assert_relative_eq!(minimum.step, 1.0, epsilon = 1e-5);
}

#[test]
fn custom_bracket_and_tolerance() {
    let f = ObjectiveFn::new(|x: &[f64; 1]| (x[0] - 7.5).powi(2));
    let config = Config::new(1e-8, [5.0, 10.0]).unwrap();

    let minimum = minimize(&f, &f, &config).expect("finite objective");

    assert_relative_eq!(minimum.step, 7.5, epsilon = 1e-8);
}

#[test]
fn counts_two_evaluations_per_round_plus_final() {
    // Width 2 shrinks below 1e-5 after 31 rounds.
    let f = ObjectiveFn::new(|x: &[f64; 1]| x[0].abs());

    let minimum = minimize(&f, &f, &Config::default()).expect("finite objective");

    assert_eq!(minimum.evals, 63);
}

#[test]
fn wide_tolerance_returns_bracket_midpoint() {
    let f = ObjectiveFn::new(|x: &[f64; 1]| (x[0] - 0.9).powi(2));
    let config = Config::new(10.0, [-1.0, 1.0]).unwrap();

    let minimum = minimize(&f, &f, &config).expect("finite objective");

    assert_relative_eq!(minimum.step, 0.0);
    assert_eq!(minimum.evals, 1);
}

#[test]
fn non_finite_objective_is_an_error() {
    // Undefined for x > 0.5, and the search walks toward the minimum at 0.8.
    let f = ObjectiveFn::new(|x: &[f64; 1]| {
        if x[0] > 0.5 {
            f64::NAN
        } else {
            (x[0] - 0.8).powi(2)
        }
    });

    let result = minimize(&f, &f, &Config::default());

    assert!(matches!(
        result,
        Err(Error::NonFiniteObjective { ref x, objective }) if x[0] > 0.5 && objective.is_nan()
    ));
}

/// Model that fails when x exceeds a threshold.
struct ThresholdModel {
    threshold: f64,
}

#[derive(Debug, Clone, ThisError)]
#[error("model failed at x={x} (threshold={threshold})")]
struct ThresholdError {
    x: f64,
    threshold: f64,
}

impl Model for ThresholdModel {
    type Input = f64;
    type Output = f64;
    type Error = ThresholdError;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        if *x > self.threshold {
            Err(ThresholdError {
                x: *x,
                threshold: self.threshold,
            })
        } else {
            Ok(x.powi(2))
        }
    }
}

/// Objective: just use the model output as the objective.
struct ObjectiveOutput;

impl OptimizationProblem<1> for ObjectiveOutput {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

#[test]
fn model_failure_is_propagated() {
    let model = ThresholdModel { threshold: 0.5 };

    let result = minimize(&model, &ObjectiveOutput, &Config::default());

    let Err(Error::Model(source)) = result else {
        panic!("expected a model error");
    };
    assert!(source.to_string().contains("threshold=0.5"));
}

#[test]
fn succeeds_when_model_never_fails_in_bracket() {
    let model = ThresholdModel { threshold: 2.0 };

    let minimum = minimize(&model, &ObjectiveOutput, &Config::default()).expect("no failures");

    assert_relative_eq!(minimum.step, 0.0, epsilon = 1e-5);
    assert_relative_eq!(minimum.evaluation.snapshot.output, minimum.step.powi(2));
}

#[test]
fn stops_when_bracket_is_narrower_than_float_spacing() {
    // Near 1e12 adjacent floats are about 1.2e-4 apart, so the interval can
    // never shrink to the requested width.
    let f = ObjectiveFn::new(|x: &[f64; 1]| (x[0] - 1e12 - 3.0).powi(2));
    let config = Config::new(1e-5, [1e12, 1e12 + 10.0]).expect("valid config");

    let minimum = minimize(&f, &f, &config).expect("finite objective");

    assert!((minimum.step - (1e12 + 3.0)).abs() < 1e-2);
    assert!(minimum.evals < 200);
}

#[test]
fn stops_when_tolerance_is_below_float_spacing() {
    let f = ObjectiveFn::new(|x: &[f64; 1]| (x[0] - 0.4).powi(2));
    let config = Config::new(1e-17, [-1.0, 1.0]).expect("valid config");

    let minimum = minimize(&f, &f, &config).expect("finite objective");

    assert_relative_eq!(minimum.step, 0.4, epsilon = 1e-12);
    assert!(minimum.evals < 400);
}
