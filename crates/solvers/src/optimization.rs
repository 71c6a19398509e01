//! Solvers that minimize or maximize a scalar objective.
//!
//! An [`OptimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes or maximizes that objective
//! without using derivatives.
//!
//! # Solvers
//!
//! - [`ternary`] — line minimization over a fixed bracket by discarding a
//!   third of the interval per round
//! - [`powell`] — multivariate minimization by repeated line searches along a
//!   maintained set of directions
//!
//! Plain closures can be used as objectives through [`ObjectiveFn`].
//!
//! [`OptimizationProblem`]: powell_core::OptimizationProblem

mod evaluate;
mod objective_fn;
mod vector;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use objective_fn::ObjectiveFn;

pub mod powell;
pub mod ternary;
