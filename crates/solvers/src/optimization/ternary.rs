//! Ternary search for minimizing an objective along a line.
//!
//! # Algorithm
//!
//! Given a base point `p` and a direction `d`, ternary search finds the step
//! `λ` that minimizes `f(p + λ·d)` over a fixed bracket `[low, high]`. Each
//! round evaluates the objective at the one-third and two-thirds marks of the
//! current interval and discards the third on the side of the larger value.
//! The search stops once the interval is no wider than the configured
//! tolerance and returns its midpoint.
//!
//! # Limitations
//!
//! - **Fixed bracket**: the bracket is never expanded, so only minima
//!   reachable within `[low, high]` are found. A minimum beyond the bracket
//!   yields a step near the closest bound.
//! - **Unimodal assumption**: if the objective is not unimodal along the line,
//!   the result is a local minimum within whichever sub-interval is retained.
//!
//! # Cost
//!
//! Each round costs two evaluations and shrinks the interval to two thirds of
//! its width, so a search costs `2·⌈log₁.₅(width / tolerance)⌉` evaluations
//! plus one final evaluation at the returned step. If the interval is already
//! so narrow that a round cannot shrink it in floating point, the search
//! stops there instead of reaching the tolerance.

mod config;
mod error;
mod interval;
mod search;
mod solution;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::LineMinimum;

pub(crate) use search::search_along;

use powell_core::{Model, OptimizationProblem};

/// Finds the step that minimizes the objective along `direction` from `point`.
///
/// # Errors
///
/// Returns an error if the model or problem fails, or if the objective is
/// not finite at any evaluated point.
pub fn minimize_along<M, P, const N: usize>(
    model: &M,
    problem: &P,
    point: &[f64; N],
    direction: &[f64; N],
    config: &Config,
) -> Result<LineMinimum<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    search_along(model, problem, point, direction, config, &|v: f64| v)
}

/// Finds the step that maximizes the objective along `direction` from `point`.
///
/// # Errors
///
/// Returns an error if the model or problem fails, or if the objective is
/// not finite at any evaluated point.
pub fn maximize_along<M, P, const N: usize>(
    model: &M,
    problem: &P,
    point: &[f64; N],
    direction: &[f64; N],
    config: &Config,
) -> Result<LineMinimum<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    search_along(model, problem, point, direction, config, &|v: f64| -v)
}

/// Finds the minimum of a single-variable objective over the config bracket.
///
/// This searches `x` directly, so the returned step equals the returned `x`.
///
/// # Errors
///
/// Returns an error if the model or problem fails, or if the objective is
/// not finite at any evaluated point.
pub fn minimize<M, P>(
    model: &M,
    problem: &P,
    config: &Config,
) -> Result<LineMinimum<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize_along(model, problem, &[0.0], &[1.0], config)
}

/// Finds the maximum of a single-variable objective over the config bracket.
///
/// # Errors
///
/// Returns an error if the model or problem fails, or if the objective is
/// not finite at any evaluated point.
pub fn maximize<M, P>(
    model: &M,
    problem: &P,
    config: &Config,
) -> Result<LineMinimum<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    maximize_along(model, problem, &[0.0], &[1.0], config)
}
