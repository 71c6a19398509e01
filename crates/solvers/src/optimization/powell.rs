//! Powell's direction-set method for multivariate optimization.
//!
//! # Algorithm
//!
//! The solver keeps a current point and a set of `N` search directions,
//! starting from the coordinate axes. Each outer iteration line-searches
//! along every direction in turn (see [`ternary`]) and remembers which one
//! produced the largest decrease. The cycle's net displacement is then a
//! candidate new direction: if Powell's safeguard judges it worthwhile, the
//! solver line-searches along it and it replaces the direction of largest
//! decrease, keeping the set from collapsing onto a few dominant axes.
//!
//! The solver converges once a full cycle improves the objective by less than
//! the configured relative tolerance.
//!
//! # When to Use
//!
//! - Derivatives are unavailable, noisy, or expensive
//! - The dimension is small and evaluations are cheap enough to spend
//!   dozens per line search
//!
//! # Limitations
//!
//! - **Local only**: the result is a local minimum reachable along the
//!   maintained directions, with no global guarantee
//! - **Bounded steps**: each line search covers only the configured bracket,
//!   so progress per cycle is limited by the bracket width
//! - **Monotonic**: a line search that would worsen the objective is
//!   discarded, so the reported objective never increases
//!
//! # Observer Events
//!
//! - [`Event::Started`] — once, after evaluating the start point
//! - [`Event::Cycled`] — after each pass over the direction set
//! - [`Event::Extrapolated`] — after each accepted move along the net
//!   displacement
//!
//! Observers can return [`Action::StopEarly`] from any event. Stopping from
//! [`Event::Started`] returns the start point; otherwise the solver finishes
//! the current iteration first. Use [`Trace`] to record the iteration trace.
//!
//! [`ternary`]: super::ternary

mod action;
mod config;
mod criteria;
mod directions;
mod error;
mod event;
mod search;
mod solution;
mod trace;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use trace::Trace;

use powell_core::{Model, Observer, OptimizationProblem};

use crate::optimization::{ObjectiveFn, ternary};

use search::search;

/// Finds a local minimum of the objective using Powell's method.
///
/// See the [module docs](self) for event timing and observer actions.
///
/// # Errors
///
/// Returns an error if `x0` has no coordinates, if the model or problem
/// fails, or if the objective is not finite at any evaluated point.
pub fn minimize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    search(model, problem, x0, config, observer, |v| v)
}

/// Finds a local minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `x0` has no coordinates, if the model or problem
/// fails, or if the objective is not finite at any evaluated point.
pub fn minimize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, x0, config, ())
}

/// Finds a local maximum of the objective using Powell's method.
///
/// Events and the returned solution report the objective as computed; only
/// the comparisons are reversed.
///
/// # Errors
///
/// Returns an error if `x0` has no coordinates, if the model or problem
/// fails, or if the objective is not finite at any evaluated point.
pub fn maximize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    search(model, problem, x0, config, observer, |v| -v)
}

/// Finds a local maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `x0` has no coordinates, if the model or problem
/// fails, or if the objective is not finite at any evaluated point.
pub fn maximize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, x0, config, ())
}

/// Minimizes a plain function and returns the solution with its trace.
///
/// Uses the default line search. The trace starts with `x0` and holds every
/// point the solver moved to, as recorded by [`Trace`].
///
/// ```
/// use powell_solvers::optimization::powell::{self, Status};
///
/// let bowl = |x: &[f64; 2]| (x[0] - 0.3).powi(2) + (x[1] + 0.2).powi(2);
/// let (solution, trace) = powell::optimize(bowl, [0.0, 0.0], 1e-6, 50).unwrap();
///
/// assert_eq!(solution.status, Status::Converged);
/// assert!((solution.x[0] - 0.3).abs() < 1e-4);
/// assert_eq!(trace[0], [0.0, 0.0]);
/// ```
///
/// # Errors
///
/// Returns an error if `tolerance` is not finite and positive, if
/// `max_iters` is zero, if `x0` has no coordinates, or if the objective is
/// not finite at any evaluated point. Invalid arguments are rejected before
/// `f` is called.
pub fn optimize<F, const N: usize>(
    f: F,
    x0: [f64; N],
    tolerance: f64,
    max_iters: usize,
) -> Result<(Solution<[f64; N], f64, N>, Vec<[f64; N]>), Error>
where
    F: Fn(&[f64; N]) -> f64,
{
    let config = Config::new(max_iters, tolerance, ternary::Config::default())?;
    let objective = ObjectiveFn::new(f);

    let mut trace = Trace::<N>::new();
    let solution = minimize(&objective, &objective, x0, &config, &mut trace)?;

    Ok((solution, trace.into_points()))
}
