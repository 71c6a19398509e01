use powell_core::{Model, Observer, OptimizationProblem};
use tracing::debug;

use crate::optimization::{Evaluation, evaluate, ternary, vector};

use super::{
    Action, Config, Error, Event, Solution, Status,
    criteria::{self, BiggestDrop},
    directions::DirectionSet,
};

/// Core Powell direction-set implementation.
///
/// The `transform` function is applied to objective values before comparison,
/// allowing the same algorithm to handle both minimization (identity) and
/// maximization (negation). Reported objectives are always untransformed.
pub(super) fn search<M, P, Obs, F, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
    transform: F,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
    F: Fn(f64) -> f64,
{
    if N == 0 {
        return Err(Error::EmptyPoint);
    }

    let mut run = Run {
        model,
        problem,
        line: config.line(),
        transform: &transform,
        evals: 0,
    };

    let mut current = run.evaluate(x0)?;
    let mut directions = DirectionSet::identity();

    let started = Event::Started {
        x: &current.x,
        objective: current.objective,
    };
    if let Some(Action::StopEarly) = observer.observe(&started) {
        return Ok(run.finish(current, directions, Status::StoppedByObserver, 0));
    }

    for iter in 1..=config.max_iters() {
        let x_prev = current.x;
        let f_prev = transform(current.objective);

        let mut largest = BiggestDrop::default();

        for j in 0..N {
            let f_before = transform(current.objective);
            current = run.line_step(current, directions.get(j))?;
            largest.record(j, f_before - transform(current.objective));
        }

        let BiggestDrop {
            drop: biggest_drop,
            index: drop_index,
        } = largest;

        let f_val = transform(current.objective);
        debug!(
            iter,
            objective = current.objective,
            biggest_drop,
            drop_index,
            "completed direction cycle"
        );

        let cycled = Event::Cycled {
            iter,
            x: &current.x,
            objective: current.objective,
            biggest_drop,
            drop_index,
        };
        let mut stop_requested = matches!(observer.observe(&cycled), Some(Action::StopEarly));

        if criteria::is_converged(f_prev, f_val, config.tolerance()) {
            debug!(iter, objective = current.objective, "converged");
            return Ok(run.finish(current, directions, Status::Converged, iter));
        }

        let new_dir = vector::sub(&current.x, &x_prev);
        let extrapolated = run.evaluate(vector::add(&current.x, &new_dir))?;
        let f_ext = transform(extrapolated.objective);

        if criteria::accepts_new_direction(f_prev, f_val, f_ext, biggest_drop) {
            current = run.line_step(current, &new_dir)?;

            let replaced = vector::normalize(&new_dir).map(|unit| {
                directions.replace(drop_index, unit);
                drop_index
            });
            match replaced {
                Some(index) => debug!(iter, index, "replaced direction of largest drop"),
                None => debug!(iter, "displacement has no usable length, directions kept"),
            }

            let event = Event::Extrapolated {
                iter,
                x: &current.x,
                objective: current.objective,
                replaced,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                stop_requested = true;
            }
        }

        if stop_requested {
            debug!(iter, objective = current.objective, "stopped by observer");
            return Ok(run.finish(current, directions, Status::StoppedByObserver, iter));
        }
    }

    debug!(
        iters = config.max_iters(),
        objective = current.objective,
        "reached iteration limit"
    );
    Ok(run.finish(current, directions, Status::MaxIters, config.max_iters()))
}

/// Borrowed solver context that counts objective evaluations.
struct Run<'a, M, P, F> {
    model: &'a M,
    problem: &'a P,
    line: &'a ternary::Config,
    transform: &'a F,
    evals: usize,
}

impl<M, P, F> Run<'_, M, P, F>
where
    M: Model,
    F: Fn(f64) -> f64,
{
    fn evaluate<const N: usize>(
        &mut self,
        x: [f64; N],
    ) -> Result<Evaluation<M::Input, M::Output, N>, Error>
    where
        P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    {
        let eval = evaluate(self.model, self.problem, x)?;
        self.evals += 1;
        Ok(eval)
    }

    /// Line-searches along `direction` from `current` and returns the new point.
    ///
    /// A result that scores worse than `current` is discarded and `current`
    /// is returned unchanged, so the objective never increases.
    fn line_step<const N: usize>(
        &mut self,
        current: Evaluation<M::Input, M::Output, N>,
        direction: &[f64; N],
    ) -> Result<Evaluation<M::Input, M::Output, N>, Error>
    where
        P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    {
        let line = ternary::search_along(
            self.model,
            self.problem,
            &current.x,
            direction,
            self.line,
            self.transform,
        )?;
        self.evals += line.evals;

        if (self.transform)(line.objective()) > (self.transform)(current.objective) {
            Ok(current)
        } else {
            Ok(line.evaluation)
        }
    }

    fn finish<const N: usize>(
        &self,
        current: Evaluation<M::Input, M::Output, N>,
        directions: DirectionSet<N>,
        status: Status,
        iters: usize,
    ) -> Solution<M::Input, M::Output, N> {
        Solution {
            status,
            x: current.x,
            objective: current.objective,
            snapshot: current.snapshot,
            iters,
            evals: self.evals,
            directions: directions.into_inner(),
        }
    }
}
