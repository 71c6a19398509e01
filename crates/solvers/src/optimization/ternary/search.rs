use powell_core::{Model, OptimizationProblem};

use crate::optimization::{evaluate, vector};

use super::{Config, Error, LineMinimum, interval::Interval};

/// Core ternary search along a line.
///
/// The `transform` function is applied to objective values before comparison,
/// allowing the same search to handle both minimization (identity) and
/// maximization (negation).
pub(crate) fn search_along<M, P, F, const N: usize>(
    model: &M,
    problem: &P,
    point: &[f64; N],
    direction: &[f64; N],
    config: &Config,
    transform: &F,
) -> Result<LineMinimum<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    F: Fn(f64) -> f64,
{
    let mut interval = Interval::new(config.bracket());
    let mut evals = 0;

    let mut score = |step: f64| -> Result<f64, Error> {
        let eval = evaluate(model, problem, vector::add_scaled(point, direction, step))?;
        evals += 1;
        Ok(transform(eval.objective))
    };

    while interval.width() > config.tolerance() {
        let width = interval.width();
        let [lower_third, upper_third] = interval.thirds();
        if score(lower_third)? < score(upper_third)? {
            interval.discard_upper(upper_third);
        } else {
            interval.discard_lower(lower_third);
        }

        // The thirds round onto the bounds once the interval is a few ULPs
        // wide, after which no round can shrink it further.
        if interval.width() >= width {
            break;
        }
    }

    let step = interval.midpoint();
    let evaluation = evaluate(model, problem, vector::add_scaled(point, direction, step))?;

    Ok(LineMinimum {
        step,
        evaluation,
        evals: evals + 1,
    })
}
