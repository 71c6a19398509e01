use powell_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Stops a solver once the objective reaches a target value.
///
/// Use [`StopAtTarget::below`] when minimizing and [`StopAtTarget::above`]
/// when maximizing. The observer records the first objective that met the
/// target, so callers can tell whether it fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAtTarget {
    target: f64,
    sense: Sense,
    reached: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sense {
    Below,
    Above,
}

impl StopAtTarget {
    /// Stops once the objective is at or below `target`.
    #[must_use]
    pub fn below(target: f64) -> Self {
        Self {
            target,
            sense: Sense::Below,
            reached: None,
        }
    }

    /// Stops once the objective is at or above `target`.
    #[must_use]
    pub fn above(target: f64) -> Self {
        Self {
            target,
            sense: Sense::Above,
            reached: None,
        }
    }

    /// Returns the objective that first met the target, if any.
    #[must_use]
    pub fn reached(&self) -> Option<f64> {
        self.reached
    }

    fn check<A: CanStopEarly>(&mut self, objective: f64) -> Option<A> {
        let met = match self.sense {
            Sense::Below => objective <= self.target,
            Sense::Above => objective >= self.target,
        };
        if !met {
            return None;
        }

        self.reached.get_or_insert(objective);
        Some(A::stop_early())
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for StopAtTarget {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.check(event.objective())
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for &mut StopAtTarget {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.check(event.objective())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use powell_solvers::optimization::{ObjectiveFn, powell};

    fn rosenbrock(x: &[f64; 2]) -> f64 {
        (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2)
    }

    #[test]
    fn stops_minimization_once_below_target() {
        let objective = ObjectiveFn::new(rosenbrock);
        let mut target = StopAtTarget::below(1.0);

        let solution = powell::minimize(
            &objective,
            &objective,
            [-1.0, 2.0],
            &powell::Config::default(),
            &mut target,
        )
        .expect("should run");

        assert_eq!(solution.status, powell::Status::StoppedByObserver);
        assert!(solution.objective <= 1.0);

        let reached = target.reached().expect("target should be reached");
        assert!(reached <= 1.0);
    }

    #[test]
    fn stops_maximization_once_above_target() {
        let objective = ObjectiveFn::new(|x: &[f64; 1]| 2.0 - (x[0] - 0.5).powi(2));
        let mut target = StopAtTarget::above(1.9);

        let solution = powell::maximize(
            &objective,
            &objective,
            [-2.0],
            &powell::Config::default(),
            &mut target,
        )
        .expect("should run");

        assert_eq!(solution.status, powell::Status::StoppedByObserver);
        assert!(solution.objective >= 1.9);
    }

    #[test]
    fn stays_quiet_until_target_is_met() {
        let mut target = StopAtTarget::below(0.5);
        let event = powell::Event::Started {
            x: &[0.0],
            objective: 0.75,
        };

        let action: Option<powell::Action> = target.observe(&event);
        assert_eq!(action, None);
        assert_eq!(target.reached(), None);

        let event = powell::Event::Started {
            x: &[0.0],
            objective: 0.25,
        };
        let action: Option<powell::Action> = target.observe(&event);
        assert_eq!(action, Some(powell::Action::StopEarly));
        assert_relative_eq!(target.reached().unwrap_or(f64::NAN), 0.25);
    }
}
