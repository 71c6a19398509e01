use crate::optimization::Evaluation;

/// The result of a line search.
#[derive(Debug, Clone)]
pub struct LineMinimum<I, O, const N: usize> {
    /// The step `λ` along the searched direction.
    pub step: f64,

    /// Evaluation at `point + step * direction`.
    pub evaluation: Evaluation<I, O, N>,

    /// Number of objective evaluations, including the final one at `step`.
    pub evals: usize,
}

impl<I, O, const N: usize> LineMinimum<I, O, N> {
    /// Returns the point reached by the step.
    #[must_use]
    pub fn x(&self) -> [f64; N] {
        self.evaluation.x
    }

    /// Returns the objective at the point reached by the step.
    #[must_use]
    pub fn objective(&self) -> f64 {
        self.evaluation.objective
    }
}
