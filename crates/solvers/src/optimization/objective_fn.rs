use std::convert::Infallible;

use powell_core::{Model, OptimizationProblem};

/// Adapter that lets a plain function act as both model and problem.
///
/// The wrapped function maps a point `x: [f64; N]` directly to its objective.
/// The model input is the point itself and the model output is the objective,
/// so the same value can be passed as `model` and `problem` to any solver.
///
/// ```
/// use powell_solvers::optimization::{ObjectiveFn, evaluate};
///
/// let sphere = ObjectiveFn::new(|x: &[f64; 2]| x[0] * x[0] + x[1] * x[1]);
/// let eval = evaluate(&sphere, &sphere, [1.0, 2.0]).unwrap();
/// assert_eq!(eval.objective, 5.0);
/// ```
pub struct ObjectiveFn<F, const N: usize> {
    function: F,
}

impl<F, const N: usize> ObjectiveFn<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    /// Wraps a function of the solver variables.
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F, const N: usize> From<F> for ObjectiveFn<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    fn from(function: F) -> Self {
        Self::new(function)
    }
}

impl<F, const N: usize> Model for ObjectiveFn<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    type Input = [f64; N];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &[f64; N]) -> Result<f64, Self::Error> {
        Ok((self.function)(input))
    }
}

impl<F, const N: usize> OptimizationProblem<N> for ObjectiveFn<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    type Input = [f64; N];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; N], output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn objective_is_function_value() {
        let f: ObjectiveFn<_, 2> = (|x: &[f64; 2]| x[0] - x[1]).into();

        let input = f.input(&[5.0, 2.0]).unwrap();
        let output = f.call(&input).unwrap();

        assert_eq!(input, [5.0, 2.0]);
        assert_relative_eq!(f.objective(&input, &output).unwrap(), 3.0);
    }
}
