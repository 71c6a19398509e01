use powell_core::Snapshot;

/// Indicates why Powell's method stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of Powell's method.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the optimum x.
    pub x: [f64; N],

    /// Objective value at the reported x.
    pub objective: f64,

    /// Snapshot at the reported x.
    pub snapshot: Snapshot<I, O>,

    /// Number of completed outer iterations.
    pub iters: usize,

    /// Total number of objective evaluations.
    pub evals: usize,

    /// The direction set when the solver finished.
    pub directions: [[f64; N]; N],
}
