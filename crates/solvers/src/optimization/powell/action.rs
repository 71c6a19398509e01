/// Actions an observer can take during Powell's method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the current point.
    ///
    /// The request takes effect at the end of the current outer iteration,
    /// never in the middle of a line search.
    StopEarly,
}
