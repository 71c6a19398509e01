use powell_core::Observer;

use super::{Action, Event};

/// Observer that records the iteration trace of Powell's method.
///
/// The trace holds the start point, then the point after each direction
/// cycle, plus the point after each accepted extrapolation, in the order the
/// solver produced them. Recording never stops the solver.
///
/// Pass `&mut trace` to keep ownership and read the points afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace<const N: usize> {
    points: Vec<[f64; N]>,
}

impl<const N: usize> Trace<N> {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Returns the recorded points.
    #[must_use]
    pub fn points(&self) -> &[[f64; N]] {
        &self.points
    }

    /// Consumes the trace and returns the recorded points.
    #[must_use]
    pub fn into_points(self) -> Vec<[f64; N]> {
        self.points
    }

    fn record(&mut self, event: &Event<'_, N>) {
        self.points.push(*event.x());
    }
}

impl<const N: usize> Observer<Event<'_, N>, Action> for Trace<N> {
    fn observe(&mut self, event: &Event<'_, N>) -> Option<Action> {
        self.record(event);
        None
    }
}

impl<const N: usize> Observer<Event<'_, N>, Action> for &mut Trace<N> {
    fn observe(&mut self, event: &Event<'_, N>) -> Option<Action> {
        self.record(event);
        None
    }
}
