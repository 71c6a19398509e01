//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasPoint`] — events that carry the solver's current point
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use powell_core::Observer;
//! use powell_observers::traits::{CanStopEarly, HasPoint};
//!
//! /// Stops once the solver leaves the unit box.
//! struct StayInBox;
//!
//! impl<E: HasPoint<2>, A: CanStopEarly> Observer<E, A> for StayInBox {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let outside = event.point().iter().any(|v| v.abs() > 1.0);
//!         outside.then(A::stop_early)
//!     }
//! }
//! ```

use powell_solvers::optimization::powell;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An event that carries the solver's current point.
pub trait HasPoint<const N: usize> {
    /// Returns the point for this event.
    fn point(&self) -> &[f64; N];
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- powell::Event ---

impl<const N: usize> HasObjective for powell::Event<'_, N> {
    fn objective(&self) -> f64 {
        powell::Event::objective(self)
    }
}

impl<const N: usize> HasPoint<N> for powell::Event<'_, N> {
    fn point(&self) -> &[f64; N] {
        self.x()
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for powell::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
