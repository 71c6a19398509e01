//! Derivative-free solvers for minimization problems.
//!
//! See [`optimization`] for the available solvers.

pub mod optimization;
