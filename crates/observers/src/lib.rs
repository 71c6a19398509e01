//! Reusable observers for the Powell direction-set solver.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver event or action implementing them.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasPoint`], [`CanStopEarly`])
//! - [`target`] — [`StopAtTarget`], which stops a solver once the objective
//!   is good enough
//!
//! To record the iteration trace, use [`Trace`] from the solvers crate.
//!
//! [`Observer`]: powell_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasPoint`]: traits::HasPoint
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`Trace`]: powell_solvers::optimization::powell::Trace

pub mod target;
pub mod traits;

pub use target::StopAtTarget;
