//! Core traits and types for stepping initial value problems.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`StepIntegrable`] — a state that can be advanced by `derivative * delta`
//! - [`OdeProblem`] — the right-hand side `f(t, y)` of `y'(t) = f(t, y)`
//! - [`TimeSpan`] — the `(start, end)` interval of an integration run
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;
mod problems;
mod span;
mod step;

pub use observer::Observer;
pub use problems::{FnProblem, OdeProblem, TryFnProblem, from_fn, try_from_fn};
pub use span::TimeSpan;
pub use step::{DerivativeOf, StepIntegrable};
