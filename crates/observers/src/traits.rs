//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to be written once and reused.
//!
//! # Event traits
//!
//! - [`HasTime`] — events that carry the current time
//! - [`HasState`] — events that carry the current state
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use ivp_core::Observer;
//! use ivp_observers::traits::{CanStopEarly, HasTime};
//!
//! struct Deadline {
//!     time: f64,
//! }
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for Deadline {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() >= self.time).then(A::stop_early)
//!     }
//! }
//! ```

use ivp_solvers::transient::euler;

/// An event that carries the current time.
pub trait HasTime {
    /// Returns the time for this event.
    fn time(&self) -> f64;
}

/// An event that carries the current state.
pub trait HasState<S> {
    /// Returns the state for this event.
    fn state(&self) -> &S;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- euler::Event ---

impl<S> HasTime for euler::Event<'_, S> {
    fn time(&self) -> f64 {
        self.time
    }
}

impl<S> HasState<S> for euler::Event<'_, S> {
    fn state(&self) -> &S {
        self.state
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
