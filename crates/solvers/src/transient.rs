//! Time-stepping solvers for ODE problems.
//!
//! An [`OdeProblem`] supplies the derivative `f(t, y)` of a state that
//! implements [`StepIntegrable`]. Solvers in this module march that state
//! across a [`TimeSpan`] and record the trajectory.
//!
//! # Solvers
//!
//! - [`euler`] — explicit first-order forward Euler with a fixed step
//!
//! [`OdeProblem`]: ivp_core::OdeProblem
//! [`StepIntegrable`]: ivp_core::StepIntegrable
//! [`TimeSpan`]: ivp_core::TimeSpan

pub mod euler;
