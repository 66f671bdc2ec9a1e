//! Solvers for initial value problems.
//!
//! # Modules
//!
//! - [`transient`] — time-stepping solvers for [`OdeProblem`]s
//!
//! [`OdeProblem`]: ivp_core::OdeProblem

pub mod transient;
