pub mod ode;

pub use ode::{FnProblem, OdeProblem, TryFnProblem, from_fn, try_from_fn};
