use std::{convert::Infallible, marker::PhantomData};

use crate::{DerivativeOf, StepIntegrable};

/// Defines an ODE (ordinary differential equation) problem to be solved.
///
/// An ODE problem describes the right-hand side of `y'(t) = f(t, y)`: given
/// the current time and state, it returns the derivative of the state. This
/// trait enables generic ODE solvers to integrate any state type that
/// implements [`StepIntegrable`].
///
/// Implementations should be pure. Solvers call [`derivative`] exactly once
/// per step and never retry a failed call.
///
/// For closures, see [`from_fn`] and [`try_from_fn`].
///
/// [`derivative`]: OdeProblem::derivative
pub trait OdeProblem {
    type State: StepIntegrable<f64>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the derivative of the state at `time`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        time: f64,
        state: &Self::State,
    ) -> Result<DerivativeOf<Self::State, f64>, Self::Error>;
}

/// An [`OdeProblem`] backed by an infallible closure.
///
/// Created by [`from_fn`].
pub struct FnProblem<S, F> {
    f: F,
    _state: PhantomData<fn() -> S>,
}

/// Wraps a closure `f(t, y)` as an [`OdeProblem`] that never fails.
///
/// # Example
///
/// ```
/// use ivp_core::{OdeProblem, from_fn};
///
/// let decay = from_fn(|_t, y: &f64| -0.5 * y);
/// assert_eq!(decay.derivative(0.0, &2.0), Ok(-1.0));
/// ```
pub fn from_fn<S, F>(f: F) -> FnProblem<S, F>
where
    S: StepIntegrable<f64>,
    F: Fn(f64, &S) -> DerivativeOf<S, f64>,
{
    FnProblem {
        f,
        _state: PhantomData,
    }
}

impl<S, F> OdeProblem for FnProblem<S, F>
where
    S: StepIntegrable<f64>,
    F: Fn(f64, &S) -> DerivativeOf<S, f64>,
{
    type State = S;
    type Error = Infallible;

    fn derivative(&self, time: f64, state: &S) -> Result<DerivativeOf<S, f64>, Infallible> {
        Ok((self.f)(time, state))
    }
}

/// An [`OdeProblem`] backed by a fallible closure.
///
/// Created by [`try_from_fn`].
pub struct TryFnProblem<S, E, F> {
    f: F,
    _marker: PhantomData<fn() -> (S, E)>,
}

/// Wraps a fallible closure `f(t, y)` as an [`OdeProblem`].
///
/// Errors returned by the closure are surfaced by the solver unchanged.
pub fn try_from_fn<S, E, F>(f: F) -> TryFnProblem<S, E, F>
where
    S: StepIntegrable<f64>,
    E: std::error::Error + Send + Sync + 'static,
    F: Fn(f64, &S) -> Result<DerivativeOf<S, f64>, E>,
{
    TryFnProblem {
        f,
        _marker: PhantomData,
    }
}

impl<S, E, F> OdeProblem for TryFnProblem<S, E, F>
where
    S: StepIntegrable<f64>,
    E: std::error::Error + Send + Sync + 'static,
    F: Fn(f64, &S) -> Result<DerivativeOf<S, f64>, E>,
{
    type State = S;
    type Error = E;

    fn derivative(&self, time: f64, state: &S) -> Result<DerivativeOf<S, f64>, E> {
        (self.f)(time, state)
    }
}
