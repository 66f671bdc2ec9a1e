use std::marker::PhantomData;

use ivp_core::Observer;

use crate::traits::{CanStopEarly, HasState};

/// Stops a run as soon as a predicate on the state holds.
///
/// The point that satisfies the predicate is kept in the trajectory.
///
/// # Example
///
/// ```
/// use ivp_core::from_fn;
/// use ivp_observers::StopWhen;
/// use ivp_solvers::transient::euler::{self, Config, Status};
///
/// // Particle falling from 10 m: state is [height, velocity].
/// let gravity = from_fn(|_t, y: &[f64; 2]| [y[1], -9.81]);
/// let landed = StopWhen::new(|y: &[f64; 2]| y[0] <= 0.0);
///
/// let solution = euler::solve(&gravity, [10.0, 0.0], [0.0, 10.0], &Config::with_step_size(0.01), landed)?;
///
/// assert_eq!(solution.status(), Status::StoppedByObserver);
/// assert!(solution.last().is_some_and(|(_, y)| y[0] <= 0.0));
/// # Ok::<(), euler::Error>(())
/// ```
pub struct StopWhen<S, F> {
    predicate: F,
    _state: PhantomData<fn(&S)>,
}

impl<S, F> StopWhen<S, F>
where
    F: FnMut(&S) -> bool,
{
    /// Creates an observer that stops once `predicate` returns `true`.
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            _state: PhantomData,
        }
    }
}

impl<S, E, A, F> Observer<E, A> for StopWhen<S, F>
where
    E: HasState<S>,
    A: CanStopEarly,
    F: FnMut(&S) -> bool,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (self.predicate)(event.state()).then(A::stop_early)
    }
}
