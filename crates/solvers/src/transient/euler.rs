//! Forward Euler solver for ODE problems.
//!
//! This module provides a minimal explicit Euler integrator for initial value
//! problems `y'(t) = f(t, y)`, `y(t0) = y0`. It steps the state forward with a
//! fixed step size:
//!
//! ```text
//! y_{n+1} = y_n + h * f(t_n, y_n)
//! t_{n+1} = t_n + h
//! ```
//!
//! The step is given either as a count or as a size (see [`Config`]).
//!
//! # Example
//!
//! ```
//! use ivp_solvers::transient::euler;
//!
//! let (times, states) = euler::integrate(|t, _y: &f64| t, 1.0, [0.0, 5.0], None, Some(1.0))?;
//!
//! assert_eq!(times, [0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
//! assert_eq!(states, [1.0, 1.0, 2.0, 4.0, 7.0, 11.0]);
//! # Ok::<(), euler::Error>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, Steps};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use ivp_core::{DerivativeOf, Observer, OdeProblem, StepIntegrable, TimeSpan, from_fn};
use tracing::{debug, trace};

/// Integrates an ODE problem using forward Euler.
///
/// # Algorithm
///
/// 1. Resolve the step count and step size from `config` and `span`.
/// 2. Record the initial point and emit it as step 0.
/// 3. For each step:
///    - Evaluate the derivative at the current time and state.
///    - Step the state forward: `state + step_size * derivative`.
///    - Advance the time by `step_size`.
///    - Record the new point and emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 4. Return the solution with the full trajectory.
///
/// The derivative is evaluated exactly once per step, in step order.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial point and after each
/// integration step, and may return [`Action::StopEarly`] to end the run with
/// the trajectory computed so far.
///
/// # Errors
///
/// Returns an error if the config cannot be resolved for `span`, if the
/// trajectory cannot be allocated, or if the problem fails to compute a
/// derivative. A derivative failure aborts the run and discards the partial
/// trajectory.
pub fn solve<P, Obs>(
    problem: &P,
    initial: P::State,
    span: impl Into<TimeSpan>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<P::State>, Error>
where
    P: OdeProblem,
    Obs: for<'a> Observer<Event<'a, P::State>, Action>,
{
    let span = span.into();
    let Steps { n_steps, step_size } = config.resolve(span)?;

    debug!(
        n_steps,
        step_size,
        start = span.start,
        end = span.end,
        "starting euler integration"
    );

    let mut times = Vec::new();
    let mut states = Vec::new();
    reserve(&mut times, n_steps)?;
    reserve(&mut states, n_steps)?;

    let mut time = span.start;
    times.push(time);
    states.push(initial);

    // Emit initial event.
    let event = Event {
        step: 0,
        time,
        state: &states[0],
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        debug!(step = 0, "stopped by observer");
        return Ok(Solution::new(Status::StoppedByObserver, times, states));
    }

    for step in 1..=n_steps {
        let state = &states[step - 1];

        let derivative = problem
            .derivative(time, state)
            .map_err(|err| Error::derivative(step, time, err))?;

        let next_state = state.step(derivative, step_size);
        let next_time = time + step_size;

        times.push(next_time);
        states.push(next_state);
        time = next_time;

        trace!(step, time, "euler step");

        let event = Event {
            step,
            time,
            state: &states[step],
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(step, "stopped by observer");
            return Ok(Solution::new(Status::StoppedByObserver, times, states));
        }
    }

    debug!(n_steps, end = time, "euler integration complete");

    Ok(Solution::new(Status::Complete, times, states))
}

/// Integrates an ODE problem using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<P>(
    problem: &P,
    initial: P::State,
    span: impl Into<TimeSpan>,
    config: &Config,
) -> Result<Solution<P::State>, Error>
where
    P: OdeProblem,
{
    solve(problem, initial, span, config, ())
}

/// Integrates `y' = derivative(t, y)` from `y0` across `span`.
///
/// Exactly one of `n_steps` and `step_size` is normally given. If both are
/// given, `step_size` wins and the step count is derived from it.
///
/// Returns the aligned time and state sequences, each of length
/// `n_steps + 1` and starting at `(span.start, y0)`.
///
/// # Errors
///
/// - [`Error::MissingStepSpec`] if both `n_steps` and `step_size` are `None`.
/// - [`Error::InvalidConfig`] if the step specification is unusable.
pub fn integrate<S, F>(
    derivative: F,
    y0: S,
    span: impl Into<TimeSpan>,
    n_steps: Option<usize>,
    step_size: Option<f64>,
) -> Result<(Vec<f64>, Vec<S>), Error>
where
    S: StepIntegrable<f64>,
    F: Fn(f64, &S) -> DerivativeOf<S, f64>,
{
    let config = Config { n_steps, step_size };
    let solution = solve_unobserved(&from_fn(derivative), y0, span, &config)?;
    Ok(solution.into_parts())
}

fn reserve<T>(buffer: &mut Vec<T>, n_steps: usize) -> Result<(), Error> {
    n_steps
        .checked_add(1)
        .and_then(|points| buffer.try_reserve_exact(points).ok())
        .ok_or(Error::InvalidConfig {
            reason: "too many steps to store the trajectory",
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt;

    use approx::assert_relative_eq;
    use ivp_core::try_from_fn;

    // --- Test fixtures ---

    #[derive(Debug)]
    struct Singular;

    impl fmt::Display for Singular {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("derivative is singular")
        }
    }

    impl std::error::Error for Singular {}

    /// Linear system `y' = A y` with a constant 2x2 matrix.
    struct Linear {
        a: [[f64; 2]; 2],
    }

    impl OdeProblem for Linear {
        type State = [f64; 2];
        type Error = std::convert::Infallible;

        fn derivative(&self, _time: f64, y: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
            let [[a, b], [c, d]] = self.a;
            Ok([a * y[0] + b * y[1], c * y[0] + d * y[1]])
        }
    }

    // --- Tests ---

    #[test]
    fn derivative_of_time_from_one() {
        let (times, states) =
            integrate(|t, _y: &f64| t, 1.0, [0.0, 5.0], None, Some(1.0)).unwrap();

        assert_eq!(times, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(states, vec![1.0, 1.0, 2.0, 4.0, 7.0, 11.0]);
    }

    #[test]
    fn step_count_sets_length_and_step_size() {
        let (times, states) = integrate(|_t, y: &f64| -y, 1.0, [0.0, 2.0], Some(8), None).unwrap();

        assert_eq!(times.len(), 9);
        assert_eq!(states.len(), 9);
        for (k, t) in times.iter().enumerate() {
            assert_relative_eq!(*t, 0.25 * k as f64);
        }
        // y_{k+1} = (1 - h) y_k
        for (k, y) in states.iter().enumerate() {
            assert_relative_eq!(*y, 0.75_f64.powi(k as i32), max_relative = 1e-12);
        }
    }

    #[test]
    fn missing_step_spec_is_an_error() {
        let result = integrate(|_t, y: &f64| *y, 1.0, [0.0, 1.0], None, None);
        assert!(matches!(result, Err(Error::MissingStepSpec)));
    }

    #[test]
    fn zero_derivative_keeps_initial_state() {
        let y0 = [3.0, -1.5, 0.25];
        let (_, states) = integrate(|_t, _y: &[f64; 3]| [0.0; 3], y0, [0.0, 10.0], Some(20), None)
            .unwrap();

        assert_eq!(states.len(), 21);
        assert!(states.iter().all(|y| *y == y0));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let f = |t: f64, y: &[f64; 2]| [y[1] * t.cos(), -y[0]];
        let first = integrate(f, [1.0, 0.5], [0.0, 3.0], None, Some(0.01)).unwrap();
        let second = integrate(f, [1.0, 0.5], [0.0, 3.0], None, Some(0.01)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn linear_system_follows_euler_recurrence() {
        let problem = Linear {
            a: [[0.0, 1.0], [-4.0, -0.5]],
        };
        let h = 0.05;
        let y0 = [1.0, 0.0];

        let solution =
            solve_unobserved(&problem, y0, [0.0, 2.0], &Config::with_step_size(h)).unwrap();
        assert_eq!(solution.steps(), 40);

        let mut expected = y0;
        for (_, y) in solution.iter() {
            assert_relative_eq!(y[0], expected[0], max_relative = 1e-12);
            assert_relative_eq!(y[1], expected[1], max_relative = 1e-12);

            let [[a, b], [c, d]] = problem.a;
            expected = [
                expected[0] + h * (a * expected[0] + b * expected[1]),
                expected[1] + h * (c * expected[0] + d * expected[1]),
            ];
        }
    }

    #[test]
    fn negative_step_integrates_backward() {
        let (times, states) =
            integrate(|_t, _y: &f64| 2.0, 0.0, [1.0, 0.0], None, Some(-0.5)).unwrap();

        assert_eq!(times, vec![1.0, 0.5, 0.0]);
        assert_eq!(states, vec![0.0, -1.0, -2.0]);
    }

    #[test]
    fn span_shorter_than_step_takes_one_full_step() {
        let (times, states) =
            integrate(|_t, _y: &f64| 1.0, 0.0, [0.0, 1e-17], None, Some(1.0)).unwrap();

        assert_eq!(times, vec![0.0, 1.0]);
        assert_eq!(states, vec![0.0, 1.0]);
    }

    #[test]
    fn step_size_wins_over_step_count() {
        let (times, _) = integrate(|_t, _y: &f64| 0.0, 0.0, [0.0, 1.0], Some(3), Some(0.5)).unwrap();
        assert_eq!(times, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn derivative_called_once_per_step_in_order() {
        let calls = std::cell::RefCell::new(Vec::new());
        let f = |t: f64, _y: &f64| {
            calls.borrow_mut().push(t);
            1.0
        };

        integrate(f, 0.0, [0.0, 1.0], Some(4), None).unwrap();

        assert_eq!(calls.into_inner(), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn derivative_error_aborts() {
        let problem = try_from_fn(|t, y: &f64| if t >= 0.3 { Err(Singular) } else { Ok(*y) });

        let result = solve_unobserved(&problem, 1.0, [0.0, 1.0], &Config::with_steps(10));

        match result {
            Err(Error::Derivative { step, time, source }) => {
                assert_eq!(step, 4);
                assert_relative_eq!(time, 0.3, max_relative = 1e-12);
                assert_eq!(source.to_string(), "derivative is singular");
            }
            other => panic!("expected derivative error, got {other:?}"),
        }
    }

    #[test]
    fn observer_can_stop_early() {
        let problem = from_fn(|_t, _y: &f64| 1.0);

        let observer = |event: &Event<'_, f64>| {
            if event.step >= 5 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(&problem, 0.0, [0.0, 10.0], &Config::with_steps(100), observer)
            .expect("should stop early");

        assert_eq!(solution.status(), Status::StoppedByObserver);
        assert_eq!(solution.steps(), 5);
        assert_eq!(solution.len(), 6); // initial + 5 steps
        let (t, y) = solution.last().unwrap();
        assert_relative_eq!(t, 0.5);
        assert_relative_eq!(*y, 0.5);
    }

    #[test]
    fn observer_sees_initial_state_and_every_step() {
        let problem = from_fn(|_t, y: &f64| *y);
        let mut seen = Vec::new();

        let solution = solve(
            &problem,
            1.0,
            [0.0, 1.0],
            &Config::with_step_size(0.25),
            |event: &Event<'_, f64>| {
                seen.push((event.step, event.time, *event.state));
                None
            },
        )
        .expect("should solve");

        assert_eq!(solution.status(), Status::Complete);
        assert_eq!(seen.len(), 5);
        assert_eq!(seen[0], (0, 0.0, 1.0));
        for (i, (step, t, y)) in seen.iter().enumerate() {
            assert_eq!(*step, i);
            assert_eq!(*t, solution.times()[i]);
            assert_eq!(*y, solution.states()[i]);
        }
    }

    #[test]
    fn zero_length_span_returns_initial() {
        let solution =
            solve_unobserved(&from_fn(|_t, y: &f64| *y), 5.0, [2.0, 2.0], &Config::with_step_size(0.1))
                .expect("should return initial");

        assert_eq!(solution.status(), Status::Complete);
        assert_eq!(solution.steps(), 0);
        assert_eq!(solution.into_parts(), (vec![2.0], vec![5.0]));
    }
}
