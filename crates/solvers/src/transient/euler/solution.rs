/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an Euler integration.
///
/// `times` and `states` are aligned: `states()[i]` is the state at
/// `times()[i]`. The first entry is always the initial condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S> {
    status: Status,
    times: Vec<f64>,
    states: Vec<S>,
}

impl<S> Solution<S> {
    pub(crate) fn new(status: Status, times: Vec<f64>, states: Vec<S>) -> Self {
        debug_assert_eq!(times.len(), states.len());
        Self {
            status,
            times,
            states,
        }
    }

    /// How the solver terminated.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Time at each point of the trajectory, starting with `t_start`.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// State at each point of the trajectory, starting with the initial state.
    #[must_use]
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Number of integration steps completed.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.times.len().saturating_sub(1)
    }

    /// Number of points in the trajectory (`steps() + 1`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the trajectory holds no points.
    ///
    /// Solutions returned by the solver always contain the initial point, so
    /// this is `false` for any of them.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the final `(time, state)` pair.
    #[must_use]
    pub fn last(&self) -> Option<(f64, &S)> {
        self.times.last().copied().zip(self.states.last())
    }

    /// Iterates over `(time, state)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &S)> {
        self.times.iter().copied().zip(self.states.iter())
    }

    /// Splits the solution into its time and state sequences.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<S>) {
        (self.times, self.states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_count_follows_the_trajectory() {
        let solution = Solution::new(Status::Complete, vec![0.0, 0.5, 1.0], vec![1.0, 2.0, 3.0]);

        assert_eq!(solution.steps(), 2);
        assert_eq!(solution.len(), 3);
        assert!(!solution.is_empty());
        assert_eq!(solution.last(), Some((1.0, &3.0)));
    }

    #[test]
    fn initial_point_alone_has_zero_steps() {
        let solution = Solution::new(Status::StoppedByObserver, vec![2.0], vec![[1.0, 1.0]]);

        assert_eq!(solution.steps(), 0);
        assert_eq!(solution.status(), Status::StoppedByObserver);
        assert_eq!(solution.states(), &[[1.0, 1.0]]);
    }
}
