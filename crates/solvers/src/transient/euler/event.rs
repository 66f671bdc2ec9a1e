/// Event emitted by the Euler solver for each point of the trajectory.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, S> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// The time reached at this step.
    pub time: f64,

    /// The state reached at this step.
    pub state: &'a S,
}
