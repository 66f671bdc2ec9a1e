//! Example problems driven by the demo binaries.
//!
//! - [`elapsed_time`] — `y' = t`, the smallest possible driver
//! - [`FallingParticle`] — a particle in free fall, state `[height, velocity]`
//! - [`Harmonic`] — an undamped oscillator, state `[position, momentum]`

use std::convert::Infallible;

use ivp_core::OdeProblem;
use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Run a demo with `RUST_LOG=ivp_solvers=debug` to see the resolved step
/// specification, or `trace` for every step.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

/// The derivative `f(t, y) = t`.
///
/// The exact solution from `y(0) = 1` is `1 + t²/2`; forward Euler lags it
/// because each step uses the slope at the start of the step.
#[must_use]
pub fn elapsed_time(t: f64, _y: &f64) -> f64 {
    t
}

/// A particle falling under constant gravity.
///
/// State is `[height, velocity]` with up as positive.
#[derive(Debug, Clone, Copy)]
pub struct FallingParticle {
    pub gravity: f64,
}

impl Default for FallingParticle {
    fn default() -> Self {
        Self { gravity: 9.81 }
    }
}

impl OdeProblem for FallingParticle {
    type State = [f64; 2];
    type Error = Infallible;

    fn derivative(&self, _time: f64, state: &[f64; 2]) -> Result<[f64; 2], Infallible> {
        let [_, velocity] = *state;
        Ok([velocity, -self.gravity])
    }
}

/// An undamped harmonic oscillator.
///
/// State is `[position, momentum]`:
///
/// ```text
/// x' = p / m
/// p' = -m ω² x
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Harmonic {
    pub mass: f64,
    pub omega: f64,
}

impl Harmonic {
    /// Returns the exact `[position, momentum]` at `t` from `initial`.
    #[must_use]
    pub fn exact(&self, initial: [f64; 2], t: f64) -> [f64; 2] {
        let [x0, p0] = initial;
        let Self { mass: m, omega: w } = *self;
        let (sin, cos) = (w * t).sin_cos();

        [
            x0 * cos + p0 / (m * w) * sin,
            m * w * (p0 / (m * w) * cos - x0 * sin),
        ]
    }

    /// Returns the total energy of a state.
    #[must_use]
    pub fn energy(&self, state: &[f64; 2]) -> f64 {
        let [x, p] = *state;
        p * p / (2.0 * self.mass) + 0.5 * self.mass * self.omega.powi(2) * x * x
    }
}

impl OdeProblem for Harmonic {
    type State = [f64; 2];
    type Error = Infallible;

    fn derivative(&self, _time: f64, state: &[f64; 2]) -> Result<[f64; 2], Infallible> {
        let [x, p] = *state;
        Ok([p / self.mass, -self.mass * self.omega.powi(2) * x])
    }
}
