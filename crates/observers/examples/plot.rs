//! Interactive visualizations of Euler runs.
//!
//! Each mode integrates a simple initial value problem and opens an
//! interactive plot window comparing the Euler trajectory to the exact
//! solution.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- decay
//! cargo run --example plot --features plot -- decay 0.5
//! cargo run --example plot --features plot -- oscillator
//! cargo run --example plot --features plot -- oscillator 0.2
//! ```
//!
//! # Modes
//!
//! - **decay [dt]** — Exponential decay y' = -y from y(0) = 1 over 5 seconds.
//!   Larger steps visibly undershoot the exact curve e^(-t).
//!
//! - **oscillator [dt]** — Undamped oscillator x'' = -x from x(0) = 0.6,
//!   v(0) = 0.5 over 20 seconds. Forward Euler gains energy every step, so
//!   the numerical amplitude spirals outward away from the exact solution.

use std::error::Error;

use ivp_core::from_fn;
use ivp_observers::PlotObserver;
use ivp_solvers::transient::euler::{self, Config};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "decay".into());
    let dt = std::env::args()
        .nth(2)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid step size, expected a number such as 0.1");
            std::process::exit(1);
        });

    match mode.as_str() {
        "decay" => decay(dt.unwrap_or(0.25)),
        "oscillator" => oscillator(dt.unwrap_or(0.05)),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [decay|oscillator] [dt]");
            std::process::exit(1);
        }
    }
}

// --- Decay -------------------------------------------------------------------

/// Integrate y' = -y and overlay e^(-t).
fn decay(dt: f64) -> Result<(), Box<dyn Error>> {
    let problem = from_fn(|_t, y: &f64| -y);
    let mut obs = PlotObserver::new(["Euler", "Exact"])
        .title(format!("Decay: y' = -y, dt = {dt}"))
        .x_label("t");

    euler::solve(
        &problem,
        1.0,
        [0.0, 5.0],
        &Config::with_step_size(dt),
        |event: &euler::Event<'_, f64>| {
            obs.record(event.time, [Some(*event.state), Some((-event.time).exp())]);
            None
        },
    )?;

    obs.show()?;

    Ok(())
}

// --- Oscillator --------------------------------------------------------------

/// Integrate x'' = -x as a first-order system and overlay the exact position.
fn oscillator(dt: f64) -> Result<(), Box<dyn Error>> {
    let (x0, v0) = (0.6, 0.5);
    let exact = move |t: f64| x0 * t.cos() + v0 * t.sin();

    let problem = from_fn(|_t, y: &[f64; 2]| [y[1], -y[0]]);
    let mut obs = PlotObserver::new(["Euler", "Exact"])
        .title(format!("Oscillator: x'' = -x, dt = {dt}"))
        .x_label("t")
        .y_label("x");

    euler::solve(
        &problem,
        [x0, v0],
        [0.0, 20.0],
        &Config::with_step_size(dt),
        |event: &euler::Event<'_, [f64; 2]>| {
            obs.record(event.time, [Some(event.state[0]), Some(exact(event.time))]);
            None
        },
    )?;

    obs.show()?;

    Ok(())
}
