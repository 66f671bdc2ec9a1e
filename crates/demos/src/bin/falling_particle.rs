//! Drops a particle from rest and stops the run when it reaches the ground.
//!
//! ```sh
//! cargo run -p ivp-demos --bin falling_particle
//! ```

use ivp_demos::{FallingParticle, init_tracing};
use ivp_observers::StopWhen;
use ivp_solvers::transient::euler::{self, Config, Status};

fn main() -> Result<(), euler::Error> {
    init_tracing();

    let particle = FallingParticle::default();
    let height = 20.0;

    let solution = euler::solve(
        &particle,
        [height, 0.0],
        [0.0, 5.0],
        &Config::with_steps(50),
        StopWhen::new(|y: &[f64; 2]| y[0] <= 0.0),
    )?;

    for (t, [h, v]) in solution.iter() {
        println!("t = {t:5.2} s  height = {h:8.3} m  velocity = {v:8.3} m/s");
    }

    match (solution.status(), solution.last()) {
        (Status::StoppedByObserver, Some((t, _))) => {
            let exact = (2.0 * height / particle.gravity).sqrt();
            println!("landed after {t:.2} s (exact {exact:.2} s)");
        }
        _ => println!("still airborne at the end of the run"),
    }

    Ok(())
}
