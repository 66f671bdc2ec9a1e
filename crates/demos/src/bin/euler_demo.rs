//! Integrates y' = t from y(0) = 1 over [0, 5] with a unit step and prints
//! the trajectory.
//!
//! ```sh
//! cargo run -p ivp-demos --bin euler_demo
//! ```

use ivp_demos::{elapsed_time, init_tracing};
use ivp_solvers::transient::euler;

fn main() -> Result<(), euler::Error> {
    init_tracing();

    let (times, states) = euler::integrate(elapsed_time, 1.0, [0.0, 5.0], None, Some(1.0))?;

    println!("{:>6}  {:>8}  {:>8}", "t", "euler", "exact");
    for (t, y) in times.iter().zip(&states) {
        println!("{t:>6.2}  {y:>8.3}  {:>8.3}", 1.0 + t * t / 2.0);
    }

    Ok(())
}
