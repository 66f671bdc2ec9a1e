//! Integrates an undamped oscillator and compares it with the exact solution.
//!
//! ```sh
//! cargo run -p ivp-demos --bin harmonic
//! ```

use ivp_demos::{Harmonic, init_tracing};
use ivp_solvers::transient::euler::{self, Config};

fn main() -> Result<(), euler::Error> {
    init_tracing();

    let osc = Harmonic {
        mass: 1.0,
        omega: 1.0,
    };
    let initial = [0.6, 0.5];

    let solution =
        euler::solve_unobserved(&osc, initial, [0.0, 100.0], &Config::with_step_size(0.05))?;

    println!(
        "{:>7}  {:>9}  {:>9}  {:>9}",
        "t", "x euler", "x exact", "energy"
    );
    for (t, state) in solution.iter().step_by(100) {
        let [x_exact, _] = osc.exact(initial, t);
        println!(
            "{t:>7.2}  {:>9.4}  {x_exact:>9.4}  {:>9.4}",
            state[0],
            osc.energy(state)
        );
    }

    Ok(())
}
