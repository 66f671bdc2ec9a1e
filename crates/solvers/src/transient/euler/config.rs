use ivp_core::TimeSpan;
use tracing::warn;

use super::Error;

/// Relative tolerance used to snap `span / step_size` to an integer.
///
/// Quotients within a few ulps of a whole number are treated as exact so that
/// a step size that evenly divides the span does not gain a spurious step.
const SNAP_TOL: f64 = 4.0 * f64::EPSILON;

/// Step specification for the Euler solver.
///
/// At least one of `n_steps` and `step_size` must be set. When only one is
/// given, the other is derived from the time span. When both are given,
/// `step_size` wins and the step count is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    pub n_steps: Option<usize>,
    pub step_size: Option<f64>,
}

/// A fully resolved step specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steps {
    pub n_steps: usize,
    pub step_size: f64,
}

impl Config {
    /// Creates a config that divides the span into `n_steps` equal steps.
    #[must_use]
    pub fn with_steps(n_steps: usize) -> Self {
        Self {
            n_steps: Some(n_steps),
            step_size: None,
        }
    }

    /// Creates a config that advances by `step_size` until the span is covered.
    #[must_use]
    pub fn with_step_size(step_size: f64) -> Self {
        Self {
            n_steps: None,
            step_size: Some(step_size),
        }
    }

    /// Validates the values that are present.
    ///
    /// # Errors
    ///
    /// Returns an error if `n_steps` is zero or `step_size` is zero or
    /// non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.n_steps == Some(0) {
            return Err("n_steps must be positive");
        }
        if let Some(step_size) = self.step_size
            && (!step_size.is_finite() || step_size == 0.0)
        {
            return Err("step_size must be finite and nonzero");
        }
        Ok(())
    }

    /// Resolves the step count and step size for a time span.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingStepSpec`] if neither value is set.
    /// - [`Error::InvalidConfig`] if a value is invalid, the span is not
    ///   finite, or the step size points away from the end of the span.
    pub fn resolve(&self, span: TimeSpan) -> Result<Steps, Error> {
        self.validate()
            .map_err(|reason| Error::InvalidConfig { reason })?;

        if !span.is_finite() {
            return Err(Error::InvalidConfig {
                reason: "time span must be finite",
            });
        }

        let length = span.length();

        match (self.n_steps, self.step_size) {
            (None, None) => Err(Error::MissingStepSpec),

            #[allow(clippy::cast_precision_loss)]
            (Some(n_steps), None) => Ok(Steps {
                n_steps,
                step_size: length / n_steps as f64,
            }),

            (requested, Some(step_size)) => {
                let n_steps = count_steps(length, step_size)?;
                if let Some(requested) = requested
                    && requested != n_steps
                {
                    warn!(
                        requested,
                        derived = n_steps,
                        step_size,
                        "both n_steps and step_size given, using step_size"
                    );
                }
                Ok(Steps { n_steps, step_size })
            }
        }
    }
}

/// Returns `ceil(length / step_size)`, snapping near-integer quotients.
fn count_steps(length: f64, step_size: f64) -> Result<usize, Error> {
    if length == 0.0 {
        return Ok(0);
    }

    if length.is_sign_negative() != step_size.is_sign_negative() {
        return Err(Error::InvalidConfig {
            reason: "step_size points away from the end of the time span",
        });
    }

    let ratio = length / step_size;
    if !ratio.is_finite() {
        return Err(Error::InvalidConfig {
            reason: "step_size is too small for the time span",
        });
    }

    // Never snap down to zero: a nonzero span always needs at least one step.
    let nearest = ratio.round();
    let count = if nearest >= 1.0 && (ratio - nearest).abs() <= SNAP_TOL * nearest {
        nearest
    } else {
        ratio.ceil()
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(count as usize)
}


#[cfg(test)]
mod proptests {
    use super::*;

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn evenly_dividing_step_size_gives_exact_count(
            start in -100.0_f64..100.0,
            length in 0.01_f64..100.0,
            n in 1_usize..1000,
        ) {
            let span = TimeSpan::new(start, start + length);
            let step_size = span.length() / n as f64;

            let steps = Config::with_step_size(step_size).resolve(span).unwrap();
            prop_assert_eq!(steps.n_steps, n);
        }

        #[test]
        fn derived_step_size_is_span_over_count(
            start in -100.0_f64..100.0,
            end in -100.0_f64..100.0,
            n in 1_usize..1000,
        ) {
            let span = TimeSpan::new(start, end);

            let steps = Config::with_steps(n).resolve(span).unwrap();
            prop_assert_eq!(steps.n_steps, n);
            prop_assert_eq!(steps.step_size, (end - start) / n as f64);
        }
    }
}
