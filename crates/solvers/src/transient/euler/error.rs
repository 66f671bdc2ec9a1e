use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during Euler integration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("n_steps or step_size must be specified")]
    MissingStepSpec,

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("derivative failed at step {step} (t = {time})")]
    Derivative {
        step: usize,
        time: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn derivative<E: StdError + Send + Sync + 'static>(
        step: usize,
        time: f64,
        err: E,
    ) -> Self {
        Self::Derivative {
            step,
            time,
            source: Box::new(err),
        }
    }
}
