use thiserror::Error;

use super::snapshot::SinkError;
use crate::core::potentials::PotentialError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid potential configuration: {source}")]
    Potential {
        #[from]
        source: PotentialError,
    },

    #[error("Numerical instability detected at step {step}: {reason}")]
    NumericalInstability { step: u64, reason: String },

    #[error("Snapshot sink failed at step {step}: {source}")]
    Sink {
        step: u64,
        #[source]
        source: SinkError,
    },
}
