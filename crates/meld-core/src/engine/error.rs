use super::config::ConfigError;
use crate::core::energy::EnergyMatrixError;
use crate::core::temperature::ScalerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Energy matrix must be square, got {rows}x{cols}")]
    NonSquareEnergies { rows: usize, cols: usize },

    #[error("Exchange ladder needs at least two replicas, got {0}")]
    TooFewReplicas(usize),

    #[error("Configured for {expected} replicas but energy matrix is {rows}x{cols}")]
    ReplicaCountMismatch {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Energy matrix rejected: {source}")]
    EnergyMatrix {
        #[from]
        source: EnergyMatrixError,
    },

    #[error("Temperature schedule failed: {source}")]
    Scaler {
        #[from]
        source: ScalerError,
    },

    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
