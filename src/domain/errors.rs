use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when raw inputs fall outside the bounds of the input form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{field} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Invalid month: {0:?}. Use 1-12 or a month name")]
    InvalidMonth(String),
}

/// Errors related to loading the demand model and running inference
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Model file not found at {path:?}")]
    ModelNotFound { path: PathBuf },

    #[error("Failed to read model file {path:?}: {source}")]
    ModelIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize model from {path:?}: {reason}")]
    ModelDeserialize { path: PathBuf, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("No model loaded, prediction is disabled")]
    ModelUnavailable,

    #[error("Prediction failed: {reason}")]
    Inference { reason: String },

    #[error("Model returned no prediction")]
    EmptyPrediction,
}

impl PredictionError {
    /// Load failures disable prediction for the whole session.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            PredictionError::ModelNotFound { .. }
                | PredictionError::ModelIo { .. }
                | PredictionError::ModelDeserialize { .. }
        )
    }
}
