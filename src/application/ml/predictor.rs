use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::FeatureVector;

/// Interface for the demand model
pub trait DemandPredictor: Send + Sync {
    /// Predicted units to sell for the month described by `features`.
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
