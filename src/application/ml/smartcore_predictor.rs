use super::predictor::DemandPredictor;
use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::FeatureVector;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub type ForestModel = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Random forest regressor deserialized from a JSON artifact.
pub struct SmartCorePredictor {
    model: ForestModel,
    model_path: PathBuf,
}

impl SmartCorePredictor {
    /// Loads the artifact once. A failure here disables prediction for the session.
    pub fn load(model_path: impl AsRef<Path>) -> Result<Self, PredictionError> {
        let model_path = model_path.as_ref().to_path_buf();

        if !model_path.exists() {
            warn!(
                "Model file not found at {:?}. Prediction will be disabled.",
                model_path
            );
            return Err(PredictionError::ModelNotFound { path: model_path });
        }

        let mut buffer = Vec::new();
        File::open(&model_path)
            .and_then(|mut file| file.read_to_end(&mut buffer))
            .map_err(|source| {
                error!("Failed to read model file {:?}: {}", model_path, source);
                PredictionError::ModelIo {
                    path: model_path.clone(),
                    source,
                }
            })?;

        let model: ForestModel = serde_json::from_slice(&buffer).map_err(|e| {
            error!("Failed to deserialize model: {}", e);
            PredictionError::ModelDeserialize {
                path: model_path.clone(),
                reason: e.to_string(),
            }
        })?;

        info!("Successfully loaded demand model from {:?}", model_path);
        Ok(Self { model, model_path })
    }

    /// Wraps an already fitted forest.
    pub fn from_model(model: ForestModel) -> Self {
        Self {
            model,
            model_path: PathBuf::new(),
        }
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

impl DemandPredictor for SmartCorePredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let input_matrix = DenseMatrix::from_2d_vec(&vec![features.to_vec()]).map_err(|e| {
            PredictionError::Inference {
                reason: format!("Matrix creation failed: {}", e),
            }
        })?;

        let predictions = self
            .model
            .predict(&input_matrix)
            .map_err(|e| PredictionError::Inference {
                reason: e.to_string(),
            })?;

        let prediction = *predictions
            .first()
            .ok_or(PredictionError::EmptyPrediction)?;

        if !prediction.is_finite() {
            return Err(PredictionError::Inference {
                reason: format!("model returned non-finite value {}", prediction),
            });
        }

        Ok(prediction)
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}
