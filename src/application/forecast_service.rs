use crate::application::ml::DemandPredictor;
use crate::domain::errors::PredictionError;
use crate::domain::inventory::forecast::{Forecast, ForecastMetrics};
use crate::domain::inventory::insights::generate_insights;
use crate::domain::inventory::types::PredictionInput;
use crate::domain::ml::feature_registry::derive_features;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Runs one prediction request end to end: features, model, metrics, insights.
#[derive(Clone)]
pub struct InventoryForecaster {
    predictor: Arc<dyn DemandPredictor>,
}

impl InventoryForecaster {
    pub fn new(predictor: Arc<dyn DemandPredictor>) -> Self {
        Self { predictor }
    }

    pub fn predictor_name(&self) -> &str {
        self.predictor.name()
    }

    pub fn predictor_version(&self) -> &str {
        self.predictor.version()
    }

    /// Inference failures abandon the request; no partial forecast is returned.
    pub fn forecast(&self, input: &PredictionInput) -> Result<Forecast, PredictionError> {
        input.validate()?;

        let features = derive_features(input);
        debug!(features = ?features.to_array(), "Derived feature vector");

        let predicted_units = self.predictor.predict(&features).map_err(|e| {
            error!("Error making prediction for {}: {}", input.month, e);
            e
        })?;

        let metrics = ForecastMetrics::compute(input, predicted_units).map_err(|e| {
            error!("Rejected model output {} for {}: {}", predicted_units, input.month, e);
            e
        })?;
        let insights = generate_insights(input, &metrics);

        info!(
            month = %input.month,
            year = input.reference_year,
            predicted_units = metrics.predicted_units_whole(),
            insights = insights.len(),
            "Forecast ready"
        );

        Ok(Forecast {
            input: input.clone(),
            features,
            metrics,
            insights,
        })
    }
}
