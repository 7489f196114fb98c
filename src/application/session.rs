use crate::application::forecast_service::InventoryForecaster;
use crate::config::Config;
use crate::domain::errors::PredictionError;
use crate::domain::inventory::forecast::Forecast;
use crate::domain::inventory::types::PredictionInput;
use crossbeam_channel::Receiver;
use std::collections::VecDeque;
use tracing::{error, info};

const MAX_LOG_LINES: usize = 500;

/// State behind the input form: current inputs, the loaded model and the last outcome.
pub struct ForecastSession {
    pub config: Config,
    pub input: PredictionInput,
    pub last_forecast: Option<Forecast>,
    pub last_error: Option<String>,
    pub activity_log: VecDeque<String>,
    forecaster: Option<InventoryForecaster>,
    model_error: Option<String>,
    log_rx: Option<Receiver<String>>,
}

impl ForecastSession {
    /// `model` is the outcome of loading the artifact at startup. A load error
    /// disables prediction for the rest of the session.
    pub fn new(
        config: Config,
        model: Result<InventoryForecaster, PredictionError>,
        log_rx: Option<Receiver<String>>,
    ) -> Self {
        let (forecaster, model_error) = match model {
            Ok(forecaster) => (Some(forecaster), None),
            Err(e) => {
                error!("Error loading model: {}", e);
                (None, Some(e.to_string()))
            }
        };

        let input = PredictionInput::default_for_year(config.reference_year());

        Self {
            config,
            input,
            last_forecast: None,
            last_error: None,
            activity_log: VecDeque::new(),
            forecaster,
            model_error,
            log_rx,
        }
    }

    pub fn can_predict(&self) -> bool {
        self.forecaster.is_some()
    }

    pub fn model_error(&self) -> Option<&str> {
        self.model_error.as_deref()
    }

    pub fn model_label(&self) -> Option<String> {
        self.forecaster
            .as_ref()
            .map(|f| format!("{} {}", f.predictor_name(), f.predictor_version()))
    }

    /// Runs the prediction for the current inputs. On failure the previous
    /// result is cleared and the error message kept for display.
    pub fn submit(&mut self) {
        let outcome = match &self.forecaster {
            Some(forecaster) => forecaster.forecast(&self.input),
            None => Err(PredictionError::ModelUnavailable),
        };

        match outcome {
            Ok(forecast) => {
                info!(
                    "Predicted {} units for {}",
                    forecast.metrics.predicted_units_whole(),
                    forecast.input.month
                );
                self.last_forecast = Some(forecast);
                self.last_error = None;
            }
            Err(e) => {
                self.last_forecast = None;
                self.last_error = Some(format!("Error making prediction: {}", e));
            }
        }
    }

    pub fn reset_inputs(&mut self) {
        self.input = PredictionInput::default_for_year(self.config.reference_year());
        self.last_forecast = None;
        self.last_error = None;
    }

    /// Pulls pending log lines from the tracing channel.
    pub fn drain_logs(&mut self) {
        if let Some(rx) = &self.log_rx {
            while let Ok(line) = rx.try_recv() {
                let line = line.trim_end().to_string();
                if !line.is_empty() {
                    self.activity_log.push_back(line);
                }
            }
        }

        while self.activity_log.len() > MAX_LOG_LINES {
            self.activity_log.pop_front();
        }
    }
}
