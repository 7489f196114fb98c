//! CSV batch forecasting.
//!
//! Input columns: `month,current_price,last_month_price,units_sold_last_month,is_festive,is_harvest[,year]`.
//! Flags accept `yes`/`no`, `true`/`false` or `1`/`0`. Each row is forecast independently; a
//! row that fails validation or inference is written with its `error` column set and the batch
//! carries on.

use crate::application::forecast_service::InventoryForecaster;
use crate::domain::inventory::types::{Month, PredictionInput};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::io::{Read, Write};
use tracing::{info, warn};

#[derive(Debug, Clone, Deserialize)]
pub struct BatchRecord {
    pub month: String,
    pub current_price: u32,
    pub last_month_price: u32,
    pub units_sold_last_month: u32,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_festive: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_harvest: bool,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchOutcome {
    pub row: usize,
    pub month: String,
    pub year: Option<i32>,
    pub predicted_units: Option<i64>,
    pub units_delta: Option<i64>,
    pub change_percent: Option<f64>,
    pub revenue_estimate: Option<Decimal>,
    pub insights: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Ok(true),
        "no" | "n" | "false" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid flag {:?}, expected yes/no",
            other
        ))),
    }
}

impl BatchRecord {
    pub fn to_input(&self, default_year: i32) -> Result<PredictionInput> {
        let month: Month = self.month.parse()?;
        let input = PredictionInput::new(
            month,
            self.current_price,
            self.last_month_price,
            self.units_sold_last_month,
            self.is_festive,
            self.is_harvest,
            self.year.unwrap_or(default_year),
        )?;
        Ok(input)
    }
}

/// Forecasts every row of `reader` and writes one CSV outcome row per input to `writer`.
pub fn run_batch<R: Read, W: Write>(
    forecaster: &InventoryForecaster,
    reader: R,
    writer: W,
    default_year: i32,
    currency: &str,
) -> Result<BatchSummary> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    let mut summary = BatchSummary::default();

    for (idx, record) in rdr.deserialize::<BatchRecord>().enumerate() {
        let row = idx + 1;
        let outcome = match record {
            Ok(record) => forecast_record(forecaster, row, &record, default_year, currency),
            Err(e) => BatchOutcome {
                row,
                error: Some(e.to_string()),
                ..Default::default()
            },
        };

        match &outcome.error {
            Some(reason) => {
                warn!("Batch row {} failed: {}", row, reason);
                summary.failed += 1;
            }
            None => summary.succeeded += 1,
        }

        wtr.serialize(&outcome)
            .with_context(|| format!("Failed to write batch row {}", row))?;
    }

    wtr.flush().context("Failed to flush batch output")?;
    info!(
        "Batch complete: {} succeeded, {} failed",
        summary.succeeded, summary.failed
    );
    Ok(summary)
}

fn forecast_record(
    forecaster: &InventoryForecaster,
    row: usize,
    record: &BatchRecord,
    default_year: i32,
    currency: &str,
) -> BatchOutcome {
    let mut outcome = BatchOutcome {
        row,
        month: record.month.clone(),
        year: Some(record.year.unwrap_or(default_year)),
        ..Default::default()
    };

    let forecast = record
        .to_input(default_year)
        .and_then(|input| forecaster.forecast(&input).map_err(Into::into));

    match forecast {
        Ok(forecast) => {
            outcome.month = forecast.input.month.to_string();
            outcome.predicted_units = Some(forecast.metrics.predicted_units_whole());
            outcome.units_delta = Some(forecast.metrics.units_delta_whole());
            outcome.change_percent = forecast
                .metrics
                .change_percent
                .map(|pct| (pct * 100.0).round() / 100.0);
            outcome.revenue_estimate = Some(forecast.metrics.revenue_estimate);
            outcome.insights = forecast.insight_messages(currency).join(" | ");
        }
        Err(e) => outcome.error = Some(e.to_string()),
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::DemandPredictor;
    use crate::domain::errors::PredictionError;
    use crate::domain::ml::feature_registry::FeatureVector;
    use std::sync::Arc;

    /// Predicts last month's sales plus 200 units.
    struct GrowthPredictor;

    impl DemandPredictor for GrowthPredictor {
        fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
            Ok(features.units_sold_lag1 + 200.0)
        }

        fn name(&self) -> &str {
            "growth"
        }

        fn version(&self) -> &str {
            "test"
        }
    }

    fn forecaster() -> InventoryForecaster {
        InventoryForecaster::new(Arc::new(GrowthPredictor))
    }

    #[test]
    fn test_batch_writes_one_row_per_input() {
        let input = "month,current_price,last_month_price,units_sold_last_month,is_festive,is_harvest,year\n\
                     February,1500,1450,1008,No,No,2025\n\
                     dec,1400,1450,500,yes,no,\n";
        let mut out = Vec::new();

        let summary = run_batch(&forecaster(), input.as_bytes(), &mut out, 2026, "₦").unwrap();

        assert_eq!(summary, BatchSummary { succeeded: 2, failed: 0 });
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("row,month,year,predicted_units"));
        assert!(lines[1].starts_with("1,February,2025,1208,200,"));
        assert!(lines[2].starts_with("2,December,2026,700,200,40"));
        assert!(lines[2].contains("Festive season active"));
    }

    #[test]
    fn test_invalid_rows_are_reported_not_fatal() {
        let input = "month,current_price,last_month_price,units_sold_last_month,is_festive,is_harvest\n\
                     Smarch,1500,1450,1008,no,no\n\
                     March,50,1450,1008,no,no\n\
                     March,1500,1450,1008,maybe,no\n\
                     March,1500,1500,1000,no,no\n";
        let mut out = Vec::new();

        let summary = run_batch(&forecaster(), input.as_bytes(), &mut out, 2026, "₦").unwrap();

        assert_eq!(summary, BatchSummary { succeeded: 1, failed: 3 });
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid month"));
        assert!(text.contains("current_price out of range"));
        assert!(text.contains("invalid flag"));
    }
}
