use crate::domain::errors::PredictionError;
use crate::domain::inventory::format::{format_currency, format_thousands, yes_no};
use crate::domain::inventory::insights::Insight;
use crate::domain::inventory::types::PredictionInput;
use crate::domain::ml::feature_registry::{FeatureVector, months_since_start};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Serialize;

/// Metrics derived from the model output and the raw inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastMetrics {
    pub predicted_units: f64,
    /// predicted_units - units sold last month
    pub units_delta: f64,
    /// None when last month's sales were zero.
    pub change_percent: Option<f64>,
    pub revenue_estimate: Decimal,
    pub price_change: i64,
    pub price_change_percent: f64,
}

impl ForecastMetrics {
    /// Fails when the prediction is not finite or the revenue does not fit a `Decimal`.
    /// Expects a validated input (`last_month_price` within its bounds).
    pub fn compute(input: &PredictionInput, predicted_units: f64) -> Result<Self, PredictionError> {
        debug_assert!(
            input.validate().is_ok(),
            "metrics computed for unvalidated input"
        );

        let units_sold = input.units_sold_last_month;
        let price_change = input.price_change();

        Ok(Self {
            predicted_units,
            units_delta: predicted_units - f64::from(units_sold),
            change_percent: change_percent(predicted_units, units_sold),
            revenue_estimate: revenue_estimate(predicted_units, input.current_price)?,
            price_change,
            price_change_percent: price_change as f64 / f64::from(input.last_month_price) * 100.0,
        })
    }

    /// Predicted units truncated toward zero, as displayed.
    pub fn predicted_units_whole(&self) -> i64 {
        self.predicted_units.trunc() as i64
    }

    pub fn units_delta_whole(&self) -> i64 {
        self.units_delta.trunc() as i64
    }
}

/// predicted_units x price, rounded to 2 dp.
pub fn revenue_estimate(predicted_units: f64, price: u32) -> Result<Decimal, PredictionError> {
    let units = Decimal::from_f64(predicted_units).ok_or_else(|| PredictionError::Inference {
        reason: format!("predicted units {} out of range", predicted_units),
    })?;

    units
        .checked_mul(Decimal::from(price))
        .map(|revenue| revenue.round_dp(2))
        .ok_or_else(|| PredictionError::Inference {
            reason: format!(
                "revenue overflow for {} units at price {}",
                predicted_units, price
            ),
        })
}

/// Relative change of the prediction against last month's sales, in percent.
/// Undefined for zero prior sales; callers skip magnitude advisories in that case.
pub fn change_percent(predicted_units: f64, units_sold_last_month: u32) -> Option<f64> {
    if units_sold_last_month == 0 {
        return None;
    }
    let base = f64::from(units_sold_last_month);
    Some((predicted_units - base) / base * 100.0)
}

/// One line of the input confirmation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub parameter: &'static str,
    pub value: String,
}

/// Everything produced for one prediction request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub input: PredictionInput,
    pub features: FeatureVector,
    pub metrics: ForecastMetrics,
    pub insights: Vec<Insight>,
}

impl Forecast {
    pub fn insight_messages(&self, currency: &str) -> Vec<String> {
        self.insights.iter().map(|i| i.message(currency)).collect()
    }

    /// Echo of the inputs for user confirmation.
    pub fn summary_rows(&self, currency: &str) -> Vec<SummaryRow> {
        let input = &self.input;
        let row = |parameter: &'static str, value: String| SummaryRow { parameter, value };

        vec![
            row("Prediction Month", input.month.to_string()),
            row(
                "Months Since Start",
                months_since_start(input.reference_year, input.month).to_string(),
            ),
            row(
                "Current Price",
                format_currency(currency, i64::from(input.current_price)),
            ),
            row(
                "Last Month Price",
                format_currency(currency, i64::from(input.last_month_price)),
            ),
            row(
                "Price Change",
                format_currency(currency, input.price_change()),
            ),
            row(
                "Last Month Sales",
                format!(
                    "{} units",
                    format_thousands(i64::from(input.units_sold_last_month))
                ),
            ),
            row("Festive Month", yes_no(input.is_festive).to_string()),
            row("Harvest Season", yes_no(input.is_harvest).to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inventory::types::Month;
    use rust_decimal_macros::dec;

    fn input(units_sold: u32) -> PredictionInput {
        PredictionInput::new(Month::February, 1500, 1450, units_sold, false, false, 2025).unwrap()
    }

    #[test]
    fn test_stock_up_scenario_metrics() {
        let metrics = ForecastMetrics::compute(&input(1008), 1200.0).unwrap();

        assert_eq!(metrics.units_delta, 192.0);
        assert_eq!(metrics.units_delta_whole(), 192);
        assert_eq!(metrics.revenue_estimate, dec!(1800000));
        let pct = metrics.change_percent.unwrap();
        assert!((pct - 19.047_619).abs() < 1e-4, "got {pct}");
    }

    #[test]
    fn test_zero_prior_sales_has_no_change_percent() {
        let metrics = ForecastMetrics::compute(&input(0), 350.0).unwrap();
        assert_eq!(metrics.change_percent, None);
        assert_eq!(metrics.units_delta, 350.0);
    }

    #[test]
    fn test_display_truncates_toward_zero() {
        let metrics = ForecastMetrics::compute(&input(1008), 999.9).unwrap();
        assert_eq!(metrics.predicted_units_whole(), 999);
        // 999.9 - 1008 = -8.1
        assert_eq!(metrics.units_delta_whole(), -8);
        assert_eq!(metrics.revenue_estimate, dec!(1499850));
    }

    #[test]
    fn test_price_change_percent() {
        let metrics = ForecastMetrics::compute(&input(1008), 1000.0).unwrap();
        assert_eq!(metrics.price_change, 50);
        assert!((metrics.price_change_percent - 3.448_275).abs() < 1e-4);
    }

    #[test]
    fn test_unrepresentable_prediction_is_an_inference_error() {
        let mut priced = input(1008);
        priced.current_price = 10_000;

        // Fits a Decimal, but the revenue multiplication overflows
        let err = ForecastMetrics::compute(&priced, 1e26).unwrap_err();
        assert!(matches!(err, PredictionError::Inference { .. }));
        assert!(err.to_string().contains("revenue overflow"));

        // Beyond Decimal::MAX: must not collapse to zero revenue
        let err = ForecastMetrics::compute(&priced, 1e30).unwrap_err();
        assert!(err.to_string().contains("out of range"));

        assert!(ForecastMetrics::compute(&priced, f64::NAN).is_err());
        assert!(ForecastMetrics::compute(&priced, f64::INFINITY).is_err());
    }
}
