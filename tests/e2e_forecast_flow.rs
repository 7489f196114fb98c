use inventory_forecaster::application::forecast_service::InventoryForecaster;
use inventory_forecaster::application::ml::DemandPredictor;
use inventory_forecaster::domain::errors::PredictionError;
use inventory_forecaster::domain::inventory::insights::Insight;
use inventory_forecaster::domain::inventory::types::{Month, PRICE_RANGE, PredictionInput};
use inventory_forecaster::domain::ml::feature_registry::{FEATURE_NAMES, FeatureVector, derive_features};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::f64::consts::PI;
use std::sync::Arc;

/// Stub model: always answers with the same number of units.
struct StubPredictor(f64);

impl DemandPredictor for StubPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        assert_eq!(features.to_vec().len(), FEATURE_NAMES.len());
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "stub"
    }

    fn version(&self) -> &str {
        "test"
    }
}

fn forecaster(units: f64) -> InventoryForecaster {
    InventoryForecaster::new(Arc::new(StubPredictor(units)))
}

fn february(current: u32, last: u32, units_sold: u32) -> PredictionInput {
    PredictionInput::new(Month::February, current, last, units_sold, false, false, 2025).unwrap()
}

#[test]
fn test_scenario_price_increase_february() {
    let forecast = forecaster(1000.0)
        .forecast(&february(1500, 1450, 1008))
        .unwrap();

    let v = forecast.features.to_array();
    assert_eq!(v[0], 98.0);
    assert_eq!(v[1], 1008.0);
    assert_eq!(v[2], 50.0);
    assert!((v[3] - (PI / 3.0).sin()).abs() < 1e-9);
    assert!((v[4] - (PI / 3.0).cos()).abs() < 1e-9);
    assert_eq!(&v[5..], &[0.0, 0.0]);

    assert_eq!(forecast.insights[0], Insight::PriceIncreased { amount: 50 });
    assert!(!forecast.insights.contains(&Insight::FestiveSeason));
    assert!(!forecast.insights.contains(&Insight::HarvestSeason));
}

#[test]
fn test_scenario_stable_price() {
    let forecast = forecaster(1000.0)
        .forecast(&february(1450, 1450, 1008))
        .unwrap();

    let price_insights: Vec<_> = forecast
        .insights
        .iter()
        .filter(|i| {
            matches!(
                i,
                Insight::PriceIncreased { .. } | Insight::PriceDecreased { .. } | Insight::PriceStable
            )
        })
        .collect();
    assert_eq!(price_insights, vec![&Insight::PriceStable]);
}

#[test]
fn test_scenario_stock_up() {
    let forecast = forecaster(1200.0)
        .forecast(&february(1500, 1450, 1008))
        .unwrap();

    let metrics = &forecast.metrics;
    assert_eq!(metrics.units_delta, 192.0);
    assert_eq!(metrics.revenue_estimate, Decimal::from(1200 * 1500));
    assert!((metrics.change_percent.unwrap() - 19.05).abs() < 0.01);
    assert!(
        forecast
            .insights
            .iter()
            .any(|i| matches!(i, Insight::StockUp { .. }))
    );
}

#[test]
fn test_scenario_zero_prior_sales() {
    let forecast = forecaster(500.0)
        .forecast(&february(1500, 1450, 0))
        .unwrap();

    assert_eq!(forecast.metrics.change_percent, None);
    assert_eq!(forecast.metrics.units_delta, 500.0);
    assert!(!forecast.insights.iter().any(|i| matches!(
        i,
        Insight::StockUp { .. } | Insight::ReduceInventory { .. }
    )));
}

#[test]
fn test_price_change_matches_inputs_for_random_pairs() {
    let mut rng = StdRng::seed_from_u64(2017);

    for _ in 0..500 {
        let current = rng.random_range(PRICE_RANGE);
        let last = rng.random_range(PRICE_RANGE);
        let input = february(current, last, 1008);

        let features = derive_features(&input);
        assert_eq!(features.price_change, current as f64 - last as f64);
        assert_eq!(input.price_change(), current as i64 - last as i64);
    }
}

#[test]
fn test_forecast_is_deterministic() {
    let mut input = february(1300, 1450, 900);
    input.is_festive = true;
    input.is_harvest = true;
    let forecaster = forecaster(700.0);

    let first = forecaster.forecast(&input).unwrap();
    for _ in 0..5 {
        assert_eq!(forecaster.forecast(&input).unwrap(), first);
    }
    assert_eq!(
        first.insights,
        vec![
            Insight::PriceDecreased { amount: 150 },
            Insight::FestiveSeason,
            Insight::HarvestSeason,
            Insight::ReduceInventory {
                percent: first.metrics.change_percent.unwrap().abs()
            },
        ]
    );
}

#[test]
fn test_summary_echoes_inputs() {
    let forecast = forecaster(1000.0)
        .forecast(&february(1500, 1450, 1008))
        .unwrap();

    let rows: Vec<(&str, String)> = forecast
        .summary_rows("₦")
        .into_iter()
        .map(|r| (r.parameter, r.value))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("Prediction Month", "February".to_string()),
            ("Months Since Start", "98".to_string()),
            ("Current Price", "₦1,500".to_string()),
            ("Last Month Price", "₦1,450".to_string()),
            ("Price Change", "₦50".to_string()),
            ("Last Month Sales", "1,008 units".to_string()),
            ("Festive Month", "No".to_string()),
            ("Harvest Season", "No".to_string()),
        ]
    );
}

#[test]
fn test_forecast_serializes_to_json() {
    let forecast = forecaster(1200.0)
        .forecast(&february(1500, 1450, 1008))
        .unwrap();

    let json = serde_json::to_value(&forecast).unwrap();
    assert_eq!(json["input"]["month"], "February");
    assert_eq!(json["features"]["months_since_start"], 98.0);
    assert_eq!(json["insights"][0]["kind"], "price_increased");
    assert_eq!(json["insights"][1]["kind"], "stock_up");
}
