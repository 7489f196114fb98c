use crate::domain::inventory::types::{Month, PredictionInput};
use serde::Serialize;
use std::f64::consts::PI;

pub const FEATURE_COUNT: usize = 7;

/// Ordered list of feature names.
/// This order MUST match exactly with the column order the model was trained on.
/// Any change here is a breaking change for model artifacts, and the model will not
/// complain about a reordered vector.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "months_since_start",
    "units_sold_lag1",
    "price_change",
    "month_sin",
    "month_cos",
    "is_festive",
    "is_harvest",
];

/// First year of the training data. `months_since_start` counts from January of this year.
pub const BASE_YEAR: i32 = 2017;

/// Engineered features for one prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    pub months_since_start: f64,
    pub units_sold_lag1: f64,
    pub price_change: f64,
    pub month_sin: f64,
    pub month_cos: f64,
    pub is_festive: f64,
    pub is_harvest: f64,
}

impl FeatureVector {
    /// Values laid out in `FEATURE_NAMES` order.
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.months_since_start,
            self.units_sold_lag1,
            self.price_change,
            self.month_sin,
            self.month_cos,
            self.is_festive,
            self.is_harvest,
        ]
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.to_array().to_vec()
    }

    /// Look up a feature by its registry name.
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|idx| self.to_array()[idx])
    }

    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.to_array())
    }
}

/// Linear time index. Unbounded: years outside the training window extrapolate.
pub fn months_since_start(reference_year: i32, month: Month) -> i64 {
    (i64::from(reference_year) - i64::from(BASE_YEAR)) * 12 + i64::from(month.number())
}

/// (sin, cos) of the month angle, so December and January end up adjacent.
pub fn cyclical_month(month: Month) -> (f64, f64) {
    let angle = 2.0 * PI * f64::from(month.number()) / 12.0;
    (angle.sin(), angle.cos())
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Maps raw inputs to the model's feature vector. Never fails.
pub fn derive_features(input: &PredictionInput) -> FeatureVector {
    let (month_sin, month_cos) = cyclical_month(input.month);

    FeatureVector {
        months_since_start: months_since_start(input.reference_year, input.month) as f64,
        units_sold_lag1: f64::from(input.units_sold_last_month),
        price_change: input.price_change() as f64,
        month_sin,
        month_cos,
        is_festive: flag(input.is_festive),
        is_harvest: flag(input.is_harvest),
    }
}
