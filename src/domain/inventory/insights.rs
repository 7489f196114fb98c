use crate::domain::inventory::forecast::ForecastMetrics;
use crate::domain::inventory::format::format_currency;
use crate::domain::inventory::types::PredictionInput;
use serde::Serialize;

/// Relative change (in percent) beyond which stock advisories are raised.
pub const SIGNIFICANT_CHANGE_PCT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Positive,
    Warning,
}

/// Advisory shown under the prediction. Rule-based, never randomized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insight {
    PriceIncreased { amount: i64 },
    PriceDecreased { amount: i64 },
    PriceStable,
    FestiveSeason,
    HarvestSeason,
    StockUp { percent: f64 },
    ReduceInventory { percent: f64 },
}

impl Insight {
    pub fn severity(&self) -> Severity {
        match self {
            Insight::PriceIncreased { .. } | Insight::ReduceInventory { .. } => Severity::Warning,
            Insight::PriceDecreased { .. } | Insight::StockUp { .. } => Severity::Positive,
            Insight::PriceStable | Insight::FestiveSeason | Insight::HarvestSeason => {
                Severity::Info
            }
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Insight::PriceIncreased { .. } => "⚠️",
            Insight::PriceDecreased { .. } => "✅",
            Insight::PriceStable => "📊",
            Insight::FestiveSeason => "🎉",
            Insight::HarvestSeason => "🌾",
            Insight::StockUp { .. } => "📈",
            Insight::ReduceInventory { .. } => "📉",
        }
    }

    pub fn message(&self, currency: &str) -> String {
        match self {
            Insight::PriceIncreased { amount } => format!(
                "Price increased by {} - demand may decrease slightly.",
                format_currency(currency, *amount)
            ),
            Insight::PriceDecreased { amount } => format!(
                "Price decreased by {} - demand may increase.",
                format_currency(currency, *amount)
            ),
            Insight::PriceStable => {
                "Price stable - demand follows typical seasonal patterns.".to_string()
            }
            Insight::FestiveSeason => {
                "Festive season active - expect 15-25% higher demand than usual.".to_string()
            }
            Insight::HarvestSeason => {
                "Harvest season - supply is typically abundant, prices may stabilize.".to_string()
            }
            Insight::StockUp { percent } => format!(
                "Significant increase expected - stock up {:.1}% more than last month.",
                percent
            ),
            Insight::ReduceInventory { percent } => format!(
                "Demand may drop - consider {:.1}% less inventory to avoid waste.",
                percent
            ),
        }
    }
}

/// Applies the advisory rules in display order: price direction, festive,
/// harvest, then the stock magnitude rule (skipped when prior sales were zero).
pub fn generate_insights(input: &PredictionInput, metrics: &ForecastMetrics) -> Vec<Insight> {
    let mut insights = Vec::with_capacity(4);

    let price_change = input.price_change();
    insights.push(match price_change {
        delta if delta > 0 => Insight::PriceIncreased { amount: delta },
        delta if delta < 0 => Insight::PriceDecreased { amount: -delta },
        _ => Insight::PriceStable,
    });

    if input.is_festive {
        insights.push(Insight::FestiveSeason);
    }

    if input.is_harvest {
        insights.push(Insight::HarvestSeason);
    }

    if let Some(pct) = metrics.change_percent {
        if pct > SIGNIFICANT_CHANGE_PCT {
            insights.push(Insight::StockUp { percent: pct.abs() });
        } else if pct < -SIGNIFICANT_CHANGE_PCT {
            insights.push(Insight::ReduceInventory { percent: pct.abs() });
        }
    }

    insights
}
