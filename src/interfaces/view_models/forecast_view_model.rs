use crate::domain::inventory::forecast::Forecast;
use crate::domain::inventory::format::{
    format_currency, format_decimal_currency, format_signed_percent, format_thousands,
};
use crate::domain::inventory::insights::Severity;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub struct MetricCardModel {
    pub title: &'static str,
    pub value: String,
    pub context: Option<String>,
    pub context_color: egui::Color32,
    pub icon: &'static str,
}

pub struct InsightRow {
    pub icon: &'static str,
    pub text: String,
    pub color: egui::Color32,
}

pub struct ForecastViewModel;

impl ForecastViewModel {
    /// Predicted units, price change and revenue estimate, in display order.
    pub fn metric_cards(forecast: &Forecast, currency: &str) -> Vec<MetricCardModel> {
        let metrics = &forecast.metrics;
        let delta = metrics.units_delta_whole();

        let units_sign = if delta >= 0 { "+" } else { "-" };
        let price_color = match metrics.price_change {
            p if p > 0 => DesignSystem::WARNING,
            p if p < 0 => DesignSystem::SUCCESS,
            _ => DesignSystem::TEXT_MUTED,
        };

        vec![
            MetricCardModel {
                title: "Predicted Units Needed",
                value: format_thousands(metrics.predicted_units_whole()),
                context: Some(format!(
                    "{}{} vs last month",
                    units_sign,
                    format_thousands(delta.abs())
                )),
                context_color: Self::delta_color(delta),
                icon: "📦",
            },
            MetricCardModel {
                title: "Price Change",
                value: format_currency(currency, metrics.price_change),
                context: Some(format_signed_percent(metrics.price_change_percent)),
                context_color: price_color,
                icon: "💰",
            },
            MetricCardModel {
                title: "Est. Revenue",
                value: format_decimal_currency(currency, metrics.revenue_estimate),
                context: None,
                context_color: DesignSystem::TEXT_MUTED,
                icon: "💵",
            },
        ]
    }

    pub fn insight_rows(forecast: &Forecast, currency: &str) -> Vec<InsightRow> {
        forecast
            .insights
            .iter()
            .map(|insight| InsightRow {
                icon: insight.icon(),
                text: insight.message(currency),
                color: Self::severity_color(insight.severity()),
            })
            .collect()
    }

    pub fn severity_color(severity: Severity) -> egui::Color32 {
        match severity {
            Severity::Info => DesignSystem::INFO,
            Severity::Positive => DesignSystem::SUCCESS,
            Severity::Warning => DesignSystem::WARNING,
        }
    }

    fn delta_color(delta: i64) -> egui::Color32 {
        match delta {
            d if d > 0 => DesignSystem::SUCCESS,
            d if d < 0 => DesignSystem::DANGER,
            _ => DesignSystem::TEXT_MUTED,
        }
    }
}
