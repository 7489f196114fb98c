use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::forecast_view_model::{InsightRow, MetricCardModel};
use eframe::egui;

const METRIC_CARD_HEIGHT: f32 = 100.0;

/// A card showing one headline metric with an optional delta line.
/// The predicted-units card is highlighted with the accent border.
pub fn render_metric_card(ui: &mut egui::Ui, model: &MetricCardModel, highlighted: bool) {
    let border = if highlighted {
        egui::Stroke::new(1.5, DesignSystem::ACCENT_PRIMARY)
    } else {
        egui::Stroke::new(1.0, DesignSystem::BORDER_SUBTLE)
    };

    DesignSystem::card_frame().stroke(border).show(ui, |ui| {
        ui.set_min_height(METRIC_CARD_HEIGHT);
        ui.label(
            egui::RichText::new(model.title.to_uppercase())
                .size(12.0)
                .color(DesignSystem::TEXT_SECONDARY)
                .strong(),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(&model.value)
                        .size(28.0)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );

                if let Some(ctx) = &model.context {
                    render_status_pill(ui, ctx, model.context_color);
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(model.icon).size(24.0));
            });
        });
    });
}

pub fn render_status_pill(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::NONE
        .fill(color.linear_multiply(0.15))
        .corner_radius(DesignSystem::ROUNDING_PILL)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).strong().color(color));
        });
}

pub fn render_insight(ui: &mut egui::Ui, row: &InsightRow) {
    DesignSystem::banner_frame(row.color).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(row.icon).size(16.0));
            ui.label(
                egui::RichText::new(&row.text)
                    .size(14.0)
                    .color(DesignSystem::TEXT_PRIMARY),
            );
        });
    });
}
