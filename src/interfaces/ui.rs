use crate::application::session::ForecastSession;
use crate::domain::inventory::format::yes_no;
use crate::domain::inventory::types::{Month, PRICE_RANGE, UNITS_SOLD_RANGE};
use crate::interfaces::components::metrics::{render_insight, render_metric_card};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::forecast_view_model::ForecastViewModel;
use eframe::egui;

impl eframe::App for ForecastSession {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        // --- 1. Pull pending log lines ---
        self.drain_logs();

        // --- 2. Header ---
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading("🇳🇬 Inventory Forecaster");
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("Optimized for: {}", self.config.product_name))
                        .color(DesignSystem::TEXT_SECONDARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (text, color) = match self.model_label() {
                        Some(label) => (format!("● {}", label), DesignSystem::SUCCESS),
                        None => ("● MODEL UNAVAILABLE".to_string(), DesignSystem::DANGER),
                    };
                    ui.label(egui::RichText::new(text).color(color).small());
                });
            });
            ui.add_space(4.0);
        });

        // --- 3. Sidebar: inputs ---
        egui::SidePanel::left("input_panel")
            .default_width(320.0)
            .min_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| render_input_panel(ui, self));
            });

        // --- 4. Bottom: activity log ---
        egui::TopBottomPanel::bottom("activity_panel")
            .resizable(true)
            .default_height(120.0)
            .show(ctx, |ui| {
                egui::CollapsingHeader::new("Activity Log")
                    .default_open(false)
                    .show(ui, |ui| {
                        egui::ScrollArea::vertical()
                            .auto_shrink([false, true])
                            .stick_to_bottom(true)
                            .show(ui, |ui| {
                                for line in &self.activity_log {
                                    let color = if line.contains("ERROR") {
                                        DesignSystem::DANGER
                                    } else if line.contains("WARN") {
                                        DesignSystem::WARNING
                                    } else {
                                        DesignSystem::TEXT_SECONDARY
                                    };
                                    ui.label(
                                        egui::RichText::new(line).monospace().size(11.0).color(color),
                                    );
                                }
                            });
                    });
            });

        // --- 5. Central panel: results ---
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| render_results(ui, self));
            });
    }
}

fn render_input_panel(ui: &mut egui::Ui, session: &mut ForecastSession) {
    ui.heading("📊 Input Parameters");
    ui.separator();

    section_title(ui, "1️⃣ Select Month to Predict");
    egui::ComboBox::from_id_salt("month_select")
        .selected_text(session.input.month.name())
        .width(ui.available_width() - 8.0)
        .show_ui(ui, |ui| {
            for month in Month::ALL {
                ui.selectable_value(&mut session.input.month, month, month.name());
            }
        });

    section_title(ui, "2️⃣ Price Information");
    let currency = session.config.currency_symbol.clone();
    egui::Grid::new("price_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label(format!("Current Price ({}/kg)", currency));
            ui.add(
                egui::DragValue::new(&mut session.input.current_price)
                    .range(PRICE_RANGE)
                    .speed(50)
                    .prefix(&currency),
            );
            ui.end_row();

            ui.label(format!("Last Month Price ({}/kg)", currency));
            ui.add(
                egui::DragValue::new(&mut session.input.last_month_price)
                    .range(PRICE_RANGE)
                    .speed(50)
                    .prefix(&currency),
            );
            ui.end_row();
        });

    section_title(ui, "3️⃣ Sales History");
    ui.horizontal(|ui| {
        ui.label("Last Month's Units Sold");
        ui.add(
            egui::DragValue::new(&mut session.input.units_sold_last_month)
                .range(UNITS_SOLD_RANGE)
                .speed(10),
        )
        .on_hover_text(
            "Enter your actual sales from last month. Default is the typical median (1,008 units).",
        );
    });

    section_title(ui, "4️⃣ Seasonal Context");
    let month = session.input.month;
    yes_no_selector(
        ui,
        "Festive Month?",
        &mut session.input.is_festive,
        month.is_typically_festive(),
        "December, January (Christmas/New Year) or April (Easter)",
    );
    yes_no_selector(
        ui,
        "Harvest Season?",
        &mut session.input.is_harvest,
        month.is_typically_harvest(),
        "July-September (peak harvest period)",
    );

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    ui.separator();
    ui.add_space(DesignSystem::SPACING_SMALL);

    let button = egui::Button::new(
        egui::RichText::new("🔮 Predict Inventory Needs")
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    )
    .fill(DesignSystem::ACCENT_PRIMARY)
    .min_size(egui::vec2(ui.available_width(), 36.0));

    if ui.add_enabled(session.can_predict(), button).clicked() {
        session.submit();
    }

    if ui.small_button("Reset to defaults").clicked() {
        session.reset_inputs();
    }
}

fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.add_space(DesignSystem::SPACING_SMALL);
    ui.label(
        egui::RichText::new(title)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    );
}

fn yes_no_selector(ui: &mut egui::Ui, label: &str, value: &mut bool, typical: bool, help: &str) {
    ui.horizontal(|ui| {
        ui.label(label).on_hover_text(help);
        ui.radio_value(value, false, "No");
        ui.radio_value(value, true, "Yes");
    });
    ui.label(
        egui::RichText::new(format!("Typical for this month: {}", yes_no(typical)))
            .size(11.0)
            .color(DesignSystem::TEXT_MUTED),
    );
}

fn render_results(ui: &mut egui::Ui, session: &ForecastSession) {
    let currency = session.config.currency_symbol.as_str();

    if let Some(reason) = session.model_error() {
        DesignSystem::banner_frame(DesignSystem::DANGER).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(format!("Error loading model: {}", reason))
                    .color(DesignSystem::DANGER),
            );
        });
        ui.add_space(DesignSystem::SPACING_MEDIUM);
    }

    if let Some(message) = &session.last_error {
        DesignSystem::banner_frame(DesignSystem::DANGER).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(message).color(DesignSystem::DANGER));
        });
        ui.add_space(DesignSystem::SPACING_MEDIUM);
    }

    let Some(forecast) = &session.last_forecast else {
        render_intro(ui);
        return;
    };

    let cards = ForecastViewModel::metric_cards(forecast, currency);
    ui.columns(cards.len(), |columns| {
        for (idx, (column, card)) in columns.iter_mut().zip(cards.iter()).enumerate() {
            render_metric_card(column, card, idx == 0);
        }
    });

    ui.add_space(DesignSystem::SPACING_LARGE);
    ui.heading("💡 Key Insights");
    ui.add_space(DesignSystem::SPACING_SMALL);
    for row in ForecastViewModel::insight_rows(forecast, currency) {
        render_insight(ui, &row);
        ui.add_space(6.0);
    }

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    egui::CollapsingHeader::new("📋 Input Summary")
        .default_open(false)
        .show(ui, |ui| {
            egui::Grid::new("summary_grid")
                .num_columns(2)
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Parameter").strong());
                    ui.label(egui::RichText::new("Value").strong());
                    ui.end_row();
                    for row in forecast.summary_rows(currency) {
                        ui.label(row.parameter);
                        ui.label(row.value);
                        ui.end_row();
                    }
                });
        });
}

fn render_intro(ui: &mut egui::Ui) {
    DesignSystem::banner_frame(DesignSystem::INFO).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            "👈 Adjust the parameters in the sidebar and click 'Predict Inventory Needs' to get started!",
        );
    });

    ui.add_space(DesignSystem::SPACING_LARGE);
    DesignSystem::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        section_title(ui, "📊 How this works");
        ui.label(
            "A Random Forest model trained on national food price data and monthly sales \
             patterns predicts how many units you will need next month.",
        );
        ui.add_space(DesignSystem::SPACING_SMALL);
        for line in [
            "• Price change analysis: the primary driver of demand",
            "• Seasonal patterns: months encoded as sine/cosine so December sits next to January",
            "• Local context: festive periods (Dec/Jan, Easter) and harvest season (Jul-Sep)",
            "• Sales momentum: last month's sales inform the prediction",
        ] {
            ui.label(egui::RichText::new(line).color(DesignSystem::TEXT_SECONDARY));
        }
    });
}
