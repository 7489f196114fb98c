use inventory_forecaster::application::forecast_service::InventoryForecaster;
use inventory_forecaster::application::ml::SmartCorePredictor;
use inventory_forecaster::application::session::ForecastSession;
use inventory_forecaster::config::Config;
use inventory_forecaster::interfaces::design_system::DesignSystem;

use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

// A writer that sends logs to the UI via a crossbeam channel
struct ChannelWriter {
    sender: crossbeam_channel::Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).to_string();
        let _ = self.sender.try_send(msg);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Cloneable wrapper for MakeWriter
#[derive(Clone)]
struct ChannelWriterFactory {
    sender: crossbeam_channel::Sender<String>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Log channel feeding the activity panel
    let (log_tx, log_rx) = crossbeam_channel::bounded(1024);

    // 2. Setup Logging (Stdout + UI)
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory { sender: log_tx })
        .with_ansi(false) // No color codes for UI text
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    info!(
        "Initializing Inventory Forecaster {}...",
        env!("CARGO_PKG_VERSION")
    );

    // 3. Config + model (loaded once, shared read-only)
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: model={:?}, product={}, year={}",
        config.model_path,
        config.product_name,
        config.reference_year()
    );

    let model = SmartCorePredictor::load(&config.model_path)
        .map(|predictor| InventoryForecaster::new(Arc::new(predictor)));

    let session = ForecastSession::new(config, model, Some(log_rx));

    // 4. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Inventory Forecaster"),
        ..Default::default()
    };

    eframe::run_native(
        "Inventory Forecaster",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(Box::new(session))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
