//! Inventory Forecaster CLI - headless predictions
//!
//! Runs the same feature engineering, model and insight rules as the desktop
//! form, without a GUI. Suitable for scripts and spreadsheets.
//!
//! # Usage
//! ```sh
//! cargo run --bin forecast -- --month feb --current-price 1500 --last-month-price 1450 --units-sold 1008
//! cargo run --bin forecast -- --batch plans.csv > forecasts.csv
//! ```
//!
//! # Environment Variables
//! - `MODEL_PATH` - Model artifact (default: random_forest_model.json)
//! - `CURRENCY_SYMBOL` - Currency shown in output (default: ₦)
//! - `REFERENCE_YEAR` - Year used for the time index (default: current year)

use anyhow::{Context, Result};
use clap::Parser;
use inventory_forecaster::application::batch::run_batch;
use inventory_forecaster::application::forecast_service::InventoryForecaster;
use inventory_forecaster::application::ml::SmartCorePredictor;
use inventory_forecaster::config::Config;
use inventory_forecaster::domain::inventory::forecast::Forecast;
use inventory_forecaster::domain::inventory::format::{
    format_currency, format_decimal_currency, format_signed_percent, format_thousands,
};
use inventory_forecaster::domain::inventory::types::{
    DEFAULT_CURRENT_PRICE, DEFAULT_LAST_MONTH_PRICE, DEFAULT_UNITS_SOLD, Month, PredictionInput,
};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Month to plan for: 1-12, a name or a 3-letter abbreviation
    #[arg(long, required_unless_present = "batch")]
    month: Option<String>,

    /// Current price per kg
    #[arg(long, default_value_t = DEFAULT_CURRENT_PRICE)]
    current_price: u32,

    /// Last month's price per kg
    #[arg(long, default_value_t = DEFAULT_LAST_MONTH_PRICE)]
    last_month_price: u32,

    /// Units sold last month
    #[arg(long, default_value_t = DEFAULT_UNITS_SOLD)]
    units_sold: u32,

    /// Festive month (Christmas/New Year, Easter)
    #[arg(long)]
    festive: bool,

    /// Harvest season (July-September)
    #[arg(long)]
    harvest: bool,

    /// Reference year for the time index (overrides REFERENCE_YEAR)
    #[arg(long)]
    year: Option<i32>,

    /// Model artifact (overrides MODEL_PATH)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Print the forecast as JSON
    #[arg(long)]
    json: bool,

    /// Forecast every row of a CSV file and write CSV results to stdout
    #[arg(long, conflicts_with = "month")]
    batch: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean for JSON/CSV output
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(stderr_layer)
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(model) = &args.model {
        config.model_path = model.clone();
    }
    if let Some(year) = args.year {
        config.reference_year = Some(year);
    }

    let predictor = SmartCorePredictor::load(&config.model_path)
        .with_context(|| format!("Prediction disabled: cannot load {:?}", config.model_path))?;
    let forecaster = InventoryForecaster::new(Arc::new(predictor));
    info!(
        "Using {} {}",
        forecaster.predictor_name(),
        forecaster.predictor_version()
    );

    if let Some(path) = &args.batch {
        let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
        let summary = run_batch(
            &forecaster,
            BufReader::new(file),
            std::io::stdout().lock(),
            config.reference_year(),
            &config.currency_symbol,
        )?;
        eprintln!(
            "{} rows forecast, {} failed",
            summary.succeeded, summary.failed
        );
        return Ok(());
    }

    let month: Month = args
        .month
        .as_deref()
        .context("--month is required")?
        .parse()?;

    let input = PredictionInput::new(
        month,
        args.current_price,
        args.last_month_price,
        args.units_sold,
        args.festive,
        args.harvest,
        config.reference_year(),
    )?;

    let forecast = forecaster
        .forecast(&input)
        .context("Error making prediction")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
    } else {
        print_report(&forecast, &config);
    }

    Ok(())
}

fn print_report(forecast: &Forecast, config: &Config) {
    let currency = config.currency_symbol.as_str();
    let metrics = &forecast.metrics;

    println!("{} - {}", config.product_name, forecast.input.month);
    println!();
    println!(
        "  Predicted units needed : {} ({:+} vs last month)",
        format_thousands(metrics.predicted_units_whole()),
        metrics.units_delta_whole()
    );
    println!(
        "  Price change           : {} ({})",
        format_currency(currency, metrics.price_change),
        format_signed_percent(metrics.price_change_percent)
    );
    println!(
        "  Est. revenue           : {}",
        format_decimal_currency(currency, metrics.revenue_estimate)
    );

    println!();
    println!("Key insights:");
    for insight in &forecast.insights {
        println!("  {} {}", insight.icon(), insight.message(currency));
    }

    println!();
    println!("Input summary:");
    for row in forecast.summary_rows(currency) {
        println!("  {:<20} {}", row.parameter, row.value);
    }
}
