// Inputs, metrics, insights and formatting for inventory forecasts
pub mod inventory;

// Feature engineering contract with the model artifact
pub mod ml;

// Domain-specific error types
pub mod errors;
