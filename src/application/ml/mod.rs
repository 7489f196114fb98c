pub mod predictor;
pub mod smartcore_predictor;

pub use predictor::DemandPredictor;
pub use smartcore_predictor::SmartCorePredictor;
