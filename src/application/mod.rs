// CSV batch forecasting
pub mod batch;

// Request orchestration: features -> model -> metrics -> insights
pub mod forecast_service;

// Model seam and the smartcore implementation
pub mod ml;

// Form state driving the desktop UI
pub mod session;
