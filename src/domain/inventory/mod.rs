pub mod forecast;
pub mod format;
pub mod insights;
pub mod types;
