pub mod forecast_view_model;
