use anyhow::{Context, Result};
use chrono::Datelike;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "random_forest_model.json";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₦";
pub const DEFAULT_PRODUCT_NAME: &str = "Rice (local sold loose)";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub model_path: PathBuf,
    pub currency_symbol: String,
    pub product_name: String,
    /// Overrides the calendar year used for the time index. None means "current year".
    pub reference_year: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            reference_year: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let model_path = get("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));

        let currency_symbol =
            get("CURRENCY_SYMBOL").unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

        let product_name =
            get("PRODUCT_NAME").unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string());

        let reference_year = get("REFERENCE_YEAR")
            .map(|v| {
                v.trim()
                    .parse::<i32>()
                    .with_context(|| format!("Failed to parse REFERENCE_YEAR: {:?}", v))
            })
            .transpose()?;

        Ok(Self {
            model_path,
            currency_symbol,
            product_name,
            reference_year,
        })
    }

    /// The configured year, or the current local calendar year.
    pub fn reference_year(&self) -> i32 {
        self.reference_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.model_path, PathBuf::from("random_forest_model.json"));
        assert_eq!(config.currency_symbol, "₦");
        assert!(config.reference_year() >= 2025);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("MODEL_PATH", "models/rice.json"),
            ("CURRENCY_SYMBOL", "$"),
            ("REFERENCE_YEAR", " 2025 "),
            ("PRODUCT_NAME", ""),
        ]))
        .unwrap();

        assert_eq!(config.model_path, PathBuf::from("models/rice.json"));
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.reference_year(), 2025);
        assert_eq!(config.product_name, DEFAULT_PRODUCT_NAME);
    }

    #[test]
    fn test_invalid_reference_year_is_rejected() {
        let err = Config::from_lookup(lookup(&[("REFERENCE_YEAR", "next")])).unwrap_err();
        assert!(err.to_string().contains("REFERENCE_YEAR"));
    }
}
