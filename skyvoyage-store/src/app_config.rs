use serde::Deserialize;
use skyvoyage_catalog::DEFAULT_TAX_RATE;
use skyvoyage_core::refine::DEFAULT_PRICE_CEILING;
use skyvoyage_core::search::DEFAULT_RETURN_OFFSET_DAYS;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub booking: BookingRules,
    pub search: SearchRules,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BookingRules {
    /// Text placed before the six-digit booking number
    pub id_prefix: String,
    pub tax_rate: f64,
    /// Draws allowed before giving up on finding an unused booking id
    pub max_id_attempts: u32,
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            id_prefix: "SV".to_string(),
            tax_rate: DEFAULT_TAX_RATE,
            max_id_attempts: 16,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchRules {
    pub return_offset_days: u64,
    pub default_price_ceiling: u32,
}

impl Default for SearchRules {
    fn default() -> Self {
        Self {
            return_offset_days: DEFAULT_RETURN_OFFSET_DAYS,
            default_price_ceiling: DEFAULT_PRICE_CEILING,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON dataset replacing the bundled flights
    pub path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every key has a built-in default, so all files are optional
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?;

        s.try_deserialize()
    }
}

/// Eg. `SKYVOYAGE_BOOKING__TAX_RATE=0.2` sets `booking.tax_rate`
fn environment() -> config::Environment {
    config::Environment::with_prefix("SKYVOYAGE")
        .prefix_separator("_")
        .separator("__")
}
