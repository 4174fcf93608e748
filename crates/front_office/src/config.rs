//! Front office configuration

use serde::Deserialize;

use core_kernel::Currency;

/// Front office configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FrontOfficeConfig {
    /// Billing currency code (USD, BDT, EUR)
    pub currency: String,
    /// Entries-per-page choices offered on every table
    pub page_size_options: Vec<usize>,
    /// Page size tables start with
    pub default_page_size: usize,
    /// Simulated guest directory latency
    pub lookup_delay_ms: u64,
    /// Log level
    pub log_level: String,
}

impl Default for FrontOfficeConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            page_size_options: vec![5, 10, 25, 50, 100],
            default_page_size: 5,
            lookup_delay_ms: 500,
            log_level: "info".to_string(),
        }
    }
}

impl FrontOfficeConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        config::Config::builder()
            .add_source(config::Environment::with_prefix("FRONT_OFFICE"))
            .build()?
            .try_deserialize()
    }

    /// Loads from environment, falling back to defaults when unset
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_default()
    }

    /// The configured currency, falling back to USD on an unknown code
    pub fn currency(&self) -> Currency {
        Currency::parse(&self.currency).unwrap_or(Currency::USD)
    }

    /// The starting page size, clamped into the offered options
    pub fn page_size(&self) -> usize {
        if self.page_size_options.contains(&self.default_page_size) {
            self.default_page_size
        } else {
            self.page_size_options.first().copied().unwrap_or(5)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FrontOfficeConfig::default();
        assert_eq!(config.currency(), Currency::USD);
        assert_eq!(config.page_size(), 5);
        assert_eq!(config.lookup_delay_ms, 500);
    }

    #[test]
    fn test_unknown_currency_falls_back_to_usd() {
        let config = FrontOfficeConfig {
            currency: "XYZ".to_string(),
            ..FrontOfficeConfig::default()
        };
        assert_eq!(config.currency(), Currency::USD);
    }

    #[test]
    fn test_page_size_outside_options_uses_first_option() {
        let config = FrontOfficeConfig {
            default_page_size: 7,
            ..FrontOfficeConfig::default()
        };
        assert_eq!(config.page_size(), 5);
    }
}
