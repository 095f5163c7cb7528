#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::output::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, validate_year, Validate};
use chrono::Datelike;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.formula1.com";
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Everything the results core needs, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Site root that category pages are built from.
    pub base_url: String,
    /// Page scanned for season links. Used as-is.
    pub listing_url: String,
    /// Season used when the listing page gives no usable year.
    pub default_year: String,
    /// Latest season allowed; later years on the listing page are ignored.
    pub current_year: i32,
    pub timeout: Duration,
}

impl QueryConfig {
    /// 預設值：listing 頁在 `<base>/en/results.html`，預設年份為今年
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let current_year = chrono::Local::now().year();

        Self {
            listing_url: listing_url_for(&base_url),
            base_url,
            default_year: current_year.to_string(),
            current_year,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl Validate for QueryConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_url("listing_url", &self.listing_url)?;
        validate_year("default_year", &self.default_year)?;
        validate_range("timeout_seconds", self.timeout.as_secs(), 1, MAX_TIMEOUT_SECONDS)?;
        Ok(())
    }
}

pub fn listing_url_for(base_url: &str) -> String {
    format!("{}/en/results.html", base_url.trim_end_matches('/'))
}

/// Resolved settings for one run of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub query: QueryConfig,
    pub format: OutputFormat,
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.query.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_config() {
        let config = QueryConfig::default();

        assert_eq!(config.base_url, "https://www.formula1.com");
        assert_eq!(config.listing_url, "https://www.formula1.com/en/results.html");
        assert_eq!(config.default_year, config.current_year.to_string());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_base_url_trims_slash() {
        let config = QueryConfig::with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.listing_url, "http://localhost:8080/en/results.html");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = QueryConfig {
            default_year: "next".to_string(),
            ..QueryConfig::default()
        };
        assert!(config.validate().is_err());

        let config = QueryConfig {
            timeout: Duration::from_secs(0),
            ..QueryConfig::default()
        };
        assert!(config.validate().is_err());

        let config = QueryConfig {
            listing_url: "not a url".to_string(),
            ..QueryConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
