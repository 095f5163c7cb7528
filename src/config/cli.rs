use super::toml_config::TomlConfig;
use super::{listing_url_for, AppConfig, QueryConfig};
use crate::domain::model::Category;
use crate::output::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "f1-results", version)]
#[command(about = "Displays the standings of drivers or constructors and race results")]
#[command(
    long_about = "This app displays current statistics about F1 races such as driver, constructor or race results in your terminal."
)]
#[command(group(ArgGroup::new("category").args(["driver", "constructor", "race"])))]
pub struct CliConfig {
    #[arg(short, long, help = "Display driver standings")]
    pub driver: bool,

    #[arg(short, long, help = "Display constructor standings")]
    pub constructor: bool,

    #[arg(short, long, help = "Display race results")]
    pub race: bool,

    #[arg(long, value_enum, help = "Output format [default: table]")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Read settings from a TOML file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Results site root [default: https://www.formula1.com]")]
    pub base_url: Option<String>,

    #[arg(long, help = "Page scanned for the latest season [default: <base-url>/en/results.html]")]
    pub listing_url: Option<String>,

    #[arg(long, help = "Season used when the latest one cannot be determined [default: current year]")]
    pub default_year: Option<String>,

    #[arg(long, help = "Per-request timeout in seconds [default: 30]")]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The selected lookup, or `None` when no selector flag was given.
    pub fn category(&self) -> Option<Category> {
        if self.driver {
            Some(Category::Drivers)
        } else if self.constructor {
            Some(Category::Constructors)
        } else if self.race {
            Some(Category::Races)
        } else {
            None
        }
    }

    /// 讀取 --config 指定的檔案後合併設定
    pub fn app_config(&self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };
        let config = self.merge(&file);
        config.validate()?;
        Ok(config)
    }

    /// Command-line values win over the file, the file wins over defaults.
    pub fn merge(&self, file: &TomlConfig) -> AppConfig {
        let base_url = self
            .base_url
            .as_deref()
            .or(file.source.base_url.as_deref());
        let mut query = match base_url {
            Some(base_url) => QueryConfig::with_base_url(base_url),
            None => QueryConfig::default(),
        };

        query.listing_url = self
            .listing_url
            .clone()
            .or_else(|| file.source.listing_url.clone())
            .unwrap_or_else(|| listing_url_for(&query.base_url));

        if let Some(year) = self.default_year.clone().or_else(|| file.query.default_year.clone()) {
            query.default_year = year;
        }

        if let Some(seconds) = self.timeout_seconds.or(file.source.timeout_seconds) {
            query.timeout = Duration::from_secs(seconds);
        }

        let format = self
            .format
            .or(file.output.format)
            .unwrap_or_default();

        AppConfig { query, format }
    }
}
