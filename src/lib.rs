pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod output;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{CollectingSink, HttpPageSource, TracingSink};
pub use config::{AppConfig, QueryConfig};
pub use crate::core::{document::Document, names::normalize_name, service::ResultsService};
pub use domain::model::{Category, ConstructorStanding, DriverStanding, RaceResult, ResolvedYear};
pub use utils::error::{F1Error, Result};
