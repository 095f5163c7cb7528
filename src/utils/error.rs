use thiserror::Error;

#[derive(Error, Debug)]
pub enum F1Error {
    #[error("Failed to fetch URL {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Bad status for URL {url}: {status}")]
    HttpStatusError {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to parse HTML from {url}: {reason}")]
    MarkupParseError { url: String, reason: String },

    #[error("No years found in HTML from {url}")]
    NoYearFoundError { url: String },

    #[error("No valid year found (less than or equal to {current_year}) from {url}")]
    NoValidYearError { url: String, current_year: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Markup,
    YearResolution,
    Configuration,
    Output,
}

impl F1Error {
    /// 錯誤分類，用於日誌上下文
    pub fn category(&self) -> ErrorCategory {
        match self {
            F1Error::NetworkError { .. } | F1Error::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            F1Error::MarkupParseError { .. } => ErrorCategory::Markup,
            F1Error::NoYearFoundError { .. } | F1Error::NoValidYearError { .. } => {
                ErrorCategory::YearResolution
            }
            F1Error::ConfigError { .. } | F1Error::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            F1Error::IoError(_) | F1Error::SerializationError(_) | F1Error::CsvError(_) => {
                ErrorCategory::Output
            }
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Output => format!("Could not write results: {}", self),
            ErrorCategory::Network | ErrorCategory::Markup => {
                format!("Could not load data from formula1.com: {}", self)
            }
            ErrorCategory::YearResolution => format!("Could not determine the season: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, F1Error>;
