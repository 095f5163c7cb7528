use crate::core::document::Document;
use crate::domain::model::Category;
use crate::utils::error::{ErrorCategory, F1Error, Result};
use async_trait::async_trait;

/// Anything that can turn a URL into a parsed HTML document.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Document>;
}

/// 查詢邊界吸收掉的錯誤都會送到這裡
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Year resolution failed and the configured default year was used.
    YearFallback {
        category: Category,
        default_year: String,
        kind: ErrorCategory,
        message: String,
    },
    /// The category page could not be fetched or parsed; the query returned no records.
    QueryFailed {
        category: Category,
        url: String,
        kind: ErrorCategory,
        message: String,
    },
}

impl Diagnostic {
    pub fn year_fallback(category: Category, default_year: &str, error: &F1Error) -> Self {
        Diagnostic::YearFallback {
            category,
            default_year: default_year.to_string(),
            kind: error.category(),
            message: error.to_string(),
        }
    }

    pub fn query_failed(category: Category, url: &str, error: &F1Error) -> Self {
        Diagnostic::QueryFailed {
            category,
            url: url.to_string(),
            kind: error.category(),
            message: error.to_string(),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Diagnostic::YearFallback { category, .. } | Diagnostic::QueryFailed { category, .. } => {
                *category
            }
        }
    }
}

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}
