use crate::domain::ports::{Diagnostic, DiagnosticSink};
use std::sync::Mutex;

/// Writes diagnostics to the `tracing` subscriber installed by the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::YearFallback {
                category,
                default_year,
                kind,
                message,
            } => {
                tracing::warn!(
                    "Error fetching latest year for {} data: {} ({:?}). Falling back to default year {}.",
                    category,
                    message,
                    kind,
                    default_year
                );
            }
            Diagnostic::QueryFailed {
                category,
                url,
                kind,
                message,
            } => {
                tracing::error!(
                    "Failed to fetch or parse {} data from {}: {} ({:?})",
                    category,
                    url,
                    message,
                    kind
                );
            }
        }
    }
}

/// Keeps every diagnostic in memory, in arrival order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        if let Ok(mut diagnostics) = self.diagnostics.lock() {
            diagnostics.push(diagnostic);
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}
