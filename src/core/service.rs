use crate::adapters::http::HttpPageSource;
use crate::config::QueryConfig;
use crate::core::document::Document;
use crate::core::extract::{extract_constructors, extract_drivers, extract_races};
use crate::core::year::resolve_latest_year;
use crate::domain::model::{Category, ConstructorStanding, DriverStanding, RaceResult};
use crate::domain::ports::{Diagnostic, DiagnosticSink, PageSource};
use crate::utils::error::Result;

/// Query boundary between the scraping core and the presentation layer.
///
/// Each query resolves the season, fetches one category page and extracts its table.
/// Failures never escape: the query returns an empty vector and the error goes to the
/// diagnostic sink. The `try_*` methods expose the typed result for a given year.
pub struct ResultsService<P: PageSource, D: DiagnosticSink> {
    source: P,
    sink: D,
    config: QueryConfig,
}

impl<D: DiagnosticSink> ResultsService<HttpPageSource, D> {
    pub fn over_http(config: QueryConfig, sink: D) -> Result<Self> {
        let source = HttpPageSource::new(config.timeout)?;
        Ok(Self::new(source, sink, config))
    }
}

impl<P: PageSource, D: DiagnosticSink> ResultsService<P, D> {
    pub fn new(source: P, sink: D, config: QueryConfig) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }

    pub async fn drivers(&self) -> Vec<DriverStanding> {
        self.query(Category::Drivers, extract_drivers).await
    }

    pub async fn constructors(&self) -> Vec<ConstructorStanding> {
        self.query(Category::Constructors, extract_constructors).await
    }

    pub async fn races(&self) -> Vec<RaceResult> {
        self.query(Category::Races, extract_races).await
    }

    pub async fn try_drivers(&self, year: &str) -> Result<Vec<DriverStanding>> {
        self.fetch_and_extract(&self.category_url(Category::Drivers, year), extract_drivers)
            .await
    }

    pub async fn try_constructors(&self, year: &str) -> Result<Vec<ConstructorStanding>> {
        self.fetch_and_extract(
            &self.category_url(Category::Constructors, year),
            extract_constructors,
        )
        .await
    }

    pub async fn try_races(&self, year: &str) -> Result<Vec<RaceResult>> {
        self.fetch_and_extract(&self.category_url(Category::Races, year), extract_races)
            .await
    }

    /// The season to query: the latest listed year, or the configured default.
    pub async fn active_year(&self, category: Category) -> String {
        match resolve_latest_year(
            &self.source,
            &self.config.listing_url,
            self.config.current_year,
        )
        .await
        {
            Ok(year) => {
                tracing::debug!("Resolved {} season {}", category, year);
                year.to_string()
            }
            Err(e) => {
                self.sink.report(Diagnostic::year_fallback(
                    category,
                    &self.config.default_year,
                    &e,
                ));
                self.config.default_year.clone()
            }
        }
    }

    /// `<base>/en/results.html/<year>/<page>.html`
    pub fn category_url(&self, category: Category, year: &str) -> String {
        format!(
            "{}/en/results.html/{}/{}.html",
            self.config.base_url.trim_end_matches('/'),
            year,
            category.page_slug()
        )
    }

    async fn query<T>(&self, category: Category, extract: fn(&Document) -> Vec<T>) -> Vec<T> {
        let year = self.active_year(category).await;
        let url = self.category_url(category, &year);

        match self.fetch_and_extract(&url, extract).await {
            Ok(records) => {
                tracing::info!("Fetched {} {} records for {}", records.len(), category, year);
                records
            }
            Err(e) => {
                self.sink.report(Diagnostic::query_failed(category, &url, &e));
                Vec::new()
            }
        }
    }

    async fn fetch_and_extract<T>(
        &self,
        url: &str,
        extract: fn(&Document) -> Vec<T>,
    ) -> Result<Vec<T>> {
        let document = self.source.fetch(url).await?;
        Ok(extract(&document))
    }
}
