use crate::core::document::Document;
use crate::domain::ports::PageSource;
use crate::utils::error::{F1Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Fetches pages over HTTP with a fixed per-request timeout and no retries.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| F1Error::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self, url: &str) -> Result<Document> {
        tracing::debug!("Making request to: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| F1Error::NetworkError {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);
        if status != StatusCode::OK {
            // response 在這裡 drop，連線隨之釋放
            return Err(F1Error::HttpStatusError {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| F1Error::NetworkError {
                url: url.to_string(),
                source,
            })?;

        Document::from_bytes(url, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::compile;
    use httpmock::prelude::*;

    fn source() -> HttpPageSource {
        HttpPageSource::new(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_parses_html() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET).path("/en/results.html");
            then.status(200)
                .header("Content-Type", "text/html; charset=utf-8")
                .body("<html><body><h1>Results</h1></body></html>");
        });

        let document = source().fetch(&server.url("/en/results.html")).await.unwrap();

        page_mock.assert();
        let h1 = compile("h1");
        let heading: String = document.select(&h1).flat_map(|e| e.text()).collect();
        assert_eq!(heading, "Results");
    }

    #[tokio::test]
    async fn test_fetch_reports_bad_status() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let url = server.url("/missing");
        let result = source().fetch(&url).await;

        page_mock.assert();
        match result {
            Err(F1Error::HttpStatusError { url: failed, status }) => {
                assert_eq!(failed, url);
                assert_eq!(status, StatusCode::NOT_FOUND);
            }
            Err(other) => panic!("expected HttpStatusError, got {:?}", other),
            Ok(_) => panic!("expected HttpStatusError, got a document"),
        }
    }

    #[tokio::test]
    async fn test_fetch_treats_non_200_success_as_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/accepted");
            then.status(202).body("<html></html>");
        });

        let result = source().fetch(&server.url("/accepted")).await;
        assert!(matches!(result, Err(F1Error::HttpStatusError { .. })));
    }

    #[tokio::test]
    async fn test_fetch_reports_unparseable_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/binary");
            then.status(200).body(vec![0xff_u8, 0xfe, 0x00, 0x81]);
        });

        let result = source().fetch(&server.url("/binary")).await;
        assert!(matches!(result, Err(F1Error::MarkupParseError { .. })));
    }

    #[tokio::test]
    async fn test_fetch_reports_network_error() {
        // 本機 port 1 不會有服務在聽
        let result = source().fetch("http://127.0.0.1:1/en/results.html").await;
        assert!(matches!(result, Err(F1Error::NetworkError { .. })));
    }
}
