use f1_results::core::year::resolve_latest_year;
use f1_results::{F1Error, HttpPageSource};
use httpmock::prelude::*;
use std::time::Duration;

fn source() -> HttpPageSource {
    HttpPageSource::new(Duration::from_secs(30)).unwrap()
}

fn serve_listing(server: &MockServer, path: &str, body: String) {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(body);
    });
}

fn season_links(years: &[&str]) -> String {
    years
        .iter()
        .map(|y| format!(r#"<a href="/en/results.html/{y}/drivers.html">{y}</a>"#))
        .collect()
}

#[tokio::test]
async fn test_resolves_current_year() {
    let server = MockServer::start();
    serve_listing(&server, "/en/results.html", season_links(&["2024", "2023", "2022"]));

    let year = resolve_latest_year(&source(), &server.url("/en/results.html"), 2024)
        .await
        .unwrap();

    assert_eq!(year.to_string(), "2024");
}

#[tokio::test]
async fn test_ignores_future_year() {
    let server = MockServer::start();
    serve_listing(
        &server,
        "/en/results.html",
        season_links(&["2025", "2024", "2023", "2022"]),
    );

    let year = resolve_latest_year(&source(), &server.url("/en/results.html"), 2024)
        .await
        .unwrap();

    assert_eq!(year.to_string(), "2024");
}

#[tokio::test]
async fn test_uses_the_given_listing_url() {
    let server = MockServer::start();
    let canonical = server.mock(|when, then| {
        when.method(GET).path("/en/results.html");
        then.status(200).body(season_links(&["2024"]));
    });
    serve_listing(&server, "/archive/seasons", season_links(&["2019", "2018"]));

    let year = resolve_latest_year(&source(), &server.url("/archive/seasons"), 2024)
        .await
        .unwrap();

    assert_eq!(year.value(), 2019);
    canonical.assert_hits(0);
}

#[tokio::test]
async fn test_no_candidates_is_an_error() {
    let server = MockServer::start();
    serve_listing(
        &server,
        "/en/results.html",
        r#"<html><body><a href="/en/latest">Latest</a><a href="/en/results.html/teams">Teams</a></body></html>"#
            .to_string(),
    );

    let result = resolve_latest_year(&source(), &server.url("/en/results.html"), 2024).await;

    assert!(matches!(result, Err(F1Error::NoYearFoundError { .. })));
}

#[tokio::test]
async fn test_only_future_candidates_is_an_error() {
    let server = MockServer::start();
    serve_listing(&server, "/en/results.html", season_links(&["2026", "2025"]));

    let result = resolve_latest_year(&source(), &server.url("/en/results.html"), 2024).await;

    match result {
        Err(F1Error::NoValidYearError { current_year, .. }) => assert_eq!(current_year, 2024),
        other => panic!("expected NoValidYearError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_errors_are_passed_through() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/en/results.html");
        then.status(404);
    });

    let result = resolve_latest_year(&source(), &server.url("/en/results.html"), 2024).await;

    assert!(matches!(result, Err(F1Error::HttpStatusError { .. })));
}
