//! Season discovery from the results listing page.

use crate::core::document::{compile, element_text, Document};
use crate::domain::model::ResolvedYear;
use crate::domain::ports::PageSource;
use crate::utils::error::{F1Error, Result};
use scraper::{ElementRef, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Earliest season the broad link scan accepts.
pub const FIRST_SEASON: i32 = 1950;
/// How far past the current year the broad link scan still accepts a year.
pub const FUTURE_YEAR_BUFFER: i32 = 5;

const RESULTS_PATH: &str = "/en/results.html/";
const LEGACY_RESULTS_PREFIX: &str = "/en/results/";

static RESULTS_LINKS: LazyLock<Selector> =
    LazyLock::new(|| compile(&format!("a[href*='{}']", RESULTS_PATH)));
static ALL_LINKS: LazyLock<Selector> = LazyLock::new(|| compile("a[href]"));

/// Fetches `listing_url` and returns the newest season that is not in the future.
///
/// `listing_url` is used as given; it is the only page consulted.
pub async fn resolve_latest_year<P>(
    source: &P,
    listing_url: &str,
    current_year: i32,
) -> Result<ResolvedYear>
where
    P: PageSource + ?Sized,
{
    let years = {
        let document = source.fetch(listing_url).await?;
        scan_years(&document, current_year)
    };
    tracing::debug!("Found candidate years {:?} on {}", years, listing_url);

    if years.is_empty() {
        return Err(F1Error::NoYearFoundError {
            url: listing_url.to_string(),
        });
    }

    pick_latest(&years, current_year)
        .map(ResolvedYear::new)
        .ok_or_else(|| F1Error::NoValidYearError {
            url: listing_url.to_string(),
            current_year,
        })
}

/// Unique candidate years linked from the page, in the order they first appear.
///
/// The targeted scan only looks at links into `/en/results.html/`. The broad scan over
/// every link runs only when the targeted one finds nothing.
pub fn scan_years(document: &Document, current_year: i32) -> Vec<i32> {
    let targeted = collect_unique(document.select(&RESULTS_LINKS), targeted_year);
    if !targeted.is_empty() {
        return targeted;
    }

    tracing::debug!("Targeted year scan found nothing, scanning all links");
    collect_unique(document.select(&ALL_LINKS), |link| broad_year(link, current_year))
}

/// The largest year not after `current_year`.
pub fn pick_latest(years: &[i32], current_year: i32) -> Option<i32> {
    let mut sorted = years.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.into_iter().find(|year| *year <= current_year)
}

fn collect_unique<'a, I, F>(links: I, accept: F) -> Vec<i32>
where
    I: Iterator<Item = ElementRef<'a>>,
    F: Fn(ElementRef<'a>) -> Option<i32>,
{
    let mut seen = HashSet::new();
    links
        .filter_map(accept)
        .filter(|year| seen.insert(*year))
        .collect()
}

/// Link text is the year and the href points at that year's results.
fn targeted_year(link: ElementRef<'_>) -> Option<i32> {
    let text = element_text(link);
    let year = four_digit_year(&text)?;
    let href = link.value().attr("href")?;

    href.contains(&format!("/results.html/{}/", text))
        .then_some(year)
}

fn broad_year(link: ElementRef<'_>, current_year: i32) -> Option<i32> {
    let text = element_text(link);
    let year = four_digit_year(&text)?;
    if !(FIRST_SEASON..=current_year + FUTURE_YEAR_BUFFER).contains(&year) {
        return None;
    }

    let href = link.value().attr("href")?;
    (href.starts_with(LEGACY_RESULTS_PREFIX) && href.contains(&format!("/{}/", text)))
        .then_some(year)
}

fn four_digit_year(text: &str) -> Option<i32> {
    if text.len() == 4 && text.chars().all(|c| c.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}
