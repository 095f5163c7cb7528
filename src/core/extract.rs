//! Table extraction for the three results pages.
//!
//! Every column is described by a [`FieldSpec`]: a 1-based column index plus an ordered
//! list of [`TextStrategy`] values. Strategies are tried in order and the first one that
//! yields non-empty text wins. Rows are located the same way through [`ROW_STRATEGIES`].
//! Extraction never fails: a page with an unexpected structure simply yields no records.

use crate::core::document::{compile, element_text, selection_text, Document};
use crate::core::names::normalize_name;
use crate::domain::model::{ConstructorStanding, DriverStanding, RaceResult};
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| compile("a"));
static FIRST_NAME: LazyLock<Selector> = LazyLock::new(|| compile("span[class~='max-lg:hidden']"));
static LAST_NAME: LazyLock<Selector> = LazyLock::new(|| compile("span[class~='max-md:hidden']"));
static TABLE: LazyLock<Selector> = LazyLock::new(|| compile("table"));
static MARKED_TABLE: LazyLock<Selector> = LazyLock::new(|| compile("table.f1-table"));

/// How to locate the result rows on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStrategy {
    /// Rows of the table carrying the site's `f1-table` marker class.
    MarkedTable,
    /// Rows of the first table in the document.
    FirstTable,
}

pub const ROW_STRATEGIES: &[RowStrategy] = &[RowStrategy::MarkedTable, RowStrategy::FirstTable];

impl RowStrategy {
    pub fn rows<'a>(&self, document: &'a Document) -> Vec<ElementRef<'a>> {
        match self {
            RowStrategy::MarkedTable => document
                .select(&MARKED_TABLE)
                .next()
                .map(body_rows)
                .unwrap_or_default(),
            RowStrategy::FirstTable => document
                .select(&TABLE)
                .next()
                .map(body_rows)
                .unwrap_or_default(),
        }
    }
}

/// `tbody > tr` rows owned by `table` itself; rows of tables nested in its cells are skipped.
fn body_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    child_elements(table, "tbody")
        .flat_map(|body| child_elements(body, "tr"))
        .collect()
}

fn child_elements<'a>(
    parent: ElementRef<'a>,
    name: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == name)
}

/// Rows from the first strategy that finds any.
pub fn locate_rows(document: &Document) -> Vec<ElementRef<'_>> {
    for strategy in ROW_STRATEGIES {
        let rows = strategy.rows(document);
        if !rows.is_empty() {
            tracing::debug!("Located {} rows with {:?}", rows.len(), strategy);
            return rows;
        }
    }
    tracing::debug!("No result table rows found");
    Vec::new()
}

/// One way of reading text out of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStrategy {
    /// First-name and last-name spans, joined by a single space.
    NameFragments,
    /// Text of the anchor elements inside the cell.
    Anchor,
    /// The whole cell text.
    CellText,
    /// The whole cell text with a trailing driver code removed.
    NormalizedCellText,
}

impl TextStrategy {
    pub fn apply(&self, cell: ElementRef<'_>) -> String {
        match self {
            TextStrategy::NameFragments => {
                let first = selection_text(cell, &FIRST_NAME);
                let last = selection_text(cell, &LAST_NAME);
                [first, last]
                    .into_iter()
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            }
            TextStrategy::Anchor => selection_text(cell, &ANCHOR),
            TextStrategy::CellText => element_text(cell),
            TextStrategy::NormalizedCellText => normalize_name(&element_text(cell)),
        }
    }
}

/// A column and the strategies used to read it.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// 1-based, counted over the row's element children like `td:nth-child(n)`.
    pub column: usize,
    pub strategies: &'static [TextStrategy],
}

const PLAIN: &[TextStrategy] = &[TextStrategy::CellText];
const LINKED: &[TextStrategy] = &[TextStrategy::Anchor, TextStrategy::CellText];
const PERSON: &[TextStrategy] = &[TextStrategy::NameFragments, TextStrategy::NormalizedCellText];

impl FieldSpec {
    pub const fn new(column: usize, strategies: &'static [TextStrategy]) -> Self {
        Self { column, strategies }
    }

    /// Text of this field in `row`, or an empty string when no strategy finds any.
    pub fn read(&self, row: ElementRef<'_>) -> String {
        let Some(cell) = nth_cell(row, self.column) else {
            return String::new();
        };

        self.strategies
            .iter()
            .map(|strategy| strategy.apply(cell))
            .find(|text| !text.is_empty())
            .unwrap_or_default()
    }
}

/// `td:nth-child(n)`: the n-th element child of the row, if it is a `td`.
fn nth_cell(row: ElementRef<'_>, column: usize) -> Option<ElementRef<'_>> {
    if column == 0 {
        return None;
    }
    row.children()
        .filter_map(ElementRef::wrap)
        .nth(column - 1)
        .filter(|cell| cell.value().name() == "td")
}

pub struct DriverColumns {
    pub position: FieldSpec,
    pub name: FieldSpec,
    pub nationality: FieldSpec,
    pub team: FieldSpec,
    pub points: FieldSpec,
}

pub const DRIVER_COLUMNS: DriverColumns = DriverColumns {
    position: FieldSpec::new(1, PLAIN),
    name: FieldSpec::new(2, PERSON),
    nationality: FieldSpec::new(3, PLAIN),
    team: FieldSpec::new(4, PLAIN),
    points: FieldSpec::new(5, PLAIN),
};

pub struct TeamColumns {
    pub position: FieldSpec,
    pub name: FieldSpec,
    pub points: FieldSpec,
}

pub const TEAM_COLUMNS: TeamColumns = TeamColumns {
    position: FieldSpec::new(1, PLAIN),
    name: FieldSpec::new(2, LINKED),
    points: FieldSpec::new(3, PLAIN),
};

pub struct RaceColumns {
    pub grand_prix: FieldSpec,
    pub date: FieldSpec,
    pub winner: FieldSpec,
    pub car: FieldSpec,
    pub laps: FieldSpec,
    pub time: FieldSpec,
}

pub const RACE_COLUMNS: RaceColumns = RaceColumns {
    grand_prix: FieldSpec::new(1, LINKED),
    date: FieldSpec::new(2, PLAIN),
    winner: FieldSpec::new(3, PERSON),
    car: FieldSpec::new(4, PLAIN),
    laps: FieldSpec::new(5, PLAIN),
    time: FieldSpec::new(6, PLAIN),
};

/// Removes the `"flag of <country> "` prefix the flag image's alt text leaves behind.
///
/// `"flag of Bahrain Bahrain Grand Prix"` becomes `"Bahrain Grand Prix"`. Only the
/// first three space-separated tokens are dropped, so multi-word country names are
/// not fully removed.
pub fn strip_flag_prefix(grand_prix: &str) -> String {
    if grand_prix.to_lowercase().starts_with("flag of ") {
        let parts: Vec<&str> = grand_prix.splitn(4, ' ').collect();
        if parts.len() >= 4 {
            return parts[3].trim().to_string();
        }
    }
    grand_prix.to_string()
}

pub fn extract_drivers(document: &Document) -> Vec<DriverStanding> {
    let columns = &DRIVER_COLUMNS;
    let rows = locate_rows(document);
    let total = rows.len();

    let drivers: Vec<DriverStanding> = rows
        .into_iter()
        .filter_map(|row| {
            let position = columns.position.read(row);
            if position.is_empty() {
                return None;
            }
            Some(DriverStanding {
                position,
                name: columns.name.read(row),
                nationality: columns.nationality.read(row),
                team: columns.team.read(row),
                points: columns.points.read(row),
            })
        })
        .collect();

    log_dropped("driver", total, drivers.len());
    drivers
}

pub fn extract_constructors(document: &Document) -> Vec<ConstructorStanding> {
    let columns = &TEAM_COLUMNS;
    let rows = locate_rows(document);
    let total = rows.len();

    let teams: Vec<ConstructorStanding> = rows
        .into_iter()
        .filter_map(|row| {
            let position = columns.position.read(row);
            if position.is_empty() {
                return None;
            }
            Some(ConstructorStanding {
                position,
                name: columns.name.read(row),
                points: columns.points.read(row),
            })
        })
        .collect();

    log_dropped("constructor", total, teams.len());
    teams
}

pub fn extract_races(document: &Document) -> Vec<RaceResult> {
    let columns = &RACE_COLUMNS;
    let rows = locate_rows(document);
    let total = rows.len();

    let races: Vec<RaceResult> = rows
        .into_iter()
        .filter_map(|row| {
            let grand_prix = strip_flag_prefix(&columns.grand_prix.read(row));
            if grand_prix.is_empty() {
                return None;
            }
            Some(RaceResult {
                grand_prix,
                date: columns.date.read(row),
                winner: columns.winner.read(row),
                car: columns.car.read(row),
                laps: columns.laps.read(row),
                time: columns.time.read(row),
            })
        })
        .collect();

    log_dropped("race", total, races.len());
    races
}

fn log_dropped(kind: &str, total: usize, kept: usize) {
    if kept < total {
        tracing::debug!("Skipped {} of {} {} rows without a key field", total - kept, total, kind);
    }
}
