use serde::{Deserialize, Serialize};
use std::fmt;

/// 車手積分榜的一列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverStanding {
    pub position: String,
    pub name: String,
    pub nationality: String,
    pub team: String,
    pub points: String,
}

/// 車隊積分榜的一列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorStanding {
    pub position: String,
    pub name: String,
    pub points: String,
}

/// 單站比賽結果 (冠軍車手、車隊、圈數、總時間)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceResult {
    pub grand_prix: String,
    pub date: String,
    pub winner: String,
    pub car: String,
    pub laps: String,
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Drivers,
    Constructors,
    Races,
}

impl Category {
    /// Page name under `/en/results.html/<year>/`.
    pub fn page_slug(&self) -> &'static str {
        match self {
            Category::Drivers => "drivers",
            Category::Constructors => "team",
            Category::Races => "races",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Drivers => "driver",
            Category::Constructors => "constructor",
            Category::Races => "race",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A season year taken from the results listing, never later than the current year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResolvedYear(i32);

impl ResolvedYear {
    pub fn new(year: i32) -> Self {
        Self(year)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ResolvedYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_page_slugs() {
        assert_eq!(Category::Drivers.page_slug(), "drivers");
        assert_eq!(Category::Constructors.page_slug(), "team");
        assert_eq!(Category::Races.page_slug(), "races");
    }

    #[test]
    fn test_resolved_year_renders_as_four_digits() {
        assert_eq!(ResolvedYear::new(2024).to_string(), "2024");
    }
}
