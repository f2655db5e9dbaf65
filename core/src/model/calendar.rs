use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{Datelike, Days, Duration, NaiveDate};
use serde::{Serialize, Serializer};

/// A calendar month, held as its first day so it is valid by construction.
///
/// Only months whose whole week partition is representable are accepted:
/// the Monday up to six days before the 1st and one stride past the last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| anyhow!("Invalid month: {:04}-{:02}", year, month))?;
        Self::from_first(first)
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Result<Self> {
        let first = date
            .with_day(1)
            .ok_or_else(|| anyhow!("Invalid date: {}", date))?;
        Self::from_first(first)
    }

    fn from_first(first: NaiveDate) -> Result<Self> {
        let month = Self { first };
        let leading = first.checked_sub_days(Days::new(6));
        let trailing = month.last_day().checked_add_days(Days::new(7));
        if leading.is_none() || trailing.is_none() {
            return Err(anyhow!(
                "Month out of range: {:04}-{:02}",
                first.year(),
                first.month()
            ));
        }
        Ok(month)
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        (28..=31)
            .rev()
            .find_map(|day| self.first.with_day(day))
            .unwrap_or(self.first)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last_day();
        self.first.iter_days().take_while(move |d| *d <= last)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| anyhow!("Expected YYYY-MM, got '{}'", s))?;
        let year: i32 = year.parse().map_err(|_| anyhow!("Invalid year in '{}'", s))?;
        let month: u32 = month.parse().map_err(|_| anyhow!("Invalid month in '{}'", s))?;
        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Number of tracked days per week (Monday through Saturday).
pub const WEEK_DAYS: usize = 6;

/// A Monday-start, Monday–Saturday window. Sunday is never tracked.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Week {
    pub index: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: Vec<NaiveDate>,
}

impl Week {
    pub fn starting(index: usize, start: NaiveDate) -> Self {
        let days: Vec<NaiveDate> = start.iter_days().take(WEEK_DAYS).collect();
        Self {
            index,
            start,
            end: start + Duration::days(WEEK_DAYS as i64 - 1),
            days,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }

    pub fn label(&self) -> String {
        format!("W{} {}~{}", self.index + 1, self.start.format("%m/%d"), self.end.format("%m/%d"))
    }
}
