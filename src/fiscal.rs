//! US federal fiscal periods.
//!
//! Fiscal year N runs from October 1 of calendar year N-1 through September 30
//! of year N. Quarter 1 is therefore October to December of the previous
//! calendar year.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// First fiscal year offered for selection.
pub const FIRST_FISCAL_YEAR: i32 = 2015;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Quarter {
    #[default]
    All,
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub fn all() -> &'static [Quarter] {
        &[Self::All, Self::Q1, Self::Q2, Self::Q3, Self::Q4]
    }

    pub fn index(&self) -> u8 {
        match self {
            Self::All => 0,
            Self::Q1 => 1,
            Self::Q2 => 2,
            Self::Q3 => 3,
            Self::Q4 => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Quarters",
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        }
    }
}

impl TryFrom<u8> for Quarter {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::All),
            1 => Ok(Self::Q1),
            2 => Ok(Self::Q2),
            3 => Ok(Self::Q3),
            4 => Ok(Self::Q4),
            other => Err(format!("quarter must be between 0 and 4, got {}", other)),
        }
    }
}

impl Serialize for Quarter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.index())
    }
}

impl<'de> Deserialize<'de> for Quarter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Quarter::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start_iso(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_iso(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// The shared part of two ranges, if any.
    pub fn overlap(&self, other: &DateRange) -> Option<DateRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(DateRange { start, end })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalPeriod {
    pub year: i32,
    pub quarter: Quarter,
}

impl FiscalPeriod {
    pub fn new(year: i32, quarter: Quarter) -> Self {
        Self { year, quarter }
    }

    pub fn whole_year(year: i32) -> Self {
        Self::new(year, Quarter::All)
    }

    pub fn date_range(&self) -> DateRange {
        let y = self.year;
        let (start, end) = match self.quarter {
            Quarter::Q1 => (ymd(y - 1, 10, 1), ymd(y - 1, 12, 31)),
            Quarter::Q2 => (ymd(y, 1, 1), ymd(y, 3, 31)),
            Quarter::Q3 => (ymd(y, 4, 1), ymd(y, 6, 30)),
            Quarter::Q4 => (ymd(y, 7, 1), ymd(y, 9, 30)),
            Quarter::All => (ymd(y - 1, 10, 1), ymd(y, 9, 30)),
        };
        DateRange { start, end }
    }

    /// Label used by the period selector, e.g. "FY 2024 - Q2".
    pub fn label(&self) -> String {
        format!("FY {} - {}", self.year, self.quarter.label())
    }
}

impl fmt::Display for FiscalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// The fiscal year `today` falls in.
pub fn current_fiscal_year(today: NaiveDate) -> i32 {
    if today.month() >= 10 {
        today.year() + 1
    } else {
        today.year()
    }
}

/// Selectable fiscal years, newest first.
pub fn available_years(current: i32) -> Vec<i32> {
    (FIRST_FISCAL_YEAR..=current).rev().collect()
}

// Every (month, day) used above is valid in every year.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
