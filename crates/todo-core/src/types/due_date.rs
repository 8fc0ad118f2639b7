//! Calendar due dates.
//!
//! This module provides [`DueDate`], a calendar date that is only ever
//! constructed from the strict `YYYY-MM-DD` text form.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{TaskField, ValidationError};

/// Length of the `YYYY-MM-DD` form in bytes.
const DATE_LEN: usize = 10;

/// A real calendar date written as `YYYY-MM-DD`.
///
/// Parsing is strict: exactly four year digits, two month digits and two day
/// digits separated by `-`, naming a date that exists (leap years included).
/// Years start at `0001`.
///
/// # Examples
///
/// ```
/// use todo_core::DueDate;
///
/// let date: DueDate = "2024-02-29".parse().unwrap();
/// assert_eq!(date.to_string(), "2024-02-29");
///
/// assert!("2023-02-29".parse::<DueDate>().is_err());
/// assert!("2024/02/01".parse::<DueDate>().is_err());
/// assert!("24-02-01".parse::<DueDate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Parses the strict `YYYY-MM-DD` form, returning `None` on any mismatch.
    #[must_use]
    pub fn parse_strict(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != DATE_LEN {
            return None;
        }

        let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
        if !shape_ok {
            return None;
        }

        // Shape is verified above, so these slices are all ASCII digits.
        let year: i32 = text[0..4].parse().ok()?;
        let month: u32 = text[5..7].parse().ok()?;
        let day: u32 = text[8..10].parse().ok()?;
        if year < 1 {
            return None;
        }

        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Returns the underlying calendar date.
    #[inline]
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    #[inline]
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DueDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s).ok_or_else(|| {
            ValidationError::new(TaskField::DueDate, "Due date must be in 'YYYY-MM-DD' format.")
        })
    }
}
