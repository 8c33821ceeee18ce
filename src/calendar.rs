//! Calendar utilities for month pacing
//!
//! Pure functions over calendar dates: days in a month, working days in a
//! month, working days elapsed up to a reference date, and day of month.
//! The free functions use a Monday–Friday week without holidays;
//! [`WorkCalendar`] applies a configured work week and holiday list.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{PacerError, PacerResult};

/// A validated calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthRef {
    year: i32,
    month: u32,
}

impl MonthRef {
    /// Create a month handle, failing with `InvalidDate` when `month` is outside 1..=12
    pub fn new(year: i32, month: u32) -> PacerResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(PacerError::InvalidDate(format!(
                "month {} is outside 1..=12",
                month
            )));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(PacerError::InvalidDate(format!(
                "year {} is out of range",
                year
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day() + Duration::days(i64::from(self.days()) - 1)
    }

    /// Number of calendar days in the month
    pub fn days(&self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> PacerResult<Self> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PacerError::InvalidDate(format!("expected YYYY-MM, got '{}'", s)))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PacerError::InvalidDate(format!("invalid year in '{}'", s)))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PacerError::InvalidDate(format!("invalid month in '{}'", s)))?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Build a date, failing with `InvalidDate` for out-of-range components
pub fn date_from_ymd(year: i32, month: u32, day: u32) -> PacerResult<NaiveDate> {
    let month_ref = MonthRef::new(year, month)?;
    if day == 0 || day > month_ref.days() {
        return Err(PacerError::InvalidDate(format!(
            "day {} is outside 1..={} for {}",
            day,
            month_ref.days(),
            month_ref
        )));
    }
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| PacerError::InvalidDate(format!("{}-{:02}-{:02}", year, month, day)))
}

/// Parse a "YYYY-MM-DD" string. Out-of-range components are reported
/// the same way as [`date_from_ymd`] reports them.
pub fn parse_date(s: &str) -> PacerResult<NaiveDate> {
    let s = s.trim();
    let malformed = || PacerError::InvalidDate(format!("expected YYYY-MM-DD, got '{}'", s));

    let (month, day) = s.rsplit_once('-').ok_or_else(malformed)?;
    if day.is_empty() || !day.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed());
    }
    let month = MonthRef::parse(month)?;
    let day: u32 = day.parse().map_err(|_| malformed())?;

    date_from_ymd(month.year(), month.month(), day)
}

/// Days in the given month (28..=31)
pub fn days_in_month(year: i32, month: u32) -> PacerResult<u32> {
    Ok(MonthRef::new(year, month)?.days())
}

/// Monday–Friday days in the given month
pub fn working_days_in_month(year: i32, month: u32) -> PacerResult<u32> {
    WorkCalendar::default().working_days_in_month(year, month)
}

/// Monday–Friday days from day 1 through `today`, clamped to the month
pub fn elapsed_working_days(year: i32, month: u32, today: NaiveDate) -> PacerResult<u32> {
    WorkCalendar::default().elapsed_working_days(year, month, today)
}

/// Day of month (1..=31)
pub fn day_of_month(today: NaiveDate) -> u32 {
    today.day()
}

/// Working-day rules: which weekdays count, and which dates are holidays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkCalendar {
    /// Indexed by `Weekday::num_days_from_monday`
    work_week: [bool; 7],
    holidays: BTreeSet<NaiveDate>,
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self::new(
            &[
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            [],
        )
    }
}

impl WorkCalendar {
    pub fn new(work_week: &[Weekday], holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        let mut days = [false; 7];
        for weekday in work_week {
            days[weekday.num_days_from_monday() as usize] = true;
        }
        Self {
            work_week: days,
            holidays: holidays.into_iter().collect(),
        }
    }

    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.work_week[date.weekday().num_days_from_monday() as usize]
            && !self.holidays.contains(&date)
    }

    /// Working days in the given month
    pub fn working_days_in_month(&self, year: i32, month: u32) -> PacerResult<u32> {
        let month_ref = MonthRef::new(year, month)?;
        Ok(self.count_between(month_ref.first_day(), month_ref.last_day()))
    }

    /// Working days from day 1 of the month through `today` inclusive.
    ///
    /// Returns 0 when `today` precedes the month and the full month count
    /// when `today` is past its end.
    pub fn elapsed_working_days(&self, year: i32, month: u32, today: NaiveDate) -> PacerResult<u32> {
        let month_ref = MonthRef::new(year, month)?;

        if today < month_ref.first_day() {
            return Ok(0);
        }

        let end = today.min(month_ref.last_day());
        Ok(self.count_between(month_ref.first_day(), end))
    }

    /// Working days in the month from `today` inclusive to the month end
    pub fn remaining_working_days(&self, year: i32, month: u32, today: NaiveDate) -> PacerResult<u32> {
        let total = self.working_days_in_month(year, month)?;
        let before_today = match today.pred_opt() {
            Some(yesterday) => self.elapsed_working_days(year, month, yesterday)?,
            None => 0,
        };
        Ok(total - before_today)
    }

    fn count_between(&self, from: NaiveDate, to: NaiveDate) -> u32 {
        from.iter_days()
            .take_while(|d| *d <= to)
            .filter(|d| self.is_working_day(*d))
            .count() as u32
    }
}
