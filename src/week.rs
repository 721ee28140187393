use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{CalendarError, DAYS_IN_WEEK, prelude::*};

/// A contiguous span of days inside a fiscal month.
///
/// Normally seven days long. A leap week may be longer (e.g. fourteen days
/// when the extra week is folded into the final week of the year), so the
/// only invariant is `first_day < last_day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "FirstDay = {first_day}, LastDay = {last_day}")]
#[serde(try_from = "WeekBounds", into = "WeekBounds")]
pub struct FiscalWeek {
    first_day: NaiveDate,
    last_day:  NaiveDate,
}

/// Unvalidated serde form of a [`FiscalWeek`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct WeekBounds {
    first_day: NaiveDate,
    last_day:  NaiveDate,
}

impl FiscalWeek {
    /// Creates a seven-day week starting on `first_day`.
    ///
    /// # Errors
    /// Returns `CalendarError::DateOverflow` if the last day is not representable.
    pub fn new(first_day: NaiveDate) -> Result<Self, CalendarError> {
        let last_day = first_day
            .checked_add_days(Days::new(u64::from(DAYS_IN_WEEK - 1)))
            .ok_or(CalendarError::DateOverflow)?;
        Ok(Self { first_day, last_day })
    }

    /// Creates a week with explicit bounds (both inclusive).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWeek` if `first_day >= last_day`.
    pub fn with_last_day(first_day: NaiveDate, last_day: NaiveDate) -> Result<Self, CalendarError> {
        if first_day >= last_day {
            return Err(CalendarError::InvalidWeek { first_day, last_day });
        }
        Ok(Self { first_day, last_day })
    }

    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub const fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Number of days in the week, both ends included
    pub fn days(&self) -> u32 {
        crate::span_days(self.first_day, self.last_day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day
    }
}

impl TryFrom<WeekBounds> for FiscalWeek {
    type Error = CalendarError;

    fn try_from(value: WeekBounds) -> Result<Self, Self::Error> {
        Self::with_last_day(value.first_day, value.last_day)
    }
}

impl From<FiscalWeek> for WeekBounds {
    fn from(week: FiscalWeek) -> Self {
        Self {
            first_day: week.first_day,
            last_day:  week.last_day,
        }
    }
}
