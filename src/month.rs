use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{CalendarError, DAYS_IN_WEEK, FiscalWeek};

/// An ordered, non-empty run of [`FiscalWeek`]s.
///
/// Weeks are expected to be contiguous and chronological. That is the
/// caller's responsibility; bounds are read from the first and last week.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<FiscalWeek>", into = "Vec<FiscalWeek>")]
pub struct FiscalMonth {
    weeks: Vec<FiscalWeek>,
}

impl FiscalMonth {
    /// # Errors
    /// Returns `CalendarError::EmptyMonth` if `weeks` is empty.
    pub fn new(weeks: Vec<FiscalWeek>) -> Result<Self, CalendarError> {
        if weeks.is_empty() {
            return Err(CalendarError::EmptyMonth);
        }
        Ok(Self { weeks })
    }

    /// Creates a month of `week_count` consecutive seven-day weeks starting on `first_day`.
    ///
    /// # Errors
    /// Returns `CalendarError::EmptyMonth` if `week_count` is 0, or
    /// `CalendarError::DateOverflow` if a week is not representable.
    pub fn from_week_count(first_day: NaiveDate, week_count: u32) -> Result<Self, CalendarError> {
        let weeks = (0..week_count)
            .map(|n| {
                first_day
                    .checked_add_days(Days::new(u64::from(n * DAYS_IN_WEEK)))
                    .ok_or(CalendarError::DateOverflow)
                    .and_then(FiscalWeek::new)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(weeks)
    }

    pub fn weeks(&self) -> &[FiscalWeek] {
        &self.weeks
    }

    // `new` rejects empty week lists, so first/last always exist.
    fn first_week(&self) -> &FiscalWeek {
        &self.weeks[0]
    }

    fn last_week(&self) -> &FiscalWeek {
        &self.weeks[self.weeks.len() - 1]
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_week().first_day()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_week().last_day()
    }

    pub fn days_in_month(&self) -> u32 {
        crate::span_days(self.first_day(), self.last_day())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day() <= date && date <= self.last_day()
    }
}

impl TryFrom<Vec<FiscalWeek>> for FiscalMonth {
    type Error = CalendarError;

    fn try_from(weeks: Vec<FiscalWeek>) -> Result<Self, Self::Error> {
        Self::new(weeks)
    }
}

impl From<FiscalMonth> for Vec<FiscalWeek> {
    fn from(month: FiscalMonth) -> Self {
        month.weeks
    }
}

impl fmt::Display for FiscalMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FirstDay = {}, LastDay = {}", self.first_day(), self.last_day())
    }
}
