use std::{collections::BTreeMap, fmt};

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{CalendarError, DAYS_IN_WEEK, FIRST_MONTH, FiscalMonth};

/// A fiscal year: months keyed by month number.
///
/// Month numbers always run `1..=N` with no gaps, so the last month is the
/// one keyed by the month count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u32, FiscalMonth>", into = "BTreeMap<u32, FiscalMonth>")]
pub struct FiscalYear {
    months: BTreeMap<u32, FiscalMonth>,
}

impl FiscalYear {
    /// Creates a fiscal year from an explicit month-number mapping.
    ///
    /// # Errors
    /// Returns `CalendarError::EmptyYear` if `months` is empty, or
    /// `CalendarError::NonContiguousMonths` if the keys are not exactly `1..=N`.
    pub fn new(months: BTreeMap<u32, FiscalMonth>) -> Result<Self, CalendarError> {
        if months.is_empty() {
            return Err(CalendarError::EmptyYear);
        }
        for (expected, &found) in (FIRST_MONTH..).zip(months.keys()) {
            if expected != found {
                return Err(CalendarError::NonContiguousMonths { expected, found });
            }
        }
        Ok(Self { months })
    }

    /// Creates a fiscal year numbering `months` from 1 in order.
    ///
    /// # Errors
    /// Returns `CalendarError::EmptyYear` if `months` is empty.
    pub fn from_months(months: Vec<FiscalMonth>) -> Result<Self, CalendarError> {
        Self::new((FIRST_MONTH..).zip(months).collect())
    }

    /// Lays out consecutive seven-day-week months from `first_day`, one
    /// month per entry in `weeks_per_month` (e.g. `[4, 4, 5, 4, 4, 5, ...]`).
    ///
    /// # Errors
    /// Returns `CalendarError::EmptyYear` if the pattern is empty,
    /// `CalendarError::EmptyMonth` if any entry is 0, or
    /// `CalendarError::DateOverflow` if the layout is not representable.
    pub fn from_week_pattern(
        first_day: NaiveDate,
        weeks_per_month: &[u32],
    ) -> Result<Self, CalendarError> {
        let mut months = Vec::with_capacity(weeks_per_month.len());
        let mut cursor = first_day;
        for &weeks in weeks_per_month {
            let month = FiscalMonth::from_week_count(cursor, weeks)?;
            cursor = cursor
                .checked_add_days(Days::new(u64::from(weeks * DAYS_IN_WEEK)))
                .ok_or(CalendarError::DateOverflow)?;
            months.push(month);
        }
        Self::from_months(months)
    }

    pub const fn months(&self) -> &BTreeMap<u32, FiscalMonth> {
        &self.months
    }

    pub fn month(&self, month: u32) -> Option<&FiscalMonth> {
        self.months.get(&month)
    }

    pub fn months_in_year(&self) -> u32 {
        // Month keys are 1..=N and N is tiny, so the count always fits.
        u32::try_from(self.months.len()).unwrap_or(u32::MAX)
    }

    // `new` guarantees keys 1..=N with N >= 1.
    fn first_month(&self) -> &FiscalMonth {
        &self.months[&FIRST_MONTH]
    }

    fn last_month(&self) -> &FiscalMonth {
        &self.months[&self.months_in_year()]
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_month().first_day()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_month().last_day()
    }

    pub fn days_in_year(&self) -> u32 {
        crate::span_days(self.first_day(), self.last_day())
    }

    /// The calendar year in which this fiscal year ends; the year's label
    /// and its key in the end-key index.
    pub fn end_year(&self) -> i32 {
        self.last_day().year()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day() <= date && date <= self.last_day()
    }
}

impl TryFrom<BTreeMap<u32, FiscalMonth>> for FiscalYear {
    type Error = CalendarError;

    fn try_from(months: BTreeMap<u32, FiscalMonth>) -> Result<Self, Self::Error> {
        Self::new(months)
    }
}

impl From<FiscalYear> for BTreeMap<u32, FiscalMonth> {
    fn from(year: FiscalYear) -> Self {
        year.months
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FirstDay = {}, LastDay = {}", self.first_day(), self.last_day())
    }
}
