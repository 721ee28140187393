use chrono::{Datelike, NaiveDate};

use crate::{CalendarError, FiscalYear};

/// The fiscal years a calendar spans, in the order supplied.
///
/// Holds the data every fiscal calendar scheme shares. Arithmetic lives in
/// the concrete schemes (see [`crate::FourFourFiveCalendar`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiscalCalendar {
    years: Vec<FiscalYear>,
}

impl FiscalCalendar {
    /// # Errors
    /// Returns `CalendarError::EmptyCalendar` if `years` is empty.
    pub fn new(years: Vec<FiscalYear>) -> Result<Self, CalendarError> {
        if years.is_empty() {
            return Err(CalendarError::EmptyCalendar);
        }
        Ok(Self { years })
    }

    pub fn years(&self) -> &[FiscalYear] {
        &self.years
    }

    // `new` rejects an empty year list.
    fn first_year(&self) -> &FiscalYear {
        &self.years[0]
    }

    fn last_year(&self) -> &FiscalYear {
        &self.years[self.years.len() - 1]
    }

    /// First day of the first fiscal year
    pub fn min_supported_date(&self) -> NaiveDate {
        self.first_year().first_day()
    }

    /// Last day of the last fiscal year
    pub fn max_supported_date(&self) -> NaiveDate {
        self.last_year().last_day()
    }

    /// Calendar month in which the first fiscal year begins
    pub fn epoch_month(&self) -> u32 {
        self.min_supported_date().month()
    }
}

/// A fiscal calendar scheme built over a [`FiscalCalendar`].
///
/// Schemes expose the shared bounds and may relabel the epoch month.
pub trait CalendarEngine {
    fn fiscal_calendar(&self) -> &FiscalCalendar;

    fn years(&self) -> &[FiscalYear] {
        self.fiscal_calendar().years()
    }

    fn min_supported_date(&self) -> NaiveDate {
        self.fiscal_calendar().min_supported_date()
    }

    fn max_supported_date(&self) -> NaiveDate {
        self.fiscal_calendar().max_supported_date()
    }

    fn epoch_month(&self) -> u32 {
        self.fiscal_calendar().epoch_month()
    }

    /// Checks if `date` lies within the supported range
    fn contains(&self, date: NaiveDate) -> bool {
        self.min_supported_date() <= date && date <= self.max_supported_date()
    }
}

impl CalendarEngine for FiscalCalendar {
    fn fiscal_calendar(&self) -> &FiscalCalendar {
        self
    }
}
