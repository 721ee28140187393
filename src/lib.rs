//! A 4-4-5 fiscal calendar.
//!
//! Fiscal years are assembled by the caller from [`FiscalMonth`]s of
//! [`FiscalWeek`]s and handed to a [`FourFourFiveCalendar`], which answers
//! calendar queries: date to fiscal (year, month, day) and back, month and
//! year arithmetic, day/week-of-year, and leap detection. A leap fiscal year
//! carries one extra week (371 days instead of 364), appended to its last
//! month.
//!
//! Fiscal years are labeled by the calendar year in which they end.
//!
//! ```
//! use chrono::NaiveDate;
//! use fiscal_calendar::{CalendarEngine, FISCAL_ERA, FiscalYear, FourFourFiveCalendar};
//!
//! let first_day = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
//! let year = FiscalYear::from_week_pattern(first_day, &[4, 4, 5, 4, 4, 5, 4, 4, 5, 4, 4, 5]).unwrap();
//! let calendar = FourFourFiveCalendar::new(vec![year]).unwrap();
//!
//! let date = NaiveDate::from_ymd_opt(2023, 3, 10).unwrap();
//! assert_eq!(calendar.get_year(date).unwrap(), 2023);
//! assert_eq!(calendar.get_month(date).unwrap(), 3);
//! assert_eq!(calendar.get_day_of_month(date).unwrap(), 13);
//! assert!(!calendar.is_leap_year(2023, FISCAL_ERA).unwrap());
//! assert_eq!(calendar.max_supported_date(), NaiveDate::from_ymd_opt(2023, 12, 30).unwrap());
//! ```

mod calendar;
mod consts;
mod error;
mod four_four_five;
mod month;
mod prelude;
mod week;
mod year;

#[cfg(test)]
mod test_utils;

pub use calendar::{CalendarEngine, FiscalCalendar};
pub use consts::*;
pub use error::CalendarError;
pub use four_four_five::{CalendarWeekRule, FourFourFiveCalendar};
pub use month::FiscalMonth;
pub use week::FiscalWeek;
pub use year::FiscalYear;

use chrono::NaiveDate;

/// Inclusive day count from `first` to `last`; 0 when `last < first`.
fn span_days(first: NaiveDate, last: NaiveDate) -> u32 {
    u32::try_from(last.signed_duration_since(first).num_days() + 1).unwrap_or(0)
}
