//! Fixture builders shared by the unit tests.

use chrono::{Days, NaiveDate};

use crate::{FiscalMonth, FiscalWeek, FiscalYear, FourFourFiveCalendar};

/// 4-5-4 quarters: months 1 and 12 are four-week months
pub const PATTERN_454: [u32; 12] = [4, 5, 4, 4, 5, 4, 4, 5, 4, 4, 5, 4];

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Fourteen-day closing week of a leap year
pub fn leap_week(first_day: NaiveDate) -> FiscalWeek {
    FiscalWeek::with_last_day(first_day, first_day + Days::new(13)).unwrap()
}

pub fn standard_year_454(first_day: NaiveDate) -> FiscalYear {
    FiscalYear::from_week_pattern(first_day, &PATTERN_454).unwrap()
}

/// 4-5-4 year whose final week is a fourteen-day leap week, making month 12
/// 35 days and the year 371 days.
pub fn leap_year_454(first_day: NaiveDate) -> FiscalYear {
    let standard = standard_year_454(first_day);
    let mut months: Vec<FiscalMonth> = standard.months().values().cloned().collect();
    let last = months.pop().unwrap();
    let mut weeks = last.weeks().to_vec();
    let closing = weeks.pop().unwrap();
    weeks.push(leap_week(closing.first_day()));
    months.push(FiscalMonth::new(weeks).unwrap());
    FiscalYear::from_months(months).unwrap()
}

/// FY2023: 2023-01-01..=2023-12-30 (standard), FY2025: 2023-12-31..=2025-01-04 (leap)
pub fn boundary_calendar() -> FourFourFiveCalendar {
    FourFourFiveCalendar::new(vec![
        standard_year_454(date(2023, 1, 1)),
        leap_year_454(date(2023, 12, 31)),
    ])
    .unwrap()
}

/// Boundary calendar followed by FY2026 (2025-01-05..=2026-01-03) and
/// FY2027 (2026-01-04..=2027-01-02), both standard.
pub fn multi_year_calendar() -> FourFourFiveCalendar {
    FourFourFiveCalendar::new(vec![
        standard_year_454(date(2023, 1, 1)),
        leap_year_454(date(2023, 12, 31)),
        standard_year_454(date(2025, 1, 5)),
        standard_year_454(date(2026, 1, 4)),
    ])
    .unwrap()
}
