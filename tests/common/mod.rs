#![allow(dead_code)]

use chrono::{Datelike, NaiveDate};
use fiscal_calendar::{FiscalYear, FourFourFiveCalendar};

/// 4-5-4 quarters: months 1 and 12 are four-week months
pub const PATTERN_454: [u32; 12] = [4, 5, 4, 4, 5, 4, 4, 5, 4, 4, 5, 4];

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn standard_year(first_day: NaiveDate) -> FiscalYear {
    FiscalYear::from_week_pattern(first_day, &PATTERN_454).unwrap()
}

/// 4-5-4 quarters with the leap week added to month 12 (five weeks)
pub const PATTERN_454_LEAP: [u32; 12] = [4, 5, 4, 4, 5, 4, 4, 5, 4, 4, 5, 5];

pub fn leap_year(first_day: NaiveDate) -> FiscalYear {
    FiscalYear::from_week_pattern(first_day, &PATTERN_454_LEAP).unwrap()
}

/// FY2023 (standard, 2023-01-01..=2023-12-30) and FY2025 (leap, 2023-12-31..=2025-01-04)
pub fn boundary_calendar() -> FourFourFiveCalendar {
    FourFourFiveCalendar::new(vec![standard_year(date(2023, 1, 1)), leap_year(date(2023, 12, 31))]).unwrap()
}

/// `count` back-to-back fiscal years from `first_day`, inserting a leap
/// week whenever a standard year would end in the same calendar year as
/// its predecessor, so year labels run without gaps or repeats.
pub fn contiguous_calendar(first_day: NaiveDate, count: usize) -> FourFourFiveCalendar {
    let mut years: Vec<FiscalYear> = Vec::with_capacity(count);
    let mut start = first_day;
    for _ in 0..count {
        let standard = standard_year(start);
        let year = match years.last() {
            Some(previous) if standard.end_year() == previous.end_year() => leap_year(start),
            _ => standard,
        };
        start = year.last_day().succ_opt().unwrap();
        years.push(year);
    }
    FourFourFiveCalendar::new(years).unwrap()
}

pub fn end_years(calendar: &FourFourFiveCalendar) -> Vec<i32> {
    use fiscal_calendar::CalendarEngine;
    calendar.years().iter().map(|year| year.last_day().year()).collect()
}
