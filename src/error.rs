use chrono::{NaiveDate, Weekday};

/// Error type for every fallible calendar operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A calendar was constructed without any fiscal years.
    #[error("A fiscal calendar requires at least one fiscal year")]
    EmptyCalendar,

    /// A fiscal month was constructed without any weeks.
    #[error("A fiscal month requires at least one week")]
    EmptyMonth,

    /// A fiscal year was constructed without any months.
    #[error("A fiscal year requires at least one month")]
    EmptyYear,

    /// A week whose first day is not strictly before its last day.
    #[error("Invalid fiscal week: first day {first_day} is not before last day {last_day}")]
    InvalidWeek {
        first_day: NaiveDate,
        last_day:  NaiveDate,
    },

    /// Month numbers of a fiscal year must run 1..=N without gaps.
    #[error("Fiscal year months must be numbered 1..=N: expected month {expected}, found {found}")]
    NonContiguousMonths { expected: u32, found: u32 },

    #[error("Date {date} is outside the supported range {min}..={max}")]
    DateOutOfRange {
        date: NaiveDate,
        min:  NaiveDate,
        max:  NaiveDate,
    },

    #[error("Year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("Month {month} is invalid for fiscal year {year} (must be 1-{max})")]
    MonthOutOfRange { year: i32, month: u32, max: u32 },

    #[error("Day {day} is invalid for fiscal month {year}-{month:02} (must be 1-{max})")]
    DayOutOfRange {
        year:  i32,
        month: u32,
        day:   u32,
        max:   u32,
    },

    #[error("Invalid {component}: {value}")]
    TimeOutOfRange { component: &'static str, value: u32 },

    /// No indexed fiscal year ends in the requested calendar year, or the
    /// indexed one does not cover the date being resolved.
    #[error("No fiscal year ends in calendar year {year}")]
    FiscalYearNotFound { year: i32 },

    #[error("First day of week must be {expected}, got {actual}")]
    WeekStartMismatch { expected: Weekday, actual: Weekday },

    #[error("Invalid era: {era}")]
    InvalidEra { era: u32 },

    /// Date arithmetic left the range chrono can represent.
    #[error("Date arithmetic overflowed")]
    DateOverflow,
}
