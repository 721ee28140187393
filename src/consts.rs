/// Days in a fiscal week
pub const DAYS_IN_WEEK: u32 = 7;

/// Days in a standard 52-week fiscal year
pub const DAYS_IN_STANDARD_YEAR: u32 = 364;

/// Days in a leap fiscal year (52 weeks plus one leap week)
pub const DAYS_IN_LEAP_YEAR: u32 = DAYS_IN_STANDARD_YEAR + DAYS_IN_WEEK;

/// Months in a conventional fiscal year
pub const MONTHS_IN_YEAR: u32 = 12;

/// Month number of the first fiscal month
pub const FIRST_MONTH: u32 = 1;

/// First day of a fiscal month
pub const MIN_DAY: u32 = 1;

/// First day-of-month that counts as a leap day in an expanded leap month.
/// Day 28 closes a normal four-week month.
pub const LEAP_DAY_FIRST: u32 = 28;
/// Last day-of-month that counts as a leap day
pub const LEAP_DAY_LAST: u32 = LEAP_DAY_FIRST + DAYS_IN_WEEK;

/// A fiscal year starting on or after this day of its calendar month is
/// labeled by the following calendar month
pub const EPOCH_MONTH_THRESHOLD_DAY: u32 = 15;

/// Era value meaning "whatever era is current"
pub const CURRENT_ERA: u32 = 0;
/// The one and only fiscal era
pub const FISCAL_ERA: u32 = 1;

/// Calendar month numbers used for epoch-month wraparound
pub(crate) const JANUARY: u32 = 1;
pub(crate) const DECEMBER: u32 = 12;

/// Time-of-day limits (exclusive) accepted by `to_date_time`
pub(crate) const HOURS_IN_DAY: u32 = 24;
pub(crate) const MINUTES_IN_HOUR: u32 = 60;
pub(crate) const SECONDS_IN_MINUTE: u32 = 60;
pub(crate) const MILLIS_IN_SECOND: u32 = 1000;
