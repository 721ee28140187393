use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};
use tracing::{debug, warn};

use crate::consts::{
    CURRENT_ERA, DAYS_IN_LEAP_YEAR, DAYS_IN_WEEK, DECEMBER, EPOCH_MONTH_THRESHOLD_DAY, FISCAL_ERA,
    HOURS_IN_DAY, JANUARY, LEAP_DAY_FIRST, LEAP_DAY_LAST, MILLIS_IN_SECOND, MIN_DAY,
    MINUTES_IN_HOUR, SECONDS_IN_MINUTE,
};
use crate::{CalendarEngine, CalendarError, FiscalCalendar, FiscalMonth, FiscalYear, span_days};

/// Rule for deciding which week is the first of the year.
///
/// Accepted by [`FourFourFiveCalendar::get_week_of_year_with_rule`] but not
/// consulted: a fiscal year's first week always starts on its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarWeekRule {
    #[default]
    FirstDay,
    FirstFullWeek,
    FirstFourDayWeek,
}

/// A 4-4-5 style fiscal calendar over caller-built fiscal years.
///
/// Years are labeled by the calendar year they end in. All lookups by
/// year number go through an end-key index built once at construction.
#[derive(Debug, Clone)]
pub struct FourFourFiveCalendar {
    calendar:     FiscalCalendar,
    years_by_end: HashMap<i32, usize>,
}

/// Where a date falls: its fiscal year label, month number and day of month.
struct Position<'a> {
    end_year: i32,
    year:     &'a FiscalYear,
    month:    u32,
    day:      u32,
}

impl FourFourFiveCalendar {
    /// Builds the calendar and its end-key index.
    ///
    /// When two years end in the same calendar year the later one wins the
    /// index slot; the scan in [`Self::get_year`] still sees both.
    ///
    /// # Errors
    /// Returns `CalendarError::EmptyCalendar` if `years` is empty.
    pub fn new(years: Vec<FiscalYear>) -> Result<Self, CalendarError> {
        let calendar = FiscalCalendar::new(years)?;
        let mut years_by_end = HashMap::with_capacity(calendar.years().len());
        for (index, year) in calendar.years().iter().enumerate() {
            if let Some(previous) = years_by_end.insert(year.end_year(), index) {
                warn!(
                    end_year = year.end_year(),
                    replaced = %calendar.years()[previous],
                    kept = %year,
                    "two fiscal years end in the same calendar year"
                );
            }
        }
        debug!(
            years = calendar.years().len(),
            min = %calendar.min_supported_date(),
            max = %calendar.max_supported_date(),
            "built 4-4-5 fiscal calendar"
        );
        Ok(Self { calendar, years_by_end })
    }

    /// Fiscal year ending in calendar year `end_year`, via the end-key index
    pub fn fiscal_year(&self, end_year: i32) -> Option<&FiscalYear> {
        self.years_by_end
            .get(&end_year)
            .map(|&index| &self.calendar.years()[index])
    }

    /// The day of the week every fiscal week starts on
    pub fn week_start(&self) -> Weekday {
        self.min_supported_date().weekday()
    }

    /// Eras this calendar knows: only [`FISCAL_ERA`]
    pub const fn eras(&self) -> &'static [u32] {
        &[FISCAL_ERA]
    }

    /// # Errors
    /// Returns `CalendarError::DateOutOfRange` if `date` is outside the calendar.
    pub fn get_era(&self, date: NaiveDate) -> Result<u32, CalendarError> {
        self.check_date(date)?;
        Ok(FISCAL_ERA)
    }

    /// # Errors
    /// Returns `CalendarError::DateOutOfRange` if `date` is outside the calendar.
    pub fn get_day_of_week(&self, date: NaiveDate) -> Result<Weekday, CalendarError> {
        self.check_date(date)?;
        Ok(date.weekday())
    }

    /// Returns the label (end calendar year) of the fiscal year containing `date`.
    ///
    /// Years are scanned in the order supplied. A date inside the supported
    /// range but covered by no year (a gap between years) falls back to its
    /// own calendar year.
    ///
    /// # Errors
    /// Returns `CalendarError::DateOutOfRange` if `date` is outside the calendar.
    pub fn get_year(&self, date: NaiveDate) -> Result<i32, CalendarError> {
        self.check_date(date)?;
        let year = self
            .years()
            .iter()
            .find(|year| year.contains(date))
            .map_or_else(
                || {
                    warn!(%date, "no fiscal year covers date; using its calendar year");
                    date.year()
                },
                FiscalYear::end_year,
            );
        Ok(year)
    }

    /// Fiscal year containing `date`, resolved through the end-key index.
    ///
    /// The indexed year must itself cover `date`; a year shadowed in the
    /// index by a later one ending in the same calendar year is not found.
    ///
    /// # Errors
    /// Returns `CalendarError::DateOutOfRange` if `date` is outside the calendar,
    /// or `CalendarError::FiscalYearNotFound` if the index has no year covering `date`.
    pub fn fiscal_year_containing(&self, date: NaiveDate) -> Result<&FiscalYear, CalendarError> {
        let year = self.get_year(date)?;
        self.fiscal_year(year)
            .filter(|fiscal_year| fiscal_year.contains(date))
            .ok_or(CalendarError::FiscalYearNotFound { year })
    }

    /// # Errors
    /// See [`Self::fiscal_year_containing`].
    pub fn get_month(&self, date: NaiveDate) -> Result<u32, CalendarError> {
        Ok(self.locate(date)?.month)
    }

    /// # Errors
    /// See [`Self::fiscal_year_containing`].
    pub fn get_day_of_month(&self, date: NaiveDate) -> Result<u32, CalendarError> {
        Ok(self.locate(date)?.day)
    }

    /// # Errors
    /// See [`Self::fiscal_year_containing`].
    pub fn get_day_of_year(&self, date: NaiveDate) -> Result<u32, CalendarError> {
        let year = self.fiscal_year_containing(date)?;
        Ok(span_days(year.first_day(), date))
    }

    /// One-based week of the fiscal year, counting seven-day steps from the
    /// year's first day. A 364-day year ends in week 52, a 371-day year in week 53.
    ///
    /// # Errors
    /// See [`Self::fiscal_year_containing`].
    pub fn get_week_of_year(&self, date: NaiveDate) -> Result<u32, CalendarError> {
        let year = self.fiscal_year_containing(date)?;
        Ok(span_days(year.first_day(), date).saturating_sub(1) / DAYS_IN_WEEK + 1)
    }

    /// Same as [`Self::get_week_of_year`], checking that `first_day_of_week`
    /// is the calendar's own week start.
    ///
    /// # Errors
    /// Returns `CalendarError::WeekStartMismatch` if `first_day_of_week` differs
    /// from [`Self::week_start`], otherwise see [`Self::get_week_of_year`].
    pub fn get_week_of_year_with_rule(
        &self,
        date: NaiveDate,
        _rule: CalendarWeekRule,
        first_day_of_week: Weekday,
    ) -> Result<u32, CalendarError> {
        let expected = self.week_start();
        if first_day_of_week != expected {
            return Err(CalendarError::WeekStartMismatch {
                expected,
                actual: first_day_of_week,
            });
        }
        self.get_week_of_year(date)
    }

    /// Moves `date` by `months` fiscal months.
    ///
    /// Whole years are applied first via [`Self::add_years`], then the
    /// remaining months wrap into neighbouring years. The day of month is
    /// kept, clamped to the length of each target month.
    ///
    /// # Errors
    /// Returns `CalendarError::DateOutOfRange` if `date` is outside the calendar,
    /// or `CalendarError::FiscalYearNotFound` if a target year is not indexed.
    pub fn add_months(&self, date: NaiveDate, months: i32) -> Result<NaiveDate, CalendarError> {
        let months_in_year = i64::from(self.locate(date)?.year.months_in_year());
        let whole_years = i64::from(months) / months_in_year;
        let remainder = i64::from(months) % months_in_year;

        let date = if whole_years == 0 {
            date
        } else {
            let years = i32::try_from(whole_years).map_err(|_| CalendarError::DateOverflow)?;
            self.add_years(date, years)?
        };
        if remainder == 0 {
            return Ok(date);
        }

        let position = self.locate(date)?;
        let months_in_year = i64::from(position.year.months_in_year());
        let index = i64::from(position.month) - 1 + remainder;
        let year = i64::from(position.end_year) + index.div_euclid(months_in_year);
        let year = i32::try_from(year).map_err(|_| CalendarError::DateOverflow)?;
        let month = u32::try_from(index.rem_euclid(months_in_year) + 1)
            .map_err(|_| CalendarError::DateOverflow)?;
        self.clamped_date(year, month, position.day)
    }

    /// Moves `date` by `years` fiscal years, keeping month and day of month
    /// (the day clamped to the target month's length).
    ///
    /// # Errors
    /// Same as [`Self::add_months`], plus `CalendarError::MonthOutOfRange` if
    /// the target year has fewer months.
    pub fn add_years(&self, date: NaiveDate, years: i32) -> Result<NaiveDate, CalendarError> {
        let position = self.locate(date)?;
        let year = position
            .end_year
            .checked_add(years)
            .ok_or(CalendarError::DateOverflow)?;
        self.clamped_date(year, position.month, position.day)
    }

    /// # Errors
    /// Returns `CalendarError::DateOutOfRange` if `date` or the result is outside the calendar.
    pub fn add_weeks(&self, date: NaiveDate, weeks: i32) -> Result<NaiveDate, CalendarError> {
        self.add_days(date, i64::from(weeks) * i64::from(DAYS_IN_WEEK))
    }

    /// # Errors
    /// Returns `CalendarError::DateOutOfRange` if `date` or the result is outside the calendar.
    pub fn add_days(&self, date: NaiveDate, days: i64) -> Result<NaiveDate, CalendarError> {
        self.check_date(date)?;
        let result = TimeDelta::try_days(days)
            .and_then(|delta| date.checked_add_signed(delta))
            .ok_or(CalendarError::DateOverflow)?;
        self.check_date(result)?;
        Ok(result)
    }

    /// # Errors
    /// Returns `CalendarError::InvalidEra`, `CalendarError::YearOutOfRange`,
    /// `CalendarError::FiscalYearNotFound` or `CalendarError::MonthOutOfRange`.
    pub fn get_days_in_month(&self, year: i32, month: u32, era: u32) -> Result<u32, CalendarError> {
        check_era(era)?;
        Ok(self.fiscal_month(year, month)?.days_in_month())
    }

    /// # Errors
    /// Returns `CalendarError::InvalidEra`, `CalendarError::YearOutOfRange`
    /// or `CalendarError::FiscalYearNotFound`.
    pub fn get_days_in_year(&self, year: i32, era: u32) -> Result<u32, CalendarError> {
        check_era(era)?;
        Ok(self.year_by_label(year)?.days_in_year())
    }

    /// # Errors
    /// Same as [`Self::get_days_in_year`].
    pub fn get_months_in_year(&self, year: i32, era: u32) -> Result<u32, CalendarError> {
        check_era(era)?;
        Ok(self.year_by_label(year)?.months_in_year())
    }

    /// A leap year carries an extra week: 371 days instead of 364.
    ///
    /// # Errors
    /// Same as [`Self::get_days_in_year`].
    pub fn is_leap_year(&self, year: i32, era: u32) -> Result<bool, CalendarError> {
        Ok(self.get_days_in_year(year, era)? == DAYS_IN_LEAP_YEAR)
    }

    /// Only the last month of a leap year is a leap month.
    ///
    /// # Errors
    /// Same as [`Self::get_days_in_month`].
    pub fn is_leap_month(&self, year: i32, month: u32, era: u32) -> Result<bool, CalendarError> {
        check_era(era)?;
        self.fiscal_month(year, month)?;
        let months_in_year = self.get_months_in_year(year, era)?;
        Ok(month == months_in_year && self.is_leap_year(year, era)?)
    }

    /// Month number of the leap month, if `year` is a leap year
    ///
    /// # Errors
    /// Same as [`Self::get_days_in_year`].
    pub fn get_leap_month(&self, year: i32, era: u32) -> Result<Option<u32>, CalendarError> {
        if self.is_leap_year(year, era)? {
            Ok(Some(self.get_months_in_year(year, era)?))
        } else {
            Ok(None)
        }
    }

    /// Days 28 through 35 of a leap month are leap days.
    ///
    /// # Errors
    /// Same as [`Self::get_days_in_month`], plus `CalendarError::DayOutOfRange`
    /// if `day` is not a day of that month.
    pub fn is_leap_day(&self, year: i32, month: u32, day: u32, era: u32) -> Result<bool, CalendarError> {
        check_era(era)?;
        check_day(year, month, day, self.fiscal_month(year, month)?)?;
        Ok((LEAP_DAY_FIRST..=LEAP_DAY_LAST).contains(&day) && self.is_leap_month(year, month, era)?)
    }

    /// Checks if fiscal year `year` has a month numbered `month`
    pub fn is_valid_month(&self, year: i32, month: u32) -> bool {
        self.fiscal_month(year, month).is_ok()
    }

    /// Date of fiscal `year`/`month`/`day`.
    ///
    /// # Errors
    /// Same as [`Self::is_leap_day`].
    pub fn to_date(&self, year: i32, month: u32, day: u32, era: u32) -> Result<NaiveDate, CalendarError> {
        check_era(era)?;
        let fiscal_month = self.fiscal_month(year, month)?;
        check_day(year, month, day, fiscal_month)?;
        fiscal_month
            .first_day()
            .checked_add_days(Days::new(u64::from(day - MIN_DAY)))
            .ok_or(CalendarError::DateOverflow)
    }

    /// Date and time of fiscal `year`/`month`/`day` at the given time of day.
    ///
    /// # Errors
    /// Same as [`Self::to_date`], plus `CalendarError::TimeOutOfRange` for a
    /// time component outside its range.
    #[allow(clippy::too_many_arguments)]
    pub fn to_date_time(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
        era: u32,
    ) -> Result<NaiveDateTime, CalendarError> {
        let date = self.to_date(year, month, day, era)?;
        check_time("hour", hour, HOURS_IN_DAY)?;
        check_time("minute", minute, MINUTES_IN_HOUR)?;
        check_time("second", second, SECONDS_IN_MINUTE)?;
        check_time("millisecond", millisecond, MILLIS_IN_SECOND)?;
        let time = NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond)
            .ok_or(CalendarError::DateOverflow)?;
        Ok(date.and_time(time))
    }

    fn check_date(&self, date: NaiveDate) -> Result<(), CalendarError> {
        if self.contains(date) {
            Ok(())
        } else {
            Err(CalendarError::DateOutOfRange {
                date,
                min: self.min_supported_date(),
                max: self.max_supported_date(),
            })
        }
    }

    /// Fiscal year labeled `year`, range-checked against the supported span
    fn year_by_label(&self, year: i32) -> Result<&FiscalYear, CalendarError> {
        let min = self.min_supported_date().year();
        let max = self.max_supported_date().year();
        if !(min..=max).contains(&year) {
            return Err(CalendarError::YearOutOfRange { year, min, max });
        }
        self.fiscal_year(year)
            .ok_or(CalendarError::FiscalYearNotFound { year })
    }

    fn fiscal_month(&self, year: i32, month: u32) -> Result<&FiscalMonth, CalendarError> {
        let fiscal_year = self.year_by_label(year)?;
        fiscal_year
            .month(month)
            .ok_or(CalendarError::MonthOutOfRange {
                year,
                month,
                max: fiscal_year.months_in_year(),
            })
    }

    fn locate(&self, date: NaiveDate) -> Result<Position<'_>, CalendarError> {
        let year = self.fiscal_year_containing(date)?;
        let end_year = year.end_year();
        let (&month, fiscal_month) = year
            .months()
            .iter()
            .find(|(_, month)| month.last_day() >= date)
            .ok_or(CalendarError::DateOutOfRange {
                date,
                min: year.first_day(),
                max: year.last_day(),
            })?;
        Ok(Position {
            end_year,
            year,
            month,
            day: span_days(fiscal_month.first_day(), date),
        })
    }

    /// `day` of fiscal `year`/`month`, or the month's last day if shorter
    fn clamped_date(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
        let fiscal_year = self
            .fiscal_year(year)
            .ok_or(CalendarError::FiscalYearNotFound { year })?;
        let fiscal_month = fiscal_year
            .month(month)
            .ok_or(CalendarError::MonthOutOfRange {
                year,
                month,
                max: fiscal_year.months_in_year(),
            })?;
        let day = day.clamp(MIN_DAY, fiscal_month.days_in_month());
        fiscal_month
            .first_day()
            .checked_add_days(Days::new(u64::from(day - MIN_DAY)))
            .ok_or(CalendarError::DateOverflow)
    }
}

impl CalendarEngine for FourFourFiveCalendar {
    fn fiscal_calendar(&self) -> &FiscalCalendar {
        &self.calendar
    }

    /// A first year starting on or after the 15th is labeled by the next month.
    fn epoch_month(&self) -> u32 {
        let first_day = self.min_supported_date();
        if first_day.day() < EPOCH_MONTH_THRESHOLD_DAY {
            first_day.month()
        } else if first_day.month() == DECEMBER {
            JANUARY
        } else {
            first_day.month() + 1
        }
    }
}

const fn check_era(era: u32) -> Result<(), CalendarError> {
    match era {
        CURRENT_ERA | FISCAL_ERA => Ok(()),
        _ => Err(CalendarError::InvalidEra { era }),
    }
}

fn check_day(year: i32, month: u32, day: u32, fiscal_month: &FiscalMonth) -> Result<(), CalendarError> {
    let max = fiscal_month.days_in_month();
    if (MIN_DAY..=max).contains(&day) {
        Ok(())
    } else {
        Err(CalendarError::DayOutOfRange { year, month, day, max })
    }
}

const fn check_time(component: &'static str, value: u32, limit: u32) -> Result<(), CalendarError> {
    if value < limit {
        Ok(())
    } else {
        Err(CalendarError::TimeOutOfRange { component, value })
    }
}
