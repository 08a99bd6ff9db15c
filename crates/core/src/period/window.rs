//! Month boundaries and day bucketing.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use super::error::PeriodError;

/// One calendar month in a business timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    year: i32,
    month: u32,
    timezone: Tz,
}

impl Period {
    /// Creates a UTC period for `year`/`month` (1 = January).
    ///
    /// # Errors
    ///
    /// Returns an error if the month is not in 1..=12 or the year cannot be
    /// represented.
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        Self::in_timezone(year, month, Tz::UTC)
    }

    /// Creates a period whose boundaries are local midnights in `timezone`.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is not in 1..=12 or the year cannot be
    /// represented.
    pub fn in_timezone(year: i32, month: u32, timezone: Tz) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        let period = Self {
            year,
            month,
            timezone,
        };
        // Both boundaries must exist on the calendar.
        first_of_month(year, month)?;
        let (next_year, next_month) = period.next_year_month();
        first_of_month(next_year, next_month)?;
        Ok(period)
    }

    /// The period containing `timestamp` in `timezone`.
    #[must_use]
    pub fn containing(timestamp: DateTime<Utc>, timezone: Tz) -> Self {
        let local = timestamp.with_timezone(&timezone);
        Self {
            year: local.year(),
            month: local.month(),
            timezone,
        }
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1-indexed.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Timezone defining the month boundaries.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// `YYYY-MM` label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// First calendar day of the month.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Number of days in the month (28-31).
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_between_firsts(self.year, self.month)
    }

    /// First instant of the month.
    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        local_midnight(self.timezone, self.first_day())
    }

    /// First instant of the following month (exclusive bound).
    #[must_use]
    pub fn end(&self) -> DateTime<Utc> {
        let (year, month) = self.next_year_month();
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MAX);
        local_midnight(self.timezone, first)
    }

    /// `[start, end)` as UTC instants.
    #[must_use]
    pub fn month_range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start(), self.end())
    }

    /// Returns true if `timestamp` falls in `[start, end)`.
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start() && timestamp < self.end()
    }

    /// 0-based day-of-month bucket for `timestamp`.
    ///
    /// Returns `None` for instants outside the period so callers can never
    /// index past the end of a per-day series.
    #[must_use]
    pub fn bucket_index(&self, timestamp: DateTime<Utc>) -> Option<usize> {
        if !self.contains(timestamp) {
            return None;
        }
        let day = timestamp.with_timezone(&self.timezone).day();
        usize::try_from(day - 1).ok()
    }

    /// The following month.
    #[must_use]
    pub fn next(&self) -> Self {
        let (year, month) = self.next_year_month();
        Self { year, month, ..*self }
    }

    /// The preceding month.
    #[must_use]
    pub fn previous(&self) -> Self {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        Self { year, month, ..*self }
    }

    fn next_year_month(&self) -> (i32, u32) {
        if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Number of days in `month` of `year`, leap years included.
///
/// Returns 0 for an invalid month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if (1..=12).contains(&month) {
        days_between_firsts(year, month)
    } else {
        0
    }
}

/// `[start, end)` of a UTC calendar month.
///
/// # Errors
///
/// Returns an error if the month is not in 1..=12.
pub fn month_range(year: i32, month: u32) -> Result<(DateTime<Utc>, DateTime<Utc>), PeriodError> {
    Period::new(year, month).map(|p| p.month_range())
}

/// Parses an IANA timezone name such as `Africa/Abidjan`.
///
/// # Errors
///
/// Returns an error if the name is unknown.
pub fn parse_timezone(name: &str) -> Result<Tz, PeriodError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| PeriodError::UnknownTimezone(name.to_string()))
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, PeriodError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(PeriodError::YearOutOfRange(year))
}

fn days_between_firsts(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => u32::try_from((next - first).num_days()).unwrap_or(0),
        _ => 0,
    }
}

/// First instant of `date` in `timezone`.
///
/// When a DST jump skips midnight, the day starts at the first valid local
/// time after it.
fn local_midnight(timezone: Tz, date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    timezone
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            timezone
                .from_local_datetime(&(naive + Duration::hours(1)))
                .earliest()
        })
        .map_or_else(|| Utc.from_utc_datetime(&naive), |dt| dt.with_timezone(&Utc))
}
