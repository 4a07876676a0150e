use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, Time, Weekday};
use time_tz::{OffsetError, PrimitiveDateTimeExt, TimeZone, ToTimezone, timezones};

use crate::{BudgetError, BudgetResult};

/// A budget week, Monday 00:00:00 through Sunday 23:59:59 local time.
///
/// `start` and `end` carry the offset in force at each bound, so a week
/// crossing a daylight saving change is 23 or 25 hours off a calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

impl Week {
    pub fn new(start: OffsetDateTime, end: OffsetDateTime) -> BudgetResult<Self> {
        if end < start {
            return Err(BudgetError::InvalidConfiguration(format!(
                "week ends ({end}) before it starts ({start})"
            )));
        }

        if start.weekday() != Weekday::Monday || start.time() != Time::MIDNIGHT {
            return Err(BudgetError::InvalidConfiguration(format!(
                "week must start on Monday 00:00:00, got {start}"
            )));
        }

        if end.weekday() != Weekday::Sunday || end.time().as_hms_nano() != (23, 59, 59, 0) {
            return Err(BudgetError::InvalidConfiguration(format!(
                "week must end on Sunday 23:59:59, got {end}"
            )));
        }

        let drift = (end - start) - (Duration::weeks(1) - Duration::seconds(1));
        if drift.abs() > Duration::hours(1) {
            return Err(BudgetError::InvalidConfiguration(format!(
                "week from {start} to {end} does not span seven days"
            )));
        }

        Ok(Self { start, end })
    }

    /// The week `at` falls in, in the time zone named `tz`.
    pub fn containing(at: OffsetDateTime, tz: &str) -> BudgetResult<Self> {
        let Some(zone) = timezones::get_by_name(tz) else {
            return Err(BudgetError::InvalidConfiguration(format!(
                "unknown time zone '{tz}'"
            )));
        };

        let local = at.to_timezone(zone);
        let days_since_monday = local.weekday().number_days_from_monday();
        let monday = local.date() - Duration::days(days_since_monday.into());
        let next_monday = monday + Duration::weeks(1);

        let start = midnight(monday, zone)?;
        let end = (midnight(next_monday, zone)? - Duration::seconds(1)).to_timezone(zone);

        Self::new(start, end)
    }

    /// Current week in the time zone named `tz`.
    pub fn current(tz: &str) -> BudgetResult<Self> {
        Self::containing(OffsetDateTime::now_utc(), tz)
    }

    /// Whether `at` falls in the week, `end` included down to its last second.
    pub fn contains(&self, at: OffsetDateTime) -> bool {
        at >= self.start && at < self.end + Duration::seconds(1)
    }
}

/// First instant of `date` in `zone`.
fn midnight<T: TimeZone>(date: Date, zone: &T) -> BudgetResult<OffsetDateTime> {
    let midnight = PrimitiveDateTime::new(date, Time::MIDNIGHT);

    match midnight.assume_timezone(zone) {
        Ok(at) | Err(OffsetError::Ambiguous(at, _)) => Ok(at),
        // Clocks jumped over midnight: the day begins at the jump, which is
        // midnight in the offset of the evening before.
        Err(OffsetError::Undefined) => match (midnight - Duration::hours(1)).assume_timezone(zone) {
            Ok(before) | Err(OffsetError::Ambiguous(before, _)) => {
                Ok(midnight.assume_offset(before.offset()))
            }
            Err(OffsetError::Undefined) => Err(BudgetError::InvalidConfiguration(format!(
                "no local midnight on {date}"
            ))),
        },
    }
}

pub fn is_known_timezone(tz: &str) -> bool {
    timezones::get_by_name(tz).is_some()
}
