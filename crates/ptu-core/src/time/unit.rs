//! Time units a [`PointInTime`](crate::traits::PointInTime) can be shifted or measured in.

use std::fmt;

use chrono::Duration;

use crate::errors::TemporalResult;
use crate::traits::PointInTime;

/// Average Gregorian year, as used for estimated month/year durations.
const SECONDS_PER_YEAR: i64 = 31_556_952;

/// A step on a time axis.
///
/// Units up to `HalfDays` have an exact length and add elapsed time.
/// `Days` and coarser add calendar amounts to the local date, so their
/// duration is only an estimate across DST transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    /// Fifteen minutes, see [`Quarters`](super::Quarters).
    Quarters,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
}

impl TimeUnit {
    /// Nominal length of one unit.
    pub fn duration(self) -> Duration {
        match self {
            TimeUnit::Nanos => Duration::nanoseconds(1),
            TimeUnit::Micros => Duration::microseconds(1),
            TimeUnit::Millis => Duration::milliseconds(1),
            TimeUnit::Seconds => Duration::seconds(1),
            TimeUnit::Minutes => Duration::minutes(1),
            TimeUnit::Quarters => Duration::minutes(15),
            TimeUnit::Hours => Duration::hours(1),
            TimeUnit::HalfDays => Duration::hours(12),
            TimeUnit::Days => Duration::days(1),
            TimeUnit::Weeks => Duration::weeks(1),
            TimeUnit::Months => Duration::seconds(SECONDS_PER_YEAR / 12),
            TimeUnit::Years => Duration::seconds(SECONDS_PER_YEAR),
        }
    }

    pub fn is_duration_estimated(self) -> bool {
        self.is_date_based()
    }

    pub fn is_time_based(self) -> bool {
        !self.is_date_based()
    }

    pub fn is_date_based(self) -> bool {
        matches!(
            self,
            TimeUnit::Days | TimeUnit::Weeks | TimeUnit::Months | TimeUnit::Years
        )
    }

    /// Units finer than a minute.
    pub fn is_sub_minute(self) -> bool {
        matches!(
            self,
            TimeUnit::Nanos | TimeUnit::Micros | TimeUnit::Millis | TimeUnit::Seconds
        )
    }

    /// Length in whole minutes, truncated for the estimated month and year.
    /// `None` for sub-minute units.
    pub fn whole_minutes(self) -> Option<i64> {
        if self.is_sub_minute() {
            None
        } else {
            Some(self.duration().num_minutes())
        }
    }

    /// The unit with the shorter nominal duration.
    pub fn finer(self, other: TimeUnit) -> TimeUnit {
        if self.duration() <= other.duration() {
            self
        } else {
            other
        }
    }

    /// Whole units from `start` to `end`.
    pub fn between<T: PointInTime>(self, start: &T, end: &T) -> TemporalResult<i64> {
        start.units_between(end, self)
    }

    /// `time` shifted by `amount` units.
    pub fn add_to<T: PointInTime>(self, time: &T, amount: i64) -> TemporalResult<T> {
        time.plus(amount, self)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeUnit::Nanos => "nanos",
            TimeUnit::Micros => "micros",
            TimeUnit::Millis => "millis",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Quarters => "quarters",
            TimeUnit::Hours => "hours",
            TimeUnit::HalfDays => "half-days",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finer_picks_shorter_duration() {
        assert_eq!(TimeUnit::Quarters.finer(TimeUnit::Hours), TimeUnit::Quarters);
        assert_eq!(TimeUnit::Days.finer(TimeUnit::Minutes), TimeUnit::Minutes);
        assert_eq!(TimeUnit::Nanos.finer(TimeUnit::Nanos), TimeUnit::Nanos);
    }

    #[test]
    fn whole_minutes_excludes_sub_minute_units() {
        assert_eq!(TimeUnit::Quarters.whole_minutes(), Some(15));
        assert_eq!(TimeUnit::Weeks.whole_minutes(), Some(10_080));
        assert_eq!(TimeUnit::Seconds.whole_minutes(), None);
        assert_eq!(TimeUnit::Months.whole_minutes(), Some(43_829));
        assert_eq!(TimeUnit::Years.whole_minutes(), Some(525_949));
    }

    #[test]
    fn date_based_units_are_estimated() {
        assert!(TimeUnit::Days.is_duration_estimated());
        assert!(!TimeUnit::HalfDays.is_duration_estimated());
        assert!(TimeUnit::Quarters.is_time_based());
    }
}
