//! Calendar fields readable from a [`PointInTime`](crate::traits::PointInTime).

use std::fmt;
use std::ops::RangeInclusive;

use crate::errors::{TemporalError, TemporalResult};

/// A calendar field of a zoned instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    /// Elapsed quarter-hours since the zone-local midnight. Long DST days
    /// reach 99.
    QuarterOfDay,
    MinuteOfHour,
    MinuteOfDay,
    HourOfDay,
    /// 1 (Monday) through 7 (Sunday).
    DayOfWeek,
    DayOfMonth,
    DayOfYear,
    MonthOfYear,
    Year,
    EpochSecond,
    /// Offset from UTC in seconds.
    OffsetSeconds,
    SecondOfMinute,
    NanoOfSecond,
}

impl TimeField {
    /// Outer bounds of valid values, independent of any particular date.
    pub fn range(self) -> RangeInclusive<i64> {
        match self {
            TimeField::QuarterOfDay => 0..=99,
            TimeField::MinuteOfHour => 0..=59,
            TimeField::MinuteOfDay => 0..=1_439,
            TimeField::HourOfDay => 0..=23,
            TimeField::DayOfWeek => 1..=7,
            TimeField::DayOfMonth => 1..=31,
            TimeField::DayOfYear => 1..=366,
            TimeField::MonthOfYear => 1..=12,
            TimeField::Year => -262_144..=262_143,
            TimeField::EpochSecond => i64::MIN..=i64::MAX,
            TimeField::OffsetSeconds => -86_399..=86_399,
            TimeField::SecondOfMinute => 0..=59,
            TimeField::NanoOfSecond => 0..=999_999_999,
        }
    }

    /// Fields finer than a minute.
    pub fn is_sub_minute(self) -> bool {
        matches!(self, TimeField::SecondOfMinute | TimeField::NanoOfSecond)
    }

    /// Returns `value` if it lies in [`range`](Self::range).
    pub fn check(self, value: i64) -> TemporalResult<i64> {
        if self.range().contains(&value) {
            Ok(value)
        } else {
            Err(TemporalError::FieldValueOutOfRange { field: self, value })
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeField::QuarterOfDay => "quarter-of-day",
            TimeField::MinuteOfHour => "minute-of-hour",
            TimeField::MinuteOfDay => "minute-of-day",
            TimeField::HourOfDay => "hour-of-day",
            TimeField::DayOfWeek => "day-of-week",
            TimeField::DayOfMonth => "day-of-month",
            TimeField::DayOfYear => "day-of-year",
            TimeField::MonthOfYear => "month-of-year",
            TimeField::Year => "year",
            TimeField::EpochSecond => "epoch-second",
            TimeField::OffsetSeconds => "offset-seconds",
            TimeField::SecondOfMinute => "second-of-minute",
            TimeField::NanoOfSecond => "nano-of-second",
        };
        f.write_str(name)
    }
}
