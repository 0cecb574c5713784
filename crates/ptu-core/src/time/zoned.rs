//! Zoned-instant helpers and the [`PointInTime`] impl for `chrono::DateTime`.
//!
//! Local date-times are resolved the usual way for zoned calendars. An
//! ambiguous local time (DST overlap) keeps a preferred offset when one is
//! given and valid, otherwise it picks the earlier instant. A local time that
//! falls in a gap is pushed forward by the length of the gap.

use chrono::{
    DateTime, Datelike, Days, Duration, FixedOffset, LocalResult, Months, NaiveDate, NaiveDateTime,
    NaiveTime, Offset, TimeZone, Timelike,
};

use crate::errors::{TemporalError, TemporalResult};
use crate::traits::PointInTime;

use super::{Quarters, TimeField, TimeUnit};

/// Resolve a local date-time in `tz` to an absolute instant.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> TemporalResult<DateTime<Tz>> {
    resolve(tz, local, None)
}

/// Like [`resolve_local`], but inside an overlap the instant carrying
/// `preferred` wins over the earlier one.
pub fn resolve_local_with<Tz: TimeZone>(
    tz: &Tz,
    local: NaiveDateTime,
    preferred: &Tz::Offset,
) -> TemporalResult<DateTime<Tz>> {
    resolve(tz, local, Some(preferred.fix()))
}

fn resolve<Tz: TimeZone>(
    tz: &Tz,
    local: NaiveDateTime,
    preferred: Option<FixedOffset>,
) -> TemporalResult<DateTime<Tz>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(resolved) => Ok(resolved),
        LocalResult::Ambiguous(earliest, latest) => {
            if preferred == Some(latest.offset().fix()) {
                Ok(latest)
            } else {
                Ok(earliest)
            }
        }
        LocalResult::None => {
            // Interpreting the local time with the offset in force before the
            // gap lands exactly gap-length past the requested wall time.
            let before = local
                .checked_sub_signed(Duration::days(1))
                .ok_or_else(|| TemporalError::Overflow(format!("resolving {local}")))?;
            let offset = tz.offset_from_utc_datetime(&before).fix();
            let utc = local
                .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
                .ok_or_else(|| TemporalError::Overflow(format!("resolving {local}")))?;
            Ok(tz.from_utc_datetime(&utc))
        }
    }
}

/// The first instant of `date` in `tz`.
pub fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> TemporalResult<DateTime<Tz>> {
    resolve_local(tz, date.and_time(NaiveTime::MIN))
}

/// Elapsed whole quarter-hours between the local midnight of `instant` and
/// `instant` itself.
pub fn quarter_of_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> TemporalResult<i64> {
    let midnight = start_of_day(&instant.timezone(), instant.date_naive())?;
    let minutes = (instant.clone() - midnight).num_minutes();
    Ok(minutes.div_euclid(Quarters::MINUTES))
}

/// Exact elapsed span of `amount` time-based units.
pub(crate) fn exact_span(amount: i64, unit: TimeUnit) -> TemporalResult<Duration> {
    let span = match unit {
        TimeUnit::Nanos => Some(Duration::nanoseconds(amount)),
        TimeUnit::Micros => Some(Duration::microseconds(amount)),
        TimeUnit::Millis => Duration::try_milliseconds(amount),
        TimeUnit::Seconds => Duration::try_seconds(amount),
        TimeUnit::Minutes => Duration::try_minutes(amount),
        TimeUnit::Quarters => return Quarters::span(amount),
        TimeUnit::Hours => Duration::try_hours(amount),
        TimeUnit::HalfDays => amount.checked_mul(12).and_then(Duration::try_hours),
        _ => return Err(TemporalError::UnsupportedUnit { unit }),
    };
    span.ok_or_else(|| TemporalError::Overflow(format!("{amount} {unit}")))
}

fn shift_days(local: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        local.checked_add_days(magnitude)
    } else {
        local.checked_sub_days(magnitude)
    }
}

fn shift_months(local: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        local.checked_add_months(magnitude)
    } else {
        local.checked_sub_months(magnitude)
    }
}

/// Calendar arithmetic on the local wall time, re-resolved in the same zone
/// keeping the current offset where the overlap allows it.
fn shift_calendar<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    amount: i64,
    unit: TimeUnit,
) -> TemporalResult<DateTime<Tz>> {
    let local = instant.naive_local();
    let shifted = match unit {
        TimeUnit::Days => shift_days(local, amount),
        TimeUnit::Weeks => amount.checked_mul(7).and_then(|d| shift_days(local, d)),
        TimeUnit::Months => shift_months(local, amount),
        TimeUnit::Years => amount.checked_mul(12).and_then(|m| shift_months(local, m)),
        _ => return Err(TemporalError::UnsupportedUnit { unit }),
    }
    .ok_or_else(|| TemporalError::Overflow(format!("{amount} {unit}")))?;
    resolve_local_with(&instant.timezone(), shifted, instant.offset())
}

impl<Tz: TimeZone> PointInTime for DateTime<Tz> {
    fn plus(&self, amount: i64, unit: TimeUnit) -> TemporalResult<Self> {
        if unit.is_date_based() {
            return shift_calendar(self, amount, unit);
        }
        let span = exact_span(amount, unit)?;
        self.clone()
            .checked_add_signed(span)
            .ok_or_else(|| TemporalError::Overflow(format!("{amount} {unit}")))
    }

    fn field_value(&self, field: TimeField) -> TemporalResult<i64> {
        let value = match field {
            TimeField::QuarterOfDay => return quarter_of_day(self),
            TimeField::MinuteOfHour => i64::from(self.minute()),
            TimeField::MinuteOfDay => i64::from(self.hour() * 60 + self.minute()),
            TimeField::HourOfDay => i64::from(self.hour()),
            TimeField::DayOfWeek => i64::from(self.weekday().number_from_monday()),
            TimeField::DayOfMonth => i64::from(self.day()),
            TimeField::DayOfYear => i64::from(self.ordinal()),
            TimeField::MonthOfYear => i64::from(self.month()),
            TimeField::Year => i64::from(self.year()),
            TimeField::EpochSecond => self.timestamp(),
            TimeField::OffsetSeconds => i64::from(self.offset().fix().local_minus_utc()),
            TimeField::SecondOfMinute => i64::from(self.second()),
            TimeField::NanoOfSecond => i64::from(self.nanosecond()),
        };
        Ok(value)
    }

    /// Elapsed-time based for every unit; months and years divide by their
    /// estimated length.
    fn units_between(&self, other: &Self, unit: TimeUnit) -> TemporalResult<i64> {
        let elapsed = other.clone() - self.clone();
        let overflow = || TemporalError::Overflow(format!("{unit} between instants"));
        match unit {
            TimeUnit::Nanos => elapsed.num_nanoseconds().ok_or_else(overflow),
            TimeUnit::Micros => elapsed.num_microseconds().ok_or_else(overflow),
            TimeUnit::Millis => Ok(elapsed.num_milliseconds()),
            _ => Ok(elapsed.num_seconds() / unit.duration().num_seconds()),
        }
    }
}
