//! Ptu: a quarter-hour slot of a local day in a given zone.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;

use crate::errors::{TemporalError, TemporalResult};
use crate::traits::PointInTime;

use super::zoned::{quarter_of_day, resolve_local_with, start_of_day};
use super::{Quarters, TimeField, TimeUnit};

/// The `index`-th quarter-hour of `date` in `zone`.
///
/// The absolute instant (local midnight plus `index` quarter-hours) is
/// computed once at construction. Equality, ordering and hashing use that
/// instant only: `Ptu::new(d, 96, z)` equals `Ptu::new(d + 1, 0, z)` on a
/// regular day even though the raw fields differ.
///
/// Indices count elapsed quarter-hours, so a spring-forward day has 92 slots
/// and a fall-back day has 100.
#[derive(Debug, Clone)]
pub struct Ptu {
    date: NaiveDate,
    index: i64,
    zone: Tz,
    instant: DateTime<Tz>,
}

impl Ptu {
    /// Build without validating `index`; indices outside the day resolve into
    /// an adjacent day.
    pub fn new(date: NaiveDate, index: i64, zone: Tz) -> TemporalResult<Self> {
        let midnight = start_of_day(&zone, date)?;
        let instant = midnight
            .checked_add_signed(Quarters::span(index)?)
            .ok_or_else(|| TemporalError::Overflow(format!("index {index} on {date}")))?;
        Ok(Self {
            date,
            index,
            zone,
            instant,
        })
    }

    /// Like [`new`](Self::new) but rejects indices outside `0..slots_in_day`.
    pub fn try_new(date: NaiveDate, index: i64, zone: Tz) -> TemporalResult<Self> {
        let slots = Self::slots_in_day(date, zone)?;
        if !(0..slots).contains(&index) {
            tracing::debug!(%date, index, slots, zone = %zone, "rejecting quarter-hour index");
            return Err(TemporalError::IndexOutOfRange { index, slots, date });
        }
        Self::new(date, index, zone)
    }

    /// The slot containing `instant`; any sub-quarter remainder is dropped.
    pub fn from_instant(instant: DateTime<Tz>) -> TemporalResult<Self> {
        let index = quarter_of_day(&instant)?;
        Self::new(instant.date_naive(), index, instant.timezone())
    }

    /// The slot of `zone` containing the UTC `instant`.
    pub fn from_utc(instant: DateTime<Utc>, zone: Tz) -> TemporalResult<Self> {
        Self::from_instant(instant.with_timezone(&zone))
    }

    /// Number of quarter-hours in the local day `date`.
    pub fn slots_in_day(date: NaiveDate, zone: Tz) -> TemporalResult<i64> {
        let next = date
            .succ_opt()
            .ok_or_else(|| TemporalError::Overflow(format!("day after {date}")))?;
        let start = start_of_day(&zone, date)?;
        let end = start_of_day(&zone, next)?;
        Ok((end - start).num_minutes() / Quarters::MINUTES)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn instant(&self) -> &DateTime<Tz> {
        &self.instant
    }

    /// The same slot with date and index re-derived from the instant.
    pub fn normalized(&self) -> TemporalResult<Self> {
        Self::from_instant(self.instant)
    }

    /// Set one calendar field on the local wall time and re-derive the slot.
    ///
    /// `QuarterOfDay` sets the index within the current local date.
    /// Minute, hour, day, month and year adjust the wall time and snap down
    /// to the containing quarter-hour, keeping the current offset when the new
    /// wall time falls in the repeated autumn hour. Other fields are not
    /// settable.
    pub fn with_field(&self, field: TimeField, value: i64) -> TemporalResult<Self> {
        let value = field.check(value)?;
        let local = self.instant.naive_local();
        let adjusted = match field {
            TimeField::QuarterOfDay => {
                return Self::new(local.date(), value, self.zone)?.normalized();
            }
            TimeField::MinuteOfHour => local.with_minute(value as u32),
            TimeField::HourOfDay => local.with_hour(value as u32),
            TimeField::DayOfMonth => local.with_day(value as u32),
            TimeField::MonthOfYear => local.with_month(value as u32),
            TimeField::Year => local.with_year(value as i32),
            _ => return Err(TemporalError::UnsupportedField { field }),
        }
        .ok_or(TemporalError::FieldValueOutOfRange { field, value })?;
        Self::from_instant(resolve_local_with(&self.zone, adjusted, self.instant.offset())?)
    }
}

impl PointInTime for Ptu {
    /// Quarter steps advance the resolved instant directly; every other unit
    /// goes through zoned arithmetic. The result is re-snapped, so sub-minute
    /// amounts only move the slot once they cross a quarter boundary.
    fn plus(&self, amount: i64, unit: TimeUnit) -> TemporalResult<Self> {
        let shifted = match unit {
            TimeUnit::Quarters => self
                .instant
                .checked_add_signed(Quarters::span(amount)?)
                .ok_or_else(|| TemporalError::Overflow(format!("{amount} {unit}")))?,
            _ => self.instant.plus(amount, unit)?,
        };
        Self::from_instant(shifted)
    }

    fn field_value(&self, field: TimeField) -> TemporalResult<i64> {
        // Slots start on whole minutes.
        if field.is_sub_minute() {
            return Ok(0);
        }
        self.instant.field_value(field)
    }

    /// Whole minutes between the instants divided by the unit's minute length.
    /// Months and years use their estimated length; sub-minute units are
    /// rejected.
    fn units_between(&self, other: &Self, unit: TimeUnit) -> TemporalResult<i64> {
        let per_unit = unit
            .whole_minutes()
            .ok_or(TemporalError::UnsupportedUnit { unit })?;
        let minutes = (other.instant - self.instant).num_minutes();
        Ok(minutes / per_unit)
    }
}

impl PartialEq for Ptu {
    fn eq(&self, other: &Self) -> bool {
        (self.date == other.date && self.index == other.index && self.zone == other.zone)
            || self.instant == other.instant
    }
}

impl Eq for Ptu {}

impl Hash for Ptu {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant.hash(state);
    }
}

impl PartialOrd for Ptu {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ptu {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl fmt::Display for Ptu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ptu(index={},time={})", self.index, self.instant.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Amsterdam;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fast_path_and_resolved_equality_agree() {
        let a = Ptu::new(day(2024, 1, 15), 96, Amsterdam).unwrap();
        let b = Ptu::new(day(2024, 1, 16), 0, Amsterdam).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_ne!(a.date(), b.date());
    }

    #[test]
    fn display_shows_index_and_instant() {
        let ptu = Ptu::new(day(2024, 1, 15), 36, Amsterdam).unwrap();
        assert_eq!(ptu.to_string(), "Ptu(index=36,time=2024-01-15T09:00:00+01:00)");
    }
}
