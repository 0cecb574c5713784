//! The quarter-hour step.

use chrono::Duration;

use crate::errors::{TemporalError, TemporalResult};
use crate::traits::PointInTime;

use super::TimeUnit;

/// A fixed fifteen-minute calendar step.
///
/// Works on any [`PointInTime`], not only [`Ptu`](super::Ptu). Wherever a
/// [`TimeUnit`] is expected, `Quarters` converts to [`TimeUnit::Quarters`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Quarters;

impl Quarters {
    pub const MINUTES: i64 = 15;

    pub fn duration(self) -> Duration {
        Duration::minutes(Self::MINUTES)
    }

    /// Whole steps from `start` to `end`: minutes between, divided by 15,
    /// truncated toward zero.
    pub fn steps_between<T: PointInTime>(self, start: &T, end: &T) -> TemporalResult<i64> {
        Ok(start.units_between(end, TimeUnit::Minutes)? / Self::MINUTES)
    }

    /// `time` shifted by `steps` quarter-hours.
    pub fn advance<T: PointInTime>(self, time: &T, steps: i64) -> TemporalResult<T> {
        time.plus(steps, TimeUnit::Quarters)
    }

    /// Elapsed span of `steps` quarter-hours.
    pub(crate) fn span(steps: i64) -> TemporalResult<Duration> {
        steps
            .checked_mul(Self::MINUTES)
            .and_then(Duration::try_minutes)
            .ok_or_else(|| TemporalError::Overflow(format!("{steps} quarters")))
    }
}

impl From<Quarters> for TimeUnit {
    fn from(_: Quarters) -> Self {
        TimeUnit::Quarters
    }
}
