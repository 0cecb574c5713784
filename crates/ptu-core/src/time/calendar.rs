//! PtuCalendar: a zone-anchored factory for quarter-hour slots.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config::{CalendarConfig, IndexPolicy, PtuConfig};
use crate::errors::{ConfigError, PtuResult, TemporalResult};

use super::Ptu;

/// Builds [`Ptu`]s in one zone under one [`IndexPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PtuCalendar {
    zone: Tz,
    policy: IndexPolicy,
}

impl PtuCalendar {
    pub fn new(zone: Tz, policy: IndexPolicy) -> Self {
        Self { zone, policy }
    }

    /// Validate the configured zone name and build a calendar.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, ConfigError> {
        let zone: Tz = config
            .zone
            .parse()
            .map_err(|_| ConfigError::UnknownZone {
                name: config.zone.clone(),
            })?;
        tracing::debug!(zone = %zone, policy = ?config.index_policy, "calendar configured");
        Ok(Self::new(zone, config.index_policy))
    }

    /// Parse a TOML config and build the calendar from its `[calendar]` section.
    pub fn from_toml(toml_str: &str) -> PtuResult<Self> {
        let config = PtuConfig::from_toml(toml_str)?;
        Ok(Self::from_config(&config.calendar)?)
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn policy(&self) -> IndexPolicy {
        self.policy
    }

    /// The `index`-th slot of `date`, validated according to the policy.
    pub fn ptu(&self, date: NaiveDate, index: i64) -> TemporalResult<Ptu> {
        match self.policy {
            IndexPolicy::Resolve => Ptu::new(date, index, self.zone),
            IndexPolicy::Reject => Ptu::try_new(date, index, self.zone),
        }
    }

    /// The slot containing `instant`.
    pub fn at(&self, instant: DateTime<Utc>) -> TemporalResult<Ptu> {
        Ptu::from_utc(instant, self.zone)
    }

    pub fn slots_in_day(&self, date: NaiveDate) -> TemporalResult<i64> {
        Ptu::slots_in_day(date, self.zone)
    }

    /// Every slot of the local day `date`, in order.
    pub fn day(&self, date: NaiveDate) -> TemporalResult<Vec<Ptu>> {
        let slots = self.slots_in_day(date)?;
        (0..slots).map(|i| Ptu::new(date, i, self.zone)).collect()
    }
}
