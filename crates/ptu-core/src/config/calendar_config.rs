//! Quarter-hour calendar configuration.

use serde::{Deserialize, Serialize};

/// How a calendar treats quarter-hour indices outside the slots of a local day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexPolicy {
    /// Keep the index and let it resolve into an adjacent day.
    #[default]
    Resolve,
    /// Reject indices outside `0..slots_in_day`.
    Reject,
}

/// Configuration for the quarter-hour time axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CalendarConfig {
    /// IANA zone name the axis is anchored to.
    pub zone: String,
    pub index_policy: IndexPolicy,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            zone: "Europe/Amsterdam".to_string(),
            index_policy: IndexPolicy::Resolve,
        }
    }
}
