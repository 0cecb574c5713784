//! # ptu-core
//!
//! Time-axis foundation for quarter-hour profiles: the [`PointInTime`]
//! capability, time units and fields, the [`Quarters`] step, the [`Ptu`]
//! quarter-hour index, errors and configuration.

pub mod config;
pub mod errors;
pub mod time;
pub mod traits;

pub use config::PtuConfig;
pub use errors::{PtuError, PtuResult, TemporalError, TemporalResult};
pub use time::{Ptu, PtuCalendar, Quarters, TimeField, TimeUnit};
pub use traits::PointInTime;
