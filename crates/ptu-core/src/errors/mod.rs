mod config_error;
mod ptu_error;
mod temporal_error;

pub use config_error::ConfigError;
pub use ptu_error::{PtuError, PtuResult};
pub use temporal_error::{TemporalError, TemporalResult};
