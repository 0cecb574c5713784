use super::{ConfigError, TemporalError};

/// Top-level error type for the ptu crates.
/// Subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum PtuError {
    #[error("temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience type alias.
pub type PtuResult<T> = Result<T, PtuError>;
