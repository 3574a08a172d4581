use std::result::Result as StdResult;

use spendlens_domain::period::{DateRangeError, UnknownGranularity};
use thiserror::Error;

/// Error type for caller-input problems surfaced by the engine.
///
/// Every variant is synchronous and local: nothing here is transient, and
/// the engine holds no state that an error could corrupt.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid period: {0}")]
    InvalidPeriod(String),
    #[error("unknown granularity: {0}")]
    InvalidGranularity(String),
}

pub type Result<T> = StdResult<T, EngineError>;

impl From<UnknownGranularity> for EngineError {
    fn from(err: UnknownGranularity) -> Self {
        EngineError::InvalidGranularity(err.0)
    }
}

impl From<DateRangeError> for EngineError {
    fn from(err: DateRangeError) -> Self {
        EngineError::InvalidPeriod(err.to_string())
    }
}
