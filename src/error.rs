//! Error types returned by the simulation engine.
//!
//! Three kinds suffice: invalid caller input, a numerical failure that the
//! math itself cannot recover from, and a resource ceiling. Nothing here is
//! retried; every failure is reported to the caller synchronously.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("validation failed: {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("numerical failure: {0}")]
    Numeric(String),

    #[error("resource limit exceeded: S*T*A = {actual} exceeds ceiling {ceiling}")]
    ResourceLimit { actual: u64, ceiling: u64 },
}

impl EngineError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        EngineError::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn numeric(reason: impl Into<String>) -> Self {
        EngineError::Numeric(reason.into())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
