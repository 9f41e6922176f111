//! Unified error type for the domain layer
//!
//! Value objects keep their own focused error types; this wrapper exists so
//! callers that mix concerns (catalog loading, table construction) can hold
//! one error without reaching for String or anyhow.

use thiserror::Error;

use crate::entities::DuplicateOverride;
use crate::value_objects::StatParseError;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Malformed stat string in authored content
    #[error("Stat parse error: {0}")]
    StatParse(#[from] StatParseError),

    /// Duplicate override row (data-integrity defect in authored content)
    #[error("Override integrity error: {0}")]
    OverrideIntegrity(#[from] DuplicateOverride),
}
