//! Error taxonomy for the conversion core
//!
//! Failures are values, not panics. This enum travels through the internal
//! call chain; the public entry points fold it into a failure-shaped
//! [`crate::ConversionResult`] so no error crosses the engine boundary.

use thiserror::Error;

/// Everything that can go wrong during a conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Value was absent, non-numeric, NaN, or infinite
    #[error("Value must be a valid number")]
    InvalidValue,

    /// A required request field was absent or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Category key is not in the registry
    #[error("Unknown category: {0}")]
    CategoryNotFound(String),

    /// Unit key is not in the requested category
    #[error("Unknown unit: {0}")]
    UnitNotFound(String),
}
