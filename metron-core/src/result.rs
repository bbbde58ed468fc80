//! Engine outcome and request shapes
//!
//! The engine is invoked across a process boundary where exceptions do not
//! propagate, so outcomes are success-flag values the caller inspects rather
//! than errors it catches. Field names serialize in camelCase for wire
//! compatibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::ConvertError;

/// Outcome of a single conversion
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ConversionResult {
    Success(Conversion),
    Failure(ConversionFailure),
}

/// A completed conversion
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    /// Always true
    pub success: bool,
    pub original_value: f64,
    /// Rounded to 10 decimal places, except on the identity path
    pub converted_value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub category: String,
    /// Human-readable formula, possibly empty
    pub formula: String,
    pub timestamp: DateTime<Utc>,
}

/// A rejected conversion with the inputs echoed back
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionFailure {
    /// Always false
    pub success: bool,
    pub error: String,
    /// The raw value as received; null when absent or unrepresentable
    pub original_value: JsonValue,
    pub from_unit: String,
    pub to_unit: String,
    pub category: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversionResult {
    pub(crate) fn success(
        original_value: f64,
        converted_value: f64,
        from_unit: &str,
        to_unit: &str,
        category: &str,
        formula: String,
    ) -> Self {
        ConversionResult::Success(Conversion {
            success: true,
            original_value,
            converted_value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            category: category.to_string(),
            formula,
            timestamp: Utc::now(),
        })
    }

    pub(crate) fn failure(
        error: &ConvertError,
        original_value: JsonValue,
        from_unit: &str,
        to_unit: &str,
        category: &str,
    ) -> Self {
        ConversionResult::Failure(ConversionFailure {
            success: false,
            error: error.to_string(),
            original_value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            category: category.to_string(),
            timestamp: Utc::now(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Success(_))
    }

    /// Converted value on success
    pub fn converted_value(&self) -> Option<f64> {
        match self {
            ConversionResult::Success(c) => Some(c.converted_value),
            ConversionResult::Failure(_) => None,
        }
    }

    /// Error message on failure
    pub fn error(&self) -> Option<&str> {
        match self {
            ConversionResult::Success(_) => None,
            ConversionResult::Failure(f) => Some(&f.error),
        }
    }
}

/// Loosely-typed inbound conversion request
///
/// `value` stays a raw JSON value so a non-numeric input surfaces as
/// `InvalidValue` instead of a deserialization error; absent fields surface
/// as `MissingField`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    #[serde(default)]
    pub value: Option<JsonValue>,
    #[serde(default)]
    pub from_unit: Option<String>,
    #[serde(default)]
    pub to_unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// One batch entry, tagged with its position in the input sequence
#[derive(Debug, Clone, Serialize)]
pub struct BatchItem {
    pub index: usize,
    #[serde(flatten)]
    pub result: ConversionResult,
}

/// All batch results plus aggregate counts, in input order
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub results: Vec<BatchItem>,
    pub successful: usize,
    pub failed: usize,
}
