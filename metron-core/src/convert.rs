//! Category-aware conversion algorithms
//!
//! Two algorithm families. Linear-factor categories convert through the
//! category's base unit: `value * from.factor / to.factor`. Temperature
//! relates by affine (scale + offset) transforms, so it converts through a
//! Celsius pivot instead. Same-unit conversions short-circuit before either
//! algorithm runs and return the value exactly, unrounded.
//!
//! The engine is stateless; every call is independent and touches nothing
//! but the read-only registry.

use serde_json::Value as JsonValue;

use crate::error::ConvertError;
use crate::formula;
use crate::registry::REGISTRY;
use crate::result::{BatchItem, BatchOutcome, ConversionRequest, ConversionResult};

const TEMPERATURE: &str = "temperature";

/// Rounding scale: 10 decimal places
const PRECISION: f64 = 1e10;

/// Round to 10 decimal places, nudging past binary representation error
/// before truncation
pub(crate) fn round_result(value: f64) -> f64 {
    ((value + f64::EPSILON) * PRECISION).round() / PRECISION
}

/// Convert `value` from `from_unit` to `to_unit` within `category`
///
/// Never fails visibly: every validation or lookup problem is folded into a
/// failure-shaped [`ConversionResult`].
pub fn convert(value: f64, from_unit: &str, to_unit: &str, category: &str) -> ConversionResult {
    match convert_checked(value, from_unit, to_unit, category) {
        Ok(converted) => {
            let formula = formula::formula(value, from_unit, to_unit, category);
            ConversionResult::success(value, converted, from_unit, to_unit, category, formula)
        }
        Err(e) => ConversionResult::failure(&e, echo_value(value), from_unit, to_unit, category),
    }
}

/// Convert a loosely-typed request, mapping absent fields to `MissingField`
/// and non-numeric values to `InvalidValue`
pub fn convert_request(request: &ConversionRequest) -> ConversionResult {
    let from_unit = request.from_unit.as_deref().unwrap_or("");
    let to_unit = request.to_unit.as_deref().unwrap_or("");
    let category = request.category.as_deref().unwrap_or("");

    let value = match &request.value {
        None => {
            return ConversionResult::failure(
                &ConvertError::MissingField("value"),
                JsonValue::Null,
                from_unit,
                to_unit,
                category,
            );
        }
        Some(raw) => match raw.as_f64() {
            Some(n) => n,
            None => {
                return ConversionResult::failure(
                    &ConvertError::InvalidValue,
                    raw.clone(),
                    from_unit,
                    to_unit,
                    category,
                );
            }
        },
    };

    convert(value, from_unit, to_unit, category)
}

/// Apply [`convert_request`] to each request independently, tagging results
/// with their input index
///
/// Order of results always matches order of inputs. The core imposes no
/// batch size cap; that belongs to the calling transport layer.
pub fn convert_batch(requests: &[ConversionRequest]) -> BatchOutcome {
    let mut results = Vec::with_capacity(requests.len());
    let mut successful = 0;
    let mut failed = 0;

    for (index, request) in requests.iter().enumerate() {
        let result = convert_request(request);
        if result.is_success() {
            successful += 1;
        } else {
            failed += 1;
        }
        results.push(BatchItem { index, result });
    }

    BatchOutcome {
        results,
        successful,
        failed,
    }
}

fn convert_checked(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: &str,
) -> Result<f64, ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::InvalidValue);
    }
    if from_unit.is_empty() {
        return Err(ConvertError::MissingField("fromUnit"));
    }
    if to_unit.is_empty() {
        return Err(ConvertError::MissingField("toUnit"));
    }
    if category.is_empty() {
        return Err(ConvertError::MissingField("category"));
    }

    if category == TEMPERATURE {
        convert_temperature(value, from_unit, to_unit)
    } else {
        convert_linear(value, from_unit, to_unit, category)
    }
}

fn convert_linear(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: &str,
) -> Result<f64, ConvertError> {
    if from_unit == to_unit {
        return Ok(value);
    }

    let category = REGISTRY.category(category)?;
    let from = category
        .unit(from_unit)
        .ok_or_else(|| ConvertError::UnitNotFound(from_unit.to_string()))?;
    let to = category
        .unit(to_unit)
        .ok_or_else(|| ConvertError::UnitNotFound(to_unit.to_string()))?;

    Ok(round_result(value * from.factor / to.factor))
}

fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
    if from_unit == to_unit {
        return Ok(value);
    }

    let celsius = to_celsius(value, from_unit)?;
    Ok(round_result(from_celsius(celsius, to_unit)?))
}

fn to_celsius(value: f64, unit: &str) -> Result<f64, ConvertError> {
    match unit {
        "celsius" => Ok(value),
        "fahrenheit" => Ok((value - 32.0) * 5.0 / 9.0),
        "kelvin" => Ok(value - 273.15),
        "rankine" => Ok((value - 491.67) * 5.0 / 9.0),
        _ => Err(ConvertError::UnitNotFound(unit.to_string())),
    }
}

fn from_celsius(celsius: f64, unit: &str) -> Result<f64, ConvertError> {
    match unit {
        "celsius" => Ok(celsius),
        "fahrenheit" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "kelvin" => Ok(celsius + 273.15),
        "rankine" => Ok(celsius * 9.0 / 5.0 + 491.67),
        _ => Err(ConvertError::UnitNotFound(unit.to_string())),
    }
}

fn echo_value(value: f64) -> JsonValue {
    serde_json::Number::from_f64(value)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn converted(value: f64, from: &str, to: &str, category: &str) -> f64 {
        let result = convert(value, from, to, category);
        result
            .converted_value()
            .unwrap_or_else(|| panic!("expected success, got {:?}", result.error()))
    }

    fn error_of(value: f64, from: &str, to: &str, category: &str) -> String {
        convert(value, from, to, category)
            .error()
            .expect("expected failure")
            .to_string()
    }

    #[test]
    fn identity_conversion_is_exact() {
        // Same-unit conversions bypass rounding entirely
        let value = 1.234_567_890_123_456_7;
        assert_eq!(converted(value, "meter", "meter", "length"), value);
        assert_eq!(converted(-40.0, "kelvin", "kelvin", "temperature"), -40.0);
    }

    #[test]
    fn linear_scaling() {
        assert_eq!(converted(1.0, "meter", "centimeter", "length"), 100.0);
        assert_eq!(converted(1.0, "kilometer", "meter", "length"), 1000.0);
        assert!((converted(1.0, "inch", "centimeter", "length") - 2.54).abs() < 1e-10);
    }

    #[test]
    fn temperature_fixed_points() {
        assert_eq!(converted(0.0, "celsius", "fahrenheit", "temperature"), 32.0);
        assert_eq!(converted(100.0, "celsius", "fahrenheit", "temperature"), 212.0);
        assert_eq!(converted(-40.0, "celsius", "fahrenheit", "temperature"), -40.0);
        assert_eq!(converted(0.0, "celsius", "kelvin", "temperature"), 273.15);
    }

    #[test]
    fn rankine_pivots_through_celsius() {
        assert_eq!(converted(491.67, "rankine", "celsius", "temperature"), 0.0);
        assert_eq!(converted(0.0, "celsius", "rankine", "temperature"), 491.67);
        // 0 K = 0 °R
        assert_eq!(converted(0.0, "kelvin", "rankine", "temperature"), 0.0);
    }

    #[test]
    fn cooking_scenario() {
        let ml = converted(1.0, "cup", "milliliter", "volume");
        assert!((ml - 236.588).abs() < 0.01, "1 cup = {ml} mL");
    }

    #[test]
    fn body_temperature_scenario() {
        let c = converted(98.6, "fahrenheit", "celsius", "temperature");
        assert!((c - 37.0).abs() < 0.1, "98.6 °F = {c} °C");
    }

    #[test]
    fn shipping_weight_scenario() {
        let kg = converted(5.0, "pound", "kilogram", "weight");
        assert!((kg - 2.268).abs() < 0.01, "5 lb = {kg} kg");
    }

    #[test]
    fn round_trip_stays_within_rounding_tolerance() {
        let back = converted(converted(12.5, "meter", "foot", "length"), "foot", "meter", "length");
        assert!((back - 12.5).abs() < 1e-9);

        let back = converted(converted(3.7, "ounce", "gram", "weight"), "gram", "ounce", "weight");
        assert!((back - 3.7).abs() < 1e-9);
    }

    #[test]
    fn unknown_category_fails() {
        let error = error_of(1.0, "meter", "foot", "unknown");
        assert_eq!(error, "Unknown category: unknown");
    }

    #[test]
    fn unknown_unit_names_the_offender() {
        let error = error_of(1.0, "bogus", "meter", "length");
        assert_eq!(error, "Unknown unit: bogus");

        let error = error_of(1.0, "meter", "bogus", "length");
        assert_eq!(error, "Unknown unit: bogus");

        let error = error_of(1.0, "bogus", "celsius", "temperature");
        assert_eq!(error, "Unknown unit: bogus");
    }

    #[test]
    fn non_finite_values_are_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let error = error_of(value, "meter", "centimeter", "length");
            assert!(error.contains("valid number"), "{error}");
        }
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert_eq!(error_of(1.0, "", "meter", "length"), "Missing required field: fromUnit");
        assert_eq!(error_of(1.0, "meter", "", "length"), "Missing required field: toUnit");
        assert_eq!(error_of(1.0, "meter", "foot", ""), "Missing required field: category");
    }

    #[test]
    fn request_with_non_numeric_value_is_invalid() {
        let request = ConversionRequest {
            value: Some(json!("abc")),
            from_unit: Some("meter".to_string()),
            to_unit: Some("centimeter".to_string()),
            category: Some("length".to_string()),
        };
        let result = convert_request(&request);
        assert!(result.error().unwrap().contains("valid number"));
    }

    #[test]
    fn request_with_missing_value_names_the_field() {
        let request = ConversionRequest {
            value: None,
            from_unit: Some("meter".to_string()),
            to_unit: Some("centimeter".to_string()),
            category: Some("length".to_string()),
        };
        let result = convert_request(&request);
        assert_eq!(result.error(), Some("Missing required field: value"));
    }

    #[test]
    fn request_with_integer_value_converts() {
        let request = ConversionRequest {
            value: Some(json!(5)),
            from_unit: Some("kilometer".to_string()),
            to_unit: Some("meter".to_string()),
            category: Some("length".to_string()),
        };
        assert_eq!(convert_request(&request).converted_value(), Some(5000.0));
    }

    #[test]
    fn successful_conversion_carries_a_formula() {
        let result = convert(1.0, "meter", "centimeter", "length");
        match result {
            ConversionResult::Success(c) => {
                assert_eq!(c.formula, "1 m = 1 × 100 = 100 cm");
            }
            ConversionResult::Failure(f) => panic!("unexpected failure: {}", f.error),
        }
    }

    #[test]
    fn batch_preserves_input_order() {
        let requests: Vec<ConversionRequest> = vec![
            ConversionRequest {
                value: Some(json!(1)),
                from_unit: Some("meter".to_string()),
                to_unit: Some("centimeter".to_string()),
                category: Some("length".to_string()),
            },
            ConversionRequest {
                value: Some(json!("oops")),
                from_unit: Some("meter".to_string()),
                to_unit: Some("centimeter".to_string()),
                category: Some("length".to_string()),
            },
            ConversionRequest {
                value: Some(json!(0)),
                from_unit: Some("celsius".to_string()),
                to_unit: Some("fahrenheit".to_string()),
                category: Some("temperature".to_string()),
            },
            ConversionRequest::default(),
        ];

        let outcome = convert_batch(&requests);

        assert_eq!(outcome.results.len(), requests.len());
        for (i, item) in outcome.results.iter().enumerate() {
            assert_eq!(item.index, i);
        }
        assert_eq!(outcome.successful, 2);
        assert_eq!(outcome.failed, 2);
        assert_eq!(outcome.results[2].result.converted_value(), Some(32.0));
    }

    #[test]
    fn rounding_truncates_to_ten_decimals() {
        assert_eq!(round_result(0.1 + 0.2), 0.3);
        assert_eq!(round_result(1.23456789014), 1.2345678901);
    }
}
