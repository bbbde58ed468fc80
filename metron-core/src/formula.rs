//! Human-readable formula rendering
//!
//! Formulas are advisory display strings attached to successful conversions.
//! Rendering never fails: any unresolvable unit or category degrades to an
//! empty string.

use crate::convert::round_result;
use crate::registry::REGISTRY;

/// Render the formula describing a conversion, or an empty string if either
/// side cannot be resolved
pub fn formula(value: f64, from_unit: &str, to_unit: &str, category: &str) -> String {
    if category == "temperature" {
        return temperature_formula(from_unit, to_unit)
            .unwrap_or_default()
            .to_string();
    }

    let Ok(category) = REGISTRY.category(category) else {
        return String::new();
    };
    let (Some(from), Some(to)) = (category.unit(from_unit), category.unit(to_unit)) else {
        return String::new();
    };

    let factor = from.factor / to.factor;
    let rounded = round_result(value * factor);
    format!(
        "{} {} = {} × {} = {} {}",
        value, from.symbol, value, factor, rounded, to.symbol
    )
}

/// Fixed algebraic strings for the 12 non-identity ordered temperature
/// pairs. Identity and unknown pairs render nothing.
fn temperature_formula(from_unit: &str, to_unit: &str) -> Option<&'static str> {
    Some(match (from_unit, to_unit) {
        ("celsius", "fahrenheit") => "°C × 9/5 + 32 = °F",
        ("fahrenheit", "celsius") => "(°F - 32) × 5/9 = °C",
        ("celsius", "kelvin") => "°C + 273.15 = K",
        ("kelvin", "celsius") => "K - 273.15 = °C",
        ("celsius", "rankine") => "°C × 9/5 + 491.67 = °R",
        ("rankine", "celsius") => "(°R - 491.67) × 5/9 = °C",
        ("fahrenheit", "kelvin") => "(°F - 32) × 5/9 + 273.15 = K",
        ("kelvin", "fahrenheit") => "(K - 273.15) × 9/5 + 32 = °F",
        ("fahrenheit", "rankine") => "°F + 459.67 = °R",
        ("rankine", "fahrenheit") => "°R - 459.67 = °F",
        ("kelvin", "rankine") => "K × 9/5 = °R",
        ("rankine", "kelvin") => "°R × 5/9 = K",
        _ => return None,
    })
}
