//! The authoritative category/unit table
//!
//! Constructed once per process and never mutated afterwards; every lookup
//! is a pure read, so the registry is shared freely across threads.

use std::sync::LazyLock;

use serde::Serialize;

use crate::error::ConvertError;
use crate::unit::{Unit, UnitSystem};

/// Hard cap applied to caller-supplied search limits
pub const MAX_SEARCH_RESULTS: usize = 50;

/// Global registry, built on first use
pub static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(|| UnitRegistry::new());

/// A measurement dimension and the units it holds
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Lookup key (e.g. "length")
    pub key: &'static str,
    /// Display name (e.g. "Length")
    pub name: &'static str,
    /// Display glyph
    pub icon: &'static str,
    /// Key of the unit the linear algorithm pivots through
    pub base_unit: &'static str,
    /// Units in declaration order
    pub units: Vec<Unit>,
}

impl Category {
    /// Find a unit by key within this category
    pub fn unit(&self, key: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.key == key)
    }
}

/// Lightweight category listing entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub base_unit: &'static str,
    pub unit_count: usize,
}

/// Registry of all known categories
pub struct UnitRegistry {
    categories: Vec<Category>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        UnitRegistry {
            categories: vec![
                length(),
                weight(),
                volume(),
                temperature(),
                area(),
                time(),
                speed(),
                energy(),
            ],
        }
    }

    /// All categories in declaration order
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Declaration-ordered category summaries
    pub fn summaries(&self) -> Vec<CategorySummary> {
        self.categories
            .iter()
            .map(|c| CategorySummary {
                key: c.key,
                name: c.name,
                icon: c.icon,
                base_unit: c.base_unit,
                unit_count: c.units.len(),
            })
            .collect()
    }

    /// Get a category by key
    pub fn category(&self, key: &str) -> Result<&Category, ConvertError> {
        self.categories
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| ConvertError::CategoryNotFound(key.to_string()))
    }

    /// Get a unit by category and unit key
    pub fn unit(&self, category: &str, unit: &str) -> Result<&Unit, ConvertError> {
        self.category(category)?
            .unit(unit)
            .ok_or_else(|| ConvertError::UnitNotFound(unit.to_string()))
    }

    /// Units in `category` whose key, name, or symbol contains `query`,
    /// case-insensitively, truncated to `limit` (clamped to
    /// [`MAX_SEARCH_RESULTS`]). Validating a non-empty query is the caller's
    /// concern.
    pub fn search_units<'a>(
        &'a self,
        category: &str,
        query: &str,
        limit: usize,
    ) -> Result<impl Iterator<Item = &'a Unit> + 'a, ConvertError> {
        let category = self.category(category)?;
        let needle = query.to_lowercase();
        Ok(category
            .units
            .iter()
            .filter(move |u| {
                u.key.to_lowercase().contains(&needle)
                    || u.name.to_lowercase().contains(&needle)
                    || u.symbol.to_lowercase().contains(&needle)
            })
            .take(limit.min(MAX_SEARCH_RESULTS)))
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn length() -> Category {
    use UnitSystem::*;
    Category {
        key: "length",
        name: "Length",
        icon: "📏",
        base_unit: "meter",
        units: vec![
            Unit::new("nanometer", "Nanometer", "nm", 1e-9, Metric),
            Unit::new("micrometer", "Micrometer", "μm", 1e-6, Metric),
            Unit::new("millimeter", "Millimeter", "mm", 0.001, Metric),
            Unit::new("centimeter", "Centimeter", "cm", 0.01, Metric),
            Unit::new("meter", "Meter", "m", 1.0, Metric),
            Unit::new("kilometer", "Kilometer", "km", 1000.0, Metric),
            Unit::new("inch", "Inch", "in", 0.0254, Imperial),
            Unit::new("foot", "Foot", "ft", 0.3048, Imperial),
            Unit::new("yard", "Yard", "yd", 0.9144, Imperial),
            Unit::new("mile", "Mile", "mi", 1609.344, Imperial),
            Unit::new("nauticalMile", "Nautical Mile", "nmi", 1852.0, Nautical),
            Unit::new("lightYear", "Light Year", "ly", 9.461e15, Astronomical),
        ],
    }
}

fn weight() -> Category {
    use UnitSystem::*;
    Category {
        key: "weight",
        name: "Weight",
        icon: "⚖️",
        base_unit: "kilogram",
        units: vec![
            Unit::new("milligram", "Milligram", "mg", 1e-6, Metric),
            Unit::new("gram", "Gram", "g", 0.001, Metric),
            Unit::new("kilogram", "Kilogram", "kg", 1.0, Metric),
            Unit::new("tonne", "Tonne", "t", 1000.0, Metric),
            Unit::new("ounce", "Ounce", "oz", 0.0283495, Imperial),
            Unit::new("pound", "Pound", "lb", 0.453592, Imperial),
            Unit::new("stone", "Stone", "st", 6.35029, Imperial),
            Unit::new("ton", "US Ton", "ton", 907.185, Imperial),
        ],
    }
}

fn volume() -> Category {
    use UnitSystem::*;
    Category {
        key: "volume",
        name: "Volume",
        icon: "💧",
        base_unit: "liter",
        units: vec![
            Unit::new("milliliter", "Milliliter", "mL", 0.001, Metric),
            Unit::new("liter", "Liter", "L", 1.0, Metric),
            Unit::new("cubicMeter", "Cubic Meter", "m³", 1000.0, Metric),
            Unit::new("fluidOunce", "Fluid Ounce", "fl oz", 0.0295735, Imperial),
            Unit::new("cup", "Cup", "cup", 0.236588, Imperial),
            Unit::new("pint", "Pint", "pt", 0.473176, Imperial),
            Unit::new("quart", "Quart", "qt", 0.946353, Imperial),
            Unit::new("gallon", "Gallon", "gal", 3.78541, Imperial),
            Unit::new("fluidOunceUK", "Fluid Ounce (UK)", "fl oz (UK)", 0.0284131, UkImperial),
            Unit::new("pintUK", "Pint (UK)", "pt (UK)", 0.568261, UkImperial),
            Unit::new("gallonUK", "Gallon (UK)", "gal (UK)", 4.54609, UkImperial),
        ],
    }
}

fn temperature() -> Category {
    use UnitSystem::*;
    // Factors are nominal; the affine algorithm in convert.rs never reads
    // them.
    Category {
        key: "temperature",
        name: "Temperature",
        icon: "🌡️",
        base_unit: "celsius",
        units: vec![
            Unit::new("celsius", "Celsius", "°C", 1.0, Metric),
            Unit::new("fahrenheit", "Fahrenheit", "°F", 1.0, Imperial),
            Unit::new("kelvin", "Kelvin", "K", 1.0, Scientific),
            Unit::new("rankine", "Rankine", "°R", 1.0, Scientific),
        ],
    }
}

fn area() -> Category {
    use UnitSystem::*;
    Category {
        key: "area",
        name: "Area",
        icon: "📐",
        base_unit: "squareMeter",
        units: vec![
            Unit::new("squareMillimeter", "Square Millimeter", "mm²", 1e-6, Metric),
            Unit::new("squareCentimeter", "Square Centimeter", "cm²", 1e-4, Metric),
            Unit::new("squareMeter", "Square Meter", "m²", 1.0, Metric),
            Unit::new("hectare", "Hectare", "ha", 10000.0, Metric),
            Unit::new("squareKilometer", "Square Kilometer", "km²", 1e6, Metric),
            Unit::new("squareInch", "Square Inch", "in²", 0.00064516, Imperial),
            Unit::new("squareFoot", "Square Foot", "ft²", 0.092903, Imperial),
            Unit::new("squareYard", "Square Yard", "yd²", 0.836127, Imperial),
            Unit::new("acre", "Acre", "ac", 4046.86, Imperial),
            Unit::new("squareMile", "Square Mile", "mi²", 2.59e6, Imperial),
        ],
    }
}

fn time() -> Category {
    use UnitSystem::*;
    Category {
        key: "time",
        name: "Time",
        icon: "⏱️",
        base_unit: "second",
        units: vec![
            Unit::new("nanosecond", "Nanosecond", "ns", 1e-9, Scientific),
            Unit::new("microsecond", "Microsecond", "μs", 1e-6, Scientific),
            Unit::new("millisecond", "Millisecond", "ms", 0.001, Scientific),
            Unit::new("second", "Second", "s", 1.0, Common),
            Unit::new("minute", "Minute", "min", 60.0, Common),
            Unit::new("hour", "Hour", "h", 3600.0, Common),
            Unit::new("day", "Day", "d", 86400.0, Common),
            Unit::new("week", "Week", "wk", 604800.0, Common),
            // Average Gregorian month and year
            Unit::new("month", "Month", "mo", 2629746.0, Common),
            Unit::new("year", "Year", "yr", 31556952.0, Common),
        ],
    }
}

fn speed() -> Category {
    use UnitSystem::*;
    Category {
        key: "speed",
        name: "Speed",
        icon: "💨",
        base_unit: "meterPerSecond",
        units: vec![
            Unit::new("meterPerSecond", "Meter per Second", "m/s", 1.0, Metric),
            Unit::new("kilometerPerHour", "Kilometer per Hour", "km/h", 0.277778, Metric),
            Unit::new("milePerHour", "Mile per Hour", "mph", 0.44704, Imperial),
            Unit::new("footPerSecond", "Foot per Second", "ft/s", 0.3048, Imperial),
            Unit::new("knot", "Knot", "kn", 0.514444, Nautical),
            Unit::new("mach", "Mach", "Mach", 343.0, Scientific),
        ],
    }
}

fn energy() -> Category {
    use UnitSystem::*;
    Category {
        key: "energy",
        name: "Energy",
        icon: "⚡",
        base_unit: "joule",
        units: vec![
            Unit::new("joule", "Joule", "J", 1.0, Metric),
            Unit::new("kilojoule", "Kilojoule", "kJ", 1000.0, Metric),
            Unit::new("calorie", "Calorie", "cal", 4.184, Common),
            Unit::new("kilocalorie", "Kilocalorie", "kcal", 4184.0, Common),
            Unit::new("wattHour", "Watt-hour", "Wh", 3600.0, Electrical),
            Unit::new("kilowattHour", "Kilowatt-hour", "kWh", 3.6e6, Electrical),
            Unit::new("btu", "British Thermal Unit", "BTU", 1055.06, Imperial),
        ],
    }
}
