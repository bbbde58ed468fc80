//! Unit representation with conversion factors

use std::fmt;

use serde::Serialize;

/// Classification tag for display grouping. Descriptive only, never used in
/// computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitSystem {
    Metric,
    Imperial,
    UkImperial,
    Nautical,
    Astronomical,
    Scientific,
    Common,
    Electrical,
}

/// A single unit of measure within a category
///
/// For non-temperature categories `factor` is the multiplier that converts
/// 1 of this unit into the category's base unit (the base unit itself has
/// factor 1). Temperature units relate by affine transforms and keep a
/// nominal factor of 1 for structural uniformity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    /// Lookup key, unique within its category (e.g. "nauticalMile")
    pub key: &'static str,
    /// Display name (e.g. "Nautical Mile")
    pub name: &'static str,
    /// Display symbol (e.g. "nmi")
    pub symbol: &'static str,
    /// Multiplier to the category base unit
    pub factor: f64,
    /// Display grouping tag
    pub system: UnitSystem,
}

impl Unit {
    pub(crate) const fn new(
        key: &'static str,
        name: &'static str,
        symbol: &'static str,
        factor: f64,
        system: UnitSystem,
    ) -> Self {
        Unit {
            key,
            name,
            symbol,
            factor,
            system,
        }
    }

    /// True for the unit the rest of its category converts through
    pub fn is_base(&self) -> bool {
        self.factor == 1.0
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
