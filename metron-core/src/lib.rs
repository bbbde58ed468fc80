//! Metron Core - Unit Registry and Conversion Engine
//!
//! A fixed table of measurement categories and a stateless engine for
//! converting numeric values between units within a category.
//!
//! Categories:
//! - Length (m, km, ft, mi, ly, etc.)
//! - Weight (kg, g, lb, oz, etc.)
//! - Volume (L, mL, gal, cup, etc.)
//! - Temperature (°C, °F, K, °R)
//! - Area (m², acre, ha, etc.)
//! - Time (s, min, h, d, etc.)
//! - Speed (m/s, km/h, mph, kn, etc.)
//! - Energy (J, cal, kWh, BTU, etc.)
//!
//! All categories except temperature convert through a linear factor to the
//! category's base unit. Temperature converts through a Celsius pivot with
//! affine (scale + offset) transforms.
//!
//! The engine never panics and never returns an error type from its public
//! entry points: every outcome, including malformed input, is folded into a
//! success-flag [`ConversionResult`] so it can cross a process boundary
//! unchanged.

mod convert;
mod error;
mod formula;
mod registry;
mod result;
mod unit;

pub use convert::{convert, convert_batch, convert_request};
pub use error::ConvertError;
pub use formula::formula;
pub use registry::{Category, CategorySummary, UnitRegistry, MAX_SEARCH_RESULTS, REGISTRY};
pub use result::{
    BatchItem, BatchOutcome, Conversion, ConversionFailure, ConversionRequest, ConversionResult,
};
pub use unit::{Unit, UnitSystem};
