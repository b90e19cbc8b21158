//! Length units and millimeter conversion.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

const MM_PER_INCH: f64 = 25.4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("unsupported unit: {0}")]
    Unsupported(String),
}

/// An absolute length unit understood by the size inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Mm,
    Cm,
    In,
    Px,
    Pt,
    Pc,
}

impl Unit {
    pub const ALL: [Unit; 6] = [Unit::Mm, Unit::Cm, Unit::In, Unit::Px, Unit::Pt, Unit::Pc];

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::In => "in",
            Unit::Px => "px",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
        }
    }

    /// Millimeters per one of this unit (CSS reference: 96px = 72pt = 1in).
    pub fn mm_factor(self) -> f64 {
        match self {
            Unit::Mm => 1.0,
            Unit::Cm => 10.0,
            Unit::In => MM_PER_INCH,
            Unit::Px => MM_PER_INCH / 96.0,
            Unit::Pt => MM_PER_INCH / 72.0,
            Unit::Pc => MM_PER_INCH / 72.0 * 12.0,
        }
    }

    #[inline]
    pub fn to_mm(self, value: f64) -> f64 {
        match self {
            Unit::Mm => value,
            _ => value * self.mm_factor(),
        }
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnitError::Unsupported(s.to_string()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert `value` expressed in `unit` to millimeters.
pub fn convert_to_mm(value: f64, unit: &str) -> Result<f64, UnitError> {
    Ok(unit.parse::<Unit>()?.to_mm(value))
}

/// A number with its (possibly unsupported) unit suffix, e.g. `210mm`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub value: f64,
    pub unit: String,
}

impl Dimension {
    pub fn to_mm(&self) -> Result<f64, UnitError> {
        convert_to_mm(self.value, &self.unit)
    }
}

static DIMENSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9.]+)([a-zA-Z]*)$").unwrap());

/// Split `"210mm"` into value and unit; a bare number is in `px`.
///
/// Returns `None` when the text does not start with a number.
pub fn parse_dimension(text: &str) -> Option<Dimension> {
    let caps = DIMENSION.captures(text)?;
    let value = caps.get(1)?.as_str().parse().ok()?;
    let unit = match caps.get(2).map(|m| m.as_str()) {
        Some(unit) if !unit.is_empty() => unit.to_string(),
        _ => Unit::Px.as_str().to_string(),
    };
    Some(Dimension { value, unit })
}
