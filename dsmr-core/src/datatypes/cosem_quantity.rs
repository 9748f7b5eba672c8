//! Unit-bearing quantity type

use crate::error::{DsmrError, DsmrResult};
use crate::unit::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A measured quantity with its unit, e.g. `001.234*kWh`
///
/// The unit token embedded in the telegram group is validated against the
/// unit the catalog expects for that position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CosemQuantity {
    value: f64,
    unit: Unit,
}

impl CosemQuantity {
    /// Create a quantity from an already decoded value
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Parse a quantity from its raw telegram text
    ///
    /// The text is `value*unit`; the unit token must match `expected_unit`.
    /// When `expected_unit` is [`Unit::None`] the text must carry no unit
    /// token at all.
    pub fn parse(raw: &str, expected_unit: Unit) -> DsmrResult<Self> {
        let (value_text, unit_text) = match raw.split_once('*') {
            Some((value, unit)) => (value, Some(unit)),
            None => (raw, None),
        };

        match (unit_text, expected_unit) {
            (None, Unit::None) => {}
            (None, expected) => {
                return Err(DsmrError::ValueDecode(format!(
                    "Missing unit '{}' in quantity text: {}",
                    expected.symbol(),
                    raw
                )));
            }
            (Some(token), expected) => {
                if Unit::from_symbol(token) != Some(expected) {
                    return Err(DsmrError::ValueDecode(format!(
                        "Unit '{}' does not match expected '{}' in quantity text: {}",
                        token,
                        expected.symbol(),
                        raw
                    )));
                }
            }
        }

        let value = value_text.parse::<f64>().map_err(|_| {
            DsmrError::ValueDecode(format!("Invalid quantity value text: {}", raw))
        })?;

        Ok(Self {
            value,
            unit: expected_unit,
        })
    }

    /// Get the numeric value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Get the unit
    pub fn unit(&self) -> Unit {
        self.unit
    }
}

impl fmt::Display for CosemQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit == Unit::None {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        let q = CosemQuantity::parse("001.234*kWh", Unit::KiloWattHour).unwrap();
        assert_eq!(q.value(), 1.234);
        assert_eq!(q.unit(), Unit::KiloWattHour);

        let q = CosemQuantity::parse("0000000240*s", Unit::Second).unwrap();
        assert_eq!(q.value(), 240.0);
    }

    #[test]
    fn test_parse_unit_mismatch() {
        assert!(CosemQuantity::parse("001.234*kW", Unit::KiloWattHour).is_err());
        assert!(CosemQuantity::parse("001.234*foo", Unit::KiloWattHour).is_err());
    }

    #[test]
    fn test_parse_missing_unit() {
        assert!(CosemQuantity::parse("001.234", Unit::KiloWattHour).is_err());
        // No unit expected, no unit given
        let q = CosemQuantity::parse("50.01", Unit::None).unwrap();
        assert_eq!(q.value(), 50.01);
    }

    #[test]
    fn test_parse_invalid_value() {
        assert!(CosemQuantity::parse("abc*kWh", Unit::KiloWattHour).is_err());
        assert!(CosemQuantity::parse("*kWh", Unit::KiloWattHour).is_err());
    }

    #[test]
    fn test_display() {
        let q = CosemQuantity::new(1.234, Unit::CubicMetre);
        assert_eq!(q.to_string(), "1.234 m3");
    }
}
