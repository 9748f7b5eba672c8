//! Decoded telegram values and their decoding strategies

use crate::datatypes::cosem_date_time::CosemDateTime;
use crate::datatypes::cosem_quantity::CosemQuantity;
use crate::error::{DsmrError, DsmrResult};
use crate::unit::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Container holding one decoded telegram value
///
/// A closed union over every shape a parenthesized telegram group can
/// decode to. The variant is selected by the [`CosemValueKind`] tag the
/// catalog stores for that position; there is no runtime dispatch beyond
/// the match in [`CosemValueKind::parse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CosemValue {
    /// Bare text, stored as-is
    StringValue(String),
    /// Integer value (counters, tariff and device type codes)
    Decimal(i64),
    /// Floating point value without a unit token
    Double(f64),
    /// Hex encoded text, stored decoded
    HexString(String),
    /// Timestamp
    DateTime(CosemDateTime),
    /// Value with a validated unit token
    Quantity(CosemQuantity),
}

impl fmt::Display for CosemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CosemValue::StringValue(text) => write!(f, "{}", text),
            CosemValue::Decimal(value) => write!(f, "{}", value),
            CosemValue::Double(value) => write!(f, "{}", value),
            CosemValue::HexString(text) => write!(f, "{}", text),
            CosemValue::DateTime(timestamp) => write!(f, "{}", timestamp),
            CosemValue::Quantity(quantity) => write!(f, "{}", quantity),
        }
    }
}

/// Decoding strategy tag stored in catalog value descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CosemValueKind {
    /// Keep the bare text
    StringValue,
    /// Decode as an integer
    Decimal,
    /// Decode as a floating point number
    Double,
    /// Decode pairs of hex digits as Latin-1 text
    HexString,
    /// Decode as a DSMR timestamp
    DateTime,
    /// Decode as a value with a unit token
    Quantity,
}

impl CosemValueKind {
    /// Decode the bare text of one parenthesized telegram group
    ///
    /// `expected_unit` is only consulted by the [`Quantity`] strategy; the
    /// other strategies ignore it.
    ///
    /// [`Quantity`]: CosemValueKind::Quantity
    pub fn parse(&self, raw: &str, expected_unit: Unit) -> DsmrResult<CosemValue> {
        match self {
            CosemValueKind::StringValue => Ok(CosemValue::StringValue(raw.to_string())),
            CosemValueKind::Decimal => raw
                .parse::<i64>()
                .map(CosemValue::Decimal)
                .map_err(|_| DsmrError::ValueDecode(format!("Invalid decimal text: {}", raw))),
            CosemValueKind::Double => raw
                .parse::<f64>()
                .map(CosemValue::Double)
                .map_err(|_| DsmrError::ValueDecode(format!("Invalid double text: {}", raw))),
            CosemValueKind::HexString => decode_hex(raw).map(CosemValue::HexString),
            CosemValueKind::DateTime => CosemDateTime::parse(raw).map(CosemValue::DateTime),
            CosemValueKind::Quantity => {
                CosemQuantity::parse(raw, expected_unit).map(CosemValue::Quantity)
            }
        }
    }
}

/// Decode pairs of hex digits as Latin-1 characters
///
/// The input length must be even; each two-character pair is one byte.
fn decode_hex(raw: &str) -> DsmrResult<String> {
    if !raw.is_ascii() || raw.len() % 2 != 0 {
        return Err(DsmrError::ValueDecode(format!(
            "Invalid hex string text: {}",
            raw
        )));
    }

    let mut decoded = String::with_capacity(raw.len() / 2);
    for idx in (0..raw.len()).step_by(2) {
        let byte = u8::from_str_radix(&raw[idx..idx + 2], 16).map_err(|_| {
            DsmrError::ValueDecode(format!("Invalid hex string text: {}", raw))
        })?;
        decoded.push(byte as char);
    }
    Ok(decoded)
}
