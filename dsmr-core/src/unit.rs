//! Measurement units occurring in DSMR P1 telegrams

use serde::{Deserialize, Serialize};
use std::fmt;

/// Units used by DSMR meters (electricity, gas, water, heat, cooling)
///
/// Quantity values on the P1 port carry their unit as a token after an
/// asterisk, e.g. `001.234*kWh`. The token set is closed per the DSMR
/// companion standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// No unit
    None,
    /// Kilowatt hour
    KiloWattHour,
    /// Kilowatt
    KiloWatt,
    /// Kilovar hour (reactive energy)
    KiloVarHour,
    /// Kilovar (reactive power)
    KiloVar,
    /// Volt
    Volt,
    /// Ampere
    Ampere,
    /// Second
    Second,
    /// Minute
    Minute,
    /// Cubic metre
    CubicMetre,
    /// Gigajoule
    GigaJoule,
    /// Hertz
    Hertz,
    /// Percentage
    Percent,
}

impl Unit {
    /// Get the DSMR telegram token for this unit
    pub fn symbol(self) -> &'static str {
        match self {
            Self::None => "",
            Self::KiloWattHour => "kWh",
            Self::KiloWatt => "kW",
            Self::KiloVarHour => "kvarh",
            Self::KiloVar => "kvar",
            Self::Volt => "V",
            Self::Ampere => "A",
            Self::Second => "s",
            Self::Minute => "min",
            Self::CubicMetre => "m3",
            Self::GigaJoule => "GJ",
            Self::Hertz => "Hz",
            Self::Percent => "%",
        }
    }

    /// Look up a unit by its DSMR telegram token
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "kWh" => Some(Self::KiloWattHour),
            "kW" => Some(Self::KiloWatt),
            "kvarh" => Some(Self::KiloVarHour),
            "kvar" => Some(Self::KiloVar),
            "V" => Some(Self::Volt),
            "A" => Some(Self::Ampere),
            "s" => Some(Self::Second),
            "min" => Some(Self::Minute),
            "m3" => Some(Self::CubicMetre),
            "GJ" => Some(Self::GigaJoule),
            "Hz" => Some(Self::Hertz),
            "%" => Some(Self::Percent),
            _ => None,
        }
    }

    /// Check if this is an energy unit
    pub fn is_energy_unit(self) -> bool {
        matches!(self, Self::KiloWattHour | Self::KiloVarHour | Self::GigaJoule)
    }

    /// Check if this is a power unit
    pub fn is_power_unit(self) -> bool {
        matches!(self, Self::KiloWatt | Self::KiloVar)
    }

    /// Check if this is a volume unit
    pub fn is_volume_unit(self) -> bool {
        matches!(self, Self::CubicMetre)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
