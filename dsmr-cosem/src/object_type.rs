//! Catalog of known DSMR telegram line shapes
//!
//! One entry per OBIS code a DSMR meter can emit on the P1 port. Each
//! entry carries its reduced OBIS identifier, the ordered descriptor list
//! for its parenthesized value groups, and the length of the trailing
//! repeating descriptor group (0 for fixed-shape lines). The catalog is
//! compile-time static data and safe for unsynchronized concurrent reads.
//!
//! M-Bus bound entries (gas, water, heat, cooling and generic M-Bus
//! metadata) leave group B unset: B carries the M-Bus channel number,
//! which differs per installation and is matched as a wildcard.

use crate::descriptor::CosemValueDescriptor;
use dsmr_core::datatypes::CosemValueKind;
use dsmr_core::obis_identifier::ObisIdentifier;
use dsmr_core::unit::Unit;
use serde::{Deserialize, Serialize};

const STRING: CosemValueDescriptor =
    CosemValueDescriptor::new(CosemValueKind::StringValue, Unit::None);
const HEX_STRING: CosemValueDescriptor =
    CosemValueDescriptor::new(CosemValueKind::HexString, Unit::None);
const DECIMAL: CosemValueDescriptor =
    CosemValueDescriptor::new(CosemValueKind::Decimal, Unit::None);
const DATE_TIME: CosemValueDescriptor =
    CosemValueDescriptor::new(CosemValueKind::DateTime, Unit::None);

const KWH: CosemValueDescriptor =
    CosemValueDescriptor::new(CosemValueKind::Quantity, Unit::KiloWattHour);
const KW: CosemValueDescriptor =
    CosemValueDescriptor::new(CosemValueKind::Quantity, Unit::KiloWatt);
const KVARH: CosemValueDescriptor =
    CosemValueDescriptor::new(CosemValueKind::Quantity, Unit::KiloVarHour);
const KVAR: CosemValueDescriptor =
    CosemValueDescriptor::new(CosemValueKind::Quantity, Unit::KiloVar);
const VOLT: CosemValueDescriptor = CosemValueDescriptor::new(CosemValueKind::Quantity, Unit::Volt);
const AMPERE: CosemValueDescriptor =
    CosemValueDescriptor::new(CosemValueKind::Quantity, Unit::Ampere);
const CUBIC_METRE: CosemValueDescriptor =
    CosemValueDescriptor::new(CosemValueKind::Quantity, Unit::CubicMetre);
const GIGA_JOULE: CosemValueDescriptor =
    CosemValueDescriptor::new(CosemValueKind::Quantity, Unit::GigaJoule);

// Multi-value line positions with explicit channel labels
const TIMESTAMP: CosemValueDescriptor =
    CosemValueDescriptor::with_channel(CosemValueKind::DateTime, Unit::None, "timestamp");
const FAILURE_ENTRIES: CosemValueDescriptor =
    CosemValueDescriptor::with_channel(CosemValueKind::Decimal, Unit::None, "entries");
const FAILURE_EVENT_OBIS: CosemValueDescriptor =
    CosemValueDescriptor::with_channel(CosemValueKind::StringValue, Unit::None, "obisId");
const FAILURE_DURATION: CosemValueDescriptor =
    CosemValueDescriptor::with_channel(CosemValueKind::Quantity, Unit::Second, "duration");

/// Shorthand for the reduced (group F unset) identifiers stored per entry
const fn obis(a: u8, b: Option<u8>, c: u8, d: u8, e: u8) -> ObisIdentifier {
    ObisIdentifier::new(a, b, c, d, e, None)
}

/// One entry per telegram line shape a DSMR meter can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CosemObjectType {
    /// Placeholder for unmatched lines, never produced by catalog matching
    Unknown,

    // P1 metadata
    /// DSMR version of the P1 output (1-3:0.2.8)
    P1VersionOutput,
    /// e-MUCS version of the P1 output, Belgian dialect (0-0:96.1.4)
    P1EmucsVersionOutput,
    /// Timestamp of the telegram (0-0:1.0.0)
    P1Timestamp,
    /// Text code for the display message (0-0:96.13.1)
    P1TextCode,
    /// Free text display message (0-0:96.13.0)
    P1TextString,

    // Electricity meter
    /// Equipment identifier (0-0:96.1.1)
    EmeterEquipmentIdentifier,
    /// Equipment identifier, DSMR v2 (0-0:42.0.0)
    EmeterEquipmentIdentifierV2,
    /// Total delivered energy, Luxembourg single register (1-0:1.8.0)
    EmeterDeliveryTariff0,
    /// Delivered energy, tariff 1 (1-0:1.8.1)
    EmeterDeliveryTariff1,
    /// Delivered energy, tariff 2 (1-0:1.8.2)
    EmeterDeliveryTariff2,
    /// Total produced energy, Luxembourg single register (1-0:2.8.0)
    EmeterProductionTariff0,
    /// Produced energy, tariff 1 (1-0:2.8.1)
    EmeterProductionTariff1,
    /// Produced energy, tariff 2 (1-0:2.8.2)
    EmeterProductionTariff2,
    /// Total imported reactive energy (1-0:3.8.0)
    EmeterTotalImportedEnergyRegisterQ,
    /// Total exported reactive energy (1-0:4.8.0)
    EmeterTotalExportedEnergyRegisterQ,
    /// Active tariff indicator (0-0:96.14.0)
    EmeterTariffIndicator,
    /// Actual delivered power (1-0:1.7.0)
    EmeterActualDelivery,
    /// Actual produced power (1-0:2.7.0)
    EmeterActualProduction,
    /// Actual imported reactive power (1-0:3.7.0)
    EmeterActualReactiveDelivery,
    /// Actual exported reactive power (1-0:4.7.0)
    EmeterActualReactiveProduction,
    /// Contracted power threshold (0-0:17.0.0)
    EmeterActiveThreshold,
    /// Number of power failures (0-0:96.7.21)
    EmeterPowerFailures,
    /// Number of long power failures (0-0:96.7.9)
    EmeterLongPowerFailures,
    /// Power failure event log, variable length (1-0:99.97.0)
    EmeterPowerFailureLog,
    /// Voltage sags phase L1 (1-0:32.32.0)
    EmeterVoltageSagsL1,
    /// Voltage sags phase L2 (1-0:52.32.0)
    EmeterVoltageSagsL2,
    /// Voltage sags phase L3 (1-0:72.32.0)
    EmeterVoltageSagsL3,
    /// Voltage swells phase L1 (1-0:32.36.0)
    EmeterVoltageSwellsL1,
    /// Voltage swells phase L2 (1-0:52.36.0)
    EmeterVoltageSwellsL2,
    /// Voltage swells phase L3 (1-0:72.36.0)
    EmeterVoltageSwellsL3,
    /// Instantaneous current phase L1 (1-0:31.7.0)
    EmeterInstantCurrentL1,
    /// Instantaneous current phase L2 (1-0:51.7.0)
    EmeterInstantCurrentL2,
    /// Instantaneous current phase L3 (1-0:71.7.0)
    EmeterInstantCurrentL3,
    /// Instantaneous delivered power phase L1 (1-0:21.7.0)
    EmeterInstantPowerDeliveryL1,
    /// Instantaneous delivered power phase L2 (1-0:41.7.0)
    EmeterInstantPowerDeliveryL2,
    /// Instantaneous delivered power phase L3 (1-0:61.7.0)
    EmeterInstantPowerDeliveryL3,
    /// Instantaneous produced power phase L1 (1-0:22.7.0)
    EmeterInstantPowerProductionL1,
    /// Instantaneous produced power phase L2 (1-0:42.7.0)
    EmeterInstantPowerProductionL2,
    /// Instantaneous produced power phase L3 (1-0:62.7.0)
    EmeterInstantPowerProductionL3,
    /// Instantaneous voltage phase L1 (1-0:32.7.0)
    EmeterInstantVoltageL1,
    /// Instantaneous voltage phase L2 (1-0:52.7.0)
    EmeterInstantVoltageL2,
    /// Instantaneous voltage phase L3 (1-0:72.7.0)
    EmeterInstantVoltageL3,

    // M-Bus channel devices (wildcard group B)
    /// M-Bus device type (0-b:24.1.0)
    MbusDeviceType,
    /// M-Bus equipment identifier (0-b:96.1.0)
    MbusEquipmentIdentifier,
    /// M-Bus valve or switch position (0-b:24.4.0)
    MbusValveSwitchPosition,
    /// Gas equipment identifier, DSMR v2 (7-0:0.0.0)
    GmeterEquipmentIdentifierV2,
    /// Gas delivery of the last 24 hours, DSMR v2 (7-b:23.1.0)
    Gmeter24hDeliveryV2,
    /// Temperature compensated gas delivery of the last 24 hours, DSMR v2 (7-b:23.2.0)
    Gmeter24hDeliveryCompensatedV2,
    /// Gas delivery with capture timestamp, DSMR v4+ (0-b:24.2.1)
    GmeterLastValue,
    /// Water equipment identifier, DSMR v2 (8-0:0.0.0)
    WmeterEquipmentIdentifierV2,
    /// Water delivery (8-b:1.0.0)
    WmeterValueV2,
    /// Heat equipment identifier, DSMR v2 (5-0:0.0.0)
    HmeterEquipmentIdentifierV2,
    /// Heat delivery (5-b:1.0.0)
    HmeterValueV2,
    /// Cooling equipment identifier, DSMR v2 (6-0:0.0.0)
    CmeterEquipmentIdentifierV2,
    /// Cooling delivery (6-b:1.0.0)
    CmeterValueV2,
}

impl CosemObjectType {
    /// All catalog entries
    pub const VALUES: &'static [CosemObjectType] = &[
        Self::Unknown,
        Self::P1VersionOutput,
        Self::P1EmucsVersionOutput,
        Self::P1Timestamp,
        Self::P1TextCode,
        Self::P1TextString,
        Self::EmeterEquipmentIdentifier,
        Self::EmeterEquipmentIdentifierV2,
        Self::EmeterDeliveryTariff0,
        Self::EmeterDeliveryTariff1,
        Self::EmeterDeliveryTariff2,
        Self::EmeterProductionTariff0,
        Self::EmeterProductionTariff1,
        Self::EmeterProductionTariff2,
        Self::EmeterTotalImportedEnergyRegisterQ,
        Self::EmeterTotalExportedEnergyRegisterQ,
        Self::EmeterTariffIndicator,
        Self::EmeterActualDelivery,
        Self::EmeterActualProduction,
        Self::EmeterActualReactiveDelivery,
        Self::EmeterActualReactiveProduction,
        Self::EmeterActiveThreshold,
        Self::EmeterPowerFailures,
        Self::EmeterLongPowerFailures,
        Self::EmeterPowerFailureLog,
        Self::EmeterVoltageSagsL1,
        Self::EmeterVoltageSagsL2,
        Self::EmeterVoltageSagsL3,
        Self::EmeterVoltageSwellsL1,
        Self::EmeterVoltageSwellsL2,
        Self::EmeterVoltageSwellsL3,
        Self::EmeterInstantCurrentL1,
        Self::EmeterInstantCurrentL2,
        Self::EmeterInstantCurrentL3,
        Self::EmeterInstantPowerDeliveryL1,
        Self::EmeterInstantPowerDeliveryL2,
        Self::EmeterInstantPowerDeliveryL3,
        Self::EmeterInstantPowerProductionL1,
        Self::EmeterInstantPowerProductionL2,
        Self::EmeterInstantPowerProductionL3,
        Self::EmeterInstantVoltageL1,
        Self::EmeterInstantVoltageL2,
        Self::EmeterInstantVoltageL3,
        Self::MbusDeviceType,
        Self::MbusEquipmentIdentifier,
        Self::MbusValveSwitchPosition,
        Self::GmeterEquipmentIdentifierV2,
        Self::Gmeter24hDeliveryV2,
        Self::Gmeter24hDeliveryCompensatedV2,
        Self::GmeterLastValue,
        Self::WmeterEquipmentIdentifierV2,
        Self::WmeterValueV2,
        Self::HmeterEquipmentIdentifierV2,
        Self::HmeterValueV2,
        Self::CmeterEquipmentIdentifierV2,
        Self::CmeterValueV2,
    ];

    /// Reduced OBIS identifier, descriptor list and repeating suffix length
    fn definition(&self) -> (ObisIdentifier, &'static [CosemValueDescriptor], usize) {
        match self {
            Self::Unknown => (obis(0, None, 0, 0, 0), &[], 0),

            Self::P1VersionOutput => (obis(1, Some(3), 0, 2, 8), &[STRING], 0),
            Self::P1EmucsVersionOutput => (obis(0, Some(0), 96, 1, 4), &[STRING], 0),
            Self::P1Timestamp => (obis(0, Some(0), 1, 0, 0), &[DATE_TIME], 0),
            Self::P1TextCode => (obis(0, Some(0), 96, 13, 1), &[HEX_STRING], 0),
            Self::P1TextString => (obis(0, Some(0), 96, 13, 0), &[HEX_STRING], 0),

            Self::EmeterEquipmentIdentifier => (obis(0, Some(0), 96, 1, 1), &[HEX_STRING], 0),
            Self::EmeterEquipmentIdentifierV2 => (obis(0, Some(0), 42, 0, 0), &[HEX_STRING], 0),
            Self::EmeterDeliveryTariff0 => (obis(1, Some(0), 1, 8, 0), &[KWH], 0),
            Self::EmeterDeliveryTariff1 => (obis(1, Some(0), 1, 8, 1), &[KWH], 0),
            Self::EmeterDeliveryTariff2 => (obis(1, Some(0), 1, 8, 2), &[KWH], 0),
            Self::EmeterProductionTariff0 => (obis(1, Some(0), 2, 8, 0), &[KWH], 0),
            Self::EmeterProductionTariff1 => (obis(1, Some(0), 2, 8, 1), &[KWH], 0),
            Self::EmeterProductionTariff2 => (obis(1, Some(0), 2, 8, 2), &[KWH], 0),
            Self::EmeterTotalImportedEnergyRegisterQ => {
                (obis(1, Some(0), 3, 8, 0), &[KVARH], 0)
            }
            Self::EmeterTotalExportedEnergyRegisterQ => {
                (obis(1, Some(0), 4, 8, 0), &[KVARH], 0)
            }
            Self::EmeterTariffIndicator => (obis(0, Some(0), 96, 14, 0), &[STRING], 0),
            Self::EmeterActualDelivery => (obis(1, Some(0), 1, 7, 0), &[KW], 0),
            Self::EmeterActualProduction => (obis(1, Some(0), 2, 7, 0), &[KW], 0),
            Self::EmeterActualReactiveDelivery => (obis(1, Some(0), 3, 7, 0), &[KVAR], 0),
            Self::EmeterActualReactiveProduction => (obis(1, Some(0), 4, 7, 0), &[KVAR], 0),
            Self::EmeterActiveThreshold => (obis(0, Some(0), 17, 0, 0), &[DECIMAL], 0),
            Self::EmeterPowerFailures => (obis(0, Some(0), 96, 7, 21), &[DECIMAL], 0),
            Self::EmeterLongPowerFailures => (obis(0, Some(0), 96, 7, 9), &[DECIMAL], 0),
            Self::EmeterPowerFailureLog => (
                obis(1, Some(0), 99, 97, 0),
                &[FAILURE_ENTRIES, FAILURE_EVENT_OBIS, TIMESTAMP, FAILURE_DURATION],
                2,
            ),
            Self::EmeterVoltageSagsL1 => (obis(1, Some(0), 32, 32, 0), &[DECIMAL], 0),
            Self::EmeterVoltageSagsL2 => (obis(1, Some(0), 52, 32, 0), &[DECIMAL], 0),
            Self::EmeterVoltageSagsL3 => (obis(1, Some(0), 72, 32, 0), &[DECIMAL], 0),
            Self::EmeterVoltageSwellsL1 => (obis(1, Some(0), 32, 36, 0), &[DECIMAL], 0),
            Self::EmeterVoltageSwellsL2 => (obis(1, Some(0), 52, 36, 0), &[DECIMAL], 0),
            Self::EmeterVoltageSwellsL3 => (obis(1, Some(0), 72, 36, 0), &[DECIMAL], 0),
            Self::EmeterInstantCurrentL1 => (obis(1, Some(0), 31, 7, 0), &[AMPERE], 0),
            Self::EmeterInstantCurrentL2 => (obis(1, Some(0), 51, 7, 0), &[AMPERE], 0),
            Self::EmeterInstantCurrentL3 => (obis(1, Some(0), 71, 7, 0), &[AMPERE], 0),
            Self::EmeterInstantPowerDeliveryL1 => (obis(1, Some(0), 21, 7, 0), &[KW], 0),
            Self::EmeterInstantPowerDeliveryL2 => (obis(1, Some(0), 41, 7, 0), &[KW], 0),
            Self::EmeterInstantPowerDeliveryL3 => (obis(1, Some(0), 61, 7, 0), &[KW], 0),
            Self::EmeterInstantPowerProductionL1 => (obis(1, Some(0), 22, 7, 0), &[KW], 0),
            Self::EmeterInstantPowerProductionL2 => (obis(1, Some(0), 42, 7, 0), &[KW], 0),
            Self::EmeterInstantPowerProductionL3 => (obis(1, Some(0), 62, 7, 0), &[KW], 0),
            Self::EmeterInstantVoltageL1 => (obis(1, Some(0), 32, 7, 0), &[VOLT], 0),
            Self::EmeterInstantVoltageL2 => (obis(1, Some(0), 52, 7, 0), &[VOLT], 0),
            Self::EmeterInstantVoltageL3 => (obis(1, Some(0), 72, 7, 0), &[VOLT], 0),

            Self::MbusDeviceType => (obis(0, None, 24, 1, 0), &[DECIMAL], 0),
            Self::MbusEquipmentIdentifier => (obis(0, None, 96, 1, 0), &[HEX_STRING], 0),
            Self::MbusValveSwitchPosition => (obis(0, None, 24, 4, 0), &[DECIMAL], 0),
            Self::GmeterEquipmentIdentifierV2 => (obis(7, Some(0), 0, 0, 0), &[STRING], 0),
            Self::Gmeter24hDeliveryV2 => {
                (obis(7, None, 23, 1, 0), &[TIMESTAMP, CUBIC_METRE], 0)
            }
            Self::Gmeter24hDeliveryCompensatedV2 => {
                (obis(7, None, 23, 2, 0), &[TIMESTAMP, CUBIC_METRE], 0)
            }
            Self::GmeterLastValue => (obis(0, None, 24, 2, 1), &[TIMESTAMP, CUBIC_METRE], 0),
            Self::WmeterEquipmentIdentifierV2 => (obis(8, Some(0), 0, 0, 0), &[STRING], 0),
            Self::WmeterValueV2 => (obis(8, None, 1, 0, 0), &[CUBIC_METRE], 0),
            Self::HmeterEquipmentIdentifierV2 => (obis(5, Some(0), 0, 0, 0), &[STRING], 0),
            Self::HmeterValueV2 => (obis(5, None, 1, 0, 0), &[GIGA_JOULE], 0),
            Self::CmeterEquipmentIdentifierV2 => (obis(6, Some(0), 0, 0, 0), &[STRING], 0),
            Self::CmeterValueV2 => (obis(6, None, 1, 0, 0), &[GIGA_JOULE], 0),
        }
    }

    /// Get the reduced OBIS identifier of this entry
    pub fn obis(&self) -> ObisIdentifier {
        self.definition().0
    }

    /// Get the full descriptor list (leading descriptors then the
    /// repeating suffix)
    pub fn descriptors(&self) -> &'static [CosemValueDescriptor] {
        self.definition().1
    }

    /// Get the length of the repeating descriptor suffix, 0 when the line
    /// shape has no repeat group
    pub fn nr_of_repeating_descriptors(&self) -> usize {
        self.definition().2
    }

    fn nr_of_leading_descriptors(&self) -> usize {
        let (_, descriptors, repeating) = self.definition();
        descriptors.len() - repeating
    }

    /// Resolve the descriptor and channel label for value position `idx`
    ///
    /// Positions beyond the leading range cycle through the repeating
    /// suffix; their channel labels get the decimal repeat count appended
    /// so every repetition publishes under a distinct label. Returns
    /// `None` for positions past the end of a line shape without a repeat
    /// group.
    pub fn descriptor(&self, idx: usize) -> Option<(String, CosemValueDescriptor)> {
        let (_, descriptors, repeating) = self.definition();
        let leading = descriptors.len() - repeating;

        if idx < leading {
            let descriptor = descriptors[idx];
            Some((descriptor.channel().to_string(), descriptor))
        } else if repeating > 0 {
            let offset = idx - leading;
            let descriptor = descriptors[leading + offset % repeating];
            let repeat_count = offset / repeating;
            Some((format!("{}{}", descriptor.channel(), repeat_count), descriptor))
        } else {
            None
        }
    }

    /// Check whether a line with `nr_of_values` parenthesized groups fits
    /// this shape
    ///
    /// Without a repeat group the count must equal the leading descriptor
    /// count exactly. With a repeat group any whole number of repetitions
    /// beyond the leading descriptors is accepted, including zero.
    pub fn supports_nr_of_values(&self, nr_of_values: usize) -> bool {
        let repeating = self.nr_of_repeating_descriptors();
        let leading = self.nr_of_leading_descriptors();

        if repeating == 0 {
            nr_of_values == leading
        } else {
            nr_of_values >= leading && (nr_of_values - leading) % repeating == 0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_obis_codes() {
        assert_eq!(
            CosemObjectType::EmeterDeliveryTariff1.obis(),
            ObisIdentifier::new(1, Some(0), 1, 8, 1, None)
        );
        assert_eq!(
            CosemObjectType::Gmeter24hDeliveryV2.obis(),
            ObisIdentifier::new(7, None, 23, 1, 0, None)
        );
        assert!(CosemObjectType::Gmeter24hDeliveryV2.obis().reduced_is_wildcard());
        assert!(!CosemObjectType::EmeterDeliveryTariff1.obis().reduced_is_wildcard());
    }

    #[test]
    fn test_catalog_reduced_identifiers_are_unique() {
        // Non-wildcard entries are looked up by exact reduced identifier;
        // a duplicate would shadow another entry.
        let mut seen = HashSet::new();
        for object_type in CosemObjectType::VALUES {
            if *object_type == CosemObjectType::Unknown {
                continue;
            }
            assert!(
                seen.insert(object_type.obis()),
                "Duplicate catalog identifier: {}",
                object_type.obis()
            );
        }
    }

    #[test]
    fn test_descriptor_leading_range() {
        let (channel, descriptor) = CosemObjectType::EmeterDeliveryTariff1.descriptor(0).unwrap();
        assert_eq!(channel, "default");
        assert_eq!(descriptor.unit(), Unit::KiloWattHour);

        let (channel, _) = CosemObjectType::EmeterPowerFailureLog.descriptor(0).unwrap();
        assert_eq!(channel, "entries");
        let (channel, _) = CosemObjectType::EmeterPowerFailureLog.descriptor(1).unwrap();
        assert_eq!(channel, "obisId");
    }

    #[test]
    fn test_descriptor_repeat_group() {
        // Leading count 2, repeating count 2
        let log = CosemObjectType::EmeterPowerFailureLog;

        let (channel, descriptor) = log.descriptor(2).unwrap();
        assert_eq!(channel, "timestamp0");
        assert_eq!(descriptor.kind(), CosemValueKind::DateTime);

        let (channel, descriptor) = log.descriptor(3).unwrap();
        assert_eq!(channel, "duration0");
        assert_eq!(descriptor.unit(), Unit::Second);

        // First repeating descriptor of the second repetition
        let (channel, descriptor) = log.descriptor(4).unwrap();
        assert_eq!(channel, "timestamp1");
        assert_eq!(descriptor.kind(), CosemValueKind::DateTime);

        let (channel, _) = log.descriptor(5).unwrap();
        assert_eq!(channel, "duration1");
    }

    #[test]
    fn test_descriptor_out_of_range() {
        assert!(CosemObjectType::EmeterDeliveryTariff1.descriptor(1).is_none());
        assert!(CosemObjectType::P1Timestamp.descriptor(5).is_none());
    }

    #[test]
    fn test_supports_nr_of_values_fixed_shape() {
        let tariff = CosemObjectType::EmeterDeliveryTariff1;
        assert!(tariff.supports_nr_of_values(1));
        assert!(!tariff.supports_nr_of_values(0));
        assert!(!tariff.supports_nr_of_values(2));

        let gas = CosemObjectType::Gmeter24hDeliveryV2;
        assert!(gas.supports_nr_of_values(2));
        assert!(!gas.supports_nr_of_values(1));
        assert!(!gas.supports_nr_of_values(3));
    }

    #[test]
    fn test_supports_nr_of_values_repeat_group() {
        let log = CosemObjectType::EmeterPowerFailureLog;

        // Zero repetitions is a valid event log
        assert!(log.supports_nr_of_values(2));
        assert!(log.supports_nr_of_values(4));
        assert!(log.supports_nr_of_values(6));

        assert!(!log.supports_nr_of_values(0));
        assert!(!log.supports_nr_of_values(1));
        assert!(!log.supports_nr_of_values(3));
        assert!(!log.supports_nr_of_values(5));
    }
}
