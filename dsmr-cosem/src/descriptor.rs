//! Value descriptors for catalog entries

use dsmr_core::datatypes::CosemValueKind;
use dsmr_core::unit::Unit;

/// Channel label used when a descriptor does not name one explicitly
///
/// Single-value telegram lines publish under this label; multi-value lines
/// give each position its own label.
pub const DEFAULT_CHANNEL: &str = "default";

/// Static metadata describing how to decode one positional value of a
/// telegram line
///
/// A descriptor carries the decoding strategy, the unit the quantity
/// strategy validates against, and the channel label the decoded value is
/// published under. Catalog entries are built from these at compile time
/// and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CosemValueDescriptor {
    kind: CosemValueKind,
    unit: Unit,
    channel: &'static str,
}

impl CosemValueDescriptor {
    /// Create a descriptor publishing under the default channel label
    pub const fn new(kind: CosemValueKind, unit: Unit) -> Self {
        Self {
            kind,
            unit,
            channel: DEFAULT_CHANNEL,
        }
    }

    /// Create a descriptor with an explicit channel label
    pub const fn with_channel(kind: CosemValueKind, unit: Unit, channel: &'static str) -> Self {
        Self {
            kind,
            unit,
            channel,
        }
    }

    /// Get the decoding strategy
    pub fn kind(&self) -> CosemValueKind {
        self.kind
    }

    /// Get the expected unit
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Get the channel label
    pub fn channel(&self) -> &'static str {
        self.channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_channel() {
        let descriptor = CosemValueDescriptor::new(CosemValueKind::StringValue, Unit::None);
        assert_eq!(descriptor.channel(), "default");
    }

    #[test]
    fn test_with_channel() {
        let descriptor = CosemValueDescriptor::with_channel(
            CosemValueKind::Quantity,
            Unit::Second,
            "duration",
        );
        assert_eq!(descriptor.channel(), "duration");
        assert_eq!(descriptor.unit(), Unit::Second);
        assert_eq!(descriptor.kind(), CosemValueKind::Quantity);
    }
}
