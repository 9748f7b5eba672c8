use crate::error::{DsmrError, DsmrResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Grammar for textual OBIS identifiers: `((A-)?(B:)?)C.D(.E)?(.F)?`.
///
/// Group F may be introduced by either `.` or `*`, both occur on real meters.
static OBIS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)-)?(?:(\d+):)?(\d+)\.(\d+)(?:\.(\d+))?(?:[.*](\d+))?$")
        .expect("OBIS pattern is valid")
});

/// OBIS (Object Identification System) identifier of one COSEM telegram item
///
/// An OBIS identifier is a six-group hierarchical address "A-B:C.D.E.F"
/// naming one measured quantity in a DSMR telegram. Groups B and F are
/// optional: an absent group is a distinct "no value" state, not zero.
/// On the P1 port group B encodes the M-Bus channel of a slave meter and
/// therefore varies per installation, which is why catalog entries for
/// M-Bus bound objects leave B unset and match it as a wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObisIdentifier {
    group_a: u8,
    group_b: Option<u8>,
    group_c: u8,
    group_d: u8,
    group_e: u8,
    group_f: Option<u8>,
}

impl ObisIdentifier {
    /// Create a new OBIS identifier from explicit group values
    ///
    /// # Arguments
    ///
    /// * `a` - Group A (medium)
    /// * `b` - Group B (channel), `None` when unset
    /// * `c` - Group C (physical quantity)
    /// * `d` - Group D (measurement type)
    /// * `e` - Group E (tariff)
    /// * `f` - Group F (billing period), `None` when unset
    pub const fn new(a: u8, b: Option<u8>, c: u8, d: u8, e: u8, f: Option<u8>) -> Self {
        Self {
            group_a: a,
            group_b: b,
            group_c: c,
            group_d: d,
            group_e: e,
            group_f: f,
        }
    }

    /// Get group A
    pub fn group_a(&self) -> u8 {
        self.group_a
    }

    /// Get group B, `None` when unset
    pub fn group_b(&self) -> Option<u8> {
        self.group_b
    }

    /// Get group C
    pub fn group_c(&self) -> u8 {
        self.group_c
    }

    /// Get group D
    pub fn group_d(&self) -> u8 {
        self.group_d
    }

    /// Get group E
    pub fn group_e(&self) -> u8 {
        self.group_e
    }

    /// Get group F, `None` when unset
    pub fn group_f(&self) -> Option<u8> {
        self.group_f
    }

    /// Compare two identifiers treating an unset B or F as a wildcard
    ///
    /// Groups A, C, D and E must match exactly. For B and F the group is
    /// skipped when either side has no value; when both sides carry a value
    /// the values must be equal.
    pub fn equals_wildcard(&self, other: &ObisIdentifier) -> bool {
        self.group_a == other.group_a
            && self.group_c == other.group_c
            && self.group_d == other.group_d
            && self.group_e == other.group_e
            && match (self.group_b, other.group_b) {
                (Some(own), Some(theirs)) => own == theirs,
                _ => true,
            }
            && match (self.group_f, other.group_f) {
                (Some(own), Some(theirs)) => own == theirs,
                _ => true,
            }
    }

    /// Get a copy of this identifier with group F cleared
    ///
    /// The reduced identifier is the stable catalog lookup key: group F is
    /// unused by the DSMR dialect and would otherwise fragment the catalog.
    pub fn reduced(&self) -> ObisIdentifier {
        ObisIdentifier {
            group_f: None,
            ..*self
        }
    }

    /// Whether the reduced identifier must be matched with wildcard semantics
    ///
    /// True iff group B is unset.
    pub fn reduced_is_wildcard(&self) -> bool {
        self.group_b.is_none()
    }
}

impl FromStr for ObisIdentifier {
    type Err = DsmrError;

    /// Parse an OBIS identifier from its textual form
    ///
    /// Unset integer groups default to 0, unset optional groups (B, F)
    /// default to "no value".
    fn from_str(s: &str) -> DsmrResult<Self> {
        let captures = OBIS_PATTERN.captures(s).ok_or_else(|| {
            DsmrError::ObisParse(format!("Invalid OBIS identifier format: {}", s))
        })?;

        let group = |idx: usize| -> DsmrResult<Option<u8>> {
            captures
                .get(idx)
                .map(|m| {
                    m.as_str().parse::<u8>().map_err(|_| {
                        DsmrError::ObisParse(format!(
                            "OBIS group value out of range: {}",
                            m.as_str()
                        ))
                    })
                })
                .transpose()
        };

        Ok(Self {
            group_a: group(1)?.unwrap_or(0),
            group_b: group(2)?,
            group_c: group(3)?.unwrap_or(0),
            group_d: group(4)?.unwrap_or(0),
            group_e: group(5)?.unwrap_or(0),
            group_f: group(6)?,
        })
    }
}

impl fmt::Display for ObisIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-", self.group_a)?;
        if let Some(b) = self.group_b {
            write!(f, "{}:", b)?;
        }
        write!(f, "{}.{}.{}", self.group_c, self.group_d, self.group_e)?;
        if let Some(g) = self.group_f {
            write!(f, ".{}", g)?;
        }
        Ok(())
    }
}
