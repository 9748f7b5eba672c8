//! OBIS matching engine turning raw telegram lines into [`CosemObject`]s

use crate::object::CosemObject;
use crate::object_type::CosemObjectType;
use dsmr_core::error::{DsmrError, DsmrResult};
use dsmr_core::obis_identifier::ObisIdentifier;
use log::debug;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Catalog entries with a concrete group B, keyed by reduced identifier
static REDUCED_LOOKUP: LazyLock<HashMap<ObisIdentifier, CosemObjectType>> = LazyLock::new(|| {
    CosemObjectType::VALUES
        .iter()
        .filter(|object_type| {
            **object_type != CosemObjectType::Unknown
                && !object_type.obis().reduced_is_wildcard()
        })
        .map(|object_type| (object_type.obis(), *object_type))
        .collect()
});

/// Catalog entries with a wildcard group B (M-Bus channel bound objects)
static WILDCARD_TYPES: LazyLock<Vec<CosemObjectType>> = LazyLock::new(|| {
    CosemObjectType::VALUES
        .iter()
        .filter(|object_type| {
            **object_type != CosemObjectType::Unknown
                && object_type.obis().reduced_is_wildcard()
        })
        .copied()
        .collect()
});

/// Factory matching observed OBIS identifiers against the catalog
///
/// Matching strips group F from the observed identifier, tries an exact
/// lookup over the concrete catalog entries, and falls back to a wildcard
/// scan over the M-Bus bound entries.
pub struct CosemObjectFactory;

impl CosemObjectFactory {
    /// Match an observed identifier against the catalog
    pub fn match_obis(obis_identifier: &ObisIdentifier) -> Option<CosemObjectType> {
        let reduced = obis_identifier.reduced();

        if let Some(object_type) = REDUCED_LOOKUP.get(&reduced) {
            debug!("Matched {} to {:?}", obis_identifier, object_type);
            return Some(*object_type);
        }

        let matched = WILDCARD_TYPES
            .iter()
            .copied()
            .find(|object_type| object_type.obis().equals_wildcard(&reduced));
        match matched {
            Some(object_type) => debug!("Matched {} to {:?} (wildcard)", obis_identifier, object_type),
            None => debug!("No catalog entry for {}", obis_identifier),
        }
        matched
    }

    /// Build a [`CosemObject`] from an OBIS string and its raw value string
    ///
    /// # Arguments
    ///
    /// * `obis` - The identifier text preceding the value groups
    /// * `values` - The concatenated parenthesized value groups
    pub fn get_cosem_object(obis: &str, values: &str) -> DsmrResult<CosemObject> {
        let obis_identifier: ObisIdentifier = obis.parse()?;
        let object_type = Self::match_obis(&obis_identifier)
            .ok_or_else(|| DsmrError::UnknownObis(obis_identifier.to_string()))?;

        let mut object = CosemObject::new(object_type, obis_identifier);
        object.parse_cosem_values(values)?;
        Ok(object)
    }

    /// Build a [`CosemObject`] from one raw telegram line
    ///
    /// Splits `A-B:C.D.E(...)(...)` at the first parenthesis into the
    /// identifier prefix and the value string.
    pub fn parse_line(line: &str) -> DsmrResult<CosemObject> {
        let line = line.trim();
        let paren = line.find('(').ok_or_else(|| {
            DsmrError::ObisParse(format!("No value groups in telegram line: {}", line))
        })?;

        Self::get_cosem_object(&line[..paren], &line[paren..])
    }
}
