//! dsmr_rs - Rust implementation of the DSMR COSEM object model
//!
//! This library parses the COSEM objects of DSMR (Dutch Smart Meter
//! Requirements) P1 telegrams: OBIS identifier matching against a catalog
//! of known line shapes, and decoding of the parenthesized value groups
//! into typed, unit-bearing values.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `dsmr-core`: OBIS identifiers, error handling, units and the
//!   typed-value family
//! - `dsmr-cosem`: the object-type catalog, per-line parsing and the OBIS
//!   matching factory
//!
//! # Example
//!
//! ```
//! use dsmr::{CosemObjectFactory, CosemValue};
//!
//! let object = CosemObjectFactory::parse_line("1-0:1.8.1(000123.456*kWh)")?;
//! match object.value("default") {
//!     Some(CosemValue::Quantity(q)) => assert_eq!(q.value(), 123.456),
//!     other => panic!("unexpected value: {:?}", other),
//! }
//! # Ok::<(), dsmr::DsmrError>(())
//! ```

pub use dsmr_core::{
    CosemDateTime, CosemQuantity, CosemValue, CosemValueKind, DsmrError, DsmrResult,
    DstIndicator, ObisIdentifier, Unit,
};

pub use dsmr_cosem::{
    CosemObject, CosemObjectFactory, CosemObjectType, CosemValueDescriptor, DEFAULT_CHANNEL,
};
