//! COSEM object catalog and telegram value parsing for DSMR
//!
//! This crate turns raw DSMR P1 telegram lines into typed COSEM objects:
//! the catalog of known line shapes ([`CosemObjectType`]), the per-position
//! value descriptors, the per-line parser ([`CosemObject`]) and the OBIS
//! matching factory ([`CosemObjectFactory`]).

pub mod descriptor;
pub mod factory;
pub mod object;
pub mod object_type;

pub use descriptor::{CosemValueDescriptor, DEFAULT_CHANNEL};
pub use factory::CosemObjectFactory;
pub use object::CosemObject;
pub use object_type::CosemObjectType;
