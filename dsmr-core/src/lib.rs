//! Core types and utilities for DSMR P1 COSEM telegram parsing
//!
//! This crate provides the OBIS identifier type, error handling, and the
//! typed-value family used throughout the DSMR COSEM implementation.

pub mod datatypes;
pub mod error;
pub mod obis_identifier;
pub mod unit;

pub use datatypes::{CosemDateTime, CosemQuantity, CosemValue, CosemValueKind, DstIndicator};
pub use error::{DsmrError, DsmrResult};
pub use obis_identifier::ObisIdentifier;
pub use unit::Unit;
