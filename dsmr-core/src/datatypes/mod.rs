//! Data types for decoded DSMR telegram values

pub mod cosem_date_time;
pub mod cosem_quantity;
pub mod cosem_value;

// Re-export types
pub use cosem_date_time::{CosemDateTime, DstIndicator};
pub use cosem_quantity::CosemQuantity;
pub use cosem_value::{CosemValue, CosemValueKind};
