//! Tolerant import pipeline
//!
//! Turns heterogeneous CSV/XLSX budget files into domain entities:
//! file bytes → raw records → field resolution → amount parsing /
//! service-name normalization → entities, submitted as one batch.

pub mod amount;
pub mod fields;
pub mod normalize;
pub mod pipeline;
pub mod row;

pub use amount::{parse_amount, parse_amount_str};
pub use fields::{resolve_field, resolve_field_or, RawRecord, RawValue};
pub use normalize::normalize_service_name;
pub use pipeline::{read_records, ImportFormat};
pub use row::{map_demande_row, map_depense_row, map_operation_row};
