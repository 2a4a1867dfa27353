//! Records to JSON.
//!
//! - [`serialize_record`]: one record to a JSON object, field by field.
//! - [`write_value`]: one field value into a JSON object, at a possibly nested key.
//! - [`value_to_json`]: one value to JSON, by declared type.

// -----------------------------------------------------------------------------
// Modules

mod convert;
mod record;

// -----------------------------------------------------------------------------
// Exports

pub use convert::{value_to_json, write_value};
pub use record::serialize_record;
