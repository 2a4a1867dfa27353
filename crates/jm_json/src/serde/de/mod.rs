//! JSON to records.
//!
//! - [`deserialize_record`]: a JSON object to a new record of a given schema.
//! - [`deserialize_fields`]: a JSON object into an existing record.
//! - [`read_value`]: one field value out of a JSON object, at a possibly nested key.
//! - [`value_from_json`]: one JSON value to a [`Value`](crate::value::Value), by declared type.

// -----------------------------------------------------------------------------
// Modules

mod convert;
mod record;

// -----------------------------------------------------------------------------
// Exports

pub use convert::{read_value, value_from_json};
pub use record::{deserialize_fields, deserialize_record};
