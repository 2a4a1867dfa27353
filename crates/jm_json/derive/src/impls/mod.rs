//! Code generation.

// -----------------------------------------------------------------------------
// Modules

mod json_enum;
mod record;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use json_enum::impl_json_enum;
pub(crate) use record::impl_record;
