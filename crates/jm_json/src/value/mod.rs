//! The dynamic value model exchanged between records and type handlers.
//!
//! ## Menu
//!
//! - [`Value`]: one field value, borrowed from a record or owned.
//! - [`RecordValue`]: a nested record inside a [`Value`].
//! - [`ToValue`], [`FromValue`]: conversions between Rust types and [`Value`].
//! - [`JsonEnum`]: unit-only enums carried by variant name.
//! - [`Blob`]: an opaque byte string.
//! - [`ValueError`]: a typed accessor could not accept a value.

// -----------------------------------------------------------------------------
// Modules

mod blob;
mod convert;
mod error;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use blob::Blob;
pub use convert::{FromValue, JsonEnum, ToValue};
pub use error::ValueError;
pub use value::{RecordValue, Value};
