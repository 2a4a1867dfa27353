//! Mapping records to and from JSON.
//!
//! # Overview
//!
//! - [`JsonSerializer`]: the entry point, typed by one record type.
//!   Serializes and deserializes single records, batches and JSON text.
//! - [`ser`] / [`de`]: the untyped drivers it is built on. Nested records are
//!   handled by the same free functions with a child [`SerdeContext`].
//! - [`JsonConfig`]: depth limit and logging of diagnostics.
//! - [`Diagnostics`]: the non-fatal events of an operation.
//! - [`JsonError`]: the fatal ones.
//!
//! ## Conversion rules
//!
//! A field value is converted by the handler the
//! [`TypeRegistry`](crate::registry::TypeRegistry) returns for its declared
//! type. Without one, a nested record maps to a JSON object and a sequence
//! to a JSON array; anything else is [`JsonError::UnsupportedType`].
//!
//! On the read path a failing handler is not final: records and sequences
//! are tried structurally before the handler error is reported. A sequence
//! also reads from a string holding a JSON array.
//!
//! ## Required and optional fields
//!
//! | | required | optional |
//! |---|---|---|
//! | key absent | [`MissingRequiredKey`] | field untouched |
//! | `null` | field untouched, [`NullValue`] | field untouched, [`NullValue`] |
//! | conversion fails | [`ConversionFailure`] | field skipped, [`SkippedOptional`] |
//!
//! [`MissingRequiredKey`]: JsonError::MissingRequiredKey
//! [`ConversionFailure`]: JsonError::ConversionFailure
//! [`NullValue`]: DiagnosticKind::NullValue
//! [`SkippedOptional`]: DiagnosticKind::SkippedOptional

// -----------------------------------------------------------------------------
// Modules

mod context;
mod diagnostics;
mod error;
mod policy;
mod serializer;

pub mod de;
pub mod ser;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Exports

pub use context::{JsonConfig, SerdeContext};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::JsonError;
pub use serializer::JsonSerializer;
