//! Type handlers: converters between scalar [`Value`]s and JSON.
//!
//! ## Menu
//!
//! - [`TypeHandler`]: writes a value to JSON, reads it back, parses it from text.
//! - [`HandlerError`]: a handler refused its input.
//! - [`TypeRegistry`]: the lookup from a declared type to its handler.
//! - [`handlers`]: the default handler of every [`ScalarKind`].
//!
//! [`Value`]: crate::value::Value
//! [`ScalarKind`]: crate::info::ScalarKind

// -----------------------------------------------------------------------------
// Modules

mod handler;
mod type_registry;

pub mod handlers;

// -----------------------------------------------------------------------------
// Exports

pub use handler::{HandlerError, TypeHandler, json_kind_name};
pub use type_registry::TypeRegistry;
