#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macros name this crate `jm_json`, also when used inside it.
extern crate self as jm_json;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod impls;
pub mod info;
pub mod record;
pub mod registry;
pub mod serde;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use jm_json_derive as derive;
