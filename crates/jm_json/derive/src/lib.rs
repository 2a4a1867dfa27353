//! See following macros:
//!
//! - [`Record`]
//! - [`JsonEnum`]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static RECORD_ATTRIBUTE_NAME: &str = "record";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Record Derivation
///
/// `#[derive(Record)]` implements the following traits for a struct with
/// named fields:
///
/// - `Record`
/// - `Schema`
/// - `Typed` (as a nested record)
/// - `ToValue`, `FromValue`
///
/// The type must implement `Default`: deserialization starts from it.
/// Generic types are not supported.
///
/// Every field type must implement `Typed`, `ToValue` and `FromValue`,
/// unless the field is skipped.
///
/// ## Field Attributes
///
/// By default a field is required and its key is the field name.
///
/// ### Custom Key
///
/// ```rust, ignore
/// #[derive(Record, Default)]
/// struct User {
///     #[record(key = "user_id")]
///     id: u64,
/// }
/// ```
///
/// ### Nested Key
///
/// `path` addresses a value inside nested JSON objects, here
/// `{"address": {"city": ...}}`:
///
/// ```rust, ignore
/// #[derive(Record, Default)]
/// struct User {
///     #[record(path = ["address", "city"])]
///     city: String,
/// }
/// ```
///
/// `key` and `path` cannot be combined.
///
/// ### Optional Fields
///
/// An optional field may be absent from the input, and is left out instead
/// of failing the record when it cannot be converted.
///
/// ```rust, ignore
/// #[derive(Record, Default)]
/// struct User {
///     #[record(optional)]
///     nickname: Option<String>,
///     #[record(optional = false)]
///     email: Option<String>,
/// }
/// ```
///
/// `Option` itself does not make a field optional, it only allows `null`.
///
/// ### Skipped Fields
///
/// ```rust, ignore
/// #[derive(Record, Default)]
/// struct User {
///     #[record(skip)]
///     cache: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::RecordStruct::parse(&ast) {
        Ok(data) => impls::impl_record(&data, &path::jm_json()).into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// # Unit Enum Derivation
///
/// `#[derive(JsonEnum)]` implements the following traits for an enum whose
/// variants are all unit variants:
///
/// - `JsonEnum`
/// - `Typed` (as a scalar of kind `Enum`)
/// - `ToValue`, `FromValue`
///
/// A variant is written as its name, or as the name given with `rename`:
///
/// ```rust, ignore
/// #[derive(JsonEnum)]
/// enum Role {
///     Guest,
///     #[record(rename = "ADMIN")]
///     Admin,
/// }
/// ```
#[proc_macro_derive(JsonEnum, attributes(record))]
pub fn derive_json_enum(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::UnitEnum::parse(&ast) {
        Ok(data) => impls::impl_json_enum(&data, &path::jm_json()).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
