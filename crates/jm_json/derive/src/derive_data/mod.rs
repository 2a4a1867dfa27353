//! Parsing of the derive input.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod record_struct;
mod unit_enum;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::{FieldAttributes, FieldKey};
pub(crate) use record_struct::{RecordField, RecordStruct};
pub(crate) use unit_enum::UnitEnum;

/// Rejects generic parameters, which the static schema cell cannot support.
pub(crate) fn reject_generics(ast: &syn::DeriveInput) -> syn::Result<()> {
    if ast.generics.params.is_empty() && ast.generics.where_clause.is_none() {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            &ast.generics,
            "generic types are not supported",
        ))
    }
}
