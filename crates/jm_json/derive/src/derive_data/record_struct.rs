use syn::{Data, DeriveInput, Fields, Ident, Type};

use crate::derive_data::{FieldAttributes, reject_generics};

/// A serialized field of a record.
pub(crate) struct RecordField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

/// A struct with named fields deriving `Record`.
pub(crate) struct RecordStruct<'a> {
    pub ident: &'a Ident,
    /// Fields in declaration order, skipped fields excluded.
    pub fields: Vec<RecordField<'a>>,
}

impl<'a> RecordStruct<'a> {
    pub fn parse(ast: &'a DeriveInput) -> syn::Result<Self> {
        reject_generics(ast)?;

        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => &fields.named,
                _ => {
                    return Err(syn::Error::new_spanned(
                        &ast.ident,
                        "`Record` needs a struct with named fields",
                    ));
                }
            },
            _ => {
                return Err(syn::Error::new_spanned(
                    &ast.ident,
                    "`Record` can only be derived for structs",
                ));
            }
        };

        let mut fields = Vec::with_capacity(named.len());
        for field in named {
            let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if attrs.skip {
                continue;
            }
            // Named fields always have an ident.
            let Some(ident) = &field.ident else {
                continue;
            };
            fields.push(RecordField {
                ident,
                ty: &field.ty,
                attrs,
            });
        }

        Ok(Self {
            ident: &ast.ident,
            fields,
        })
    }
}
