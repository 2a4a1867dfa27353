use syn::{Data, DeriveInput, Fields, Ident, LitStr};

use crate::RECORD_ATTRIBUTE_NAME;
use crate::derive_data::reject_generics;

/// A variant of a unit-only enum.
pub(crate) struct UnitVariant<'a> {
    pub ident: &'a Ident,
    /// The serialized name.
    pub name: LitStr,
}

/// An enum deriving `JsonEnum`.
pub(crate) struct UnitEnum<'a> {
    pub ident: &'a Ident,
    pub variants: Vec<UnitVariant<'a>>,
}

impl<'a> UnitEnum<'a> {
    pub fn parse(ast: &'a DeriveInput) -> syn::Result<Self> {
        reject_generics(ast)?;

        let Data::Enum(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`JsonEnum` can only be derived for enums",
            ));
        };

        let mut variants = Vec::with_capacity(data.variants.len());
        for variant in &data.variants {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    variant,
                    "`JsonEnum` only supports unit variants",
                ));
            }

            let mut name = LitStr::new(&variant.ident.to_string(), variant.ident.span());
            for attr in &variant.attrs {
                if !attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                    continue;
                }
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") {
                        name = meta.value()?.parse()?;
                        Ok(())
                    } else {
                        Err(meta.error("expected `rename`"))
                    }
                })?;
            }

            if let Some(prev) = variants.iter().find(|v: &&UnitVariant| v.name.value() == name.value()) {
                return Err(syn::Error::new(
                    name.span(),
                    format!("variant name `{}` is already used by `{}`", name.value(), prev.ident),
                ));
            }

            variants.push(UnitVariant {
                ident: &variant.ident,
                name,
            });
        }

        Ok(Self {
            ident: &ast.ident,
            variants,
        })
    }
}
