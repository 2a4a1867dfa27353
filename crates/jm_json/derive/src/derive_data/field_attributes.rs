use syn::spanned::Spanned;
use syn::{Attribute, Expr, ExprArray, Lit, LitBool, LitStr};

use crate::RECORD_ATTRIBUTE_NAME;

/// The JSON key of a field.
#[derive(Debug, Clone)]
pub(crate) enum FieldKey {
    /// The field name.
    Ident,
    /// `#[record(key = "...")]`
    Custom(LitStr),
    /// `#[record(path = ["a", "b"])]`, joined with the key separator.
    Path(Vec<LitStr>),
}

/// The `#[record(...)]` attributes of a struct field.
#[derive(Debug, Clone)]
pub(crate) struct FieldAttributes {
    pub key: FieldKey,
    pub optional: bool,
    pub skip: bool,
}

impl Default for FieldAttributes {
    #[inline]
    fn default() -> Self {
        Self {
            key: FieldKey::Ident,
            optional: false,
            skip: false,
        }
    }
}

impl FieldAttributes {
    /// Examples:
    /// - `#[record(key = "id")]`
    /// - `#[record(path = ["address", "city"])]`
    /// - `#[record(optional)]`, `#[record(optional = false)]`
    /// - `#[record(skip)]`
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("key") {
                    res.set_key(FieldKey::Custom(meta.value()?.parse()?), meta.path.span())
                } else if meta.path.is_ident("path") {
                    let array: ExprArray = meta.value()?.parse()?;
                    res.set_key(FieldKey::Path(parse_segments(&array)?), meta.path.span())
                } else if meta.path.is_ident("optional") {
                    res.optional = match meta.value() {
                        Ok(value) => value.parse::<LitBool>()?.value(),
                        Err(_) => true,
                    };
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    res.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `key`, `path`, `optional` or `skip`"))
                }
            })?;
        }

        Ok(res)
    }

    fn set_key(&mut self, key: FieldKey, span: proc_macro2::Span) -> syn::Result<()> {
        if !matches!(self.key, FieldKey::Ident) {
            return Err(syn::Error::new(span, "the key of this field is already set"));
        }
        self.key = key;
        Ok(())
    }
}

fn parse_segments(array: &ExprArray) -> syn::Result<Vec<LitStr>> {
    if array.elems.is_empty() {
        return Err(syn::Error::new(array.span(), "`path` needs at least one segment"));
    }
    array
        .elems
        .iter()
        .map(|elem| match elem {
            Expr::Lit(expr) => match &expr.lit {
                Lit::Str(segment) if !segment.value().is_empty() => Ok(segment.clone()),
                _ => Err(syn::Error::new(elem.span(), "expected a non-empty string literal")),
            },
            _ => Err(syn::Error::new(elem.span(), "expected a string literal")),
        })
        .collect()
}
