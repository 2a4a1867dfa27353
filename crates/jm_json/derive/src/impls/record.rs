use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::LitStr;
use syn::ext::IdentExt;

use crate::derive_data::{FieldKey, RecordField, RecordStruct};
use crate::path::{exports_, info_, record_, value_};

/// Generates `Record`, `Schema`, `Typed`, `ToValue` and `FromValue`.
pub(crate) fn impl_record(data: &RecordStruct, jm_json: &syn::Path) -> TokenStream {
    let exports = exports_(jm_json);
    let info = info_(jm_json);
    let record = record_(jm_json);
    let value = value_(jm_json);
    let ident = data.ident;

    let accessors = data
        .fields
        .iter()
        .map(|field| impl_accessors(ident, field, &record, &value, &exports));
    let field_specs = data
        .fields
        .iter()
        .map(|field| impl_field_spec(field, &info));

    quote! {
        const _: () = {
            impl #record::Record for #ident {
                #[inline]
                fn record_info(&self) -> &'static #info::RecordInfo {
                    <Self as #record::Schema>::schema()
                }

                #[inline]
                fn as_any(&self) -> &dyn #exports::Any {
                    self
                }

                #[inline]
                fn as_any_mut(&mut self) -> &mut dyn #exports::Any {
                    self
                }

                #[inline]
                fn into_any(self: #exports::Box<Self>) -> #exports::Box<dyn #exports::Any> {
                    self
                }
            }

            impl #record::Schema for #ident {
                fn schema() -> &'static #info::RecordInfo {
                    static CELL: #info::RecordInfoCell = #info::RecordInfoCell::new();
                    CELL.get_or_init(|| {
                        #(#accessors)*

                        #info::RecordInfo::new::<#ident>(#exports::Vec::from([
                            #(#field_specs),*
                        ]))
                    })
                }
            }

            impl #info::Typed for #ident {
                #[inline]
                fn type_info() -> #info::TypeInfo {
                    #info::TypeInfo::Record(#info::RecordType::of::<Self>())
                }
            }

            impl #value::ToValue for #ident {
                #[inline]
                fn to_value(&self) -> #value::Value<'_> {
                    #value::Value::Record(#value::RecordValue::Borrowed(self))
                }
            }

            impl #value::FromValue for #ident {
                #[inline]
                fn from_value(
                    value: #value::Value<'static>,
                ) -> #exports::Result<Self, #value::ValueError> {
                    value.into_record::<Self>()
                }
            }
        };
    }
}

fn getter_ident(field: &RecordField) -> syn::Ident {
    format_ident!("__jm_get_{}", field.ident.unraw())
}

fn setter_ident(field: &RecordField) -> syn::Ident {
    format_ident!("__jm_set_{}", field.ident.unraw())
}

// Nested items cannot name `Self`, so the struct ident is used.
fn impl_accessors(
    ident: &syn::Ident,
    field: &RecordField,
    record: &TokenStream,
    value: &TokenStream,
    exports: &TokenStream,
) -> TokenStream {
    let member = field.ident;
    let ty = field.ty;
    let getter = getter_ident(field);
    let setter = setter_ident(field);

    quote! {
        fn #getter(
            record: &dyn #record::Record,
        ) -> #exports::Result<#value::Value<'_>, #value::ValueError> {
            let record = record.try_downcast_ref::<#ident>()?;
            #exports::Ok(<#ty as #value::ToValue>::to_value(&record.#member))
        }

        fn #setter(
            record: &mut dyn #record::Record,
            value: #value::Value<'static>,
        ) -> #exports::Result<(), #value::ValueError> {
            let record = record.try_downcast_mut::<#ident>()?;
            record.#member = <#ty as #value::FromValue>::from_value(value)?;
            #exports::Ok(())
        }
    }
}

fn impl_field_spec(field: &RecordField, info: &TokenStream) -> TokenStream {
    let ty = field.ty;
    let name = LitStr::new(&field.ident.unraw().to_string(), field.ident.span());
    let key = match &field.attrs.key {
        FieldKey::Ident => quote! { #name },
        FieldKey::Custom(key) => quote! { #key },
        FieldKey::Path(segments) if segments.len() == 1 => {
            let key = &segments[0];
            quote! { #key }
        }
        FieldKey::Path(segments) => quote! { #info::KeyPath::join(&[#(#segments),*]) },
    };
    let optional = field.attrs.optional;
    let getter = getter_ident(field);
    let setter = setter_ident(field);

    quote! {
        #info::FieldSpec::new::<#ty>(#name, #key, #getter, #setter).with_optional(#optional)
    }
}
