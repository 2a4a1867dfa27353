use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::UnitEnum;
use crate::path::{exports_, info_, value_};

/// Generates `JsonEnum`, `Typed`, `ToValue` and `FromValue`.
pub(crate) fn impl_json_enum(data: &UnitEnum, jm_json: &syn::Path) -> TokenStream {
    let exports = exports_(jm_json);
    let info = info_(jm_json);
    let value = value_(jm_json);
    let ident = data.ident;

    let variants = data.variants.iter().map(|variant| variant.ident);
    let names = data.variants.iter().map(|variant| &variant.name);
    let to_name = quote! { #(Self::#variants => #names,)* };

    let variants = data.variants.iter().map(|variant| variant.ident);
    let names = data.variants.iter().map(|variant| &variant.name);
    let from_name = quote! { #(#names => #exports::Some(Self::#variants),)* };

    let names = data.variants.iter().map(|variant| &variant.name);

    quote! {
        const _: () = {
            impl #value::JsonEnum for #ident {
                fn variant_name(&self) -> &'static str {
                    match *self {
                        #to_name
                    }
                }

                fn from_variant_name(name: &str) -> #exports::Option<Self> {
                    match name {
                        #from_name
                        _ => #exports::None,
                    }
                }

                #[inline]
                fn variant_names() -> &'static [&'static str] {
                    &[#(#names),*]
                }
            }

            impl #info::Typed for #ident {
                #[inline]
                fn type_info() -> #info::TypeInfo {
                    #info::TypeInfo::Scalar(#info::ScalarInfo::of::<Self>(#info::ScalarKind::Enum))
                }
            }

            impl #value::ToValue for #ident {
                #[inline]
                fn to_value(&self) -> #value::Value<'_> {
                    #value::Value::Enum(#exports::Cow::Borrowed(
                        <Self as #value::JsonEnum>::variant_name(self),
                    ))
                }
            }

            impl #value::FromValue for #ident {
                #[inline]
                fn from_value(
                    value: #value::Value<'static>,
                ) -> #exports::Result<Self, #value::ValueError> {
                    value.into_enum::<Self>()
                }
            }
        };
    }
}
