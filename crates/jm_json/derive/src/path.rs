//! Paths into `jm_json` used by the generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the access path to the `jm_json` crate, as seen by the caller.
///
/// 1. For crates that depend on `jm_json`, `::jm_json` is returned.
/// 2. For crates that depend on `jm_core`, `::jm_core::json` is returned.
/// 3. Otherwise `::jm_json` is returned, which is what `jm_json` itself uses.
///
/// Reading the manifest is not cheap, call this once per expansion.
pub(crate) fn jm_json() -> syn::Path {
    jm_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("jm_json"))
}

#[inline(always)]
pub(crate) fn exports_(jm_json: &syn::Path) -> TokenStream {
    quote! { #jm_json::__macro_exports }
}

#[inline(always)]
pub(crate) fn info_(jm_json: &syn::Path) -> TokenStream {
    quote! { #jm_json::info }
}

#[inline(always)]
pub(crate) fn record_(jm_json: &syn::Path) -> TokenStream {
    quote! { #jm_json::record }
}

#[inline(always)]
pub(crate) fn value_(jm_json: &syn::Path) -> TokenStream {
    quote! { #jm_json::value }
}
