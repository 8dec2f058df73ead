//! This independent module is used to provide the required path.
//! So as to minimize changes when the `rj_reflect` structure is modified.
//!
//! The only special feature is the path of rj_reflect itself,
//! See [`rj_reflect`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `rj_reflect` crate.
///
/// 1. For crates that depend on `rj_reflect`, `::rj_reflect` is returned here.
/// 2. For crates that depend on `refjson`, `::refjson::reflect` is returned here.
/// 3. For crates that depend on `rj`, `::rj::reflect` is returned here.
/// 4. For other situations, `::rj_reflect` is returned here, but this may be incorrect.
///
/// The manifest is read once per build and shared, still the path is passed
/// around rather than reacquired.
pub(crate) fn rj_reflect() -> syn::Path {
    rj_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("rj_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod info;
mod ops;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn option_() -> TokenStream {
    quote! {
        ::core::option::Option
    }
}
