use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn typed_(rj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rj_reflect_path::info::Typed
    }
}

#[inline]
pub(crate) fn record_(rj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rj_reflect_path::info::Record
    }
}

#[inline]
pub(crate) fn category_(rj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rj_reflect_path::info::Category
    }
}

#[inline]
pub(crate) fn struct_info_(rj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rj_reflect_path::info::StructInfo
    }
}

#[inline]
pub(crate) fn named_field_(rj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rj_reflect_path::info::NamedField
    }
}
