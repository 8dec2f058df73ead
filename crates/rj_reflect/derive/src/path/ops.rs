use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn to_json_(rj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rj_reflect_path::ops::ToJson
    }
}

#[inline]
pub(crate) fn from_json_(rj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rj_reflect_path::ops::FromJson
    }
}

#[inline]
pub(crate) fn json_ref_(rj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rj_reflect_path::ops::JsonRef
    }
}

#[inline]
pub(crate) fn json_mut_(rj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rj_reflect_path::ops::JsonMut
    }
}

#[inline]
pub(crate) fn struct_(rj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rj_reflect_path::ops::Struct
    }
}

#[inline]
pub(crate) fn struct_mut_(rj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rj_reflect_path::ops::StructMut
    }
}
