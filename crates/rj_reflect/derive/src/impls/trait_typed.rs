use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectMeta, ReflectStruct};

/// Generate implementation code for `Typed`.
pub(crate) fn impl_trait_typed(meta: &ReflectMeta) -> TokenStream {
    let rj_reflect_path = meta.rj_reflect_path();
    let typed_ = crate::path::typed_(rj_reflect_path);
    let category_ = crate::path::category_(rj_reflect_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&[]);

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            const CATEGORY: #category_ = #category_::Record;
        }
    }
}

/// Generate implementation code for `Record`.
///
/// See [`ReflectStruct::to_info_tokens`] for the field table.
pub(crate) fn impl_trait_record(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let rj_reflect_path = meta.rj_reflect_path();
    let typed_ = crate::path::typed_(rj_reflect_path);
    let record_ = crate::path::record_(rj_reflect_path);
    let struct_info_ = crate::path::struct_info_(rj_reflect_path);

    let info_tokens = info.to_info_tokens();

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&[typed_]);

    quote! {
        impl #impl_generics #record_ for #ident #ty_generics #where_clause {
            const STRUCT_INFO: &'static #struct_info_ = #info_tokens;
        }
    }
}
