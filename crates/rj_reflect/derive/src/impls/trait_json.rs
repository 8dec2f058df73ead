use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `ToJson`, viewing the value as a `Struct`.
pub(crate) fn impl_trait_to_json(meta: &ReflectMeta) -> TokenStream {
    let rj_reflect_path = meta.rj_reflect_path();
    let typed_ = crate::path::typed_(rj_reflect_path);
    let to_json_ = crate::path::to_json_(rj_reflect_path);
    let json_ref_ = crate::path::json_ref_(rj_reflect_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) =
        meta.split_generics(&[typed_, to_json_.clone()]);

    quote! {
        impl #impl_generics #to_json_ for #ident #ty_generics #where_clause {
            #[inline]
            fn json_ref(&self) -> #json_ref_<'_> {
                #json_ref_::Record(self)
            }
        }
    }
}

/// Generate implementation code for `FromJson`, viewing the value as a `StructMut`.
pub(crate) fn impl_trait_from_json(meta: &ReflectMeta) -> TokenStream {
    let rj_reflect_path = meta.rj_reflect_path();
    let typed_ = crate::path::typed_(rj_reflect_path);
    let to_json_ = crate::path::to_json_(rj_reflect_path);
    let from_json_ = crate::path::from_json_(rj_reflect_path);
    let json_mut_ = crate::path::json_mut_(rj_reflect_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) =
        meta.split_generics(&[typed_, to_json_, from_json_.clone()]);

    quote! {
        impl #impl_generics #from_json_ for #ident #ty_generics #where_clause {
            #[inline]
            fn json_mut(&mut self) -> #json_mut_<'_> {
                #json_mut_::Record(self)
            }
        }
    }
}
