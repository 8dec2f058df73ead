use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_from_json, impl_trait_record, impl_trait_to_json, impl_trait_typed};

use crate::derive_data::ReflectStruct;

/// Implement the full record support for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta);

    // trait: Record
    let record_trait_tokens = impl_trait_record(info);

    // trait: Struct + ToJson
    let struct_trait_tokens = impl_trait_struct(info);
    let to_json_trait_tokens = impl_trait_to_json(meta);

    // trait: StructMut + FromJson
    let (struct_mut_trait_tokens, from_json_trait_tokens) = if meta.attrs().impl_from_json {
        (impl_trait_struct_mut(info), impl_trait_from_json(meta))
    } else {
        (crate::utils::empty(), crate::utils::empty())
    };

    quote! {
        const _: () = {
            #typed_trait_tokens

            #record_trait_tokens

            #struct_trait_tokens

            #to_json_trait_tokens

            #struct_mut_trait_tokens

            #from_json_trait_tokens
        };
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let rj_reflect_path = meta.rj_reflect_path();
    let typed_ = crate::path::typed_(rj_reflect_path);
    let record_ = crate::path::record_(rj_reflect_path);
    let struct_ = crate::path::struct_(rj_reflect_path);
    let struct_info_ = crate::path::struct_info_(rj_reflect_path);
    let to_json_ = crate::path::to_json_(rj_reflect_path);
    let option_ = crate::path::option_();

    let members = info.active_fields().map(|field| field.member()).collect::<Vec<_>>();
    let keys = info.active_fields().map(|field| field.key.as_str());
    let indices = 0..members.len();

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) =
        meta.split_generics(&[typed_, to_json_.clone()]);

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            #[inline]
            fn struct_info(&self) -> &'static #struct_info_ {
                <Self as #record_>::STRUCT_INFO
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #to_json_> {
                match index {
                    #(#indices => #option_::Some(&self.#members as &dyn #to_json_),)*
                    _ => #option_::None,
                }
            }

            fn field(&self, name: &str) -> #option_<&dyn #to_json_> {
                match name {
                    #(#keys => #option_::Some(&self.#members as &dyn #to_json_),)*
                    _ => #option_::None,
                }
            }
        }
    }
}

/// Generate `StructMut` trait implementation tokens.
fn impl_trait_struct_mut(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let rj_reflect_path = meta.rj_reflect_path();
    let typed_ = crate::path::typed_(rj_reflect_path);
    let to_json_ = crate::path::to_json_(rj_reflect_path);
    let struct_mut_ = crate::path::struct_mut_(rj_reflect_path);
    let from_json_ = crate::path::from_json_(rj_reflect_path);
    let option_ = crate::path::option_();

    let members = info.active_fields().map(|field| field.member()).collect::<Vec<_>>();
    let keys = info.active_fields().map(|field| field.key.as_str());
    let indices = 0..members.len();

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) =
        meta.split_generics(&[typed_, to_json_, from_json_.clone()]);

    quote! {
        impl #impl_generics #struct_mut_ for #ident #ty_generics #where_clause {
            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #from_json_> {
                match index {
                    #(#indices => #option_::Some(&mut self.#members as &mut dyn #from_json_),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #from_json_> {
                match name {
                    #(#keys => #option_::Some(&mut self.#members as &mut dyn #from_json_),)*
                    _ => #option_::None,
                }
            }
        }
    }
}
