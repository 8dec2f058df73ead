use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Field, Fields, Ident, Member};

use super::{FieldAttributes, ReflectMeta, TypeAttributes};

/// A named field of the struct, with its parsed attributes.
pub(crate) struct StructField<'a> {
    /// The original field.
    pub data: &'a Field,
    pub ident: &'a Ident,
    pub attrs: FieldAttributes,
    /// The JSON key, after `rename` and `rename_all`.
    pub key: String,
}

impl StructField<'_> {
    /// The field access member, e.g. `name` in `self.name`.
    #[inline]
    pub fn member(&self) -> Member {
        Member::Named(self.ident.clone())
    }
}

/// A struct with named fields that `#[derive(Record)]` accepted.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    /// Validate the input and collect its fields.
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => &named.named,
                Fields::Unnamed(_) | Fields::Unit => {
                    return Err(syn::Error::new(
                        ast.ident.span(),
                        "`Record` can only be derived for structs with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Record` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Record` cannot be derived for unions",
                ));
            }
        };

        let mut fields: Vec<StructField<'a>> = Vec::with_capacity(named.len());
        for data in named {
            let field_attrs = FieldAttributes::parse_attrs(&data.attrs)?;
            let ident = data
                .ident
                .as_ref()
                .ok_or_else(|| syn::Error::new(data.span(), "expected a named field"))?;

            let key = match (&field_attrs.rename, attrs.rename_all) {
                (Some(rename), _) => rename.value(),
                (None, Some(rule)) => rule.apply(&ident.unraw().to_string()),
                (None, None) => ident.unraw().to_string(),
            };

            if field_attrs.skip.is_none() {
                if let Some(other) = fields
                    .iter()
                    .find(|f| f.attrs.skip.is_none() && f.key == key)
                {
                    return Err(syn::Error::new(
                        data.span(),
                        format!("duplicate key `{key}`, already used by `{}`", other.ident),
                    ));
                }
            }

            fields.push(StructField {
                data,
                ident,
                attrs: field_attrs,
                key,
            });
        }

        if fields.iter().all(|field| field.attrs.skip.is_some()) {
            return Err(syn::Error::new(
                ast.ident.span(),
                "`Record` requires at least one field that is not skipped",
            ));
        }

        let mut meta = ReflectMeta::new(attrs, &ast.ident, &ast.generics);
        meta.set_active_types(
            fields
                .iter()
                .filter(|field| field.attrs.skip.is_none())
                .map(|field| &field.data.ty),
        );

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Get an iterator of fields which are exposed to the engine, in
    /// declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.attrs.skip.is_none())
    }

    /// Generate the field table:
    ///
    /// ```ignore
    /// &_path_::StructInfo::new("Foo", &[
    ///     _path_::NamedField::new::<i32>("a"),
    ///     ......
    /// ])
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let rj_reflect_path = self.meta.rj_reflect_path();
        let struct_info_ = crate::path::struct_info_(rj_reflect_path);
        let named_field_ = crate::path::named_field_(rj_reflect_path);

        let type_ident = self.meta.ident().unraw().to_string();
        let fields = self.active_fields().map(|field| {
            let ty = &field.data.ty;
            let key = &field.key;
            quote! {
                #named_field_::new::<#ty>(#key)
            }
        });

        quote! {
            &#struct_info_::new(#type_ident, &[ #(#fields),* ])
        }
    }
}
