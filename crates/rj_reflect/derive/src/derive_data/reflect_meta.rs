use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, Type, TypeGenerics};

use super::TypeAttributes;

pub(crate) struct ReflectMeta<'a> {
    rj_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    // Deduplicated, in declaration order, so the generated `where` clause is
    // the same on every build.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("rj_reflect_path", &self.rj_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            rj_reflect_path: crate::path::rj_reflect(),
            attrs,
            ident,
            generics,
            active_types: Vec::new(),
        }
    }

    /// Used for [`ReflectStruct`](crate::derive_data::ReflectStruct),
    /// set the active field types during initialization.
    pub(super) fn set_active_types(&mut self, types: impl Iterator<Item = &'a Type>) {
        for ty in types {
            if !self.active_types.contains(ty) {
                self.active_types.push(ty.clone());
            }
        }
    }

    #[inline]
    pub fn rj_reflect_path(&self) -> &Path {
        &self.rj_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    /// The three parameters returned are `impl_generics`, `ty_generics`, `where_clause`.
    ///
    /// ```ignore
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics(&[quote!(Typed)]);
    ///
    /// quote! {
    ///     impl #impl_generics TraitName for #ident #ty_generics #where_clause {
    ///         /* ... */
    ///     }
    /// }
    /// ```
    ///
    /// Every active field type that mentions a type parameter gets the
    /// `bounds`, e.g. `Vec<T>: Typed + ToJson`. Non-generic field types are
    /// checked by the compiler directly and are not repeated.
    pub fn split_generics(
        &self,
        bounds: &[TokenStream],
    ) -> (ImplGenerics<'a>, TypeGenerics<'a>, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut generic_where_clause = quote! { where };

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        if !bounds.is_empty() {
            let predicates = self.field_type_predicates(bounds);
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        (impl_generics, ty_generics, generic_where_clause)
    }

    fn field_type_predicates<'b>(
        &'b self,
        bounds: &'b [TokenStream],
    ) -> impl Iterator<Item = TokenStream> + 'b {
        let type_param_idents = self
            .generics
            .type_params()
            .map(|type_param| type_param.ident.clone())
            .collect::<Vec<Ident>>();

        // Do any of the identifiers in `idents` appear in `token_stream`?
        fn is_any_ident_in_token_stream(idents: &[Ident], token_stream: TokenStream) -> bool {
            token_stream.into_iter().any(|token_tree| match token_tree {
                proc_macro2::TokenTree::Ident(ident) => idents.contains(&ident),
                proc_macro2::TokenTree::Group(group) => {
                    is_any_ident_in_token_stream(idents, group.stream())
                }
                _ => false,
            })
        }

        self.active_types.iter().filter_map(move |ty| {
            if !type_param_idents.is_empty()
                && is_any_ident_in_token_stream(&type_param_idents, ty.to_token_stream())
            {
                Some(quote! { #ty: #(#bounds)+* })
            } else {
                None
            }
        })
    }
}
