use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::RECORD_ATTRIBUTE_NAME;

/// Field attributes, from `#[record(...)]` on a named field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[record(skip)]`, the field is left out of the table.
    pub skip: Option<Span>,
    /// `#[record(rename = "...")]`, a custom key.
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    /// Parse all `#[record(...)]` attributes of a field.
    ///
    /// Examples:
    /// - `#[record(skip)]`
    /// - `#[record(rename = "key")]`
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    this.skip = Some(meta.path.span());
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    if this.rename.is_some() {
                        return Err(meta.error("duplicate `rename` attribute"));
                    }
                    this.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported field attribute, expected `skip` or `rename`"))
                }
            })?;
        }

        if let (Some(span), Some(_)) = (this.skip, &this.rename) {
            return Err(syn::Error::new(span, "a skipped field cannot be renamed"));
        }

        Ok(this)
    }
}
