use syn::{Attribute, LitBool, LitStr};

use super::RenameRule;
use crate::RECORD_ATTRIBUTE_NAME;

/// Container attributes, from `#[record(...)]` on the struct itself.
#[derive(Debug)]
pub(crate) struct TypeAttributes {
    /// Default is `true`, use `#[record(FromJson = false)]` to disable
    /// `StructMut` and `FromJson`.
    pub impl_from_json: bool,
    /// Use `#[record(rename_all = "...")]` to set it.
    pub rename_all: Option<RenameRule>,
}

impl Default for TypeAttributes {
    #[inline]
    fn default() -> Self {
        Self {
            impl_from_json: true,
            rename_all: None,
        }
    }
}

impl TypeAttributes {
    /// Parse all `#[record(...)]` attributes of a type.
    ///
    /// Examples:
    /// - `#[record(FromJson = false)]`
    /// - `#[record(rename_all = "camelCase")]`
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("FromJson") {
                    let value: LitBool = meta.value()?.parse()?;
                    this.impl_from_json = value.value;
                    Ok(())
                } else if meta.path.is_ident("rename_all") {
                    if this.rename_all.is_some() {
                        return Err(meta.error("duplicate `rename_all` attribute"));
                    }
                    let value: LitStr = meta.value()?.parse()?;
                    this.rename_all = Some(RenameRule::from_lit(&value)?);
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported container attribute, expected `FromJson` or `rename_all`",
                    ))
                }
            })?;
        }

        Ok(this)
    }
}
