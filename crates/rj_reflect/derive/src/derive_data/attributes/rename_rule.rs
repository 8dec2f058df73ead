use syn::LitStr;

/// The key naming rule set by `#[record(rename_all = "...")]`.
///
/// Field identifiers are expected in `snake_case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    CamelCase,
    SnakeCase,
    PascalCase,
    ScreamingSnakeCase,
    KebabCase,
}

static RULES: &[(&str, RenameRule)] = &[
    ("camelCase", RenameRule::CamelCase),
    ("snake_case", RenameRule::SnakeCase),
    ("PascalCase", RenameRule::PascalCase),
    ("SCREAMING_SNAKE_CASE", RenameRule::ScreamingSnakeCase),
    ("kebab-case", RenameRule::KebabCase),
];

impl RenameRule {
    pub fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        let value = lit.value();
        RULES
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, rule)| *rule)
            .ok_or_else(|| {
                let names = RULES.iter().map(|(name, _)| format!("`{name}`"));
                syn::Error::new(
                    lit.span(),
                    format!(
                        "unknown rename rule, expected one of {}",
                        names.collect::<Vec<_>>().join(", "),
                    ),
                )
            })
    }

    /// Apply the rule to a `snake_case` field identifier.
    pub fn apply(self, field: &str) -> String {
        match self {
            Self::SnakeCase => field.to_owned(),
            Self::ScreamingSnakeCase => field.to_ascii_uppercase(),
            Self::KebabCase => field.replace('_', "-"),
            Self::CamelCase | Self::PascalCase => {
                let mut out = String::with_capacity(field.len());
                let mut upper = self == Self::PascalCase;
                for ch in field.chars() {
                    if ch == '_' {
                        upper = !out.is_empty() || self == Self::PascalCase;
                    } else if upper {
                        out.push(ch.to_ascii_uppercase());
                        upper = false;
                    } else {
                        out.push(ch);
                    }
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RenameRule;

    #[test]
    fn apply() {
        let field = "display_name_2";

        assert_eq!(RenameRule::CamelCase.apply(field), "displayName2");
        assert_eq!(RenameRule::PascalCase.apply(field), "DisplayName2");
        assert_eq!(RenameRule::SnakeCase.apply(field), "display_name_2");
        assert_eq!(RenameRule::ScreamingSnakeCase.apply(field), "DISPLAY_NAME_2");
        assert_eq!(RenameRule::KebabCase.apply(field), "display-name-2");

        assert_eq!(RenameRule::CamelCase.apply("_private"), "private");
        assert_eq!(RenameRule::PascalCase.apply("x"), "X");
    }
}
