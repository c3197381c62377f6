use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase,
};

/// The name a field is bound by.
#[derive(Debug)]
pub(crate) struct Name {
    /// Bound name, matched ignoring case
    pub(crate) bound: String,
}

impl Name {
    pub(crate) fn from_ident(
        ident: &syn::Ident,
        rename: Option<&syn::LitStr>,
        rule: Option<RenameRule>,
    ) -> Self {
        if let Some(rename) = rename {
            return Self {
                bound: rename.value(),
            };
        }

        let ident = unraw(ident);

        let bound = match rule {
            Some(rule) => rule.apply(&ident),
            None => ident,
        };

        Self { bound }
    }

    /// Key used to detect names that collide once case is ignored.
    pub(crate) fn folded(&self) -> String {
        self.bound.to_lowercase()
    }
}

/// The identifier as written, without any `r#` prefix.
pub(crate) fn unraw(ident: &syn::Ident) -> String {
    let ident = ident.to_string();

    match ident.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => ident,
    }
}

/// A `#[row(rename_all = "..")]` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    LowerCase,
    UpperCase,
    PascalCase,
    CamelCase,
    SnakeCase,
    ScreamingSnakeCase,
    KebabCase,
}

impl RenameRule {
    pub(crate) fn from_lit(lit: &syn::LitStr) -> syn::Result<Self> {
        Ok(match lit.value().as_str() {
            "lowercase" => RenameRule::LowerCase,
            "UPPERCASE" => RenameRule::UpperCase,
            "PascalCase" => RenameRule::PascalCase,
            "camelCase" => RenameRule::CamelCase,
            "snake_case" => RenameRule::SnakeCase,
            "SCREAMING_SNAKE_CASE" => RenameRule::ScreamingSnakeCase,
            "kebab-case" => RenameRule::KebabCase,
            _ => {
                return Err(syn::Error::new_spanned(
                    lit,
                    "unknown rename rule; expected one of \"lowercase\", \"UPPERCASE\", \
                     \"PascalCase\", \"camelCase\", \"snake_case\", \"SCREAMING_SNAKE_CASE\", \
                     \"kebab-case\"",
                ))
            }
        })
    }

    pub(crate) fn apply(self, field: &str) -> String {
        match self {
            RenameRule::LowerCase => field.to_ascii_lowercase(),
            RenameRule::UpperCase => field.to_ascii_uppercase(),
            RenameRule::PascalCase => field.to_upper_camel_case(),
            RenameRule::CamelCase => field.to_lower_camel_case(),
            RenameRule::SnakeCase => field.to_snake_case(),
            RenameRule::ScreamingSnakeCase => field.to_shouty_snake_case(),
            RenameRule::KebabCase => field.to_kebab_case(),
        }
    }
}
