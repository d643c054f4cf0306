use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase, ToShoutySnakeCase, ToSnakeCase};

/// Case convention applied to registered field names by `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum RenameRule {
    PascalCase,
    CamelCase,
    SnakeCase,
    ScreamingSnakeCase,
    KebabCase,
}

impl RenameRule {
    pub(super) fn parse(value: &str) -> Option<Self> {
        match value {
            "PascalCase" => Some(Self::PascalCase),
            "camelCase" => Some(Self::CamelCase),
            "snake_case" => Some(Self::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Some(Self::ScreamingSnakeCase),
            "kebab-case" => Some(Self::KebabCase),
            _ => None,
        }
    }

    pub(super) fn apply(self, name: &str) -> String {
        match self {
            Self::PascalCase => name.to_pascal_case(),
            Self::CamelCase => name.to_lower_camel_case(),
            Self::SnakeCase => name.to_snake_case(),
            Self::ScreamingSnakeCase => name.to_shouty_snake_case(),
            Self::KebabCase => name.to_kebab_case(),
        }
    }
}

/// Container-level `#[reflect(...)]` settings
#[derive(Debug, Default)]
pub(super) struct ContainerMeta {
    pub(super) rename_all: Option<RenameRule>,
    /// `as_scan_mut` hands out the type's own `Scan` impl
    pub(super) scan: bool,
    /// Compare and assign the type as a whole instead of field by field
    pub(super) opaque: bool,
    /// Path of the runtime crate, `::reflectutil` unless overridden
    pub(super) crate_path: Option<syn::Path>,
}

impl ContainerMeta {
    pub(super) fn crate_path(&self) -> syn::Path {
        self.crate_path
            .clone()
            .unwrap_or_else(|| syn::parse_quote!(::reflectutil))
    }
}

/// Field-level `#[reflect(...)]` settings
#[derive(Debug, Default)]
pub(super) struct FieldMeta {
    pub(super) rename: Option<String>,
    pub(super) embed: bool,
    pub(super) skip: bool,
    pub(super) readonly: bool,
}
