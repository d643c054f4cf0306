use super::structs::{ContainerMeta, FieldMeta, RenameRule};
use syn::parse::Parser;
use syn::{Lit, Meta, punctuated::Punctuated, token::Comma};

/// Collect the items of every `#[reflect(...)]` attribute in `attrs`.
fn reflect_items(attrs: &[syn::Attribute]) -> Result<Vec<Meta>, syn::Error> {
    let mut items = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("reflect") {
            continue;
        }
        let Meta::List(meta_list) = &attr.meta else {
            return Err(syn::Error::new_spanned(
                attr,
                "expected #[reflect(...)] with a list of settings",
            ));
        };
        let metas = Punctuated::<Meta, Comma>::parse_terminated.parse2(meta_list.tokens.clone())?;
        items.extend(metas);
    }
    Ok(items)
}

/// The string literal of `key = "value"`.
fn string_value(nv: &syn::MetaNameValue) -> Result<String, syn::Error> {
    if let syn::Expr::Lit(expr_lit) = &nv.value
        && let Lit::Str(s) = &expr_lit.lit
    {
        return Ok(s.value());
    }
    Err(syn::Error::new_spanned(&nv.value, "expected a string literal"))
}

/// Parses container settings from struct- or enum-level `#[reflect(...)]` attributes.
pub(crate) fn parse_container_meta(attrs: &[syn::Attribute]) -> Result<ContainerMeta, syn::Error> {
    let mut meta = ContainerMeta::default();

    for item in reflect_items(attrs)? {
        match &item {
            Meta::Path(path) if path.is_ident("scan") => meta.scan = true,
            Meta::Path(path) if path.is_ident("opaque") => meta.opaque = true,
            Meta::NameValue(nv) if nv.path.is_ident("rename_all") => {
                let value = string_value(nv)?;
                meta.rename_all = Some(RenameRule::parse(&value).ok_or_else(|| {
                    syn::Error::new_spanned(
                        &nv.value,
                        format!(
                            "unknown rename_all rule `{value}`, expected one of PascalCase, camelCase, snake_case, SCREAMING_SNAKE_CASE, kebab-case"
                        ),
                    )
                })?);
            }
            Meta::NameValue(nv) if nv.path.is_ident("crate") => {
                let value = string_value(nv)?;
                meta.crate_path = Some(syn::parse_str::<syn::Path>(&value).map_err(|_| {
                    syn::Error::new_spanned(&nv.value, format!("`{value}` is not a valid path"))
                })?);
            }
            other => {
                return Err(syn::Error::new_spanned(other, "unknown container attribute"));
            }
        }
    }
    Ok(meta)
}

/// Parses field settings from `#[reflect(...)]` attributes on a struct field.
pub(crate) fn parse_field_meta(field: &syn::Field) -> Result<FieldMeta, syn::Error> {
    let mut meta = FieldMeta::default();

    for item in reflect_items(&field.attrs)? {
        match &item {
            Meta::Path(path) if path.is_ident("embed") || path.is_ident("flatten") => {
                meta.embed = true;
            }
            Meta::Path(path) if path.is_ident("skip") => meta.skip = true,
            Meta::Path(path) if path.is_ident("readonly") => meta.readonly = true,
            Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                meta.rename = Some(string_value(nv)?);
            }
            other => {
                return Err(syn::Error::new_spanned(other, "unknown field attribute"));
            }
        }
    }

    if meta.skip && (meta.embed || meta.readonly || meta.rename.is_some()) {
        return Err(syn::Error::new_spanned(
            field,
            "`skip` cannot be combined with other reflect attributes",
        ));
    }
    Ok(meta)
}
