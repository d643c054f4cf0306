//! Field extraction
//!
//! Turns the named fields of a struct into the registered field list the
//! generated code is built from.

use syn::{Data, DeriveInput, Fields, punctuated::Punctuated, token::Comma};

use crate::attribute_parser;
use crate::structs::{ContainerMeta, FieldMeta};

/// A struct field as seen by the generated code
pub(crate) struct ReflectField<'a> {
    pub(crate) ident: &'a syn::Ident,
    pub(crate) ty: &'a syn::Type,
    /// Name registered in the field list
    pub(crate) name: String,
    pub(crate) meta: FieldMeta,
}

/// Extract named fields from a struct, returning a compile error for any other shape
pub(crate) fn extract_named_fields(input: &DeriveInput) -> Result<&Punctuated<syn::Field, Comma>, syn::Error> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => Ok(&named.named),
            _ => Err(syn::Error::new_spanned(
                input,
                "Reflect can only be derived for structs with named fields",
            )),
        },
        Data::Enum(_) => Err(syn::Error::new_spanned(
            input,
            "Reflect can only be derived for enums with #[reflect(opaque)]",
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            input,
            "Reflect cannot be derived for unions",
        )),
    }
}

/// Parse every field of the struct, applying `rename` and `rename_all`.
pub(crate) fn collect_fields<'a>(
    fields: &'a Punctuated<syn::Field, Comma>,
    container: &ContainerMeta,
) -> Result<Vec<ReflectField<'a>>, syn::Error> {
    let mut collected = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let meta = attribute_parser::parse_field_meta(field)?;
        let declared = ident.to_string();
        let declared = declared.strip_prefix("r#").unwrap_or(&declared);
        let name = match (&meta.rename, container.rename_all) {
            (Some(rename), _) => rename.clone(),
            (None, Some(rule)) => rule.apply(declared),
            (None, None) => declared.to_owned(),
        };
        collected.push(ReflectField {
            ident,
            ty: &field.ty,
            name,
            meta,
        });
    }
    Ok(collected)
}
