mod attribute_parser;
mod codegen;
mod fields;
mod structs;

use proc_macro::TokenStream;
use syn::{Data, DeriveInput, parse_macro_input};

/// Derive `reflectutil::Reflect` (and `reflectutil::Struct`) for a struct with named fields.
///
/// The type must implement `Clone`.
///
/// # Container attributes
/// - `#[reflect(rename_all = "...")]`: case rule for registered names
///   (`PascalCase`, `camelCase`, `snake_case`, `SCREAMING_SNAKE_CASE`, `kebab-case`)
/// - `#[reflect(scan)]`: the type implements `reflectutil::Scan` and accepts
///   otherwise unconvertible sources through it
/// - `#[reflect(opaque)]`: compare and assign the value as a whole; the type
///   must also be `PartialEq + Default`. Works on enums.
/// - `#[reflect(crate = "path")]`: where the runtime crate lives
///
/// # Field attributes
/// - `#[reflect(rename = "...")]`: registered name of the field
/// - `#[reflect(embed)]` / `#[reflect(flatten)]`: promote the fields of this struct-typed field
/// - `#[reflect(readonly)]`: never written by the copier
/// - `#[reflect(skip)]`: not registered; blank value comes from `Default`
///
/// ```ignore
/// #[derive(Clone, Reflect)]
/// #[reflect(rename_all = "PascalCase")]
/// struct Order {
///     #[reflect(embed)]
///     base: Base,
///     #[reflect(readonly)]
///     order_id: u64,
///     total: f64,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let container = attribute_parser::parse_container_meta(&input.attrs)?;

    if container.opaque {
        if container.rename_all.is_some() {
            return Err(syn::Error::new_spanned(
                input,
                "rename_all has no effect on an opaque type",
            ));
        }
        if let Data::Union(_) = &input.data {
            return Err(syn::Error::new_spanned(input, "Reflect cannot be derived for unions"));
        }
        return codegen::generate_opaque_impl(input, &container);
    }

    let named = fields::extract_named_fields(input)?;
    let collected = fields::collect_fields(named, &container)?;
    codegen::generate_struct_impl(input, &container, &collected)
}
