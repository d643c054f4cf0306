//! `Reflect` / `Struct` impl generation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, GenericParam, Generics};

use crate::fields::ReflectField;
use crate::structs::ContainerMeta;

/// Add `Reflect + Clone` bounds to every type parameter.
fn bounded_generics(generics: &Generics, krate: &syn::Path) -> Result<Generics, syn::Error> {
    let mut generics = generics.clone();
    for param in &mut generics.params {
        match param {
            GenericParam::Type(type_param) => {
                type_param.bounds.push(syn::parse_quote!(#krate::Reflect));
                type_param.bounds.push(syn::parse_quote!(::core::clone::Clone));
            }
            GenericParam::Lifetime(lifetime) => {
                return Err(syn::Error::new_spanned(
                    lifetime,
                    "Reflect requires 'static types, lifetime parameters are not supported",
                ));
            }
            GenericParam::Const(_) => {}
        }
    }
    Ok(generics)
}

/// Shared plumbing of every generated impl
fn common_methods(krate: &syn::Path) -> TokenStream {
    quote! {
        fn descriptor(&self) -> #krate::TypeDescriptor {
            <Self as #krate::Reflect>::type_descriptor()
        }

        fn as_any(&self) -> &dyn ::core::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
            self
        }

        fn assign(&mut self, src: &dyn #krate::Reflect) -> ::core::result::Result<(), #krate::FieldError> {
            match src.as_any().downcast_ref::<Self>() {
                ::core::option::Option::Some(value) => {
                    ::core::clone::Clone::clone_from(self, value);
                    ::core::result::Result::Ok(())
                }
                ::core::option::Option::None => ::core::result::Result::Err(
                    #krate::FieldError::incompatible(src.type_name(), ::core::any::type_name::<Self>()),
                ),
            }
        }
    }
}

fn scan_method(container: &ContainerMeta, krate: &syn::Path) -> TokenStream {
    if container.scan {
        quote! {
            fn as_scan_mut(&mut self) -> ::core::option::Option<&mut dyn #krate::Scan> {
                ::core::option::Option::Some(self)
            }
        }
    } else {
        quote! {}
    }
}

/// Generate `Reflect` and `Struct` for a struct with named fields.
pub(crate) fn generate_struct_impl(
    input: &DeriveInput,
    container: &ContainerMeta,
    fields: &[ReflectField<'_>],
) -> Result<TokenStream, syn::Error> {
    let krate = container.crate_path();
    let name = &input.ident;
    let generics = bounded_generics(&input.generics, &krate)?;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let registered: Vec<&ReflectField<'_>> = fields.iter().filter(|field| !field.meta.skip).collect();

    let field_defs = registered.iter().map(|field| {
        let field_name = &field.name;
        let ty = field.ty;
        let embedded = field.meta.embed.then(|| quote! { .embedded() });
        let readonly = field.meta.readonly.then(|| quote! { .readonly() });
        quote! {
            #krate::FieldDef::new(#field_name, <#ty as #krate::Reflect>::type_descriptor)
                #embedded
                #readonly
        }
    });

    let blank_fields = fields.iter().map(|field| {
        let ident = field.ident;
        let ty = field.ty;
        if field.meta.skip {
            quote! { #ident: ::core::default::Default::default() }
        } else {
            quote! { #ident: <#ty as #krate::Reflect>::blank() }
        }
    });

    let blank_checks = registered.iter().map(|field| {
        let ident = field.ident;
        quote! { && #krate::Reflect::is_blank(&self.#ident) }
    });

    let indices: Vec<usize> = (0..registered.len()).collect();
    let idents: Vec<&syn::Ident> = registered.iter().map(|field| field.ident).collect();
    let scan = scan_method(container, &krate);
    let common = common_methods(&krate);

    Ok(quote! {
        impl #impl_generics #krate::Reflect for #name #ty_generics #where_clause {
            fn type_descriptor() -> #krate::TypeDescriptor {
                #krate::TypeDescriptor::structure::<Self>(::std::vec![#(#field_defs),*])
            }

            fn blank() -> Self {
                Self {
                    #(#blank_fields),*
                }
            }

            fn kind(&self) -> #krate::Kind {
                #krate::Kind::Struct
            }

            fn is_blank(&self) -> bool {
                true #(#blank_checks)*
            }

            fn set_blank(&mut self) {
                *self = <Self as #krate::Reflect>::blank();
            }

            fn as_struct(&self) -> ::core::option::Option<&dyn #krate::Struct> {
                ::core::option::Option::Some(self)
            }

            fn as_struct_mut(&mut self) -> ::core::option::Option<&mut dyn #krate::Struct> {
                ::core::option::Option::Some(self)
            }

            #common
            #scan
        }

        impl #impl_generics #krate::Struct for #name #ty_generics #where_clause {
            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #krate::Reflect> {
                match index {
                    #(#indices => ::core::option::Option::Some(&self.#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #krate::Reflect> {
                match index {
                    #(#indices => ::core::option::Option::Some(&mut self.#idents),)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}

/// Generate `Reflect` for a type compared and assigned as a whole.
///
/// The type must be `Clone + PartialEq + Default`; its `Default` is the blank value.
pub(crate) fn generate_opaque_impl(
    input: &DeriveInput,
    container: &ContainerMeta,
) -> Result<TokenStream, syn::Error> {
    let krate = container.crate_path();
    let name = &input.ident;
    let generics = bounded_generics(&input.generics, &krate)?;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let scan = scan_method(container, &krate);
    let common = common_methods(&krate);

    Ok(quote! {
        impl #impl_generics #krate::Reflect for #name #ty_generics #where_clause {
            fn type_descriptor() -> #krate::TypeDescriptor {
                #krate::TypeDescriptor::opaque::<Self>()
            }

            fn blank() -> Self {
                ::core::default::Default::default()
            }

            fn kind(&self) -> #krate::Kind {
                #krate::Kind::Opaque
            }

            fn is_blank(&self) -> bool {
                *self == <Self as ::core::default::Default>::default()
            }

            fn set_blank(&mut self) {
                *self = ::core::default::Default::default();
            }

            #common
            #scan
        }
    })
}
