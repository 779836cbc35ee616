use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Error, Fields};

use crate::attr::{ContainerAttrs, FieldAttrs};
use crate::util::where_clause_with_bounds;

// derive_mappable
pub fn derive_mappable(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    expand(&input).unwrap_or_else(|err| err.to_compile_error())
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    let container = ContainerAttrs::parse(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            other => {
                return Err(Error::new_spanned(
                    other,
                    "Mappable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new_spanned(
                ident,
                "Mappable can only be derived for structs with named fields",
            ))
        }
    };

    let mut field_exprs = Vec::with_capacity(fields.len());
    for field in fields {
        let attrs = FieldAttrs::parse(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let declared = field.ident.as_ref().expect("named field").unraw().to_string();
        let ty = &field.ty;
        let mut expr = quote! {
            ::esmap::Field::new(#declared, <#ty as ::esmap::Mappable>::type_descriptor())
        };

        let name_tag = attrs
            .rename
            .or_else(|| container.rename_all.map(|rule| rule.apply(&declared)));
        if let Some(tag) = name_tag {
            expr = quote!(#expr.name_tag(#tag));
        }
        if let Some(tag) = attrs.es {
            expr = quote!(#expr.es(#tag));
        }
        if attrs.flatten {
            expr = quote!(#expr.embedded());
        }
        field_exprs.push(expr);
    }

    let name = container.rename.unwrap_or_else(|| ident.unraw().to_string());
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let bounds: Vec<TokenStream> = input
        .generics
        .type_params()
        .map(|param| {
            let param = &param.ident;
            quote!(#param: ::esmap::Mappable)
        })
        .collect();
    let where_clause = where_clause_with_bounds(where_clause, &bounds);

    Ok(quote! {
        impl #impl_generics ::esmap::Mappable for #ident #ty_generics #where_clause {
            fn type_descriptor() -> ::esmap::TypeDescriptor {
                ::esmap::TypeDescriptor::Struct(
                    ::esmap::StructDescriptor::new(#name)
                        #(.field(#field_exprs))*
                )
            }
        }
    })
}
