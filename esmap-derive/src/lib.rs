use proc_macro::TokenStream;

mod attr;
mod mappable;
mod util;

/// Derives `esmap::Mappable` for a struct with named fields.
///
/// Field names come from `#[serde(rename = "..")]` or the container's
/// `#[serde(rename_all = "..")]`. `#[es("type,flag,..")]` carries the
/// Elasticsearch type and flags, `#[serde(flatten)]` or `#[es(flatten)]`
/// inlines a nested struct and `#[serde(skip)]` leaves a field out.
#[proc_macro_derive(Mappable, attributes(es, serde))]
pub fn derive_mappable(input: TokenStream) -> TokenStream {
    mappable::derive_mappable(input.into()).into()
}
