use proc_macro2::TokenStream;
use quote::quote;
use syn::WhereClause;

pub fn where_clause_with_bounds(
    where_clause: Option<&WhereClause>,
    bounds: &[TokenStream],
) -> TokenStream {
    if bounds.is_empty() {
        return where_clause.map_or_else(|| quote!(), |wc| quote!(#wc));
    }

    match where_clause {
        Some(wc) if !wc.predicates.is_empty() => {
            let preds = &wc.predicates;
            let sep = if wc.predicates.trailing_punct() {
                quote!()
            } else {
                quote!(,)
            };
            quote!(where #preds #sep #(#bounds),*)
        }
        _ => quote!(where #(#bounds),*),
    }
}
