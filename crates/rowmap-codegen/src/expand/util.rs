use proc_macro2::{Literal, Span, TokenStream};
use quote::quote;

/// An unsuffixed integer literal, negative values included.
pub(crate) fn int(v: i128) -> TokenStream {
    let lit = Literal::u128_unsuffixed(v.unsigned_abs());

    if v < 0 {
        quote!(-#lit)
    } else {
        quote!(#lit)
    }
}

pub(crate) fn variant(name: &str) -> syn::Ident {
    syn::Ident::new(name, Span::call_site())
}

/// Creates the name of the constant holding a field's first column slot,
/// prefixed to avoid collisions with user items.
pub(crate) fn slot(index: usize) -> syn::Ident {
    quote::format_ident!("__ROWMAP_SLOT_{index}")
}
