mod expand;
mod schema;

use proc_macro2::TokenStream;

/// Expands `#[derive(RowMapper)]`.
pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::DeriveInput = syn::parse2(input)?;
    let mapper = schema::Mapper::from_ast(&item)?;

    Ok(expand::mapper(&mapper))
}

/// Expands `#[derive(RowEnum)]`.
pub fn generate_enum(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::DeriveInput = syn::parse2(input)?;
    let row_enum = schema::RowEnum::from_ast(&item)?;

    Ok(expand::row_enum(&row_enum))
}
