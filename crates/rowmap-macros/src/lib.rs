extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(RowMapper, attributes(row))]
pub fn derive_row_mapper(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[proc_macro_derive(RowEnum, attributes(row))]
pub fn derive_row_enum(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate_enum(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
