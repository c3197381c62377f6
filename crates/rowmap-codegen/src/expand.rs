mod coerce;
mod materializer;
mod row_enum;
mod schema;
mod setter;
mod util;

use crate::schema::{Mapper, RowEnum};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The type being expanded
    mapper: &'a Mapper,

    /// Path prefix for rowmap types
    rowmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &self.mapper.ident;
        let columns = self.expand_columns_const();
        let schema = self.expand_schema_fn();
        let set_field = self.expand_set_field();
        let resolve_column = self.expand_resolve_column();
        let bind_column = self.expand_bind_column();
        let from_row = self.expand_from_row_impl();

        wrap_in_const(quote! {
            impl #rowmap::RowMapper for #ident {
                #columns
                #schema
                #set_field
                #resolve_column
                #bind_column
            }

            #from_row
        })
    }
}

pub(super) fn mapper(mapper: &Mapper) -> TokenStream {
    Expand {
        mapper,
        rowmap: quote!(_rowmap::codegen_support),
    }
    .expand()
}

pub(super) fn row_enum(row_enum: &RowEnum) -> TokenStream {
    let rowmap = quote!(_rowmap::codegen_support);
    wrap_in_const(row_enum::expand(row_enum, &rowmap))
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}
