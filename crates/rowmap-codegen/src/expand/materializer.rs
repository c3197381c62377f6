use super::{util, Expand};
use crate::schema::{Construct, Field, FieldKind};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Fields bound from row columns, each owning one or more column slots.
    fn column_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.mapper.fields.iter().filter(|field| field.is_column())
    }

    fn expand_slot_width(&self, field: &Field) -> TokenStream {
        let rowmap = &self.rowmap;

        match &field.kind {
            FieldKind::Bound(_) => quote!(1),
            FieldKind::Flatten(ty) => quote!(<#ty as #rowmap::RowMapper>::COLUMNS),
        }
    }

    pub(super) fn expand_columns_const(&self) -> TokenStream {
        let widths = self.column_fields().map(|field| self.expand_slot_width(field));

        quote! {
            const COLUMNS: usize = 0 #( + #widths )*;
        }
    }

    /// Constants holding the first slot of every column field. Flattened
    /// types occupy as many slots as they have columns.
    fn expand_slot_consts(&self) -> TokenStream {
        let mut prev: Option<(syn::Ident, TokenStream)> = None;
        let mut consts = vec![];

        for field in self.column_fields() {
            let slot = util::slot(field.index);
            let start = match &prev {
                Some((prev, width)) => quote!(#prev + #width),
                None => quote!(0),
            };

            consts.push(quote!(const #slot: usize = #start;));
            prev = Some((slot, self.expand_slot_width(field)));
        }

        quote!(#( #consts )*)
    }

    pub(super) fn expand_resolve_column(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let slot_consts = self.expand_slot_consts();

        let checks = self.column_fields().map(|field| {
            let slot = util::slot(field.index);

            match &field.kind {
                FieldKind::Bound(_) => {
                    let name = &field.name.bound;

                    quote! {
                        if #rowmap::eq_ignore_case(name, #name) {
                            return Some(#slot);
                        }
                    }
                }
                FieldKind::Flatten(ty) => quote! {
                    if let Some(slot) = <#ty as #rowmap::RowMapper>::resolve_column(name) {
                        return Some(#slot + slot);
                    }
                },
            }
        });

        quote! {
            fn resolve_column(name: &str) -> ::core::option::Option<usize> {
                #slot_consts
                #( #checks )*
                None
            }
        }
    }

    pub(super) fn expand_bind_column(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let slot_consts = self.expand_slot_consts();

        let arms = self.column_fields().map(|field| {
            let ident = &field.ident;
            let slot = util::slot(field.index);

            match &field.kind {
                FieldKind::Bound(ty) => {
                    let name = &field.name.bound;
                    let coerce = self.expand_coerce(ty, &quote!(value));

                    quote! {
                        #slot => {
                            self.#ident = (#coerce)
                                .map_err(|err| err.context(#rowmap::Error::bind_column(#name)))?;
                        }
                    }
                }
                FieldKind::Flatten(ty) => quote! {
                    slot if slot >= #slot && slot < #slot + <#ty as #rowmap::RowMapper>::COLUMNS => {
                        <#ty as #rowmap::RowMapper>::bind_column(&mut self.#ident, slot - #slot, value)?;
                    }
                },
            }
        });

        quote! {
            fn bind_column(&mut self, slot: usize, value: #rowmap::Value) -> #rowmap::Result<()> {
                #slot_consts

                match slot {
                    #( #arms )*
                    _ => {}
                }

                Ok(())
            }
        }
    }

    /// `FromRow`, only for types with a construction path.
    pub(super) fn expand_from_row_impl(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &self.mapper.ident;

        let construct = match &self.mapper.construct {
            Construct::Default => quote!(<Self as ::core::default::Default>::default()),
            Construct::Path(path) => quote!(#path()),
            Construct::None => return quote!(),
        };

        quote! {
            impl #rowmap::FromRow for #ident {
                fn construct() -> Self {
                    #construct
                }

                fn from_row<R: #rowmap::Row + ?Sized>(row: &R) -> #rowmap::Result<Self> {
                    let mut instance = <Self as #rowmap::FromRow>::construct();

                    for (name, value) in #rowmap::Row::columns(row) {
                        if let Some(slot) = <Self as #rowmap::RowMapper>::resolve_column(name) {
                            <Self as #rowmap::RowMapper>::bind_column(&mut instance, slot, value)?;
                        }
                    }

                    Ok(instance)
                }
            }
        }
    }
}
