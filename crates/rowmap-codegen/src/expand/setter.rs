use super::Expand;
use crate::schema::FieldKind;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// `RowMapper::set_field`: one case-insensitive name check per settable
    /// field, in declaration order. Flattened fields hand the value to the
    /// nested type and take it back when nothing there matched.
    pub(super) fn expand_set_field(&self) -> TokenStream {
        let rowmap = &self.rowmap;

        let checks = self
            .mapper
            .fields
            .iter()
            .filter(|field| field.is_settable())
            .map(|field| {
                let ident = &field.ident;

                match &field.kind {
                    FieldKind::Bound(ty) => {
                        let name = &field.name.bound;
                        let coerce = self.expand_coerce(ty, &quote!(value));
                        let fallback = self.expand_fallback(ty);

                        quote! {
                            if #rowmap::eq_ignore_case(name, #name) {
                                self.#ident = (#coerce).unwrap_or_else(|_| #fallback);
                                return #rowmap::ControlFlow::Break(());
                            }
                        }
                    }
                    FieldKind::Flatten(ty) => quote! {
                        let value = match <#ty as #rowmap::RowMapper>::set_field(&mut self.#ident, name, value) {
                            #rowmap::ControlFlow::Continue(value) => value,
                            #rowmap::ControlFlow::Break(()) => return #rowmap::ControlFlow::Break(()),
                        };
                    },
                }
            });

        quote! {
            fn set_field(
                &mut self,
                name: &str,
                value: #rowmap::Value,
            ) -> #rowmap::ControlFlow<(), #rowmap::Value> {
                #( #checks )*
                #rowmap::ControlFlow::Continue(value)
            }
        }
    }
}
