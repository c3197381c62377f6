use super::{util, Expand};
use crate::schema::{Ty, TyKind};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Expression converting `value` to the field type, evaluating to
    /// `Result<T>`.
    ///
    /// Strings are never formatted or parsed. Arrays are only reinterpreted,
    /// unless their items are user types. Every other category goes through
    /// an exact fast path before the general `TryFrom<Value>` conversion.
    pub(super) fn expand_coerce(&self, ty: &Ty, value: &TokenStream) -> TokenStream {
        let rowmap = &self.rowmap;
        let rust_ty = &ty.ty;

        match &ty.kind {
            TyKind::String => quote!(#rowmap::Value::into_string(#value)),
            TyKind::Nullable(inner) => {
                let inner = self.expand_coerce(inner, &quote!(value));

                quote! {
                    match #value {
                        #rowmap::Value::Null => Ok(None),
                        value => (#inner).map(Some),
                    }
                }
            }
            // Items of user types have no `Exact` impl, so each goes through
            // its own `TryFrom<Value>`
            TyKind::Array(item) if item.contains_other() => {
                let item = self.expand_coerce(item, &quote!(value));
                quote!(#rowmap::Value::into_array_with(#value, |value| #item))
            }
            TyKind::Array(item) => {
                let item_ty = &item.ty;
                quote!(#rowmap::Value::into_array::<#item_ty>(#value))
            }
            TyKind::Enum => quote! {
                <<#rust_ty as #rowmap::RowEnum>::Repr as ::core::convert::TryFrom<#rowmap::Value>>::try_from(#value)
                    .and_then(<#rust_ty as #rowmap::RowEnum>::from_repr)
            },
            TyKind::Other => quote! {
                <#rust_ty as ::core::convert::TryFrom<#rowmap::Value>>::try_from(#value)
                    .map_err(#rowmap::Error::from)
            },
            kind => match kind.exact_variant() {
                Some(variant) => {
                    let variant = util::variant(variant);

                    quote! {
                        match #value {
                            #rowmap::Value::#variant(v) => Ok(v),
                            value => <#rust_ty as ::core::convert::TryFrom<#rowmap::Value>>::try_from(value),
                        }
                    }
                }
                None => quote! {
                    <#rust_ty as ::core::convert::TryFrom<#rowmap::Value>>::try_from(#value)
                },
            },
        }
    }

    /// Value a field is reset to when the setter cannot convert a value.
    pub(super) fn expand_fallback(&self, ty: &Ty) -> TokenStream {
        let rowmap = &self.rowmap;
        let rust_ty = &ty.ty;

        match &ty.kind {
            TyKind::Enum => quote!(<#rust_ty as #rowmap::RowEnum>::zero()),
            _ => quote!(<#rust_ty as ::core::default::Default>::default()),
        }
    }
}
