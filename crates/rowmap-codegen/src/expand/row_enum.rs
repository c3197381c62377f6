use super::util;
use crate::schema::{RowEnum, Zero};

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn expand(row_enum: &RowEnum, rowmap: &TokenStream) -> TokenStream {
    let ident = &row_enum.ident;
    let name = crate::schema::unraw(ident);
    let repr = row_enum.repr.ty();
    let repr_variant = util::variant(row_enum.repr.variant());

    let from_arms = row_enum.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        let discriminant = util::int(variant.discriminant);
        quote!(#discriminant => Ok(Self::#variant_ident),)
    });

    let to_arms = row_enum.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        let discriminant = util::int(variant.discriminant);
        quote!(Self::#variant_ident => #discriminant,)
    });

    // Undeclared discriminants are kept verbatim when there is somewhere to
    // keep them
    let (from_fallback, to_other) = match &row_enum.other {
        Some(other) => (
            quote!(repr => Ok(Self::#other(repr)),),
            quote!(Self::#other(repr) => *repr,),
        ),
        None => (
            quote! {
                repr => Err(#rowmap::Error::type_conversion(#rowmap::Value::from(repr), #name)),
            },
            quote!(),
        ),
    };

    let zero = match &row_enum.zero {
        Zero::Variant(variant) => quote!(Self::#variant),
        Zero::Other(other) => quote!(Self::#other(0)),
    };

    quote! {
        impl #rowmap::RowEnum for #ident {
            type Repr = #repr;

            const NAME: &'static str = #name;

            const REPR: #rowmap::IntKind = #rowmap::IntKind::#repr_variant;

            fn from_repr(repr: #repr) -> #rowmap::Result<Self> {
                match repr {
                    #( #from_arms )*
                    #from_fallback
                }
            }

            fn to_repr(&self) -> #repr {
                match self {
                    #( #to_arms )*
                    #to_other
                }
            }

            fn zero() -> Self {
                #zero
            }
        }

        impl ::core::convert::From<#ident> for #rowmap::Value {
            fn from(value: #ident) -> Self {
                let ordinal = <#ident as #rowmap::RowEnum>::to_repr(&value) as i128;
                #rowmap::Value::Enum(#rowmap::ValueEnum::new(#name, ordinal))
            }
        }

        impl ::core::convert::TryFrom<#rowmap::Value> for #ident {
            type Error = #rowmap::Error;

            fn try_from(value: #rowmap::Value) -> #rowmap::Result<Self> {
                <#repr as ::core::convert::TryFrom<#rowmap::Value>>::try_from(value)
                    .and_then(<Self as #rowmap::RowEnum>::from_repr)
            }
        }

        impl #rowmap::Exact for #ident {
            fn matches(value: &#rowmap::Value) -> bool {
                match value {
                    #rowmap::Value::Enum(value) => {
                        <Self as #rowmap::Exact>::from_exact(#rowmap::Value::Enum(*value)).is_ok()
                    }
                    _ => false,
                }
            }

            fn from_exact(value: #rowmap::Value) -> ::core::result::Result<Self, #rowmap::Value> {
                match value {
                    #rowmap::Value::Enum(value) if value.ty == #name => {
                        let converted = <#repr as ::core::convert::TryFrom<i128>>::try_from(value.ordinal)
                            .ok()
                            .and_then(|repr| <Self as #rowmap::RowEnum>::from_repr(repr).ok());

                        match converted {
                            Some(converted) => Ok(converted),
                            None => Err(#rowmap::Value::Enum(value)),
                        }
                    }
                    value => Err(value),
                }
            }
        }
    }
}
