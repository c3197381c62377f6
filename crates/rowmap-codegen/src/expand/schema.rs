use super::{util, Expand};
use crate::schema::{unraw, FieldKind, Ty, TyKind};

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};

impl Expand<'_> {
    /// `RowMapper::schema`, built on first call and cached for the process.
    pub(super) fn expand_schema_fn(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let type_name = self.mapper.type_name();
        let constructible = self.mapper.is_constructible();

        let fields = self.mapper.fields.iter().map(|field| {
            let ident = unraw(&field.ident);

            match &field.kind {
                FieldKind::Flatten(ty) => quote! {
                    #rowmap::FieldDecl::Flatten {
                        ident: #ident,
                        schema: <#ty as #rowmap::RowMapper>::schema(),
                    }
                },
                FieldKind::Bound(ty) => {
                    let name = &field.name.bound;
                    let category = self.expand_type_category(ty);
                    let settable = field.is_settable();
                    let readable = !field.attrs.write_only;

                    quote! {
                        #rowmap::FieldDecl::Field(#rowmap::FieldDescriptor {
                            name: #name,
                            ident: #ident,
                            category: #category,
                            settable: #settable,
                            readable: #readable,
                            declared_in: #type_name,
                        })
                    }
                }
            }
        });

        quote! {
            fn schema() -> &'static #rowmap::Schema {
                static SCHEMA: #rowmap::OnceLock<#rowmap::Schema> = #rowmap::OnceLock::new();

                SCHEMA.get_or_init(|| {
                    #rowmap::Schema::extract(#rowmap::TypeDescription {
                        name: #type_name,
                        constructible: #constructible,
                        fields: vec![ #( #fields ),* ],
                    })
                })
            }
        }
    }

    fn expand_type_category(&self, ty: &Ty) -> TokenStream {
        let rowmap = &self.rowmap;
        let rust_ty = &ty.ty;

        match &ty.kind {
            TyKind::Bool => quote!(#rowmap::TypeCategory::Bool),
            TyKind::Int(kind) => {
                let variant = util::variant(kind.variant());
                quote!(#rowmap::TypeCategory::Int(#rowmap::IntKind::#variant))
            }
            TyKind::F32 => quote!(#rowmap::TypeCategory::F32),
            TyKind::F64 => quote!(#rowmap::TypeCategory::F64),
            TyKind::Decimal => quote!(#rowmap::TypeCategory::Decimal),
            TyKind::Char => quote!(#rowmap::TypeCategory::Char),
            TyKind::String => quote!(#rowmap::TypeCategory::String),
            TyKind::DateTime => quote!(#rowmap::TypeCategory::DateTime),
            TyKind::DateTimeOffset { .. } => quote!(#rowmap::TypeCategory::DateTimeOffset),
            TyKind::TimeSpan { .. } => quote!(#rowmap::TypeCategory::TimeSpan),
            TyKind::Guid => quote!(#rowmap::TypeCategory::Guid),
            TyKind::Enum => quote! {
                #rowmap::TypeCategory::Enum {
                    name: <#rust_ty as #rowmap::RowEnum>::NAME,
                    repr: <#rust_ty as #rowmap::RowEnum>::REPR,
                }
            },
            TyKind::Array(item) => {
                let item = self.expand_type_category(item);
                quote!(#rowmap::TypeCategory::Array(Box::new(#item)))
            }
            TyKind::Nullable(inner) => {
                let inner = self.expand_type_category(inner);
                quote!(#rowmap::TypeCategory::Nullable(Box::new(#inner)))
            }
            TyKind::Other => {
                let written = rust_ty.to_token_stream().to_string().replace(' ', "");
                quote!(#rowmap::TypeCategory::Other(#written))
            }
        }
    }
}
