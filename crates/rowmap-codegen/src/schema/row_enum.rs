use syn::punctuated::Punctuated;

use super::{ErrorSet, IntKind};

#[derive(Debug)]
pub(crate) struct RowEnum {
    /// Enum identifier
    pub(crate) ident: syn::Ident,

    /// Integer representation from `#[repr]`, `isize` when absent
    pub(crate) repr: IntKind,

    /// Unit variants with their discriminants
    pub(crate) variants: Vec<Variant>,

    /// The `#[row(other)]` variant receiving undeclared discriminants
    pub(crate) other: Option<syn::Ident>,

    /// The value `RowEnum::zero` returns
    pub(crate) zero: Zero,
}

#[derive(Debug)]
pub(crate) struct Variant {
    pub(crate) ident: syn::Ident,
    pub(crate) discriminant: i128,
}

impl RowEnum {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let syn::Data::Enum(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`RowEnum` can only be derived for enums",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "`RowEnum` generics are not supported",
            ));
        }

        let repr = repr_from_ast(&ast.attrs)?;
        let (min, max) = repr.range();

        let mut errs = ErrorSet::new();
        let mut variants: Vec<Variant> = vec![];
        let mut other = None;
        let mut next = 0i128;

        for variant in &data.variants {
            // Discriminants follow Rust's rules: explicit literals, otherwise
            // one more than the previous variant
            let discriminant = match &variant.discriminant {
                Some((_, expr)) => match int_literal(expr) {
                    Ok(value) => value,
                    Err(err) => {
                        errs.push(err);
                        continue;
                    }
                },
                None => next,
            };
            next = discriminant + 1;

            let is_other = match is_other_variant(variant) {
                Ok(is_other) => is_other,
                Err(err) => {
                    errs.push(err);
                    continue;
                }
            };

            if is_other {
                if other.is_some() {
                    errs.push(syn::Error::new_spanned(
                        variant,
                        "only one variant can be marked `#[row(other)]`",
                    ));
                } else if !matches!(&variant.fields, syn::Fields::Unnamed(fields) if fields.unnamed.len() == 1)
                {
                    errs.push(syn::Error::new_spanned(
                        variant,
                        format!(
                            "the `#[row(other)]` variant must hold the representation, like `{}({})`",
                            variant.ident,
                            repr.ty(),
                        ),
                    ));
                } else {
                    other = Some(variant.ident.clone());
                }
                continue;
            }

            if !matches!(variant.fields, syn::Fields::Unit) {
                errs.push(syn::Error::new_spanned(
                    variant,
                    "`RowEnum` variants must be unit variants; mark a variant holding undeclared values with `#[row(other)]`",
                ));
                continue;
            }

            if discriminant < min || discriminant > max {
                errs.push(syn::Error::new_spanned(
                    variant,
                    format!("discriminant `{discriminant}` does not fit in `{}`", repr.ty()),
                ));
                continue;
            }

            if let Some(first) = variants.iter().find(|v| v.discriminant == discriminant) {
                errs.push(syn::Error::new_spanned(
                    variant,
                    format!(
                        "discriminant `{discriminant}` is assigned to both `{}` and `{}`",
                        first.ident, variant.ident,
                    ),
                ));
                continue;
            }

            variants.push(Variant {
                ident: variant.ident.clone(),
                discriminant,
            });
        }

        errs.check()?;

        let zero = match (
            variants.iter().find(|v| v.discriminant == 0),
            &other,
            variants.first(),
        ) {
            (Some(variant), _, _) => Zero::Variant(variant.ident.clone()),
            (None, Some(other), _) => Zero::Other(other.clone()),
            (None, None, Some(first)) => Zero::Variant(first.ident.clone()),
            (None, None, None) => {
                return Err(syn::Error::new_spanned(
                    &ast.ident,
                    "`RowEnum` requires at least one variant",
                ))
            }
        };

        Ok(Self {
            ident: ast.ident.clone(),
            repr,
            variants,
            other,
            zero,
        })
    }
}

/// The variant with discriminant 0, else the `other` variant holding 0, else
/// the first variant.
#[derive(Debug)]
pub(crate) enum Zero {
    Variant(syn::Ident),
    Other(syn::Ident),
}

fn repr_from_ast(attrs: &[syn::Attribute]) -> syn::Result<IntKind> {
    for attr in attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }

        let metas = attr.parse_args_with(Punctuated::<syn::Meta, syn::Token![,]>::parse_terminated)?;

        for meta in metas {
            if let syn::Meta::Path(path) = meta {
                if let Some(kind) = path.get_ident().and_then(|i| IntKind::from_name(&i.to_string())) {
                    return Ok(kind);
                }
            }
        }
    }

    Ok(IntKind::Isize)
}

fn is_other_variant(variant: &syn::Variant) -> syn::Result<bool> {
    let mut other = false;

    for attr in &variant.attrs {
        if !attr.path().is_ident("row") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("other") {
                if other {
                    return Err(meta.error("duplicate `other` option"));
                }
                other = true;
                Ok(())
            } else {
                Err(meta.error("unknown `row` variant option"))
            }
        })?;
    }

    Ok(other)
}

fn int_literal(expr: &syn::Expr) -> syn::Result<i128> {
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(lit),
            ..
        }) => lit.base10_parse(),
        syn::Expr::Unary(syn::ExprUnary {
            op: syn::UnOp::Neg(_),
            expr,
            ..
        }) => int_literal(expr).map(|value| -value),
        syn::Expr::Group(group) => int_literal(&group.expr),
        syn::Expr::Paren(paren) => int_literal(&paren.expr),
        _ => Err(syn::Error::new_spanned(
            expr,
            "`RowEnum` discriminants must be integer literals",
        )),
    }
}
