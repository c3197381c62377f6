use super::{ErrorSet, RenameRule};

#[derive(Debug, Default)]
pub(crate) struct MapperAttr {
    /// Rule applied to field identifiers without an explicit `rename`
    pub(crate) rename_all: Option<RenameRule>,

    /// Zero-argument function constructing the type before it is populated
    pub(crate) constructor: Option<syn::Path>,

    /// True if the type cannot be constructed before population
    pub(crate) no_constructor: bool,
}

impl MapperAttr {
    pub(super) fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut errs = ErrorSet::new();
        let mut result = MapperAttr::default();

        for attr in attrs {
            if !attr.path().is_ident("row") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    if result.rename_all.is_some() {
                        return Err(meta.error("duplicate `rename_all` option"));
                    }
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    result.rename_all = Some(RenameRule::from_lit(&lit)?);
                } else if meta.path.is_ident("constructor") {
                    if result.constructor.is_some() {
                        return Err(meta.error("duplicate `constructor` option"));
                    }
                    result.constructor = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("no_constructor") {
                    if result.no_constructor {
                        return Err(meta.error("duplicate `no_constructor` option"));
                    }
                    result.no_constructor = true;
                } else {
                    return Err(meta.error("unknown `row` container option"));
                }

                Ok(())
            });

            if let Err(err) = res {
                errs.push(err);
            }

            if result.no_constructor {
                if let Some(constructor) = &result.constructor {
                    errs.push(syn::Error::new_spanned(
                        constructor,
                        "`constructor` and `no_constructor` cannot be combined",
                    ));
                    result.constructor = None;
                }
            }
        }

        errs.check()?;

        Ok(result)
    }
}
