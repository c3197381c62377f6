use super::{ErrorSet, Name, RenameRule, Ty};

#[derive(Debug)]
pub(crate) struct Field {
    /// Position of the field in the struct
    pub(crate) index: usize,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Bound name
    pub(crate) name: Name,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// How the field is bound
    pub(crate) kind: FieldKind,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// `#[row(rename = "..")]`
    pub(crate) rename: Option<syn::LitStr>,

    /// `#[row(skip)]`: the field is not bound at all
    pub(crate) skip: bool,

    /// `#[row(read_only)]`: never assigned by setters or rows
    pub(crate) read_only: bool,

    /// `#[row(write_only)]`: assigned by name but never from rows
    pub(crate) write_only: bool,

    /// `#[row(flatten)]`: the field's type is row mapped itself
    pub(crate) flatten: bool,

    /// `#[row(enum)]`: the field's type implements `RowEnum`
    pub(crate) is_enum: bool,
}

#[derive(Debug)]
pub(crate) enum FieldKind {
    /// Bound by name with coercion
    Bound(Ty),

    /// Bound through the field type's own `RowMapper` impl
    Flatten(syn::Type),
}

impl Field {
    /// Returns `None` for skipped fields.
    pub(super) fn from_ast(
        field: &syn::Field,
        index: usize,
        rename_all: Option<RenameRule>,
    ) -> syn::Result<Option<Self>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(
                field,
                "RowMapper fields must be named",
            ));
        };

        let attrs = FieldAttr::from_ast(&field.attrs)?;

        if attrs.skip {
            return Ok(None);
        }

        let name = Name::from_ident(ident, attrs.rename.as_ref(), rename_all);

        let kind = if attrs.flatten {
            FieldKind::Flatten(field.ty.clone())
        } else {
            FieldKind::Bound(Ty::classify(&field.ty, attrs.is_enum))
        };

        Ok(Some(Self {
            index,
            ident: ident.clone(),
            name,
            attrs,
            kind,
        }))
    }

    /// Returns `true` if the generated setter assigns the field.
    pub(crate) fn is_settable(&self) -> bool {
        !self.attrs.read_only
    }

    /// Returns `true` if the field is bound from row columns.
    pub(crate) fn is_column(&self) -> bool {
        !self.attrs.read_only && !self.attrs.write_only
    }
}

impl FieldAttr {
    pub(super) fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut errs = ErrorSet::new();
        let mut result = FieldAttr::default();
        let mut last = None;

        for attr in attrs {
            if !attr.path().is_ident("row") {
                continue;
            }

            last = Some(attr);

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if result.rename.is_some() {
                        return Err(meta.error("duplicate `rename` option"));
                    }
                    result.rename = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("skip") {
                    set_flag(&meta, &mut result.skip)?;
                } else if meta.path.is_ident("read_only") {
                    set_flag(&meta, &mut result.read_only)?;
                } else if meta.path.is_ident("write_only") {
                    set_flag(&meta, &mut result.write_only)?;
                } else if meta.path.is_ident("flatten") {
                    set_flag(&meta, &mut result.flatten)?;
                } else if meta.path.is_ident("enum") {
                    set_flag(&meta, &mut result.is_enum)?;
                } else {
                    return Err(meta.error("unknown `row` field option"));
                }

                Ok(())
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        if let Some(attr) = last {
            if result.skip && (result.flatten || result.has_other_options()) {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "`skip` cannot be combined with other options",
                ));
            }

            if result.read_only && result.write_only {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "`read_only` and `write_only` cannot be combined",
                ));
            }

            if result.flatten && !result.skip && result.has_other_options() {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "`flatten` cannot be combined with other options",
                ));
            }
        }

        errs.check()?;

        Ok(result)
    }

    /// Returns `true` if any option besides `skip` and `flatten` is set.
    fn has_other_options(&self) -> bool {
        self.rename.is_some() || self.read_only || self.write_only || self.is_enum
    }
}

fn set_flag(meta: &syn::meta::ParseNestedMeta<'_>, flag: &mut bool) -> syn::Result<()> {
    if *flag {
        let name = meta
            .path
            .get_ident()
            .map(|ident| ident.to_string())
            .unwrap_or_default();
        return Err(meta.error(format!("duplicate `{name}` option")));
    }

    *flag = true;
    Ok(())
}
