use std::collections::HashMap;

use super::{ErrorSet, Field, FieldKind, MapperAttr};

#[derive(Debug)]
pub(crate) struct Mapper {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Bound fields in declaration order
    pub(crate) fields: Vec<Field>,

    /// How an instance is created before rows are bound to it
    pub(crate) construct: Construct,
}

#[derive(Debug)]
pub(crate) enum Construct {
    /// `Default::default()`
    Default,

    /// `#[row(constructor = path)]`
    Path(syn::Path),

    /// `#[row(no_constructor)]`: rows cannot be materialized
    None,
}

impl Mapper {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let syn::Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`RowMapper` can only be derived for structs",
            ));
        };

        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`RowMapper` requires a struct with named fields",
            ));
        };

        // Generics are not supported
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "`RowMapper` generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();

        let attr = match MapperAttr::from_ast(&ast.attrs) {
            Ok(attr) => attr,
            Err(err) => {
                errs.push(err);
                MapperAttr::default()
            }
        };

        let mut fields = vec![];

        for (index, node) in node.named.iter().enumerate() {
            match Field::from_ast(node, index, attr.rename_all) {
                Ok(Some(field)) => fields.push(field),
                Ok(None) => {}
                Err(err) => errs.push(err),
            }
        }

        // Bound names must stay distinct once case is ignored
        let mut seen: HashMap<String, &Field> = HashMap::new();

        for field in &fields {
            if matches!(field.kind, FieldKind::Flatten(_)) {
                continue;
            }

            if let Some(first) = seen.get(&field.name.folded()) {
                errs.push(syn::Error::new_spanned(
                    &field.ident,
                    format!(
                        "field `{}` is bound as `{}`, which collides with field `{}` bound as `{}`",
                        field.ident, field.name.bound, first.ident, first.name.bound,
                    ),
                ));
            } else {
                seen.insert(field.name.folded(), field);
            }
        }

        errs.check()?;

        let construct = if attr.no_constructor {
            Construct::None
        } else if let Some(path) = attr.constructor {
            Construct::Path(path)
        } else {
            Construct::Default
        };

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
            construct,
        })
    }

    /// Name of the type as reported by its schema.
    pub(crate) fn type_name(&self) -> String {
        super::unraw(&self.ident)
    }

    /// Returns `true` if the type can be materialized from rows.
    pub(crate) fn is_constructible(&self) -> bool {
        !matches!(self.construct, Construct::None)
    }
}
