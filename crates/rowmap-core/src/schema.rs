mod description;
pub use description::{FieldDecl, TypeDescription};

mod field;
pub use field::FieldDescriptor;

mod name;
pub use name::eq_ignore_case;

mod type_category;
pub use type_category::{IntKind, TypeCategory};

use tracing::{debug, warn};

/// The ordered, immutable list of bindable fields of one row mapped type.
///
/// A schema is built once per type, on first use, and lives for the rest of
/// the process. Generated binding code never consults it: it is metadata for
/// callers that want to inspect what a type binds.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Name of the type the schema describes
    type_name: &'static str,

    /// True if the type can be constructed before population, which is
    /// required to materialize it from a row
    constructible: bool,

    /// Fields in declaration order, flattened fields spliced in place
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    /// Builds the schema for a type description.
    ///
    /// Flattened types contribute their own schema's fields at the position
    /// of the flattening field. The setter and column resolution each bind a
    /// name to the first field (case-insensitively) they accept, so a later
    /// field with the same name is dropped and reported once every way it
    /// binds is taken by earlier fields. Extraction itself never fails.
    pub fn extract(description: TypeDescription) -> Schema {
        let TypeDescription {
            name: type_name,
            constructible,
            fields: decls,
        } = description;

        let mut fields: Vec<FieldDescriptor> = Vec::with_capacity(decls.len());

        for decl in decls {
            let candidates = match decl {
                FieldDecl::Field(field) => vec![FieldDescriptor {
                    declared_in: type_name,
                    ..field
                }],
                FieldDecl::Flatten { schema, .. } => schema.fields.clone(),
            };

            for field in candidates {
                let same_name = |f: &&FieldDescriptor| eq_ignore_case(f.name, field.name);

                let Some(shadowed_by) = fields.iter().find(same_name).map(|f| f.declared_in) else {
                    fields.push(field);
                    continue;
                };

                let set_taken =
                    !field.settable || fields.iter().filter(same_name).any(|f| f.settable);
                let column_taken =
                    !field.is_column() || fields.iter().filter(same_name).any(|f| f.is_column());

                if set_taken && column_taken {
                    warn!(
                        type_name,
                        field = field.name,
                        declared_in = field.declared_in,
                        shadowed_by,
                        "field is shadowed by an earlier field with the same name"
                    );
                    continue;
                }

                debug!(
                    type_name,
                    field = field.name,
                    declared_in = field.declared_in,
                    "field shares its name with an earlier field that binds differently"
                );
                fields.push(field);
            }
        }

        debug!(
            type_name,
            fields = fields.len(),
            constructible,
            "built row mapping schema"
        );

        Schema {
            type_name,
            constructible,
            fields,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if rows can be materialized into the type.
    pub fn is_constructible(&self) -> bool {
        self.constructible
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks up the first declared field with a name, ignoring case.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| eq_ignore_case(field.name, name))
    }

    /// Fields reachable by `set_by_name`.
    pub fn settable_fields(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.first_by_name(|field| field.settable)
    }

    /// Fields bound from row columns.
    pub fn column_fields(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.first_by_name(FieldDescriptor::is_column)
    }

    /// Fields accepted by `accepts` that no earlier accepted field shares a
    /// name with.
    fn first_by_name(
        &self,
        accepts: impl Fn(&FieldDescriptor) -> bool + Copy + 'static,
    ) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter().enumerate().filter_map(move |(i, field)| {
            let shadowed = self.fields[..i]
                .iter()
                .any(|earlier| accepts(earlier) && eq_ignore_case(earlier.name, field.name));

            (accepts(field) && !shadowed).then_some(field)
        })
    }
}
