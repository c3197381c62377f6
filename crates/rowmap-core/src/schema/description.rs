use super::{FieldDescriptor, Schema};

/// The declared shape of a row mapped type, as emitted by `#[derive(RowMapper)]`.
#[derive(Debug, Clone)]
pub struct TypeDescription {
    /// Name of the type
    pub name: &'static str,

    /// True if the type has a zero-argument construction path
    pub constructible: bool,

    /// Fields in declaration order. Skipped fields are not listed.
    pub fields: Vec<FieldDecl>,
}

#[derive(Debug, Clone)]
pub enum FieldDecl {
    /// A field bound directly
    Field(FieldDescriptor),

    /// A field whose type is itself row mapped; its fields are spliced in
    Flatten {
        ident: &'static str,
        schema: &'static Schema,
    },
}
