use super::TypeCategory;

/// One bindable field of a row mapped type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// The bound name, matched against column and setter names ignoring case
    pub name: &'static str,

    /// The Rust identifier of the field
    pub ident: &'static str,

    /// How values are coerced into the field
    pub category: TypeCategory,

    /// False if the field is never assigned by the generated setter
    pub settable: bool,

    /// False if the field is never bound from a row column
    pub readable: bool,

    /// Name of the type that declares the field
    pub declared_in: &'static str,
}

impl FieldDescriptor {
    /// A settable, readable field. `declared_in` is filled in when the field
    /// becomes part of a [`Schema`](super::Schema).
    pub const fn new(name: &'static str, ident: &'static str, category: TypeCategory) -> Self {
        Self {
            name,
            ident,
            category,
            settable: true,
            readable: true,
            declared_in: "",
        }
    }

    /// Returns `true` if the field is bound from row columns.
    pub fn is_column(&self) -> bool {
        self.settable && self.readable
    }
}
