use rowmap_core::{Result, Row, Schema, Value};

use std::ops::ControlFlow;

/// A type whose fields can be assigned by name from dynamically typed values.
///
/// Implemented by `#[derive(RowMapper)]`. Every method is generated per type:
/// none of them inspect the [`Schema`] when called.
pub trait RowMapper: Sized {
    /// Number of column slots the type binds, flattened fields included.
    const COLUMNS: usize;

    /// The type's bindable fields, built on first call and cached for the
    /// process.
    fn schema() -> &'static Schema;

    /// Assigns `value` to the settable field whose name matches `name`,
    /// ignoring case.
    ///
    /// Unknown names are ignored. A value that cannot be converted to the
    /// field's type resets the field to its default (`RowEnum::zero` for enum
    /// fields). This never fails.
    fn set_by_name(&mut self, name: &str, value: impl Into<Value>) {
        let _ = self.set_field(name, value.into());
    }

    /// Assigns `value` to the field named `name`. Returns the value back as
    /// `Continue` when no field has the name.
    fn set_field(&mut self, name: &str, value: Value) -> ControlFlow<(), Value>;

    /// Column slot bound by `name`, ignoring case.
    fn resolve_column(name: &str) -> Option<usize>;

    /// Binds `value` to the field owning `slot`, failing if the value cannot
    /// be converted to the field's type. Unknown slots are ignored.
    fn bind_column(&mut self, slot: usize, value: Value) -> Result<()>;
}

/// A [`RowMapper`] type that can be materialized from rows.
///
/// Not implemented for types marked `#[row(no_constructor)]`.
pub trait FromRow: RowMapper {
    /// Creates the instance rows are bound to.
    fn construct() -> Self;

    /// Creates an instance and binds each of the row's columns, in row order,
    /// to the field of the same name.
    ///
    /// Columns without a field are skipped and fields without a column keep
    /// their constructed value. Fails on the first value that cannot be
    /// converted to its field's type.
    fn from_row<R: Row + ?Sized>(row: &R) -> Result<Self>;
}
