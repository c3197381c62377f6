use rowmap_core::{schema::IntKind, Error, Result, Value};

/// A fieldless enum bound through its integer representation.
///
/// Implemented by `#[derive(RowEnum)]`.
pub trait RowEnum: Sized {
    /// The integer type from the enum's `#[repr]`
    type Repr: Copy + TryFrom<Value, Error = Error> + Into<Value>;

    /// Name of the enum, carried by its values
    const NAME: &'static str;

    const REPR: IntKind;

    /// Fails for discriminants the enum does not declare, unless it has a
    /// `#[row(other)]` variant to hold them.
    fn from_repr(repr: Self::Repr) -> Result<Self>;

    fn to_repr(&self) -> Self::Repr;

    /// The value a field is reset to when a value cannot be bound to it.
    fn zero() -> Self;
}
