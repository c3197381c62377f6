use super::Value;

/// A value of a `RowEnum` type: the enum's name and its ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueEnum {
    /// Name of the enum type the value came from
    pub ty: &'static str,

    /// Discriminant of the variant
    pub ordinal: i128,
}

impl ValueEnum {
    pub fn new(ty: &'static str, ordinal: i128) -> Self {
        Self { ty, ordinal }
    }
}

impl From<ValueEnum> for Value {
    fn from(value: ValueEnum) -> Self {
        Self::Enum(value)
    }
}
