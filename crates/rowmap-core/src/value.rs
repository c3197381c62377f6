mod datetime;
mod exact;
mod num;
mod value_enum;

pub use exact::Exact;
pub use value_enum::ValueEnum;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{Error, Result};

/// A dynamically typed scalar carried by a row column or passed to
/// `set_by_name`.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Raw byte buffer
    Bytes(Vec<u8>),

    /// Unicode scalar value
    Char(char),

    /// Date and time without an offset
    DateTime(NaiveDateTime),

    /// Date and time with a fixed UTC offset
    DateTimeOffset(DateTime<FixedOffset>),

    /// Exact decimal number
    Decimal(Decimal),

    /// Value of an enumerated type
    Enum(ValueEnum),

    /// 32-bit floating point
    F32(f32),

    /// 64-bit floating point
    F64(f64),

    /// Globally unique identifier
    Guid(Uuid),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Pointer-sized signed integer
    Isize(isize),

    /// A list of values
    List(Vec<Value>),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),

    /// Signed span of time
    TimeSpan(TimeDelta),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// Pointer-sized unsigned integer
    Usize(usize),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Name of the variant holding this value, used in error messages.
    pub fn ty_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Bytes(_) => "Bytes",
            Self::Char(_) => "Char",
            Self::DateTime(_) => "DateTime",
            Self::DateTimeOffset(_) => "DateTimeOffset",
            Self::Decimal(_) => "Decimal",
            Self::Enum(_) => "Enum",
            Self::F32(_) => "F32",
            Self::F64(_) => "F64",
            Self::Guid(_) => "Guid",
            Self::I8(_) => "I8",
            Self::I16(_) => "I16",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::Isize(_) => "Isize",
            Self::List(_) => "List",
            Self::Null => "Null",
            Self::String(_) => "String",
            Self::TimeSpan(_) => "TimeSpan",
            Self::U8(_) => "U8",
            Self::U16(_) => "U16",
            Self::U32(_) => "U32",
            Self::U64(_) => "U64",
            Self::Usize(_) => "Usize",
        }
    }

    /// Converts the value to a string without any formatting of other
    /// variants.
    pub fn into_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, "String")),
        }
    }

    /// Reinterprets a list as `Vec<T>` when every item is exactly `T`.
    ///
    /// Items are never coerced: a list of `I32` does not become `Vec<i64>`.
    pub fn into_array<T: Exact>(self) -> Result<Vec<T>> {
        <Vec<T> as Exact>::from_exact(self)
            .map_err(|value| Error::type_conversion(value, std::any::type_name::<Vec<T>>()))
    }

    /// Converts each item of a list with `f`, failing on the first item `f`
    /// rejects. Byte buffers yield `U8` items.
    pub fn into_array_with<T>(self, f: impl FnMut(Value) -> Result<T>) -> Result<Vec<T>> {
        match self {
            Self::List(items) => items.into_iter().map(f).collect(),
            Self::Bytes(bytes) => bytes.into_iter().map(Self::U8).map(f).collect(),
            value => Err(Error::type_conversion(
                value,
                std::any::type_name::<Vec<T>>(),
            )),
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Bytes(v) => write!(f, "{v:?}"),
            Self::Char(v) => write!(f, "{v:?}"),
            Self::DateTime(v) => write!(f, "{v}"),
            Self::DateTimeOffset(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Enum(v) => write!(f, "{}({})", v.ty, v.ordinal),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Guid(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::Isize(v) => write!(f, "{v}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    core::fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Self::Null => f.write_str("null"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::TimeSpan(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::Usize(v) => write!(f, "{v}"),
        }
    }
}

impl AsRef<Self> for Value {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<&[u8]> for Value {
    fn from(src: &[u8]) -> Self {
        Self::Bytes(src.to_vec())
    }
}

impl<T> From<Vec<T>> for Value
where
    Self: From<T>,
{
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Self::from).collect())
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.into_string()
    }
}
