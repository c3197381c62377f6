use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::Value;

/// Types that a [`Value`] can be reinterpreted as without any conversion.
///
/// This is the element contract for array fields: a list binds to `Vec<T>`
/// only when every item already holds a `T`.
pub trait Exact: Sized {
    /// Returns `true` if `value` holds exactly this type.
    fn matches(value: &Value) -> bool;

    /// Unwraps `value`, handing it back unchanged when it holds another type.
    fn from_exact(value: Value) -> Result<Self, Value>;
}

macro_rules! impl_exact {
    ( $( $variant:ident($ty:ty) ),* ) => {
        $(
            impl Exact for $ty {
                fn matches(value: &Value) -> bool {
                    matches!(value, Value::$variant(_))
                }

                fn from_exact(value: Value) -> Result<Self, Value> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        value => Err(value),
                    }
                }
            }
        )*
    };
}

impl_exact!(
    Bool(bool),
    Char(char),
    DateTime(NaiveDateTime),
    DateTimeOffset(DateTime<FixedOffset>),
    Decimal(Decimal),
    F32(f32),
    F64(f64),
    Guid(Uuid),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    String(String),
    TimeSpan(TimeDelta),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize)
);

// Lossless re-typings of a stored variant, matching their `TryFrom<Value>`

impl Exact for DateTime<Utc> {
    fn matches(value: &Value) -> bool {
        matches!(value, Value::DateTimeOffset(_))
    }

    fn from_exact(value: Value) -> Result<Self, Value> {
        match value {
            Value::DateTimeOffset(v) => Ok(v.with_timezone(&Utc)),
            value => Err(value),
        }
    }
}

impl Exact for std::time::Duration {
    fn matches(value: &Value) -> bool {
        match value {
            Value::TimeSpan(delta) => delta.to_std().is_ok(),
            _ => false,
        }
    }

    fn from_exact(value: Value) -> Result<Self, Value> {
        match value {
            Value::TimeSpan(delta) => delta.to_std().map_err(|_| Value::TimeSpan(delta)),
            value => Err(value),
        }
    }
}

impl Exact for Value {
    fn matches(_: &Value) -> bool {
        true
    }

    fn from_exact(value: Value) -> Result<Self, Value> {
        Ok(value)
    }
}

impl<T: Exact> Exact for Option<T> {
    fn matches(value: &Value) -> bool {
        value.is_null() || T::matches(value)
    }

    fn from_exact(value: Value) -> Result<Self, Value> {
        match value {
            Value::Null => Ok(None),
            value => T::from_exact(value).map(Some),
        }
    }
}

impl<T: Exact> Exact for Vec<T> {
    fn matches(value: &Value) -> bool {
        match value {
            Value::List(items) => items.iter().all(T::matches),
            // Byte buffers are arrays of `u8`
            Value::Bytes(_) => T::matches(&Value::U8(0)),
            _ => false,
        }
    }

    fn from_exact(value: Value) -> Result<Self, Value> {
        if !Self::matches(&value) {
            return Err(value);
        }

        match value {
            Value::List(items) => items.into_iter().map(T::from_exact).collect(),
            Value::Bytes(bytes) => bytes
                .into_iter()
                .map(|byte| T::from_exact(Value::U8(byte)))
                .collect(),
            value => Err(value),
        }
    }
}
