use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, Utc};
use uuid::Uuid;

use super::Value;
use crate::{Error, Result};

// Temporal and identifier values only convert between representations of the
// same quantity. Text is never parsed.
macro_rules! impl_exact_conversions {
    ($ty:ty, $name:ident, $lit:literal) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Self::$name(value)
            }
        }

        impl TryFrom<Value> for $ty {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self> {
                match value {
                    Value::$name(value) => Ok(value),
                    value => Err(Error::type_conversion(value, $lit)),
                }
            }
        }
    };
}

impl_exact_conversions!(NaiveDateTime, DateTime, "NaiveDateTime");
impl_exact_conversions!(DateTime<FixedOffset>, DateTimeOffset, "DateTime<FixedOffset>");
impl_exact_conversions!(TimeDelta, TimeSpan, "TimeDelta");
impl_exact_conversions!(Uuid, Guid, "Uuid");

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTimeOffset(value.fixed_offset())
    }
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::DateTimeOffset(value) => Ok(value.with_timezone(&Utc)),
            value => Err(Error::type_conversion(value, "DateTime<Utc>")),
        }
    }
}

impl From<std::time::Duration> for Value {
    fn from(value: std::time::Duration) -> Self {
        match TimeDelta::from_std(value) {
            Ok(delta) => Self::TimeSpan(delta),
            // Out of range for a signed span
            Err(_) => Self::TimeSpan(TimeDelta::MAX),
        }
    }
}

impl TryFrom<Value> for std::time::Duration {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::TimeSpan(delta) => match delta.to_std() {
                Ok(duration) => Ok(duration),
                Err(_) => Err(Error::type_conversion(
                    Value::TimeSpan(delta),
                    "std::time::Duration",
                )),
            },
            value => Err(Error::type_conversion(value, "std::time::Duration")),
        }
    }
}
