use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use super::Value;
use crate::{Error, Result};

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) {
                $is:ident
            } )*
    ) => {
        impl Value {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant(_))
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }
        )*
    };
}

impl_num! {
    Bool(bool) {
        is_bool
    }
    Char(char) {
        is_char
    }
    Decimal(Decimal) {
        is_decimal
    }
    F32(f32) {
        is_f32
    }
    F64(f64) {
        is_f64
    }
    I8(i8) {
        is_i8
    }
    I16(i16) {
        is_i16
    }
    I32(i32) {
        is_i32
    }
    I64(i64) {
        is_i64
    }
    Isize(isize) {
        is_isize
    }
    U8(u8) {
        is_u8
    }
    U16(u16) {
        is_u16
    }
    U32(u32) {
        is_u32
    }
    U64(u64) {
        is_u64
    }
    Usize(usize) {
        is_usize
    }
}

impl Value {
    /// The value as a whole number, if it has an integral interpretation.
    ///
    /// Floating point and decimal values round half to even. Booleans are
    /// `0`/`1`, chars their code point and enums their ordinal. Strings are
    /// never parsed.
    fn to_integral(&self) -> Option<i128> {
        match *self {
            Value::Bool(v) => Some(i128::from(v)),
            Value::Char(v) => Some(i128::from(u32::from(v))),
            Value::Enum(ref v) => Some(v.ordinal),
            Value::I8(v) => Some(i128::from(v)),
            Value::I16(v) => Some(i128::from(v)),
            Value::I32(v) => Some(i128::from(v)),
            Value::I64(v) => Some(i128::from(v)),
            Value::Isize(v) => i128::try_from(v).ok(),
            Value::U8(v) => Some(i128::from(v)),
            Value::U16(v) => Some(i128::from(v)),
            Value::U32(v) => Some(i128::from(v)),
            Value::U64(v) => Some(i128::from(v)),
            Value::Usize(v) => i128::try_from(v).ok(),
            Value::F32(v) => round_float(f64::from(v)),
            Value::F64(v) => round_float(v),
            Value::Decimal(v) => v
                .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
                .to_i128(),
            _ => None,
        }
    }

    /// The value as a floating point number, if it is numeric.
    fn to_float(&self) -> Option<f64> {
        match *self {
            Value::F32(v) => Some(f64::from(v)),
            Value::F64(v) => Some(v),
            Value::Decimal(v) => v.to_f64(),
            // Chars are integral but not numeric
            Value::Char(_) => None,
            ref value => value.to_integral().map(|v| v as f64),
        }
    }
}

fn round_float(v: f64) -> Option<i128> {
    let rounded = v.round_ties_even();

    if rounded.is_finite() && rounded >= i128::MIN as f64 && rounded <= i128::MAX as f64 {
        Some(rounded as i128)
    } else {
        None
    }
}

// General conversions between numeric variants. Narrowing is range checked and
// fails rather than truncating.
macro_rules! impl_try_from_int {
    ( $( $ty:ty ),* ) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    match value
                        .to_integral()
                        .and_then(|v| <$ty>::try_from(v).ok())
                    {
                        Some(v) => Ok(v),
                        None => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_try_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value.to_float() {
            Some(v) => Ok(v),
            None => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::F32(v) => Ok(v),
            value => match value.to_float() {
                Some(v) => Ok(v as f32),
                None => Err(Error::type_conversion(value, "f32")),
            },
        }
    }
}

impl TryFrom<Value> for Decimal {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        let converted = match value {
            Value::Decimal(v) => Some(v),
            Value::F32(v) => Decimal::from_f32(v),
            Value::F64(v) => Decimal::from_f64(v),
            Value::Char(_) => None,
            ref value => value.to_integral().and_then(Decimal::from_i128),
        };

        match converted {
            Some(v) => Ok(v),
            None => Err(Error::type_conversion(value, "Decimal")),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        let converted = match value {
            Value::Bool(v) => Some(v),
            Value::Char(_) => None,
            // NaN is not zero, so it is true
            Value::F32(v) => Some(v != 0.0),
            Value::F64(v) => Some(v != 0.0),
            Value::Decimal(v) => Some(!v.is_zero()),
            ref value => value.to_integral().map(|v| v != 0),
        };

        match converted {
            Some(v) => Ok(v),
            None => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl TryFrom<Value> for char {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        let converted = match value {
            Value::Char(v) => Some(v),
            Value::Bool(_) | Value::F32(_) | Value::F64(_) | Value::Decimal(_) => None,
            ref value => value
                .to_integral()
                .and_then(|v| u32::try_from(v).ok())
                .and_then(char::from_u32),
        };

        match converted {
            Some(v) => Ok(v),
            None => Err(Error::type_conversion(value, "char")),
        }
    }
}
