use std::fmt;

/// Classification of a field's declared type. Decides which coercion the
/// generated setter and materializer apply.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Bool,
    Int(IntKind),
    F32,
    F64,
    Decimal,
    Char,
    String,

    /// A date and time without offset
    DateTime,

    /// A date and time with a UTC offset
    DateTimeOffset,

    /// A signed duration
    TimeSpan,

    Guid,

    /// A `RowEnum` type, bound through its integer representation
    Enum { name: &'static str, repr: IntKind },

    /// `Vec<T>`
    Array(Box<TypeCategory>),

    /// `Option<T>`
    Nullable(Box<TypeCategory>),

    /// Any other type, bound through `TryFrom<Value>`. Holds the type as
    /// written in the declaration.
    Other(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
}

impl TypeCategory {
    pub fn is_nullable(&self) -> bool {
        matches!(self, TypeCategory::Nullable(_))
    }

    /// The category with any `Nullable` wrapper removed.
    pub fn non_nullable(&self) -> &TypeCategory {
        match self {
            TypeCategory::Nullable(inner) => inner.non_nullable(),
            ty => ty,
        }
    }
}

impl IntKind {
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            IntKind::I8 | IntKind::I16 | IntKind::I32 | IntKind::I64 | IntKind::Isize
        )
    }

    /// The Rust spelling of the integer type.
    pub fn as_str(self) -> &'static str {
        match self {
            IntKind::I8 => "i8",
            IntKind::I16 => "i16",
            IntKind::I32 => "i32",
            IntKind::I64 => "i64",
            IntKind::Isize => "isize",
            IntKind::U8 => "u8",
            IntKind::U16 => "u16",
            IntKind::U32 => "u32",
            IntKind::U64 => "u64",
            IntKind::Usize => "usize",
        }
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeCategory::Bool => f.write_str("bool"),
            TypeCategory::Int(kind) => kind.fmt(f),
            TypeCategory::F32 => f.write_str("f32"),
            TypeCategory::F64 => f.write_str("f64"),
            TypeCategory::Decimal => f.write_str("Decimal"),
            TypeCategory::Char => f.write_str("char"),
            TypeCategory::String => f.write_str("String"),
            TypeCategory::DateTime => f.write_str("DateTime"),
            TypeCategory::DateTimeOffset => f.write_str("DateTimeOffset"),
            TypeCategory::TimeSpan => f.write_str("TimeSpan"),
            TypeCategory::Guid => f.write_str("Guid"),
            TypeCategory::Enum { name, repr } => write!(f, "enum {name}({repr})"),
            TypeCategory::Array(item) => write!(f, "[{item}]"),
            TypeCategory::Nullable(inner) => write!(f, "{inner}?"),
            TypeCategory::Other(ty) => f.write_str(ty),
        }
    }
}
