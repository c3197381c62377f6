/// A classified field type.
#[derive(Debug)]
pub(crate) struct Ty {
    /// The type as declared
    pub(crate) ty: syn::Type,

    /// Coercion category of the type
    pub(crate) kind: TyKind,
}

#[derive(Debug)]
pub(crate) enum TyKind {
    Bool,
    Int(IntKind),
    F32,
    F64,
    Decimal,
    Char,
    String,
    DateTime,

    /// `exact` is false when the declared type is not the one `Value` stores
    /// (`DateTime<Utc>` rather than `DateTime<FixedOffset>`)
    DateTimeOffset {
        exact: bool,
    },

    /// `exact` is false for `std::time::Duration`
    TimeSpan {
        exact: bool,
    },

    Guid,
    Enum,
    Array(Box<Ty>),
    Nullable(Box<Ty>),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IntKind {
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

impl Ty {
    /// Classifies a declared type by its shape.
    ///
    /// `is_enum` marks the innermost type (inside any `Option` and `Vec`) as a
    /// `RowEnum`. Types that are not recognized fall back to `Other`, so
    /// classification never fails.
    pub(crate) fn classify(ty: &syn::Type, is_enum: bool) -> Ty {
        let kind = match ty {
            syn::Type::Group(group) => return Ty::classify(&group.elem, is_enum),
            syn::Type::Paren(paren) => return Ty::classify(&paren.elem, is_enum),
            syn::Type::Path(path) if path.qself.is_none() => classify_path(&path.path, is_enum),
            _ if is_enum => TyKind::Enum,
            _ => TyKind::Other,
        };

        Ty {
            ty: ty.clone(),
            kind,
        }
    }
}

fn classify_path(path: &syn::Path, is_enum: bool) -> TyKind {
    let Some(last) = path.segments.last() else {
        return TyKind::Other;
    };

    let name = last.ident.to_string();

    match (name.as_str(), single_generic(last)) {
        ("Option", Some(inner)) => return TyKind::Nullable(Box::new(Ty::classify(inner, is_enum))),
        ("Vec", Some(item)) => return TyKind::Array(Box::new(Ty::classify(item, is_enum))),
        _ => {}
    }

    if is_enum {
        return TyKind::Enum;
    }

    if let Some(kind) = IntKind::from_name(&name) {
        return TyKind::Int(kind);
    }

    match name.as_str() {
        "bool" => TyKind::Bool,
        "f32" => TyKind::F32,
        "f64" => TyKind::F64,
        "char" => TyKind::Char,
        "String" => TyKind::String,
        "Decimal" => TyKind::Decimal,
        "NaiveDateTime" => TyKind::DateTime,
        "Uuid" => TyKind::Guid,
        "TimeDelta" => TyKind::TimeSpan { exact: true },
        "DateTime" => match single_generic(last).and_then(last_ident) {
            Some(offset) if offset == "FixedOffset" => TyKind::DateTimeOffset { exact: true },
            Some(offset) if offset == "Utc" => TyKind::DateTimeOffset { exact: false },
            _ => TyKind::Other,
        },
        // A bare `Duration` could be either type, so it needs its crate
        "Duration" => match path.segments.iter().rev().nth(1) {
            Some(parent) if parent.ident == "chrono" => TyKind::TimeSpan { exact: true },
            Some(parent) if parent.ident == "time" => TyKind::TimeSpan { exact: false },
            _ => TyKind::Other,
        },
        _ => TyKind::Other,
    }
}

/// The only type argument of a path segment such as `Option<T>`.
fn single_generic(segment: &syn::PathSegment) -> Option<&syn::Type> {
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    if args.args.len() != 1 {
        return None;
    }

    match args.args.first() {
        Some(syn::GenericArgument::Type(ty)) => Some(ty),
        _ => None,
    }
}

fn last_ident(ty: &syn::Type) -> Option<&syn::Ident> {
    match ty {
        syn::Type::Path(path) => path.path.segments.last().map(|segment| &segment.ident),
        _ => None,
    }
}

impl Ty {
    /// Returns `true` if the type is, or wraps, an unrecognized type.
    pub(crate) fn contains_other(&self) -> bool {
        match &self.kind {
            TyKind::Other => true,
            TyKind::Array(inner) | TyKind::Nullable(inner) => inner.contains_other(),
            _ => false,
        }
    }
}

impl TyKind {
    /// The `Value` variant holding exactly this type, if there is one.
    pub(crate) fn exact_variant(&self) -> Option<&'static str> {
        Some(match self {
            TyKind::Bool => "Bool",
            TyKind::Int(kind) => kind.variant(),
            TyKind::F32 => "F32",
            TyKind::F64 => "F64",
            TyKind::Decimal => "Decimal",
            TyKind::Char => "Char",
            TyKind::DateTime => "DateTime",
            TyKind::DateTimeOffset { exact: true } => "DateTimeOffset",
            TyKind::TimeSpan { exact: true } => "TimeSpan",
            TyKind::Guid => "Guid",
            _ => return None,
        })
    }
}

impl IntKind {
    pub(crate) fn from_name(name: &str) -> Option<IntKind> {
        Some(match name {
            "i8" => IntKind::I8,
            "i16" => IntKind::I16,
            "i32" => IntKind::I32,
            "i64" => IntKind::I64,
            "isize" => IntKind::Isize,
            "u8" => IntKind::U8,
            "u16" => IntKind::U16,
            "u32" => IntKind::U32,
            "u64" => IntKind::U64,
            "usize" => IntKind::Usize,
            _ => return None,
        })
    }

    /// Name of the matching `Value` and `IntKind` variants.
    pub(crate) fn variant(self) -> &'static str {
        match self {
            IntKind::I8 => "I8",
            IntKind::I16 => "I16",
            IntKind::I32 => "I32",
            IntKind::I64 => "I64",
            IntKind::Isize => "Isize",
            IntKind::U8 => "U8",
            IntKind::U16 => "U16",
            IntKind::U32 => "U32",
            IntKind::U64 => "U64",
            IntKind::Usize => "Usize",
        }
    }

    /// The Rust primitive type.
    pub(crate) fn ty(self) -> syn::Ident {
        syn::Ident::new(
            &self.variant().to_ascii_lowercase(),
            proc_macro2::Span::call_site(),
        )
    }

    /// Range of values the type can hold. `isize` and `usize` are assumed to
    /// be 64 bits wide.
    pub(crate) fn range(self) -> (i128, i128) {
        match self {
            IntKind::I8 => (i8::MIN.into(), i8::MAX.into()),
            IntKind::I16 => (i16::MIN.into(), i16::MAX.into()),
            IntKind::I32 => (i32::MIN.into(), i32::MAX.into()),
            IntKind::I64 | IntKind::Isize => (i64::MIN.into(), i64::MAX.into()),
            IntKind::U8 => (0, u8::MAX.into()),
            IntKind::U16 => (0, u16::MAX.into()),
            IntKind::U32 => (0, u32::MAX.into()),
            IntKind::U64 | IntKind::Usize => (0, u64::MAX.into()),
        }
    }
}
