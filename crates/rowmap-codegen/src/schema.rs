mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Field, FieldKind};

mod mapper;
pub(crate) use mapper::{Construct, Mapper};

mod mapper_attr;
pub(crate) use mapper_attr::MapperAttr;

mod name;
pub(crate) use name::{unraw, Name, RenameRule};

mod row_enum;
pub(crate) use row_enum::{RowEnum, Zero};

mod ty;
pub(crate) use ty::{IntKind, Ty, TyKind};
