// Generated code refers to this crate as `rowmap`, including from its own
// tests
extern crate self as rowmap;

mod mapper;
pub use mapper::{FromRow, RowMapper};

mod materialize;
pub use materialize::{
    materialize_all, materialize_iter, ColumnPlan, Materialize, RowExt, RowSourceExt,
};

mod row_enum;
pub use row_enum::RowEnum;

pub mod source;
pub use source::{RowSource, TableReader};

pub mod table;
pub use table::{Table, TableRow};

pub use rowmap_core::{
    bail, err, row, schema, value, Error, Exact, Result, Row, Schema, Value, ValueEnum,
};

pub use rowmap_macros::{RowEnum, RowMapper};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{FromRow, RowEnum, RowMapper};
    pub use rowmap_core::{
        schema::{
            eq_ignore_case, FieldDecl, FieldDescriptor, IntKind, TypeCategory, TypeDescription,
        },
        Error, Exact, Result, Row, Schema, Value, ValueEnum,
    };
    pub use std::{ops::ControlFlow, sync::OnceLock};
}
