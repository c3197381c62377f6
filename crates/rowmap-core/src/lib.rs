mod error;
pub use error::{Error, IntoError};

pub mod row;
pub use row::Row;

pub mod schema;
pub use schema::Schema;

pub mod value;
pub use value::{Exact, Value, ValueEnum};

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
