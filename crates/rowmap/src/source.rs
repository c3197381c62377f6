use crate::Table;
use rowmap_core::{Result, Value};

/// A forward-only cursor over rows that share one set of columns.
pub trait RowSource {
    /// Column names, in the order values appear in each row.
    fn columns(&self) -> &[String];

    /// Advances to the next row, returning `None` once the source is
    /// exhausted.
    fn next_row(&mut self) -> Option<Result<Vec<Value>>>;
}

impl<S: RowSource + ?Sized> RowSource for &mut S {
    fn columns(&self) -> &[String] {
        (**self).columns()
    }

    fn next_row(&mut self) -> Option<Result<Vec<Value>>> {
        (**self).next_row()
    }
}

impl<S: RowSource + ?Sized> RowSource for Box<S> {
    fn columns(&self) -> &[String] {
        (**self).columns()
    }

    fn next_row(&mut self) -> Option<Result<Vec<Value>>> {
        (**self).next_row()
    }
}

/// A [`RowSource`] reading a [`Table`].
#[derive(Debug, Clone)]
pub struct TableReader<'a> {
    table: &'a Table,
    next: usize,
}

impl<'a> TableReader<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self { table, next: 0 }
    }
}

impl RowSource for TableReader<'_> {
    fn columns(&self) -> &[String] {
        self.table.columns()
    }

    fn next_row(&mut self) -> Option<Result<Vec<Value>>> {
        let values = self.table.row_values(self.next)?;
        self.next += 1;
        Some(Ok(values.to_vec()))
    }
}
