use crate::{FromRow, RowSourceExt, TableReader};
use rowmap_core::{Error, Result, Row, Value};

/// An in-memory result set: named columns and rows of values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// One row of a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    columns: &'a [String],
    values: &'a [Value],
}

impl Table {
    pub fn new<I, S>(columns: I) -> Table
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: vec![],
        }
    }

    /// Appends a row, which must have one value per column.
    pub fn push_row<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();

        if values.len() != self.columns.len() {
            return Err(Error::row_arity(self.columns.len(), values.len()));
        }

        self.rows.push(values);
        Ok(())
    }

    /// Builder form of [`push_row`](Table::push_row).
    pub fn with_row<I, V>(mut self, values: I) -> Result<Table>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_row(values)?;
        Ok(self)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<TableRow<'_>> {
        self.rows.get(index).map(|values| TableRow {
            columns: &self.columns,
            values,
        })
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = TableRow<'_>> + '_ {
        self.rows.iter().map(|values| TableRow {
            columns: &self.columns,
            values,
        })
    }

    /// A cursor over the table's rows.
    pub fn reader(&self) -> TableReader<'_> {
        TableReader::new(self)
    }

    /// Materializes every row as a `T`.
    pub fn materialize_all_as<T: FromRow>(&self) -> Result<Vec<T>> {
        self.reader().materialize_all_as()
    }

    pub(crate) fn row_values(&self, index: usize) -> Option<&[Value]> {
        self.rows.get(index).map(Vec::as_slice)
    }
}

impl<'a> TableRow<'a> {
    /// Value of the column named `name`, ignoring case.
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.columns
            .iter()
            .position(|column| rowmap_core::schema::eq_ignore_case(column, name))
            .map(|index| &self.values[index])
    }

    pub fn values(&self) -> &'a [Value] {
        self.values
    }
}

impl Row for TableRow<'_> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn column_name(&self, index: usize) -> &str {
        &self.columns[index]
    }

    fn value(&self, index: usize) -> Value {
        self.values[index].clone()
    }
}
