use crate::{FromRow, RowMapper, RowSource};
use rowmap_core::{Error, Result, Row, Value};

use std::marker::PhantomData;
use tracing::debug;

/// Column names of one source resolved to the slots of `T`.
///
/// Resolving once and reusing the plan for every row keeps name matching out
/// of the per-row path.
#[derive(Debug, Clone)]
pub struct ColumnPlan<T> {
    /// Slot bound by each column, in column order
    slots: Vec<Option<usize>>,
    _p: PhantomData<fn() -> T>,
}

impl<T: RowMapper> ColumnPlan<T> {
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Self {
        Self {
            slots: columns
                .iter()
                .map(|column| T::resolve_column(column.as_ref()))
                .collect(),
            _p: PhantomData,
        }
    }

    /// Number of columns the plan was built for.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of columns bound to a field.
    pub fn bound_columns(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl<T: FromRow> ColumnPlan<T> {
    /// Materializes one row whose values are in the plan's column order.
    pub fn bind(&self, values: Vec<Value>) -> Result<T> {
        if values.len() != self.slots.len() {
            return Err(Error::row_arity(self.slots.len(), values.len()));
        }

        let mut instance = T::construct();

        for (slot, value) in self.slots.iter().zip(values) {
            if let Some(slot) = *slot {
                instance.bind_column(slot, value)?;
            }
        }

        Ok(instance)
    }
}

/// Materializes every row of `source`, stopping at the first error.
pub fn materialize_all<T, S>(source: S) -> Result<Vec<T>>
where
    T: FromRow,
    S: RowSource,
{
    let rows = materialize_iter(source).collect::<Result<Vec<T>>>()?;

    debug!(
        type_name = std::any::type_name::<T>(),
        rows = rows.len(),
        "materialized rows"
    );

    Ok(rows)
}

/// Lazily materializes the rows of `source`.
pub fn materialize_iter<T, S>(source: S) -> Materialize<T, S>
where
    T: FromRow,
    S: RowSource,
{
    Materialize {
        plan: ColumnPlan::new(source.columns()),
        source,
    }
}

/// Iterator returned by [`materialize_iter`].
pub struct Materialize<T, S> {
    plan: ColumnPlan<T>,
    source: S,
}

impl<T, S> Materialize<T, S> {
    pub fn plan(&self) -> &ColumnPlan<T> {
        &self.plan
    }
}

impl<T: FromRow, S: RowSource> Iterator for Materialize<T, S> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.source.next_row()?.and_then(|values| self.plan.bind(values)))
    }
}

/// Materialization for a single [`Row`].
pub trait RowExt: Row {
    fn materialize_as<T: FromRow>(&self) -> Result<T> {
        T::from_row(self)
    }
}

impl<R: Row + ?Sized> RowExt for R {}

/// Bulk materialization for a [`RowSource`].
pub trait RowSourceExt: RowSource + Sized {
    fn materialize_all_as<T: FromRow>(self) -> Result<Vec<T>> {
        materialize_all(self)
    }

    fn materialize_iter_as<T: FromRow>(self) -> Materialize<T, Self> {
        materialize_iter(self)
    }
}

impl<S: RowSource> RowSourceExt for S {}
