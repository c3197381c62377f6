use crate::Value;

/// One tabular record: an ordered sequence of named column values.
///
/// Column order is decided by whoever produced the row and never has to match
/// the declaration order of the type being materialized. A row may carry more
/// or fewer columns than the type has fields.
pub trait Row {
    /// Number of columns in the row.
    fn len(&self) -> usize;

    /// Name of the column at `index`.
    fn column_name(&self, index: usize) -> &str;

    /// An owned copy of the value at `index`.
    fn value(&self, index: usize) -> Value;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates `(name, value)` pairs in column order.
    fn columns(&self) -> Columns<'_, Self> {
        Columns {
            row: self,
            index: 0,
        }
    }
}

/// Iterator returned by [`Row::columns`].
pub struct Columns<'a, R: ?Sized> {
    row: &'a R,
    index: usize,
}

impl<'a, R: Row + ?Sized> Iterator for Columns<'a, R> {
    type Item = (&'a str, Value);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.row.len() {
            return None;
        }

        let index = self.index;
        self.index += 1;
        Some((self.row.column_name(index), self.row.value(index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.row.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<S: AsRef<str>> Row for [(S, Value)] {
    fn len(&self) -> usize {
        <[_]>::len(self)
    }

    fn column_name(&self, index: usize) -> &str {
        self[index].0.as_ref()
    }

    fn value(&self, index: usize) -> Value {
        self[index].1.clone()
    }
}

impl<S: AsRef<str>, const N: usize> Row for [(S, Value); N] {
    fn len(&self) -> usize {
        N
    }

    fn column_name(&self, index: usize) -> &str {
        self[index].0.as_ref()
    }

    fn value(&self, index: usize) -> Value {
        self[index].1.clone()
    }
}

impl<S: AsRef<str>> Row for Vec<(S, Value)> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn column_name(&self, index: usize) -> &str {
        self[index].0.as_ref()
    }

    fn value(&self, index: usize) -> Value {
        self[index].1.clone()
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn column_name(&self, index: usize) -> &str {
        (**self).column_name(index)
    }

    fn value(&self, index: usize) -> Value {
        (**self).value(index)
    }
}
