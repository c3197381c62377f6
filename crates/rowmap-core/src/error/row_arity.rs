/// Error when a row carries a different number of values than its source has
/// columns.
#[derive(Debug)]
pub(super) struct RowArityError {
    pub(super) expected: usize,
    pub(super) actual: usize,
}

impl std::error::Error for RowArityError {}

impl core::fmt::Display for RowArityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "row has {} values but the source has {} columns",
            self.actual, self.expected
        )
    }
}
