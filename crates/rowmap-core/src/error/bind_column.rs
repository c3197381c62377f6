/// Names the field a column value was being bound to.
#[derive(Debug)]
pub(super) struct BindColumnError {
    pub(super) field: &'static str,
}

impl std::error::Error for BindColumnError {}

impl core::fmt::Display for BindColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot bind column `{}`", self.field)
    }
}
