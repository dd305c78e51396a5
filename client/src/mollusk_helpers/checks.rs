use counter_interface::error::CounterError;
use mollusk_svm::result::Check;

/// Extension trait for converting a [`CounterError`] directly into a [`Check`] that asserts
/// the instruction failed with that error.
pub trait IntoCheckFailure {
    fn into_check_failure(self) -> Check<'static>;
}

impl IntoCheckFailure for CounterError {
    fn into_check_failure(self) -> Check<'static> {
        Check::err(self.into())
    }
}
