use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Similar to [`Result::unwrap`], but the panic message is the error's own [`Display`]
    /// output rather than its debug representation.
    ///
    /// [`Display`]: std::fmt::Display
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
