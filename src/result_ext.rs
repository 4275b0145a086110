use crate::{ErasedError, IntoErasedError, OptionalError, Result};

/// Extension methods on [`Result`](core::result::Result) for erasing its error
/// arm.
///
/// # Examples
///
/// ```
/// use errorbox::{Error, OptionalError, ResultExt};
///
/// fn check(limit: u32) -> Result<u32, Error> {
///     if limit > 100 {
///         Err(Error::typed("limits", "limit too high"))
///     } else {
///         Ok(limit)
///     }
/// }
///
/// let erased: errorbox::Result<u32> = check(500).erase_err();
/// assert_eq!(erased.unwrap_err().error_type(), "limits");
///
/// let optional: OptionalError = check(5).into_optional_error();
/// assert!(optional.is_none());
/// ```
pub trait ResultExt<T> {
    /// Converts the error arm into an [`ErasedError`].
    ///
    /// An error arm that is already an [`ErasedError`] is kept as is.
    #[track_caller]
    fn erase_err(self) -> Result<T>;

    /// Drops the success value and keeps only the error, if any.
    #[track_caller]
    #[must_use]
    fn into_optional_error(self) -> OptionalError;
}

impl<T, E> ResultExt<T> for core::result::Result<T, E>
where
    E: IntoErasedError,
{
    #[inline]
    #[track_caller]
    fn erase_err(self) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into_erased_error()),
        }
    }

    #[inline]
    #[track_caller]
    fn into_optional_error(self) -> OptionalError {
        match self {
            Ok(_) => None,
            Err(error) => Some(error.into_erased_error()),
        }
    }
}

/// Extension methods on [`OptionalError`].
///
/// # Examples
///
/// ```
/// use errorbox::{Error, NO_ERROR, OptionalErrorExt, make_optional_error};
///
/// assert!(NO_ERROR.is_no_error());
/// assert_eq!(NO_ERROR.into_success_result(), Ok(true));
///
/// let failed = make_optional_error(Error::new("nope"));
/// assert!(!failed.is_no_error());
/// assert_eq!(failed.into_result(7).unwrap_err().details(), "nope");
/// ```
pub trait OptionalErrorExt {
    /// Returns `true` if this is the "no error" value.
    #[must_use]
    fn is_no_error(&self) -> bool;

    /// Converts into a [`SuccessResult`](crate::SuccessResult): `Ok(true)`
    /// when there is no error.
    fn into_success_result(self) -> Result<bool>;

    /// Converts into a [`Result<T>`] that carries `value` when there is no
    /// error.
    fn into_result<T>(self, value: T) -> Result<T>;
}

impl OptionalErrorExt for Option<ErasedError> {
    #[inline]
    fn is_no_error(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn into_success_result(self) -> Result<bool> {
        self.into_result(true)
    }

    #[inline]
    fn into_result<T>(self, value: T) -> Result<T> {
        match self {
            None => Ok(value),
            Some(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, NO_ERROR, make_optional_error};

    #[test]
    fn test_erase_err_keeps_existing_handle() {
        let erased = ErasedError::new_unhooked(Error::new("inner"));
        let result: core::result::Result<(), ErasedError> = Err(erased.clone());
        let result = result.erase_err();
        assert!(matches!(result, Err(ref e) if e.ptr_eq(&erased)));
    }

    #[test]
    fn test_erase_err_ok_passthrough() {
        let result: core::result::Result<u8, Error> = Ok(3);
        assert_eq!(result.erase_err(), Ok(3));
    }

    #[test]
    fn test_into_optional_error() {
        let ok: core::result::Result<u8, Error> = Ok(1);
        assert!(ok.into_optional_error().is_no_error());

        let err: core::result::Result<u8, Error> = Err(Error::new("bad"));
        let optional = err.into_optional_error();
        assert_eq!(optional.as_ref().map(ErasedError::details), Some("bad"));
    }

    #[test]
    fn test_optional_error_conversions() {
        assert_eq!(NO_ERROR.into_result("value"), Ok("value"));

        let failed = make_optional_error(Error::typed("t", "d"));
        let result = failed.clone().into_success_result();
        assert!(matches!(result, Err(ref e) if e.error_type() == "t"));
        assert!(failed.into_result(()).is_err());
    }
}
