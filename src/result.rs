//! The result vocabulary built on [`ErasedError`].
//!
//! Failures are always reported by return value:
//!
//! - [`Result<T>`] for operations that produce a value,
//! - [`SuccessResult`] for operations that only succeed or fail,
//! - [`OptionalError`] for operations where "no error" is the success case.
//!
//! The builder functions accept anything implementing [`IntoErasedError`], so
//! a concrete error and an already-erased error can be passed through the same
//! call site without boxing twice.
//!
//! ```
//! use errorbox::{Error, NO_ERROR, OptionalError, Result, make_error, make_optional_error};
//!
//! fn parse_port(input: &str) -> Result<u16> {
//!     match input.parse() {
//!         Ok(port) => Ok(port),
//!         Err(_) => make_error(Error::typed("config", "port is not a number").with_info(input)),
//!     }
//! }
//!
//! fn validate(input: &str) -> OptionalError {
//!     match parse_port(input) {
//!         Ok(_) => NO_ERROR,
//!         Err(error) => make_optional_error(error),
//!     }
//! }
//!
//! assert_eq!(parse_port("8080"), Ok(8080));
//! assert!(validate("8080").is_none());
//! assert_eq!(validate("http").unwrap().info(), "http");
//! ```

use crate::{ErasedError, IntoErasedError};

/// A [`Result`](core::result::Result) whose error arm defaults to
/// [`ErasedError`].
pub type Result<T, E = ErasedError> = core::result::Result<T, E>;

/// The result of an operation that only succeeds or fails.
pub type SuccessResult = Result<bool>;

/// An error slot where `None` means success.
pub type OptionalError = Option<ErasedError>;

/// The "no error" value of an [`OptionalError`].
pub const NO_ERROR: OptionalError = None;

/// Wraps an error into a present [`OptionalError`].
///
/// The result is never equal to [`NO_ERROR`].
#[inline]
#[track_caller]
#[must_use]
pub fn make_optional_error(error: impl IntoErasedError) -> OptionalError {
    Some(error.into_erased_error())
}

/// Builds the error arm of a [`SuccessResult`].
#[inline]
#[track_caller]
pub fn make_result_error(error: impl IntoErasedError) -> SuccessResult {
    Err(error.into_erased_error())
}

/// Builds the error arm of a [`Result<T>`] for any `T`.
///
/// Passing an [`ErasedError`] reuses the handle instead of boxing it again.
///
/// ```
/// use errorbox::{Error, Result, make_error};
///
/// let first: Result<()> = make_error(Error::new("timeout"));
/// let first = first.unwrap_err();
///
/// let second = make_error::<u32>(first.clone()).unwrap_err();
/// assert!(second.ptr_eq(&first));
/// ```
#[inline]
#[track_caller]
pub fn make_error<T>(error: impl IntoErasedError) -> Result<T> {
    Err(error.into_erased_error())
}

/// The success value of a [`SuccessResult`].
#[inline]
#[must_use]
pub fn success() -> SuccessResult {
    Ok(true)
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;
    use crate::{ClassId, Error, HasClassId};

    #[test]
    fn test_no_error_is_empty() {
        assert!(NO_ERROR.is_none());
        assert_ne!(make_optional_error(Error::empty()), NO_ERROR);
    }

    #[test]
    fn test_make_optional_error_preserves_facets() {
        let concrete = Error::typed("auth", "expired").with_info("sub=42");
        let optional = make_optional_error(concrete.clone());
        let Some(error) = optional else {
            panic!("expected an error");
        };
        assert_eq!(error.class_id(), concrete.class_id());
        assert_eq!(error.details(), "expired");
        assert_eq!(error.info(), "sub=42");
    }

    #[test]
    fn test_make_result_error() {
        let result = make_result_error(Error::new("failed"));
        assert!(matches!(result, Err(ref e) if e.details() == "failed"));
        assert_eq!(success(), Ok(true));
    }

    #[test]
    fn test_make_error_is_idempotent() {
        let first = make_error::<()>(Error::new("once")).unwrap_err();
        let second = make_error::<String>(first.clone()).unwrap_err();
        let third = make_error::<u8>(&second).unwrap_err();

        assert!(first.ptr_eq(&second));
        assert!(first.ptr_eq(&third));
        assert_eq!(first.strong_count(), 3);
        assert_eq!(third.class_id(), ClassId::of::<Error>());
    }
}
