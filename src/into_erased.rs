use crate::{ConcreteError, ErasedError};

/// Conversion into an [`ErasedError`] that never boxes twice.
///
/// Concrete errors are boxed into a new handle. An [`ErasedError`] converts
/// into itself and `&ErasedError` into a clone of the handle, so passing an
/// already-erased error through the same call site as a concrete one adds no
/// extra layer. Either way the result has the same identity token and facets.
///
/// This is the bound used by [`make_error`](crate::make_error),
/// [`make_optional_error`](crate::make_optional_error) and
/// [`make_result_error`](crate::make_result_error).
///
/// # Examples
///
/// ```
/// use errorbox::{Error, ErasedError, IntoErasedError};
///
/// let erased = Error::new("lost connection").into_erased_error();
/// let again = erased.clone().into_erased_error();
///
/// assert!(again.ptr_eq(&erased));
/// assert_eq!(again.details(), "lost connection");
/// ```
pub trait IntoErasedError {
    /// Converts `self` into an [`ErasedError`].
    ///
    /// Creation hooks run only when a new handle is boxed.
    #[track_caller]
    #[must_use]
    fn into_erased_error(self) -> ErasedError;
}

impl<C> IntoErasedError for C
where
    C: ConcreteError,
{
    #[inline]
    #[track_caller]
    fn into_erased_error(self) -> ErasedError {
        ErasedError::new(self)
    }
}

impl IntoErasedError for ErasedError {
    #[inline(always)]
    fn into_erased_error(self) -> ErasedError {
        self
    }
}

impl IntoErasedError for &ErasedError {
    #[inline(always)]
    fn into_erased_error(self) -> ErasedError {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassId, Error};

    #[test]
    fn test_concrete_is_boxed() {
        let erased = Error::typed("net", "refused").into_erased_error();
        assert_eq!(erased.class_id(), ClassId::of::<Error>());
        assert_eq!(erased.strong_count(), 1);
    }

    #[test]
    fn test_erased_is_passed_through() {
        let erased = Error::new("refused").into_erased_error();

        let by_ref = (&erased).into_erased_error();
        assert!(by_ref.ptr_eq(&erased));
        assert_eq!(erased.strong_count(), 2);

        let by_value = by_ref.into_erased_error();
        assert!(by_value.ptr_eq(&erased));
        assert_eq!(erased.strong_count(), 2);
        assert!(by_value.downcast_ref::<ErasedError>().is_none());
    }
}
