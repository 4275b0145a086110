//! Convert between [`ErasedError`]s and boxed error trait objects.
//!
//! # Overview
//!
//! A `Box<dyn Error + Send + Sync>` can be passed anywhere an
//! [`IntoErasedError`] is expected. It is stored as a [`BoxedError`], a
//! concrete kind with the `type` facet `"boxed"`, whose `details` facet is the
//! error's [`Display`](core::fmt::Display) output and whose `info` facet is its
//! [`Debug`](core::fmt::Debug) output.
//!
//! If the box already holds an [`ErasedError`], that handle is taken out of
//! the box instead of being wrapped a second time.
//!
//! ```
//! use std::error::Error;
//!
//! use errorbox::{ClassId, IntoErasedError, compat::boxed_error::BoxedError};
//!
//! let boxed: Box<dyn Error + Send + Sync> = "missing header".into();
//! let erased = boxed.into_erased_error();
//!
//! assert_eq!(erased.error_type(), "boxed");
//! assert_eq!(erased.details(), "missing header");
//! assert_eq!(erased.class_id(), ClassId::of::<BoxedError>());
//! ```
//!
//! # Converting into Boxed Errors
//!
//! [`ErasedError`] implements [`core::error::Error`], so `?` already converts
//! it into a boxed trait object. The [`IntoBoxedError`] trait spells the
//! conversion out for values and results:
//!
//! ```
//! use std::error::Error;
//!
//! use errorbox::{Result, compat::boxed_error::IntoBoxedError, erased};
//!
//! fn lookup() -> Result<u32> {
//!     Err(erased!("no such key"))
//! }
//!
//! let boxed: std::result::Result<u32, Box<dyn Error + Send + Sync>> = lookup().into_boxed_error();
//! assert_eq!(boxed.unwrap_err().to_string(), "no such key");
//! ```

use alloc::{boxed::Box, format, string::String};

use crate::{ConcreteError, ErasedError, IntoErasedError};

/// A boxed error trait object stored as a concrete error kind.
pub struct BoxedError {
    inner: Box<dyn core::error::Error + Send + Sync>,
    details: String,
    info: String,
}

impl BoxedError {
    /// Wraps a boxed error, rendering its facets once.
    #[must_use]
    pub fn new(inner: Box<dyn core::error::Error + Send + Sync>) -> Self {
        let details = format!("{inner}");
        let info = format!("{inner:?}");
        Self {
            inner,
            details,
            info,
        }
    }

    /// Returns the wrapped error.
    #[must_use]
    pub fn inner(&self) -> &(dyn core::error::Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Returns the wrapped error, consuming `self`.
    #[must_use]
    pub fn into_inner(self) -> Box<dyn core::error::Error + Send + Sync> {
        self.inner
    }
}

impl core::fmt::Debug for BoxedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.inner, f)
    }
}

impl core::fmt::Display for BoxedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)
    }
}

impl ConcreteError for BoxedError {
    fn error_type(&self) -> &str {
        "boxed"
    }

    fn details(&self) -> &str {
        &self.details
    }

    fn info(&self) -> &str {
        &self.info
    }
}

impl IntoErasedError for Box<dyn core::error::Error + Send + Sync> {
    #[track_caller]
    fn into_erased_error(self) -> ErasedError {
        match self.downcast::<ErasedError>() {
            Ok(erased) => *erased,
            Err(other) => ErasedError::new(BoxedError::new(other)),
        }
    }
}

/// Conversion of [`ErasedError`]s into boxed error trait objects.
pub trait IntoBoxedError {
    /// The output type of the conversion.
    type Output;

    /// Converts `self` into a boxed error trait object.
    fn into_boxed_error(self) -> Self::Output;
}

impl IntoBoxedError for ErasedError {
    type Output = Box<dyn core::error::Error + Send + Sync>;

    #[inline]
    fn into_boxed_error(self) -> Self::Output {
        Box::new(self)
    }
}

impl<T> IntoBoxedError for Result<T, ErasedError> {
    type Output = Result<T, Box<dyn core::error::Error + Send + Sync>>;

    #[inline]
    fn into_boxed_error(self) -> Self::Output {
        self.map_err(IntoBoxedError::into_boxed_error)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::{ClassId, Error};

    #[derive(Debug)]
    struct Disconnected;

    impl core::fmt::Display for Disconnected {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str("peer disconnected")
        }
    }

    impl core::error::Error for Disconnected {}

    #[test]
    fn test_boxed_error_facets() {
        let boxed: Box<dyn core::error::Error + Send + Sync> = Box::new(Disconnected);
        let erased = boxed.into_erased_error();

        assert_eq!(erased.error_type(), "boxed");
        assert_eq!(erased.details(), "peer disconnected");
        assert_eq!(erased.info(), "Disconnected");
        assert_eq!(erased.class_id(), ClassId::of::<BoxedError>());
        assert!(
            erased
                .downcast_ref::<BoxedError>()
                .is_some_and(|b| b.inner().is::<Disconnected>())
        );
    }

    #[test]
    fn test_boxed_erased_error_is_unwrapped() {
        let erased = ErasedError::new_unhooked(Error::new("original"));
        let boxed = erased.clone().into_boxed_error();
        assert_eq!(boxed.to_string(), "original");

        let back = boxed.into_erased_error();
        assert!(back.ptr_eq(&erased));
        assert_eq!(back.class_id(), ClassId::of::<Error>());
    }
}
