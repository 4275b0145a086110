//! Bidirectional integration with the [`anyhow`] 1.x error handling library.
//!
//! # Overview
//!
//! This module lets `errorbox` code call into `anyhow` code and the other way
//! around:
//!
//! - An [`anyhow::Error`] implements [`IntoErasedError`], so it can be passed
//!   to [`make_error`](crate::make_error), [`erased!`](crate::erased!) or
//!   [`ResultExt::erase_err`](crate::ResultExt::erase_err). It is stored as an
//!   [`AnyhowError`] with the `type` facet `"anyhow"`.
//! - An [`ErasedError`] converts into an [`anyhow::Error`] through `?` or the
//!   [`IntoAnyhow`] trait.
//!
//! An `anyhow::Error` that was itself created from an [`ErasedError`] is
//! unwrapped back into the original handle rather than boxed again.
//!
//! # Examples
//!
//! ```
//! use errorbox::{ResultExt, compat::anyhow1::IntoAnyhow, erased};
//!
//! fn legacy() -> anyhow::Result<u8> {
//!     anyhow::bail!("legacy failure")
//! }
//!
//! let erased = legacy().erase_err().unwrap_err();
//! assert_eq!(erased.error_type(), "anyhow");
//! assert_eq!(erased.details(), "legacy failure");
//!
//! let back: anyhow::Error = erased!("modern failure").into_anyhow();
//! assert_eq!(back.to_string(), "modern failure");
//! ```

use alloc::{format, string::String};

use crate::{ConcreteError, ErasedError, IntoErasedError};

/// An [`anyhow::Error`] stored as a concrete error kind.
///
/// The `details` facet is the outermost message, the `info` facet is the full
/// cause chain.
#[derive(Debug)]
pub struct AnyhowError {
    inner: anyhow::Error,
    details: String,
    info: String,
}

impl AnyhowError {
    /// Wraps an [`anyhow::Error`], rendering its facets once.
    #[must_use]
    pub fn new(inner: anyhow::Error) -> Self {
        let details = format!("{inner}");
        let info = format!("{inner:#}");
        Self {
            inner,
            details,
            info,
        }
    }

    /// Returns the wrapped error.
    #[must_use]
    pub fn inner(&self) -> &anyhow::Error {
        &self.inner
    }

    /// Returns the wrapped error, consuming `self`.
    #[must_use]
    pub fn into_inner(self) -> anyhow::Error {
        self.inner
    }
}

impl core::fmt::Display for AnyhowError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)
    }
}

impl ConcreteError for AnyhowError {
    fn error_type(&self) -> &str {
        "anyhow"
    }

    fn details(&self) -> &str {
        &self.details
    }

    fn info(&self) -> &str {
        &self.info
    }
}

impl IntoErasedError for anyhow::Error {
    #[track_caller]
    fn into_erased_error(self) -> ErasedError {
        match self.downcast::<ErasedError>() {
            Ok(erased) => erased,
            Err(other) => ErasedError::new(AnyhowError::new(other)),
        }
    }
}

/// Conversion of [`ErasedError`]s into [`anyhow::Error`]s.
pub trait IntoAnyhow {
    /// The output type of the conversion.
    type Output;

    /// Converts `self` into an [`anyhow::Error`] based type.
    fn into_anyhow(self) -> Self::Output;
}

impl IntoAnyhow for ErasedError {
    type Output = anyhow::Error;

    #[inline]
    fn into_anyhow(self) -> Self::Output {
        anyhow::Error::from(self)
    }
}

impl<T> IntoAnyhow for Result<T, ErasedError> {
    type Output = Result<T, anyhow::Error>;

    #[inline]
    fn into_anyhow(self) -> Self::Output {
        self.map_err(IntoAnyhow::into_anyhow)
    }
}
