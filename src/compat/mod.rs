//! Interoperability with other error handling approaches.
//!
//! # Available Integrations
//!
//! - [`boxed_error`] - Convert between [`ErasedError`]s and boxed error trait
//!   objects (`Box<dyn Error + Send + Sync>`)
//! - [`anyhow1`] - Integration with the `anyhow` 1.x error handling library
//!   (requires the `compat-anyhow1` feature flag)
//!
//! Both directions are covered. Foreign errors become concrete error kinds of
//! their own, with their rendered messages as facets. Going the other way,
//! [`ErasedError`] implements [`core::error::Error`], so it fits anywhere a
//! standard error is expected. A foreign error that merely carries an
//! [`ErasedError`] is unwrapped instead of being boxed a second time.
//!
//! [`ErasedError`]: crate::ErasedError

#[cfg(feature = "compat-anyhow1")]
#[cfg_attr(docsrs, doc(cfg(feature = "compat-anyhow1")))]
pub mod anyhow1;
pub mod boxed_error;
