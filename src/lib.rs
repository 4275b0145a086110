#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Shareable type-erased errors with kind identity.
//!
//! ## Overview
//!
//! Libraries that report failures across API boundaries often produce many
//! different error types. This crate lets each of them stay a plain, typed
//! value while callers handle all of them through one uniform handle:
//!
//! - A **concrete error** is any type implementing [`ConcreteError`]. It
//!   exposes three textual facets: a short `type`, the human-facing `details`
//!   and a developer-only `info`. The default concrete error is [`Error`].
//! - Every concrete kind has an identity token, [`ClassId`], derived from the
//!   type itself. Two errors of the same kind always report the same token,
//!   whatever their facets say.
//! - An [`ErasedError`] boxes one concrete error behind a shared,
//!   atomically reference-counted handle. Cloning is cheap, the facets and
//!   token are readable without knowing the concrete kind, and nothing can
//!   mutate the value once it is boxed.
//! - [`Result<T>`], [`SuccessResult`] and [`OptionalError`] carry errors by
//!   return value, and [`make_error`], [`make_result_error`] and
//!   [`make_optional_error`] build their error arms from either a concrete or
//!   an already-erased error, never boxing twice.
//!
//! ## Quick Example
//!
//! ```
//! use errorbox::{ClassId, ConcreteError, Error, Result, make_error};
//!
//! errorbox::error_kind! {
//!     /// The requested file does not exist.
//!     pub struct NotFound: "not_found";
//! }
//!
//! fn open(path: &str) -> Result<Vec<u8>> {
//!     if path.is_empty() {
//!         return make_error(Error::typed("args", "empty path"));
//!     }
//!     make_error(NotFound::new(format!("{path} does not exist")).with_info("checked the cache"))
//! }
//!
//! let error = open("notes.txt").unwrap_err();
//! assert!(error.is_kind(ClassId::of::<NotFound>()));
//! assert_eq!(error.error_type(), "not_found");
//! assert_eq!(error.details(), "notes.txt does not exist");
//! assert_eq!(error.info(), "checked the cache");
//!
//! // Recover the concrete value when the kind is known
//! let not_found: &NotFound = error.downcast_ref().unwrap();
//! assert_eq!(not_found.details(), "notes.txt does not exist");
//! ```
//!
//! ## Custom Error Kinds
//!
//! Any `Send + Sync + 'static` type can become a concrete error by
//! implementing [`ConcreteError`]. Only `details` is required:
//!
//! ```
//! use errorbox::{ConcreteError, ErasedError};
//!
//! #[derive(Debug)]
//! enum DbError {
//!     Locked,
//!     Corrupt { page: u32 },
//! }
//!
//! impl ConcreteError for DbError {
//!     fn error_type(&self) -> &str {
//!         "db"
//!     }
//!
//!     fn details(&self) -> &str {
//!         match self {
//!             DbError::Locked => "database is locked",
//!             DbError::Corrupt { .. } => "database is corrupt",
//!         }
//!     }
//!
//!     fn to_display_string(&self) -> String {
//!         match self {
//!             DbError::Locked => "database is locked".to_owned(),
//!             DbError::Corrupt { page } => format!("database is corrupt at page {page}"),
//!         }
//!     }
//! }
//!
//! let error: ErasedError = DbError::Corrupt { page: 7 }.into();
//! assert_eq!(error.to_string(), "database is corrupt at page 7");
//! ```
//!
//! ## Hooks
//!
//! Global [`hooks`] observe every newly boxed error, for example to log it.
//! The `errorbox-tracing` crate provides a hook that emits `tracing` events.
//!
//! ## Features
//!
//! - `std` (default): uses the standard library reader-writer lock for the hook
//!   registry. Without it the crate is `no_std` and uses a spin lock.
//! - `compat-anyhow1`: conversions to and from `anyhow::Error`, see
//!   [`compat`].

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod compat;
pub mod handlers;
pub mod hooks;
pub mod prelude;

mod class_id;
mod concrete;
mod erased;
mod error;
mod into_erased;
mod result;
mod result_ext;

pub use self::{
    class_id::{ClassId, HasClassId},
    concrete::ConcreteError,
    erased::ErasedError,
    error::Error,
    into_erased::IntoErasedError,
    result::{
        NO_ERROR, OptionalError, Result, SuccessResult, make_error, make_optional_error,
        make_result_error, success,
    },
    result_ext::{OptionalErrorExt, ResultExt},
};

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    use alloc::fmt;
    #[doc(hidden)]
    pub use alloc::{format, string::String};
    #[doc(hidden)]
    pub use core::{format_args, result::Result::Err};

    use crate::{ErasedError, Error};

    #[doc(hidden)]
    #[inline]
    #[cold]
    #[must_use]
    #[track_caller]
    pub fn format_erased(args: fmt::Arguments<'_>) -> ErasedError {
        if let Some(message) = args.as_str() {
            ErasedError::new(Error::new(message))
        } else {
            ErasedError::new(Error::new(fmt::format(args)))
        }
    }
}
