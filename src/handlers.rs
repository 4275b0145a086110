//! Handlers that decide how a boxed value exposes its facets.
//!
//! When a value is boxed into an [`ErasedError`], a handler is chosen at the
//! same time. The handler is the forwarding layer between the erased handle
//! and the concrete value: every facet read through the handle goes through
//! it. Handlers never change the identity token of the value.
//!
//! - [`Concrete`] forwards everything to the value's [`ConcreteError`]
//!   implementation. This is what [`ErasedError::new`] uses.
//! - [`Redacted`] forwards like [`Concrete`] but reports an empty `info`
//!   facet, for errors that are handed across a trust boundary.
//!
//! Custom handlers implement [`FacetHandler`] and are selected with
//! [`ErasedError::new_custom`].
//!
//! ```
//! use errorbox::{ClassId, ConcreteError, Error, ErasedError, handlers};
//!
//! let error = Error::new("token rejected").with_info("token=abc123");
//!
//! let erased = ErasedError::new_custom::<handlers::Redacted, _>(error);
//! assert_eq!(erased.details(), "token rejected");
//! assert_eq!(erased.info(), "");
//! assert_eq!(erased.class_id(), ClassId::of::<Error>());
//! ```
//!
//! [`ErasedError`]: crate::ErasedError
//! [`ErasedError::new`]: crate::ErasedError::new
//! [`ErasedError::new_custom`]: crate::ErasedError::new_custom

use alloc::string::String;

pub use errorbox_internals::handlers::FacetHandler;

use crate::ConcreteError;

/// Handler forwarding every facet to [`ConcreteError`].
#[derive(Copy, Clone, Debug)]
pub struct Concrete;

impl<C> FacetHandler<C> for Concrete
where
    C: ConcreteError,
{
    fn error_type(value: &C) -> &str {
        value.error_type()
    }

    fn details(value: &C) -> &str {
        value.details()
    }

    fn info(value: &C) -> &str {
        value.info()
    }

    fn display_string(value: &C) -> String {
        value.to_display_string()
    }
}

/// Handler that hides the `info` facet.
///
/// The value itself is left untouched, so [`downcast_ref`] still reaches the
/// original `info`. Only reads through the erased handle are redacted.
///
/// [`downcast_ref`]: crate::ErasedError::downcast_ref
#[derive(Copy, Clone, Debug)]
pub struct Redacted;

impl<C> FacetHandler<C> for Redacted
where
    C: ConcreteError,
{
    fn error_type(value: &C) -> &str {
        value.error_type()
    }

    fn details(value: &C) -> &str {
        value.details()
    }

    fn info(_value: &C) -> &str {
        ""
    }

    fn display_string(value: &C) -> String {
        value.to_display_string()
    }
}
