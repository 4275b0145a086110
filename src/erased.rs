use alloc::string::String;
use core::{
    any::TypeId,
    hash::{Hash, Hasher},
    panic::Location,
};

use errorbox_internals::RawError;

use crate::{ClassId, ConcreteError, handlers, hooks};

/// A shared, type-erased handle to one concrete error value.
///
/// An `ErasedError` owns its value through an atomically reference-counted
/// allocation. Cloning a handle is a reference-count bump, and the value is
/// dropped when the last handle goes away. The concrete kind of the value never
/// changes after construction, and its identity token and three facets are
/// readable without knowing that kind.
///
/// There is no way to mutate the value through a handle. Concrete errors are
/// finished with their own builders before they are boxed.
///
/// Two handles compare equal when they carry the same *kind* of error, as
/// reported by [`class_id`](Self::class_id). Their facets are not compared.
///
/// # Examples
///
/// ```
/// use errorbox::{ClassId, Error, ErasedError};
///
/// let error = ErasedError::new(Error::typed("io", "disk full").with_info("/dev/sda1"));
///
/// assert_eq!(error.error_type(), "io");
/// assert_eq!(error.details(), "disk full");
/// assert_eq!(error.info(), "/dev/sda1");
/// assert!(error.is_kind(ClassId::of::<Error>()));
///
/// let copy = error.clone();
/// assert!(copy.ptr_eq(&error));
/// assert_eq!(error.strong_count(), 2);
/// ```
///
/// Facet builders belong to the concrete error and are gone once it is boxed:
///
/// ```compile_fail
/// use errorbox::{Error, ErasedError};
///
/// let error = ErasedError::new(Error::new("draft"));
/// let _ = error.with_details("final");
/// ```
///
/// and the boxed value is only reachable by shared reference:
///
/// ```compile_fail
/// use errorbox::{Error, ErasedError};
///
/// let error = ErasedError::new(Error::new("draft"));
/// let _: &mut Error = error.downcast_ref::<Error>().unwrap();
/// ```
#[repr(transparent)]
pub struct ErasedError {
    raw: RawError,
}

// SAFETY: Every constructor requires the stored value to be `Send + Sync`, the
// handle gives out no mutable access to it, and the reference count is
// maintained atomically by `triomphe::Arc`.
unsafe impl Send for ErasedError {}

// SAFETY: See the `Send` implementation above.
unsafe impl Sync for ErasedError {}

impl ErasedError {
    /// Boxes a concrete error, forwarding every facet to its
    /// [`ConcreteError`] implementation.
    ///
    /// Installed creation hooks run once for the new handle, with the caller's
    /// location.
    #[track_caller]
    #[must_use]
    pub fn new<C>(value: C) -> Self
    where
        C: ConcreteError,
    {
        Self::new_custom::<handlers::Concrete, C>(value)
    }

    /// Boxes a value whose facets are read through the handler `H`.
    ///
    /// The identity token is the one of `C` regardless of the handler.
    /// Installed creation hooks run once for the new handle, with the caller's
    /// location.
    ///
    /// ```
    /// use errorbox::{ClassId, ErasedError, handlers::FacetHandler};
    ///
    /// struct StatusCode(u16);
    ///
    /// struct StatusHandler;
    ///
    /// impl FacetHandler<StatusCode> for StatusHandler {
    ///     fn error_type(_value: &StatusCode) -> &str {
    ///         "http"
    ///     }
    ///
    ///     fn details(value: &StatusCode) -> &str {
    ///         match value.0 {
    ///             404 => "not found",
    ///             500 => "internal server error",
    ///             _ => "unexpected status",
    ///         }
    ///     }
    ///
    ///     fn info(_value: &StatusCode) -> &str {
    ///         ""
    ///     }
    ///
    ///     fn display_string(value: &StatusCode) -> String {
    ///         format!("HTTP {}", value.0)
    ///     }
    /// }
    ///
    /// let error = ErasedError::new_custom::<StatusHandler, _>(StatusCode(404));
    /// assert_eq!(error.details(), "not found");
    /// assert_eq!(error.to_string(), "HTTP 404");
    /// assert_eq!(error.class_id(), ClassId::of::<StatusCode>());
    /// ```
    #[track_caller]
    #[must_use]
    pub fn new_custom<H, C>(value: C) -> Self
    where
        C: Send + Sync + 'static,
        H: handlers::FacetHandler<C>,
    {
        let error = Self::new_custom_unhooked::<H, C>(value);
        hooks::error_creation::run_creation_hooks(&error, Location::caller());
        error
    }

    /// Boxes a concrete error without running any creation hooks.
    #[must_use]
    pub fn new_unhooked<C>(value: C) -> Self
    where
        C: ConcreteError,
    {
        Self::new_custom_unhooked::<handlers::Concrete, C>(value)
    }

    fn new_custom_unhooked<H, C>(value: C) -> Self
    where
        C: Send + Sync + 'static,
        H: handlers::FacetHandler<C>,
    {
        Self {
            raw: RawError::new::<C, H>(value),
        }
    }

    /// Returns the identity token of the boxed value's kind.
    #[inline]
    #[must_use]
    pub fn class_id(&self) -> ClassId {
        let raw = self.raw.as_ref();
        ClassId::from_parts(raw.value_type_id(), raw.value_type_name())
    }

    /// Returns the short category name of the error.
    #[inline]
    #[must_use]
    pub fn error_type(&self) -> &str {
        self.raw.as_ref().error_type()
    }

    /// Returns the primary human-facing message.
    #[inline]
    #[must_use]
    pub fn details(&self) -> &str {
        self.raw.as_ref().details()
    }

    /// Returns the developer-only annotation.
    #[inline]
    #[must_use]
    pub fn info(&self) -> &str {
        self.raw.as_ref().info()
    }

    /// Renders the boxed value as a single human-readable string.
    ///
    /// This is also what the [`Display`](core::fmt::Display) implementation
    /// writes.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.raw.as_ref().display_string()
    }

    /// Returns `true` if the boxed value is of kind `C`.
    #[inline]
    #[must_use]
    pub fn is<C: 'static>(&self) -> bool {
        self.raw.as_ref().value_type_id() == TypeId::of::<C>()
    }

    /// Returns `true` if the boxed value is of the kind identified by
    /// `class_id`.
    #[inline]
    #[must_use]
    pub fn is_kind(&self, class_id: ClassId) -> bool {
        self.raw.as_ref().value_type_id() == class_id.type_id()
    }

    /// Returns a shared reference to the boxed value if it is of kind `C`.
    ///
    /// ```
    /// use errorbox::{Error, ErasedError};
    ///
    /// let error = ErasedError::new(Error::new("nope"));
    /// assert_eq!(error.downcast_ref::<Error>(), Some(&Error::new("nope")));
    /// assert!(error.downcast_ref::<String>().is_none());
    /// ```
    #[must_use]
    pub fn downcast_ref<C: 'static>(&self) -> Option<&C> {
        if self.is::<C>() {
            // SAFETY: We just checked that the stored type is `C`
            let value = unsafe { self.raw.as_ref().value_downcast_unchecked::<C>() };
            Some(value)
        } else {
            None
        }
    }

    /// Takes the boxed value back out if it is of kind `C` and this is the last
    /// handle pointing at it.
    ///
    /// Otherwise the handle is returned unchanged.
    ///
    /// ```
    /// use errorbox::{Error, ErasedError};
    ///
    /// let error = ErasedError::new(Error::new("once"));
    /// let copy = error.clone();
    ///
    /// // Still shared, so the value cannot be taken out
    /// let error = error.try_unwrap::<Error>().unwrap_err();
    /// drop(copy);
    ///
    /// assert_eq!(error.try_unwrap::<Error>().unwrap(), Error::new("once"));
    /// ```
    pub fn try_unwrap<C: 'static>(self) -> Result<C, Self> {
        if !self.is::<C>() {
            return Err(self);
        }
        // SAFETY: We just checked that the stored type is `C`
        let result = unsafe { self.raw.try_into_inner::<C>() };
        result.map_err(|raw| Self { raw })
    }

    /// Returns `true` if the boxed value's facets are read through the
    /// handler `H`.
    #[inline]
    #[must_use]
    pub fn uses_handler<H: 'static>(&self) -> bool {
        self.raw.as_ref().handler_type_id() == TypeId::of::<H>()
    }

    /// Returns `true` if the error was boxed with [`handlers::Redacted`], so
    /// its `info` facet is hidden behind this handle.
    ///
    /// ```
    /// use errorbox::{Error, ErasedError, handlers};
    ///
    /// let plain = ErasedError::new(Error::new("denied").with_info("user=7"));
    /// let redacted = ErasedError::new_custom::<handlers::Redacted, _>(
    ///     Error::new("denied").with_info("user=7"),
    /// );
    ///
    /// assert!(!plain.is_redacted());
    /// assert!(redacted.is_redacted());
    /// assert_eq!(plain, redacted);
    /// ```
    #[inline]
    #[must_use]
    pub fn is_redacted(&self) -> bool {
        self.uses_handler::<handlers::Redacted>()
    }

    /// Returns the number of handles sharing the boxed value.
    #[inline]
    #[must_use]
    pub fn strong_count(&self) -> usize {
        self.raw.as_ref().strong_count()
    }

    /// Returns `true` if both handles share the same boxed value.
    ///
    /// This is stricter than `==`, which only compares kinds.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.raw.as_ref().ptr_eq(other.raw.as_ref())
    }
}

impl Clone for ErasedError {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.as_ref().clone_arc(),
        }
    }
}

impl PartialEq for ErasedError {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.class_id() == other.class_id()
    }
}

impl Eq for ErasedError {}

impl Hash for ErasedError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class_id().hash(state);
    }
}

impl core::fmt::Display for ErasedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl core::fmt::Debug for ErasedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ErasedError")
            .field("class", &self.class_id())
            .field("type", &self.error_type())
            .field("details", &self.details())
            .field("info", &self.info())
            .finish()
    }
}

impl core::error::Error for ErasedError {}

impl<C> From<C> for ErasedError
where
    C: ConcreteError,
{
    #[track_caller]
    fn from(value: C) -> Self {
        Self::new(value)
    }
}
