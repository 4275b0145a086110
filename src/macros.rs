/// Creates an [`ErasedError`](crate::ErasedError).
///
/// The macro accepts either a format string, which becomes the `details`
/// facet of a default [`Error`](crate::Error), or any expression implementing
/// [`IntoErasedError`](crate::IntoErasedError). Passing an expression that is
/// already an `ErasedError` reuses the handle.
///
/// # Examples
///
/// ```
/// use errorbox::{ClassId, Error, erased};
///
/// let port = 70000;
/// let from_format = erased!("port {port} is out of range");
/// assert_eq!(from_format.details(), "port 70000 is out of range");
///
/// let from_args = erased!("port {} is out of range", port);
/// assert_eq!(from_args.details(), from_format.details());
///
/// let from_value = erased!(Error::typed("config", "bad port"));
/// assert_eq!(from_value.error_type(), "config");
///
/// let same = erased!(from_value.clone());
/// assert!(same.ptr_eq(&from_value));
/// assert_eq!(same.class_id(), ClassId::of::<Error>());
/// ```
#[macro_export]
macro_rules! erased {
    ($msg:literal $(,)?) => {
        $crate::__private::format_erased($crate::__private::format_args!($msg))
    };
    ($error:expr $(,)?) => {
        $crate::IntoErasedError::into_erased_error($error)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__private::format_erased($crate::__private::format_args!($fmt, $($arg)*))
    };
}

/// Returns early with an error.
///
/// Takes the same arguments as [`erased!`] and converts the result with
/// [`Into`], so it works in functions returning [`Result<T>`](crate::Result),
/// [`SuccessResult`](crate::SuccessResult) or any other result whose error arm
/// converts from an [`ErasedError`](crate::ErasedError).
///
/// # Examples
///
/// ```
/// use errorbox::{Result, bail};
///
/// fn divide(a: i32, b: i32) -> Result<i32> {
///     if b == 0 {
///         bail!("cannot divide {a} by zero");
///     }
///     Ok(a / b)
/// }
///
/// assert_eq!(divide(10, 2).unwrap(), 5);
/// assert_eq!(divide(1, 0).unwrap_err().details(), "cannot divide 1 by zero");
/// ```
#[macro_export]
macro_rules! bail {
    ($($args:tt)*) => {
        return $crate::__private::Err($crate::erased!($($args)*).into())
    };
}

/// Declares a new concrete error kind.
///
/// The generated type wraps a default [`Error`](crate::Error) whose `type`
/// facet is fixed to the given string. It has its own identity token and gets
/// the same constructors and builders as [`Error`](crate::Error):
/// `new(details)`, `empty()`, `with_details(..)` and `with_info(..)`.
///
/// # Examples
///
/// ```
/// use errorbox::{ClassId, ConcreteError, Error, ErasedError, HasClassId};
///
/// errorbox::error_kind! {
///     /// A requested record does not exist.
///     pub struct NotFound: "not_found";
/// }
///
/// let error = NotFound::new("user 42").with_info("table=users");
/// assert_eq!(error.error_type(), "not_found");
/// assert_ne!(error.class_id(), ClassId::of::<Error>());
///
/// let erased = ErasedError::new(error);
/// assert!(erased.is::<NotFound>());
/// assert_eq!(erased.details(), "user 42");
/// ```
#[macro_export]
macro_rules! error_kind {
    ($(#[$meta:meta])* $vis:vis struct $name:ident : $error_type:literal ;) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        $vis struct $name($crate::Error);

        impl $name {
            /// The fixed `type` facet of this kind.
            pub const ERROR_TYPE: &'static str = $error_type;

            /// Creates an error with the given `details` facet.
            #[must_use]
            pub fn new(details: impl ::core::convert::Into<$crate::__private::String>) -> Self {
                Self($crate::Error::typed($error_type, details))
            }

            /// Creates an error with empty `details` and `info` facets.
            #[must_use]
            pub fn empty() -> Self {
                Self($crate::Error::typed($error_type, ""))
            }

            /// Replaces the `details` facet.
            #[must_use]
            pub fn with_details(
                self,
                details: impl ::core::convert::Into<$crate::__private::String>,
            ) -> Self {
                Self(self.0.with_details(details))
            }

            /// Replaces the `info` facet.
            #[must_use]
            pub fn with_info(
                self,
                info: impl ::core::convert::Into<$crate::__private::String>,
            ) -> Self {
                Self(self.0.with_info(info))
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::empty()
            }
        }

        impl $crate::ConcreteError for $name {
            fn error_type(&self) -> &str {
                $crate::ConcreteError::error_type(&self.0)
            }

            fn details(&self) -> &str {
                $crate::ConcreteError::details(&self.0)
            }

            fn info(&self) -> &str {
                $crate::ConcreteError::info(&self.0)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::error::Error for $name {}
    };
}
