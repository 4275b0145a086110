use alloc::{borrow::ToOwned, string::String};

/// The capability every boxable error kind implements.
///
/// A concrete error exposes three textual facets:
///
/// - [`error_type`](Self::error_type): a short category name, empty by default
/// - [`details`](Self::details): the primary, human-facing message
/// - [`info`](Self::info): a developer-only annotation, empty by default
///
/// The identity token of the kind comes from [`HasClassId`], which is
/// implemented automatically and derived from the type itself rather than
/// from any field.
///
/// All methods are total. They must not panic.
///
/// # Examples
///
/// ```
/// use errorbox::{ConcreteError, ErasedError};
///
/// struct Timeout {
///     after_ms: u64,
///     message: String,
/// }
///
/// impl ConcreteError for Timeout {
///     fn error_type(&self) -> &str {
///         "timeout"
///     }
///
///     fn details(&self) -> &str {
///         &self.message
///     }
///
///     fn to_display_string(&self) -> String {
///         format!("{} after {}ms", self.message, self.after_ms)
///     }
/// }
///
/// let error = ErasedError::new(Timeout {
///     after_ms: 250,
///     message: "upstream did not answer".to_owned(),
/// });
/// assert_eq!(error.error_type(), "timeout");
/// assert_eq!(error.to_string(), "upstream did not answer after 250ms");
/// ```
///
/// [`HasClassId`]: crate::HasClassId
pub trait ConcreteError: Send + Sync + 'static {
    /// The short category name of the error.
    fn error_type(&self) -> &str {
        ""
    }

    /// The primary human-facing message.
    fn details(&self) -> &str;

    /// The developer-only annotation.
    fn info(&self) -> &str {
        ""
    }

    /// Renders the error as a single human-readable string.
    ///
    /// Defaults to the [`details`](Self::details) facet.
    fn to_display_string(&self) -> String {
        self.details().to_owned()
    }
}
