//! Handlers that define how the facets of a stored error are read.
//!
//! Every stored error exposes three textual facets (a short type string, the
//! human-facing details, and an optional developer-facing info string) plus a
//! display string. A [`FacetHandler`] is the static recipe the vtable uses to
//! produce them for one concrete type.

use alloc::string::String;

/// Trait for reading the facets of a stored error value.
///
/// A handler is a zero-sized policy type. The value type and the handler type
/// are both baked into the vtable when a [`RawError`] is created, so the
/// handler never needs to be stored.
///
/// All methods must be total: they cannot fail and must not panic.
///
/// # Examples
///
/// ```
/// use errorbox_internals::handlers::FacetHandler;
///
/// struct Timeout {
///     message: String,
/// }
///
/// struct TimeoutHandler;
///
/// impl FacetHandler<Timeout> for TimeoutHandler {
///     fn error_type(_value: &Timeout) -> &str {
///         "timeout"
///     }
///
///     fn details(value: &Timeout) -> &str {
///         &value.message
///     }
///
///     fn info(_value: &Timeout) -> &str {
///         ""
///     }
///
///     fn display_string(value: &Timeout) -> String {
///         format!("timeout: {}", value.message)
///     }
/// }
/// ```
///
/// [`RawError`]: crate::RawError
pub trait FacetHandler<C>: 'static {
    /// Returns the short category string of the error.
    fn error_type(value: &C) -> &str;

    /// Returns the human-facing details of the error.
    fn details(value: &C) -> &str;

    /// Returns the developer-facing info of the error. Empty when absent.
    fn info(value: &C) -> &str;

    /// Renders the error as a single human-readable string.
    fn display_string(value: &C) -> String;
}
