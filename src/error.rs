use alloc::string::String;

use crate::ConcreteError;

/// The default concrete error.
///
/// Carries the three facets as owned strings. The `type` facet is fixed at
/// construction, while `details` and `info` can be replaced with the
/// [`with_details`](Self::with_details) and [`with_info`](Self::with_info)
/// builders before the value is boxed.
///
/// # Examples
///
/// ```
/// use errorbox::{ConcreteError, Error};
///
/// let error = Error::typed("config", "missing key")
///     .with_details("missing key `port`")
///     .with_info("searched ./app.toml");
///
/// assert_eq!(error.error_type(), "config");
/// assert_eq!(error.details(), "missing key `port`");
/// assert_eq!(error.info(), "searched ./app.toml");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Error {
    error_type: String,
    details: String,
    info: String,
}

impl Error {
    /// Creates an error with only the `details` facet set.
    #[must_use]
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            error_type: String::new(),
            details: details.into(),
            info: String::new(),
        }
    }

    /// Creates an error with all facets empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an error with the `type` and `details` facets set.
    #[must_use]
    pub fn typed(error_type: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            details: details.into(),
            info: String::new(),
        }
    }

    /// Replaces the `details` facet.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    /// Replaces the `info` facet.
    #[must_use]
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }
}

impl ConcreteError for Error {
    fn error_type(&self) -> &str {
        &self.error_type
    }

    fn details(&self) -> &str {
        &self.details
    }

    fn info(&self) -> &str {
        &self.info
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.details)
    }
}

impl core::error::Error for Error {}

impl From<&str> for Error {
    fn from(details: &str) -> Self {
        Self::new(details)
    }
}

impl From<String> for Error {
    fn from(details: String) -> Self {
        Self::new(details)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_constructors() {
        let empty = Error::empty();
        assert_eq!(
            (empty.error_type(), empty.details(), empty.info()),
            ("", "", "")
        );
        assert_eq!(empty, Error::default());

        let details = Error::new("broken pipe");
        assert_eq!(
            (details.error_type(), details.details(), details.info()),
            ("", "broken pipe", "")
        );

        let typed = Error::typed("io", "broken pipe");
        assert_eq!(
            (typed.error_type(), typed.details(), typed.info()),
            ("io", "broken pipe", "")
        );

        let copy = typed.clone();
        assert_eq!(copy, typed);
    }

    #[test]
    fn test_builders_overwrite() {
        let error = Error::empty().with_details("a").with_info("b");
        assert_eq!(error.details(), "a");
        assert_eq!(error.info(), "b");

        let error = error.with_details("first").with_details("second");
        assert_eq!(error.details(), "second");
        assert_eq!(error.info(), "b");
    }

    #[test]
    fn test_display_is_details() {
        let error = Error::typed("parse", "unexpected token").with_info("line 3");
        assert_eq!(error.to_string(), "unexpected token");
        assert_eq!(error.to_display_string(), "unexpected token");
    }

    #[test]
    fn test_from_strings() {
        assert_eq!(Error::from("x"), Error::new("x"));
        assert_eq!(Error::from("y".to_string()), Error::new("y"));
    }
}
