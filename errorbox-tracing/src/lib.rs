#![deny(
    missing_docs,
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]

//! Tracing events for errors created with [`errorbox`].
//!
//! This crate provides [`TracingHook`], an [`ErrorCreationHook`] that emits one
//! [`tracing`] event for every newly boxed [`ErasedError`]. The event is
//! recorded under the `errorbox` target with these fields:
//!
//! - `class`: the kind's identity token
//! - `error_type`, `details`, `info`: the three facets
//! - `location`: where the error was created
//!
//! Errors that are only cloned or passed along are not logged again.
//!
//! # Quick Start
//!
//! ```
//! use errorbox::hooks::Hooks;
//! use errorbox_tracing::TracingHook;
//!
//! Hooks::new()
//!     .creation_hook(TracingHook::new())
//!     .install()
//!     .expect("failed to install hooks");
//!
//! // Every new error now produces a tracing event
//! let _error = errorbox::erased!("connection refused");
//! ```
//!
//! # Environment Variable
//!
//! The defaults of [`TracingHook::new`] can be changed through the
//! `ERRORBOX_TRACING` environment variable, a comma-separated list of:
//!
//! - a level name (`trace`, `debug`, `info`, `warn` or `error`): the level of
//!   the emitted events, `error` by default
//! - `no-info`: leave the `info` facet out of the events
//!
//! ```bash
//! ERRORBOX_TRACING=warn,no-info cargo run
//! ```
//!
//! The variable is read once, the first time a hook is created.
//!
//! [`ErrorCreationHook`]: errorbox::hooks::error_creation::ErrorCreationHook
//! [`ErasedError`]: errorbox::ErasedError

use std::{panic::Location, sync::OnceLock};

use errorbox::{ErasedError, hooks::error_creation::ErrorCreationHook};
use tracing::Level;

/// Creation hook that emits a [`tracing`] event per created error.
///
/// # Examples
///
/// ```
/// use errorbox::hooks::Hooks;
/// use errorbox_tracing::TracingHook;
/// use tracing::Level;
///
/// // Log at warn level and keep developer info out of the logs
/// let hook = TracingHook::new().with_level(Level::WARN).with_info(false);
///
/// // Swap out whatever hooks were installed before
/// Hooks::new().creation_hook(hook).replace();
/// ```
#[derive(Copy, Clone, Debug)]
pub struct TracingHook {
    /// The level of the emitted events.
    pub level: Level,
    /// Whether the `info` facet is included in the events.
    pub include_info: bool,
}

#[derive(Debug, PartialEq)]
struct ErrorboxTracingEnvOptions {
    level: Level,
    include_info: bool,
}

impl ErrorboxTracingEnvOptions {
    fn get() -> &'static Self {
        static ERRORBOX_TRACING_FLAGS: OnceLock<ErrorboxTracingEnvOptions> = OnceLock::new();

        ERRORBOX_TRACING_FLAGS.get_or_init(|| match std::env::var_os("ERRORBOX_TRACING") {
            Some(var) => Self::parse(&var.to_string_lossy()),
            None => Self::default(),
        })
    }

    fn parse(value: &str) -> Self {
        let mut options = Self::default();
        for flag in value.split(',').map(str::trim) {
            if flag.eq_ignore_ascii_case("no-info") {
                options.include_info = false;
            } else if let Ok(level) = flag.parse::<Level>() {
                options.level = level;
            }
        }
        options
    }
}

impl Default for ErrorboxTracingEnvOptions {
    fn default() -> Self {
        Self {
            level: Level::ERROR,
            include_info: true,
        }
    }
}

impl TracingHook {
    /// Creates a hook configured from the `ERRORBOX_TRACING` environment
    /// variable.
    #[must_use]
    pub fn new() -> Self {
        let env_options = ErrorboxTracingEnvOptions::get();
        Self {
            level: env_options.level,
            include_info: env_options.include_info,
        }
    }

    /// Sets the level of the emitted events.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets whether the `info` facet is included in the events.
    #[must_use]
    pub fn with_info(mut self, include_info: bool) -> Self {
        self.include_info = include_info;
        self
    }
}

impl Default for TracingHook {
    fn default() -> Self {
        Self::new()
    }
}

// `tracing::event!` needs the level at compile time.
macro_rules! emit {
    ($level:expr, $class:ident, $error_type:ident, $details:ident, $info:ident, $location:ident) => {
        tracing::event!(
            target: "errorbox",
            $level,
            class = ?$class,
            error_type = $error_type,
            details = $details,
            info = $info,
            location = %$location,
            "error created"
        )
    };
}

impl ErrorCreationHook for TracingHook {
    fn on_creation(&self, error: &ErasedError, location: &'static Location<'static>) {
        let class = error.class_id();
        let error_type = error.error_type();
        let details = error.details();
        let info = self.include_info.then(|| error.info());

        if self.level == Level::ERROR {
            emit!(Level::ERROR, class, error_type, details, info, location);
        } else if self.level == Level::WARN {
            emit!(Level::WARN, class, error_type, details, info, location);
        } else if self.level == Level::INFO {
            emit!(Level::INFO, class, error_type, details, info, location);
        } else if self.level == Level::DEBUG {
            emit!(Level::DEBUG, class, error_type, details, info, location);
        } else {
            emit!(Level::TRACE, class, error_type, details, info, location);
        }
    }
}
