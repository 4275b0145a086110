//! Hooks that observe every freshly boxed error.
//!
//! A creation hook runs exactly once per call to [`ErasedError::new`] or
//! [`ErasedError::new_custom`], right after the value has been boxed. Cloning
//! a handle, passing an already-erased error through [`make_error`], and
//! [`ErasedError::new_unhooked`] never run hooks.
//!
//! Hooks receive the new error by shared reference, so they can read its
//! facets and identity token but cannot change it. They are a natural place
//! for logging and counting.
//!
//! ```
//! use core::{
//!     panic::Location,
//!     sync::atomic::{AtomicUsize, Ordering},
//! };
//!
//! use errorbox::{ErasedError, hooks::error_creation::ErrorCreationHook};
//!
//! struct CountingHook(AtomicUsize);
//!
//! impl ErrorCreationHook for CountingHook {
//!     fn on_creation(&self, _error: &ErasedError, _location: &'static Location<'static>) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!     }
//! }
//! ```
//!
//! [`ErasedError`]: crate::ErasedError
//! [`ErasedError::new`]: crate::ErasedError::new
//! [`ErasedError::new_custom`]: crate::ErasedError::new_custom
//! [`ErasedError::new_unhooked`]: crate::ErasedError::new_unhooked
//! [`make_error`]: crate::make_error

use core::panic::Location;

use triomphe::Arc;
use unsize::CoerceUnsize;

use crate::{ErasedError, hooks::HOOKS};

/// Trait for observing error creation.
///
/// Closures taking `(&ErasedError, &'static Location<'static>)` implement this
/// trait as well.
pub trait ErrorCreationHook: 'static + Send + Sync {
    /// Called once for every newly boxed error.
    ///
    /// `location` is the call site that created the error.
    fn on_creation(&self, error: &ErasedError, location: &'static Location<'static>);
}

impl<F> ErrorCreationHook for F
where
    F: Fn(&ErasedError, &'static Location<'static>) + 'static + Send + Sync,
{
    #[inline]
    fn on_creation(&self, error: &ErasedError, location: &'static Location<'static>) {
        self(error, location)
    }
}

/// A registered hook together with the place it was registered from.
struct Hook<H> {
    hook: H,
    added_at: &'static Location<'static>,
}

/// Object-safe view of [`Hook<H>`] stored in the registry.
pub(crate) trait StoredHook: 'static + Send + Sync {
    fn run(&self, error: &ErasedError, location: &'static Location<'static>);

    fn describe(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result;
}

impl<H> StoredHook for Hook<H>
where
    H: ErrorCreationHook,
{
    #[inline]
    fn run(&self, error: &ErasedError, location: &'static Location<'static>) {
        self.hook.on_creation(error, location);
    }

    fn describe(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Creation hook {} registered at {}:{}",
            core::any::type_name::<H>(),
            self.added_at.file(),
            self.added_at.line()
        )
    }
}

impl core::fmt::Debug for dyn StoredHook {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.describe(f)
    }
}

pub(crate) fn hook_to_stored<H>(
    hook: H,
    added_at: &'static Location<'static>,
) -> Arc<dyn StoredHook>
where
    H: ErrorCreationHook,
{
    let hook: Arc<Hook<H>> = Arc::new(Hook { hook, added_at });
    hook.unsize(unsize::Coercion!(to dyn StoredHook))
}

/// Runs the installed hooks for a newly created error.
///
/// The registry snapshot is cloned out of the lock before any hook runs, so a
/// hook may reinstall hooks without deadlocking.
pub(crate) fn run_creation_hooks(error: &ErasedError, location: &'static Location<'static>) {
    let Some(hooks) = HOOKS.snapshot() else {
        return;
    };

    for hook in &hooks.creation {
        hook.run(error, location);
    }

    if let Some(kind_hooks) = hooks.by_kind.get(&error.class_id()) {
        for hook in kind_hooks {
            hook.run(error, location);
        }
    }
}
