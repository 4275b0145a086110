//! Global hooks that observe error creation.
//!
//! # Quick Start
//!
//! ```rust
//! use core::panic::Location;
//!
//! use errorbox::{ErasedError, hooks::Hooks};
//!
//! Hooks::new()
//!     .creation_hook(|error: &ErasedError, location: &'static Location<'static>| {
//!         eprintln!("{} at {location}", error.details());
//!     })
//!     .install()
//!     .expect("failed to install hooks");
//! ```
//!
//! # Hook Types
//!
//! - **Creation hooks** run for every newly boxed error. See
//!   [`error_creation`].
//! - **Kind hooks** are creation hooks that only run for errors of one kind,
//!   selected by its [`ClassId`].
//!
//! Hooks never run when a handle is cloned or when an already-erased error is
//! passed through [`make_error`](crate::make_error) and friends, so each boxed
//! value is observed exactly once.
//!
//! The `errorbox-tracing` crate provides a ready-made creation hook that emits
//! a `tracing` event per error.

pub mod error_creation;
mod hook_lock;

use alloc::vec::Vec;
use core::panic::Location;

use hashbrown::HashMap;
use triomphe::Arc;

use self::{
    error_creation::{ErrorCreationHook, StoredHook, hook_to_stored},
    hook_lock::HookLock,
};
use crate::ClassId;

type KindHookMap = HashMap<ClassId, Vec<Arc<dyn StoredHook>>, rustc_hash::FxBuildHasher>;

/// The immutable set of hooks that is installed globally.
#[derive(Debug)]
pub(crate) struct HookSet {
    pub(crate) creation: Vec<Arc<dyn StoredHook>>,
    pub(crate) by_kind: KindHookMap,
    #[allow(dead_code, reason = "only used for debugging purposes")]
    pub(crate) created_at: &'static Location<'static>,
}

/// Global hook registry.
///
/// Holds a shared snapshot so hooks can run without holding the lock.
pub(crate) static HOOKS: HookLock<Arc<HookSet>> = HookLock::new();

/// Builder for configuring and installing hooks globally.
///
/// # Examples
///
/// ```rust
/// use core::panic::Location;
///
/// use errorbox::{Error, ErasedError, hooks::Hooks};
///
/// Hooks::new()
///     .creation_hook(|error: &ErasedError, _: &'static Location<'static>| {
///         eprintln!("created: {error}");
///     })
///     .kind_hook::<Error, _>(|error: &ErasedError, _: &'static Location<'static>| {
///         eprintln!("plain error: {}", error.details());
///     })
///     .install()
///     .expect("failed to install hooks");
/// ```
#[derive(Debug)]
pub struct Hooks(HookSet);

impl Default for Hooks {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when attempting to install hooks when they're already
/// installed.
///
/// Contains the hooks that were attempted to be installed, allowing you to
/// recover them if needed.
pub struct HooksAlreadyInstalledError(pub Hooks);

impl core::fmt::Debug for HooksAlreadyInstalledError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HooksAlreadyInstalledError").finish()
    }
}

impl core::fmt::Display for HooksAlreadyInstalledError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "hooks are already installed globally")
    }
}

impl core::error::Error for HooksAlreadyInstalledError {}

impl Hooks {
    /// Creates an empty `Hooks` builder.
    #[track_caller]
    #[must_use]
    pub fn new() -> Self {
        Self(HookSet {
            creation: Vec::new(),
            by_kind: KindHookMap::default(),
            created_at: Location::caller(),
        })
    }

    /// Registers a hook that runs for every newly boxed error.
    ///
    /// Hooks run in registration order.
    #[track_caller]
    #[must_use]
    pub fn creation_hook<H>(mut self, hook: H) -> Self
    where
        H: ErrorCreationHook,
    {
        self.0
            .creation
            .push(hook_to_stored(hook, Location::caller()));
        self
    }

    /// Registers a hook that only runs for newly boxed errors of kind `C`.
    ///
    /// Kind hooks run after all general creation hooks.
    #[track_caller]
    #[must_use]
    pub fn kind_hook<C, H>(mut self, hook: H) -> Self
    where
        C: 'static,
        H: ErrorCreationHook,
    {
        self.0
            .by_kind
            .entry(ClassId::of::<C>())
            .or_default()
            .push(hook_to_stored(hook, Location::caller()));
        self
    }

    /// Installs the hooks globally.
    ///
    /// If hooks are already installed, returns an error
    /// [`HooksAlreadyInstalledError`], containing the hooks that were attempted
    /// to be installed.
    ///
    /// See also [`replace`](Self::replace) which will replace any existing
    /// hooks without erroring.
    pub fn install(self) -> Result<(), HooksAlreadyInstalledError> {
        HOOKS
            .set_if_empty(self, |hooks| Arc::new(hooks.0))
            .map_err(HooksAlreadyInstalledError)
    }

    /// Replaces the currently installed hooks with `self`.
    ///
    /// Returns `true` if other hooks were installed before. Errors that are
    /// being created concurrently finish with the hooks they started with.
    pub fn replace(self) -> bool {
        HOOKS.replace(Arc::new(self.0)).is_some()
    }

    /// Removes the currently installed hooks.
    ///
    /// Returns `true` if hooks were installed.
    pub fn uninstall() -> bool {
        HOOKS.take().is_some()
    }

    /// Returns `true` if hooks are currently installed.
    #[must_use]
    pub fn is_installed() -> bool {
        HOOKS.is_set()
    }
}
