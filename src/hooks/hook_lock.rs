#[cfg(feature = "std")]
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[cfg(not(feature = "std"))]
use spin::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A global slot holding at most one shared value.
///
/// Uses the standard library lock when the `std` feature is enabled and a spin
/// lock otherwise. The lock is only held while the slot is read or swapped,
/// never while the stored value is used. Poisoning is ignored: writers only
/// ever swap a complete value in or out, so a panic while holding the lock
/// cannot leave the slot half-updated.
pub(crate) struct HookLock<T: 'static + Clone + Send + Sync>(RwLock<Option<T>>);

impl<T: 'static + Clone + Send + Sync> HookLock<T> {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self(RwLock::new(None))
    }

    #[inline]
    fn read(&self) -> RwLockReadGuard<'_, Option<T>> {
        #[cfg(not(feature = "std"))]
        return self.0.read();

        #[cfg(feature = "std")]
        return self
            .0
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
    }

    #[inline]
    fn write(&self) -> RwLockWriteGuard<'_, Option<T>> {
        #[cfg(not(feature = "std"))]
        return self.0.write();

        #[cfg(feature = "std")]
        return self
            .0
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
    }

    /// Clones the stored value out of the slot.
    #[inline]
    pub(crate) fn snapshot(&self) -> Option<T> {
        self.read().clone()
    }

    /// Returns `true` if the slot holds a value.
    #[inline]
    pub(crate) fn is_set(&self) -> bool {
        self.read().is_some()
    }

    /// Stores `into_slot(value)` only if the slot is empty, otherwise hands
    /// `value` back untouched.
    pub(crate) fn set_if_empty<V>(
        &self,
        value: V,
        into_slot: impl FnOnce(V) -> T,
    ) -> Result<(), V> {
        let mut guard = self.write();
        if guard.is_some() {
            return Err(value);
        }
        *guard = Some(into_slot(value));
        Ok(())
    }

    /// Stores `value` and returns the previous one.
    pub(crate) fn replace(&self, value: T) -> Option<T> {
        self.write().replace(value)
    }

    /// Empties the slot and returns the previous value.
    pub(crate) fn take(&self) -> Option<T> {
        self.write().take()
    }
}
