//! This module encapsulates the fields of the [`ErrorData`]. Since this is the
//! only place they are visible, the type of the [`ErrorVtable`] is guaranteed
//! to always be in sync with the type of the stored value. They are in sync
//! when created and the API offers no way to change the [`ErrorVtable`] or the
//! value type afterwards.

use core::ptr::NonNull;

use crate::{
    error::{
        raw::{RawError, RawErrorRef},
        vtable::ErrorVtable,
    },
    handlers::FacetHandler,
    util::Erased,
};

/// Type-erased error data with vtable-based dispatch.
///
/// This struct uses `#[repr(C)]` to enable safe field access in type-erased
/// contexts, allowing access to the vtable even when the concrete value type
/// `C` is unknown.
#[repr(C)]
pub(super) struct ErrorData<C: 'static> {
    /// Reference to the vtable of this error
    vtable: &'static ErrorVtable,
    /// The concrete error value
    value: C,
}

impl<C: 'static> ErrorData<C> {
    /// Creates a new [`ErrorData`] pairing `value` with the vtable for
    /// `(C, H)`.
    pub(super) fn new<H: FacetHandler<C>>(value: C) -> Self {
        Self {
            vtable: ErrorVtable::new::<C, H>(),
            value,
        }
    }
}

impl RawError {
    /// Takes the concrete value back out of the allocation if this is the last
    /// handle pointing at it. Otherwise the handle is returned unchanged.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The type `C` matches the actual value type stored in the
    ///    [`ErrorData`].
    pub unsafe fn try_into_inner<C: 'static>(self) -> Result<C, RawError> {
        let ptr: NonNull<ErrorData<Erased>> = self.into_non_null();
        let ptr: NonNull<ErrorData<C>> = ptr.cast::<ErrorData<C>>();
        let ptr: *const ErrorData<C> = ptr.as_ptr();

        // SAFETY:
        // 1. The pointer came from `triomphe::Arc::into_raw` (guaranteed by the
        //    invariants on `RawError`) and `C` is the stored type (guaranteed by
        //    the caller).
        // 2. `into_non_null` consumed `self` without touching the strong count,
        //    so ownership of one count moves into the new `Arc`.
        let arc: triomphe::Arc<ErrorData<C>> = unsafe { triomphe::Arc::from_raw(ptr) };

        match triomphe::Arc::try_unique(arc) {
            Ok(unique) => Ok(triomphe::UniqueArc::into_inner(unique).value),
            Err(shared) => Err(RawError::from_arc(shared)),
        }
    }
}

impl<'a> RawErrorRef<'a> {
    /// Returns a reference to the [`ErrorVtable`] of the [`ErrorData`]
    /// instance.
    pub(super) fn vtable(self) -> &'static ErrorVtable {
        let ptr = self.as_ptr();
        // SAFETY: We don't know the actual inner value type, but we do know
        // that it points to an instance of `ErrorData<C>` for some specific `C`.
        // Since `ErrorData<C>` is `#[repr(C)]`, that means we can access
        // the fields before the actual value.
        //
        // We need to take care to avoid creating an actual reference to
        // the `ErrorData` itself though, as that would still be undefined behavior
        // since we don't have the right type.
        let vtable_ptr: *const &'static ErrorVtable = unsafe { &raw const (*ptr).vtable };

        // SAFETY: Dereferencing the pointer and getting out the `&'static ErrorVtable`
        // is valid for the same reasons
        unsafe { *vtable_ptr }
    }

    /// Accesses the stored value of the [`ErrorData`] instance as a reference
    /// to the specified type.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the type `C` matches the actual value type
    /// stored in the [`ErrorData`].
    pub unsafe fn value_downcast_unchecked<C: 'static>(self) -> &'a C {
        // SAFETY: The inner function requires that `C` matches the type stored,
        // but that is guaranteed by our caller.
        let this = unsafe { self.cast_inner::<C>() };
        &this.value
    }
}
