//! Vtable for type-erased error operations.
//!
//! This module contains the [`ErrorVtable`] which enables calling handler
//! methods on stored errors when their concrete value type `C` and handler
//! type `H` have been erased. The vtable stores function pointers that
//! dispatch to the correct typed implementations.
//!
//! This module encapsulates the fields of [`ErrorVtable`] so they cannot be
//! accessed directly. This visibility restriction guarantees the safety
//! invariant: **the vtable's type parameters must match the actual value type
//! and handler stored in the `ErrorData`**.
//!
//! # Safety Invariant
//!
//! This invariant is maintained because vtables are created as `&'static`
//! references via [`ErrorVtable::new`], which pairs the function pointers
//! with specific types `C` and `H` at compile time.

use alloc::string::String;
use core::{any::TypeId, ptr::NonNull};

use crate::{
    error::{
        data::ErrorData,
        raw::{RawError, RawErrorRef},
    },
    handlers::FacetHandler,
    util::Erased,
};

/// Vtable for type-erased error operations.
///
/// Contains function pointers for performing operations on stored errors
/// without knowing their concrete type at compile time.
///
/// # Safety
///
/// The following safety invariants are guaranteed to be upheld as long as this
/// struct exists:
///
/// * The fields `drop`, `clone_arc`, `strong_count`, `error_type`, `details`,
///   `info` and `display_string` all point to the functions defined below
/// * The concrete pointers are all instantiated with the same value type `C`
///   and handler type `H` that were used to create this `ErrorVtable`.
pub(crate) struct ErrorVtable {
    /// Gets the [`TypeId`] of the value type that was used to create this
    /// [`ErrorVtable`].
    type_id: fn() -> TypeId,
    /// Gets the [`core::any::type_name`] of the value type that was used to
    /// create this [`ErrorVtable`].
    type_name: fn() -> &'static str,
    /// Gets the [`TypeId`] of the handler that was used to create this
    /// [`ErrorVtable`].
    handler_type_id: fn() -> TypeId,
    /// Method to drop the [`triomphe::Arc<ErrorData<C>>`] instance pointed to
    /// by this pointer.
    drop: unsafe fn(NonNull<ErrorData<Erased>>),
    /// Clones the `triomphe::Arc<ErrorData<C>>` pointed to by this pointer.
    clone_arc: unsafe fn(NonNull<ErrorData<Erased>>) -> RawError,
    /// Gets the strong count of the [`triomphe::Arc<ErrorData<C>>`] pointed to
    /// by this pointer.
    strong_count: unsafe fn(NonNull<ErrorData<Erased>>) -> usize,
    /// Reads the type facet using the handler.
    error_type: unsafe fn(RawErrorRef<'_>) -> &str,
    /// Reads the details facet using the handler.
    details: unsafe fn(RawErrorRef<'_>) -> &str,
    /// Reads the info facet using the handler.
    info: unsafe fn(RawErrorRef<'_>) -> &str,
    /// Renders the value using the handler.
    display_string: unsafe fn(RawErrorRef<'_>) -> String,
}

impl ErrorVtable {
    /// Creates a new [`ErrorVtable`] for the value type `C` and the handler
    /// type `H`.
    pub(super) const fn new<C: 'static, H: FacetHandler<C>>() -> &'static Self {
        const {
            &Self {
                type_id: TypeId::of::<C>,
                type_name: core::any::type_name::<C>,
                handler_type_id: TypeId::of::<H>,
                drop: drop::<C>,
                clone_arc: clone_arc::<C>,
                strong_count: strong_count::<C>,
                error_type: error_type::<C, H>,
                details: details::<C, H>,
                info: info::<C, H>,
                display_string: display_string::<C, H>,
            }
        }
    }

    /// Gets the [`TypeId`] of the value type that was used to create this
    /// [`ErrorVtable`].
    #[inline]
    pub(super) fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// Gets the type name of the value type that was used to create this
    /// [`ErrorVtable`].
    #[inline]
    pub(super) fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Gets the [`TypeId`] of the handler that was used to create this
    /// [`ErrorVtable`].
    #[inline]
    pub(super) fn handler_type_id(&self) -> TypeId {
        (self.handler_type_id)()
    }

    /// Drops the `triomphe::Arc<ErrorData<C>>` instance pointed to by this
    /// pointer.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The pointer comes from a [`triomphe::Arc<ErrorData<C>>`] turned into
    ///    a pointer via [`triomphe::Arc::into_raw`]
    /// 2. This [`ErrorVtable`] must be a vtable for the value type stored in
    ///    the [`ErrorData`].
    /// 3. The pointer is not used after calling this method. Storing the
    ///    pointer in structures that claim ownership of it, such as another
    ///    `Arc` counts as using after calling this method.
    #[inline]
    pub(super) unsafe fn drop(&self, ptr: NonNull<ErrorData<Erased>>) {
        // SAFETY: We know that `self.drop` points to the function `drop::<C>` below.
        // That function's safety requirements are upheld:
        // 1. Guaranteed by the caller
        // 2. Guaranteed by the caller
        // 3. Guaranteed by the caller
        unsafe {
            (self.drop)(ptr);
        }
    }

    /// Clones the [`triomphe::Arc<ErrorData<C>>`] pointed to by this pointer.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The pointer comes from a [`triomphe::Arc<ErrorData<C>>`] turned into
    ///    a pointer via [`triomphe::Arc::into_raw`]
    /// 2. This [`ErrorVtable`] must be a vtable for the value type stored in
    ///    the [`ErrorData`].
    #[inline]
    pub(super) unsafe fn clone_arc(&self, ptr: NonNull<ErrorData<Erased>>) -> RawError {
        // SAFETY: We know that `self.clone_arc` points to the function `clone_arc::<C>`
        // below. That function's safety requirements are upheld:
        // 1. Guaranteed by the caller
        // 2. Guaranteed by the caller
        unsafe { (self.clone_arc)(ptr) }
    }

    /// Gets the strong count of the [`triomphe::Arc<ErrorData<C>>`] pointed to
    /// by this pointer.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The pointer comes from [`triomphe::Arc<ErrorData<C>>`] via
    ///    [`triomphe::Arc::into_raw`]
    /// 2. This [`ErrorVtable`] must be a vtable for the value type stored in
    ///    the [`ErrorData`].
    #[inline]
    pub(super) unsafe fn strong_count(&self, ptr: NonNull<ErrorData<Erased>>) -> usize {
        // SAFETY: We know that `self.strong_count` points to the function
        // `strong_count::<C>` below. That function's safety requirements are
        // upheld:
        // 1. Guaranteed by the caller
        // 2. Guaranteed by the caller
        unsafe { (self.strong_count)(ptr) }
    }

    /// Reads the type facet using the [`H::error_type`] function used when
    /// creating this [`ErrorVtable`].
    ///
    /// [`H::error_type`]: FacetHandler::error_type
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. This [`ErrorVtable`] must be a vtable for the value type stored in
    ///    the [`RawErrorRef`].
    #[inline]
    pub(super) unsafe fn error_type<'a>(&self, ptr: RawErrorRef<'a>) -> &'a str {
        // SAFETY: We know that `self.error_type` points to the function
        // `error_type::<C, H>` below. That function's safety requirements are upheld:
        // 1. Guaranteed by the caller
        unsafe { (self.error_type)(ptr) }
    }

    /// Reads the details facet using the [`H::details`] function used when
    /// creating this [`ErrorVtable`].
    ///
    /// [`H::details`]: FacetHandler::details
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. This [`ErrorVtable`] must be a vtable for the value type stored in
    ///    the [`RawErrorRef`].
    #[inline]
    pub(super) unsafe fn details<'a>(&self, ptr: RawErrorRef<'a>) -> &'a str {
        // SAFETY: We know that `self.details` points to the function
        // `details::<C, H>` below. That function's safety requirements are upheld:
        // 1. Guaranteed by the caller
        unsafe { (self.details)(ptr) }
    }

    /// Reads the info facet using the [`H::info`] function used when creating
    /// this [`ErrorVtable`].
    ///
    /// [`H::info`]: FacetHandler::info
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. This [`ErrorVtable`] must be a vtable for the value type stored in
    ///    the [`RawErrorRef`].
    #[inline]
    pub(super) unsafe fn info<'a>(&self, ptr: RawErrorRef<'a>) -> &'a str {
        // SAFETY: We know that `self.info` points to the function
        // `info::<C, H>` below. That function's safety requirements are upheld:
        // 1. Guaranteed by the caller
        unsafe { (self.info)(ptr) }
    }

    /// Renders the value using the [`H::display_string`] function used when
    /// creating this [`ErrorVtable`].
    ///
    /// [`H::display_string`]: FacetHandler::display_string
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. This [`ErrorVtable`] must be a vtable for the value type stored in
    ///    the [`RawErrorRef`].
    #[inline]
    pub(super) unsafe fn display_string(&self, ptr: RawErrorRef<'_>) -> String {
        // SAFETY: We know that `self.display_string` points to the function
        // `display_string::<C, H>` below. That function's safety requirements are upheld:
        // 1. Guaranteed by the caller
        unsafe { (self.display_string)(ptr) }
    }
}

/// Drops the [`triomphe::Arc<ErrorData<C>>`] instance pointed to by this
/// pointer.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. The pointer comes from [`triomphe::Arc<ErrorData<C>>`] via
///    [`triomphe::Arc::into_raw`]
/// 2. The value type `C` matches the actual value type stored in the
///    [`ErrorData`]
/// 3. The pointer is not used after calling this method. Storing the
///    pointer in structures that claim ownership of it, such as another
///    `Arc` counts as using after calling this method.
unsafe fn drop<C: 'static>(ptr: NonNull<ErrorData<Erased>>) {
    let ptr: NonNull<ErrorData<C>> = ptr.cast();
    let ptr = ptr.as_ptr();
    // SAFETY:
    // 1. The pointer has the correct type and came from `Arc::into_raw` (guaranteed
    //    by caller)
    // 2. After `from_raw`, the pointer is consumed and not accessed again
    let arc = unsafe { triomphe::Arc::from_raw(ptr) };
    core::mem::drop(arc);
}

/// Clones the [`triomphe::Arc<ErrorData<C>>`] pointed to by this pointer.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. The pointer comes from a [`triomphe::Arc<ErrorData<C>>`] turned into a
///    pointer via [`triomphe::Arc::into_raw`]
/// 2. The value type `C` matches the actual value type stored in the
///    [`ErrorData`]
unsafe fn clone_arc<C: 'static>(ptr: NonNull<ErrorData<Erased>>) -> RawError {
    let ptr: *const ErrorData<C> = ptr.cast::<ErrorData<C>>().as_ptr();

    // SAFETY: The pointer is valid and came from `Arc::into_raw` with the correct
    // type (guaranteed by the caller), which fulfills the requirements for
    // `ArcBorrow::from_ptr`.
    let arc_borrow = unsafe { triomphe::ArcBorrow::from_ptr(ptr) };

    let arc = arc_borrow.clone_arc();
    RawError::from_arc(arc)
}

/// Gets the strong count of the [`triomphe::Arc<ErrorData<C>>`] pointed to by
/// this pointer.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. The pointer comes from [`triomphe::Arc<ErrorData<C>>`] via
///    [`triomphe::Arc::into_raw`]
/// 2. The value type `C` matches the actual value type stored in the
///    [`ErrorData`]
unsafe fn strong_count<C: 'static>(ptr: NonNull<ErrorData<Erased>>) -> usize {
    let ptr: *const ErrorData<C> = ptr.cast::<ErrorData<C>>().as_ptr();

    // SAFETY: The pointer is valid and came from `Arc::into_raw` with the correct
    // type (guaranteed by the caller), which fulfills the requirements for
    // `ArcBorrow::from_ptr`.
    let arc_borrow = unsafe { triomphe::ArcBorrow::from_ptr(ptr) };

    triomphe::ArcBorrow::strong_count(&arc_borrow)
}

/// Reads the type facet of a stored error through its handler.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. The type `C` matches the actual value type stored in the [`ErrorData`]
unsafe fn error_type<'a, C: 'static, H: FacetHandler<C>>(ptr: RawErrorRef<'a>) -> &'a str {
    // SAFETY:
    // 1. Guaranteed by the caller
    let value: &C = unsafe { ptr.value_downcast_unchecked::<C>() };
    H::error_type(value)
}

/// Reads the details facet of a stored error through its handler.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. The type `C` matches the actual value type stored in the [`ErrorData`]
unsafe fn details<'a, C: 'static, H: FacetHandler<C>>(ptr: RawErrorRef<'a>) -> &'a str {
    // SAFETY:
    // 1. Guaranteed by the caller
    let value: &C = unsafe { ptr.value_downcast_unchecked::<C>() };
    H::details(value)
}

/// Reads the info facet of a stored error through its handler.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. The type `C` matches the actual value type stored in the [`ErrorData`]
unsafe fn info<'a, C: 'static, H: FacetHandler<C>>(ptr: RawErrorRef<'a>) -> &'a str {
    // SAFETY:
    // 1. Guaranteed by the caller
    let value: &C = unsafe { ptr.value_downcast_unchecked::<C>() };
    H::info(value)
}

/// Renders a stored error through its handler.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. The type `C` matches the actual value type stored in the [`ErrorData`]
unsafe fn display_string<C: 'static, H: FacetHandler<C>>(ptr: RawErrorRef<'_>) -> String {
    // SAFETY:
    // 1. Guaranteed by the caller
    let value: &C = unsafe { ptr.value_downcast_unchecked::<C>() };
    H::display_string(value)
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;
    use crate::handlers::FacetHandler;

    struct HandlerI32;
    impl FacetHandler<i32> for HandlerI32 {
        fn error_type(_value: &i32) -> &str {
            "int"
        }

        fn details(_value: &i32) -> &str {
            "an integer"
        }

        fn info(_value: &i32) -> &str {
            ""
        }

        fn display_string(value: &i32) -> String {
            alloc::format!("{value}")
        }
    }

    struct OtherHandlerI32;
    impl FacetHandler<i32> for OtherHandlerI32 {
        fn error_type(_value: &i32) -> &str {
            ""
        }

        fn details(_value: &i32) -> &str {
            ""
        }

        fn info(_value: &i32) -> &str {
            ""
        }

        fn display_string(_value: &i32) -> String {
            String::new()
        }
    }

    #[test]
    fn test_error_vtable_eq() {
        let vtable1 = ErrorVtable::new::<i32, HandlerI32>();
        let vtable2 = ErrorVtable::new::<i32, HandlerI32>();

        // Both should be the exact same static instance
        assert!(core::ptr::eq(vtable1, vtable2));
    }

    #[test]
    fn test_error_vtable_type_ids() {
        let vtable = ErrorVtable::new::<i32, HandlerI32>();
        assert_eq!(vtable.type_id(), TypeId::of::<i32>());
        assert_eq!(vtable.handler_type_id(), TypeId::of::<HandlerI32>());
        assert_eq!(vtable.type_name(), "i32");
    }

    #[test]
    fn test_handler_does_not_change_value_type() {
        let vtable1 = ErrorVtable::new::<i32, HandlerI32>();
        let vtable2 = ErrorVtable::new::<i32, OtherHandlerI32>();

        assert!(!core::ptr::eq(vtable1, vtable2));
        assert_eq!(vtable1.type_id(), vtable2.type_id());
        assert_ne!(vtable1.handler_type_id(), vtable2.handler_type_id());
    }

    #[test]
    fn test_error_clone_eq() {
        let error = RawError::new::<_, HandlerI32>(42);
        let cloned_error = error.as_ref().clone_arc();

        // Both handles should point to the same underlying data
        assert!(core::ptr::eq(
            error.as_ref().as_ptr(),
            cloned_error.as_ref().as_ptr()
        ));
    }
}
