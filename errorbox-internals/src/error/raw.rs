//! Type-erased error pointer types.
//!
//! This module encapsulates the `ptr` field of [`RawError`] and
//! [`RawErrorRef`], ensuring it is only visible within this module. This
//! visibility restriction guarantees the safety invariant: **the pointer always
//! comes from `Arc<ErrorData<C>>`**.
//!
//! # Safety Invariant
//!
//! Since the `ptr` field can only be set via [`RawError::new`] or
//! [`RawError::from_arc`] (which create it from `Arc::into_raw`), and cannot
//! be modified afterward, the pointer provenance remains valid throughout the
//! value's lifetime.
//!
//! The [`RawError::drop`] implementation and reference counting operations
//! rely on this invariant to safely reconstruct the `Arc` and manage memory.
//!
//! # Type Erasure
//!
//! The concrete type parameter `C` is erased by casting to
//! `ErrorData<Erased>`. The vtable stored within the `ErrorData` provides the
//! runtime type information needed to read the facets and to downcast.
//!
//! # Shared Ownership
//!
//! Stored errors use `triomphe::Arc`. Every handle is a shared owner and no
//! handle ever hands out mutable access, so cloning is always sound. The only
//! operation that needs uniqueness, [`RawError::try_into_inner`], checks it
//! atomically through [`triomphe::Arc::try_unique`].

use alloc::string::String;
use core::{any::TypeId, ptr::NonNull};

use crate::{error::data::ErrorData, handlers::FacetHandler, util::Erased};

/// A pointer to an [`ErrorData`] that is guaranteed to point to an initialized
/// instance of an [`ErrorData<C>`] for some specific `C`, though we do not
/// know which actual `C` it is.
///
/// However, the pointer is allowed to transition into a non-initialized state
/// inside the [`RawError::drop`] method.
///
/// The pointer is guaranteed to have been created using
/// [`triomphe::Arc::into_raw`].
///
/// We cannot use a [`triomphe::OffsetArc<ErrorData<C>>`] directly, because
/// that does not allow us to type-erase the `C`.
#[repr(transparent)]
pub struct RawError {
    /// Pointer to the inner error data
    ///
    /// # Safety
    ///
    /// The following safety invariants are guaranteed to be upheld as long as
    /// this struct exists:
    ///
    /// 1. The pointer must have been created from a
    ///    `triomphe::Arc<ErrorData<C>>` for some `C` using
    ///    `triomphe::Arc::into_raw`.
    /// 2. The pointer retains full provenance over the `Arc` for the entire
    ///    lifetime of this object (i.e., it was not derived from a `&T`)
    /// 3. The pointer will point to the same `ErrorData<C>` for the entire
    ///    lifetime of this object.
    ptr: NonNull<ErrorData<Erased>>,
}

impl RawError {
    /// Creates a new [`RawError`] from a [`triomphe::Arc<ErrorData<C>>`].
    #[inline]
    pub(super) fn from_arc<C: 'static>(data: triomphe::Arc<ErrorData<C>>) -> Self {
        let ptr: *const ErrorData<C> = triomphe::Arc::into_raw(data);
        let ptr: *mut ErrorData<Erased> = ptr.cast::<ErrorData<Erased>>().cast_mut();

        // SAFETY:
        // 1. Triomphe guarantees that `Arc::into_raw` returns a non-null pointer.
        let ptr: NonNull<ErrorData<Erased>> = unsafe { NonNull::new_unchecked(ptr) };

        Self {
            // SAFETY:
            // 1. We just created the pointer using `triomphe::Arc::into_raw`.
            // 2. We have provenance and we are not locally changing that here
            // 3. We are creating the object here and we are not changing the pointer.
            ptr,
        }
    }

    /// Consumes the [`RawError`] without decrementing the reference count and
    /// returns the inner pointer.
    #[inline]
    pub(super) fn into_non_null(self) -> NonNull<ErrorData<Erased>> {
        let ptr = self.ptr;
        core::mem::forget(self);
        ptr
    }

    /// Moves `value` into a new shared allocation read through the handler
    /// `H`.
    ///
    /// The created error has a strong count of 1.
    #[inline]
    pub fn new<C, H>(value: C) -> Self
    where
        C: 'static,
        H: FacetHandler<C>,
    {
        let data = triomphe::Arc::new(ErrorData::new::<H>(value));
        Self::from_arc(data)
    }

    /// Returns a reference to the [`ErrorData`] instance.
    #[inline]
    pub fn as_ref(&self) -> RawErrorRef<'_> {
        RawErrorRef {
            // SAFETY:
            // 1. Guaranteed by the invariants on `RawError`
            // 2. Guaranteed by the invariants on `RawError`
            // 3. We are creating the `RawErrorRef` here, and we are
            //    not changing the pointer
            ptr: self.ptr,
            _marker: core::marker::PhantomData,
        }
    }
}

impl core::ops::Drop for RawError {
    #[inline]
    fn drop(&mut self) {
        let vtable = self.as_ref().vtable();

        // SAFETY:
        // 1. The pointer comes from `Arc::into_raw` (guaranteed by `RawError::new`)
        // 2. The vtable returned by `self.as_ref().vtable()` is guaranteed to match the
        //    data in the `ErrorData`.
        // 3. The pointer is not used after this call (we're in the drop function)
        unsafe {
            vtable.drop(self.ptr);
        }
    }
}

/// A lifetime-bound pointer to an [`ErrorData`] that is guaranteed to point
/// to an initialized instance of an [`ErrorData<C>`] for some specific `C`,
/// though we do not know which actual `C` it is.
///
/// We cannot use a [`&'a ErrorData<C>`] directly, because that would require
/// us to know the actual type of the value, which we do not.
///
/// [`&'a ErrorData<C>`]: ErrorData
///
/// # Safety invariants
///
/// This reference behaves like a `&'a ErrorData<C>` for some unknown
/// `C` and upholds the usual safety invariants of shared references:
///
/// 1. The pointee is properly initialized for the entire lifetime `'a`.
/// 2. The pointee is not mutated for the entire lifetime `'a`.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct RawErrorRef<'a> {
    /// Pointer to the inner error data
    ///
    /// # Safety
    ///
    /// The following safety invariants are guaranteed to be upheld as long as
    /// this struct exists:
    ///
    /// 1. The pointer must have been created from a
    ///    `triomphe::Arc<ErrorData<C>>` for some `C` using
    ///    `triomphe::Arc::into_raw`.
    /// 2. The pointer retains full provenance over the `Arc` for the entire
    ///    lifetime of this object (i.e., it was not derived from a `&T`)
    /// 3. The pointer will point to the same `ErrorData<C>` for the entire
    ///    lifetime of this object.
    ptr: NonNull<ErrorData<Erased>>,

    /// Marker to tell the compiler that we should
    /// behave the same as a `&'a ErrorData<Erased>`
    _marker: core::marker::PhantomData<&'a ErrorData<Erased>>,
}

impl<'a> RawErrorRef<'a> {
    /// Casts the [`RawErrorRef`] to an [`ErrorData<C>`] reference.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The type `C` matches the actual value type stored in the
    ///    [`ErrorData`]
    #[inline]
    pub(super) unsafe fn cast_inner<C: 'static>(self) -> &'a ErrorData<C> {
        // Debug assertion to catch type mismatches in case of bugs
        debug_assert_eq!(self.vtable().type_id(), TypeId::of::<C>());

        let this = self.ptr.cast::<ErrorData<C>>();
        // SAFETY: Converting the NonNull pointer to a reference is sound because:
        // - The pointer is non-null, properly aligned, and dereferenceable (guaranteed
        //   by RawErrorRef's type invariants)
        // - The pointee is properly initialized (RawErrorRef's doc comment guarantees
        //   it points to an initialized ErrorData<C> for some C)
        // - The type `C` matches the actual value type (guaranteed by caller)
        // - Shared access is allowed
        // - The reference lifetime 'a is valid (tied to RawErrorRef<'a>'s lifetime)
        unsafe { this.as_ref() }
    }

    /// Returns a raw pointer to the [`ErrorData`] instance.
    #[inline]
    pub(super) fn as_ptr(self) -> *const ErrorData<Erased> {
        self.ptr.as_ptr()
    }

    /// Returns the [`TypeId`] of the stored value.
    #[inline]
    pub fn value_type_id(self) -> TypeId {
        self.vtable().type_id()
    }

    /// Returns the [`core::any::type_name`] of the stored value.
    #[inline]
    pub fn value_type_name(self) -> &'static str {
        self.vtable().type_name()
    }

    /// Returns the [`TypeId`] of the handler used to create the stored error.
    #[inline]
    pub fn handler_type_id(self) -> TypeId {
        self.vtable().handler_type_id()
    }

    /// Returns the type facet using [`FacetHandler::error_type`].
    #[inline]
    pub fn error_type(self) -> &'a str {
        let vtable = self.vtable();
        // SAFETY:
        // 1. The vtable returned by `self.vtable()` is guaranteed to match the data in
        //    the `ErrorData`.
        unsafe { vtable.error_type(self) }
    }

    /// Returns the details facet using [`FacetHandler::details`].
    #[inline]
    pub fn details(self) -> &'a str {
        let vtable = self.vtable();
        // SAFETY:
        // 1. The vtable returned by `self.vtable()` is guaranteed to match the data in
        //    the `ErrorData`.
        unsafe { vtable.details(self) }
    }

    /// Returns the info facet using [`FacetHandler::info`].
    #[inline]
    pub fn info(self) -> &'a str {
        let vtable = self.vtable();
        // SAFETY:
        // 1. The vtable returned by `self.vtable()` is guaranteed to match the data in
        //    the `ErrorData`.
        unsafe { vtable.info(self) }
    }

    /// Renders the stored value using [`FacetHandler::display_string`].
    #[inline]
    pub fn display_string(self) -> String {
        let vtable = self.vtable();
        // SAFETY:
        // 1. The vtable returned by `self.vtable()` is guaranteed to match the data in
        //    the `ErrorData`.
        unsafe { vtable.display_string(self) }
    }

    /// Clones the inner [`triomphe::Arc`] and returns a new [`RawError`]
    /// pointing to the same data.
    #[inline]
    pub fn clone_arc(self) -> RawError {
        let vtable = self.vtable();
        // SAFETY:
        // 1. Guaranteed by invariants on this type
        // 2. The vtable returned by `self.vtable()` is guaranteed to match the data in
        //    the `ErrorData`.
        // 3. No handle ever assumes unique ownership without checking it atomically
        unsafe { vtable.clone_arc(self.ptr) }
    }

    /// Gets the strong count of the inner [`triomphe::Arc`].
    #[inline]
    pub fn strong_count(self) -> usize {
        let vtable = self.vtable();
        // SAFETY:
        // 1. Guaranteed by invariants on this type
        // 2. The vtable returned by `self.vtable()` is guaranteed to match the data in
        //    the `ErrorData`.
        unsafe { vtable.strong_count(self.ptr) }
    }

    /// Returns `true` if both references point to the same allocation.
    #[inline]
    pub fn ptr_eq(self, other: RawErrorRef<'_>) -> bool {
        core::ptr::eq(self.as_ptr(), other.as_ptr())
    }
}
