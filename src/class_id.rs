//! Identity tokens for error kinds.
//!
//! Every concrete error type has exactly one [`ClassId`]. Two values of the
//! same type always report the same token, no matter what their facets
//! contain, and values of different types always report different tokens.
//!
//! The token is derived from [`TypeId`], so it is stable for the lifetime of
//! the process and compares in constant time.
//!
//! ```
//! use errorbox::{ClassId, Error, ErasedError, HasClassId};
//!
//! let first = Error::new("disk full");
//! let second = Error::typed("io", "permission denied");
//! assert_eq!(first.class_id(), second.class_id());
//! assert_eq!(first.class_id(), ClassId::of::<Error>());
//!
//! // The token survives erasure
//! let erased = ErasedError::new(first);
//! assert_eq!(erased.class_id(), ClassId::of::<Error>());
//! ```

use core::{
    any::TypeId,
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::ConcreteError;

/// An opaque token identifying a concrete error kind.
///
/// Equality, ordering and hashing only look at the underlying [`TypeId`].
/// The type name is carried along for diagnostics and is printed by the
/// [`Debug`](core::fmt::Debug) implementation.
#[derive(Clone, Copy)]
pub struct ClassId {
    type_id: TypeId,
    type_name: &'static str,
}

impl ClassId {
    /// Returns the token for the kind `C` without needing an instance.
    ///
    /// ```
    /// use errorbox::{ClassId, Error};
    ///
    /// assert_eq!(ClassId::of::<Error>(), ClassId::of::<Error>());
    /// assert_ne!(ClassId::of::<Error>(), ClassId::of::<String>());
    /// ```
    #[inline]
    #[must_use]
    pub fn of<C: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            type_name: core::any::type_name::<C>(),
        }
    }

    pub(crate) fn from_parts(type_id: TypeId, type_name: &'static str) -> Self {
        Self { type_id, type_name }
    }

    /// Returns the Rust type name of the kind.
    ///
    /// The exact contents are not guaranteed to be stable across compiler
    /// versions and should only be used for diagnostics.
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the [`TypeId`] of the kind.
    #[inline]
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }
}

impl PartialEq for ClassId {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ClassId {}

impl PartialOrd for ClassId {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClassId {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_id.cmp(&other.type_id)
    }
}

impl Hash for ClassId {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl core::fmt::Debug for ClassId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ClassId").field(&self.type_name).finish()
    }
}

/// Access to the identity token of a concrete error value.
///
/// This trait is implemented for every [`ConcreteError`] and cannot be
/// implemented by hand, so the token of a value can never disagree with the
/// token of its type.
pub trait HasClassId: private::Sealed {
    /// Returns the identity token of this value's kind.
    fn class_id(&self) -> ClassId;
}

impl<C: ConcreteError> HasClassId for C {
    #[inline]
    fn class_id(&self) -> ClassId {
        ClassId::of::<C>()
    }
}

mod private {
    pub trait Sealed {}

    impl<C: crate::ConcreteError> Sealed for C {}
}

#[cfg(test)]
mod tests {
    use alloc::{collections::BTreeSet, format};

    use super::*;
    use crate::Error;

    struct Other;

    impl ConcreteError for Other {
        fn details(&self) -> &str {
            "other"
        }
    }

    #[test]
    fn test_same_kind_same_token() {
        let a = Error::new("a");
        let b = Error::typed("net", "b").with_info("debug");
        assert_eq!(a.class_id(), b.class_id());
        assert_ne!(a.class_id(), Other.class_id());
    }

    #[test]
    fn test_type_name_does_not_affect_equality() {
        let a = ClassId::of::<Error>();
        let b = ClassId::from_parts(TypeId::of::<Error>(), "renamed");
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_ordering_is_consistent() {
        let set: BTreeSet<ClassId> = [
            ClassId::of::<Error>(),
            ClassId::of::<Other>(),
            ClassId::of::<Error>(),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_debug_prints_type_name() {
        let rendered = format!("{:?}", ClassId::of::<Other>());
        assert!(rendered.starts_with("ClassId("));
        assert!(rendered.contains("Other"));
    }

    #[test]
    fn test_class_id_traits() {
        static_assertions::assert_impl_all!(ClassId: Copy, Send, Sync, Eq, Ord, Hash);
    }
}
