#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::missing_docs_in_private_items,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![allow(rustdoc::private_intra_doc_links)]
//! Internal implementation crate for [`errorbox`].
//!
//! # Overview
//!
//! This crate contains the low-level, type-erased storage and the unsafe
//! operations behind [`errorbox::ErasedError`]. A concrete error value is
//! moved into a reference-counted allocation together with a `'static`
//! vtable, after which it can be read through a single pointer-sized handle
//! without knowing its type.
//!
//! **This crate is an implementation detail.** No semantic versioning guarantees
//! are provided. Users should depend on the [`errorbox`] crate, not this one.
//!
//! # Architecture
//!
//! - **[`error`]**: Type-erased error storage
//!   - [`RawError`]: Owned, shared handle with [`Arc`]-based allocation
//!   - [`RawErrorRef`]: Borrowed reference to a stored error
//!   - [`ErrorData`]: `#[repr(C)]` wrapper enabling field access on erased types
//!   - [`ErrorVtable`]: Function pointers for type-erased dispatch
//!
//! - **[`handlers`]**: The [`FacetHandler`] trait describing how the three
//!   textual facets of a stored value are read
//!
//! # Safety Strategy
//!
//! When we erase a type like `ErrorData<MyError>` to `ErrorData<Erased>`, the
//! vtable function pointers must still match the concrete type stored in
//! memory. This holds because:
//!
//! - **Module-based encapsulation**: the pointer and vtable fields are private
//!   to the module that creates them, so the pairing is locally verifiable
//! - **`#[repr(C)]` layout**: the vtable is always the first field, so it can
//!   be read through an erased pointer without building an invalid reference
//! - **No mutation after creation**: nothing in this crate hands out mutable
//!   access to a stored value, so neither the value nor its vtable can change
//!   once shared
//!
//! [`errorbox`]: https://docs.rs/errorbox/latest/errorbox/
//! [`errorbox::ErasedError`]: https://docs.rs/errorbox/latest/errorbox/struct.ErasedError.html
//! [`ErrorData`]: error::data::ErrorData
//! [`ErrorVtable`]: error::vtable::ErrorVtable
//! [`FacetHandler`]: handlers::FacetHandler
//! [`Arc`]: triomphe::Arc

extern crate alloc;

mod error;
pub mod handlers;
mod util;

pub use error::{RawError, RawErrorRef};
