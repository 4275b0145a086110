//! Module containing the shared, type-erased error storage

mod data;
mod raw;
mod vtable;

pub use raw::{RawError, RawErrorRef};
