//! Commonly used items for convenient importing.
//!
//! # Usage
//!
//! ```rust
//! use errorbox::prelude::*;
//!
//! fn divide(a: i32, b: i32) -> Result<i32> {
//!     if b == 0 {
//!         bail!("cannot divide by zero");
//!     }
//!     Ok(a / b)
//! }
//!
//! assert_eq!(divide(10, 2).unwrap(), 5);
//! assert_eq!(divide(1, 0).unwrap_err().details(), "cannot divide by zero");
//! ```
//!
//! # What's Included
//!
//! - **[`ErasedError`]**, **[`Error`]** and the **[`ConcreteError`]**
//!   capability, with **[`ClassId`]** and **[`HasClassId`]** for kind tests
//! - **[`Result`]**, **[`SuccessResult`]**, **[`OptionalError`]** and
//!   **[`NO_ERROR`]**
//! - The builder functions **[`make_error`]**, **[`make_optional_error`]**,
//!   **[`make_result_error`]** and **[`success`]**
//! - **[`IntoErasedError`]**, **[`ResultExt`]** and **[`OptionalErrorExt`]**
//! - **[`erased!`]**, **[`bail!`]** and **[`error_kind!`]**

pub use crate::{
    ClassId, ConcreteError, ErasedError, Error, HasClassId, IntoErasedError, NO_ERROR,
    OptionalError, OptionalErrorExt, Result, ResultExt, SuccessResult, bail, erased, error_kind,
    make_error, make_optional_error, make_result_error, success,
};
