#![warn(missing_docs)]
//! Chaining combinators over [Option]
//!
//! Two families are offered side by side:
//!
//! - [Maybe] applies a step only when a value is present. Failures inside a
//!   step reach the caller, either as the error of the `try_*` variants or as
//!   a panic.
//! - [SafeMaybe] does the same, but a step that fails (returns `Err`, or
//!   panics with the `catch-panic` feature) ends the chain with `None`.
//!
//! In both, `None` is absorbing: once a step yields `None` no later closure runs.
//!
//! # Examples
//!
//! ```rust
//! use extensions_maybe::{Maybe, SafeMaybe, SomeExt};
//!
//! let config = "retries=3";
//!
//! let retries = config
//!     .some()
//!     .with(|c| c.split_once('='))
//!     .when(|(key, _)| *key == "retries")
//!     .safe_with_some(|(_, value)| value.parse::<u32>())
//!     .return_or(|n| n.min(10), 1);
//! assert_eq!(retries, 3);
//!
//! let broken = "retries=many"
//!     .some()
//!     .with(|c| c.split_once('='))
//!     .safe_with_some(|(_, value)| value.parse::<u32>())
//!     .return_or(|n| n.min(10), 1);
//! assert_eq!(broken, 1);
//! ```

#[cfg(doctest)]
doc_comment::doctest!("../readme.md");

mod maybe;
mod option;
mod safe;

pub use crate::maybe::Maybe;
pub use crate::option::SomeExt;
pub use crate::safe::SafeMaybe;
