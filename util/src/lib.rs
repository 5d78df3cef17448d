#![warn(missing_docs)]
//! Small stateless helpers for text and byte handling
//!
//! # Examples
//!
//! ```rust
//! use extensions_util::fmt::AppendFormatLine;
//! use extensions_util::hex::{from_hex_string, to_hex_string};
//! use extensions_util::path::clear_path;
//!
//! let mut buf = String::new();
//! buf.append_format_line("{0}={1}", &[&"key", &to_hex_string([0xCAu8, 0xFE])])?;
//! assert_eq!(buf, "key=CAFE\n");
//!
//! assert_eq!(from_hex_string("CAFE")?, vec![0xCA, 0xFE]);
//! assert_eq!(clear_path("C:\\tmp*"), "Ctmp");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod fmt;
pub mod hex;
pub mod mem;
pub mod path;
pub mod result;
pub mod vec;
