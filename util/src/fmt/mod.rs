//! Appending formatted lines to a [String]
//!
//! Two flavours exist. [append_format_line] takes the format string at runtime
//! and fills positional placeholders such as `{0}` or `{1,-8}` from a slice of
//! [Display] arguments; mistakes in the format string are reported as
//! [FormatError]. The [append_line!](crate::append_line) macro uses Rust's
//! compile time checked [format_args!] syntax instead.

use std::fmt::Display;

use thiserror::Error;

mod composite;

/// Terminator appended after every formatted line
pub const LINE_TERMINATOR: &str = "\n";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors raised while expanding a composite format string
pub enum FormatError {
    /// A placeholder refers to an argument that was not supplied
    #[error("Placeholder refers to argument {index}, but only {count} were given")]
    IndexOutOfRange {
        /// Index used in the placeholder
        index: usize,
        /// Number of supplied arguments
        count: usize,
    },
    /// A `}` without a matching `{`, or a `{` that is never closed
    #[error("Unbalanced brace at offset {offset}")]
    UnbalancedBrace {
        /// Byte offset of the brace
        offset: usize,
    },
    /// The text between braces is not `index` or `index,alignment`
    #[error("Malformed placeholder at offset {offset}")]
    MalformedPlaceholder {
        /// Byte offset of the opening brace
        offset: usize,
    },
    /// The alignment in `{index,alignment}` is one million characters or wider
    #[error("Alignment in placeholder at offset {offset} is out of range")]
    AlignmentOutOfRange {
        /// Byte offset of the opening brace
        offset: usize,
    },
    /// Placeholders of the form `{index:spec}` are not supported
    #[error("Format specifier in placeholder at offset {offset} is not supported")]
    UnsupportedSpecifier {
        /// Byte offset of the opening brace
        offset: usize,
    },
    /// The argument's [Display] implementation returned an error
    #[error("Argument {index} failed to display")]
    ArgumentDisplay {
        /// Index of the failing argument
        index: usize,
    },
}

/// Format `args` into `format`, append the result and a [LINE_TERMINATOR] to
/// `buf`, and hand `buf` back for further chaining.
///
/// On error `buf` is left as it was.
///
/// # Examples
///
/// ```rust
/// use extensions_util::fmt::{append_format_line, FormatError};
///
/// let mut buf = String::from("> ");
/// append_format_line(&mut buf, "{0} + {0} = {1,3}", &[&2, &4])?;
/// assert_eq!(buf, "> 2 + 2 =   4\n");
///
/// let err = append_format_line(&mut buf, "{0} {1}", &[&"only one"]).unwrap_err();
/// assert_eq!(err, FormatError::IndexOutOfRange { index: 1, count: 1 });
/// assert_eq!(buf, "> 2 + 2 =   4\n");
/// # Ok::<(), FormatError>(())
/// ```
pub fn append_format_line<'b>(
    buf: &'b mut String,
    format: &str,
    args: &[&dyn Display],
) -> Result<&'b mut String, FormatError> {
    let line = composite::format_composite(format, args)
        .inspect_err(|e| log::trace!("Rejected format string {format:?}: {e}"))?;
    buf.push_str(&line);
    buf.push_str(LINE_TERMINATOR);
    Ok(buf)
}

/// Extension trait offering [append_format_line] as a method
///
/// # Examples
///
/// ```rust
/// use extensions_util::fmt::AppendFormatLine;
///
/// let mut report = String::new();
/// report
///     .append_format_line("{0,-6}|{1,4}", &[&"name", &"qty"])?
///     .append_format_line("{0,-6}|{1,4}", &[&"bolts", &12])?;
/// assert_eq!(report, "name  | qty\nbolts |  12\n");
/// # Ok::<(), extensions_util::fmt::FormatError>(())
/// ```
pub trait AppendFormatLine {
    /// See [append_format_line]
    fn append_format_line(
        &mut self,
        format: &str,
        args: &[&dyn Display],
    ) -> Result<&mut Self, FormatError>;
}

impl AppendFormatLine for String {
    fn append_format_line(
        &mut self,
        format: &str,
        args: &[&dyn Display],
    ) -> Result<&mut Self, FormatError> {
        append_format_line(self, format, args)
    }
}

/// Append a line formatted with [format_args!] syntax to a `&mut String` and
/// evaluate to that same reference.
///
/// # Examples
///
/// ```rust
/// use extensions_util::append_line;
///
/// let mut buf = String::new();
/// append_line!(&mut buf, "{} items", 3).push_str("done");
/// assert_eq!(buf, "3 items\ndone");
/// ```
#[macro_export]
macro_rules! append_line {
    ($buf:expr, $($arg:tt)*) => {{
        let buf: &mut ::std::string::String = $buf;
        buf.push_str(&::std::format!($($arg)*));
        buf.push_str($crate::fmt::LINE_TERMINATOR);
        buf
    }};
}
