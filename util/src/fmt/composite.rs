//! Runtime composite formatting with positional placeholders
//!
//! Syntax: `{index}` or `{index,alignment}`, with `{{` and `}}` as literal braces.
//! A positive alignment right-aligns the argument in a field of that many
//! characters, a negative one left-aligns it.

use std::fmt::{Display, Write};
use std::num::{IntErrorKind, ParseIntError};

use crate::result::{bail_if, ensure_or, OkExt};

use super::FormatError;

/// Field widths must stay below this many characters
pub(super) const MAX_ALIGNMENT: usize = 1_000_000;

/// A parsed `{index,alignment}` item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placeholder {
    index: usize,
    alignment: isize,
}

impl Placeholder {
    /// Parse the text between the braces; `offset` is the position of the opening brace
    fn parse(body: &str, offset: usize) -> Result<Self, FormatError> {
        let malformed = FormatError::MalformedPlaceholder { offset };
        bail_if(
            body.contains(':'),
            FormatError::UnsupportedSpecifier { offset },
        )?;

        let (index, alignment) = match body.split_once(',') {
            Some((index, alignment)) => (index, Some(alignment)),
            None => (body, None),
        };

        let index = index.trim_end_matches(' ');
        ensure_or(
            !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()),
            malformed,
        )?;
        let index: usize = index.parse().map_err(|_| malformed)?;

        let alignment: isize = match alignment {
            Some(alignment) => alignment.trim().parse().map_err(|e: ParseIntError| {
                match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        FormatError::AlignmentOutOfRange { offset }
                    }
                    _ => malformed,
                }
            })?,
            None => 0,
        };
        ensure_or(
            alignment.unsigned_abs() < MAX_ALIGNMENT,
            FormatError::AlignmentOutOfRange { offset },
        )?;

        Self { index, alignment }.ok()
    }

    fn render(&self, args: &[&dyn Display], out: &mut String) -> Result<(), FormatError> {
        let arg = args.get(self.index).ok_or(FormatError::IndexOutOfRange {
            index: self.index,
            count: args.len(),
        })?;

        let mut text = String::new();
        write!(text, "{arg}").map_err(|_| FormatError::ArgumentDisplay { index: self.index })?;

        let padding = self
            .alignment
            .unsigned_abs()
            .saturating_sub(text.chars().count());
        let fill = std::iter::repeat(' ').take(padding);
        match self.alignment < 0 {
            true => {
                out.push_str(&text);
                out.extend(fill);
            }
            false => {
                out.extend(fill);
                out.push_str(&text);
            }
        }
        Ok(())
    }
}

/// Expand `format` with `args` into a new string
pub(super) fn format_composite(format: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(format.len());
    let mut chars = format.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        match c {
            '{' if chars.next_if(|&(_, c)| c == '{').is_some() => out.push('{'),
            '}' if chars.next_if(|&(_, c)| c == '}').is_some() => out.push('}'),
            '}' => return Err(FormatError::UnbalancedBrace { offset }),
            '{' => {
                let close = format[offset..]
                    .find('}')
                    .map(|len| offset + len)
                    .ok_or(FormatError::UnbalancedBrace { offset })?;
                Placeholder::parse(&format[offset + 1..close], offset)?.render(args, &mut out)?;
                while chars.next_if(|&(i, _)| i <= close).is_some() {}
            }
            c => out.push(c),
        }
    }

    Ok(out)
}
