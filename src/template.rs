//! Positional message templates: `"{0} took {1,6} ms"`.
//!
//! `{index}` inserts an argument, `{index,width}` pads it (positive width
//! right-aligns, negative left-aligns), `{{` and `}}` are literal braces.
//! Arguments render through `Display`, so `{0:X2}`-style specifiers are
//! rejected rather than silently ignored. Unused arguments are allowed.

use crate::error::FormatError;
use std::fmt::{Display, Write};

pub fn format_template(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut body = String::new();
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    if inner == '{' {
                        break;
                    }
                    body.push(inner);
                }
                if !closed {
                    return Err(FormatError::UnmatchedBrace {
                        brace: '{',
                        position,
                    });
                }

                let placeholder = parse_placeholder(&body, position)?;
                let arg = args.get(placeholder.index).ok_or(FormatError::IndexOutOfRange {
                    index: placeholder.index,
                    count: args.len(),
                })?;
                write_aligned(&mut out, *arg, placeholder.alignment);
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(FormatError::UnmatchedBrace {
                        brace: '}',
                        position,
                    });
                }
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

/// Widths at or beyond this are rejected instead of padded
const MAX_ALIGNMENT: u64 = 1_000_000;

struct Placeholder {
    index: usize,
    alignment: i64,
}

fn parse_placeholder(body: &str, position: usize) -> Result<Placeholder, FormatError> {
    let (head, spec) = match body.split_once(':') {
        Some((head, spec)) => (head, Some(spec)),
        None => (body, None),
    };
    if let Some(spec) = spec {
        return Err(FormatError::UnsupportedFormatSpec {
            spec: spec.to_string(),
            position,
        });
    }

    let (index_text, alignment_text) = match head.split_once(',') {
        Some((index, alignment)) => (index, Some(alignment)),
        None => (head, None),
    };

    let index = index_text
        .trim()
        .parse::<usize>()
        .map_err(|_| FormatError::InvalidIndex {
            text: body.to_string(),
            position,
        })?;

    let alignment = match alignment_text {
        Some(text) => text.trim().parse::<i64>().map_err(|_| FormatError::InvalidIndex {
            text: body.to_string(),
            position,
        })?,
        None => 0,
    };
    if alignment.unsigned_abs() >= MAX_ALIGNMENT {
        return Err(FormatError::AlignmentTooLarge {
            width: alignment.unsigned_abs(),
            position,
        });
    }

    Ok(Placeholder { index, alignment })
}

fn write_aligned(out: &mut String, arg: &dyn Display, alignment: i64) {
    if alignment == 0 {
        // writing to a String cannot fail
        let _ = write!(out, "{}", arg);
        return;
    }

    let rendered = arg.to_string();
    let width = alignment.unsigned_abs() as usize;
    let padding = width.saturating_sub(rendered.chars().count());
    if alignment > 0 {
        out.extend(std::iter::repeat(' ').take(padding));
        out.push_str(&rendered);
    } else {
        out.push_str(&rendered);
        out.extend(std::iter::repeat(' ').take(padding));
    }
}
