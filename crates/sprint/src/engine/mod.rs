//! Template scanning engine.
//!
//! A single left-to-right pass over the template, O(template length +
//! total rendered size). Escape handling is a three-state machine:
//!
//! - `Literal`: emit bytes verbatim; `{` or `}` moves to a pending state.
//! - `OpenBrace`: `{` emits a literal brace, `}` closes a placeholder and
//!   renders the next argument, anything else is the reserved
//!   inline-specifier slot and is swallowed.
//! - `CloseBrace`: `}` emits a literal brace, anything else is a malformed
//!   lone `}` and both characters are dropped.
//!
//! A pending state at end of input drops the dangling brace. All recovery
//! is silent substitution; `render` always returns a string.
//!
//! Literal runs are bulk-copied with `memchr2` rather than pushed byte by
//! byte.

use memchr::memchr2;

use crate::args::Argument;

/// Sentinel emitted in place of an out-of-range placeholder.
pub const INVALID_ARG: &str = "<INVALID>";

/// Escape-handling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Not inside an escape sequence.
    Literal,
    /// The previous character was an unresolved `{`.
    OpenBrace,
    /// The previous character was an unresolved `}`.
    CloseBrace,
}

/// Transient scanning state, one per `render` call.
struct ParseContext {
    next_arg: usize,
    state: ScanState,
}

/// Render a template against an argument list.
///
/// The template and arguments are read-only; the output buffer is owned by
/// this call and returned. Out-of-range placeholders emit [`INVALID_ARG`].
///
/// ```
/// use sprint::{render, Argument};
///
/// let out = render("{} and {{more}}", &[Argument::Int(1)]);
/// assert_eq!(out, "1 and {more}");
/// ```
pub fn render(template: &str, args: &[Argument<'_>]) -> String {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    let mut ctx = ParseContext {
        next_arg: 0,
        state: ScanState::Literal,
    };
    let mut pos = 0;

    while pos < bytes.len() {
        match ctx.state {
            ScanState::Literal => match memchr2(b'{', b'}', &bytes[pos..]) {
                Some(off) => {
                    out.push_str(&template[pos..pos + off]);
                    ctx.state = if bytes[pos + off] == b'{' {
                        ScanState::OpenBrace
                    } else {
                        ScanState::CloseBrace
                    };
                    pos += off + 1;
                }
                None => {
                    out.push_str(&template[pos..]);
                    pos = bytes.len();
                }
            },
            ScanState::OpenBrace => {
                match bytes[pos] {
                    b'{' => {
                        out.push('{');
                        pos += 1;
                    }
                    b'}' => {
                        match args.get(ctx.next_arg) {
                            Some(arg) => {
                                out.push_str(&arg.render());
                                ctx.next_arg += 1;
                            }
                            None => out.push_str(INVALID_ARG),
                        }
                        pos += 1;
                    }
                    _ => {
                        // Reserved inline-specifier slot; swallowed.
                        pos += char_len_at(template, pos);
                    }
                }
                ctx.state = ScanState::Literal;
            }
            ScanState::CloseBrace => {
                if bytes[pos] == b'}' {
                    out.push('}');
                    pos += 1;
                } else {
                    // Malformed lone `}`: drop it and the character after it.
                    pos += char_len_at(template, pos);
                }
                ctx.state = ScanState::Literal;
            }
        }
    }

    out
}

/// Width in bytes of the char starting at `pos`, so swallowed characters
/// never split a UTF-8 boundary.
fn char_len_at(template: &str, pos: usize) -> usize {
    template[pos..].chars().next().map_or(1, char::len_utf8)
}
