//! Specifier parsing pipeline.
//!
//! The grammar is `[param$][flags][width][.precision][type]`. Parsing runs
//! an ordered table of stage functions left to right; each stage consumes a
//! prefix of the input and returns the offset where the next stage should
//! resume. A stage that finds nothing to consume returns its input offset
//! unchanged, and the pipeline stops early once the input is exhausted.
//!
//! Every stage recovers from malformed input by leaving its field at the
//! default value. [`PlaceholderSpec::parse`] therefore never fails.

use bitflags::bitflags;
use memchr::memchr;

bitflags! {
    /// Flag characters accepted by the flags stage.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SpecFlags: u8 {
        /// `-`: left-justify within the field width.
        const MINUS = 1 << 0;
        /// `+`: always emit a sign for numeric values.
        const PLUS = 1 << 1;
        /// ` `: emit a space where the sign would go.
        const SPACE = 1 << 2;
        /// `0`: pad with zeros instead of spaces.
        const ZERO = 1 << 3;
        /// `#`: alternate form.
        const HASH = 1 << 4;
    }
}

/// Conversion type hint, the optional trailing letter of a specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeHint {
    /// No type letter present (or an unrecognized one).
    #[default]
    Default,
    /// `d` or `i`.
    SignedInt,
    /// `u`.
    UnsignedInt,
    /// `o`.
    Octal,
    /// `X`.
    HexUpper,
    /// `x`.
    HexLower,
}

/// Tri-state width/precision field.
///
/// `Specified` always carries a strictly positive value; a parse failure
/// or a non-positive value leaves the field at `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumField {
    /// Field absent from the specifier.
    #[default]
    Default,
    /// Field given inline as a positive integer.
    Specified(u32),
    /// Field given as `*`: the value is supplied at call time.
    Customize,
}

impl NumField {
    /// The inline value, if the field was `Specified`.
    pub fn value(self) -> Option<u32> {
        match self {
            NumField::Specified(n) => Some(n),
            _ => None,
        }
    }
}

/// A parsed placeholder specifier.
///
/// Built once per placeholder occurrence by [`PlaceholderSpec::parse`] and
/// read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaceholderSpec {
    param: Option<u32>,
    flags: SpecFlags,
    type_hint: TypeHint,
    width: NumField,
    precision: NumField,
}

/// One pipeline stage: consume a prefix starting at the given offset and
/// return the offset where the next stage resumes.
type Stage = fn(&mut PlaceholderSpec, &[u8], usize) -> usize;

const STAGES: [Stage; 5] = [
    PlaceholderSpec::parse_param,
    PlaceholderSpec::parse_flags,
    PlaceholderSpec::parse_width,
    PlaceholderSpec::parse_precision,
    PlaceholderSpec::parse_type,
];

impl PlaceholderSpec {
    /// Parse a specifier. Total: malformed input degrades to defaults.
    pub fn parse(spec: &str) -> Self {
        let mut out = Self::default();
        let bytes = spec.as_bytes();
        let mut pos = 0;
        for stage in STAGES {
            if pos >= bytes.len() {
                break;
            }
            pos = stage(&mut out, bytes, pos);
        }
        out
    }

    /// Explicit argument index, if the specifier carried a `param$` prefix.
    pub fn param(&self) -> Option<u32> {
        self.param
    }

    /// The accumulated flag set.
    pub fn flags(&self) -> SpecFlags {
        self.flags
    }

    /// The conversion type hint.
    pub fn type_hint(&self) -> TypeHint {
        self.type_hint
    }

    /// The field width.
    pub fn width(&self) -> NumField {
        self.width
    }

    /// The precision.
    pub fn precision(&self) -> NumField {
        self.precision
    }

    /// Stage 1: `param$`.
    ///
    /// Scans for a `$` delimiter anywhere ahead of the current offset. The
    /// text before it is parsed as the argument index; non-numeric text is
    /// silently dropped, but the `$` is still consumed either way. Without
    /// a `$` the stage consumes nothing.
    fn parse_param(&mut self, bytes: &[u8], start: usize) -> usize {
        let Some(off) = memchr(b'$', &bytes[start..]) else {
            return start;
        };
        let dollar = start + off;
        if let Some(n) = parse_u32(&bytes[start..dollar]) {
            self.param = Some(n);
        }
        dollar + 1
    }

    /// Stage 2: a maximal run of flag characters.
    fn parse_flags(&mut self, bytes: &[u8], start: usize) -> usize {
        let mut pos = start;
        while pos < bytes.len() {
            let flag = match bytes[pos] {
                b'-' => SpecFlags::MINUS,
                b'+' => SpecFlags::PLUS,
                b' ' => SpecFlags::SPACE,
                b'0' => SpecFlags::ZERO,
                b'#' => SpecFlags::HASH,
                _ => break,
            };
            self.flags |= flag;
            pos += 1;
        }
        pos
    }

    /// Stage 3: field width.
    fn parse_width(&mut self, bytes: &[u8], start: usize) -> usize {
        let end = num_run_end(bytes, start);
        self.width = parse_num_field(bytes, start, end);
        end
    }

    /// Stage 4: precision. Only triggers on a `.` at the current offset.
    fn parse_precision(&mut self, bytes: &[u8], start: usize) -> usize {
        if bytes[start] != b'.' {
            return start;
        }
        let start = start + 1;
        let end = num_run_end(bytes, start);
        self.precision = parse_num_field(bytes, start, end);
        end
    }

    /// Stage 5: type letter. Consumes exactly one byte when recognized.
    fn parse_type(&mut self, bytes: &[u8], start: usize) -> usize {
        let hint = match bytes[start] {
            b'd' | b'i' => TypeHint::SignedInt,
            b'u' => TypeHint::UnsignedInt,
            b'o' => TypeHint::Octal,
            b'X' => TypeHint::HexUpper,
            b'x' => TypeHint::HexLower,
            _ => return start,
        };
        self.type_hint = hint;
        start + 1
    }
}

/// End of the maximal run of digits and `*` starting at `start`.
fn num_run_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| !b.is_ascii_digit() && b != b'*')
        .map_or(bytes.len(), |off| start + off)
}

/// Shared width/precision field logic over the byte range `[start, end)`.
///
/// Leading zeros are stripped first: in an unpartitioned run they belong to
/// the flags stage's ZERO flag, and a zero-valued field is equivalent to an
/// unset one. The surviving run is either the single character `*` (value
/// supplied at call time) or a positive integer. Digits and `*` are
/// disjoint in a well-formed run; a mixed run fails the integer parse and
/// leaves the field unset.
fn parse_num_field(bytes: &[u8], start: usize, end: usize) -> NumField {
    let mut pos = start;
    while pos < end && bytes[pos] == b'0' {
        pos += 1;
    }
    if pos == end {
        return NumField::Default;
    }
    if end - pos == 1 && bytes[pos] == b'*' {
        return NumField::Customize;
    }
    match parse_u32(&bytes[pos..end]) {
        Some(n) if n > 0 => NumField::Specified(n),
        _ => NumField::Default,
    }
}

/// Fallible decimal parse; any failure maps to `None`, never an error.
fn parse_u32(bytes: &[u8]) -> Option<u32> {
    let text = core::str::from_utf8(bytes).ok()?;
    text.parse().ok()
}
