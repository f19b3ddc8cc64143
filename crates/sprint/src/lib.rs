//! sprint -- runtime string formatting.
//!
//! A printf/`str.format`-style engine: a brace template plus a
//! heterogeneous list of values produces a single output string.
//!
//! # Template grammar
//!
//! - `{}` renders the next positional argument
//! - `{{` and `}}` are escaped literal braces
//! - any other byte after an unescaped `{` is a reserved inline-specifier
//!   slot and is silently swallowed
//! - an unmatched trailing `{` or `}` is dropped
//!
//! Rendering never fails: an out-of-range placeholder emits the
//! [`INVALID_ARG`] sentinel instead of panicking, so formatting stays safe
//! on paths (such as logging) that must not themselves fail.
//!
//! # Modules
//!
//! - [`engine`]: the template scanner and its escape state machine
//! - [`value`]: per-shape rendering and the [`Render`] trait
//! - [`args`]: type-erased argument capture
//!
//! The `%`-style specifier grammar ([`spec::PlaceholderSpec`]) is parsed by
//! the standalone `sprint_spec` crate, re-exported here as [`spec`].
//!
//! # Example
//!
//! ```
//! use sprint::sprint;
//!
//! let out = sprint!("x={}, y={}", 1, "two");
//! assert_eq!(out, "x=1, y=two");
//! ```

pub mod args;
pub mod engine;
pub mod value;

pub use args::{Argument, ToArgument};
pub use engine::{render, INVALID_ARG};
pub use value::Render;

pub use sprint_spec as spec;

/// Variadic entry point: render a template with any mix of supported
/// values.
///
/// Each argument is captured through [`ToArgument`] into a fixed-size
/// argument list, then handed to [`render`].
///
/// ```
/// use sprint::sprint;
///
/// assert_eq!(sprint!("{} + {} = {}", 1, 2, 3), "1 + 2 = 3");
/// assert_eq!(sprint!("{{literal}}"), "{literal}");
/// ```
#[macro_export]
macro_rules! sprint {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::render(
            $template,
            &[$($crate::args::ToArgument::to_argument(&$arg)),*],
        )
    };
}
