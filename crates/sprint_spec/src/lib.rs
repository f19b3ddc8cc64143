//! Placeholder specifier grammar for the sprint formatting engine.
//!
//! A specifier is the mini-language text that controls how one argument is
//! rendered: `[param$][flags][width][.precision][type]`, e.g. `5$-08.3d`.
//! [`PlaceholderSpec::parse`] decodes it into a structured, read-only value.
//!
//! Parsing is total: malformed input never fails, it degrades field by
//! field to defaults. Callers rely on specifier handling being a safe,
//! always-succeeding operation (e.g. logging paths that must not
//! themselves fail).
//!
//! This crate is standalone on purpose -- external tools (format-string
//! linters, highlighters) can consume the grammar without pulling in the
//! engine.

pub mod placeholder;

pub use placeholder::{NumField, PlaceholderSpec, SpecFlags, TypeHint};
