//! Type-erased argument capture.
//!
//! The engine renders against an ordered, fixed-size list of [`Argument`]s
//! built once at the call site. Small arithmetic shapes are captured by
//! value; strings and custom values by read-only reference. The list is
//! immutable after construction.

use std::collections::BTreeMap;

use crate::value::{self, Render};

/// One captured argument, tagged with its shape.
///
/// The shape is resolved where the list is built (usually by the
/// [`sprint!`](crate::sprint) macro through [`ToArgument`]), so rendering
/// is a single match with no further dispatch.
#[derive(Clone, Copy)]
pub enum Argument<'a> {
    /// A single character.
    Char(char),
    /// Any signed integer, widened to `i64`.
    Int(i64),
    /// Any unsigned integer, widened to `u64`.
    Uint(u64),
    /// Any float, widened to `f64`.
    Float(f64),
    /// A borrowed string.
    Str(&'a str),
    /// A raw pointer address.
    Pointer(usize),
    /// A user or container value with a caller-supplied renderer.
    Custom(&'a dyn Render),
}

impl<'a> Argument<'a> {
    /// Capture a custom value by reference.
    pub fn custom(value: &'a dyn Render) -> Self {
        Argument::Custom(value)
    }

    /// Render the captured value. Total; every shape has a rendering.
    pub fn render(&self) -> String {
        match *self {
            Argument::Char(c) => value::render_char(c),
            Argument::Int(v) => value::render_int(v),
            Argument::Uint(v) => value::render_uint(v),
            Argument::Float(v) => value::render_float(v),
            Argument::Str(s) => value::render_str(s),
            Argument::Pointer(addr) => value::render_pointer(addr),
            Argument::Custom(v) => v.render(),
        }
    }
}

/// Conversion from a concrete value into its captured shape.
pub trait ToArgument {
    /// Capture `self` as an [`Argument`].
    fn to_argument(&self) -> Argument<'_>;
}

macro_rules! impl_to_argument {
    ($($t:ty => |$v:ident| $arg:expr),* $(,)?) => {
        $(impl ToArgument for $t {
            fn to_argument(&self) -> Argument<'_> {
                let $v = *self;
                $arg
            }
        })*
    };
}

impl_to_argument! {
    char => |v| Argument::Char(v),
    i8 => |v| Argument::Int(i64::from(v)),
    i16 => |v| Argument::Int(i64::from(v)),
    i32 => |v| Argument::Int(i64::from(v)),
    i64 => |v| Argument::Int(v),
    isize => |v| Argument::Int(v as i64),
    u8 => |v| Argument::Uint(u64::from(v)),
    u16 => |v| Argument::Uint(u64::from(v)),
    u32 => |v| Argument::Uint(u64::from(v)),
    u64 => |v| Argument::Uint(v),
    usize => |v| Argument::Uint(v as u64),
    f32 => |v| Argument::Float(f64::from(v)),
    f64 => |v| Argument::Float(v),
}

impl ToArgument for str {
    fn to_argument(&self) -> Argument<'_> {
        Argument::Str(self)
    }
}

impl ToArgument for String {
    fn to_argument(&self) -> Argument<'_> {
        Argument::Str(self)
    }
}

impl ToArgument for &str {
    fn to_argument(&self) -> Argument<'_> {
        Argument::Str(*self)
    }
}

impl<T> ToArgument for *const T {
    fn to_argument(&self) -> Argument<'_> {
        Argument::Pointer(*self as usize)
    }
}

impl<T> ToArgument for *mut T {
    fn to_argument(&self) -> Argument<'_> {
        Argument::Pointer(*self as usize)
    }
}

impl<T: Render> ToArgument for Vec<T> {
    fn to_argument(&self) -> Argument<'_> {
        Argument::Custom(self)
    }
}

impl<T: Render> ToArgument for &[T] {
    fn to_argument(&self) -> Argument<'_> {
        Argument::Custom(self)
    }
}

impl<K: Render, V: Render> ToArgument for BTreeMap<K, V> {
    fn to_argument(&self) -> Argument<'_> {
        Argument::Custom(self)
    }
}
