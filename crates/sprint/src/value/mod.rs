//! Per-shape value rendering.
//!
//! Every renderable value belongs to one shape: character, signed integer,
//! unsigned integer, float, string, pointer, or custom. Each shape has a
//! total `value -> String` function; there is no failure path. Dispatch is
//! static -- the shape is resolved at the call site that captures the
//! argument, never re-dispatched at render time.
//!
//! Container values (sequences, key-ordered mappings) implement [`Render`]
//! and recurse into the same per-shape functions for their elements.

use std::collections::BTreeMap;

/// Capability trait for custom and container values.
///
/// Implement this for a user type to make it formattable; the engine
/// invokes it by shared reference. The primitive shapes implement it too,
/// so container rendering recurses through one dispatcher.
pub trait Render {
    /// Produce the textual form of the value.
    fn render(&self) -> String;
}

/// Character shape: a single-character string.
pub fn render_char(c: char) -> String {
    c.to_string()
}

/// Signed integer shape: canonical base-10 decimal.
pub fn render_int(v: i64) -> String {
    v.to_string()
}

/// Unsigned integer shape: canonical base-10 decimal.
pub fn render_uint(v: u64) -> String {
    v.to_string()
}

/// Float shape: fixed conversion with six fractional digits.
///
/// The parsed specifier width/precision/type fields are not yet wired into
/// numeric rendering; this fixed conversion is the current behavior.
pub fn render_float(v: f64) -> String {
    format!("{v:.6}")
}

/// String shape: copied verbatim.
pub fn render_str(s: &str) -> String {
    s.to_owned()
}

/// Pointer shape: lowercase hex address with a `0x` prefix, no padding.
pub fn render_pointer(addr: usize) -> String {
    format!("0x{addr:x}")
}

macro_rules! impl_render {
    ($($t:ty => |$v:ident| $body:expr),* $(,)?) => {
        $(impl Render for $t {
            fn render(&self) -> String {
                let $v = *self;
                $body
            }
        })*
    };
}

impl_render! {
    char => |v| render_char(v),
    i8 => |v| render_int(i64::from(v)),
    i16 => |v| render_int(i64::from(v)),
    i32 => |v| render_int(i64::from(v)),
    i64 => |v| render_int(v),
    isize => |v| render_int(v as i64),
    u8 => |v| render_uint(u64::from(v)),
    u16 => |v| render_uint(u64::from(v)),
    u32 => |v| render_uint(u64::from(v)),
    u64 => |v| render_uint(v),
    usize => |v| render_uint(v as u64),
    f32 => |v| render_float(f64::from(v)),
    f64 => |v| render_float(v),
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl Render for str {
    fn render(&self) -> String {
        render_str(self)
    }
}

impl Render for String {
    fn render(&self) -> String {
        render_str(self)
    }
}

/// Ordered sequence: `vector( e1, e2, ..., en)`.
///
/// Elements are comma-space-joined with no trailing separator and no space
/// before the closing parenthesis. An empty sequence is `vector()`.
impl<T: Render> Render for [T] {
    fn render(&self) -> String {
        if self.is_empty() {
            return "vector()".to_owned();
        }
        let mut out = String::from("vector( ");
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&element.render());
        }
        out.push(')');
        out
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self) -> String {
        self.as_slice().render()
    }
}

/// Key-ordered mapping: `map( {k1, v1}, {k2, v2} )`.
///
/// Pairs are iterated in ascending key order, with a leading space before
/// the first brace and a trailing space before the closing parenthesis.
/// An empty mapping is `map()`.
impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn render(&self) -> String {
        if self.is_empty() {
            return "map()".to_owned();
        }
        let mut out = String::from("map(");
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(" {");
            out.push_str(&key.render());
            out.push_str(", ");
            out.push_str(&value.render());
            out.push('}');
        }
        out.push_str(" )");
        out
    }
}

#[cfg(test)]
mod tests;
