use std::collections::BTreeMap;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn char_shape() {
    assert_eq!(render_char('a'), "a");
    assert_eq!(render_char('é'), "é");
}

#[test]
fn integer_shapes() {
    assert_eq!(render_int(0), "0");
    assert_eq!(render_int(-42), "-42");
    assert_eq!(render_int(i64::MIN), "-9223372036854775808");
    assert_eq!(render_uint(u64::MAX), "18446744073709551615");
}

#[test]
fn float_shape_is_fixed_six_digits() {
    assert_eq!(render_float(1.5), "1.500000");
    assert_eq!(render_float(-0.25), "-0.250000");
    assert_eq!(render_float(0.0), "0.000000");
}

#[test]
fn string_shape_is_verbatim() {
    assert_eq!(render_str(""), "");
    assert_eq!(render_str("a{b}c"), "a{b}c");
}

#[test]
fn pointer_shape_is_unpadded_lowercase_hex() {
    assert_eq!(render_pointer(0), "0x0");
    assert_eq!(render_pointer(0xDEAD), "0xdead");
}

#[test]
fn primitive_render_impls_match_shape_functions() {
    assert_eq!(3i8.render(), "3");
    assert_eq!(3u16.render(), "3");
    assert_eq!((-3isize).render(), "-3");
    assert_eq!(1.5f32.render(), "1.500000");
    assert_eq!('x'.render(), "x");
    assert_eq!("s".render(), "s");
    assert_eq!(String::from("s").render(), "s");
}

#[test]
fn sequence_rendering() {
    assert_eq!(vec![1, 2, 3].render(), "vector( 1, 2, 3)");
    assert_eq!(vec![7].render(), "vector( 7)");
    assert_eq!(Vec::<i32>::new().render(), "vector()");
}

#[test]
fn nested_sequence_recurses() {
    let nested = vec![vec![1, 2], vec![]];
    assert_eq!(nested.render(), "vector( vector( 1, 2), vector())");
}

#[test]
fn mapping_rendering_in_key_order() {
    let map = BTreeMap::from([("b", 2), ("a", 1)]);
    assert_eq!(map.render(), "map( {a, 1}, {b, 2} )");
}

#[test]
fn mapping_single_pair() {
    let map = BTreeMap::from([("k", 1)]);
    assert_eq!(map.render(), "map( {k, 1} )");
}

#[test]
fn empty_mapping() {
    assert_eq!(BTreeMap::<String, i64>::new().render(), "map()");
}

#[test]
fn mapping_of_sequences_recurses() {
    let map = BTreeMap::from([("xs", vec![1, 2])]);
    assert_eq!(map.render(), "map( {xs, vector( 1, 2)} )");
}
