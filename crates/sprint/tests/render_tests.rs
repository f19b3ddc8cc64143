//! Golden end-to-end renders through the public surface.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use sprint::{render, sprint, Argument, Render, INVALID_ARG};

#[test]
fn mixed_positional_arguments() {
    assert_eq!(sprint!("x={}, y={}", 1, 2), "x=1, y=2");
    assert_eq!(sprint!("{} + {} = {}", 1u8, 2i64, "three"), "1 + 2 = three");
}

#[test]
fn escaped_braces_round_trip() {
    assert_eq!(sprint!("{{a}}"), "{a}");
    assert_eq!(sprint!("{{}}"), "{}");
}

#[test]
fn missing_argument_renders_sentinel() {
    assert_eq!(sprint!("{}"), INVALID_ARG);
}

#[test]
fn sequence_argument() {
    assert_eq!(sprint!("v={}", vec![1, 2, 3]), "v=vector( 1, 2, 3)");
    assert_eq!(sprint!("v={}", Vec::<i32>::new()), "v=vector()");
}

#[test]
fn mapping_argument_in_ascending_key_order() {
    let map = BTreeMap::from([("b", 2), ("a", 1)]);
    assert_eq!(sprint!("m={}", map), "m=map( {a, 1}, {b, 2} )");
}

#[test]
fn float_argument_uses_fixed_conversion() {
    assert_eq!(sprint!("pi={}", 3.5f64), "pi=3.500000");
}

#[test]
fn char_and_string_arguments() {
    assert_eq!(sprint!("{}{}", 'a', "bc"), "abc");
    assert_eq!(sprint!("{}", String::from("owned")), "owned");
}

#[test]
fn pointer_argument() {
    let p: *const u8 = std::ptr::null();
    assert_eq!(sprint!("at {}", p), "at 0x0");
}

struct Hostname<'a>(&'a str, u16);

impl Render for Hostname<'_> {
    fn render(&self) -> String {
        format!("{}:{}", self.0, self.1)
    }
}

#[test]
fn custom_argument_through_explicit_capture() {
    let host = Hostname("localhost", 8080);
    let out = render("connect to {}", &[Argument::custom(&host)]);
    assert_eq!(out, "connect to localhost:8080");
}

#[test]
fn extra_arguments_are_ignored() {
    assert_eq!(sprint!("only {}", 1, 2, 3), "only 1");
}

#[test]
fn specifier_parser_is_reachable_through_the_reexport() {
    let spec = sprint::spec::PlaceholderSpec::parse("5$-08.3d");
    assert_eq!(spec.param(), Some(5));
    assert_eq!(spec.width().value(), Some(8));
}
