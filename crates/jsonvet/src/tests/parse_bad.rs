use rstest::rstest;

use crate::{ParserOptions, parse, parse_with_options};

#[rstest]
#[case("01", "Leading zeros are not allowed in numbers")]
#[case("1.", "Invalid number format: expected digit after '.'")]
#[case("1e", "Invalid number format: expected digit in exponent")]
#[case("[-]", "Invalid number format: expected digit after '-'")]
#[case(r#"["abc"#, "Unterminated string")]
#[case(r#"["\q"]"#, "Invalid escape sequence '\\q'")]
#[case(r#"["\uZZZZ"]"#, "Invalid unicode escape character 'Z'")]
#[case("[#]", "Unexpected character: '#'")]
#[case("5", "a JSON payload should be an object or array, not a NUMBER")]
#[case(r#""A""#, "a JSON payload should be an object or array, not a STRING")]
#[case("", "a JSON payload should be an object or array, not a EOF")]
#[case("[1,]", "Unexpected token RBRACKET")]
#[case(r#"{"a" 1}"#, "Expected token COLON but got NUMBER")]
#[case("{null: 1}", "Object keys must be strings, not NULL")]
#[case(r#"{"a":1 "b":2}"#, "Expected ',' or '}' in object")]
#[case("[1 2]", "Expected ',' or ']' in array")]
#[case(r#"{"a":1} extra"#, "Extra data after valid JSON")]
#[case("[] []", "Extra data after valid JSON")]
fn messages(#[case] src: &str, #[case] message: &str) {
    let err = parse(src).expect_err("should fail");
    assert_eq!(err.message(), message, "for {src:?}");
    assert!(err.to_string().starts_with(message));
}

#[test]
fn kinds_are_disjoint() {
    let lexical = parse("[01]").unwrap_err();
    assert!(lexical.is_lexical() && !lexical.is_syntax());

    let syntax = parse("[1 2]").unwrap_err();
    assert!(syntax.is_syntax() && !syntax.is_lexical());
}

#[test]
fn position_points_at_the_problem() {
    let err = parse("{\n  \"a\": [1,\n        2,,\n  ]\n}").unwrap_err();
    assert_eq!(err.message(), "Unexpected token COMMA");
    assert_eq!((err.line, err.column), (3, 11));
    assert_eq!(err.to_string(), "Unexpected token COMMA at 3:11");
}

#[test]
fn depth_limit_message() {
    let options = ParserOptions { max_depth: 3 };
    let err = parse_with_options("[1,[2,[3,[4]]]]", options).unwrap_err();
    assert_eq!(err.to_string(), "Nesting too deep at 1:8");
}

#[test]
fn first_error_wins() {
    // The missing separator comes before the bad escape.
    let err = parse(r#"[1 2 "\x"]"#).unwrap_err();
    assert!(err.is_syntax());

    let err = parse(r#"["\x" 1 2]"#).unwrap_err();
    assert!(err.is_lexical());
}
