use rstest::rstest;

use crate::{Map, Value, parse};

fn obj<const N: usize>(pairs: [(&str, Value); N]) -> Value {
    Value::Object(pairs.into_iter().map(|(k, v)| (k.to_owned(), v)).collect::<Map>())
}

#[test]
fn nested_document() {
    let src = r#"
        {
            "name": "widget",
            "count": 3,
            "ratio": 0.75,
            "tags": ["a", "b"],
            "dims": {"w": 1e3, "h": -2},
            "active": true,
            "parent": null
        }
    "#;
    assert_eq!(
        parse(src).unwrap(),
        obj([
            ("name", "widget".into()),
            ("count", Value::Int(3)),
            ("ratio", Value::Float(0.75)),
            ("tags", Value::Array(vec!["a".into(), "b".into()])),
            ("dims", obj([("w", Value::Float(1000.0)), ("h", Value::Int(-2))])),
            ("active", Value::Bool(true)),
            ("parent", Value::Null),
        ])
    );
}

#[rstest]
#[case("[0]", Value::Int(0))]
#[case("[-0]", Value::Int(0))]
#[case("[10]", Value::Int(10))]
#[case("[-0.0]", Value::Float(-0.0))]
#[case("[1.0]", Value::Float(1.0))]
#[case("[1E2]", Value::Float(100.0))]
#[case("[2e-1]", Value::Float(0.2))]
#[case("[1.5e+1]", Value::Float(15.0))]
fn numbers_split_on_spelling(#[case] src: &str, #[case] expected: Value) {
    assert_eq!(parse(src).unwrap(), Value::Array(vec![expected]));
}

#[rstest]
#[case(r#"["\u0041"]"#, "A")]
#[case(r#"["tab\there"]"#, "tab\there")]
#[case(r#"["\/\\\""]"#, "/\\\"")]
#[case(r#"["😀"]"#, "😀")]
#[case(r#"["\ud83d\ude00"]"#, "\u{FFFD}\u{FFFD}")]
fn strings_in_arrays(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(parse(src).unwrap(), Value::Array(vec![expected.into()]));
}

#[test]
fn escaped_keys_are_decoded() {
    let value = parse(r#"{"\u006bey": 1}"#).unwrap();
    assert_eq!(value.get("key"), Some(&Value::Int(1)));
}

#[test]
fn duplicate_keys_last_write_wins() {
    assert_eq!(
        parse(r#"{"a":1,"a":2}"#).unwrap(),
        obj([("a", Value::Int(2))])
    );
}

#[test]
fn from_str_matches_parse() {
    let src = r#"[{"x": [true, false]}, "y"]"#;
    assert_eq!(src.parse::<Value>().unwrap(), parse(src).unwrap());
}

#[test]
fn reparsing_is_deterministic() {
    let src = r#"{"b": [1, 2.0, "three"], "a": {"nested": null}}"#;
    let first = parse(src).unwrap();
    for _ in 0..10 {
        assert_eq!(parse(src).unwrap(), first);
    }
}
