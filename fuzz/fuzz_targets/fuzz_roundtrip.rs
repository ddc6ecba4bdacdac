#![no_main]
use arbitrary::Arbitrary;
use jsonvet::{ParserOptions, Value as VetValue, parse_with_options};
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value};

const MAX_DEPTH: usize = 64;

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(22)?;
        let value = match node_type {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3 => Value::Number(u.arbitrary::<i64>()?.into()),
            4..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=21 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

/// Deepest level at which the parser will request a value, given the root is
/// requested at level 0 and container members one level below.
fn deepest(value: &Value, at: usize) -> usize {
    match value {
        Value::Array(items) => items.iter().map(|v| deepest(v, at + 1)).max().unwrap_or(at),
        Value::Object(map) => map.values().map(|v| deepest(v, at + 1)).max().unwrap_or(at),
        _ => at,
    }
}

fn same(ours: &VetValue, theirs: &Value) -> bool {
    match (ours, theirs) {
        (VetValue::Null, Value::Null) => true,
        (VetValue::Bool(a), Value::Bool(b)) => a == b,
        (VetValue::Int(a), Value::Number(b)) => b.as_i64() == Some(*a),
        #[allow(clippy::float_cmp)]
        (VetValue::Float(a), Value::Number(b)) => b.is_f64() && b.as_f64() == Some(*a),
        (VetValue::String(a), Value::String(b)) => a == b,
        (VetValue::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same(x, y))
        }
        (VetValue::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && b.iter().all(|(k, y)| a.get(k).is_some_and(|x| same(x, y)))
        }
        _ => false,
    }
}

fuzz_target!(|value: ArbitraryValue| {
    let value = value.0;
    if !(value.is_array() || value.is_object()) {
        return;
    }
    let Ok(text) = serde_json::to_string(&value) else {
        return;
    };

    let result = parse_with_options(
        &text,
        ParserOptions {
            max_depth: MAX_DEPTH,
        },
    );
    if deepest(&value, 0) >= MAX_DEPTH {
        assert!(result.is_err(), "{text}");
        return;
    }
    match result {
        Ok(parsed) => assert!(same(&parsed, &value), "{text}: {parsed:?}"),
        Err(err) => panic!("{text}: {err}"),
    }
});
