#![allow(missing_docs)]
#![allow(clippy::needless_raw_string_hashes)]

use jsonvet::{Map, Value};

/// A settings file the way a build tool might write one.
pub const CONFIG: &str = r#"
{
    "package": {
        "name": "widget",
        "version": "1.4.0",
        "authors": ["Ada", "Grace"]
    },
    "build": {
        "jobs": 8,
        "opt_level": 2,
        "lto": false,
        "target_dir": null,
        "cache_ratio": 0.875
    },
    "features": {
        "default": ["std"],
        "std": [],
        "serde": ["dep:serde"]
    },
    "notes": "tab\tand quote\" and \u00e9",
    "limits": [-1, 0, 1e3, 2.5E-2, 123456789012]
}
"#;

/// Documents both this crate and serde_json accept.
pub const VALID: &[&str] = &[
    "{}",
    "[]",
    r#"[null, true, false]"#,
    r#"{"a": {"b": {"c": [1, 2, 3]}}}"#,
    r#"[0, -1, 9223372036854775807, -9223372036854775808]"#,
    r#"[0.5, -2.25, 1e10, 1E-3, 6.02e+23]"#,
    r#"["", "plain", "esc \n \t \" \\ \/", "\u0041\u00DF"]"#,
    r#"{"z": 1, "y": 2, "x": 3}"#,
    r#"[[], {}, [[]], {"k": {}}]"#,
    "\n\t[ 1 ,\r\n 2 ]\n",
];

/// Documents both reject.
pub const INVALID: &[&str] = &[
    "[1,]",
    r#"{"a":1,}"#,
    "[01]",
    "[1.]",
    "[.5]",
    "[+1]",
    "[1e]",
    r#"["\x"]"#,
    r#"["\u12G4"]"#,
    r#"["open]"#,
    "[NaN]",
    "[Infinity]",
    "{'a': 1}",
    r#"{"a" 1}"#,
    "[1 2]",
    "[] []",
    r#"{"a":1} extra"#,
    "[",
    "",
];

/// Converts a serde_json value, keeping the integer/float split.
pub fn from_serde(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().expect("finite number")),
        },
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => Value::Array(items.iter().map(from_serde).collect()),
        serde_json::Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), from_serde(v)))
                .collect::<Map>(),
        ),
    }
}
