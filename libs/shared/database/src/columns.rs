//! Key mapping between the camelCase wire/document shape of a record and the
//! snake_case column names of its relational table. Only top-level keys are
//! touched since records are flat.

use serde_json::{Map, Value};

pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn rename_keys(value: Value, rename: fn(&str) -> String) -> Value {
    match value {
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, field)| (rename(&key), field))
                .collect::<Map<_, _>>(),
        ),
        other => other,
    }
}

/// Record JSON to a row body.
pub fn to_columns(value: Value) -> Value {
    rename_keys(value, to_snake_case)
}

/// Row returned by the store back to record JSON.
pub fn from_columns(value: Value) -> Value {
    rename_keys(value, to_camel_case)
}
