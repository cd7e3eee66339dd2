//! Lenient serde adapters for scoring-service payloads.
//!
//! The service echoes every task back with whatever field types the user typed
//! into the JSON preview, so a hand-edited `"importance": "7"` or
//! `"title": 42` must not sink the whole response. These helpers accept any
//! JSON value and coerce it into the closest useful shape, falling back to
//! `None` or empty rather than failing.
//!
//! Use with `#[serde(default, deserialize_with = "lenient_serde::...")]`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Any scalar rendered as text; `null` becomes `None`.
///
/// Strings pass through unchanged, numbers and booleans use their JSON
/// rendering, and arrays/objects are kept as compact JSON.
pub fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(value_to_text(&Value::deserialize(d)?))
}

/// A number, or a string holding one, as `f64`. Anything else is `None`.
pub fn opt_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(value_to_f64(&Value::deserialize(d)?))
}

/// An integer, or a string holding one, as `i64`.
///
/// Whole floats such as `7.0` are accepted; fractional values are `None`.
pub fn opt_i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    Ok(value_to_i64(&Value::deserialize(d)?))
}

/// An array of scalars as strings. A non-array value yields an empty list.
pub fn text_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(value_to_text_list(&Value::deserialize(d)?))
}

/// Any value that decodes as `T`; a wrong shape is `None` instead of an error.
pub fn opt_shape<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(Value::deserialize(d)?).ok())
}

#[must_use]
pub fn value_to_text_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(value_to_text).collect(),
        _ => Vec::new(),
    }
}

/// An array of objects decoded as `T`.
///
/// A missing or non-array value is an empty list. An element that is not an
/// object, or that does not decode, becomes `T::default()` so the list keeps
/// its length and order.
#[must_use]
pub fn value_to_object_list<T>(value: Option<Value>) -> Vec<T>
where
    T: DeserializeOwned + Default,
{
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(_) => serde_json::from_value(item).unwrap_or_default(),
            _ => T::default(),
        })
        .collect()
}

/// An array of arrays of scalars. Non-array members are skipped.
#[must_use]
pub fn value_to_nested_text_list(value: Option<&Value>) -> Vec<Vec<String>> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| item.is_array())
            .map(value_to_text_list)
            .collect(),
        _ => Vec::new(),
    }
}

#[must_use]
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => serde_json::to_string(other).ok(),
    }
}

#[must_use]
pub fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|v| v.fract() == 0.0).map(|v| v as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
