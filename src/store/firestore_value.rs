//! Firestore typed-value codec.
//!
//! Firestore's REST API wraps every field in a one-key object naming its
//! type (`{"stringValue": "x"}`). This module converts between that shape and
//! plain JSON. Top-level `createdAt`/`updatedAt` strings are written as
//! native timestamps so the server-side `orderBy` sorts chronologically;
//! timestamps read back become RFC 3339 strings.

use serde_json::{Map, Number, Value, json};

use super::{CREATED_AT_FIELD, StoreError, UPDATED_AT_FIELD};

const TIMESTAMP_FIELDS: [&str; 2] = [CREATED_AT_FIELD, UPDATED_AT_FIELD];

/// Encode plain top-level fields into a Firestore `fields` object.
#[must_use]
pub fn encode_fields(fields: &Map<String, Value>) -> Value {
    let encoded: Map<String, Value> = fields
        .iter()
        .map(|(name, value)| {
            let typed = match value {
                Value::String(s) if TIMESTAMP_FIELDS.contains(&name.as_str()) => json!({ "timestampValue": s }),
                other => encode_value(other),
            };
            (name.clone(), typed)
        })
        .collect();
    Value::Object(encoded)
}

#[must_use]
pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields_nested(map) } }),
    }
}

fn encode_fields_nested(map: &Map<String, Value>) -> Value {
    Value::Object(map.iter().map(|(k, v)| (k.clone(), encode_value(v))).collect())
}

/// Decode a Firestore `fields` object into plain JSON fields.
///
/// A missing `fields` object (an empty document) decodes to an empty map.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] if any value has an unknown or malformed type.
pub fn decode_fields(fields: Option<&Value>) -> Result<Map<String, Value>, StoreError> {
    let Some(fields) = fields else {
        return Ok(Map::new());
    };
    let object = fields
        .as_object()
        .ok_or_else(|| StoreError::Decode("document fields is not an object".into()))?;
    object
        .iter()
        .map(|(name, typed)| Ok((name.clone(), decode_value(typed)?)))
        .collect()
}

/// Decode one typed Firestore value.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] if the value has an unknown or malformed type.
pub fn decode_value(typed: &Value) -> Result<Value, StoreError> {
    let object = typed
        .as_object()
        .ok_or_else(|| StoreError::Decode(format!("typed value is not an object: {typed}")))?;
    let Some((kind, inner)) = object.iter().next() else {
        return Err(StoreError::Decode("typed value is empty".into()));
    };

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" | "doubleValue" | "stringValue" | "timestampValue" | "referenceValue" | "bytesValue"
        | "geoPointValue" => Ok(inner.clone()),
        "integerValue" => decode_integer(inner),
        "arrayValue" => {
            let values = match inner.get("values") {
                Some(Value::Array(values)) => values.iter().map(decode_value).collect::<Result<Vec<_>, _>>()?,
                Some(other) => return Err(StoreError::Decode(format!("arrayValue.values is not an array: {other}"))),
                None => Vec::new(),
            };
            Ok(Value::Array(values))
        }
        "mapValue" => Ok(Value::Object(decode_fields(inner.get("fields"))?)),
        other => Err(StoreError::Decode(format!("unsupported value type: {other}"))),
    }
}

fn decode_integer(inner: &Value) -> Result<Value, StoreError> {
    match inner {
        Value::String(s) => s
            .parse::<i64>()
            .map(|i| Value::Number(Number::from(i)))
            .map_err(|e| StoreError::Decode(format!("bad integerValue {s:?}: {e}"))),
        Value::Number(_) => Ok(inner.clone()),
        other => Err(StoreError::Decode(format!("bad integerValue: {other}"))),
    }
}

#[cfg(test)]
#[path = "firestore_value_test.rs"]
mod tests;
