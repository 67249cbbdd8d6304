//! Decoder implementation

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::type_name;

/// A typed record schema the decoder may target.
///
/// Implemented explicitly for every API resource type in [`crate::models`];
/// the set of implementors is the registry of decodable shapes.
pub trait Record: DeserializeOwned + Send + 'static {}

impl Record for String {}

/// Decode a payload holding a single JSON object.
///
/// An empty body or the literal `null` means the resource is absent and
/// yields `Ok(None)`.
pub fn decode_one<T: Record>(payload: &[u8]) -> Result<Option<T>> {
    let value = match parse(payload)? {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    if !value.is_object() {
        return Err(Error::decode(format!(
            "expected JSON object for {}, got {}",
            short_name::<T>(),
            kind(&value)
        )));
    }

    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| Error::decode(format!("{}: {e}", short_name::<T>())))
}

/// Decode a payload holding a JSON array of records.
///
/// An empty body or the literal `null` yields an empty list. `null`
/// elements are skipped; any other element that does not fit `T` fails the
/// whole call.
pub fn decode_list<T: Record>(payload: &[u8]) -> Result<Vec<T>> {
    let items = match parse(payload)? {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(Error::decode(format!(
                "expected JSON array of {}, got {}",
                short_name::<T>(),
                kind(&other)
            )))
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if item.is_null() {
            continue;
        }
        let record = serde_json::from_value(item).map_err(|e| {
            Error::decode(format!("{} at index {index}: {e}", short_name::<T>()))
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Parse the payload, treating a blank body as no value at all
fn parse(payload: &[u8]) -> Result<Option<Value>> {
    if payload.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(payload)
        .map(Some)
        .map_err(|e| Error::decode(format!("invalid JSON: {e}")))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn short_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
