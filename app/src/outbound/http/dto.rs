//! Response envelope decoding.
//!
//! The backend is inconsistent about envelopes: lists arrive bare or wrapped
//! under a resource key (`categories`, `contacts`, `properties`) or `data`,
//! and single records arrive bare or wrapped under `user`, `vendor`, or
//! `data`. These helpers accept every shape and decode into domain types in
//! one pass.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::ports::{ApiError, CheckoutOrder};

const DATA_KEY: &str = "data";

fn parse(body: &[u8]) -> Result<Value, ApiError> {
    serde_json::from_slice(body)
        .map_err(|error| ApiError::decode(format!("invalid JSON payload: {error}")))
}

fn into_domain<T: DeserializeOwned>(value: Value, what: &str) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|error| ApiError::decode(format!("invalid {what}: {error}")))
}

fn take_wrapped(map: &mut Map<String, Value>, keys: &[&str]) -> Option<Value> {
    keys.iter()
        .chain(std::iter::once(&DATA_KEY))
        .find_map(|key| map.remove(*key))
}

/// Decode a list sent bare or wrapped under `key` (or `data`). A wrapper
/// without the list decodes as empty.
pub(super) fn decode_list<T: DeserializeOwned>(body: &[u8], key: &str) -> Result<Vec<T>, ApiError> {
    let items = match parse(body)? {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match take_wrapped(&mut map, &[key]) {
            Some(Value::Null) | None => Value::Array(Vec::new()),
            Some(items) => items,
        },
        other => {
            return Err(ApiError::decode(format!(
                "expected a {key} list, found {}",
                kind(&other)
            )));
        }
    };
    into_domain(items, key)
}

/// Decode one record sent bare or wrapped under one of `keys` (or `data`).
pub(super) fn decode_record<T: DeserializeOwned>(
    body: &[u8],
    keys: &[&str],
    what: &str,
) -> Result<T, ApiError> {
    let record = match parse(body)? {
        Value::Object(mut map) => match take_wrapped(&mut map, keys) {
            Some(record @ Value::Object(_)) => record,
            _ => Value::Object(map),
        },
        other => {
            return Err(ApiError::decode(format!(
                "expected a {what} object, found {}",
                kind(&other)
            )));
        }
    };
    into_domain(record, what)
}

/// Decode the capture response's `order`, absent when the backend sent none.
pub(super) fn decode_order(body: &[u8]) -> Result<Option<CheckoutOrder>, ApiError> {
    match parse(body)? {
        Value::Object(mut map) => match map.remove("order") {
            Some(Value::Null) | None => Ok(None),
            Some(order) => into_domain(order, "order").map(Some),
        },
        _ => Ok(None),
    }
}

/// Read the verification response's `success` flag; anything else is false.
pub(super) fn decode_success(body: &[u8]) -> Result<bool, ApiError> {
    let value = parse(body)?;
    Ok(value
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false))
}

/// Pull the human-readable message from an error body: `detail`, then
/// `message`, then `error`. Empty when none is a non-blank string.
pub(super) fn error_message(body: &[u8]) -> String {
    let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) else {
        return String::new();
    };
    ["detail", "message", "error"]
        .iter()
        .filter_map(|key| map.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_owned)
        .unwrap_or_default()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
