// SPDX-FileCopyrightText: 2026 Talkline Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Structural JSON Converter
//!
//! One-way conversion from the bridge's JSON wrapper representation
//! ([`serde_json::Value`]) into the attribute containers the vendor SDK
//! consumes. Absent (`null`) leaves are dropped entirely rather than kept
//! as explicit nulls, so callers must not rely on key presence meaning
//! "was present in input".

use std::collections::HashMap;

use serde_json::{Map, Number, Value};

/// Attribute mapping in the vendor SDK's native representation.
pub type AttributeMap = HashMap<String, AttributeValue>;

/// A single attribute value in the vendor SDK's native representation.
///
/// Tagged union over the JSON scalar and container shapes; `null` has no
/// image here.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Boolean attribute.
    Bool(bool),
    /// Integer attribute (any JSON number representable as `i64`).
    Int(i64),
    /// Floating-point attribute.
    Float(f64),
    /// String attribute.
    String(String),
    /// Ordered list of attributes.
    List(Vec<AttributeValue>),
    /// Nested attribute mapping.
    Map(AttributeMap),
}

/// Converts a bridge JSON object into a native attribute map.
///
/// Returns `None` when no object was provided, which is distinct from an
/// empty object (`Some` of an empty map). Keys whose value converts to
/// nothing are omitted.
pub fn attributes_from_json(object: Option<&Map<String, Value>>) -> Option<AttributeMap> {
    let object = object?;
    let mut attributes = AttributeMap::with_capacity(object.len());
    for (key, value) in object {
        if let Some(converted) = attribute_from_json(value) {
            attributes.insert(key.clone(), converted);
        }
    }
    Some(attributes)
}

/// Converts a single bridge JSON value, recursing through containers.
///
/// `null` converts to `None`; everything else passes through.
pub fn attribute_from_json(value: &Value) -> Option<AttributeValue> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(AttributeValue::Bool(*b)),
        Value::Number(n) => Some(number_from_json(n)),
        Value::String(s) => Some(AttributeValue::String(s.clone())),
        Value::Array(items) => Some(AttributeValue::List(attribute_list_from_json(items))),
        Value::Object(object) => attributes_from_json(Some(object)).map(AttributeValue::Map),
    }
}

/// Converts a bridge JSON array into a native attribute list.
///
/// Absent elements are skipped, not replaced with placeholders; the order
/// of the remaining elements is preserved.
pub fn attribute_list_from_json(items: &[Value]) -> Vec<AttributeValue> {
    items.iter().filter_map(attribute_from_json).collect()
}

fn number_from_json(number: &Number) -> AttributeValue {
    if let Some(i) = number.as_i64() {
        AttributeValue::Int(i)
    } else {
        AttributeValue::Float(number.as_f64().unwrap_or(0.0))
    }
}
