//! Shape checks over GraphQL `data` payloads.
//!
//! Each helper fails with [`FetchError::MalformedResponse`] naming the path
//! that did not have the expected shape.

use serde_json::{Map, Value};

use crate::error::FetchError;

/// Required object field.
pub(crate) fn object<'a>(
    parent: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Map<String, Value>, FetchError> {
    match parent.get(key) {
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(FetchError::malformed(format!("{path} is not an object"))),
        None => Err(FetchError::malformed(format!("{path} is missing"))),
    }
}

/// Required array field.
pub(crate) fn array<'a>(
    parent: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a [Value], FetchError> {
    match parent.get(key) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(FetchError::malformed(format!("{path} is not an array"))),
        None => Err(FetchError::malformed(format!("{path} is missing"))),
    }
}

/// The transport's `data` value as an object.
pub(crate) fn data_object(data: &Value) -> Result<&Map<String, Value>, FetchError> {
    data.as_object()
        .ok_or_else(|| FetchError::malformed("data is not an object"))
}

/// Optional string field; anything but a string counts as absent.
pub(crate) fn opt_str(parent: &Map<String, Value>, key: &str) -> Option<String> {
    parent.get(key).and_then(Value::as_str).map(str::to_string)
}

/// The `node` object of a connection edge.
pub(crate) fn edge_node(edge: &Value) -> Option<&Map<String, Value>> {
    edge.get("node").and_then(Value::as_object)
}
