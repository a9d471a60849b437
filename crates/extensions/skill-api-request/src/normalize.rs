//! Parameter normalization.
//!
//! The LLM produces the argument object, so every field may be missing or of
//! the wrong shape. Normalization never fails: anything that is not a usable
//! mapping becomes an empty one.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use wingskills_protocols::Diagnostics;

use crate::executor::RequestFailure;
use crate::headers::merge_default_headers;

/// Headers, query parameters and body resolved from one invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRequest {
    pub headers: BTreeMap<String, String>,
    pub params: BTreeMap<String, String>,
    pub body: Map<String, Value>,
}

enum Field<'a> {
    Absent,
    Mapping(&'a Map<String, Value>),
    Malformed(&'static str),
}

impl<'a> Field<'a> {
    fn classify(value: Option<&'a Value>) -> Self {
        match value {
            Some(value) if is_truthy(value) => match value {
                Value::Object(map) => Field::Mapping(map),
                other => Field::Malformed(type_name(other)),
            },
            _ => Field::Absent,
        }
    }
}

/// Empty containers, empty strings, zero, `false` and `null` count as not
/// supplied.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Resolve one mapping field, reporting what was found.
fn resolve<'a>(
    field: Field<'a>,
    label: &str,
    diagnostics: &Diagnostics,
) -> Option<&'a Map<String, Value>> {
    match field {
        Field::Mapping(map) => {
            diagnostics.info(format_args!(
                "Validated that {} returned from LLM is a dictionary.",
                label.to_lowercase()
            ));
            Some(map)
        }
        Field::Malformed(kind) => {
            diagnostics.info(format_args!(
                "{} returned from LLM is not a dictionary.  Type is {}",
                label, kind
            ));
            None
        }
        Field::Absent => None,
    }
}

/// Flatten a mapping into string pairs. Blank keys and `null` values are
/// dropped; non-string values use their compact JSON text.
fn stringify(map: Option<&Map<String, Value>>) -> BTreeMap<String, String> {
    let Some(map) = map else {
        return BTreeMap::new();
    };
    map.iter()
        .filter(|(key, value)| !key.trim().is_empty() && !value.is_null())
        .map(|(key, value)| {
            let rendered = value
                .as_str()
                .map(|s| s.to_string())
                .unwrap_or_else(|| value.to_string());
            (key.trim().to_string(), rendered)
        })
        .collect()
}

/// Normalize the argument object of one `send_api_request` call.
pub fn normalize(
    parameters: &Map<String, Value>,
    use_default_headers: bool,
    diagnostics: &Diagnostics,
) -> NormalizedRequest {
    let mut headers = stringify(resolve(
        Field::classify(parameters.get("headers")),
        "Headers",
        diagnostics,
    ));

    if use_default_headers {
        merge_default_headers(&mut headers);
        diagnostics.info(format_args!(
            "Default headers being used for API call: {:?}",
            headers
        ));
    }

    let params = stringify(resolve(
        Field::classify(parameters.get("params")),
        "Params",
        diagnostics,
    ));

    let body = match Field::classify(parameters.get("data")) {
        Field::Absent => resolve(Field::classify(parameters.get("body")), "Body", diagnostics),
        data => resolve(data, "Data", diagnostics),
    }
    .cloned()
    .unwrap_or_default();

    NormalizedRequest {
        headers,
        params,
        body,
    }
}

/// Fetch a required string argument such as `url` or `method`.
pub(crate) fn required_str<'a>(
    parameters: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a str, RequestFailure> {
    match parameters.get(key) {
        None | Some(Value::Null) => Err(RequestFailure::Unexpected(format!(
            "missing required parameter '{}'",
            key
        ))),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(RequestFailure::Unexpected(format!(
            "parameter '{}' must be a string, got {}",
            key,
            type_name(other)
        ))),
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
