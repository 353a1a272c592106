use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Flattens a parameter struct into `(name, value)` pairs for a query string.
///
/// Absent values are skipped, booleans and numbers are stringified and lists
/// are joined with commas. Nested objects have no query representation and are
/// rejected.
pub fn to_query_params<T: Serialize>(
    context: &'static str,
    params: &T,
) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params)
        .map_err(|e| Error::invalid_argument(context, e.to_string()))?;

    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(Error::invalid_argument(
                context,
                format!("query parameters must be a struct, got {}", other),
            ));
        }
    };

    let mut pairs = Vec::with_capacity(fields.len());

    for (name, value) in fields {
        if let Some(value) = scalar(context, &name, value)? {
            pairs.push((name, value));
        }
    }

    Ok(pairs)
}

fn scalar(context: &'static str, name: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Array(items) => {
            let items = items
                .into_iter()
                .filter_map(|item| scalar(context, name, item).transpose())
                .collect::<Result<Vec<_>>>()?;

            Ok(Some(items.join(",")))
        }
        Value::Object(_) => Err(Error::invalid_argument(
            context,
            format!("query parameter `{}` cannot be an object", name),
        )),
    }
}
