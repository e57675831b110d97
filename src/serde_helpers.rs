//! Response deserialization.
//!
//! With the `tracing` feature enabled, fields the typed model does not capture are reported at
//! `warn` level so schema drift in the Data Product Exchange API shows up in logs instead of being
//! silently dropped. Deserialization failures are reported with the JSON path that failed.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserializes `value` into `T`, logging every unknown field together with its value.
#[cfg(feature = "tracing")]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    use std::any::type_name;

    tracing::trace!(type_name = %type_name::<T>(), json = %value, "deserializing JSON");

    let original = value.clone();
    let mut unknown: Vec<String> = Vec::new();

    let result: T = serde_ignored::deserialize(value, |path| unknown.push(path.to_string()))
        .inspect_err(|_| {
            // serde_ignored does not know where it failed, a second pass does
            let retry: Result<T, _> = serde_path_to_error::deserialize(original.clone());
            let Err(err) = retry else {
                return;
            };
            let path = err.path().to_string();

            tracing::error!(
                type_name = %type_name::<T>(),
                path = %path,
                value = %describe(lookup_value(&original, &path)),
                error = %err.inner(),
                "deserialization failed"
            );
        })?;

    for path in unknown {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            value = %describe(lookup_value(&original, &path)),
            "unknown field in API response"
        );
    }

    Ok(result)
}

#[cfg(not(feature = "tracing"))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Resolves a path as printed by `serde_ignored` (`a.?.b.0`) or `serde_path_to_error`
/// (`a.b[0]`) against `value`.
#[cfg(feature = "tracing")]
fn lookup_value<'value>(value: &'value Value, path: &str) -> Option<&'value Value> {
    path_segments(path).try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
        _ => None,
    })
}

#[cfg(feature = "tracing")]
fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(['.', '[', ']'])
        .filter(|segment| !segment.is_empty() && *segment != "?")
}

#[cfg(feature = "tracing")]
fn describe(value: Option<&Value>) -> String {
    value.map_or_else(|| "<unable to retrieve>".to_owned(), Value::to_string)
}
