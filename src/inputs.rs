//! Argument guards. Each either hands the checked value back for inline
//! chaining or fails with a [`ValidationError`]; nothing is ever caught here.

use std::fmt::Display;

use serde_json::value::Index;
use serde_json::Value;

use crate::error::ValidationError;

/// Returns `value` unwrapped if present, otherwise fails naming the
/// offending parameter.
pub fn not_null<T>(value: Option<T>, name: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::NullParameter(name.to_string()))
}

/// Resolves `obj[key]` and returns a reference to the value.
///
/// A key mapped to null is treated the same as a missing key: the check is
/// on the resolved value, not on key presence. `key` may be an object key
/// (`&str`) or an array index (`usize`).
pub fn has_key<'a, K>(obj: &'a Value, key: K, obj_name: &str) -> Result<&'a Value, ValidationError>
where
    K: Index + Display,
{
    if obj.is_null() {
        return Err(ValidationError::NullParameter("obj".to_string()));
    }
    match obj.get(&key) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(ValidationError::MissingKey {
            object: obj_name.to_string(),
            key: key.to_string(),
        }),
    }
}

/// Builds a free-form argument failure. Returns the error rather than
/// raising it.
pub fn fail(msg: impl Into<String>) -> ValidationError {
    ValidationError::FailedRequirement(msg.into())
}
