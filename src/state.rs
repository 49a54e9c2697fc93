//! Invariant guards: the [`crate::inputs`] twins for conditions that a
//! caller cannot have caused. Failing one means internal state is broken.

use std::fmt::Debug;
use std::fmt::Display;

use crate::error::StateError;
use crate::format::sprintf;

/// Returns `value` unwrapped if present, otherwise fails describing the
/// missing value.
pub fn not_null<T>(value: Option<T>, desc: &str) -> Result<T, StateError> {
    value.ok_or_else(|| StateError::NullValue(desc.to_string()))
}

pub fn is_true(cond: bool, msg: &str) -> Result<(), StateError> {
    if cond {
        Ok(())
    } else {
        Err(StateError::Failed(msg.to_string()))
    }
}

pub fn is_false(cond: bool, msg: &str) -> Result<(), StateError> {
    is_true(!cond, msg)
}

/// Checks two values for equality, reporting both on mismatch.
pub fn equal<T>(expected: &T, actual: &T) -> Result<(), StateError>
where
    T: PartialEq + Debug,
{
    if expected == actual {
        Ok(())
    } else {
        Err(StateError::NotEqual {
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        })
    }
}

/// Builds a free-form state failure. Returns the error rather than raising it.
pub fn fail(msg: impl Into<String>) -> StateError {
    StateError::Failed(msg.into())
}

/// Like [`fail`], with the message built through [`sprintf`].
pub fn failf(template: &str, args: &[&dyn Display]) -> StateError {
    StateError::Failed(sprintf(template, args))
}
