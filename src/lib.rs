//! Argument and state guards with printf-style error formatting.

pub mod error;
pub mod format;
pub mod inputs;
pub mod state;

pub use error::{StateError, ValidationError};
pub use format::{format_error, sprintf};
pub use inputs::{has_key, not_null};
