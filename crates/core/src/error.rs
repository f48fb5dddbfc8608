//! Error types for environment variable validation.
//!
//! Responsibilities:
//! - Define one variant per failure condition the checker and engine raise.
//! - Build default message templates and honor caller-supplied overrides.
//!
//! Does NOT handle:
//! - Verbose reporting or exit-on-error side effects (see `engine`).
//!
//! Invariants:
//! - Every message names the variable.
//! - Raw values never appear in messages except as the truncated echo in
//!   type-mismatch variants, to bound leakage from secret-like values.

use thiserror::Error;

use crate::constants::{VALUE_PREVIEW_ELLIPSIS, VALUE_PREVIEW_MAX_CHARS};
use crate::value::Value;

/// Errors raised while checking, validating, or coercing a variable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VarError {
    /// The variable is not present in the environment. The message is fully
    /// caller-overridable, so the template lives in the constructor.
    #[error("{message}")]
    Missing { name: String, message: String },

    /// The variable is present but blank after trimming.
    #[error("{message}")]
    Empty { name: String, message: String },

    #[error("environment variable {name} is not a valid boolean: '{preview}'")]
    InvalidBoolean { name: String, preview: String },

    #[error("environment variable {name} is not a valid integer: '{preview}'")]
    InvalidInteger { name: String, preview: String },

    #[error("environment variable {name} is not a valid number: '{preview}'")]
    InvalidNumber { name: String, preview: String },

    #[error("environment variable {name} does not match pattern {pattern}")]
    PatternMismatch { name: String, pattern: String },

    #[error("environment variable {name} must be at least {min} characters")]
    TooShort { name: String, min: usize },

    #[error("environment variable {name} must be no more than {max} characters")]
    TooLong { name: String, max: usize },

    /// The value is outside the allowed choice set. When the set is an
    /// enumerated list the message spells out the allowed values.
    #[error("{message}")]
    InvalidChoice { name: String, message: String },

    /// A custom predicate rejected the value. Carries no detail beyond the
    /// name so the value cannot leak through it.
    #[error("environment variable {name} failed custom validation")]
    CustomFailed { name: String },
}

impl VarError {
    /// The name of the variable this error is about.
    pub fn name(&self) -> &str {
        match self {
            VarError::Missing { name, .. }
            | VarError::Empty { name, .. }
            | VarError::InvalidBoolean { name, .. }
            | VarError::InvalidInteger { name, .. }
            | VarError::InvalidNumber { name, .. }
            | VarError::PatternMismatch { name, .. }
            | VarError::TooShort { name, .. }
            | VarError::TooLong { name, .. }
            | VarError::InvalidChoice { name, .. }
            | VarError::CustomFailed { name } => name,
        }
    }

    pub(crate) fn missing(name: &str, message: Option<&str>) -> Self {
        VarError::Missing {
            name: name.to_string(),
            message: message
                .map(str::to_string)
                .unwrap_or_else(|| format!("environment variable {name} is not defined")),
        }
    }

    pub(crate) fn empty(name: &str, message: Option<&str>) -> Self {
        VarError::Empty {
            name: name.to_string(),
            message: message
                .map(str::to_string)
                .unwrap_or_else(|| format!("environment variable {name} is empty")),
        }
    }

    pub(crate) fn invalid_boolean(name: &str, raw: &str) -> Self {
        VarError::InvalidBoolean {
            name: name.to_string(),
            preview: value_preview(raw),
        }
    }

    pub(crate) fn invalid_integer(name: &str, raw: &str) -> Self {
        VarError::InvalidInteger {
            name: name.to_string(),
            preview: value_preview(raw),
        }
    }

    pub(crate) fn invalid_number(name: &str, raw: &str) -> Self {
        VarError::InvalidNumber {
            name: name.to_string(),
            preview: value_preview(raw),
        }
    }

    pub(crate) fn invalid_choice_list(name: &str, allowed: &[Value]) -> Self {
        let listed = allowed
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        VarError::InvalidChoice {
            name: name.to_string(),
            message: format!("environment variable {name} must be one of: {listed}"),
        }
    }

    pub(crate) fn invalid_choice(name: &str) -> Self {
        VarError::InvalidChoice {
            name: name.to_string(),
            message: format!("environment variable {name} is not an allowed value"),
        }
    }
}

/// Truncated echo of a raw value for type-mismatch messages.
pub(crate) fn value_preview(raw: &str) -> String {
    if raw.chars().count() <= VALUE_PREVIEW_MAX_CHARS {
        raw.to_string()
    } else {
        let mut preview: String = raw.chars().take(VALUE_PREVIEW_MAX_CHARS).collect();
        preview.push_str(VALUE_PREVIEW_ELLIPSIS);
        preview
    }
}
