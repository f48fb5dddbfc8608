//! Process-wide settings and their explicit merge operation.
//!
//! Responsibilities:
//! - Hold the live configuration affecting default engine/loader behavior.
//! - Merge caller overrides shallowly: unspecified fields keep their value.
//!
//! Does NOT handle:
//! - Ownership of the live instance (see `session` — there is no hidden
//!   global; the composition root owns exactly one `Settings`).
//!
//! Invariants:
//! - Reconfiguration is merge, not replace; nothing resets automatically.

/// Live configuration for a session. Created once with fixed defaults and
/// mutated only through [`Settings::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Route failure messages through the log side channel.
    pub verbose: bool,
    /// Ask the host to terminate with status 1 before a failure is raised.
    pub exit_on_error: bool,
    /// Ordered `.env` paths consulted when the loader gets no explicit paths.
    pub env_file_paths: Vec<String>,
    /// Trim whitespace from raw values before validation.
    pub trim_values: bool,
    /// Master switch for type coercion; when off, values stay strings.
    pub coerce_types: bool,
    /// Accept only the literals `true`/`false` when coercing booleans.
    pub boolean_strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbose: false,
            exit_on_error: false,
            env_file_paths: Vec::new(),
            trim_values: true,
            coerce_types: true,
            boolean_strict: false,
        }
    }
}

impl Settings {
    /// Shallow-merge `overrides` into the live settings. `None` fields are
    /// untouched.
    pub fn apply(&mut self, overrides: SettingsOverrides) {
        if let Some(verbose) = overrides.verbose {
            self.verbose = verbose;
        }
        if let Some(exit_on_error) = overrides.exit_on_error {
            self.exit_on_error = exit_on_error;
        }
        if let Some(env_file_paths) = overrides.env_file_paths {
            self.env_file_paths = env_file_paths;
        }
        if let Some(trim_values) = overrides.trim_values {
            self.trim_values = trim_values;
        }
        if let Some(coerce_types) = overrides.coerce_types {
            self.coerce_types = coerce_types;
        }
        if let Some(boolean_strict) = overrides.boolean_strict {
            self.boolean_strict = boolean_strict;
        }
    }
}

/// Partial settings for [`Settings::apply`]; every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub verbose: Option<bool>,
    pub exit_on_error: Option<bool>,
    pub env_file_paths: Option<Vec<String>>,
    pub trim_values: Option<bool>,
    pub coerce_types: Option<bool>,
    pub boolean_strict: Option<bool>,
}
