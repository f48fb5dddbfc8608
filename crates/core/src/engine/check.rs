//! Presence/non-emptiness gate.
//!
//! Used standalone and as the first step of validation. Emptiness is judged
//! on the whitespace-trimmed value regardless of the `trim_values` setting;
//! trimming for coercion is a separate concern handled by the validator.

use super::report_failure;
use crate::accessor::EnvAccessor;
use crate::error::VarError;
use crate::options::CheckOptions;
use crate::settings::Settings;

/// Check that `name` exists (and is non-blank unless allowed). Succeeds
/// trivially when `required` is false. All failures are raised as errors;
/// there is no failure return value.
pub(crate) fn check_var(
    env: &dyn EnvAccessor,
    settings: &Settings,
    name: &str,
    options: &CheckOptions,
) -> Result<(), VarError> {
    if !options.required {
        return Ok(());
    }

    let Some(raw) = env.get(name) else {
        return Err(report_failure(
            settings,
            env,
            VarError::missing(name, options.message.as_deref()),
        ));
    };

    if raw.trim().is_empty() && !options.allow_empty {
        return Err(report_failure(
            settings,
            env,
            VarError::empty(name, options.message.as_deref()),
        ));
    }

    Ok(())
}
