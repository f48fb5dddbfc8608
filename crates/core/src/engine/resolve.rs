//! Default resolution: decide whether a missing or blank variable yields a
//! default, nothing, or full validation.
//!
//! Invariants:
//! - Never errors for a merely-missing variable that has a default or is
//!   explicitly optional; every other condition propagates unchanged.
//! - Supplying a default implies the variable is optional unless `required`
//!   says otherwise.

use super::validate::{coerce_text, effective_type, validate_var};
use crate::accessor::EnvAccessor;
use crate::error::VarError;
use crate::options::VarOptions;
use crate::settings::Settings;
use crate::value::{Value, VarType};

/// Resolve `name`: `Ok(Some(value))` for a validated or defaulted value,
/// `Ok(None)` when the variable is optional and nothing applies.
pub(crate) fn resolve_var(
    env: &dyn EnvAccessor,
    settings: &Settings,
    name: &str,
    options: &VarOptions,
) -> Result<Option<Value>, VarError> {
    // Absent means no value at all, or blank after trimming.
    let absent = env
        .get(name)
        .is_none_or(|raw| raw.trim().is_empty());
    let required = options.required.unwrap_or(options.default.is_none());

    if absent && !required {
        return Ok(resolve_default(settings, options));
    }

    validate_var(env, settings, name, options).map(Some)
}

/// Produce the default value, if one was supplied, coerced toward the
/// requested type. Coercion failures fall back to the raw default
/// uninterpreted.
fn resolve_default(settings: &Settings, options: &VarOptions) -> Option<Value> {
    let default = options.default.clone()?;
    let ty = effective_type(settings, options);

    // A default whose shape already matches the requested type is returned
    // unchanged; string defaults still get the configured trim below.
    if default.type_of() == ty && ty != VarType::String {
        return Some(default);
    }

    let text = default.to_string();
    let text = if settings.trim_values {
        text.trim().to_string()
    } else {
        text
    };
    let strict = options.boolean_strict.unwrap_or(settings.boolean_strict);

    match coerce_text("", &text, ty, strict) {
        Ok(value) => Some(value),
        Err(_) => Some(default),
    }
}
