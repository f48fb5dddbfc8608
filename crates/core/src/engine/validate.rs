//! Coercion and constraint checking.
//!
//! The pipeline runs in a fixed order and short-circuits on the first
//! failure: existence, trim, type coercion, pattern, length, choices,
//! custom predicate. Every failure passes through `report_failure` so the
//! verbose/exit-on-error side effects apply uniformly.

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::{check::check_var, report_failure};
use crate::accessor::EnvAccessor;
use crate::constants::{FALSE_WORDS, TRUE_WORDS};
use crate::error::VarError;
use crate::options::{CheckOptions, Choices, ValuePredicate, VarOptions};
use crate::settings::Settings;
use crate::value::{Value, VarType};

/// Validate `name` against `options`, returning the coerced value only if
/// every applicable step passed.
pub(crate) fn validate_var(
    env: &dyn EnvAccessor,
    settings: &Settings,
    name: &str,
    options: &VarOptions,
) -> Result<Value, VarError> {
    // Validation never accepts a blank variable, whatever the caller's
    // resolver options said.
    check_var(env, settings, name, &CheckOptions::default())?;

    let Some(raw) = env.get(name) else {
        // The namespace changed between the check and the read.
        return Err(report_failure(settings, env, VarError::missing(name, None)));
    };

    let text = if settings.trim_values {
        raw.trim().to_string()
    } else {
        raw
    };

    let ty = effective_type(settings, options);
    let strict = options.boolean_strict.unwrap_or(settings.boolean_strict);
    let value =
        coerce_text(name, &text, ty, strict).map_err(|err| report_failure(settings, env, err))?;

    if let Some(pattern) = &options.pattern {
        let text_form = value.to_string();
        if !pattern.matches(&text_form) {
            return Err(report_failure(
                settings,
                env,
                VarError::PatternMismatch {
                    name: name.to_string(),
                    pattern: pattern.source().to_string(),
                },
            ));
        }
    }

    // Length bounds only apply to string values.
    if let Value::Str(s) = &value {
        let len = s.chars().count();
        if let Some(min) = options.min_length
            && len < min
        {
            return Err(report_failure(
                settings,
                env,
                VarError::TooShort {
                    name: name.to_string(),
                    min,
                },
            ));
        }
        if let Some(max) = options.max_length
            && len > max
        {
            return Err(report_failure(
                settings,
                env,
                VarError::TooLong {
                    name: name.to_string(),
                    max,
                },
            ));
        }
    }

    if let Some(choices) = &options.choices {
        let allowed = match choices {
            Choices::List(list) => list.contains(&value),
            Choices::Predicate(predicate) => run_predicate(predicate, &value),
        };
        if !allowed {
            let err = match choices {
                Choices::List(list) => VarError::invalid_choice_list(name, list),
                Choices::Predicate(_) => VarError::invalid_choice(name),
            };
            return Err(report_failure(settings, env, err));
        }
    }

    if let Some(predicate) = &options.validate
        && !run_predicate(predicate, &value)
    {
        return Err(report_failure(
            settings,
            env,
            VarError::CustomFailed {
                name: name.to_string(),
            },
        ));
    }

    Ok(value)
}

/// The type the engine will coerce to: the per-call tag, defaulting to
/// string, with the `coerce_types` setting as the master off switch.
pub(crate) fn effective_type(settings: &Settings, options: &VarOptions) -> VarType {
    if settings.coerce_types {
        options.ty.unwrap_or_default()
    } else {
        VarType::String
    }
}

/// Coerce `text` to `ty`. Shared between validation (where failures are
/// errors) and default resolution (where failures fall back to the raw
/// default).
pub(crate) fn coerce_text(
    name: &str,
    text: &str,
    ty: VarType,
    boolean_strict: bool,
) -> Result<Value, VarError> {
    match ty {
        VarType::String => Ok(Value::Str(text.to_string())),
        VarType::Boolean => parse_bool(text, boolean_strict)
            .map(Value::Bool)
            .ok_or_else(|| VarError::invalid_boolean(name, text)),
        // i64 parsing accepts exactly an optional sign followed by decimal
        // digits, which is the contract here: no decimal point, no
        // exponent, no surrounding garbage.
        VarType::Int => text
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| VarError::invalid_integer(name, text)),
        VarType::Number => match text.parse::<f64>() {
            Ok(number) if !number.is_nan() => Ok(Value::Float(number)),
            _ => Err(VarError::invalid_number(name, text)),
        },
    }
}

fn parse_bool(text: &str, strict: bool) -> Option<bool> {
    let lower = text.to_ascii_lowercase();
    if strict {
        match lower.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    } else if TRUE_WORDS.contains(&lower.as_str()) {
        Some(true)
    } else if FALSE_WORDS.contains(&lower.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Run a caller-supplied predicate, counting a panic as a non-match. This
/// containment is part of the contract: a throwing choice set or validator
/// means "rejected", never a distinct error.
fn run_predicate(predicate: &ValuePredicate, value: &Value) -> bool {
    catch_unwind(AssertUnwindSafe(|| predicate(value))).unwrap_or(false)
}
