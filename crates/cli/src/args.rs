//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Translate arguments into engine options (type tag, pattern with
//!   optional trailing flags, default value, strictness).
//!
//! Non-responsibilities:
//! - Does not resolve variables (see `main`).

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use envcheck_core::{Pattern, VarOptions, VarType};

#[derive(Parser)]
#[command(name = "envcheck")]
#[command(about = "Read, validate, and coerce process environment variables", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envcheck --var PORT --type int\n  envcheck --var DEBUG --type boolean --default false\n  envcheck --var API_KEY --pattern '[A-Za-z0-9_-]{16,}'\n  envcheck --var LOG_LEVEL --pattern 'debug|info|warn|error/i' --default info\n"
)]
pub struct Cli {
    /// Name of the environment variable to resolve
    #[arg(short = 'n', long = "var", visible_alias = "name", value_name = "NAME")]
    pub var: Option<String>,

    /// Coerce the value to this type
    #[arg(short = 't', long = "type", value_enum, default_value_t = TypeArg::String)]
    pub ty: TypeArg,

    /// Regular expression the value must fully match, with optional
    /// trailing flags (e.g. 'debug|info/i')
    #[arg(short, long, value_name = "REGEX[/flags]")]
    pub pattern: Option<String>,

    /// Fallback when the variable is unset or blank; with no VALUE the
    /// variable becomes optional and may resolve to nothing
    #[arg(short, long, value_name = "VALUE", num_args = 0..=1)]
    pub default: Option<Option<String>>,

    /// Accept only the literals "true" and "false" for booleans
    #[arg(long)]
    pub boolean_strict: bool,

    /// Report validation failures through the log side channel
    #[arg(short, long)]
    pub verbose: bool,
}

/// Type tags accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    String,
    #[value(alias = "integer")]
    Int,
    Number,
    Boolean,
}

impl From<TypeArg> for VarType {
    fn from(ty: TypeArg) -> Self {
        match ty {
            TypeArg::String => VarType::String,
            TypeArg::Int => VarType::Int,
            TypeArg::Number => VarType::Number,
            TypeArg::Boolean => VarType::Boolean,
        }
    }
}

impl Cli {
    /// Translate the parsed arguments into engine options.
    pub fn to_options(&self) -> Result<VarOptions> {
        let mut options = VarOptions::new().with_type(self.ty.into());

        if let Some(spec) = &self.pattern {
            options = options.with_pattern(parse_pattern(spec)?);
        }
        match &self.default {
            // `--default VALUE`: a string default, coerced downstream.
            Some(Some(value)) => options = options.with_default(value.clone()),
            // Bare `--default`: optional with nothing to fall back to.
            Some(None) => options = options.with_required(false),
            None => {}
        }
        if self.boolean_strict {
            options = options.with_boolean_strict(true);
        }

        Ok(options)
    }
}

/// Compile a `REGEX` or `REGEX/flags` spec. Trailing flags map onto the
/// engine's inline flags.
fn parse_pattern(spec: &str) -> Result<Pattern> {
    let (source, flags) = split_flags(spec);
    let source = if flags.is_empty() {
        source.to_string()
    } else {
        format!("(?{flags}){source}")
    };
    Pattern::new(&source).with_context(|| format!("invalid --pattern '{spec}'"))
}

/// Split a trailing `/flags` suffix. Only suffixes made entirely of known
/// flag letters count; anything else is part of the pattern itself.
fn split_flags(spec: &str) -> (&str, &str) {
    if let Some(idx) = spec.rfind('/') {
        let (head, tail) = (&spec[..idx], &spec[idx + 1..]);
        if !head.is_empty()
            && !tail.is_empty()
            && tail.chars().all(|c| matches!(c, 'i' | 'm' | 's' | 'x'))
        {
            return (head, tail);
        }
    }
    (spec, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_flags_recognizes_flag_suffix() {
        assert_eq!(split_flags("debug|info/i"), ("debug|info", "i"));
        assert_eq!(split_flags("a/b/is"), ("a/b", "is"));
    }

    #[test]
    fn test_split_flags_leaves_plain_patterns_alone() {
        assert_eq!(split_flags("no-flags"), ("no-flags", ""));
        assert_eq!(split_flags("path/to"), ("path/to", ""));
        assert_eq!(split_flags("/leading"), ("/leading", ""));
        assert_eq!(split_flags("trailing/"), ("trailing/", ""));
    }

    #[test]
    fn test_parse_pattern_applies_case_insensitive_flag() {
        let pattern = parse_pattern("debug|info/i").unwrap();
        assert_eq!(pattern.source(), "(?i)debug|info");
    }

    #[test]
    fn test_parse_pattern_rejects_bad_regex() {
        assert!(parse_pattern("(unclosed").is_err());
    }
}
