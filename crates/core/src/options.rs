//! Per-call option bags for the checker, the engine, and the resolver.
//!
//! Options are ephemeral, scoped to a single call, and always take
//! precedence over session [`Settings`](crate::settings::Settings).

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::value::{Value, VarType};

/// Options for the existence checker.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOptions {
    /// When false, the check succeeds trivially.
    pub required: bool,
    /// Accept values that are blank after trimming.
    pub allow_empty: bool,
    /// Replacement for the entire default failure message.
    pub message: Option<String>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            required: true,
            allow_empty: false,
            message: None,
        }
    }
}

impl CheckOptions {
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// A regular expression constraint that must match the whole value.
///
/// The caller's source is anchored with `\A(?:…)\z` at construction so the
/// full-match contract holds; messages echo the original source text.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    anchored: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let anchored = Regex::new(&format!(r"\A(?:{source})\z"))?;
        Ok(Self {
            source: source.to_string(),
            anchored,
        })
    }

    /// The source text as supplied by the caller, for error messages.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn matches(&self, text: &str) -> bool {
        self.anchored.is_match(text)
    }
}

impl FromStr for Pattern {
    type Err = regex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::new(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Predicate over a coerced value. A panicking predicate counts as a failed
/// check rather than propagating; callers rely on that containment.
pub type ValuePredicate = Box<dyn Fn(&Value) -> bool + Send + Sync>;

/// Allowed-value constraint: an enumerated list (membership by equality
/// against the coerced value) or an arbitrary predicate.
pub enum Choices {
    List(Vec<Value>),
    Predicate(ValuePredicate),
}

/// Options for validation and default resolution. `required` and `default`
/// are consumed only by the resolver; everything else drives the engine.
#[derive(Default)]
pub struct VarOptions {
    pub ty: Option<VarType>,
    pub pattern: Option<Pattern>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub choices: Option<Choices>,
    pub validate: Option<ValuePredicate>,
    /// Per-call override for the session-level boolean strictness.
    pub boolean_strict: Option<bool>,
    /// Explicit requiredness; when unset, the variable is required exactly
    /// when no default was supplied.
    pub required: Option<bool>,
    pub default: Option<Value>,
}

impl VarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, ty: VarType) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn with_choices<I, V>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.choices = Some(Choices::List(allowed.into_iter().map(Into::into).collect()));
        self
    }

    pub fn with_choices_fn<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.choices = Some(Choices::Predicate(Box::new(predicate)));
        self
    }

    pub fn with_validator<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.validate = Some(Box::new(predicate));
        self
    }

    pub fn with_boolean_strict(mut self, strict: bool) -> Self {
        self.boolean_strict = Some(strict);
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}
