//! The process-level composition root.
//!
//! `EnvSession` owns the one live [`Settings`] instance and the accessor
//! selected for this host, and exposes the public operations over them.
//! There is no hidden global: callers construct a session once and thread
//! it (or a reference) to wherever variables are resolved.

use crate::accessor::{self, EnvAccessor};
use crate::engine;
use crate::error::VarError;
use crate::loader::{self, LoadOptions, LoadedMap};
use crate::options::{CheckOptions, VarOptions};
use crate::settings::{Settings, SettingsOverrides};
use crate::value::Value;

pub struct EnvSession {
    settings: Settings,
    env: Box<dyn EnvAccessor>,
}

impl Default for EnvSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvSession {
    /// A session over the accessor detected for this host, with default
    /// settings.
    pub fn new() -> Self {
        Self::with_accessor(accessor::detect())
    }

    /// A session over a caller-supplied accessor (an in-memory namespace,
    /// a test double, or an embedder's own implementation).
    pub fn with_accessor(env: Box<dyn EnvAccessor>) -> Self {
        Self {
            settings: Settings::default(),
            env,
        }
    }

    /// Shallow-merge `overrides` into the live settings. Unspecified fields
    /// keep their current values; nothing is ever reset automatically.
    pub fn configure(&mut self, overrides: SettingsOverrides) {
        self.settings.apply(overrides);
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn accessor(&self) -> &dyn EnvAccessor {
        self.env.as_ref()
    }

    /// Check that a variable exists (and is non-blank unless allowed).
    pub fn check(&self, name: &str, options: &CheckOptions) -> Result<(), VarError> {
        engine::check_var(self.env.as_ref(), &self.settings, name, options)
    }

    /// Validate and coerce a variable. Never accepts a blank variable.
    pub fn validate(&self, name: &str, options: &VarOptions) -> Result<Value, VarError> {
        engine::validate_var(self.env.as_ref(), &self.settings, name, options)
    }

    /// Resolve a variable with default handling: `Ok(None)` when the
    /// variable is optional and absent with no default.
    pub fn get(&self, name: &str, options: &VarOptions) -> Result<Option<Value>, VarError> {
        engine::resolve_var(self.env.as_ref(), &self.settings, name, options)
    }

    /// Load `.env` file(s) into the accessor and return the full map of
    /// parsed pairs, including those the override rules left unapplied.
    pub async fn load_env(&self, options: &LoadOptions) -> LoadedMap {
        loader::load_env(self.env.as_ref(), &self.settings, options).await
    }
}
