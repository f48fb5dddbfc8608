//! Tests for the checker, validator, and resolver.
//!
//! Responsibilities:
//! - Test presence/emptiness gating and message overrides.
//! - Test every coercion rule and constraint step, including the failure
//!   side effects.
//! - Test default resolution precedence.
//!
//! Invariants:
//! - Tests run against `MemoryEnv` so no process-global state is touched
//!   and no serialization is needed.

pub mod check_tests;

use crate::accessor::MemoryEnv;
use crate::settings::Settings;

/// A memory-backed namespace seeded with `vars`.
pub fn env_with(vars: &[(&str, &str)]) -> MemoryEnv {
    MemoryEnv::with_vars(vars.iter().copied())
}

/// Default settings, for the common case.
pub fn settings() -> Settings {
    Settings::default()
}
