//! Environment variable reading, validation, coercion, and `.env` loading.
//!
//! This crate provides the pieces needed to treat process environment
//! variables as typed configuration inputs: an accessor abstraction over the
//! host's variable namespace, a validation/coercion engine, a
//! default-resolution layer, and a minimal line-oriented `.env` loader.
//!
//! The process-wide mutable pieces (settings and the accessor) are owned by
//! an explicit [`EnvSession`] rather than hidden globals; callers construct
//! one at their composition root and thread it where needed.

pub mod accessor;
pub mod constants;
mod engine;
mod error;
mod loader;
mod options;
mod session;
mod settings;
mod value;

pub use accessor::{EnvAccessor, MemoryEnv, ProcessEnv, RuntimeKind, detect};
pub use error::VarError;
pub use loader::{LoadOptions, LoadedMap};
pub use options::{CheckOptions, Choices, Pattern, ValuePredicate, VarOptions};
pub use session::EnvSession;
pub use settings::{Settings, SettingsOverrides};
pub use value::{UnknownVarType, Value, VarType};
