//! Runtime-polymorphic access to the host's variable namespace.
//!
//! Responsibilities:
//! - Define the capability interface the engine and loader depend on:
//!   get/set over the namespace, home directory resolution, and the host's
//!   ability to terminate the process.
//! - Provide the process-backed implementation and a pure in-memory
//!   fallback for hosts without a process namespace (and for tests).
//!
//! Does NOT handle:
//! - Validation or coercion of values (see `engine`).
//!
//! Invariants:
//! - The accessor is selected once at startup; the engine never inspects
//!   the runtime itself.
//! - `set` assumes single-threaded use at mutation time (see crate docs).

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::constants::HOME_VAR;

/// Which kind of namespace an accessor is backed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeKind {
    /// The host process environment.
    Process,
    /// A standalone in-memory map.
    Memory,
}

/// Capability interface over a key-value environment namespace.
pub trait EnvAccessor: Send + Sync {
    /// Read a variable; `None` when absent (or not representable as UTF-8).
    fn get(&self, name: &str) -> Option<String>;

    /// Write a variable into the namespace.
    fn set(&self, name: &str, value: &str);

    /// The host's home directory, if one is resolvable.
    fn home_dir(&self) -> Option<PathBuf>;

    fn kind(&self) -> RuntimeKind;

    /// Whether the host can terminate the process on demand.
    fn can_terminate(&self) -> bool {
        false
    }

    /// Ask the host to terminate with `code`. Hosts that cannot terminate
    /// ignore the request and control returns to the caller.
    fn terminate(&self, _code: i32) {}
}

/// Select the accessor for the current host. Std targets always have a
/// process environment; embedders without one construct a [`MemoryEnv`]
/// directly instead.
pub fn detect() -> Box<dyn EnvAccessor> {
    Box::new(ProcessEnv)
}

/// Accessor backed by the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvAccessor for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn set(&self, name: &str, value: &str) {
        // Mutating the process environment is unsafe since edition 2024;
        // callers hold the documented single-threaded-mutation contract.
        unsafe { std::env::set_var(name, value) };
    }

    fn home_dir(&self) -> Option<PathBuf> {
        std::env::var(HOME_VAR)
            .ok()
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(|| directories::UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf()))
    }

    fn kind(&self) -> RuntimeKind {
        RuntimeKind::Process
    }

    fn can_terminate(&self) -> bool {
        true
    }

    fn terminate(&self, code: i32) {
        std::process::exit(code);
    }
}

/// Pure in-memory accessor: the fallback for hosts offering no process
/// namespace, and the workhorse for tests that must not touch real
/// environment state.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: Mutex<HashMap<String, String>>,
    terminates: bool,
    last_exit: Mutex<Option<i32>>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the namespace from an iterator of pairs.
    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: Mutex::new(vars),
            ..Self::default()
        }
    }

    /// Mark this accessor as termination-capable. Termination requests are
    /// recorded instead of killing the process, so tests can observe
    /// `exit_on_error` behavior.
    pub fn terminating(mut self) -> Self {
        self.terminates = true;
        self
    }

    /// The most recent exit code requested through [`EnvAccessor::terminate`].
    pub fn last_exit(&self) -> Option<i32> {
        *self.last_exit.lock().expect("exit lock poisoned")
    }
}

impl EnvAccessor for MemoryEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.lock().expect("vars lock poisoned").get(name).cloned()
    }

    fn set(&self, name: &str, value: &str) {
        self.vars
            .lock()
            .expect("vars lock poisoned")
            .insert(name.to_string(), value.to_string());
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.get(HOME_VAR).map(PathBuf::from)
    }

    fn kind(&self) -> RuntimeKind {
        RuntimeKind::Memory
    }

    fn can_terminate(&self) -> bool {
        self.terminates
    }

    fn terminate(&self, code: i32) {
        *self.last_exit.lock().expect("exit lock poisoned") = Some(code);
    }
}
