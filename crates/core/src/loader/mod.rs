//! `.env` file loading.
//!
//! Responsibilities:
//! - Resolve which files to read (explicit paths, configured paths, or the
//!   default `.env`) and expand a leading `~`.
//! - Parse flat `KEY=VALUE` lines (see `parse`) and build the loaded map.
//! - Apply loaded values to the accessor under the override rules.
//!
//! Does NOT handle:
//! - Multi-line values, variable expansion, or inline comments — the format
//!   is deliberately minimal.
//!
//! Invariants:
//! - Missing or unreadable files are normal, never an error.
//! - Paths are processed strictly sequentially so later files
//!   deterministically overwrite earlier ones in the map and the accessor.
//! - Real environment values win over file values unless `overwrite` is
//!   explicitly requested.

mod parse;


use std::path::PathBuf;

use indexmap::IndexMap;

use crate::accessor::EnvAccessor;
use crate::constants::DEFAULT_ENV_FILE;
use crate::settings::Settings;

/// Key-value pairs read from the file(s) in one load, in insertion order.
/// The last occurrence of a key across all files wins, in place.
pub type LoadedMap = IndexMap<String, String>;

/// Options for one load call.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit paths, in order. Takes precedence over the configured
    /// `env_file_paths`, which in turn beat the default `.env`.
    pub paths: Option<Vec<String>>,
    /// Write file values over pre-existing environment values.
    pub overwrite: bool,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(self, path: impl Into<String>) -> Self {
        self.with_paths([path])
    }

    pub fn with_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.paths = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Read, parse, and apply the configured `.env` files. Returns the full
/// loaded map, including keys the override rules kept out of the accessor.
pub(crate) async fn load_env(
    env: &dyn EnvAccessor,
    settings: &Settings,
    options: &LoadOptions,
) -> LoadedMap {
    let mut loaded = LoadedMap::new();

    for path in resolve_paths(settings, options) {
        let path = expand_tilde(&path, env);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "skipping env file");
                continue;
            }
        };
        for (key, value) in parse::parse_content(&content) {
            loaded.insert(key, value);
        }
    }

    // Apply once per key against the pre-load environment, so later files
    // overwrite earlier ones while real environment values keep winning
    // unless overwrite was requested.
    for (key, value) in &loaded {
        if options.overwrite || env.get(key).is_none() {
            env.set(key, value);
        }
    }

    loaded
}

fn resolve_paths(settings: &Settings, options: &LoadOptions) -> Vec<String> {
    if let Some(paths) = &options.paths {
        paths.clone()
    } else if !settings.env_file_paths.is_empty() {
        settings.env_file_paths.clone()
    } else {
        vec![DEFAULT_ENV_FILE.to_string()]
    }
}

/// Expand a leading `~` segment to the host's home directory. When no home
/// is resolvable the `~` is simply stripped. Segments like `~user` are left
/// untouched.
fn expand_tilde(path: &str, env: &dyn EnvAccessor) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\'))
    {
        return match env.home_dir() {
            Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
            None => PathBuf::from(rest),
        };
    }
    PathBuf::from(path)
}
