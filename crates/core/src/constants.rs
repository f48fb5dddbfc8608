//! Centralized constants for the envcheck workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Loader Defaults
// =============================================================================

/// Default `.env` file name used when neither explicit paths nor configured
/// paths are available.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Conventional HOME-style variable consulted for `~` expansion.
pub const HOME_VAR: &str = "HOME";

// =============================================================================
// Error Reporting
// =============================================================================

/// Maximum characters of a raw value echoed back in type-mismatch messages.
/// Longer values are truncated to bound information leakage from secrets.
pub const VALUE_PREVIEW_MAX_CHARS: usize = 16;

/// Marker appended to a truncated value echo.
pub const VALUE_PREVIEW_ELLIPSIS: &str = "...";

/// Exit status requested from the host when `exit_on_error` fires.
pub const EXIT_ON_ERROR_STATUS: i32 = 1;

// =============================================================================
// Boolean Vocabulary
// =============================================================================

/// Loose-mode words accepted as `true` (case-insensitive).
pub const TRUE_WORDS: &[&str] = &["true", "1", "yes", "y", "on"];

/// Loose-mode words accepted as `false` (case-insensitive).
pub const FALSE_WORDS: &[&str] = &["false", "0", "no", "n", "off"];
