//! Validation/coercion engine, existence checker, and default resolver.
//!
//! Responsibilities:
//! - Gate on presence/non-emptiness (`check`).
//! - Turn raw strings into typed values under constraints (`validate`).
//! - Decide between defaults, absence, and full validation (`resolve`).
//! - Apply the failure side effects (verbose routing, exit-on-error)
//!   uniformly before any error is returned.
//!
//! Does NOT handle:
//! - `.env` file parsing or application (see `loader`).
//! - Ownership of settings or the accessor (see `session`).

mod check;
mod resolve;
mod validate;

#[cfg(test)]
mod tests;

pub(crate) use check::check_var;
pub(crate) use resolve::resolve_var;
pub(crate) use validate::validate_var;

use crate::accessor::EnvAccessor;
use crate::constants::EXIT_ON_ERROR_STATUS;
use crate::error::VarError;
use crate::settings::Settings;

/// Apply the configured failure side effects and hand the error back.
///
/// Verbose mode routes the message to the log side channel; the message
/// already obeys the no-raw-value rule, so it is logged as-is. When
/// `exit_on_error` is set and the host can terminate, termination is
/// requested before the error is raised; if the host cannot (or the request
/// returns), the error propagates normally.
pub(crate) fn report_failure(
    settings: &Settings,
    env: &dyn EnvAccessor,
    err: VarError,
) -> VarError {
    if settings.verbose {
        tracing::error!(variable = err.name(), "{err}");
    }
    if settings.exit_on_error && env.can_terminate() {
        env.terminate(EXIT_ON_ERROR_STATUS);
    }
    err
}
