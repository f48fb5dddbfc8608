//! Tests for the existence checker.

use super::{env_with, settings};
use crate::accessor::MemoryEnv;
use crate::engine::check_var;
use crate::error::VarError;
use crate::options::CheckOptions;
use crate::settings::{Settings, SettingsOverrides};

#[test]
fn test_missing_variable_fails_with_not_defined() {
    let env = MemoryEnv::new();
    let result = check_var(&env, &settings(), "ABSENT", &CheckOptions::default());

    match result {
        Err(VarError::Missing { name, message }) => {
            assert_eq!(name, "ABSENT");
            assert!(
                message.contains("not defined"),
                "default template should say not defined, got: {message}"
            );
        }
        other => panic!("expected Missing error, got {other:?}"),
    }
}

#[test]
fn test_whitespace_only_value_fails_with_empty() {
    let env = env_with(&[("TEST_EMPTY", "   ")]);
    let result = check_var(&env, &settings(), "TEST_EMPTY", &CheckOptions::default());

    match result {
        Err(VarError::Empty { message, .. }) => {
            assert!(
                message.contains("empty"),
                "message should mention emptiness, got: {message}"
            );
        }
        other => panic!("expected Empty error, got {other:?}"),
    }
}

#[test]
fn test_allow_empty_accepts_blank_value() {
    let env = env_with(&[("TEST_EMPTY", "   ")]);
    let options = CheckOptions::default().with_allow_empty(true);

    assert!(check_var(&env, &settings(), "TEST_EMPTY", &options).is_ok());
}

#[test]
fn test_not_required_succeeds_even_when_missing() {
    let env = MemoryEnv::new();
    let options = CheckOptions::default().with_required(false);

    assert!(check_var(&env, &settings(), "ABSENT", &options).is_ok());
}

#[test]
fn test_custom_message_replaces_default() {
    let env = MemoryEnv::new();
    let options = CheckOptions::default().with_message("API_KEY must be provisioned first");

    let err = check_var(&env, &settings(), "API_KEY", &options).unwrap_err();
    assert_eq!(err.to_string(), "API_KEY must be provisioned first");
}

#[test]
fn test_exit_on_error_requests_termination_when_host_supports_it() {
    let env = MemoryEnv::new().terminating();
    let mut settings = Settings::default();
    settings.apply(SettingsOverrides {
        exit_on_error: Some(true),
        ..Default::default()
    });

    let result = check_var(&env, &settings, "ABSENT", &CheckOptions::default());

    // The host records the request; the error is still raised afterward.
    assert_eq!(env.last_exit(), Some(1));
    assert!(matches!(result, Err(VarError::Missing { .. })));
}

#[test]
fn test_exit_on_error_skipped_when_host_cannot_terminate() {
    let env = MemoryEnv::new();
    let mut settings = Settings::default();
    settings.apply(SettingsOverrides {
        exit_on_error: Some(true),
        ..Default::default()
    });

    let result = check_var(&env, &settings, "ABSENT", &CheckOptions::default());

    assert_eq!(env.last_exit(), None);
    assert!(matches!(result, Err(VarError::Missing { .. })));
}
