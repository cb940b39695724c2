use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_client::config::{ClientConfig, parse_log_level};
use std::{env, sync::Mutex, time::Duration};
use tracing::Level;

const VARS: [&str; 5] = [
    "API_BASE_URL",
    "API_TOKEN",
    "LOG_LEVEL",
    "API_REQUEST_TIMEOUT_SECONDS",
    "CACHE_TTL_SECONDS",
];

// The process environment is shared by every test thread
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with exactly `vars` set among the client variables, restoring the
/// previous values afterwards.
fn with_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let saved: Vec<(&str, Option<String>)> = VARS.iter().map(|&k| (k, env::var(k).ok())).collect();

    // SAFETY: all environment access in this test binary holds ENV_LOCK
    unsafe {
        for key in VARS {
            env::remove_var(key);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
    }

    let result = f();

    unsafe {
        for (key, value) in saved {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }
    result
}

#[test]
fn test_defaults() {
    let config = ClientConfig::new("http://localhost:3000");

    assert_eq!(config.api_token, None);
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.cache_ttl(), Duration::from_secs(60));
}

#[rstest]
#[case("http://localhost:3000", "/api/me", "http://localhost:3000/api/me")]
#[case("http://localhost:3000/", "/api/me", "http://localhost:3000/api/me")]
#[case("https://book.test/v1/", "api/categories", "https://book.test/v1/api/categories")]
fn test_url_joining(#[case] base: &str, #[case] path: &str, #[case] expected: &str) {
    let config = ClientConfig::new(base);

    assert_eq!(config.url(path), expected);
}

#[test]
fn test_builder_overrides() {
    let config = ClientConfig::new("http://localhost")
        .with_token(Some("secret".to_string()))
        .with_log_level(Level::DEBUG)
        .with_request_timeout(5)
        .with_cache_ttl(0);

    assert_eq!(config.api_token.as_deref(), Some("secret"));
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
    assert_eq!(config.cache_ttl(), Duration::ZERO);
}

#[rstest]
#[case("trace", Level::TRACE)]
#[case("DEBUG", Level::DEBUG)]
#[case("warn", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("loud", Level::INFO)]
fn test_parse_log_level(#[case] value: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(value), expected);
}

#[test]
fn test_from_env_defaults() {
    let config = with_env(&[("API_BASE_URL", "http://localhost:3000/")], ClientConfig::from_env)
        .unwrap();

    assert_eq!(config.api_base_url, "http://localhost:3000");
    assert_eq!(config.api_token, None);
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.cache_ttl(), Duration::from_secs(60));
}

#[test]
fn test_from_env_reads_every_variable() {
    let config = with_env(
        &[
            ("API_BASE_URL", "https://book.test"),
            ("API_TOKEN", "secret"),
            ("LOG_LEVEL", "debug"),
            ("API_REQUEST_TIMEOUT_SECONDS", "5"),
            ("CACHE_TTL_SECONDS", "0"),
        ],
        ClientConfig::from_env,
    )
    .unwrap();

    assert_eq!(config.api_token.as_deref(), Some("secret"));
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
    assert_eq!(config.cache_ttl(), Duration::ZERO);
}

#[test]
fn test_from_env_requires_base_url() {
    let result = with_env(&[], ClientConfig::from_env);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("API_BASE_URL"));
}

#[test]
fn test_from_env_empty_token_is_anonymous() {
    let config = with_env(
        &[("API_BASE_URL", "http://localhost"), ("API_TOKEN", "")],
        ClientConfig::from_env,
    )
    .unwrap();

    assert_eq!(config.api_token, None);
}

#[rstest]
#[case("API_REQUEST_TIMEOUT_SECONDS")]
#[case("CACHE_TTL_SECONDS")]
fn test_from_env_rejects_non_numeric_durations(#[case] var: &str) {
    let result = with_env(
        &[("API_BASE_URL", "http://localhost"), (var, "soon")],
        ClientConfig::from_env,
    );

    let err = result.unwrap_err();
    assert!(err.to_string().contains(var));
}
