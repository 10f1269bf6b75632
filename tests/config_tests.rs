use std::env;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use topk::config;

// Tests in this file mutate API_BASE_URL; run them one at a time.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://shop.example.com/api/"),
        "https://shop.example.com/api"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://shop.example.com/api///"),
        "https://shop.example.com/api"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://shop.example.com/  "),
        "https://shop.example.com"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url(""), "http://localhost:5000");
    assert_eq!(config::sanitize_base_url("   "), "http://localhost:5000");
}

#[test]
fn test_get_api_base_url_with_trailing_slash() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("API_BASE_URL", "http://shop.internal:5000/");

    assert_eq!(config::get_api_base_url(), "http://shop.internal:5000");

    env::remove_var("API_BASE_URL");
}

#[test]
fn test_get_api_base_url_uses_default() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("API_BASE_URL");

    // DEFAULT_API_BASE_URL is empty, so sanitize_base_url returns localhost fallback
    assert_eq!(config::get_api_base_url(), "http://localhost:5000");
}

#[test]
fn test_override_wins_over_environment() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("API_BASE_URL", "http://from-env:5000");

    assert_eq!(
        config::resolve_api_base_url(Some("http://from-flag:9000/")),
        "http://from-flag:9000"
    );
    // A blank override falls through to the environment
    assert_eq!(config::resolve_api_base_url(Some("  ")), "http://from-env:5000");
    assert_eq!(config::resolve_api_base_url(None), "http://from-env:5000");

    env::remove_var("API_BASE_URL");
}
