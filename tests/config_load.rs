// tests/config_load.rs
//
// Configuration loading: defaults, overrides, the "ENV" key indirection,
// and fail-fast behavior on missing or invalid settings.

use std::fs;
use std::path::PathBuf;

use whatsnew::config::{AppConfig, RecencyWindow};

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("whatsnew_{}_{}.json", name, std::process::id()));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn minimal_config_gets_defaults() {
    let path = write_temp_config("minimal", r#"{ "perplexityApiKey": "pplx-abc123" }"#);
    let cfg = AppConfig::load_from_file(&path).expect("load minimal config");
    let _ = fs::remove_file(&path);

    assert_eq!(cfg.perplexity_api_key, "pplx-abc123");
    assert_eq!(cfg.max_results, 5);
    assert_eq!(cfg.recency_window, RecencyWindow::Day);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.bind_addr, "127.0.0.1:8000");
}

#[test]
fn explicit_settings_override_defaults() {
    let path = write_temp_config(
        "full",
        r#"{
            "perplexityApiKey": "pplx-abc123",
            "max_results": 3,
            "recency_window": "week",
            "request_timeout_secs": 10,
            "bind_addr": "0.0.0.0:9000"
        }"#,
    );
    let cfg = AppConfig::load_from_file(&path).expect("load full config");
    let _ = fs::remove_file(&path);

    assert_eq!(cfg.max_results, 3);
    assert_eq!(cfg.recency_window, RecencyWindow::Week);
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.bind_addr, "0.0.0.0:9000");
}

#[test]
fn out_of_range_values_fall_back_to_defaults() {
    let path = write_temp_config(
        "zeroes",
        r#"{ "perplexityApiKey": "k", "max_results": 0, "request_timeout_secs": 0 }"#,
    );
    let cfg = AppConfig::load_from_file(&path).expect("load config");
    let _ = fs::remove_file(&path);

    assert_eq!(cfg.max_results, 5);
    assert_eq!(cfg.request_timeout_secs, 30);
}

#[test]
fn env_indirection_resolves_and_fails_without_var() {
    // Both halves in one test: env vars are process-global and tests run in
    // parallel threads within this binary.
    let path = write_temp_config("env", r#"{ "perplexityApiKey": "ENV" }"#);

    std::env::set_var("PERPLEXITY_API_KEY", "from-env-123");
    let cfg = AppConfig::load_from_file(&path).expect("load with env var set");
    assert_eq!(cfg.perplexity_api_key, "from-env-123");

    std::env::remove_var("PERPLEXITY_API_KEY");
    let err = AppConfig::load_from_file(&path).expect_err("must fail without env var");
    assert!(err.to_string().contains("PERPLEXITY_API_KEY"));

    let _ = fs::remove_file(&path);
}

#[test]
fn empty_api_key_is_rejected() {
    let path = write_temp_config("empty_key", r#"{ "perplexityApiKey": "   " }"#);
    let err = AppConfig::load_from_file(&path).expect_err("blank key must fail");
    let _ = fs::remove_file(&path);
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn missing_file_is_an_error() {
    let err = AppConfig::load_from_file("definitely/not/here.json")
        .expect_err("missing file must fail");
    assert!(err.to_string().contains("Configuration file not found"));
}

#[test]
fn invalid_json_is_an_error() {
    let path = write_temp_config("bad_json", "{ not json");
    let err = AppConfig::load_from_file(&path).expect_err("bad json must fail");
    let _ = fs::remove_file(&path);
    assert!(err.to_string().contains("Invalid config"));
}
